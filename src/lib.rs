//! A value of type `T`, or nothing
//!
//! [`Optional`] expresses a value that might be absent, with structural
//! equality, a type-tagged [`Display`](std::fmt::Display) and a set of
//! combinators that never call their closures when there is nothing to
//! call them with.
//!
//! ```
//! use optional::{optional, Lookup, Optional, OptionalIterExt};
//! use std::collections::HashMap;
//!
//! let stock = HashMap::from([("apple", 3), ("pear", 0)]);
//!
//! let total = optional! {
//!     let apples = stock.try_get("apple")?;
//!     let pears = stock.try_get("pear")?;
//!     apples + pears
//! };
//! assert_eq!(total, Optional::some(3));
//!
//! let in_stock: Vec<_> = ["apple", "pear", "plum"]
//!     .into_iter()
//!     .choose(|name| {
//!         stock.try_get(name).select_many(|&n| {
//!             if n > 0 { Optional::some(name) } else { Optional::none() }
//!         })
//!     })
//!     .collect();
//! assert_eq!(in_stock, ["apple"]);
//! ```

// Needed for the optional! macro
extern crate self as optional;

mod builder;
mod combinators;
mod error;
mod future;
mod iter;
mod lookup;
mod value;

pub use builder::OptionalBuilder;
pub use combinators::NullableExt;
pub use error::Error;
pub use future::try_async;
pub use iter::{
    flatten, generate, Choose, CollectSome, Generate, OptionalIterExt,
};
pub use lookup::Lookup;
pub use value::Optional;
pub use optional_macros::optional;
