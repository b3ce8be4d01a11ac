//! Computation builder for chaining optional computations
//!
//! The [`optional!`](macro@crate::optional) macro is the usual way in; the
//! builder is what it would look like written out by hand.

use crate::Optional;

/// The three primitives of an optional computation
///
/// `bind` is [`Optional::select_many`], `ret` is [`Optional::Some`] and
/// `delay` runs its closure right away.
#[derive(Clone, Copy, Debug, Default)]
pub struct OptionalBuilder;

impl OptionalBuilder {
    pub fn bind<X, Y>(
        &self,
        x: Optional<X>,
        f: impl FnOnce(X) -> Optional<Y>,
    ) -> Optional<Y> {
        x.select_many(f)
    }

    pub fn ret<X>(&self, x: X) -> Optional<X> {
        Optional::Some(x)
    }

    pub fn delay<X>(&self, f: impl FnOnce() -> X) -> X {
        f()
    }
}
