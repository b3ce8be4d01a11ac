//! Combinators on a single [`Optional`]
//!
//! None of these call the supplied closure when there is no value. A
//! closure may therefore close over things that are only valid when a
//! value exists.

use std::str::FromStr;

use log::debug;

use crate::value::{type_name, Optional};

impl<T> Optional<T> {
    /// Project the payload, if any
    ///
    /// ```
    /// use optional::Optional;
    ///
    /// let len = Optional::some("test").select(str::len);
    /// assert_eq!(len, Optional::some(4));
    /// ```
    pub fn select<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        match self {
            Self::Some(x) => Optional::Some(f(x)),
            Self::None => Optional::None,
        }
    }

    /// Sequentially compose with a computation that might not produce a
    /// value, also known as bind
    pub fn select_many<U>(
        self,
        f: impl FnOnce(T) -> Optional<U>,
    ) -> Optional<U> {
        match self {
            Self::Some(x) => f(x),
            Self::None => Optional::None,
        }
    }

    /// Run `f`, keeping its value on success and discarding its error
    ///
    /// Callers that need the error should use the `Result` directly, or
    /// [`try_async`](crate::try_async) which hands it to a handler.
    pub fn attempt<E>(f: impl FnOnce() -> Result<T, E>) -> Self {
        match f() {
            Ok(x) => Self::Some(x),
            Err(_) => {
                debug!("discarding error for Optional<{}>", type_name::<T>());
                Self::None
            }
        }
    }

    /// Run a fallible action on the payload
    ///
    /// The original value is returned unchanged if the action succeeds
    /// and becomes `None` if it fails.
    pub fn try_inspect<E>(
        self,
        action: impl FnOnce(&T) -> Result<(), E>,
    ) -> Self {
        let Self::Some(x) = self else {
            return Self::None;
        };
        match action(&x) {
            Ok(()) => Self::Some(x),
            Err(_) => {
                debug!("action on Optional<{}> failed", type_name::<T>());
                Self::None
            }
        }
    }

    pub fn to_nullable(self) -> Option<T> {
        self.into()
    }
}

impl<T: Default + PartialEq> Optional<T> {
    /// Treat the default value of `T` as absent
    ///
    /// `0`, `""` and other defaults become `None`, everything else is
    /// `Some`.
    pub fn from_value_or_default(value: T) -> Self {
        if value == T::default() {
            Self::None
        } else {
            Self::Some(value)
        }
    }
}

impl<T: FromStr> Optional<T> {
    /// Parse a string into `T`, with `None` for anything it rejects
    ///
    /// ```
    /// use optional::Optional;
    ///
    /// assert_eq!(Optional::<u8>::parse("12"), Optional::some(12));
    /// assert_eq!(Optional::<u8>::parse("300"), Optional::none());
    /// ```
    pub fn parse(s: &str) -> Self {
        match s.parse() {
            Ok(x) => Self::Some(x),
            Err(_) => Self::None,
        }
    }
}

/// Conversion from nullable values
pub trait NullableExt<T> {
    fn to_optional(self) -> Optional<T>;
}

impl<T> NullableExt<T> for Option<T> {
    fn to_optional(self) -> Optional<T> {
        Optional::from_option(self)
    }
}
