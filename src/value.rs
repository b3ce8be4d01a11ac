//! Defines the [`Optional`] type

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::Error;

/// A value of type `T`, or nothing
///
/// `Optional` is an immutable value container: every combinator consumes
/// it and produces a new one. Equality is structural. Two `None`s are
/// always equal, a `Some` never equals a `None` and two `Some`s are equal
/// when their payloads are.
///
/// The [`Display`](fmt::Display) output is tagged with the short name of
/// the payload type:
///
/// ```
/// use optional::Optional;
///
/// assert_eq!(Optional::some(10).to_string(), "Some<i32>(10)");
/// assert_eq!(Optional::<String>::none().to_string(), "None<String>()");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Optional<T> {
    Some(T),
    None,
}

impl<T> Optional<T> {
    /// Wrap `value` as given
    ///
    /// There is no "empty" check: `Optional::some(String::new())` holds an
    /// empty string and is distinct from [`Optional::None`].
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    pub const fn none() -> Self {
        Self::None
    }

    /// Explicit conversion of a raw value into an `Optional`
    ///
    /// This always produces `Some`. Use [`Optional::from_option`] at a
    /// boundary where the value might be absent.
    pub const fn from_value(value: T) -> Self {
        Self::Some(value)
    }

    /// Convert a nullable value into an `Optional`
    pub fn from_option(value_or_null: Option<T>) -> Self {
        match value_or_null {
            Some(x) => Self::Some(x),
            None => Self::None,
        }
    }

    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Take the payload out, failing on `None`
    ///
    /// This is the only accessor that can fail. Check [`has_value`] first
    /// or reach for [`value_or`] when a fallback exists.
    ///
    /// [`has_value`]: Optional::has_value
    /// [`value_or`]: Optional::value_or
    pub fn value(self) -> Result<T, Error> {
        match self {
            Self::Some(x) => Ok(x),
            Self::None => Err(Error::invalid_state::<T>()),
        }
    }

    /// Borrow the payload, failing on `None`
    pub fn as_value(&self) -> Result<&T, Error> {
        match self {
            Self::Some(x) => Ok(x),
            Self::None => Err(Error::invalid_state::<T>()),
        }
    }

    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Some(x) => x,
            Self::None => default,
        }
    }

    /// Like [`Optional::value_or`], but only computes the fallback when
    /// there is no payload.
    pub fn value_or_else(self, default: impl FnOnce() -> T) -> T {
        match self {
            Self::Some(x) => x,
            Self::None => default(),
        }
    }

    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(x) => Optional::Some(x),
            Self::None => Optional::None,
        }
    }

    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Self::Some(x) => Optional::Some(x),
            Self::None => Optional::None,
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Some(x) => Some(x),
            Optional::None => None,
        }
    }
}

impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // The presence flag always goes in, so a `None` cannot collide
        // with a payload that happens to hash like "nothing".
        self.has_value().hash(state);
        if let Self::Some(x) = self {
            x.hash(state);
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = type_name::<T>();
        match self {
            Self::Some(x) => write!(f, "Some<{name}>({x})"),
            Self::None => write!(f, "None<{name}>()"),
        }
    }
}

/// Short name of a type
///
/// The string returned by [`std::any::type_name`] is not always a single
/// path: references, tuples, arrays and generics all wrap paths in other
/// punctuation. Every path inside the name is cut down to its last
/// segment and the punctuation is kept, so `(i32, alloc::string::String)`
/// becomes `(i32, String)` and `&alloc::string::String` becomes `&String`.
pub(crate) fn type_name<T: ?Sized>() -> Cow<'static, str> {
    let full = std::any::type_name::<T>();
    if full.chars().all(is_path_char) {
        return Cow::Borrowed(last_segment(full));
    }

    let mut short = String::with_capacity(full.len());
    let mut rest = full;
    while !rest.is_empty() {
        let end = rest
            .find(|c: char| !is_path_char(c))
            .unwrap_or(rest.len());
        let (path, tail) = rest.split_at(end);
        short.push_str(last_segment(path));

        let mut tail = tail.chars();
        if let Some(c) = tail.next() {
            short.push(c);
        }
        rest = tail.as_str();
    }
    Cow::Owned(short)
}

fn is_path_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == ':'
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use insta::assert_snapshot;

    use super::{type_name, Optional};
    use crate::Error;

    fn hash_of<T: Hash>(x: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        x.hash(&mut hasher);
        hasher.finish()
    }

    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Counter {
        item: i32,
        count: i32,
    }

    #[test]
    fn presence() {
        let some = Optional::some("test");
        assert!(some.has_value());
        assert!(!some.is_none());

        let none = Optional::<&str>::none();
        assert!(!none.has_value());
        assert!(none.is_none());
    }

    #[test]
    fn empty_payload_is_still_some() {
        let some = Optional::some(String::new());
        assert!(some.has_value());
        assert_eq!(some.value(), Ok(String::new()));

        let nested = Optional::some(None::<i32>);
        assert!(nested.has_value());
    }

    #[test]
    fn value_on_none_is_invalid_state() {
        let none = Optional::<i32>::none();
        assert_eq!(
            none.value(),
            Err(Error::InvalidState {
                type_name: "i32".into()
            })
        );
        assert!(none.as_value().is_err());

        let some = Optional::some(Counter { item: 2, count: 1 });
        assert_eq!(some.as_value().map(|c| c.item), Ok(2));
    }

    #[test]
    fn value_or() {
        assert_eq!(Optional::<&str>::none().value_or("fallback"), "fallback");
        assert_eq!(Optional::some("x").value_or("fallback"), "x");

        let mut called = false;
        let x = Optional::some(1).value_or_else(|| {
            called = true;
            2
        });
        assert_eq!(x, 1);
        assert!(!called);
        assert_eq!(Optional::none().value_or_else(|| 2), 2);
    }

    #[test]
    fn equality() {
        assert_eq!(Optional::some("test"), Optional::some("test"));
        assert_ne!(Optional::some("test"), Optional::some("test2"));
        assert_ne!(Optional::some("test"), Optional::none());
        assert_eq!(Optional::some(10), Optional::some(10));
        assert_ne!(Optional::some(10), Optional::some(11));
        assert_eq!(Optional::<Counter>::none(), Optional::none());

        assert!(
            Optional::some(Counter { item: 1, count: 2 })
                == Optional::some(Counter { item: 1, count: 2 })
        );
        assert!(
            Optional::some(Counter { item: 1, count: 2 })
                != Optional::some(Counter { item: 1, count: 3 })
        );
    }

    #[test]
    fn hash_is_consistent_with_equality() {
        assert_eq!(
            hash_of(&Optional::some(String::from("test"))),
            hash_of(&Optional::some(String::from("test")))
        );
        assert_eq!(
            hash_of(&Optional::<u64>::none()),
            hash_of(&Optional::<u64>::none())
        );
        assert_eq!(
            hash_of(&Optional::some(Counter { item: 1, count: 2 })),
            hash_of(&Optional::some(Counter { item: 1, count: 2 }))
        );
    }

    #[test]
    fn presence_participates_in_hash() {
        // `()` hashes to nothing at all, so only the flag tells these apart
        assert_ne!(
            hash_of(&Optional::some(())),
            hash_of(&Optional::<()>::none())
        );
    }

    #[test]
    fn display() {
        assert_snapshot!(Optional::some(10).to_string(), @"Some<i32>(10)");
        assert_snapshot!(
            Optional::some(String::from("test")).to_string(),
            @"Some<String>(test)"
        );
        assert_snapshot!(
            Optional::<String>::none().to_string(),
            @"None<String>()"
        );
        assert_snapshot!(Optional::some("test").to_string(), @"Some<&str>(test)");
    }

    #[test]
    fn display_of_empty_payload_is_literal() {
        assert_snapshot!(
            Optional::some(String::new()).to_string(),
            @"Some<String>()"
        );
        assert_ne!(
            Optional::some(String::new()).to_string(),
            Optional::<String>::none().to_string()
        );
    }

    #[test]
    fn short_type_names() {
        assert_eq!(type_name::<i32>(), "i32");
        assert_eq!(type_name::<String>(), "String");
        assert_eq!(type_name::<Vec<String>>(), "Vec<String>");
        assert_eq!(type_name::<Counter>(), "Counter");
    }

    #[test]
    fn short_type_names_of_compound_types() {
        assert_eq!(type_name::<(i32, String)>(), "(i32, String)");
        assert_eq!(type_name::<[String; 2]>(), "[String; 2]");
        assert_eq!(type_name::<&String>(), "&String");
        assert_eq!(type_name::<&str>(), "&str");
        assert_eq!(
            type_name::<Option<Vec<Counter>>>(),
            "Option<Vec<Counter>>"
        );
    }

    #[test]
    fn invalid_state_names_compound_types() {
        let err = Optional::<(i32, String)>::none().value().unwrap_err();
        assert_snapshot!(err.to_string(), @"no value present in None<(i32, String)>()");

        let err = Optional::<[String; 2]>::none().value().unwrap_err();
        assert_snapshot!(err.to_string(), @"no value present in None<[String; 2]>()");
    }

    #[test]
    fn from_value_is_always_some() {
        assert_eq!(
            Optional::from_value(String::new()),
            Optional::some(String::new())
        );
        assert!(Optional::from_value(0).has_value());
        assert!(Optional::from_value(None::<u8>).has_value());
    }

    #[test]
    fn as_ref_borrows() {
        let counter = Optional::some(Counter { item: 1, count: 2 });
        let item = counter.as_ref().select(|c| c.item);
        assert_eq!(item, Optional::some(1));
        // still usable, nothing was moved out
        assert_eq!(counter, Optional::some(Counter { item: 1, count: 2 }));

        let none = Optional::<Counter>::none();
        assert_eq!(none.as_ref(), Optional::none());
    }

    #[test]
    fn as_mut_updates_in_place() {
        let mut counter = Optional::some(Counter { item: 1, count: 2 });
        if let Optional::Some(c) = counter.as_mut() {
            c.count += 1;
        }
        assert_eq!(counter, Optional::some(Counter { item: 1, count: 3 }));

        let mut none = Optional::<Counter>::none();
        assert_eq!(none.as_mut(), Optional::none());
        assert!(none.is_none());
    }

    #[test]
    fn option_round_trip() {
        let x: Optional<i32> = Some(3).into();
        assert_eq!(x, Optional::some(3));
        let y: Option<i32> = Optional::none().into();
        assert_eq!(y, None);
    }
}
