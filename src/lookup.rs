//! Keyed lookups as [`Optional`]s

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::Optional;

/// A read-only keyed lookup that reports a missing key as `None`
///
/// ```
/// use std::collections::HashMap;
/// use optional::{Lookup, Optional};
///
/// let ports = HashMap::from([("http", 80), ("https", 443)]);
/// assert_eq!(ports.try_get("https"), Optional::some(&443));
/// assert_eq!(ports.try_get("gopher"), Optional::none());
/// ```
pub trait Lookup<Q: ?Sized> {
    type Value;

    fn try_get(&self, key: &Q) -> Optional<&Self::Value>;
}

impl<K, V, Q, S> Lookup<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    fn try_get(&self, key: &Q) -> Optional<&V> {
        self.get(key).into()
    }
}

impl<K, V, Q> Lookup<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Value = V;

    fn try_get(&self, key: &Q) -> Optional<&V> {
        self.get(key).into()
    }
}

impl<T> Lookup<usize> for [T] {
    type Value = T;

    fn try_get(&self, index: &usize) -> Optional<&T> {
        self.get(*index).into()
    }
}

impl<T> Lookup<usize> for Vec<T> {
    type Value = T;

    fn try_get(&self, index: &usize) -> Optional<&T> {
        self.as_slice().try_get(index)
    }
}
