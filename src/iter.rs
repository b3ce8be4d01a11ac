//! Sequence combinators producing or consuming [`Optional`]s
//!
//! [`choose`], [`collect_some`] and [`generate`] are lazy: every element is
//! produced when the consumer asks for it and nothing else happens in the
//! meantime. [`flatten`] has to look at the whole sequence twice, so it
//! materializes its input first.
//!
//! [`choose`]: OptionalIterExt::choose
//! [`collect_some`]: OptionalIterExt::collect_some

use std::iter::FusedIterator;

use log::trace;

use crate::value::{type_name, Optional};

/// Gather a sequence of optionals into one optional `Vec`
///
/// Yields `Some` of all the payloads in their original order if every
/// element has a value and `None` if any one of them does not. The
/// source is iterated exactly once.
///
/// ```
/// use optional::{flatten, Optional};
///
/// let all = flatten([Optional::some(1), Optional::some(2)]);
/// assert_eq!(all, Optional::some(vec![1, 2]));
///
/// let gap = flatten([Optional::some(1), Optional::none()]);
/// assert_eq!(gap, Optional::none());
/// ```
pub fn flatten<T>(
    xs: impl IntoIterator<Item = Optional<T>>,
) -> Optional<Vec<T>> {
    let xs: Vec<Optional<T>> = xs.into_iter().collect();
    let len = xs.len();

    if !xs.iter().all(Optional::has_value) {
        trace!(
            "flatten of {len} Optional<{}> values hit a None",
            type_name::<T>()
        );
        return Optional::None;
    }

    let values: Vec<T> = xs
        .into_iter()
        .filter_map(|x| x.to_nullable())
        .collect();
    trace!("flattened {len} Optional<{}> values", type_name::<T>());
    Optional::Some(values)
}

/// Lazily unfold a sequence from a seed
///
/// `f` receives the current state and returns either the next state
/// paired with an item to emit, or `None` to end the sequence. The
/// iterator is fused once `f` has returned `None`. Clone the iterator
/// before consuming it to replay the sequence from the seed.
///
/// ```
/// use optional::{generate, Optional};
///
/// let xs: Vec<_> = generate(0, |s| {
///     if s < 3 { Optional::some((s + 1, s)) } else { Optional::none() }
/// })
/// .collect();
/// assert_eq!(xs, [0, 1, 2]);
/// ```
pub fn generate<S, I, F>(seed: S, f: F) -> Generate<S, F>
where
    F: FnMut(S) -> Optional<(S, I)>,
{
    Generate {
        state: Some(seed),
        f,
    }
}

/// Iterator returned by [`generate`]
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Generate<S, F> {
    /// `None` once the generator has signalled the end
    state: Option<S>,
    f: F,
}

impl<S, I, F> Iterator for Generate<S, F>
where
    F: FnMut(S) -> Optional<(S, I)>,
{
    type Item = I;

    fn next(&mut self) -> Option<I> {
        let state = self.state.take()?;
        match (self.f)(state) {
            Optional::Some((next, item)) => {
                self.state = Some(next);
                Some(item)
            }
            Optional::None => None,
        }
    }
}

impl<S, I, F> FusedIterator for Generate<S, F> where
    F: FnMut(S) -> Optional<(S, I)>
{
}

/// Iterator returned by [`OptionalIterExt::choose`]
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Choose<I, F> {
    iter: I,
    chooser: F,
}

impl<I, F, B> Iterator for Choose<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Optional<B>,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        for x in self.iter.by_ref() {
            if let Optional::Some(y) = (self.chooser)(x) {
                return Some(y);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, F, B> FusedIterator for Choose<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> Optional<B>,
{
}

/// Iterator returned by [`OptionalIterExt::collect_some`]
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct CollectSome<I> {
    iter: I,
}

impl<I, T> Iterator for CollectSome<I>
where
    I: Iterator<Item = Optional<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.by_ref().find_map(Optional::to_nullable)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, T> DoubleEndedIterator for CollectSome<I>
where
    I: DoubleEndedIterator<Item = Optional<T>>,
{
    fn next_back(&mut self) -> Option<T> {
        self.iter.by_ref().rev().find_map(Optional::to_nullable)
    }
}

impl<I, T> FusedIterator for CollectSome<I> where
    I: FusedIterator<Item = Optional<T>>
{
}

/// Optional-producing queries and adapters on any iterator
pub trait OptionalIterExt: Iterator + Sized {
    /// Keep the payload of `chooser(x)` for every `x` where it has one
    ///
    /// ```
    /// use optional::{Optional, OptionalIterExt};
    ///
    /// let xs: Vec<_> = [1, 2, 3, 4]
    ///     .into_iter()
    ///     .choose(|x| {
    ///         if x % 2 == 0 { Optional::some(x * 10) } else { Optional::none() }
    ///     })
    ///     .collect();
    /// assert_eq!(xs, [20, 40]);
    /// ```
    fn choose<B, F>(self, chooser: F) -> Choose<Self, F>
    where
        F: FnMut(Self::Item) -> Optional<B>,
    {
        Choose {
            iter: self,
            chooser,
        }
    }

    /// Unwrap every `Some` and drop every `None`
    fn collect_some<T>(self) -> CollectSome<Self>
    where
        Self: Iterator<Item = Optional<T>>,
    {
        CollectSome { iter: self }
    }

    /// See [`flatten`]
    fn flatten_all<T>(self) -> Optional<Vec<T>>
    where
        Self: Iterator<Item = Optional<T>>,
    {
        flatten(self)
    }

    fn try_first(mut self) -> Optional<Self::Item> {
        self.next().into()
    }

    fn try_first_by<P>(mut self, predicate: P) -> Optional<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.find(predicate).into()
    }

    fn try_last(self) -> Optional<Self::Item> {
        self.last().into()
    }

    fn try_last_by<P>(self, mut predicate: P) -> Optional<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(|x| predicate(x)).last().into()
    }

    fn try_element_at(mut self, n: usize) -> Optional<Self::Item> {
        self.nth(n).into()
    }

    /// The `n`th element among those matching `predicate`
    fn try_element_at_by<P>(
        self,
        n: usize,
        predicate: P,
    ) -> Optional<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(predicate).try_element_at(n)
    }

    /// The only element of the sequence
    ///
    /// `None` for an empty sequence and for one with more than one
    /// element. At most two elements are pulled from the sequence.
    fn try_single(mut self) -> Optional<Self::Item> {
        match (self.next(), self.next()) {
            (Some(x), None) => Optional::Some(x),
            _ => Optional::None,
        }
    }

    /// The only element matching `predicate`
    ///
    /// `None` when nothing or more than one element matches.
    fn try_single_by<P>(self, predicate: P) -> Optional<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(predicate).try_single()
    }
}

impl<I: Iterator> OptionalIterExt for I {}
