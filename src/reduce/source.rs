//! Reducible sources - the input side of the reduction engine.
//!
//! Each source kind the engine can drive is an implementation of
//! [`Reducible`], resolved at compile time: ordered sequences element by
//! element, text character by character, associative maps entry by entry,
//! and external pull iterators through [`IterSource`]. A value that is not
//! a recognized source simply does not implement the trait.
//!
//! [`Reducible::reduce_steps`] is the inner loop of the whole library: it
//! feeds elements to a transformer and stops the moment a step returns
//! [`Step::Reduced`], pulling nothing further from the source. It does not
//! finalize - callers (the [`reduce`](crate::reduce()) entry point, or the
//! [`cat`](crate::cat) stage for nested reductions) decide what to do with
//! the escaping signal.

use std::collections::{BTreeMap, HashMap};

use crate::step::Step;
use crate::transformer::Transformer;

/// A source of elements that can drive a reduction.
///
/// Implementations pull their elements in their natural order and feed each
/// one to the transformer, short-circuiting on [`Step::Reduced`].
pub trait Reducible {
    /// The element type produced by this source.
    type Item;

    /// Drives the transformer over every element.
    ///
    /// Stops immediately when a step returns [`Step::Reduced`] - no further
    /// element is pulled - and returns the signal to the caller unchanged.
    /// [`Transformer::result`] is not called; finalization belongs to the
    /// caller, which is what lets nested reductions propagate termination
    /// outward.
    fn reduce_steps<T>(self, transformer: &mut T, accumulator: T::Acc) -> Step<T::Acc>
    where
        T: Transformer<Self::Item>;
}

/// Drives a transformer over an iterator, stopping on a reduced signal.
fn drive<I, T>(elements: I, transformer: &mut T, mut accumulator: T::Acc) -> Step<T::Acc>
where
    I: Iterator,
    T: Transformer<I::Item>,
{
    for element in elements {
        match transformer.step(accumulator, element) {
            Step::Continue(next) => accumulator = next,
            reduced @ Step::Reduced(_) => return reduced,
        }
    }
    Step::Continue(accumulator)
}

// =============================================================================
// Ordered sequences
// =============================================================================

impl<A> Reducible for Vec<A> {
    type Item = A;

    fn reduce_steps<T>(self, transformer: &mut T, accumulator: T::Acc) -> Step<T::Acc>
    where
        T: Transformer<A>,
    {
        drive(self.into_iter(), transformer, accumulator)
    }
}

impl<A, const N: usize> Reducible for [A; N] {
    type Item = A;

    fn reduce_steps<T>(self, transformer: &mut T, accumulator: T::Acc) -> Step<T::Acc>
    where
        T: Transformer<A>,
    {
        drive(self.into_iter(), transformer, accumulator)
    }
}

impl<'a, A> Reducible for &'a [A] {
    type Item = &'a A;

    fn reduce_steps<T>(self, transformer: &mut T, accumulator: T::Acc) -> Step<T::Acc>
    where
        T: Transformer<&'a A>,
    {
        drive(self.iter(), transformer, accumulator)
    }
}

// =============================================================================
// Text
// =============================================================================

impl<'a> Reducible for &'a str {
    type Item = char;

    fn reduce_steps<T>(self, transformer: &mut T, accumulator: T::Acc) -> Step<T::Acc>
    where
        T: Transformer<char>,
    {
        drive(self.chars(), transformer, accumulator)
    }
}

impl Reducible for String {
    type Item = char;

    fn reduce_steps<T>(self, transformer: &mut T, accumulator: T::Acc) -> Step<T::Acc>
    where
        T: Transformer<char>,
    {
        drive(self.chars(), transformer, accumulator)
    }
}

// =============================================================================
// Associative maps
// =============================================================================

/// Entries arrive in arbitrary order - `HashMap` iteration order is
/// unspecified and varies between runs. Reductions whose output depends on
/// entry order should use a [`BTreeMap`] source or sort beforehand.
impl<K, V, S> Reducible for HashMap<K, V, S> {
    type Item = (K, V);

    fn reduce_steps<T>(self, transformer: &mut T, accumulator: T::Acc) -> Step<T::Acc>
    where
        T: Transformer<(K, V)>,
    {
        drive(self.into_iter(), transformer, accumulator)
    }
}

/// Entries arrive in ascending key order.
impl<K, V> Reducible for BTreeMap<K, V> {
    type Item = (K, V);

    fn reduce_steps<T>(self, transformer: &mut T, accumulator: T::Acc) -> Step<T::Acc>
    where
        T: Transformer<(K, V)>,
    {
        drive(self.into_iter(), transformer, accumulator)
    }
}

// =============================================================================
// External iterators
// =============================================================================

/// An external pull iterator adapted as a reduction source.
///
/// Built by [`iter_source`]. Elements are pulled one `next` call at a time,
/// and a reduced signal stops the pulling immediately - the adapter never
/// reads ahead, so infinite iterators are safe under a terminating
/// pipeline.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iterator: I,
}

/// Adapts anything iterable into a reduction source.
///
/// # Examples
///
/// ```rust
/// use xduce::{into, iter_source, take};
///
/// let squares: Vec<u64> = into(Vec::new(), take(4), iter_source((1..).map(|n: u64| n * n)));
/// assert_eq!(squares, vec![1, 4, 9, 16]);
/// ```
pub fn iter_source<I>(iterable: I) -> IterSource<I::IntoIter>
where
    I: IntoIterator,
{
    IterSource {
        iterator: iterable.into_iter(),
    }
}

impl<I> Reducible for IterSource<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn reduce_steps<T>(self, transformer: &mut T, accumulator: T::Acc) -> Step<T::Acc>
    where
        T: Transformer<I::Item>,
    {
        drive(self.iterator, transformer, accumulator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transformer::wrap;
    use crate::{filter, into, map, take};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn vec_reduces_in_index_order() {
        let result: Vec<i32> = into(Vec::new(), map(|value: i32| value), vec![3, 1, 2]);
        assert_eq!(result, vec![3, 1, 2]);
    }

    #[rstest]
    fn array_reduces_by_value() {
        let result: Vec<i32> = into(Vec::new(), map(|value: i32| value * 2), [1, 2, 3]);
        assert_eq!(result, vec![2, 4, 6]);
    }

    #[rstest]
    fn slice_reduces_by_reference() {
        let values = [10, 20, 30];
        let result: Vec<i32> = into(Vec::new(), map(|value: &i32| *value + 1), &values[..]);
        assert_eq!(result, vec![11, 21, 31]);
    }

    #[rstest]
    fn str_reduces_character_by_character() {
        let result: String = into(
            String::new(),
            filter(|character: &char| character.is_ascii_alphabetic()),
            "a1b2c3",
        );
        assert_eq!(result, "abc");
    }

    #[rstest]
    fn string_reduces_character_by_character() {
        let result: String = into(String::new(), map(|character: char| character), String::from("xy"));
        assert_eq!(result, "xy");
    }

    #[rstest]
    fn btreemap_reduces_in_ascending_key_order() {
        let mut source = BTreeMap::new();
        source.insert(2, "two");
        source.insert(1, "one");
        source.insert(3, "three");
        let result: Vec<(i32, &str)> =
            into(Vec::new(), map(|entry: (i32, &str)| entry), source);
        assert_eq!(result, vec![(1, "one"), (2, "two"), (3, "three")]);
    }

    #[rstest]
    fn hashmap_reduces_every_entry() {
        let mut source = HashMap::new();
        source.insert("a", 1);
        source.insert("b", 2);
        let mut result: Vec<(&str, i32)> =
            into(Vec::new(), map(|entry: (&str, i32)| entry), source);
        result.sort_unstable();
        assert_eq!(result, vec![("a", 1), ("b", 2)]);
    }

    #[rstest]
    fn iter_source_stops_pulling_after_a_reduced_signal() {
        let pulls = Cell::new(0_usize);
        let counted = (0..100).inspect(|_| pulls.set(pulls.get() + 1));
        let result: Vec<i32> = into(Vec::new(), take(2), iter_source(counted));
        assert_eq!(result, vec![0, 1]);
        assert_eq!(pulls.get(), 2);
    }

    #[rstest]
    fn empty_source_returns_the_accumulator_unreduced() {
        let mut collector = wrap(|sum: i32, value: i32| sum + value);
        let outcome = Vec::<i32>::new().reduce_steps(&mut collector, 5);
        assert_eq!(outcome, Step::Continue(5));
    }
}
