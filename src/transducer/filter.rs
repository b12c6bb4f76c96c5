//! Predicate stages: `filter` and `remove`.

use crate::error::TransduceError;
use crate::step::Step;
use crate::transducer::Transducer;
use crate::transducer::compose::complement;
use crate::transformer::Transformer;

/// The `filter` transducer. Built by [`filter`] and [`remove`].
#[derive(Debug, Clone, Copy)]
pub struct Filter<P> {
    predicate: P,
}

/// The transformer produced by applying [`Filter`].
#[derive(Debug, Clone)]
pub struct FilterTransformer<P, Inner> {
    predicate: P,
    inner: Inner,
}

/// Forwards the inputs satisfying a predicate.
///
/// # Examples
///
/// ```rust
/// use xduce::{filter, into};
///
/// let evens: Vec<i32> = into(
///     Vec::new(),
///     filter(|value: &i32| value % 2 == 0),
///     vec![1, 2, 3, 4, 5, 6],
/// );
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
#[must_use]
pub fn filter<In, P>(predicate: P) -> Filter<P>
where
    P: FnMut(&In) -> bool,
{
    Filter { predicate }
}

/// Drops the inputs satisfying a predicate.
///
/// The mirror image of [`filter`]: `remove(pred)` is
/// `filter(complement(pred))`.
///
/// # Examples
///
/// ```rust
/// use xduce::{into, remove};
///
/// let odds: Vec<i32> = into(
///     Vec::new(),
///     remove(|value: &i32| value % 2 == 0),
///     vec![1, 2, 3, 4, 5, 6],
/// );
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
#[must_use]
pub fn remove<In, P>(predicate: P) -> Filter<impl FnMut(&In) -> bool>
where
    P: FnMut(&In) -> bool,
{
    filter(complement(predicate))
}

impl<Inner, P> Transducer<Inner> for Filter<P> {
    type Transformer = FilterTransformer<P, Inner>;

    fn apply(self, inner: Inner) -> Self::Transformer {
        FilterTransformer {
            predicate: self.predicate,
            inner,
        }
    }
}

impl<In, P, Inner> Transformer<In> for FilterTransformer<P, Inner>
where
    P: FnMut(&In) -> bool,
    Inner: Transformer<In>,
{
    type Acc = Inner::Acc;

    fn init(&self) -> Result<Self::Acc, TransduceError> {
        self.inner.init()
    }

    fn step(&mut self, accumulator: Self::Acc, input: In) -> Step<Self::Acc> {
        if (self.predicate)(&input) {
            self.inner.step(accumulator, input)
        } else {
            Step::Continue(accumulator)
        }
    }

    fn result(self, accumulator: Self::Acc) -> Self::Acc {
        self.inner.result(accumulator)
    }
}

#[cfg(test)]
mod tests {
    use crate::{filter, into, remove};
    use rstest::rstest;

    #[rstest]
    fn filter_keeps_matching_inputs() {
        let result: Vec<i32> = into(Vec::new(), filter(|value: &i32| *value > 2), vec![1, 2, 3, 4]);
        assert_eq!(result, vec![3, 4]);
    }

    #[rstest]
    fn filter_keeps_nothing_when_predicate_never_holds() {
        let result: Vec<i32> = into(Vec::new(), filter(|_: &i32| false), vec![1, 2, 3]);
        assert_eq!(result, Vec::<i32>::new());
    }

    #[rstest]
    fn remove_is_the_complement_of_filter() {
        let source = vec![1, 2, 3, 4, 5, 6];
        let kept: Vec<i32> = into(Vec::new(), filter(|value: &i32| value % 3 == 0), source.clone());
        let removed: Vec<i32> = into(Vec::new(), remove(|value: &i32| value % 3 == 0), source.clone());
        assert_eq!(kept, vec![3, 6]);
        assert_eq!(removed, vec![1, 2, 4, 5]);
        assert_eq!(kept.len() + removed.len(), source.len());
    }
}

#[cfg(test)]
mod property_tests {
    use crate::{filter, into, remove};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_filter_matches_iterator_filter(values in prop::collection::vec(any::<i32>(), 0..50)) {
            let transduced: Vec<i32> =
                into(Vec::new(), filter(|value: &i32| value % 2 == 0), values.clone());
            let direct: Vec<i32> = values.into_iter().filter(|value| value % 2 == 0).collect();
            prop_assert_eq!(transduced, direct);
        }

        #[test]
        fn prop_remove_matches_negated_filter(values in prop::collection::vec(any::<i32>(), 0..50)) {
            let transduced: Vec<i32> =
                into(Vec::new(), remove(|value: &i32| value % 2 == 0), values.clone());
            let direct: Vec<i32> = values.into_iter().filter(|value| value % 2 != 0).collect();
            prop_assert_eq!(transduced, direct);
        }
    }
}
