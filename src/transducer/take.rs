//! Prefix stages: `take`, `take_while`, and `take_nth`.
//!
//! `take` and `take_while` are the canonical early terminators: they are
//! where [`Step::Reduced`] signals originate in most pipelines, which is
//! what lets a reduction over an infinite source finish.

use crate::error::TransduceError;
use crate::step::Step;
use crate::transducer::Transducer;
use crate::transformer::Transformer;

// =============================================================================
// take
// =============================================================================

/// The `take` transducer. Built by [`take`].
#[derive(Debug, Clone, Copy)]
pub struct Take {
    count: usize,
}

/// The transformer produced by applying [`Take`]. Carries the remaining
/// count.
#[derive(Debug, Clone)]
pub struct TakeTransformer<Inner> {
    remaining: usize,
    inner: Inner,
}

/// Forwards the first `count` inputs, then terminates the reduction.
///
/// The termination signal fires on the step that forwards the final input,
/// so exactly `count` elements are pulled from the source for `count >= 1`.
/// `take(0)` forwards nothing.
///
/// # Examples
///
/// ```rust
/// use xduce::{into, iter_source, take};
///
/// let prefix: Vec<u64> = into(Vec::new(), take(4), iter_source(0..));
/// assert_eq!(prefix, vec![0, 1, 2, 3]);
/// ```
#[must_use]
pub fn take(count: usize) -> Take {
    Take { count }
}

impl<Inner> Transducer<Inner> for Take {
    type Transformer = TakeTransformer<Inner>;

    fn apply(self, inner: Inner) -> Self::Transformer {
        TakeTransformer {
            remaining: self.count,
            inner,
        }
    }
}

impl<In, Inner> Transformer<In> for TakeTransformer<Inner>
where
    Inner: Transformer<In>,
{
    type Acc = Inner::Acc;

    fn init(&self) -> Result<Self::Acc, TransduceError> {
        self.inner.init()
    }

    fn step(&mut self, accumulator: Self::Acc, input: In) -> Step<Self::Acc> {
        if self.remaining == 0 {
            return Step::Reduced(accumulator);
        }
        self.remaining -= 1;
        let outcome = self.inner.step(accumulator, input);
        if self.remaining == 0 {
            outcome.ensure_reduced()
        } else {
            outcome
        }
    }

    fn result(self, accumulator: Self::Acc) -> Self::Acc {
        self.inner.result(accumulator)
    }
}

// =============================================================================
// take_while
// =============================================================================

/// The `take_while` transducer. Built by [`take_while`].
#[derive(Debug, Clone, Copy)]
pub struct TakeWhile<P> {
    predicate: P,
}

/// The transformer produced by applying [`TakeWhile`].
#[derive(Debug, Clone)]
pub struct TakeWhileTransformer<P, Inner> {
    predicate: P,
    inner: Inner,
}

/// Forwards inputs until the predicate first fails, then terminates.
///
/// The failing input is not forwarded.
///
/// # Examples
///
/// ```rust
/// use xduce::{into, take_while};
///
/// let ascending: Vec<i32> = into(
///     Vec::new(),
///     take_while(|value: &i32| *value < 4),
///     vec![1, 2, 3, 4, 1, 2],
/// );
/// assert_eq!(ascending, vec![1, 2, 3]);
/// ```
#[must_use]
pub fn take_while<In, P>(predicate: P) -> TakeWhile<P>
where
    P: FnMut(&In) -> bool,
{
    TakeWhile { predicate }
}

impl<Inner, P> Transducer<Inner> for TakeWhile<P> {
    type Transformer = TakeWhileTransformer<P, Inner>;

    fn apply(self, inner: Inner) -> Self::Transformer {
        TakeWhileTransformer {
            predicate: self.predicate,
            inner,
        }
    }
}

impl<In, P, Inner> Transformer<In> for TakeWhileTransformer<P, Inner>
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
            Step::Reduced(accumulator)
        }
    }

    fn result(self, accumulator: Self::Acc) -> Self::Acc {
        self.inner.result(accumulator)
    }
}

// =============================================================================
// take_nth
// =============================================================================

/// The `take_nth` transducer. Built by [`take_nth`].
#[derive(Debug, Clone, Copy)]
pub struct TakeNth {
    stride: usize,
}

/// The transformer produced by applying [`TakeNth`]. Carries the running
/// index.
#[derive(Debug, Clone)]
pub struct TakeNthTransformer<Inner> {
    stride: usize,
    index: usize,
    inner: Inner,
}

/// Forwards every `stride`-th input, starting with the first.
///
/// # Panics
///
/// Panics if `stride` is 0.
///
/// # Examples
///
/// ```rust
/// use xduce::{into, take_nth};
///
/// let every_third: Vec<i32> = into(Vec::new(), take_nth(3), (0..10).collect::<Vec<_>>());
/// assert_eq!(every_third, vec![0, 3, 6, 9]);
/// ```
#[must_use]
pub fn take_nth(stride: usize) -> TakeNth {
    assert!(stride > 0, "take_nth requires stride > 0");
    TakeNth { stride }
}

impl<Inner> Transducer<Inner> for TakeNth {
    type Transformer = TakeNthTransformer<Inner>;

    fn apply(self, inner: Inner) -> Self::Transformer {
        TakeNthTransformer {
            stride: self.stride,
            index: 0,
            inner,
        }
    }
}

impl<In, Inner> Transformer<In> for TakeNthTransformer<Inner>
where
    Inner: Transformer<In>,
{
    type Acc = Inner::Acc;

    fn init(&self) -> Result<Self::Acc, TransduceError> {
        self.inner.init()
    }

    fn step(&mut self, accumulator: Self::Acc, input: In) -> Step<Self::Acc> {
        let selected = self.index % self.stride == 0;
        self.index += 1;
        if selected {
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
    use crate::{comp, drop, into, iter_source, take, take_nth, take_while};
    use rstest::rstest;

    #[rstest]
    #[case(0, vec![])]
    #[case(2, vec![1, 2])]
    #[case(5, vec![1, 2, 3, 4, 5])]
    #[case(9, vec![1, 2, 3, 4, 5])]
    fn take_length_is_min_of_count_and_source(#[case] count: usize, #[case] expected: Vec<i32>) {
        let result: Vec<i32> = into(Vec::new(), take(count), vec![1, 2, 3, 4, 5]);
        assert_eq!(result, expected);
    }

    #[rstest]
    fn take_terminates_an_infinite_source() {
        let result: Vec<u64> = into(Vec::new(), take(3), iter_source(0..));
        assert_eq!(result, vec![0, 1, 2]);
    }

    #[rstest]
    fn take_pulls_exactly_count_elements() {
        let mut pulled = 0_usize;
        let counting = std::iter::from_fn(|| {
            pulled += 1;
            Some(pulled)
        });
        let result: Vec<usize> = into(Vec::new(), take(3), iter_source(counting));
        assert_eq!(result, vec![1, 2, 3]);
        // The third step reduced, so the source was never polled a fourth time.
        assert_eq!(pulled, 3);
    }

    #[rstest]
    fn drop_then_take_slices_the_source() {
        let source: Vec<i32> = (0..20).collect();
        let result: Vec<i32> = into(Vec::new(), comp!(drop(5), take(4)), source);
        assert_eq!(result, vec![5, 6, 7, 8]);
    }

    #[rstest]
    fn take_while_stops_at_first_failure() {
        let result: Vec<i32> = into(
            Vec::new(),
            take_while(|value: &i32| *value != 3),
            vec![1, 2, 3, 4, 5],
        );
        assert_eq!(result, vec![1, 2]);
    }

    #[rstest]
    fn take_while_terminates_an_infinite_source() {
        let result: Vec<u64> = into(Vec::new(), take_while(|value: &u64| *value < 4), iter_source(0..));
        assert_eq!(result, vec![0, 1, 2, 3]);
    }

    #[rstest]
    fn take_nth_forwards_the_first_input() {
        let result: Vec<i32> = into(Vec::new(), take_nth(2), vec![10, 20, 30, 40, 50]);
        assert_eq!(result, vec![10, 30, 50]);
    }

    #[rstest]
    fn take_nth_one_forwards_everything() {
        let result: Vec<i32> = into(Vec::new(), take_nth(1), vec![1, 2, 3]);
        assert_eq!(result, vec![1, 2, 3]);
    }

    #[rstest]
    #[should_panic(expected = "take_nth requires stride > 0")]
    fn take_nth_rejects_zero() {
        let _ = take_nth(0);
    }
}

#[cfg(test)]
mod property_tests {
    use crate::{comp, drop, into, take};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_take_length(
            values in prop::collection::vec(any::<i32>(), 0..40),
            count in 0_usize..50,
        ) {
            let result: Vec<i32> = into(Vec::new(), take(count), values.clone());
            prop_assert_eq!(result.len(), count.min(values.len()));
            prop_assert_eq!(&result[..], &values[..count.min(values.len())]);
        }

        #[test]
        fn prop_drop_take_is_slicing(
            values in prop::collection::vec(any::<i32>(), 0..40),
            start in 0_usize..45,
            length in 0_usize..45,
        ) {
            let result: Vec<i32> =
                into(Vec::new(), comp!(drop(start), take(length)), values.clone());
            let end = values.len().min(start.saturating_add(length));
            let expected = if start >= values.len() { &[][..] } else { &values[start..end] };
            prop_assert_eq!(&result[..], expected);
        }
    }
}
