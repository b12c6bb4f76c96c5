//! Suffix stages: `drop` and `drop_while`.

use crate::error::TransduceError;
use crate::step::Step;
use crate::transducer::Transducer;
use crate::transformer::Transformer;

// =============================================================================
// drop
// =============================================================================

/// The `drop` transducer. Built by [`drop`].
///
/// Named `Dropping` rather than `Drop` to stay clear of the destructor
/// trait.
#[derive(Debug, Clone, Copy)]
pub struct Dropping {
    count: usize,
}

/// The transformer produced by applying [`Dropping`]. Carries the remaining
/// count.
#[derive(Debug, Clone)]
pub struct DroppingTransformer<Inner> {
    remaining: usize,
    inner: Inner,
}

/// Discards the first `count` inputs, forwarding everything after.
///
/// Note that importing this function shadows `std::mem::drop`; calling it
/// through the crate path avoids the collision.
///
/// # Examples
///
/// ```rust
/// use xduce::into;
///
/// let tail: Vec<i32> = into(Vec::new(), xduce::drop(2), vec![1, 2, 3, 4, 5]);
/// assert_eq!(tail, vec![3, 4, 5]);
/// ```
#[must_use]
pub fn drop(count: usize) -> Dropping {
    Dropping { count }
}

impl<Inner> Transducer<Inner> for Dropping {
    type Transformer = DroppingTransformer<Inner>;

    fn apply(self, inner: Inner) -> Self::Transformer {
        DroppingTransformer {
            remaining: self.count,
            inner,
        }
    }
}

impl<In, Inner> Transformer<In> for DroppingTransformer<Inner>
where
    Inner: Transformer<In>,
{
    type Acc = Inner::Acc;

    fn init(&self) -> Result<Self::Acc, TransduceError> {
        self.inner.init()
    }

    fn step(&mut self, accumulator: Self::Acc, input: In) -> Step<Self::Acc> {
        if self.remaining > 0 {
            self.remaining -= 1;
            Step::Continue(accumulator)
        } else {
            self.inner.step(accumulator, input)
        }
    }

    fn result(self, accumulator: Self::Acc) -> Self::Acc {
        self.inner.result(accumulator)
    }
}

// =============================================================================
// drop_while
// =============================================================================

/// The `drop_while` transducer. Built by [`drop_while`].
#[derive(Debug, Clone, Copy)]
pub struct DropWhile<P> {
    predicate: P,
}

/// The transformer produced by applying [`DropWhile`]. Carries the
/// still-dropping flag.
#[derive(Debug, Clone)]
pub struct DropWhileTransformer<P, Inner> {
    predicate: P,
    dropping: bool,
    inner: Inner,
}

/// Discards inputs while the predicate holds, then forwards everything.
///
/// The first input failing the predicate is forwarded, and the predicate is
/// never consulted again - later inputs pass even if it would hold for
/// them.
///
/// # Examples
///
/// ```rust
/// use xduce::{drop_while, into};
///
/// let from_first_big: Vec<i32> = into(
///     Vec::new(),
///     drop_while(|value: &i32| *value < 3),
///     vec![1, 2, 3, 4, 1, 2],
/// );
/// assert_eq!(from_first_big, vec![3, 4, 1, 2]);
/// ```
#[must_use]
pub fn drop_while<In, P>(predicate: P) -> DropWhile<P>
where
    P: FnMut(&In) -> bool,
{
    DropWhile { predicate }
}

impl<Inner, P> Transducer<Inner> for DropWhile<P> {
    type Transformer = DropWhileTransformer<P, Inner>;

    fn apply(self, inner: Inner) -> Self::Transformer {
        DropWhileTransformer {
            predicate: self.predicate,
            dropping: true,
            inner,
        }
    }
}

impl<In, P, Inner> Transformer<In> for DropWhileTransformer<P, Inner>
where
    P: FnMut(&In) -> bool,
    Inner: Transformer<In>,
{
    type Acc = Inner::Acc;

    fn init(&self) -> Result<Self::Acc, TransduceError> {
        self.inner.init()
    }

    fn step(&mut self, accumulator: Self::Acc, input: In) -> Step<Self::Acc> {
        if self.dropping {
            if (self.predicate)(&input) {
                return Step::Continue(accumulator);
            }
            self.dropping = false;
        }
        self.inner.step(accumulator, input)
    }

    fn result(self, accumulator: Self::Acc) -> Self::Acc {
        self.inner.result(accumulator)
    }
}

#[cfg(test)]
mod tests {
    use crate::{drop, drop_while, into};
    use rstest::rstest;

    #[rstest]
    #[case(0, vec![1, 2, 3])]
    #[case(2, vec![3])]
    #[case(3, vec![])]
    #[case(10, vec![])]
    fn drop_discards_a_prefix(#[case] count: usize, #[case] expected: Vec<i32>) {
        let result: Vec<i32> = into(Vec::new(), drop(count), vec![1, 2, 3]);
        assert_eq!(result, expected);
    }

    #[rstest]
    fn drop_while_forwards_the_triggering_input() {
        let result: Vec<i32> = into(
            Vec::new(),
            drop_while(|value: &i32| *value < 5),
            vec![1, 3, 5, 7],
        );
        assert_eq!(result, vec![5, 7]);
    }

    #[rstest]
    fn drop_while_never_reconsults_the_predicate() {
        // 1 reappears after the flag clears and must pass through.
        let result: Vec<i32> = into(
            Vec::new(),
            drop_while(|value: &i32| *value < 3),
            vec![1, 2, 3, 1, 2],
        );
        assert_eq!(result, vec![3, 1, 2]);
    }

    #[rstest]
    fn drop_while_with_always_true_predicate_drops_everything() {
        let result: Vec<i32> = into(Vec::new(), drop_while(|_: &i32| true), vec![1, 2, 3]);
        assert_eq!(result, Vec::<i32>::new());
    }
}
