//! Mapping stages: `map`, `keep`, and `keep_indexed`.

use crate::error::TransduceError;
use crate::step::Step;
use crate::transducer::Transducer;
use crate::transformer::Transformer;

// =============================================================================
// map
// =============================================================================

/// The `map` transducer. Built by [`map`].
#[derive(Debug, Clone, Copy)]
pub struct Map<F> {
    function: F,
}

/// The transformer produced by applying [`Map`].
#[derive(Debug, Clone)]
pub struct MapTransformer<F, Inner> {
    function: F,
    inner: Inner,
}

/// Transforms every input with a function before forwarding it.
///
/// # Examples
///
/// ```rust
/// use xduce::{into, map};
///
/// let doubled: Vec<i32> = into(Vec::new(), map(|value: i32| value * 2), vec![1, 2, 3]);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
#[must_use]
pub fn map<In, Out, F>(function: F) -> Map<F>
where
    F: FnMut(In) -> Out,
{
    Map { function }
}

impl<Inner, F> Transducer<Inner> for Map<F> {
    type Transformer = MapTransformer<F, Inner>;

    fn apply(self, inner: Inner) -> Self::Transformer {
        MapTransformer {
            function: self.function,
            inner,
        }
    }
}

impl<In, Out, F, Inner> Transformer<In> for MapTransformer<F, Inner>
where
    F: FnMut(In) -> Out,
    Inner: Transformer<Out>,
{
    type Acc = Inner::Acc;

    fn init(&self) -> Result<Self::Acc, TransduceError> {
        self.inner.init()
    }

    fn step(&mut self, accumulator: Self::Acc, input: In) -> Step<Self::Acc> {
        self.inner.step(accumulator, (self.function)(input))
    }

    fn result(self, accumulator: Self::Acc) -> Self::Acc {
        self.inner.result(accumulator)
    }
}

// =============================================================================
// keep
// =============================================================================

/// The `keep` transducer. Built by [`keep`].
#[derive(Debug, Clone, Copy)]
pub struct Keep<F> {
    function: F,
}

/// The transformer produced by applying [`Keep`].
#[derive(Debug, Clone)]
pub struct KeepTransformer<F, Inner> {
    function: F,
    inner: Inner,
}

/// Forwards the inputs for which a function produces `Some`.
///
/// The input itself is forwarded unchanged; the mapped value only decides
/// whether it passes.
///
/// # Examples
///
/// ```rust
/// use xduce::{into, keep};
///
/// let non_empty: Vec<&str> = into(
///     Vec::new(),
///     keep(|line: &&str| line.chars().next()),
///     vec!["alpha", "", "beta"],
/// );
/// assert_eq!(non_empty, vec!["alpha", "beta"]);
/// ```
#[must_use]
pub fn keep<In, Out, F>(function: F) -> Keep<F>
where
    F: FnMut(&In) -> Option<Out>,
{
    Keep { function }
}

impl<Inner, F> Transducer<Inner> for Keep<F> {
    type Transformer = KeepTransformer<F, Inner>;

    fn apply(self, inner: Inner) -> Self::Transformer {
        KeepTransformer {
            function: self.function,
            inner,
        }
    }
}

impl<In, Out, F, Inner> Transformer<In> for KeepTransformer<F, Inner>
where
    F: FnMut(&In) -> Option<Out>,
    Inner: Transformer<In>,
{
    type Acc = Inner::Acc;

    fn init(&self) -> Result<Self::Acc, TransduceError> {
        self.inner.init()
    }

    fn step(&mut self, accumulator: Self::Acc, input: In) -> Step<Self::Acc> {
        if (self.function)(&input).is_some() {
            self.inner.step(accumulator, input)
        } else {
            Step::Continue(accumulator)
        }
    }

    fn result(self, accumulator: Self::Acc) -> Self::Acc {
        self.inner.result(accumulator)
    }
}

// =============================================================================
// keep_indexed
// =============================================================================

/// The `keep_indexed` transducer. Built by [`keep_indexed`].
#[derive(Debug, Clone, Copy)]
pub struct KeepIndexed<F> {
    function: F,
}

/// The transformer produced by applying [`KeepIndexed`]. Carries the
/// running index.
#[derive(Debug, Clone)]
pub struct KeepIndexedTransformer<F, Inner> {
    function: F,
    index: usize,
    inner: Inner,
}

/// Like [`keep`], with the zero-based input index passed alongside.
///
/// The index counts every input seen by the stage, kept or not.
#[must_use]
pub fn keep_indexed<In, Out, F>(function: F) -> KeepIndexed<F>
where
    F: FnMut(usize, &In) -> Option<Out>,
{
    KeepIndexed { function }
}

impl<Inner, F> Transducer<Inner> for KeepIndexed<F> {
    type Transformer = KeepIndexedTransformer<F, Inner>;

    fn apply(self, inner: Inner) -> Self::Transformer {
        KeepIndexedTransformer {
            function: self.function,
            index: 0,
            inner,
        }
    }
}

impl<In, Out, F, Inner> Transformer<In> for KeepIndexedTransformer<F, Inner>
where
    F: FnMut(usize, &In) -> Option<Out>,
    Inner: Transformer<In>,
{
    type Acc = Inner::Acc;

    fn init(&self) -> Result<Self::Acc, TransduceError> {
        self.inner.init()
    }

    fn step(&mut self, accumulator: Self::Acc, input: In) -> Step<Self::Acc> {
        let index = self.index;
        self.index += 1;
        if (self.function)(index, &input).is_some() {
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
    use crate::{into, keep, keep_indexed, map, transduce, wrap};
    use rstest::rstest;

    #[rstest]
    fn map_transforms_every_input() {
        let result: Vec<i32> = into(Vec::new(), map(|value: i32| value + 1), vec![1, 2, 3]);
        assert_eq!(result, vec![2, 3, 4]);
    }

    #[rstest]
    fn map_over_empty_source_yields_init() {
        let result: Vec<i32> = into(Vec::new(), map(|value: i32| value + 1), Vec::<i32>::new());
        assert_eq!(result, Vec::<i32>::new());
    }

    #[rstest]
    fn map_can_change_the_input_type() {
        let result = transduce(
            map(|value: i32| value.to_string()),
            wrap(|joined: String, piece: String| joined + &piece),
            String::new(),
            vec![1, 2, 3],
        );
        assert_eq!(result, "123");
    }

    #[rstest]
    fn keep_forwards_inputs_with_some_result() {
        let result: Vec<i32> = into(
            Vec::new(),
            keep(|value: &i32| if value % 2 == 0 { Some(()) } else { None }),
            vec![1, 2, 3, 4, 5, 6],
        );
        assert_eq!(result, vec![2, 4, 6]);
    }

    #[rstest]
    fn keep_forwards_the_original_input_not_the_mapped_value() {
        let result: Vec<i32> = into(
            Vec::new(),
            keep(|value: &i32| value.checked_mul(1_000_000)),
            vec![1, 2, 3],
        );
        assert_eq!(result, vec![1, 2, 3]);
    }

    #[rstest]
    fn keep_indexed_sees_every_index() {
        // Keep inputs at even indices; the index advances on dropped inputs too.
        let result: Vec<&str> = into(
            Vec::new(),
            keep_indexed(|index: usize, _value: &&str| if index % 2 == 0 { Some(()) } else { None }),
            vec!["a", "b", "c", "d", "e"],
        );
        assert_eq!(result, vec!["a", "c", "e"]);
    }
}
