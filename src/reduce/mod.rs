//! The reduction engine and its entry points.
//!
//! [`reduce`](reduce()) is the engine: it drives a [`Transformer`] over a
//! [`Reducible`] source, honors early termination, and finalizes exactly
//! once. The remaining entry points are conveniences layered on it:
//!
//! - [`transduce`] applies a transducer pipeline to a collector and runs
//!   the engine with an explicit seed;
//! - [`transduce_init`] does the same but asks the collector for the seed;
//! - [`into`](into()) infers an appending collector from the output
//!   collection itself;
//! - [`to_fn`] flattens a pipeline into a plain step function for use with
//!   a foreign fold.

mod source;

pub use source::{IterSource, Reducible, iter_source};

use std::marker::PhantomData;

use crate::error::TransduceError;
use crate::step::Step;
use crate::transducer::Transducer;
use crate::transformer::{Transformer, Wrap, wrap};

/// Reduces a source into a single value through a transformer.
///
/// Drives every element of `source` through `transformer.step`, stopping
/// early if a step returns [`Step::Reduced`], then calls
/// [`result`](Transformer::result) exactly once - including for an empty
/// source, where it receives `init` untouched.
///
/// Plain combine closures become transformers via [`wrap`]:
///
/// # Examples
///
/// ```rust
/// use xduce::{reduce, wrap};
///
/// let total = reduce(wrap(|sum: i64, value: i64| sum + value), 0, vec![1, 2, 3, 4, 5]);
/// assert_eq!(total, 15);
/// ```
pub fn reduce<T, S>(mut transformer: T, init: T::Acc, source: S) -> T::Acc
where
    S: Reducible,
    T: Transformer<S::Item>,
{
    let outcome = source.reduce_steps(&mut transformer, init);
    transformer.result(outcome.unreduced())
}

/// Runs a transducer pipeline against a collector, with an explicit seed.
///
/// The pipeline is applied to the collector to build the full transformer
/// stack, then the source is reduced through it.
///
/// # Examples
///
/// ```rust
/// use xduce::{comp, filter, map, transduce, wrap};
///
/// let result = transduce(
///     comp!(map(|value: i32| value + 1), filter(|value: &i32| value % 2 == 0)),
///     wrap(|mut output: Vec<i32>, value| {
///         output.push(value);
///         output
///     }),
///     Vec::new(),
///     vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
/// );
/// assert_eq!(result, vec![2, 4, 6, 8, 10]);
/// ```
pub fn transduce<X, C, S>(
    transducer: X,
    collector: C,
    init: <X::Transformer as Transformer<S::Item>>::Acc,
    source: S,
) -> <X::Transformer as Transformer<S::Item>>::Acc
where
    S: Reducible,
    X: Transducer<C>,
    X::Transformer: Transformer<S::Item>,
{
    reduce(transducer.apply(collector), init, source)
}

/// Runs a transducer pipeline, seeding from the collector's own `init`.
///
/// The form of [`transduce`] for callers that supply no initial value. The
/// composed transformer delegates `init` inward to the collector, so this
/// works with any collector that has a zero value and fails for collectors
/// adapted from bare closures.
///
/// # Errors
///
/// Returns [`TransduceError::UninitializedAccumulator`] when the collector
/// cannot produce a starting accumulator.
///
/// # Examples
///
/// ```rust
/// use xduce::{Appender, filter, transduce_init, wrap};
///
/// let evens: Vec<i32> = transduce_init(
///     filter(|value: &i32| value % 2 == 0),
///     Appender::new(),
///     vec![1, 2, 3, 4],
/// )?;
/// assert_eq!(evens, vec![2, 4]);
///
/// // A wrapped closure has no zero value:
/// let failed = transduce_init(
///     filter(|value: &i32| value % 2 == 0),
///     wrap(|mut output: Vec<i32>, value| {
///         output.push(value);
///         output
///     }),
///     vec![1, 2, 3, 4],
/// );
/// assert!(failed.is_err());
/// # Ok::<(), xduce::TransduceError>(())
/// ```
pub fn transduce_init<X, C, S>(
    transducer: X,
    collector: C,
    source: S,
) -> Result<<X::Transformer as Transformer<S::Item>>::Acc, TransduceError>
where
    S: Reducible,
    X: Transducer<C>,
    X::Transformer: Transformer<S::Item>,
{
    let transformer = transducer.apply(collector);
    let init = transformer.init()?;
    Ok(reduce(transformer, init, source))
}

// =============================================================================
// into - collector inference
// =============================================================================

/// A collector that appends every input to a collection via [`Extend`].
///
/// This is the collector behind [`into`](into()): one `std` trait covers
/// sequence append (`Vec`, `VecDeque`), string append (`String` from
/// `char`s), and map-entry insertion (`HashMap`/`BTreeMap` from key-value
/// pairs).
#[derive(Debug, Clone, Copy, Default)]
pub struct Appender<Out, In> {
    marker: PhantomData<fn(In) -> Out>,
}

impl<Out, In> Appender<Out, In> {
    /// Creates an appending collector for the inferred collection type.
    #[must_use]
    pub fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<Out, In> Transformer<In> for Appender<Out, In>
where
    Out: Extend<In> + Default,
{
    type Acc = Out;

    fn init(&self) -> Result<Out, TransduceError> {
        Ok(Out::default())
    }

    fn step(&mut self, mut accumulator: Out, input: In) -> Step<Out> {
        accumulator.extend(std::iter::once(input));
        Step::Continue(accumulator)
    }

    fn result(self, accumulator: Out) -> Out {
        accumulator
    }
}

/// Reduces a source into a collection through a transducer pipeline.
///
/// The collector is inferred from `empty`: anything implementing
/// [`Extend`] over the pipeline's output type works, covering vectors,
/// strings, sets, and maps.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use xduce::{into, map, partition_by};
///
/// let grouped: Vec<Vec<i32>> = into(
///     Vec::new(),
///     partition_by(|value: &i32| *value),
///     vec![1, 1, 1, 2, 2, 3, 3, 3, 3],
/// );
/// assert_eq!(grouped, vec![vec![1, 1, 1], vec![2, 2], vec![3, 3, 3, 3]]);
///
/// let index: BTreeMap<char, u32> = into(
///     BTreeMap::new(),
///     map(|word: &str| (word.chars().next().unwrap_or('?'), word.len() as u32)),
///     vec!["alpha", "beta"],
/// );
/// assert_eq!(index.get(&'a'), Some(&5));
/// ```
pub fn into<Out, U, X, S>(empty: Out, transducer: X, source: S) -> Out
where
    S: Reducible,
    Out: Extend<U> + Default,
    X: Transducer<Appender<Out, U>>,
    X::Transformer: Transformer<S::Item, Acc = Out>,
{
    transduce(transducer, Appender::new(), empty, source)
}

// =============================================================================
// to_fn - exporting a pipeline as a plain step function
// =============================================================================

/// Flattens a transducer pipeline and a combine closure into a plain step
/// function.
///
/// The returned closure is the composed transformer's `step`, suitable for
/// handing to a foreign fold. No finalization ever runs through it, so
/// pipelines with buffering stages (`partition_by`, `partition_all`) will
/// not flush their final partition.
///
/// # Examples
///
/// ```rust
/// use xduce::{Step, filter, map, comp, to_fn};
///
/// let mut step = to_fn(
///     comp!(map(|value: i32| value * 2), filter(|value: &i32| *value > 2)),
///     |sum: i32, value: i32| sum + value,
/// );
/// let mut total = 0;
/// for value in [1, 2, 3] {
///     match step(total, value) {
///         Step::Continue(next) | Step::Reduced(next) => total = next,
///     }
/// }
/// assert_eq!(total, 10); // 4 + 6; the mapped 2 was filtered out
/// ```
pub fn to_fn<X, F, A, In, U>(
    transducer: X,
    combine: F,
) -> impl FnMut(A, In) -> Step<A>
where
    F: FnMut(A, U) -> A,
    X: Transducer<Wrap<F, A>>,
    X::Transformer: Transformer<In, Acc = A>,
{
    let mut transformer = transducer.apply(wrap(combine));
    move |accumulator, input| transformer.step(accumulator, input)
}
