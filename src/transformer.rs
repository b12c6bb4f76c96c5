//! The transformer protocol - one stage of a reduction pipeline.
//!
//! A [`Transformer`] is the three-operation contract every pipeline stage
//! and every output collector implements:
//!
//! - [`init`](Transformer::init) produces a starting accumulator, used only
//!   when the caller supplies no explicit initial value;
//! - [`step`](Transformer::step) folds one input into the accumulator and
//!   may request early termination by returning [`Step::Reduced`];
//! - [`result`](Transformer::result) runs exactly once after the final step
//!   (or immediately, for an empty source) so that buffering stages can
//!   flush pending state.
//!
//! Every stage except the innermost collector wraps an inner transformer
//! and delegates `init` and `result` to it, transforming only what passes
//! through `step`.
//!
//! `result` takes `self` by value: the type system enforces that
//! finalization happens at most once and that a transformer tree - which
//! may carry per-reduction state such as counters and buffers - cannot be
//! reused across reductions without being rebuilt.
//!
//! This module also provides the three premade transformers that sit at the
//! collector end of a pipeline: [`wrap`] adapts a plain step closure,
//! [`completing`] overrides finalization, and [`first`] captures the first
//! input it sees and stops.

use std::marker::PhantomData;

use crate::error::{TransduceError, UninitializedAccumulatorError};
use crate::step::Step;

/// A single stage of a reduction: the init/step/result triple.
///
/// `In` is the input type this stage accepts; `Acc` is the accumulator
/// threaded through the whole pipeline. Stages that wrap an inner
/// transformer expose the inner accumulator type unchanged.
///
/// # Examples
///
/// A minimal collector that sums its inputs:
///
/// ```rust
/// use xduce::{Step, TransduceError, Transformer};
///
/// struct Sum;
///
/// impl Transformer<i64> for Sum {
///     type Acc = i64;
///
///     fn init(&self) -> Result<i64, TransduceError> {
///         Ok(0)
///     }
///
///     fn step(&mut self, accumulator: i64, input: i64) -> Step<i64> {
///         Step::Continue(accumulator + input)
///     }
///
///     fn result(self, accumulator: i64) -> i64 {
///         accumulator
///     }
/// }
///
/// assert_eq!(xduce::reduce(Sum, 0, vec![1, 2, 3]), 6);
/// ```
pub trait Transformer<In> {
    /// The accumulator type threaded through the reduction.
    type Acc;

    /// Produces the starting accumulator.
    ///
    /// Only called when the caller supplies no explicit initial value.
    /// Wrapping stages delegate to the inner transformer; collectors with
    /// no sensible zero value return
    /// [`TransduceError::UninitializedAccumulator`].
    ///
    /// # Errors
    ///
    /// Returns [`TransduceError::UninitializedAccumulator`] when the
    /// collector cannot produce a starting accumulator.
    fn init(&self) -> Result<Self::Acc, TransduceError>;

    /// Folds one input into the accumulator.
    ///
    /// Returning [`Step::Reduced`] requests that the reduction engine stop
    /// pulling elements; the carried accumulator becomes final (after
    /// [`result`](Transformer::result)).
    fn step(&mut self, accumulator: Self::Acc, input: In) -> Step<Self::Acc>;

    /// Finalizes the reduction.
    ///
    /// Called exactly once, after the last `step` or immediately for an
    /// empty source. Buffering stages flush pending state here before
    /// delegating inward.
    fn result(self, accumulator: Self::Acc) -> Self::Acc;
}

// =============================================================================
// Wrap - adapting a plain step closure
// =============================================================================

/// A collector adapted from a plain two-argument step closure.
///
/// Built by [`wrap`]. `result` is the identity and `init` is unimplemented:
/// reductions through a `Wrap` collector must be seeded with an explicit
/// initial accumulator.
#[derive(Debug, Clone)]
pub struct Wrap<F, A> {
    step_fn: F,
    marker: PhantomData<fn(A) -> A>,
}

/// Adapts a plain combine function into a [`Transformer`].
///
/// This is the bridge between the transducer protocol and ordinary fold
/// functions: any `FnMut(Acc, In) -> Acc` becomes a collector whose
/// `result` returns the accumulator unchanged.
///
/// # Examples
///
/// ```rust
/// use xduce::{reduce, wrap};
///
/// let total = reduce(wrap(|sum: i64, value: i64| sum + value), 0, vec![1, 2, 3, 4]);
/// assert_eq!(total, 10);
/// ```
pub fn wrap<A, In, F>(step_fn: F) -> Wrap<F, A>
where
    F: FnMut(A, In) -> A,
{
    Wrap {
        step_fn,
        marker: PhantomData,
    }
}

impl<A, In, F> Transformer<In> for Wrap<F, A>
where
    F: FnMut(A, In) -> A,
{
    type Acc = A;

    fn init(&self) -> Result<A, TransduceError> {
        Err(TransduceError::UninitializedAccumulator(
            UninitializedAccumulatorError { collector: "Wrap" },
        ))
    }

    fn step(&mut self, accumulator: A, input: In) -> Step<A> {
        Step::Continue((self.step_fn)(accumulator, input))
    }

    fn result(self, accumulator: A) -> A {
        accumulator
    }
}

// =============================================================================
// Completing - overriding finalization
// =============================================================================

/// A transformer whose finalization is replaced by a completion function.
///
/// Built by [`completing`]. Steps are delegated untouched; `result` calls
/// the completion function on the accumulator instead of delegating to the
/// wrapped transformer.
#[derive(Debug, Clone)]
pub struct Completing<T, F> {
    inner: T,
    complete: F,
}

/// Replaces a transformer's `result` with a completion function.
///
/// Useful for post-processing the final accumulator - normalizing, sealing
/// an envelope - without touching the step behavior. The wrapped
/// transformer's own `result` is not called.
///
/// # Examples
///
/// ```rust
/// use xduce::{completing, reduce, wrap};
///
/// let collector = completing(wrap(|sum: i64, value: i64| sum + value), |sum| sum * 100);
/// assert_eq!(reduce(collector, 0, vec![1, 2, 3]), 600);
/// ```
pub fn completing<In, T, F>(inner: T, complete: F) -> Completing<T, F>
where
    T: Transformer<In>,
    F: FnOnce(T::Acc) -> T::Acc,
{
    Completing { inner, complete }
}

impl<In, T, F> Transformer<In> for Completing<T, F>
where
    T: Transformer<In>,
    F: FnOnce(T::Acc) -> T::Acc,
{
    type Acc = T::Acc;

    fn init(&self) -> Result<Self::Acc, TransduceError> {
        self.inner.init()
    }

    fn step(&mut self, accumulator: Self::Acc, input: In) -> Step<Self::Acc> {
        self.inner.step(accumulator, input)
    }

    fn result(self, accumulator: Self::Acc) -> Self::Acc {
        (self.complete)(accumulator)
    }
}

// =============================================================================
// First - take one input and stop
// =============================================================================

/// A collector that captures the first input it sees and terminates.
///
/// Built by [`first`]. The accumulator is an `Option`: `init` seeds `None`,
/// the very first step returns `Step::Reduced(Some(input))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct First;

/// A premade collector answering "find the first element".
///
/// Composes naturally after a [`filter`](crate::filter) or
/// [`drop_while`](crate::drop_while) stage: the pipeline stops as soon as
/// one element reaches the collector, so the source is never exhausted.
///
/// # Examples
///
/// ```rust
/// use xduce::{drop_while, first, iter_source, transduce};
///
/// let found = transduce(
///     drop_while(|value: &u64| *value < 100),
///     first(),
///     None,
///     iter_source(0..),
/// );
/// assert_eq!(found, Some(100));
/// ```
#[must_use]
pub fn first() -> First {
    First
}

impl<In> Transformer<In> for First {
    type Acc = Option<In>;

    fn init(&self) -> Result<Option<In>, TransduceError> {
        Ok(None)
    }

    fn step(&mut self, _accumulator: Option<In>, input: In) -> Step<Option<In>> {
        Step::Reduced(Some(input))
    }

    fn result(self, accumulator: Option<In>) -> Option<In> {
        accumulator
    }
}

// =============================================================================
// Tests
// =============================================================================
