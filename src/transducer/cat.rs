//! Flattening stages: `cat` and `mapcat`.
//!
//! `cat` treats each input as a collection in its own right and reduces it
//! through the rest of the pipeline, one nested reduction per input, with
//! no intermediate collection.
//!
//! # Termination across nested reductions
//!
//! A [`Step::Reduced`] produced inside a nested reduction must stop the
//! outer loop as well as the inner one. The nested loop here is
//! [`Reducible::reduce_steps`], which stops on the signal and hands it back
//! without unwrapping or finalizing; `cat` returns it to the outer loop
//! untouched. The signal therefore exists at exactly one level of wrapping
//! end to end - there is no re-wrap step to get wrong.

use crate::error::TransduceError;
use crate::reduce::Reducible;
use crate::step::Step;
use crate::transducer::Transducer;
use crate::transducer::compose::{Comp, comp};
use crate::transducer::map::{Map, map};
use crate::transformer::Transformer;

/// The `cat` transducer. Built by [`cat`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Cat;

/// The transformer produced by applying [`Cat`].
#[derive(Debug, Clone)]
pub struct CatTransformer<Inner> {
    inner: Inner,
}

/// Flattens inputs that are themselves reducible collections.
///
/// Each input is reduced through the inner transformer in place. Early
/// termination signalled inside a nested collection stops the whole
/// pipeline, not just that collection.
///
/// # Examples
///
/// ```rust
/// use xduce::{cat, into};
///
/// let flat: Vec<i32> = into(Vec::new(), cat(), vec![vec![1, 2], vec![3], vec![4, 5]]);
/// assert_eq!(flat, vec![1, 2, 3, 4, 5]);
/// ```
#[must_use]
pub fn cat() -> Cat {
    Cat
}

impl<Inner> Transducer<Inner> for Cat {
    type Transformer = CatTransformer<Inner>;

    fn apply(self, inner: Inner) -> Self::Transformer {
        CatTransformer { inner }
    }
}

impl<C, Inner> Transformer<C> for CatTransformer<Inner>
where
    C: Reducible,
    Inner: Transformer<C::Item>,
{
    type Acc = Inner::Acc;

    fn init(&self) -> Result<Self::Acc, TransduceError> {
        self.inner.init()
    }

    fn step(&mut self, accumulator: Self::Acc, input: C) -> Step<Self::Acc> {
        input.reduce_steps(&mut self.inner, accumulator)
    }

    fn result(self, accumulator: Self::Acc) -> Self::Acc {
        self.inner.result(accumulator)
    }
}

/// Maps each input to a collection and flattens the results.
///
/// `mapcat(f)` is `comp(map(f), cat())`.
///
/// # Examples
///
/// ```rust
/// use xduce::{into, mapcat};
///
/// let flattened: Vec<i32> = into(
///     Vec::new(),
///     mapcat(|mut values: Vec<i32>| {
///         values.reverse();
///         values
///     }),
///     vec![vec![3, 2, 1], vec![6, 5, 4], vec![9, 8, 7]],
/// );
/// assert_eq!(flattened, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
#[must_use]
pub fn mapcat<In, Out, F>(function: F) -> Comp<Map<F>, Cat>
where
    F: FnMut(In) -> Out,
    Out: Reducible,
{
    comp(map(function), cat())
}
