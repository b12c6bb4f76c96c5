//! Transducer constructors and composition.
//!
//! A transducer is a value that, given the next (inner) transformer in a
//! pipeline, produces a new transformer wrapping it - a transformation of a
//! reduction, independent of both the input source and the output
//! collector. This module provides:
//!
//! - the [`Transducer`] trait itself;
//! - the stage constructors: [`map`], [`filter`], [`remove`], [`keep`],
//!   [`keep_indexed`], [`take`], [`take_while`], [`take_nth`], [`drop`],
//!   [`drop_while`], [`partition_by`], [`partition_all`], [`cat`],
//!   [`mapcat`];
//! - composition: [`comp`], the [`comp!`](crate::comp!) macro, and the
//!   function helpers [`identity`] and [`complement`].
//!
//! # Statefulness and reuse
//!
//! Constructor values are cheap, stateless configuration. All per-reduction
//! state (remaining counts, partition buffers, index counters) lives in the
//! transformer produced by [`Transducer::apply`], which consumes the
//! constructor: one application is one fresh state tree. To run the same
//! pipeline twice, clone the constructor value - every constructor is
//! `Clone` whenever its captured functions are.
//!
//! # Examples
//!
//! ```rust
//! use xduce::{comp, filter, map, transduce, wrap};
//!
//! let pipeline = comp!(map(|value: i32| value + 1), filter(|value: &i32| value % 2 == 0));
//! let evens = transduce(
//!     pipeline,
//!     wrap(|mut output: Vec<i32>, value| {
//!         output.push(value);
//!         output
//!     }),
//!     Vec::new(),
//!     vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
//! );
//! assert_eq!(evens, vec![2, 4, 6, 8, 10]);
//! ```

mod cat;
mod compose;
mod drop;
mod filter;
mod map;
mod partition;
mod take;

pub use cat::{Cat, CatTransformer, cat, mapcat};
pub use compose::{Comp, comp, complement, identity};
pub use drop::{DropWhile, DropWhileTransformer, Dropping, DroppingTransformer, drop, drop_while};
pub use filter::{Filter, FilterTransformer, filter, remove};
pub use map::{
    Keep, KeepIndexed, KeepIndexedTransformer, KeepTransformer, Map, MapTransformer, keep,
    keep_indexed, map,
};
pub use partition::{
    PartitionAll, PartitionAllTransformer, PartitionBy, PartitionByTransformer, partition_all,
    partition_by,
};
pub use take::{
    Take, TakeNth, TakeNthTransformer, TakeTransformer, TakeWhile, TakeWhileTransformer, take,
    take_nth, take_while,
};

/// A transformation of a reduction: inner transformer in, outer transformer
/// out.
///
/// Applying a transducer to the transformer that sits closer to the
/// collector yields a transformer one stage further from it. Because
/// `apply` consumes `self`, a pipeline value cannot be applied twice; the
/// per-reduction state it creates is exclusively owned by one reduction.
///
/// # Examples
///
/// ```rust
/// use xduce::{Transducer, map, reduce, wrap};
///
/// let transformer = map(|value: i32| value * 2)
///     .apply(wrap(|sum: i32, value: i32| sum + value));
/// assert_eq!(reduce(transformer, 0, vec![1, 2, 3]), 12);
/// ```
pub trait Transducer<Inner> {
    /// The transformer produced by wrapping `Inner`.
    type Transformer;

    /// Wraps the inner transformer, producing this stage's transformer.
    fn apply(self, inner: Inner) -> Self::Transformer;
}
