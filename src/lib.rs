//! # xduce
//!
//! A transducer library for Rust: composable, allocation-minimizing
//! transformation pipelines decoupled from both the input source and the
//! output collector.
//!
//! ## Overview
//!
//! A reduction runs in three roles:
//!
//! - a **source** ([`Reducible`]) produces elements: vectors, slices,
//!   arrays, text, maps, or any iterator via [`iter_source`];
//! - a **transducer pipeline** ([`Transducer`], built from [`map`],
//!   [`filter`], [`take`], [`partition_by`] and friends, composed with
//!   [`comp!`]) transforms elements as they flow, with no intermediate
//!   collections;
//! - a **collector** ([`Transformer`]) accumulates the output: a plain
//!   closure via [`wrap`], an appending collector via [`into`](into()), or
//!   anything implementing the protocol directly.
//!
//! Early termination is a value, not an exception: any stage may return
//! [`Step::Reduced`] and the engine stops pulling from the source, which
//! makes pipelines over infinite sources finish.
//!
//! ## Example
//!
//! ```rust
//! use xduce::{comp, filter, map, transduce, wrap};
//!
//! let result = transduce(
//!     comp!(map(|value: i32| value + 1), filter(|value: &i32| value % 2 == 0)),
//!     wrap(|mut output: Vec<i32>, value| {
//!         output.push(value);
//!         output
//!     }),
//!     Vec::new(),
//!     vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
//! );
//! assert_eq!(result, vec![2, 4, 6, 8, 10]);
//! ```
//!
//! ## Reuse
//!
//! Applying a pipeline to a collector consumes it and produces the fresh
//! per-reduction state (counters, buffers) that one reduction exclusively
//! owns. Run a pipeline twice by cloning it first - constructors are `Clone`
//! whenever their captured closures are.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod reduce;
pub mod step;
pub mod transducer;
pub mod transformer;

pub use error::{TransduceError, UninitializedAccumulatorError};
pub use reduce::{
    Appender, IterSource, Reducible, into, iter_source, reduce, to_fn, transduce, transduce_init,
};
pub use step::{Step, reduced};
pub use transducer::{
    Cat, Comp, DropWhile, Dropping, Filter, Keep, KeepIndexed, Map, PartitionAll, PartitionBy,
    Take, TakeNth, TakeWhile, Transducer, cat, comp, complement, drop, drop_while, filter,
    identity, keep, keep_indexed, map, mapcat, partition_all, partition_by, remove, take,
    take_nth, take_while,
};
pub use transformer::{Completing, First, Transformer, Wrap, completing, first, wrap};
