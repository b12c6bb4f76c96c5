//! Grouping stages: `partition_by` and `partition_all`.
//!
//! Both stages buffer inputs and forward whole partitions as `Vec`s, which
//! makes them the stateful heart of the protocol: they are the reason
//! [`result`](crate::Transformer::result) exists, since a pending buffer
//! must be flushed after the source is exhausted.

use std::mem;

use smallvec::SmallVec;

use crate::error::TransduceError;
use crate::step::Step;
use crate::transducer::Transducer;
use crate::transformer::Transformer;

/// Inline capacity for partition buffers before they spill to the heap.
const PARTITION_INLINE: usize = 8;

// =============================================================================
// partition_by
// =============================================================================

/// The `partition_by` transducer. Built by [`partition_by`].
#[derive(Debug, Clone, Copy)]
pub struct PartitionBy<In, F, K> {
    function: F,
    marker: std::marker::PhantomData<fn(In) -> K>,
}

/// The transformer produced by applying [`PartitionBy`]. Carries the
/// pending partition and the key of its elements.
#[derive(Debug, Clone)]
pub struct PartitionByTransformer<In, F, K, Inner> {
    function: F,
    previous: Option<K>,
    buffer: SmallVec<[In; PARTITION_INLINE]>,
    inner: Inner,
}

/// Groups consecutive inputs that map to equal keys into `Vec` partitions.
///
/// A key change flushes the pending partition to the inner transformer and
/// starts a new one with the current input. The final partition is flushed
/// by `result`.
///
/// # Examples
///
/// ```rust
/// use xduce::{into, partition_by};
///
/// let runs: Vec<Vec<i32>> = into(
///     Vec::new(),
///     partition_by(|value: &i32| *value),
///     vec![1, 1, 1, 2, 2, 3, 3, 3, 3],
/// );
/// assert_eq!(runs, vec![vec![1, 1, 1], vec![2, 2], vec![3, 3, 3, 3]]);
/// ```
#[must_use]
pub fn partition_by<In, K, F>(function: F) -> PartitionBy<In, F, K>
where
    F: FnMut(&In) -> K,
    K: PartialEq,
{
    PartitionBy {
        function,
        marker: std::marker::PhantomData,
    }
}

impl<Inner, In, F, K> Transducer<Inner> for PartitionBy<In, F, K> {
    type Transformer = PartitionByTransformer<In, F, K, Inner>;

    fn apply(self, inner: Inner) -> Self::Transformer {
        PartitionByTransformer {
            function: self.function,
            previous: None,
            buffer: SmallVec::new(),
            inner,
        }
    }
}

impl<In, K, F, Inner> Transformer<In> for PartitionByTransformer<In, F, K, Inner>
where
    F: FnMut(&In) -> K,
    K: PartialEq,
    Inner: Transformer<Vec<In>>,
{
    type Acc = Inner::Acc;

    fn init(&self) -> Result<Self::Acc, TransduceError> {
        self.inner.init()
    }

    fn step(&mut self, accumulator: Self::Acc, input: In) -> Step<Self::Acc> {
        let key = (self.function)(&input);
        if self.buffer.is_empty() || self.previous.as_ref() == Some(&key) {
            self.previous = Some(key);
            self.buffer.push(input);
            return Step::Continue(accumulator);
        }

        let partition = mem::take(&mut self.buffer).into_vec();
        let outcome = self.inner.step(accumulator, partition);
        if let Step::Continue(_) = outcome {
            self.previous = Some(key);
            self.buffer.push(input);
        }
        outcome
    }

    fn result(mut self, accumulator: Self::Acc) -> Self::Acc {
        let accumulator = if self.buffer.is_empty() {
            accumulator
        } else {
            let partition = mem::take(&mut self.buffer).into_vec();
            self.inner.step(accumulator, partition).unreduced()
        };
        self.inner.result(accumulator)
    }
}

// =============================================================================
// partition_all
// =============================================================================

/// The `partition_all` transducer. Built by [`partition_all`].
#[derive(Debug, Clone, Copy)]
pub struct PartitionAll<In> {
    size: usize,
    marker: std::marker::PhantomData<fn(In)>,
}

/// The transformer produced by applying [`PartitionAll`]. Carries the
/// pending partition.
#[derive(Debug, Clone)]
pub struct PartitionAllTransformer<In, Inner> {
    size: usize,
    buffer: SmallVec<[In; PARTITION_INLINE]>,
    inner: Inner,
}

/// Groups inputs into `Vec` partitions of `size` elements.
///
/// Every partition except possibly the last has exactly `size` elements;
/// the last, flushed by `result`, holds whatever remains.
///
/// # Panics
///
/// Panics if `size` is 0.
///
/// # Examples
///
/// ```rust
/// use xduce::{into, partition_all};
///
/// let pairs: Vec<Vec<i32>> = into(Vec::new(), partition_all(2), vec![1, 2, 3, 4, 5]);
/// assert_eq!(pairs, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
#[must_use]
pub fn partition_all<In>(size: usize) -> PartitionAll<In> {
    assert!(size > 0, "partition_all requires size > 0");
    PartitionAll {
        size,
        marker: std::marker::PhantomData,
    }
}

impl<Inner, In> Transducer<Inner> for PartitionAll<In> {
    type Transformer = PartitionAllTransformer<In, Inner>;

    fn apply(self, inner: Inner) -> Self::Transformer {
        PartitionAllTransformer {
            size: self.size,
            buffer: SmallVec::new(),
            inner,
        }
    }
}

impl<In, Inner> Transformer<In> for PartitionAllTransformer<In, Inner>
where
    Inner: Transformer<Vec<In>>,
{
    type Acc = Inner::Acc;

    fn init(&self) -> Result<Self::Acc, TransduceError> {
        self.inner.init()
    }

    fn step(&mut self, accumulator: Self::Acc, input: In) -> Step<Self::Acc> {
        self.buffer.push(input);
        if self.buffer.len() == self.size {
            let partition = mem::take(&mut self.buffer).into_vec();
            self.inner.step(accumulator, partition)
        } else {
            Step::Continue(accumulator)
        }
    }

    fn result(mut self, accumulator: Self::Acc) -> Self::Acc {
        let accumulator = if self.buffer.is_empty() {
            accumulator
        } else {
            let partition = mem::take(&mut self.buffer).into_vec();
            self.inner.step(accumulator, partition).unreduced()
        };
        self.inner.result(accumulator)
    }
}
