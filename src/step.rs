//! The reduced signal - early termination for reductions.
//!
//! Every step of a reduction answers the same question: keep folding, or
//! stop here? [`Step`] is that answer. A transformer returns
//! [`Step::Continue`] to accept more input and [`Step::Reduced`] to request
//! that the reduction engine stop pulling elements, carrying the final
//! accumulator either way.
//!
//! Modelling the signal as a closed enum (rather than a wrapper object that
//! may or may not be present) means the "is this value reduced?" question is
//! answered by pattern matching, and nested reductions cannot accidentally
//! wrap the signal twice: there is exactly one level of signal anywhere in
//! the system.
//!
//! # Laws
//!
//! - **Idempotence**: `step.ensure_reduced().ensure_reduced()` carries the
//!   same value as `step.ensure_reduced()`.
//! - **Unwrap totality**: `unreduced` returns the payload of either variant;
//!   there is no "not a signal" case left undefined.
//!
//! # Examples
//!
//! ```rust
//! use xduce::Step;
//!
//! let ongoing: Step<i32> = Step::Continue(10);
//! assert!(!ongoing.is_reduced());
//!
//! let halted = ongoing.ensure_reduced();
//! assert!(halted.is_reduced());
//! assert_eq!(halted.unreduced(), 10);
//! ```

/// The outcome of one reduction step: continue folding, or stop.
///
/// Both variants carry the accumulator. The reduction engine inspects the
/// variant after every [`step`](crate::Transformer::step) call and stops
/// pulling from the source as soon as it sees [`Step::Reduced`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<A> {
    /// The reduction should continue with this accumulator.
    Continue(A),
    /// The reduction should stop; this is the final accumulator.
    Reduced(A),
}

impl<A> Step<A> {
    /// Returns `true` when this step requests termination.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xduce::Step;
    ///
    /// assert!(Step::Reduced(1).is_reduced());
    /// assert!(!Step::Continue(1).is_reduced());
    /// ```
    #[must_use]
    pub const fn is_reduced(&self) -> bool {
        matches!(self, Self::Reduced(_))
    }

    /// Converts this step into a termination request, idempotently.
    ///
    /// A [`Step::Continue`] becomes [`Step::Reduced`] with the same payload;
    /// a [`Step::Reduced`] is returned unchanged. The signal is never
    /// wrapped twice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xduce::Step;
    ///
    /// let once = Step::Continue(5).ensure_reduced();
    /// let twice = once.ensure_reduced();
    /// assert_eq!(once, Step::Reduced(5));
    /// assert_eq!(twice, Step::Reduced(5));
    /// ```
    #[must_use]
    pub fn ensure_reduced(self) -> Self {
        match self {
            Self::Continue(value) => Self::Reduced(value),
            reduced @ Self::Reduced(_) => reduced,
        }
    }

    /// Unwraps the accumulator, whether or not termination was requested.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xduce::Step;
    ///
    /// assert_eq!(Step::Continue(3).unreduced(), 3);
    /// assert_eq!(Step::Reduced(3).unreduced(), 3);
    /// ```
    #[must_use]
    pub fn unreduced(self) -> A {
        match self {
            Self::Continue(value) | Self::Reduced(value) => value,
        }
    }

    /// Applies a function to the payload, preserving the signal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xduce::Step;
    ///
    /// assert_eq!(Step::Continue(2).map(|value| value * 10), Step::Continue(20));
    /// assert_eq!(Step::Reduced(2).map(|value| value * 10), Step::Reduced(20));
    /// ```
    #[must_use]
    pub fn map<B, F>(self, function: F) -> Step<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Continue(value) => Step::Continue(function(value)),
            Self::Reduced(value) => Step::Reduced(function(value)),
        }
    }
}

/// Wraps a value in a termination request.
///
/// Shorthand for [`Step::Reduced`], matching the vocabulary of the
/// transducer literature.
///
/// # Examples
///
/// ```rust
/// use xduce::{Step, reduced};
///
/// assert_eq!(reduced("done"), Step::Reduced("done"));
/// ```
#[must_use]
pub const fn reduced<A>(value: A) -> Step<A> {
    Step::Reduced(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn continue_is_not_reduced() {
        assert!(!Step::Continue(1).is_reduced());
    }

    #[rstest]
    fn reduced_is_reduced() {
        assert!(Step::Reduced(1).is_reduced());
    }

    #[rstest]
    fn reduced_function_builds_reduced_variant() {
        assert_eq!(reduced(42), Step::Reduced(42));
    }

    #[rstest]
    fn ensure_reduced_wraps_continue() {
        assert_eq!(Step::Continue(7).ensure_reduced(), Step::Reduced(7));
    }

    #[rstest]
    fn ensure_reduced_is_idempotent() {
        let once = Step::Continue(7).ensure_reduced();
        let twice = once.ensure_reduced();
        assert_eq!(once.unreduced(), twice.unreduced());
        assert!(twice.is_reduced());
    }

    #[rstest]
    fn unreduced_unwraps_either_variant() {
        assert_eq!(Step::Continue("a").unreduced(), "a");
        assert_eq!(Step::Reduced("a").unreduced(), "a");
    }

    #[rstest]
    fn map_preserves_the_signal() {
        assert_eq!(Step::Continue(2).map(|value| value + 1), Step::Continue(3));
        assert_eq!(Step::Reduced(2).map(|value| value + 1), Step::Reduced(3));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_ensure_reduced_idempotent(value in any::<i64>(), start_reduced in any::<bool>()) {
            let step = if start_reduced { Step::Reduced(value) } else { Step::Continue(value) };
            let once = step.ensure_reduced();
            let twice = once.ensure_reduced();
            prop_assert_eq!(once, twice);
            prop_assert!(twice.is_reduced());
        }

        #[test]
        fn prop_unreduced_returns_payload(value in any::<i64>()) {
            prop_assert_eq!(Step::Continue(value).unreduced(), value);
            prop_assert_eq!(Step::Reduced(value).unreduced(), value);
        }

        #[test]
        fn prop_map_commutes_with_unreduced(value in any::<i32>()) {
            let mapped = Step::Continue(value).map(i64::from);
            prop_assert_eq!(mapped.unreduced(), i64::from(value));
        }
    }
}
