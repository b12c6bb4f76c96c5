//! Error types for the reduction protocol.
//!
//! Most mis-uses of this library are unrepresentable: a missing predicate
//! does not type-check, an unsupported source has no [`Reducible`]
//! implementation, and `comp!` rejects fewer than two stages at compile
//! time. What remains is the one contract that only surfaces at run time:
//! asking a collector that was built from a bare step closure to invent an
//! initial accumulator.
//!
//! [`Reducible`]: crate::Reducible

/// Represents a request for an initial accumulator that the collector
/// cannot satisfy.
///
/// Collectors adapted from plain step closures via [`wrap`](crate::wrap)
/// have no zero value. Reductions seeded through
/// [`transduce_init`](crate::transduce_init) ask the collector for one and
/// surface this error when none exists; supplying an explicit initial value
/// avoids the call entirely.
///
/// # Examples
///
/// ```rust
/// use xduce::UninitializedAccumulatorError;
///
/// let error = UninitializedAccumulatorError { collector: "Wrap" };
/// assert_eq!(
///     format!("{}", error),
///     "Wrap::init: no initial accumulator available. Supply an explicit initial value."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UninitializedAccumulatorError {
    /// The name of the collector that was asked for an initial accumulator.
    pub collector: &'static str,
}

impl std::fmt::Display for UninitializedAccumulatorError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}::init: no initial accumulator available. Supply an explicit initial value.",
            self.collector
        )
    }
}

impl std::error::Error for UninitializedAccumulatorError {}

/// Represents errors that can occur while running a reduction.
///
/// This enum provides a unified error type for the reduction protocol.
/// Currently it only contains `UninitializedAccumulator`, but it is designed
/// to be extensible for future error types.
///
/// # Examples
///
/// ```rust
/// use xduce::{TransduceError, UninitializedAccumulatorError};
///
/// let error = TransduceError::UninitializedAccumulator(UninitializedAccumulatorError {
///     collector: "Wrap",
/// });
/// println!("{}", error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransduceError {
    /// The collector has no initial accumulator and none was supplied.
    UninitializedAccumulator(UninitializedAccumulatorError),
}

impl std::fmt::Display for TransduceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UninitializedAccumulator(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for TransduceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninitialized_accumulator_error_display() {
        let error = UninitializedAccumulatorError { collector: "Wrap" };
        assert_eq!(
            format!("{error}"),
            "Wrap::init: no initial accumulator available. Supply an explicit initial value."
        );
    }

    #[test]
    fn test_transduce_error_display() {
        let error = TransduceError::UninitializedAccumulator(UninitializedAccumulatorError {
            collector: "Wrap",
        });
        assert_eq!(
            format!("{error}"),
            "Wrap::init: no initial accumulator available. Supply an explicit initial value."
        );
    }

    #[test]
    fn test_uninitialized_accumulator_error_equality() {
        let error1 = UninitializedAccumulatorError { collector: "Wrap" };
        let error2 = UninitializedAccumulatorError { collector: "Wrap" };
        let error3 = UninitializedAccumulatorError { collector: "Appender" };
        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_transduce_error_clone() {
        let error = TransduceError::UninitializedAccumulator(UninitializedAccumulatorError {
            collector: "Wrap",
        });
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }

    #[test]
    fn test_transduce_error_source() {
        use std::error::Error;

        let error = TransduceError::UninitializedAccumulator(UninitializedAccumulatorError {
            collector: "Wrap",
        });
        assert!(error.source().is_none());
    }

    #[test]
    fn test_uninitialized_accumulator_error_is_error() {
        use std::error::Error;

        let error = UninitializedAccumulatorError { collector: "Wrap" };
        let _: &dyn Error = &error;
    }
}
