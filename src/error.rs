use thiserror::Error;

pub type Result<T> = core::result::Result<T, ThreadviewError>;

/// Errors reported by the explicit thread-validation helper.
///
/// Grouping itself is total and never fails; these cover violated caller
/// preconditions surfaced by
/// [`MessageGrouper::validate_thread`](crate::MessageGrouper::validate_thread).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThreadviewError {
    #[error("Message at index {index} is older than its predecessor")]
    UnsortedInput { index: usize },

    #[error("Message at index {index} steps down the delivery-status ladder for its sender")]
    StatusRegression { index: usize },
}
