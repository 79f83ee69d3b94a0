use thiserror::Error;

/// Errors raised by the distance functions.
///
/// Exceeding a caller-supplied bound is not an error: bounded functions
/// return `max_d + 1` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// One of the inputs has more characters than the configured maximum.
    #[error("argument exceeds the maximum length of {max_length} characters")]
    InputTooLong { length: usize, max_length: usize },
}

/// Result type for distance operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `Ok(())` if `length` fits within `max_length`.
    pub(crate) fn check_length(length: usize, max_length: usize) -> Result<()> {
        if length > max_length {
            log::debug!("rejecting input of {length} characters (max {max_length})");
            return Err(Error::InputTooLong { length, max_length });
        }
        Ok(())
    }
}
