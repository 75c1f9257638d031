//! Stat source error type.

/// Error returned by a stat source when the current guild count cannot be
/// read (for example, the host bot framework has not finished connecting).
///
/// The scheduler converts this into an event and skips the cycle; it never
/// terminates the loop.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Stat source error: {} at {}:{}", message, file, line)]
pub struct StatSourceError {
    /// What went wrong, in the source's own words.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// File where the error occurred.
    pub file: &'static str,
}

impl StatSourceError {
    /// Create a new stat source error at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use toplist_error::StatSourceError;
    ///
    /// let err = StatSourceError::new("gateway not ready");
    /// assert!(err.message.contains("not ready"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
