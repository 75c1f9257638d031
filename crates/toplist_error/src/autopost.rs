//! Autopost scheduler error types.

/// Error kinds for scheduler lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AutopostErrorKind {
    /// `start` was called while the loop was already running.
    #[display("Autoposter is already running")]
    AlreadyRunning,

    /// `stop` was called while the loop was not running.
    #[display("Autoposter is not running")]
    NotRunning,

    /// The loop task panicked or was cancelled out from under us.
    #[display("Autopost loop task failed: {}", _0)]
    TaskFailed(String),
}

impl AutopostErrorKind {
    /// Whether the failed call can simply be retried later.
    ///
    /// Lifecycle misuse is recoverable: the caller's loop (if any) keeps
    /// running and the call can be reissued after a matching `stop`/`start`.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::AlreadyRunning | Self::NotRunning)
    }
}

/// Scheduler error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Autopost error: {} at {}:{}", kind, file, line)]
pub struct AutopostError {
    /// Error kind.
    pub kind: AutopostErrorKind,
    /// Line number where the error occurred.
    pub line: u32,
    /// File where the error occurred.
    pub file: &'static str,
}

impl AutopostError {
    /// Create a new autopost error at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use toplist_error::{AutopostError, AutopostErrorKind};
    ///
    /// let err = AutopostError::new(AutopostErrorKind::AlreadyRunning);
    /// assert!(err.is_recoverable());
    /// ```
    #[track_caller]
    pub fn new(kind: AutopostErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether the failed call can simply be retried later.
    pub fn is_recoverable(&self) -> bool {
        self.kind.is_recoverable()
    }
}
