//! Dispatcher configuration error types.

/// Error kinds for dispatcher construction.
///
/// Per-target HTTP failures and timeouts are never surfaced here; those are
/// recorded as outcomes in the cycle result. Only setup problems that make a
/// dispatcher unusable become errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ClientErrorKind {
    /// No targets were configured.
    #[display("No bot-list targets configured")]
    NoTargets,

    /// Two targets share the same bot-list name.
    #[display("Duplicate target for bot list: {}", _0)]
    DuplicateTarget(String),

    /// The base URL for a target could not be parsed.
    #[display("Invalid base URL for {}: {}", list, url)]
    InvalidBaseUrl {
        /// Bot-list name the URL belongs to.
        list: String,
        /// The offending URL.
        url: String,
    },

    /// The underlying HTTP client could not be built.
    #[display("Failed to build HTTP client: {}", _0)]
    ClientBuild(String),
}

/// Dispatcher configuration error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Client error: {} at {}:{}", kind, file, line)]
pub struct ClientError {
    /// Error kind.
    pub kind: ClientErrorKind,
    /// Line number where the error occurred.
    pub line: u32,
    /// File where the error occurred.
    pub file: &'static str,
}

impl ClientError {
    /// Create a new client error at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use toplist_error::{ClientError, ClientErrorKind};
    ///
    /// let err = ClientError::new(ClientErrorKind::NoTargets);
    /// assert_eq!(err.kind, ClientErrorKind::NoTargets);
    /// ```
    #[track_caller]
    pub fn new(kind: ClientErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
