//! Vote webhook error types.

/// Error kinds for inbound webhook requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum WebhookErrorKind {
    /// The `Authorization` header was absent.
    #[display("Missing authorization header")]
    MissingSecret,

    /// The `Authorization` header did not match the configured secret.
    #[display("Authorization header did not match")]
    Unauthorized,

    /// The request body was not a recognizable vote payload.
    #[display("Malformed vote payload: {}", _0)]
    MalformedPayload(String),
}

impl WebhookErrorKind {
    /// HTTP status code this error maps to at the route boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingSecret | Self::Unauthorized => 401,
            Self::MalformedPayload(_) => 400,
        }
    }
}

/// Webhook error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Webhook error: {} at {}:{}", kind, file, line)]
pub struct WebhookError {
    /// Error kind.
    pub kind: WebhookErrorKind,
    /// Line number where the error occurred.
    pub line: u32,
    /// File where the error occurred.
    pub file: &'static str,
}

impl WebhookError {
    /// Create a new webhook error at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use toplist_error::{WebhookError, WebhookErrorKind};
    ///
    /// let err = WebhookError::new(WebhookErrorKind::Unauthorized);
    /// assert_eq!(err.status_code(), 401);
    /// ```
    #[track_caller]
    pub fn new(kind: WebhookErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// HTTP status code this error maps to at the route boundary.
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }
}
