//! Top-level error wrapper types.

use crate::{AutopostError, ClientError, StatSourceError, WebhookError};

/// The foundation error enum covering every toplist crate.
///
/// # Examples
///
/// ```
/// use toplist_error::{ToplistError, ClientError, ClientErrorKind};
///
/// let client_err = ClientError::new(ClientErrorKind::NoTargets);
/// let err: ToplistError = client_err.into();
/// assert!(format!("{}", err).contains("No bot-list targets"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ToplistErrorKind {
    /// Dispatcher configuration error.
    #[from(ClientError)]
    Client(ClientError),
    /// Scheduler lifecycle error.
    #[from(AutopostError)]
    Autopost(AutopostError),
    /// Stat source read error.
    #[from(StatSourceError)]
    StatSource(StatSourceError),
    /// Inbound webhook error.
    #[from(WebhookError)]
    Webhook(WebhookError),
}

/// Toplist error with kind discrimination.
///
/// # Examples
///
/// ```
/// use toplist_error::{ToplistResult, StatSourceError};
///
/// fn read_count() -> ToplistResult<u64> {
///     Err(StatSourceError::new("not connected"))?
/// }
///
/// assert!(read_count().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Toplist error: {}", _0)]
pub struct ToplistError(Box<ToplistErrorKind>);

impl ToplistError {
    /// Create a new error from a kind.
    pub fn new(kind: ToplistErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ToplistErrorKind {
        &self.0
    }
}

impl<T> From<T> for ToplistError
where
    T: Into<ToplistErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for toplist operations.
pub type ToplistResult<T> = std::result::Result<T, ToplistError>;
