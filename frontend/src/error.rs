use thiserror::Error;

/// Failure taxonomy for every user-visible operation.
///
/// `Validation` is a local precondition failure: no request was sent.
/// `Auth` is a rejected login/sign-up exchange; it never tears down an
/// already-established session. `Network` covers transport failures,
/// non-2xx statuses, and responses that fail to decode.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Auth(String),
    #[error("request failed: {0}")]
    Network(String),
}
