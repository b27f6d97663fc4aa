//! Common error types used across the workspace.
//!
//! Each layer defines typed errors and converts via `#[from]`; the
//! controllers in `camwatch-app` are the outermost catch sites.

/// Top-level error for camwatch operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CamwatchError {
    /// A domain invariant was violated before any request was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A call to the monitoring backend failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl CamwatchError {
    /// Message suitable for a user-facing notification.
    ///
    /// Server-provided error messages are passed through verbatim.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Api(err) => err.to_string(),
        }
    }
}

/// Domain validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A risk level value outside `baixo|medio|alto|critico`.
    #[error("unknown risk level `{0}`")]
    UnknownRiskLevel(String),

    /// A required field was empty (after trimming).
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    /// The dashboard already holds the maximum number of cameras.
    #[error("dashboard `{dashboard_id}` already has {max} cameras (maximum allowed)")]
    DashboardFull { dashboard_id: String, max: usize },
}

/// Failures talking to the monitoring backend over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    ///
    /// `message` carries the `error` field of the JSON body when present and
    /// is displayed verbatim.
    #[error("{}", describe_status(.status, .message))]
    Status { status: u16, message: Option<String> },

    /// The body could not be decoded or lacked an expected field.
    #[error("malformed response: {0}")]
    Malformed(String),
}

fn describe_status(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("HTTP {status}"),
    }
}
