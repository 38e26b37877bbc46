use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Closed set of classifications a login service failure can carry.
///
/// The serialized form is the wire name the client SDK switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    LoginFailed,
    CheckLoginFailed,
    SessionExpired,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::LoginFailed => "LOGIN_FAILED",
            ErrorKind::CheckLoginFailed => "CHECK_LOGIN_FAILED",
            ErrorKind::SessionExpired => "SESSION_EXPIRED",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified login service failure.
///
/// Everything that goes wrong inside `login` or `check` ends up as one of
/// these before it reaches the completion or the response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct LoginServiceError {
    pub kind: ErrorKind,
    pub message: String,
}

impl LoginServiceError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn login_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LoginFailed, message)
    }

    pub fn check_login_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CheckLoginFailed, message)
    }

    pub fn session_expired(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SessionExpired, message)
    }
}

/// Unclassified failures raised while talking to the auth server.
///
/// These never leave the login service as-is; they are wrapped into a
/// [`LoginServiceError`] of the operation's generic kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendCallError {
    #[error("auth API request failed: network or server error")]
    BadStatus(u16),
    #[error("auth API request failed: {0}")]
    Transport(String),
    #[error("auth server returned malformed JSON")]
    MalformedBody,
    #[error("#{code} - {message}")]
    Rejected { code: i64, message: String },
}

/// Misuse of the login service API that cannot be recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("write_error expects a LoginServiceError, got: {0}")]
    NotClassified(String),
}
