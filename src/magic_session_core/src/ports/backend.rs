use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{
    envelope::{BackendRequestEnvelope, BackendResponseEnvelope},
    error::BackendCallError,
};

const HTTP_OK: u16 = 200;

/// Body of an auth server reply, as received.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyBody {
    Json(Value),
    Text(String),
}

impl ReplyBody {
    /// Keep the body as JSON when it parses, as raw text otherwise.
    pub fn parse(raw: String) -> Self {
        match serde_json::from_str(&raw) {
            Ok(value) => ReplyBody::Json(value),
            Err(_) => ReplyBody::Text(raw),
        }
    }
}

/// Transport status plus body of one auth server call.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendReply {
    pub status: u16,
    pub body: ReplyBody,
}

impl BackendReply {
    pub fn new(status: u16, body: ReplyBody) -> Self {
        Self { status, body }
    }

    /// Interpret the reply as a response envelope.
    ///
    /// Only a 200 reply carrying a JSON object is trusted.
    pub fn into_response_envelope(self) -> Result<BackendResponseEnvelope, BackendCallError> {
        if self.status != HTTP_OK {
            return Err(BackendCallError::BadStatus(self.status));
        }

        match self.body {
            ReplyBody::Json(body @ Value::Object(_)) => {
                serde_json::from_value(body).map_err(|_| BackendCallError::MalformedBody)
            }
            _ => Err(BackendCallError::MalformedBody),
        }
    }
}

/// The remote auth server, reduced to the one call the login service needs.
///
/// Implementations perform exactly one request per `invoke`; retries and
/// pooling policies are not part of this contract.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn invoke(&self, envelope: &BackendRequestEnvelope)
    -> Result<BackendReply, BackendCallError>;
}
