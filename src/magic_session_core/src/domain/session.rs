use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::error::LoginServiceError;

/// Protocol marker present in every body written by the login service.
pub const SESSION_MAGIC: u8 = 1;

/// Session handed to the client after a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub id: String,
    pub skey: Secret<String>,
}

impl Session {
    pub fn new(id: impl Into<String>, skey: Secret<String>) -> Self {
        Self {
            id: id.into(),
            skey,
        }
    }

    fn to_json(&self) -> Value {
        json!({ "id": self.id, "skey": self.skey.expose_secret() })
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.skey.expose_secret() == other.skey.expose_secret()
    }
}

/// Result delivered to the completion on success of either operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResult {
    pub user_info: Value,
}

/// `returnData` of a successful `login` call.
#[derive(Debug, Deserialize)]
pub struct LoginData {
    pub id: String,
    pub skey: Secret<String>,
    #[serde(default)]
    pub user_info: Value,
}

impl LoginData {
    pub fn into_parts(self) -> (Session, AuthResult) {
        (
            Session::new(self.id, self.skey),
            AuthResult {
                user_info: self.user_info,
            },
        )
    }
}

/// `returnData` of a successful `check` call.
#[derive(Debug, Deserialize)]
pub struct CheckData {
    #[serde(default)]
    pub user_info: Value,
}

impl From<CheckData> for AuthResult {
    fn from(data: CheckData) -> Self {
        AuthResult {
            user_info: data.user_info,
        }
    }
}

/// Body written directly to the HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputEnvelope {
    Session(Session),
    Error(LoginServiceError),
}

impl OutputEnvelope {
    pub fn to_json(&self) -> Value {
        let mut body = Map::new();
        body.insert("sessionMagic".to_string(), Value::from(SESSION_MAGIC));

        match self {
            OutputEnvelope::Session(session) => {
                body.insert("session".to_string(), session.to_json());
            }
            OutputEnvelope::Error(error) => {
                body.insert("error".to_string(), Value::from(error.kind.as_str()));
                body.insert("message".to_string(), Value::from(error.message.clone()));
            }
        }

        Value::Object(body)
    }
}
