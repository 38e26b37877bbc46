//! Wire envelopes exchanged with the auth server.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http_abstraction::AuthRequest;

pub const ENVELOPE_VERSION: u8 = 1;
pub const COMPONENT_NAME: &str = "MA";

/// Backend return code for a successful call.
pub const RETURN_CODE_SUCCESS: i64 = 0;
/// Backend return code for an expired session (only meaningful for `check`).
pub const RETURN_CODE_SESSION_EXPIRED: i64 = 60011;

pub mod headers {
    pub const CODE: &str = "code";
    pub const ENCRYPT_DATA: &str = "encrypt_data";
    pub const ID: &str = "id";
    pub const SKEY: &str = "skey";
}

/// Backend interfaces the login service talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceName {
    Login,
    Check,
}

impl InterfaceName {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterfaceName::Login => "login",
            InterfaceName::Check => "check",
        }
    }

    /// Request headers forwarded as `para` entries, keyed by the same name.
    pub fn para_headers(&self) -> &'static [&'static str] {
        match self {
            InterfaceName::Login => &[headers::CODE, headers::ENCRYPT_DATA],
            InterfaceName::Check => &[headers::ID, headers::SKEY],
        }
    }
}

impl fmt::Display for InterfaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interface {
    pub interface_name: InterfaceName,
    pub para: BTreeMap<String, String>,
}

/// Outbound payload POSTed to the auth server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendRequestEnvelope {
    pub version: u8,
    pub component_name: &'static str,
    pub interface: Interface,
}

impl BackendRequestEnvelope {
    pub fn new(interface_name: InterfaceName, para: BTreeMap<String, String>) -> Self {
        Self {
            version: ENVELOPE_VERSION,
            component_name: COMPONENT_NAME,
            interface: Interface {
                interface_name,
                para,
            },
        }
    }

    /// Build the envelope for `interface_name` from the request headers.
    ///
    /// Missing headers are forwarded as empty strings; the auth server is the
    /// one that rejects bad credentials.
    pub fn from_request<R: AuthRequest>(interface_name: InterfaceName, request: &R) -> Self {
        let para = interface_name
            .para_headers()
            .iter()
            .map(|name| (name.to_string(), request.header_or_empty(name).to_string()))
            .collect();

        Self::new(interface_name, para)
    }
}

/// Parsed reply from the auth server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendResponseEnvelope {
    pub return_code: i64,
    #[serde(default)]
    pub return_message: String,
    #[serde(default)]
    pub return_data: Value,
}
