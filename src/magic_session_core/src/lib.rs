pub mod domain;
pub mod http_abstraction;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    envelope::{
        BackendRequestEnvelope, BackendResponseEnvelope, COMPONENT_NAME, ENVELOPE_VERSION,
        Interface, InterfaceName, RETURN_CODE_SESSION_EXPIRED, RETURN_CODE_SUCCESS, headers,
    },
    error::{BackendCallError, ErrorKind, LoginServiceError, UsageError},
    session::{AuthResult, CheckData, LoginData, OutputEnvelope, SESSION_MAGIC, Session},
};

pub use ports::backend::{AuthBackend, BackendReply, ReplyBody};

pub use http_abstraction::{AuthRequest, AuthResponseBuilder, AuthResponseHelpers};
