pub mod http_auth_backend;

pub use http_auth_backend::{HttpAuthBackend, HttpAuthBackendError};
