//! Axum integration for the magic session login service.
//!
//! # Usage
//!
//! ```ignore
//! use magic_session_axum::routes;
//! use magic_session_adapters::backend::HttpAuthBackend;
//!
//! let app = Router::new()
//!     .route("/login", post(routes::login::<HttpAuthBackend>))
//!     .route("/user", get(routes::user::<HttpAuthBackend>))
//!     .with_state(backend);
//! ```

pub mod adapters;
pub mod routes;

// Re-export for convenience
pub use adapters::{AxumRequest, AxumResponseBuilder, response_builder};
