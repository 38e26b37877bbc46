//! Standalone HTTP service exposing the login service routes.

pub mod session_service;
pub mod tracing;

pub use session_service::SessionService;
