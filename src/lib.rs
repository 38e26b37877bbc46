//! # Magic Session - Mini-program Login Adapter
//!
//! This is a facade crate that re-exports all public APIs from the magic session
//! components. Use this crate to get access to the login service in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! magic_session = { path = "../magic_session" }
//! ```
//!
//! ## Structure
//!
//! - **Core types**: envelopes, `Session`, `LoginServiceError`, HTTP traits
//! - **Login service**: `LoginService` with `login`, `check` and `write_error`
//! - **Adapters**: `HttpAuthBackend`, `Settings`
//! - **Axum integration**: request/response wrappers and routes
//! - **Service**: `SessionService` - a standalone server

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and HTTP traits
pub mod core {
    pub use magic_session_core::*;
}

// Re-export most commonly used core types at the root level
pub use magic_session_core::{
    AuthBackend, AuthRequest, AuthResponseBuilder, AuthResult, BackendCallError, ErrorKind,
    LoginServiceError, SESSION_MAGIC, Session, UsageError,
};

// ============================================================================
// Login Service (Application Layer)
// ============================================================================

pub use magic_session_application::{Completion, LoginService, Outcome, completion};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Auth server clients
    pub mod backend {
        pub use magic_session_adapters::backend::*;
    }

    /// Configuration
    pub mod config {
        pub use magic_session_adapters::config::*;
    }

    /// Axum request/response wrappers and routes
    pub mod axum {
        pub use magic_session_axum::*;
    }
}

pub use magic_session_adapters::{backend::HttpAuthBackend, config::Settings};

// ============================================================================
// Session Service (Main Entry Point)
// ============================================================================

pub use magic_session_service::SessionService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing `AuthBackend`
pub use async_trait::async_trait;

/// Re-export secrecy for reading session keys
pub use secrecy::{ExposeSecret, Secret};

pub use http;
pub use serde_json;
