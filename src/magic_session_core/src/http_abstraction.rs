//! Zero-cost HTTP abstraction traits for the login service.
//!
//! The login service is bound to one inbound request and one outbound response.
//! Both are expressed as traits that web frameworks implement directly on
//! their own types (via newtype wrappers), so the service never depends on a
//! particular framework.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  magic_session_core: Defines HTTP traits │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  magic_session_axum: Newtype wrappers    │
//! │  struct AxumRequest(axum::Request)       │
//! │  impl AuthRequest for AxumRequest { }    │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  LoginService reads headers and writes   │
//! │  its JSON bodies through these traits    │
//! └──────────────────────────────────────────┘
//! ```

/// Trait for HTTP requests the login service reads credentials from.
///
/// # Implementation Notes
///
/// - Return `&str` references directly from the framework's data structures
/// - Header lookup must be case-insensitive (per HTTP spec)
///
/// # Example
///
/// ```ignore
/// pub struct AxumRequest(pub axum::http::Request<axum::body::Body>);
///
/// impl AuthRequest for AxumRequest {
///     fn header(&self, name: &str) -> Option<&str> {
///         self.0.headers().get(name)?.to_str().ok()
///     }
/// }
/// ```
pub trait AuthRequest {
    /// Get a header value by name.
    ///
    /// Returns `None` if the header doesn't exist or isn't valid UTF-8.
    fn header(&self, name: &str) -> Option<&str>;

    /// Get a header value by name, falling back to an empty string.
    fn header_or_empty(&self, name: &str) -> &str {
        self.header(name).unwrap_or_default()
    }
}

/// Trait for building the HTTP response the login service writes to.
///
/// This follows the builder pattern, allowing method chaining:
/// ```ignore
/// builder
///     .status(200)
///     .json_body(json!({"sessionMagic": 1}))
///     .build()
/// ```
///
/// `build` consumes the builder, so a response can only be produced once.
pub trait AuthResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    /// Set the HTTP status code
    fn status(self, code: u16) -> Self;

    /// Add an HTTP header
    fn header(self, name: &str, value: &str) -> Self;

    /// Set a JSON body with Content-Type header
    fn json_body(self, body: serde_json::Value) -> Self;

    /// Build the final response
    fn build(self) -> Self::Response;
}

/// Helper methods for creating common responses.
///
/// Automatically implemented for all types that implement `AuthResponseBuilder`.
pub trait AuthResponseHelpers: AuthResponseBuilder {
    /// Create a 200 OK JSON response
    fn ok_json(self, body: serde_json::Value) -> Self::Response {
        self.status(200).json_body(body).build()
    }
}

// Blanket implementation for all AuthResponseBuilder types
impl<T: AuthResponseBuilder> AuthResponseHelpers for T {}
