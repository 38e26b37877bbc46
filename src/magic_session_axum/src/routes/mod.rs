//! Axum-specific route handlers.
//!
//! These routes use Axum's extractors, hand the request to a `LoginService`
//! and turn what it produced into an Axum response.

pub mod login;
pub mod user;

pub use login::login;
pub use user::{UserResponse, user};
