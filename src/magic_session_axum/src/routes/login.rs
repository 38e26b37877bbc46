//! Axum-specific login route.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use magic_session_application::LoginService;
use magic_session_core::AuthBackend;

use crate::adapters::{AxumRequest, response_builder};

/// Axum login route.
///
/// Runs `login` with the default completion, so both the session and any
/// failure are written by the login service itself.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<K>(State(backend): State<K>, request: Request) -> Response
where
    K: AuthBackend + Clone + 'static,
{
    let mut service = LoginService::new(AxumRequest(request), response_builder(), backend);

    service.login(None).await;

    service
        .into_response()
        .unwrap_or_else(|| StatusCode::NO_CONTENT.into_response())
}
