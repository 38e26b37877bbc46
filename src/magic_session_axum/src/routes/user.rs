//! Axum-specific session check route.

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use magic_session_application::{LoginService, completion};
use magic_session_core::{AuthBackend, AuthResult, SESSION_MAGIC};
use serde::Serialize;

use crate::adapters::{AxumRequest, response_builder};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub session_magic: u8,
    #[serde(flatten)]
    pub result: AuthResult,
}

/// Axum session check route.
///
/// Runs `check` with a completion: the user info is answered here, failures
/// are handed back to the login service to write.
#[tracing::instrument(name = "User", skip_all)]
pub async fn user<K>(State(backend): State<K>, request: Request) -> Response
where
    K: AuthBackend + Clone + 'static,
{
    let mut service = LoginService::new(AxumRequest(request), response_builder(), backend);

    let mut outcome = None;
    service
        .check(Some(completion(|result| outcome = Some(result))))
        .await;

    match outcome {
        Some(Ok(result)) => (
            StatusCode::OK,
            Json(UserResponse {
                session_magic: SESSION_MAGIC,
                result,
            }),
        )
            .into_response(),
        Some(Err(error)) => {
            service.write_error(&error);
            service
                .into_response()
                .unwrap_or_else(|| StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
