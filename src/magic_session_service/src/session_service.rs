use axum::{
    Json, Router,
    http::{HeaderName, HeaderValue, Method, request},
    response::IntoResponse,
    routing::{get, post},
};
use magic_session_adapters::config::AllowedOrigins;
use magic_session_axum::routes::{login, user};
use magic_session_core::{AuthBackend, headers};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Service exposing the login and session check routes
pub struct SessionService {
    router: Router,
}

impl SessionService {
    /// Create a new SessionService talking to `backend`
    ///
    /// The backend is cloned into every request's `LoginService`, so it
    /// should be cheap to clone.
    pub fn new<K>(backend: K) -> Self
    where
        K: AuthBackend + Clone + 'static,
    {
        let router = Router::new()
            .route("/health", get(health))
            .route("/login", post(login::<K>))
            .route("/user", get(user::<K>))
            .with_state(backend);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the SessionService into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([
                    HeaderName::from_static(headers::CODE),
                    HeaderName::from_static(headers::ENCRYPT_DATA),
                    HeaderName::from_static(headers::ID),
                    HeaderName::from_static(headers::SKEY),
                ])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Session service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
