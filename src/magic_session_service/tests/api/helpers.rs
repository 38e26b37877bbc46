use magic_session_adapters::{backend::HttpAuthBackend, config::test};
use magic_session_service::SessionService;
use reqwest::Url;
use tokio::net::TcpListener;
use wiremock::MockServer;

pub const AUTH_PATH: &str = "/mina_auth/";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub auth_server: MockServer,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let auth_server = MockServer::start().await;

        let url = Url::parse(&format!("{}{}", auth_server.uri(), AUTH_PATH))
            .expect("Failed to parse mock auth server URL");
        let backend_client = reqwest::Client::builder()
            .timeout(test::auth_server::TIMEOUT)
            .build()
            .expect("Failed to build backend HTTP client");
        let backend = HttpAuthBackend::new(url, backend_client);

        let listener = TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!(
            "http://{}",
            listener.local_addr().expect("Failed to read local address")
        );

        tokio::spawn(SessionService::new(backend).run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
            auth_server,
        }
    }

    pub async fn post_login(&self, headers: &[(&str, &str)]) -> reqwest::Response {
        let mut request = self.http_client.post(format!("{}/login", self.address));
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn get_user(&self, headers: &[(&str, &str)]) -> reqwest::Response {
        let mut request = self.http_client.get(format!("{}/user", self.address));
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn get_health(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/health", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
