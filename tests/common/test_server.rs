use super::fixtures::{TestCities, API_KEY};
use comfort_index::di::Services;
use comfort_index::server::build_router;
use comfort_index_domain::Config;
use serde_json::Value;
use std::io::Write;
use std::net::SocketAddr;
use tempfile::NamedTempFile;
use tokio_util::sync::CancellationToken;
use wiremock::MockServer;

/// Full server on a loopback port, talking to a wiremock upstream.
pub struct TestServer {
    addr: SocketAddr,
    upstream: MockServer,
    shutdown: CancellationToken,
    _cities_file: NamedTempFile,
}

impl TestServer {
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        TestServerBuilder::new().start().await
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn upstream(&self) -> &MockServer {
        &self.upstream
    }

    pub fn client(&self) -> TestClient {
        TestClient::new(self.addr)
    }

    pub fn shutdown(self) {
        self.shutdown.cancel();
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

pub struct TestServerBuilder {
    cities: Vec<&'static str>,
    api_token: Option<String>,
    raw_ttl_secs: u64,
    aggregate_ttl_secs: u64,
    request_timeout_secs: u64,
    cors_allowed_origins: Vec<String>,
}

impl TestServerBuilder {
    pub fn new() -> Self {
        Self {
            cities: TestCities::all(),
            api_token: None,
            raw_ttl_secs: 300,
            aggregate_ttl_secs: 300,
            request_timeout_secs: 5,
            cors_allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }

    pub fn with_cities(mut self, cities: Vec<&'static str>) -> Self {
        self.cities = cities;
        self
    }

    pub fn with_api_token(mut self, token: &str) -> Self {
        self.api_token = Some(token.to_string());
        self
    }

    pub fn with_ttls(mut self, raw_secs: u64, aggregate_secs: u64) -> Self {
        self.raw_ttl_secs = raw_secs;
        self.aggregate_ttl_secs = aggregate_secs;
        self
    }

    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_cors_origins(mut self, origins: &[&str]) -> Self {
        self.cors_allowed_origins = origins.iter().map(|o| o.to_string()).collect();
        self
    }

    pub async fn start(self) -> Result<TestServer, Box<dyn std::error::Error>> {
        let upstream = MockServer::start().await;

        let mut cities_file = NamedTempFile::new()?;
        cities_file.write_all(TestCities::document(&self.cities).as_bytes())?;

        let mut config = Config::default();
        config.weather.api_key = API_KEY.to_string();
        config.weather.base_url = upstream.uri();
        config.weather.request_timeout_secs = self.request_timeout_secs;
        config.cities.path = cities_file.path().display().to_string();
        config.cache.raw_ttl_secs = self.raw_ttl_secs;
        config.cache.aggregate_ttl_secs = self.aggregate_ttl_secs;
        config.server.api_token = self.api_token;
        config.server.cors_allowed_origins = self.cors_allowed_origins;
        config.validate()?;

        let services = Services::build(&config)?;
        let router = build_router(&config, services.app_state(&config));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let signal = shutdown.clone();

        tokio::spawn(async move {
            let _ = axum::serve(listener, router)
                .with_graceful_shutdown(async move { signal.cancelled().await })
                .await;
        });

        Ok(TestServer {
            addr,
            upstream,
            shutdown,
            _cities_file: cities_file,
        })
    }
}

impl Default for TestServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TestClient {
    base: String,
    http: reqwest::Client,
}

impl TestClient {
    pub fn new(addr: SocketAddr) -> Self {
        Self {
            base: format!("http://{addr}"),
            http: reqwest::Client::new(),
        }
    }

    pub async fn get(&self, path: &str) -> (u16, Value) {
        self.send(path, None).await
    }

    pub async fn get_with_token(&self, path: &str, token: &str) -> (u16, Value) {
        self.send(path, Some(token)).await
    }

    /// Returns the `Access-Control-Allow-Origin` header sent back for `origin`.
    pub async fn allowed_origin(&self, path: &str, origin: &str) -> Option<String> {
        let response = self
            .http
            .get(format!("{}{}", self.base, path))
            .header("Origin", origin)
            .send()
            .await
            .expect("request failed");
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    async fn send(&self, path: &str, token: Option<&str>) -> (u16, Value) {
        let mut request = self.http.get(format!("{}{}", self.base, path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.expect("request failed");
        let status = response.status().as_u16();
        let body = response.bytes().await.expect("body read failed");
        let value = serde_json::from_slice(&body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()));
        (status, value)
    }
}
