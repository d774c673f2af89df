#![allow(dead_code)]

use motd::{Endpoints, MotdClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const JSON_PATH: &str = "/motd.json";
pub const TEXT_PATH: &str = "/motd.txt";
pub const SPLASH_PATH: &str = "/splash.txt";

pub struct TestHarness {
    pub mock_server: MockServer,
    pub client: MotdClient,
}

impl TestHarness {
    pub async fn new() -> Self {
        Self {
            mock_server: MockServer::start().await,
            client: MotdClient::new().unwrap(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.mock_server.uri())
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::at(&self.mock_server.uri())
    }

    pub async fn mount_json(&self, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(JSON_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(&body)
                    .insert_header("Content-Type", "application/json"),
            )
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mount_raw(&self, at: &str, body: impl AsRef<[u8]>) {
        Mock::given(method("GET"))
            .and(path(at))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(body.as_ref().to_vec())
                    .insert_header("Content-Type", "text/plain; charset=utf-8"),
            )
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mount_error(&self, at: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(at))
            .respond_with(ResponseTemplate::new(status).set_body_string("upstream failed"))
            .expect(1)
            .mount(&self.mock_server)
            .await;
    }

    pub async fn received(&self) -> usize {
        self.mock_server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}

/// Nothing listens here, so requests fail at connect time.
pub fn unreachable_url(path: &str) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}{path}")
}
