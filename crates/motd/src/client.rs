use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::types::MotdResponse;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct MotdClient {
    http: reqwest::Client,
}

impl MotdClient {
    pub fn new() -> Result<Self, Error> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http })
    }

    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    pub async fn fetch_motd(&self, endpoint: &Endpoint) -> Result<MotdResponse, Error> {
        let body = self.get(endpoint).await?;
        Ok(serde_json::from_slice::<MotdResponse>(&body)?)
    }

    /// Full body as text, byte-for-byte.
    pub async fn fetch_text(&self, endpoint: &Endpoint) -> Result<String, Error> {
        let body = self.get(endpoint).await?;
        Ok(String::from_utf8(body)?)
    }

    async fn get(&self, endpoint: &Endpoint) -> Result<Vec<u8>, Error> {
        let resp = self.http.get(endpoint.as_url().clone()).send().await?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api { status, body });
        }

        Ok(resp.bytes().await?.to_vec())
    }
}
