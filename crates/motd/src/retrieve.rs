use rand::Rng;
use rand::seq::IndexedRandom;

use crate::client::MotdClient;
use crate::endpoint::Endpoint;
use crate::error::Error;

pub const URL_NOT_VALID: &str = "URL not valid";
pub const DECODE_FAILED: &str = "ERROR: Could not decode into Response.self";
pub const NO_MESSAGE_RECEIVED: &str = "No message received.";
pub const NO_TEXT_RECEIVED: &str = "No text received.";
pub const NO_MESSAGE_FOUND: &str = "No message was found.";

impl MotdClient {
    /// Fetches `{"motd": ...}` and returns the message to display.
    ///
    /// `None` means the request itself failed: the error is logged and the
    /// displayed value must be left as it is. Every other outcome, including an
    /// undecodable body, yields a string to show.
    pub async fn motd_from_json(&self, url: &str) -> Option<String> {
        let Ok(endpoint) = Endpoint::parse(url) else {
            return Some(URL_NOT_VALID.to_string());
        };

        match self.fetch_motd(&endpoint).await {
            Ok(response) => Some(response.motd),
            Err(Error::Json(e)) => {
                tracing::warn!(error = %e, url = %endpoint, "motd_decode_failed");
                Some(DECODE_FAILED.to_string())
            }
            Err(e) => {
                tracing::error!(error = %e, url = %endpoint, "motd_no_data_found");
                None
            }
        }
    }

    /// Fetches a plain-text MOTD verbatim, or `"No message received."` on failure.
    pub async fn motd_from_text(&self, url: &str) -> String {
        let Ok(endpoint) = Endpoint::parse(url) else {
            return URL_NOT_VALID.to_string();
        };

        match self.fetch_text(&endpoint).await {
            Ok(message) => message,
            Err(e) => {
                tracing::error!(error = %e, url = %endpoint, "motd_text_retrieval_failed");
                NO_MESSAGE_RECEIVED.to_string()
            }
        }
    }

    /// Returns the body at `url` as text. Failures collapse into
    /// `"URL not valid"` or `"No text received."`, so the result is always displayable.
    pub async fn retrieve_text(&self, url: &str) -> String {
        let Ok(endpoint) = Endpoint::parse(url) else {
            return URL_NOT_VALID.to_string();
        };

        match self.fetch_text(&endpoint).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, url = %endpoint, "text_retrieval_failed");
                NO_TEXT_RECEIVED.to_string()
            }
        }
    }

    /// One line of the splash file at `url`, drawn fresh on every call.
    pub async fn splash_text(&self, url: &str) -> String {
        let text = self.retrieve_text(url).await;
        pick_line(&text, &mut rand::rng())
    }
}

/// Picks one non-empty `'\n'`-separated line of `text` uniformly at random.
pub fn pick_line<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let lines: Vec<&str> = text.split('\n').filter(|line| !line.is_empty()).collect();

    lines
        .choose(rng)
        .map(|line| (*line).to_string())
        .unwrap_or_else(|| NO_MESSAGE_FOUND.to_string())
}
