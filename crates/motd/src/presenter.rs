use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::client::MotdClient;
use crate::config::Endpoints;
use crate::endpoint::Endpoint;
use crate::retrieve::URL_NOT_VALID;

pub const PICK_A_SOURCE: &str = "Pick a source!";
pub const BUTTON_NOT_RECOGNIZED: &str = "Button not recognized.";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Source {
    #[strum(serialize = "JSON")]
    Json,
    #[strum(serialize = "Text")]
    Text,
    #[strum(serialize = "Random")]
    Random,
}

/// Posts new label text to whoever owns the display.
///
/// Only the receiving side may write the label. Once the receiver is gone,
/// posts are dropped.
#[derive(Clone)]
pub struct MotdSink {
    tx: mpsc::UnboundedSender<String>,
}

impl MotdSink {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn post(&self, motd: impl Into<String>) {
        if self.tx.send(motd.into()).is_err() {
            tracing::debug!("motd_display_closed");
        }
    }
}

impl From<mpsc::UnboundedSender<String>> for MotdSink {
    fn from(tx: mpsc::UnboundedSender<String>) -> Self {
        Self { tx }
    }
}

/// Turns button presses into retrievals and posts each result back through the sink.
#[derive(Clone)]
pub struct Presenter {
    client: MotdClient,
    endpoints: Endpoints,
    sink: MotdSink,
}

impl Presenter {
    pub fn new(client: MotdClient, endpoints: Endpoints, sink: impl Into<MotdSink>) -> Self {
        Self {
            client,
            endpoints,
            sink: sink.into(),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn url_for(&self, source: Source) -> &str {
        match source {
            Source::Json => &self.endpoints.json,
            Source::Text => &self.endpoints.text,
            Source::Random => &self.endpoints.splash,
        }
    }

    /// Dispatches on a button title. Unknown titles post `"Button not recognized."`.
    pub fn press(&self, title: &str) -> Option<JoinHandle<()>> {
        match title.parse::<Source>() {
            Ok(source) => self.request(source),
            Err(_) => {
                tracing::warn!(title, "unknown_button");
                self.sink.post(BUTTON_NOT_RECOGNIZED);
                None
            }
        }
    }

    /// Starts a retrieval for `source` on the runtime.
    ///
    /// A malformed URL posts `"URL not valid"` right away and spawns nothing.
    /// Must be called from within a tokio runtime.
    pub fn request(&self, source: Source) -> Option<JoinHandle<()>> {
        let url = self.url_for(source).to_string();

        if Endpoint::parse(&url).is_err() {
            tracing::warn!(%source, url = %url, "invalid_endpoint");
            self.sink.post(URL_NOT_VALID);
            return None;
        }

        tracing::info!(%source, url = %url, "motd_requested");

        let client = self.client.clone();
        let sink = self.sink.clone();

        Some(tokio::spawn(async move {
            let motd = match source {
                Source::Json => client.motd_from_json(&url).await,
                Source::Text => Some(client.motd_from_text(&url).await),
                Source::Random => Some(client.splash_text(&url).await),
            };

            if let Some(motd) = motd {
                sink.post(motd);
            }
        }))
    }
}
