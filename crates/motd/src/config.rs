use serde::Deserialize;

use crate::error::Error;

pub const DEFAULT_JSON_URL: &str = "https://site.tylerdakin.com/motd.json";
pub const DEFAULT_TEXT_URL: &str = "https://site.tylerdakin.com/motd.txt";
pub const DEFAULT_SPLASH_URL: &str = "https://site.tylerdakin.com/splash.txt";

const ENV_PREFIX: &str = "MOTD_";

/// The three URLs the presenter pulls from. Kept as raw strings: each retrieval
/// validates its own URL so that a bad one surfaces as "URL not valid" at call time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Endpoints {
    #[serde(rename = "json_url", default = "default_json_url")]
    pub json: String,
    #[serde(rename = "text_url", default = "default_text_url")]
    pub text: String,
    #[serde(rename = "splash_url", default = "default_splash_url")]
    pub splash: String,
}

fn default_json_url() -> String {
    DEFAULT_JSON_URL.to_string()
}

fn default_text_url() -> String {
    DEFAULT_TEXT_URL.to_string()
}

fn default_splash_url() -> String {
    DEFAULT_SPLASH_URL.to_string()
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            json: default_json_url(),
            text: default_text_url(),
            splash: default_splash_url(),
        }
    }
}

impl Endpoints {
    /// Reads `MOTD_JSON_URL`, `MOTD_TEXT_URL` and `MOTD_SPLASH_URL`, falling back to the defaults.
    pub fn from_env() -> Result<Self, Error> {
        Ok(envy::prefixed(ENV_PREFIX).from_env::<Self>()?)
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter::<_, Self>(vars)?)
    }

    pub fn with_json(mut self, url: impl Into<String>) -> Self {
        self.json = url.into();
        self
    }

    pub fn with_text(mut self, url: impl Into<String>) -> Self {
        self.text = url.into();
        self
    }

    pub fn with_splash(mut self, url: impl Into<String>) -> Self {
        self.splash = url.into();
        self
    }

    /// Every endpoint rooted at `base`, with the file names the default server uses.
    pub fn at(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            json: format!("{base}/motd.json"),
            text: format!("{base}/motd.txt"),
            splash: format!("{base}/splash.txt"),
        }
    }
}
