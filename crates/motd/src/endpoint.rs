use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::Error;

/// An absolute `http`/`https` URL that retrieval is allowed to hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(Url);

impl Endpoint {
    pub fn parse(input: &str) -> Result<Self, Error> {
        let url = Url::parse(input.trim())?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::UnsupportedUrl(format!(
                "scheme {} is not http(s)",
                url.scheme()
            )));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(Error::UnsupportedUrl("missing host".into()));
        }

        Ok(Self(url))
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn into_url(self) -> Url {
        self.0
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
