use serde::Deserialize;

/// Payload served by the JSON endpoint. Fields other than `motd` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MotdResponse {
    pub motd: String,
}
