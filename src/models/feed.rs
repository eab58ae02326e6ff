use serde::{Deserialize, Serialize};

/// Control message sent once after the feed channel opens
#[derive(Debug, Clone, Serialize)]
pub struct SubscribeRequest {
    method: &'static str,
}

impl SubscribeRequest {
    /// Subscribe to announcements of newly created tokens
    pub fn new_tokens() -> Self {
        Self { method: "subscribeNewToken" }
    }
}

/// One pushed announcement from the launch feed
///
/// Every field is optional from this client's perspective; the channel's
/// own acknowledgement frame carries none of them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTokenMessage {
    #[serde(default)]
    pub ca: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}
