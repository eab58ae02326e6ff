use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::feed::NewTokenMessage;

/// Name given to feed records that arrive without one
pub const DEFAULT_TOKEN_NAME: &str = "Unnamed token";

/// Description stamped onto every feed-sourced record
pub const FEED_DESCRIPTION: &str = "New token created";

/// A single launched token as shown in the display list
///
/// Records come from two sources: decoded feed announcements (most fields
/// defaulted) and successful local creations. They are never updated in
/// place and never individually deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Ledger address string; may be empty for feed-sourced records
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub description: String,
    /// Empty for feed records, a transient local reference for created ones
    pub image_url: String,
    pub value: f64,
    /// Percentage string
    pub change: String,
    pub created_at: DateTime<Utc>,
}

impl TokenRecord {
    /// Build a record from a feed announcement, applying field defaults
    pub fn from_feed(message: NewTokenMessage) -> Self {
        Self {
            id: message.ca.unwrap_or_default(),
            name: message
                .name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_TOKEN_NAME.to_string()),
            symbol: message.symbol.unwrap_or_default(),
            description: FEED_DESCRIPTION.to_string(),
            image_url: String::new(),
            value: 0.0,
            change: "0".to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Display sort applied to the token list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most recent `created_at` first
    #[default]
    Newest,
    /// Highest `value` first
    HighestValue,
    /// Lowest `value` first
    LowestValue,
}

impl FromStr for SortOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "highest" => Ok(Self::HighestValue),
            "lowest" => Ok(Self::LowestValue),
            other => Err(anyhow::anyhow!(
                "Unknown sort order '{}' (expected newest, highest or lowest)",
                other
            )),
        }
    }
}
