use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Platforms the backend is known to draft for, in display order.
pub const KNOWN_PLATFORMS: [&str; 3] = ["LinkedIn", "Twitter", "Instagram"];

/// Body of `POST /generate`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// Successful response of `POST /generate`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratePayload {
    pub summary: String,
    /// Draft text keyed by platform name. The key set is chosen by the backend.
    pub drafts: BTreeMap<String, String>,
}

impl GeneratePayload {
    /// Drafts with known platforms first, then any others by name.
    pub fn ordered_drafts(&self) -> Vec<(&str, &str)> {
        let known = KNOWN_PLATFORMS
            .iter()
            .filter_map(|platform| self.drafts.get_key_value(*platform));
        let others = self
            .drafts
            .iter()
            .filter(|(platform, _)| !KNOWN_PLATFORMS.contains(&platform.as_str()));

        known
            .chain(others)
            .map(|(platform, text)| (platform.as_str(), text.as_str()))
            .collect()
    }
}
