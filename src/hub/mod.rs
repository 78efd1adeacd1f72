pub mod client;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

pub use client::HubClient;

/// Response envelope of the hub's `castsByFid` endpoint. Every field the
/// hub may omit defaults to empty so extraction never sees a missing
/// value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CastsResponse {
    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub data: Option<MessageData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageData {
    #[serde(rename = "castAddBody", default)]
    pub cast_add_body: Option<CastAddBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CastAddBody {
    #[serde(default)]
    pub embeds: Vec<Embed>,
    #[serde(default)]
    pub text: String,
}

/// An embed is either a bare URL string or an object carrying a `url`
/// field. Anything else the hub sends (cast quotes, frames, ...) lands in
/// `Other` and is ignored rather than failing the whole page.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Embed {
    Url(String),
    Object(EmbedObject),
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbedObject {
    #[serde(default)]
    pub url: Option<String>,
}

impl Message {
    /// The cast body with every optional field resolved to its fallback.
    pub fn body(&self) -> CastAddBody {
        self.data
            .as_ref()
            .and_then(|data| data.cast_add_body.clone())
            .unwrap_or_default()
    }
}

/// Source of a user's casts. `HubClient` is the real one; tests drive the
/// orchestrator with stubs.
#[async_trait]
pub trait CastSource: Send + Sync {
    async fn casts_by_fid(&self, fid: u64) -> Result<Vec<Message>>;
}
