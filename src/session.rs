//! Host session context: who is looking at the gallery?
//!
//! The host runtime (the mini-app container) hands over a small JSON
//! context once it is ready. The only field this crate cares about is the
//! viewer's fid. Everything is optional on the wire; a context without a
//! fid is a valid context, it just means the gallery cannot be built.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionContext {
    #[serde(default)]
    pub user: Option<SessionUser>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub fid: Option<u64>,
}

impl SessionContext {
    /// The viewer's fid, if the host supplied one. A fid of 0 counts as
    /// absent, matching the host SDK's falsy check.
    pub fn fid(&self) -> Option<u64> {
        match self.user.as_ref().and_then(|user| user.fid) {
            Some(0) | None => None,
            fid => fid,
        }
    }
}

/// Readiness signal plus session state from the host runtime.
#[async_trait]
pub trait HostSession: Send + Sync {
    /// Resolves once the host is ready, yielding the session context.
    async fn ready(&self) -> Result<SessionContext>;
}

/// Session context handed over by the host as a JSON file on disk.
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl HostSession for FileSession {
    async fn ready(&self) -> Result<SessionContext> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read session context {}", self.path.display()))?;
        let context: SessionContext = serde_json::from_str(&raw)
            .with_context(|| format!("malformed session context {}", self.path.display()))?;
        Ok(context)
    }
}
