//! Session orchestrator. One pass: host readiness, identity, fetch,
//! extraction, render decision. Every failure below this level propagates
//! up and is converted into a terminal outcome here, so the session never
//! ends stuck on an intermediate status.

use anyhow::Result;

use crate::extract;
use crate::hub::CastSource;
use crate::session::HostSession;

pub const NO_IDENTITY_MESSAGE: &str =
    "Unable to determine your Farcaster ID. Please try again inside Farcaster.";
pub const FETCHING_MESSAGE: &str = "Fetching your images...";
pub const EMPTY_MESSAGE: &str = "No images were found in your casts.";
pub const FAILURE_MESSAGE: &str = "An error occurred while loading images.";

/// Terminal state of a gallery session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The host context carried no fid; no fetch was attempted.
    NoIdentity,
    /// Readiness, fetch, or decode failed. The detail is for the console
    /// log; the page gets the generic failure message.
    Failed(String),
    /// The fetch succeeded but no cast carried an image.
    Empty,
    /// Unique image URLs, first-seen order.
    Rendered(Vec<String>),
}

impl Outcome {
    /// User-facing status text for the page. Empty on success, where the
    /// gallery itself is the content.
    pub fn status_message(&self) -> &str {
        match self {
            Outcome::NoIdentity => NO_IDENTITY_MESSAGE,
            Outcome::Failed(_) => FAILURE_MESSAGE,
            Outcome::Empty => EMPTY_MESSAGE,
            Outcome::Rendered(_) => "",
        }
    }
}

/// Drive one session to its terminal state. This is the single top-level
/// error handler: any `Err` from below is logged in full and surfaced as
/// the generic failure outcome.
pub async fn run_session(session: &dyn HostSession, source: &dyn CastSource) -> Outcome {
    match drive(session, source).await {
        Ok(outcome) => outcome,
        Err(error) => {
            eprintln!("gallery session failed: {error:#}");
            Outcome::Failed(format!("{error:#}"))
        }
    }
}

async fn drive(session: &dyn HostSession, source: &dyn CastSource) -> Result<Outcome> {
    let context = session.ready().await?;

    let Some(fid) = context.fid() else {
        return Ok(Outcome::NoIdentity);
    };

    eprintln!("{FETCHING_MESSAGE}");
    let messages = source.casts_by_fid(fid).await?;

    let images = extract::collect_images(&messages);
    if images.is_empty() {
        return Ok(Outcome::Empty);
    }

    Ok(Outcome::Rendered(images))
}
