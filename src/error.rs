//! Typed failures for the pipeline stages.
//!
//! Fetch and asset failures are recovered per keyword / per item and collected
//! into the run state. A precondition failure means a stage ran before the one
//! that feeds it and always aborts the run.

use chrono::{DateTime, Utc};
use std::fmt;
use std::path::PathBuf;

/// Why a single keyword contributed nothing.
#[derive(Debug, thiserror::Error)]
pub enum FetchCause {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status}")]
    Status { status: u16 },
    #[error("invalid search URL: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, thiserror::Error)]
#[error("fetch failed for keyword {keyword:?}: {cause}")]
pub struct FetchError {
    pub keyword: String,
    #[source]
    pub cause: FetchCause,
}

/// A file the composer needs (stock image or font) could not be used.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("asset unavailable: {} ({reason})", path.display())]
pub struct AssetError {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Compose,
    Schedule,
    Personalize,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Compose => "compose",
            Stage::Schedule => "schedule",
            Stage::Personalize => "personalize",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{stage} stage reached item {item_index} before an earlier stage populated it")]
pub struct PreconditionError {
    pub stage: Stage,
    pub item_index: usize,
}

/// Anything that aborts a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StageError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
    #[error("publish time {now} + {offset_secs}s is out of range")]
    PublishTimeOutOfRange { now: DateTime<Utc>, offset_secs: i64 },
}

/// Per-item failure inside the image composer.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error("could not decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
    #[error("no image assets configured")]
    NoAssets,
}
