//! Minimal `LifelogsClient` trait and shared types for the Limitless
//! lifelogs API.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

pub mod config;
pub mod http_client;
pub mod utils;

#[derive(Debug, Error)]
pub enum LimitlessError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("authentication failed ({status}): {body}")]
    Auth { status: u16, body: String },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unexpected status {status}: {body}")]
    ApiStatus { status: u16, body: String },
    #[error("configuration error: {0}")]
    Config(String),
}

impl LimitlessError {
    /// HTTP status code carried by the error, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            LimitlessError::Auth { status, .. } | LimitlessError::ApiStatus { status, .. } => {
                Some(*status)
            }
            LimitlessError::NotFound(_) => Some(404),
            LimitlessError::Http(e) => e.status().map(|s| s.as_u16()),
            LimitlessError::Config(_) => None,
        }
    }
}

/// A single lifelog record. Opaque to the client: fields are handed to the
/// caller exactly as the server sent them, in server order.
pub type Lifelog = serde_json::Value;

/// Sort direction forwarded to the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// Parameters for a lifelogs fetch.
///
/// `limit` is the overall record target across all pages; `None` keeps
/// paginating until the server runs out. `batch_size` is the per-page size
/// requested from the server, capped by `limit` when one is set.
#[derive(Clone, Debug)]
pub struct LifelogQuery {
    pub limit: Option<u32>,
    pub batch_size: u32,
    pub include_markdown: bool,
    pub include_headings: bool,
    /// Opaque date filter, forwarded verbatim when set.
    pub date: Option<String>,
    /// IANA zone name. Resolved from the local system zone when unset.
    pub timezone: Option<String>,
    pub direction: Direction,
}

impl Default for LifelogQuery {
    fn default() -> Self {
        Self {
            limit: None,
            batch_size: 10,
            include_markdown: true,
            include_headings: false,
            date: None,
            timezone: None,
            direction: Direction::Asc,
        }
    }
}

impl LifelogQuery {
    /// Page size actually requested from the server. Never asks for more
    /// records than the overall target.
    pub fn effective_batch_size(&self) -> u32 {
        match self.limit {
            Some(limit) => self.batch_size.min(limit),
            None => self.batch_size,
        }
    }
}

/// One decoded page of the paginated lifelogs listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LifelogPage {
    pub lifelogs: Vec<Lifelog>,
    pub next_cursor: Option<String>,
}

impl LifelogPage {
    /// Decode a response body.
    ///
    /// Every level of the envelope defaults to empty when absent, and a body
    /// that is not JSON at all decodes to an empty page rather than failing.
    pub fn from_body(body: &str) -> Self {
        let envelope: Envelope = match serde_json::from_str(body) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(error = %e, "lifelogs page body was not valid JSON, treating as empty");
                Envelope::default()
            }
        };
        Self {
            lifelogs: envelope.data.lifelogs,
            next_cursor: envelope.meta.lifelogs.next_cursor,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: DataSection,
    #[serde(default)]
    meta: MetaSection,
}

#[derive(Debug, Default, Deserialize)]
struct DataSection {
    #[serde(default)]
    lifelogs: Vec<Lifelog>,
}

#[derive(Debug, Default, Deserialize)]
struct MetaSection {
    #[serde(default)]
    lifelogs: MetaLifelogs,
}

#[derive(Debug, Default, Deserialize)]
struct MetaLifelogs {
    #[serde(default, rename = "nextCursor")]
    next_cursor: Option<String>,
}

#[async_trait]
pub trait LifelogsClient: Send + Sync + 'static {
    /// Fetch lifelogs page by page until `query.limit` is reached or the
    /// server signals the end of the listing.
    async fn get_lifelogs(&self, query: &LifelogQuery) -> Result<Vec<Lifelog>, LimitlessError>;
}
