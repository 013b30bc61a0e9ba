use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankTitlesRequest {
    pub titles: Vec<String>,
}

/// One scored title. `rank` is higher-is-better with no fixed range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTitle {
    pub title: String,
    pub rank: f64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub blog_post_content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("expected {expected} ranked titles, got {got}")]
    Count { expected: usize, got: usize },

    #[error("ranked title repeated: {0}")]
    Duplicate(String),
}

/// External text-generation collaborator. Futures are not `Send`: the browser
/// runs them on the single JS thread.
#[async_trait(?Send)]
pub trait TextService {
    async fn rank_titles(&self, req: &RankTitlesRequest) -> Result<Vec<RankedTitle>, ServiceError>;

    async fn summarize(&self, req: &SummaryRequest) -> Result<SummaryResponse, ServiceError>;
}

pub fn decode_ranked(body: &str) -> Result<Vec<RankedTitle>, ServiceError> {
    serde_json::from_str(body).map_err(|e| ServiceError::Parse(e.to_string()))
}

pub fn decode_summary(body: &str) -> Result<SummaryResponse, ServiceError> {
    serde_json::from_str(body).map_err(|e| ServiceError::Parse(e.to_string()))
}
