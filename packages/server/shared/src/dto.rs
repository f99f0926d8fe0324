use serde::{Deserialize, Serialize};

/// Issue identifier as submitted by the client. The scorer never interprets
/// it; it only travels back out so the caller can correlate results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum IssueId {
    Int(i64),
    Str(String),
}

/// One issue submitted for priority scoring.
///
/// `issue_type` is the only field the API boundary insists on for single
/// scoring; coordinates are optional and repaired to the operating region's
/// centroid when absent.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IssueInput {
    #[serde(default)]
    pub id: Option<IssueId>,
    #[serde(rename = "type", default)]
    pub issue_type: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Discrete priority tier derived from the scalar score by fixed thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// `> 0.7` is High, `> 0.4` is Medium, everything else Low.
    /// 0.7 exactly is Medium and 0.4 exactly is Low; the UI relies on
    /// these boundaries being strict.
    pub fn from_score(score: f32) -> Self {
        if score > 0.7 {
            Priority::High
        } else if score > 0.4 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub success: bool,
    /// Formatted to 3 decimals, e.g. "0.725".
    #[serde(rename = "priorityScore")]
    pub priority_score: String,
    pub priority: Priority,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchScoreRequest {
    pub issues: Vec<IssueInput>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchScoreResult {
    #[serde(default)]
    pub id: Option<IssueId>,
    #[serde(rename = "priorityScore")]
    pub priority_score: String,
    pub priority: Priority,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchScoreResponse {
    pub success: bool,
    pub results: Vec<BatchScoreResult>,
}
