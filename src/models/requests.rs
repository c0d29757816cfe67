//! Request and response DTOs for the write endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::IssueType;

/// Request to report a new issue.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateIssueRequest {
    /// Local body the issue belongs to.
    pub local_body_id: i64,
    /// Kind of issue.
    pub issue_type: IssueType,
    /// Free-text description from the reporter.
    pub description: String,
    /// Public URL of the uploaded photo (from the upload proxy).
    #[serde(default)]
    pub image_url: Option<String>,
    /// Map link for the reported location.
    #[serde(default)]
    pub location_url: Option<String>,
    /// Referenced town, for town-type issues.
    #[serde(default)]
    pub town_id: Option<i64>,
}

/// Request to update an issue's resolved flag.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateIssueRequest {
    pub resolved: bool,
}

/// Issue as returned by the write endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IssueResponse {
    pub id: Uuid,
    pub local_body_id: i64,
    pub issue_type: IssueType,
    pub description: String,
    pub image_url: Option<String>,
    pub location_url: Option<String>,
    pub resolved: bool,
    pub town_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Request to upsert a ward's collection rate for one period.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpsertCollectionRateRequest {
    /// Zero-padded `YYYY-MM` or `YYYY-MM-DD` period key.
    pub year_month: String,
    /// Collection rate percentage, 0 to 100.
    pub rate: f32,
}

/// Collection rate row as returned after an upsert.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CollectionRateResponse {
    pub collection_id: i64,
    pub ward_id: i64,
    pub year_month: String,
    pub rate: f32,
}

/// Validate a period key: zero-padded `YYYY-MM` or `YYYY-MM-DD`.
///
/// The zero-padding is what makes period keys sortable by plain string
/// comparison, so malformed keys are rejected at the write boundary.
pub fn is_valid_period_key(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 7 && bytes.len() != 10 {
        return false;
    }
    for (i, b) in bytes.iter().enumerate() {
        match i {
            4 | 7 => {
                if *b != b'-' {
                    return false;
                }
            }
            _ => {
                if !b.is_ascii_digit() {
                    return false;
                }
            }
        }
    }
    let month: u32 = s[5..7].parse().unwrap_or(0);
    if !(1..=12).contains(&month) {
        return false;
    }
    if bytes.len() == 10 {
        let day: u32 = s[8..10].parse().unwrap_or(0);
        if !(1..=31).contains(&day) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_period_keys() {
        assert!(is_valid_period_key("2024-06"));
        assert!(is_valid_period_key("2024-06-30"));
        assert!(is_valid_period_key("1999-01"));
    }

    #[test]
    fn test_invalid_period_keys() {
        assert!(!is_valid_period_key(""));
        assert!(!is_valid_period_key("2024-6"));
        assert!(!is_valid_period_key("2024-13"));
        assert!(!is_valid_period_key("2024-00"));
        assert!(!is_valid_period_key("2024-06-32"));
        assert!(!is_valid_period_key("2024/06"));
        assert!(!is_valid_period_key("june 2024"));
    }
}
