use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use crate::matching::ranker::{RankFilters, SortKey};
use crate::JobPosting;

/// Availability filter for pool assembly. The candidate-listing layer applies
/// it when it builds the pool; the ranker itself never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AvailabilityStatus {
    ActivelyLooking,
    Open,
    NotLooking,
}

/// Match-and-rank request from the dashboard API layer.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    pub job: JobPosting,
    /// Restricts the pool to these candidates when present.
    #[serde(default)]
    pub candidate_ids: Option<Vec<i64>>,
    #[serde(default)]
    pub availability_status: Option<AvailabilityStatus>,
    #[serde(default)]
    pub min_score: Option<u8>,
    /// Recruiter-side skill filter, separate from the job's own requirements.
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub sort_by: SortKey,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl MatchRequest {
    /// The subset of the request the ranker consumes.
    pub fn filters(&self) -> RankFilters {
        RankFilters {
            min_score: self.min_score,
            required_skills: self.required_skills.clone(),
            location: self.location.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_defaults() {
        let request: MatchRequest = serde_json::from_str(
            r#"{"job": {"required_skills": ["Rust"]}}"#,
        )
        .unwrap();

        assert_eq!(request.job.required_skills, vec!["Rust".to_string()]);
        assert!(request.candidate_ids.is_none());
        assert!(request.availability_status.is_none());
        assert_eq!(request.sort_by, SortKey::Match);
        assert!(request.limit.is_none());
        assert!(request.required_skills.is_empty());
    }

    #[test]
    fn filters_carry_the_ranker_fields() {
        let request: MatchRequest = serde_json::from_str(
            r#"{
                "job": {},
                "min_score": 60,
                "required_skills": ["React"],
                "location": "Austin",
                "sort_by": "recency",
                "availability_status": "actively_looking"
            }"#,
        )
        .unwrap();

        let filters = request.filters();
        assert_eq!(filters.min_score, Some(60));
        assert_eq!(filters.required_skills, vec!["React".to_string()]);
        assert_eq!(filters.location.as_deref(), Some("Austin"));
        assert_eq!(request.sort_by, SortKey::Recency);
        assert_eq!(
            request.availability_status,
            Some(AvailabilityStatus::ActivelyLooking)
        );
    }

    #[test]
    fn availability_status_serializes_snake_case() {
        assert_eq!(AvailabilityStatus::NotLooking.as_ref(), "not_looking");
        assert_eq!(
            serde_json::to_string(&AvailabilityStatus::Open).unwrap(),
            "\"open\""
        );
    }
}
