use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::scoring::{MatchResult, ScoreBreakdown};

/// Stamped into every response so the dashboard can correlate scores with the
/// engine build that produced them.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-candidate match result for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateMatchDto {
    pub candidate_id: Option<i64>,
    pub overall: u8,
    pub breakdown: ScoreBreakdownDto,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub engine_version: String,
    /// Caller-supplied so scoring itself stays deterministic.
    pub matched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdownDto {
    pub skills: u8,
    pub experience: u8,
    pub location: u8,
    pub salary: u8,
}

impl From<&ScoreBreakdown> for ScoreBreakdownDto {
    fn from(value: &ScoreBreakdown) -> Self {
        Self {
            skills: value.skills,
            experience: value.experience,
            location: value.location,
            salary: value.salary,
        }
    }
}

impl CandidateMatchDto {
    pub fn from_match_result(result: &MatchResult, matched_at: DateTime<Utc>) -> Self {
        Self {
            candidate_id: result.candidate_id(),
            overall: result.overall,
            breakdown: ScoreBreakdownDto::from(&result.breakdown),
            matching_skills: result.matching_skills.clone(),
            missing_skills: result.missing_skills.clone(),
            engine_version: ENGINE_VERSION.to_string(),
            matched_at,
        }
    }
}

/// Converts ranked results into response DTOs, applying the request's limit.
pub fn build_response(
    results: &[MatchResult],
    matched_at: DateTime<Utc>,
    limit: Option<usize>,
) -> Vec<CandidateMatchDto> {
    let take = limit.unwrap_or(results.len());
    results
        .iter()
        .take(take)
        .map(|result| CandidateMatchDto::from_match_result(result, matched_at))
        .collect()
}
