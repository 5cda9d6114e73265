use tracing::debug;

use super::experience::score_experience;
use super::location::score_location;
use super::salary::score_salary;
use super::skills::{score_skills, SkillOverlap};
use super::weights::{Weights, COMPOSITE_WEIGHTS};
use crate::extraction::extract_skills;
use crate::vocabulary::SkillVocabulary;
use crate::{CandidateProfile, JobPosting};

#[derive(Debug, Clone, PartialEq)]
pub struct MatchingConfig {
    pub vocabulary: SkillVocabulary,
    pub weights: Weights,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            vocabulary: SkillVocabulary::default(),
            weights: COMPOSITE_WEIGHTS,
        }
    }
}

impl MatchingConfig {
    /// Default weights plus the vocabulary resolved from the environment.
    pub fn from_env() -> Self {
        Self {
            vocabulary: SkillVocabulary::from_env(),
            weights: COMPOSITE_WEIGHTS,
        }
    }
}

/// The four sub-scores, each an integer in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub skills: u8,
    pub experience: u8,
    pub location: u8,
    pub salary: u8,
}

/// Per-candidate match outcome. Ephemeral: recomputed on every request and
/// owned wholly by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub candidate: CandidateProfile,
    pub overall: u8,
    pub breakdown: ScoreBreakdown,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

impl MatchResult {
    pub fn candidate_id(&self) -> Option<i64> {
        self.candidate.id
    }
}

/// Weighted overall score, rounded to the nearest integer.
pub fn compose_overall(breakdown: &ScoreBreakdown, weights: &Weights) -> u8 {
    let weighted = f64::from(breakdown.skills) * weights.skills
        + f64::from(breakdown.experience) * weights.experience
        + f64::from(breakdown.location) * weights.location
        + f64::from(breakdown.salary) * weights.salary;
    (weighted.round() as i64).clamp(0, 100) as u8
}

/// Runs extraction and all four sub-scorers for one candidate against one job
/// and assembles the result.
pub fn score_candidate(
    job: &JobPosting,
    candidate: &CandidateProfile,
    config: &MatchingConfig,
) -> MatchResult {
    let candidate_skills = extract_skills(candidate, &config.vocabulary);
    let SkillOverlap {
        score: skill_score,
        matching,
        missing,
    } = score_skills(&candidate_skills, job);

    let breakdown = ScoreBreakdown {
        skills: skill_score,
        experience: score_experience(candidate, candidate_skills.len(), job),
        location: score_location(candidate, job),
        salary: score_salary(candidate, job),
    };
    let overall = compose_overall(&breakdown, &config.weights);

    debug!(
        candidate_id = ?candidate.id,
        job_id = ?job.id,
        overall,
        skills = breakdown.skills,
        experience = breakdown.experience,
        location = breakdown.location,
        salary = breakdown.salary,
        "scored candidate"
    );

    MatchResult {
        candidate: candidate.clone(),
        overall,
        breakdown,
        matching_skills: matching,
        missing_skills: missing,
    }
}
