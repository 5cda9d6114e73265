pub mod api;
pub mod extraction;
pub mod logging;
pub mod matching;
pub mod normalize;
pub mod vocabulary;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::AsRefStr;

// Commonly used data models for the matching engine. Both records arrive
// already validated from the data layer and are read-only here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Option<i64>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub remote_policy: RemotePolicy,
    pub salary_min_cents: Option<i64>,
    pub salary_max_cents: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: Option<i64>,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub remote_preference: RemotePreference,
    pub desired_salary_min_cents: Option<i64>,
    pub desired_salary_max_cents: Option<i64>,
    /// Externally maintained reliability signal in [0,100]; consumed only as
    /// an experience-level proxy.
    #[serde(default)]
    pub reputation_score: f64,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RemotePolicy {
    Remote,
    Hybrid,
    Onsite,
    #[default]
    Unspecified,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RemotePreference {
    Remote,
    Hybrid,
    Onsite,
    #[default]
    NoPreference,
}

/// Fixed experience ladder. Ordinals are 1-based positions used for the
/// level-distance calculation in the experience sub-scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ExperienceLevel {
    Internship,
    Entry,
    Junior,
    Mid,
    Senior,
    Lead,
    Executive,
}

impl ExperienceLevel {
    pub const LADDER: [ExperienceLevel; 7] = [
        ExperienceLevel::Internship,
        ExperienceLevel::Entry,
        ExperienceLevel::Junior,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Lead,
        ExperienceLevel::Executive,
    ];

    pub const MAX_ORDINAL: u8 = 7;

    pub fn ordinal(self) -> u8 {
        match self {
            ExperienceLevel::Internship => 1,
            ExperienceLevel::Entry => 2,
            ExperienceLevel::Junior => 3,
            ExperienceLevel::Mid => 4,
            ExperienceLevel::Senior => 5,
            ExperienceLevel::Lead => 6,
            ExperienceLevel::Executive => 7,
        }
    }

    /// Clamps into the ladder so proxy inference can never step off either end.
    pub fn from_ordinal(ordinal: u8) -> Self {
        let index = ordinal.clamp(1, Self::MAX_ORDINAL) as usize - 1;
        Self::LADDER[index]
    }
}
