use std::collections::HashSet;

use crate::normalize::{fuzzy_contains, normalize_term};
use crate::JobPosting;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillOverlap {
    pub score: u8,
    pub matching: Vec<String>,
    pub missing: Vec<String>,
}

/// Union of the job's required and preferred skills, required first,
/// de-duplicated by normalized form. A skill listed under both sections counts
/// once, as required. Blank entries are dropped.
pub fn job_skill_union(job: &JobPosting) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut union = Vec::new();
    for skill in job
        .required_skills
        .iter()
        .chain(job.preferred_skills.iter())
    {
        let key = normalize_term(skill);
        if key.is_empty() {
            continue;
        }
        if seen.insert(key) {
            union.push(skill.clone());
        }
    }
    union
}

/// Skill overlap sub-score with the matched/missing partition of the job's
/// skill union.
///
/// A job with no listed skills cannot discriminate: score 70 when the
/// candidate brings any extracted skills, 50 when neither side has data.
/// Otherwise the score is the rounded percentage of union skills that some
/// candidate skill fuzzy-matches.
pub fn score_skills(candidate_skills: &[String], job: &JobPosting) -> SkillOverlap {
    let union = job_skill_union(job);
    if union.is_empty() {
        let score = if candidate_skills.is_empty() { 50 } else { 70 };
        return SkillOverlap {
            score,
            matching: Vec::new(),
            missing: Vec::new(),
        };
    }

    let mut matching = Vec::new();
    let mut missing = Vec::new();
    for skill in union {
        if fuzzy_contains(candidate_skills, &skill) {
            matching.push(skill);
        } else {
            missing.push(skill);
        }
    }

    let total = matching.len() + missing.len();
    let score = (100.0 * matching.len() as f64 / total as f64).round() as u8;
    SkillOverlap {
        score,
        matching,
        missing,
    }
}
