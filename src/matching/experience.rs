use crate::{CandidateProfile, ExperienceLevel, JobPosting};

/// Infers a candidate's experience level from the reputation score plus a
/// one-bucket bump for broad skill profiles. Kept as its own pure function so
/// the proxy can be tested and tuned independently of the scorer.
///
/// Buckets: reputation >=80 maps to ordinal 5 (senior), >=60 to 4, >=40 to 3,
/// >=20 to 2, anything lower to 1; ten or more extracted skills add one
/// ordinal, capped at the top of the ladder.
pub fn infer_experience_level(candidate: &CandidateProfile, skill_count: usize) -> ExperienceLevel {
    let reputation = candidate.reputation_score;
    let mut ordinal: u8 = if reputation >= 80.0 {
        5
    } else if reputation >= 60.0 {
        4
    } else if reputation >= 40.0 {
        3
    } else if reputation >= 20.0 {
        2
    } else {
        1
    };

    if skill_count >= 10 {
        ordinal = (ordinal + 1).min(ExperienceLevel::MAX_ORDINAL);
    }

    ExperienceLevel::from_ordinal(ordinal)
}

/// Experience proximity sub-score: distance on the level ladder between the
/// inferred candidate level and the job's requirement. A job without a stated
/// level scores a slightly-positive 60.
pub fn score_experience(candidate: &CandidateProfile, skill_count: usize, job: &JobPosting) -> u8 {
    let Some(job_level) = job.experience_level else {
        return 60;
    };

    let inferred = infer_experience_level(candidate, skill_count);
    match inferred.ordinal().abs_diff(job_level.ordinal()) {
        0 => 100,
        1 => 70,
        2 => 40,
        _ => 20,
    }
}
