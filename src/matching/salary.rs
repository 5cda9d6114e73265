use crate::{CandidateProfile, JobPosting};

/// Compensation overlap sub-score.
///
/// With both ranges fully present the score follows the overlap between them,
/// measured against the candidate's own range width, with graded partial
/// credit when the ranges are disjoint. A lone comparable bound pair degrades
/// to a binary feasibility check, and missing data on either side is neutral.
pub fn score_salary(candidate: &CandidateProfile, job: &JobPosting) -> u8 {
    match (
        candidate.desired_salary_min_cents,
        candidate.desired_salary_max_cents,
        job.salary_min_cents,
        job.salary_max_cents,
    ) {
        (Some(c_min), Some(c_max), Some(j_min), Some(j_max)) => {
            score_full_ranges(c_min, c_max, j_min, j_max)
        }
        (Some(c_min), _, _, Some(j_max)) => {
            if c_min <= j_max {
                80
            } else {
                20
            }
        }
        (_, Some(c_max), Some(j_min), _) => {
            if c_max >= j_min {
                80
            } else {
                20
            }
        }
        _ => 50,
    }
}

fn score_full_ranges(c_min: i64, c_max: i64, j_min: i64, j_max: i64) -> u8 {
    let start = c_min.max(j_min);
    let end = c_max.min(j_max);

    if start <= end {
        let overlap = (end - start) as f64;
        let candidate_width = (c_max - c_min).max(1) as f64;
        let score = (100.0 * overlap / candidate_width).round() as i64;
        score.min(100) as u8
    } else {
        let gap = (start - end) as f64;
        let avg_width = (((c_max - c_min) + (j_max - j_min)) as f64 / 2.0).max(1.0);
        let score = (50.0 * (1.0 - gap / avg_width)).round();
        score.max(0.0) as u8
    }
}
