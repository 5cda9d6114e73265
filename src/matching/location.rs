use crate::{CandidateProfile, JobPosting, RemotePolicy, RemotePreference};

/// Tiered location compatibility. Every applicable tier contributes a floor
/// and the final score is the running maximum, so a remote-friendly pairing is
/// never penalized by a mismatched street address.
///
/// Tiers: one remote side 80, both remote 100, city+state match 100, state
/// match 70, country match 40, candidate with no city/state 50. Nothing
/// applicable scores 0.
pub fn score_location(candidate: &CandidateProfile, job: &JobPosting) -> u8 {
    let job_remote = job.remote_policy == RemotePolicy::Remote;
    let wants_remote = candidate.remote_preference == RemotePreference::Remote;

    let mut score: u8 = 0;
    if job_remote || wants_remote {
        score = score.max(80);
    }
    if job_remote && wants_remote {
        score = score.max(100);
    }

    let candidate_city = present(&candidate.city);
    let candidate_state = present(&candidate.state);
    let job_city = present(&job.city);
    let job_state = present(&job.state);

    if let (Some(cc), Some(cs), Some(jc), Some(js)) =
        (candidate_city, candidate_state, job_city, job_state)
    {
        if eq_ignore_case(cc, jc) && eq_ignore_case(cs, js) {
            score = score.max(100);
        }
    }
    if let (Some(cs), Some(js)) = (candidate_state, job_state) {
        if eq_ignore_case(cs, js) {
            score = score.max(70);
        }
    }
    if let (Some(cc), Some(jc)) = (present(&candidate.country), present(&job.country)) {
        if eq_ignore_case(cc, jc) {
            score = score.max(40);
        }
    }
    if candidate_city.is_none() && candidate_state.is_none() {
        score = score.max(50);
    }

    score
}

/// Blank and whitespace-only fields count as absent.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
