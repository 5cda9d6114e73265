use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use super::scoring::MatchResult;
use crate::normalize::fuzzy_match;

/// Caller-selected ordering for ranked results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortKey {
    #[default]
    Match,
    Experience,
    Recency,
}

/// Ad-hoc filters supplied with a ranking request. Distinct from the job's
/// own requirements: a recruiter can narrow an already-scored pool without
/// editing the posting.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RankFilters {
    pub min_score: Option<u8>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub location: Option<String>,
}

/// Applies the filters in order, then sorts by the selected key. The sort is
/// stable, so ties keep their scoring order. Filtering everything out returns
/// an empty list, never an error.
pub fn rank(results: Vec<MatchResult>, filters: &RankFilters, sort_by: SortKey) -> Vec<MatchResult> {
    let mut kept: Vec<MatchResult> = results
        .into_iter()
        .filter(|result| {
            filters
                .min_score
                .map_or(true, |min| result.overall >= min)
        })
        .filter(|result| {
            filters.required_skills.iter().all(|needed| {
                result
                    .matching_skills
                    .iter()
                    .any(|have| fuzzy_match(have, needed))
            })
        })
        .filter(|result| location_filter_passes(result, filters.location.as_deref()))
        .collect();

    match sort_by {
        SortKey::Match => kept.sort_by(|a, b| b.overall.cmp(&a.overall)),
        SortKey::Experience => {
            kept.sort_by(|a, b| b.breakdown.experience.cmp(&a.breakdown.experience))
        }
        SortKey::Recency => kept.sort_by(compare_recency),
    }

    kept
}

/// Free-text location filter: matches when the candidate's city or state
/// contains the filter text, case-insensitive. A blank filter passes everyone.
fn location_filter_passes(result: &MatchResult, filter: Option<&str>) -> bool {
    let Some(filter) = filter else {
        return true;
    };
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    [
        result.candidate.city.as_deref(),
        result.candidate.state.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Newest profiles first; undated profiles sort after dated ones.
fn compare_recency(a: &MatchResult, b: &MatchResult) -> Ordering {
    match (a.candidate.created_at, b.candidate.created_at) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
