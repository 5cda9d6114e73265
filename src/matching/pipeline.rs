use tracing::debug;

use super::ranker::{rank, RankFilters, SortKey};
use super::scoring::{score_candidate, MatchingConfig, MatchResult};
use crate::{CandidateProfile, JobPosting};

/// Facade wiring extraction, sub-scorers, composition, and ranking over a
/// candidate pool. Construction is cheap; one engine per request is fine.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: MatchingConfig,
}

impl MatchingEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    /// Engine with the vocabulary resolved from the environment.
    pub fn from_env() -> Self {
        Self::new(MatchingConfig::from_env())
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    pub fn score_candidate(&self, job: &JobPosting, candidate: &CandidateProfile) -> MatchResult {
        score_candidate(job, candidate, &self.config)
    }

    /// Scores every candidate against the job, preserving input order.
    pub fn score_pool(
        &self,
        job: &JobPosting,
        candidates: &[CandidateProfile],
    ) -> Vec<MatchResult> {
        candidates
            .iter()
            .map(|candidate| score_candidate(job, candidate, &self.config))
            .collect()
    }

    /// Scores the pool, then filters and sorts it for presentation.
    pub fn match_and_rank(
        &self,
        job: &JobPosting,
        candidates: &[CandidateProfile],
        filters: &RankFilters,
        sort_by: SortKey,
    ) -> Vec<MatchResult> {
        let scored = self.score_pool(job, candidates);
        let pool = scored.len();
        let ranked = rank(scored, filters, sort_by);
        debug!(
            job_id = ?job.id,
            pool,
            ranked = ranked.len(),
            sort_by = sort_by.as_ref(),
            "ranked candidate pool"
        );
        ranked
    }
}
