use chrono::{TimeZone, Utc};
use hirematch_engine::api::{build_response, MatchRequest};
use hirematch_engine::matching::pipeline::MatchingEngine;
use hirematch_engine::matching::ranker::{RankFilters, SortKey};
use hirematch_engine::matching::weights::COMPOSITE_WEIGHTS;
use hirematch_engine::{CandidateProfile, ExperienceLevel, JobPosting, RemotePolicy};

fn frontend_job() -> JobPosting {
    JobPosting {
        id: Some(301),
        required_skills: vec!["React".into(), "TypeScript".into()],
        experience_level: Some(ExperienceLevel::Senior),
        state: Some("CA".into()),
        country: Some("US".into()),
        remote_policy: RemotePolicy::Onsite,
        salary_min_cents: Some(12_000_000),
        salary_max_cents: Some(18_000_000),
        ..JobPosting::default()
    }
}

fn strong_candidate() -> CandidateProfile {
    CandidateProfile {
        id: Some(11),
        headline: Some("React and TypeScript engineer".into()),
        state: Some("CA".into()),
        country: Some("US".into()),
        desired_salary_min_cents: Some(13_000_000),
        desired_salary_max_cents: Some(16_000_000),
        reputation_score: 85.0,
        created_at: Some(Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()),
        ..CandidateProfile::default()
    }
}

fn weak_candidate() -> CandidateProfile {
    CandidateProfile {
        id: Some(12),
        headline: Some("Flutter developer".into()),
        city: Some("Boston".into()),
        state: Some("MA".into()),
        country: Some("US".into()),
        reputation_score: 30.0,
        created_at: Some(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()),
        ..CandidateProfile::default()
    }
}

#[test]
fn strong_frontend_pairing_scores_ninety_four() {
    let engine = MatchingEngine::default();
    let result = engine.score_candidate(&frontend_job(), &strong_candidate());

    assert_eq!(result.breakdown.skills, 100);
    assert_eq!(result.breakdown.experience, 100);
    assert_eq!(result.breakdown.location, 70);
    assert_eq!(result.breakdown.salary, 100);
    assert_eq!(result.overall, 94);
    assert_eq!(
        result.matching_skills,
        vec!["React".to_string(), "TypeScript".to_string()]
    );
    assert!(result.missing_skills.is_empty());
}

#[test]
fn job_without_skills_scores_neutral_for_blank_candidates() {
    let engine = MatchingEngine::default();
    let job = JobPosting::default();
    let candidate = CandidateProfile::default();

    let result = engine.score_candidate(&job, &candidate);
    assert_eq!(result.breakdown.skills, 50);
    assert!(result.matching_skills.is_empty());
    assert!(result.missing_skills.is_empty());
}

#[test]
fn disjoint_salary_ranges_get_twenty_five() {
    let engine = MatchingEngine::default();
    let job = JobPosting {
        salary_min_cents: Some(25_000),
        salary_max_cents: Some(35_000),
        ..JobPosting::default()
    };
    let candidate = CandidateProfile {
        desired_salary_min_cents: Some(10_000),
        desired_salary_max_cents: Some(20_000),
        ..CandidateProfile::default()
    };

    let result = engine.score_candidate(&job, &candidate);
    assert_eq!(result.breakdown.salary, 25);
}

#[test]
fn unreachable_min_score_yields_empty_ranking_not_error() {
    let engine = MatchingEngine::default();
    let pool = vec![weak_candidate()];
    let filters = RankFilters {
        min_score: Some(90),
        ..RankFilters::default()
    };

    let ranked = engine.match_and_rank(&frontend_job(), &pool, &filters, SortKey::Match);
    assert!(ranked.is_empty());
}

#[test]
fn ranking_is_deterministic_across_runs() {
    let engine = MatchingEngine::default();
    let pool = vec![strong_candidate(), weak_candidate()];
    let filters = RankFilters::default();

    let first = engine.match_and_rank(&frontend_job(), &pool, &filters, SortKey::Match);
    let second = engine.match_and_rank(&frontend_job(), &pool, &filters, SortKey::Match);
    assert_eq!(first, second);
    assert_eq!(first[0].candidate_id(), Some(11));
}

#[test]
fn matching_and_missing_partition_the_job_skills() {
    let engine = MatchingEngine::default();
    let mut job = frontend_job();
    job.preferred_skills = vec!["Kafka".into(), "react.js".into()];

    let result = engine.score_candidate(&job, &strong_candidate());
    // Union is React, TypeScript, Kafka; react.js collapses into React.
    assert_eq!(
        result.matching_skills.len() + result.missing_skills.len(),
        3
    );
    assert!(result.matching_skills.contains(&"React".to_string()));
    assert_eq!(result.missing_skills, vec!["Kafka".to_string()]);
    for skill in &result.matching_skills {
        assert!(!result.missing_skills.contains(skill));
    }
}

#[test]
fn every_sub_score_and_overall_stay_within_bounds() {
    let engine = MatchingEngine::default();
    let pool = vec![
        strong_candidate(),
        weak_candidate(),
        CandidateProfile::default(),
    ];

    for result in engine.score_pool(&frontend_job(), &pool) {
        assert!(result.overall <= 100);
        assert!(result.breakdown.skills <= 100);
        assert!(result.breakdown.experience <= 100);
        assert!(result.breakdown.location <= 100);
        assert!(result.breakdown.salary <= 100);
    }
    assert!((COMPOSITE_WEIGHTS.sum() - 1.0).abs() < 1e-6);
}

#[test]
fn recency_sort_orders_newest_profiles_first() {
    let engine = MatchingEngine::default();
    let pool = vec![strong_candidate(), weak_candidate()];

    let ranked =
        engine.match_and_rank(&frontend_job(), &pool, &RankFilters::default(), SortKey::Recency);
    assert_eq!(ranked[0].candidate_id(), Some(12));
    assert_eq!(ranked[1].candidate_id(), Some(11));
}

#[test]
fn request_flows_through_engine_into_response_dtos() {
    let request: MatchRequest = serde_json::from_str(
        r#"{
            "job": {
                "id": 301,
                "required_skills": ["React", "TypeScript"],
                "experience_level": "senior",
                "state": "CA",
                "salary_min_cents": 12000000,
                "salary_max_cents": 18000000
            },
            "min_score": 50,
            "limit": 1
        }"#,
    )
    .unwrap();

    let engine = MatchingEngine::default();
    let pool = vec![weak_candidate(), strong_candidate()];
    let ranked = engine.match_and_rank(&request.job, &pool, &request.filters(), request.sort_by);

    let matched_at = Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap();
    let response = build_response(&ranked, matched_at, request.limit);

    assert_eq!(response.len(), 1);
    assert_eq!(response[0].candidate_id, Some(11));
    assert_eq!(response[0].overall, 94);
    assert_eq!(response[0].breakdown.location, 70);
    assert_eq!(response[0].matched_at, matched_at);
    assert!(!response[0].engine_version.is_empty());
}
