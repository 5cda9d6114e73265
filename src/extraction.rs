use crate::vocabulary::SkillVocabulary;
use crate::CandidateProfile;

/// Extracts vocabulary skills from a candidate's free-text fields.
///
/// The headline and summary are concatenated and lower-cased, then every
/// vocabulary term is checked by plain substring containment. No stemming and
/// no word-boundary checks: extraction favors recall, and the sub-scorers
/// downstream tolerate the occasional extra term. Results preserve vocabulary
/// order.
pub fn extract_skills(candidate: &CandidateProfile, vocabulary: &SkillVocabulary) -> Vec<String> {
    let text = [candidate.headline.as_deref(), candidate.summary.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    if text.trim().is_empty() {
        return Vec::new();
    }

    vocabulary
        .terms()
        .iter()
        .filter(|term| text.contains(term.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(headline: Option<&str>, summary: Option<&str>) -> CandidateProfile {
        CandidateProfile {
            headline: headline.map(str::to_string),
            summary: summary.map(str::to_string),
            ..CandidateProfile::default()
        }
    }

    #[test]
    fn finds_terms_across_headline_and_summary() {
        let vocabulary = SkillVocabulary::from_terms(["react", "postgresql", "kafka"]);
        let candidate = profile(
            Some("Senior React developer"),
            Some("Built pipelines on PostgreSQL."),
        );
        assert_eq!(
            extract_skills(&candidate, &vocabulary),
            vec!["react".to_string(), "postgresql".to_string()]
        );
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let vocabulary = SkillVocabulary::from_terms(["typescript"]);
        let candidate = profile(Some("TYPESCRIPT enthusiast"), None);
        assert_eq!(
            extract_skills(&candidate, &vocabulary),
            vec!["typescript".to_string()]
        );
    }

    #[test]
    fn empty_text_yields_no_skills() {
        let vocabulary = SkillVocabulary::default();
        assert!(extract_skills(&profile(None, None), &vocabulary).is_empty());
        assert!(extract_skills(&profile(Some("   "), Some("")), &vocabulary).is_empty());
    }

    #[test]
    fn results_follow_vocabulary_order() {
        let vocabulary = SkillVocabulary::from_terms(["kafka", "react"]);
        let candidate = profile(Some("React and Kafka"), None);
        assert_eq!(
            extract_skills(&candidate, &vocabulary),
            vec!["kafka".to_string(), "react".to_string()]
        );
    }

    #[test]
    fn reference_headline_extracts_exactly_two_terms() {
        let vocabulary = SkillVocabulary::default();
        let candidate = profile(Some("React and TypeScript engineer"), None);
        assert_eq!(
            extract_skills(&candidate, &vocabulary),
            vec!["typescript".to_string(), "react".to_string()]
        );
    }
}
