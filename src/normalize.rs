use unicode_normalization::UnicodeNormalization;

/// Canonical form used for skill comparison: NFKC, lower-case, `.`/`-`/`_`
/// removed, internal whitespace collapsed to single spaces, ends trimmed.
pub fn normalize_term(input: &str) -> String {
    let lowered = input.nfkc().collect::<String>().to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| !matches!(c, '.' | '-' | '_'))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Fuzzy skill match: normalized equality, or either normalized string
/// containing the other. Normalized-empty terms match nothing (`contains("")`
/// is true for every string).
pub fn fuzzy_match(a: &str, b: &str) -> bool {
    let na = normalize_term(a);
    let nb = normalize_term(b);
    if na.is_empty() || nb.is_empty() {
        return false;
    }
    na == nb || na.contains(&nb) || nb.contains(&na)
}

/// True when any entry of `haystack` fuzzy-matches `needle`.
pub fn fuzzy_contains(haystack: &[String], needle: &str) -> bool {
    haystack.iter().any(|entry| fuzzy_match(entry, needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_separators_and_collapses_whitespace() {
        assert_eq!(normalize_term("React.js"), "reactjs");
        assert_eq!(normalize_term("  Node_JS  "), "nodejs");
        assert_eq!(normalize_term("objective - c"), "objective c");
        assert_eq!(normalize_term("machine   learning"), "machine learning");
    }

    #[test]
    fn nfkc_folds_fullwidth_input() {
        assert_eq!(normalize_term("ＡＷＳ"), "aws");
    }

    #[test]
    fn equality_and_containment_both_match() {
        assert!(fuzzy_match("React", "react"));
        assert!(fuzzy_match("react.js", "React"));
        assert!(fuzzy_match("TypeScript", "script"));
        assert!(!fuzzy_match("Rust", "Go"));
    }

    #[test]
    fn empty_terms_never_match() {
        assert!(!fuzzy_match("", "react"));
        assert!(!fuzzy_match("react", "   "));
        assert!(!fuzzy_match("", ""));
    }

    #[test]
    fn fuzzy_contains_scans_whole_list() {
        let skills = vec!["react".to_string(), "postgresql".to_string()];
        assert!(fuzzy_contains(&skills, "Postgres-QL"));
        assert!(!fuzzy_contains(&skills, "kafka"));
    }
}
