use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

/// Environment variable pointing at a JSON vocabulary file (array of strings).
pub const VOCAB_PATH_ENV: &str = "HM_SKILL_VOCAB_PATH";

/// Curated built-in vocabulary: technology names, soft skills, and domain
/// terms the dashboard cares about. Terms are stored lower-case; extraction
/// matches them by substring containment, so very short or ambiguous tokens
/// (e.g. "go", "c", "r") are deliberately left out.
static DEFAULT_TERMS: &[&str] = &[
    // Languages
    "python",
    "java",
    "javascript",
    "typescript",
    "golang",
    "rust",
    "ruby",
    "kotlin",
    "swift",
    "scala",
    "php",
    "elixir",
    "c++",
    "c#",
    // Frontend
    "react",
    "angular",
    "vue",
    "svelte",
    "nextjs",
    "html",
    "css",
    "sass",
    "tailwind",
    "redux",
    // Backend frameworks
    "nodejs",
    "django",
    "flask",
    "spring",
    "rails",
    "laravel",
    "fastapi",
    "graphql",
    "grpc",
    // Databases
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "elasticsearch",
    "sqlite",
    "dynamodb",
    "cassandra",
    // Cloud and infrastructure
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "ansible",
    "jenkins",
    "linux",
    "microservices",
    "distributed systems",
    // Data and ML
    "machine learning",
    "deep learning",
    "data analysis",
    "data engineering",
    "pandas",
    "numpy",
    "tensorflow",
    "pytorch",
    "spark",
    "kafka",
    "airflow",
    // Mobile
    "android",
    "flutter",
    "react native",
    // Testing
    "selenium",
    "cypress",
    "jest",
    "pytest",
    // Soft skills
    "leadership",
    "communication",
    "mentoring",
    "project management",
    "stakeholder management",
    "problem solving",
    "agile",
    "scrum",
    // Domain
    "fintech",
    "healthcare",
    "e-commerce",
    "saas",
    "cybersecurity",
    "devops",
    "accessibility",
];

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read vocabulary file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("vocabulary file {path} is not a JSON array of strings")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("vocabulary file {path} contains no usable terms")]
    Empty { path: String },
}

/// Ordered, lower-cased, de-duplicated skill term list used by the extractor.
/// The order is meaningful: extracted skills come back in vocabulary order.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillVocabulary {
    terms: Vec<String>,
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::from_terms(DEFAULT_TERMS.iter().copied())
    }
}

impl SkillVocabulary {
    /// Builds a vocabulary from arbitrary terms: lower-cases, trims, drops
    /// blanks, and keeps the first occurrence of each duplicate.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = std::collections::HashSet::new();
        let mut cleaned = Vec::new();
        for term in terms {
            let lowered = term.as_ref().trim().to_lowercase();
            if lowered.is_empty() {
                continue;
            }
            if seen.insert(lowered.clone()) {
                cleaned.push(lowered);
            }
        }
        Self { terms: cleaned }
    }

    /// Loads a vocabulary from a JSON file containing an array of strings.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, VocabularyError> {
        let path_display = path.as_ref().display().to_string();
        let raw = fs::read_to_string(path.as_ref()).map_err(|source| VocabularyError::Io {
            path: path_display.clone(),
            source,
        })?;
        let terms: Vec<String> =
            serde_json::from_str(&raw).map_err(|source| VocabularyError::Parse {
                path: path_display.clone(),
                source,
            })?;
        let vocabulary = Self::from_terms(terms);
        if vocabulary.is_empty() {
            return Err(VocabularyError::Empty { path: path_display });
        }
        Ok(vocabulary)
    }

    /// Resolves the vocabulary from `HM_SKILL_VOCAB_PATH` when set, warning
    /// and falling back to the built-in list when the file cannot be used.
    pub fn from_env() -> Self {
        match std::env::var(VOCAB_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => match Self::from_json_file(&path) {
                Ok(vocabulary) => vocabulary,
                Err(error) => {
                    warn!(error = %error, path = %path, "skill vocabulary load failed, using built-in list");
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
