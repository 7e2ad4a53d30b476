// src/scoring/criteria.rs
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::error::{AppError, ScoreError};

/// Reference lists the keyword scorers match against.
///
/// Passed explicitly into `ats_score` so a run can swap them out (see `--criteria`).
/// Keys missing from a criteria file fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringCriteria {
    pub required_skills: Vec<String>,
    pub relevant_titles: Vec<String>,
    pub education_keywords: Vec<String>,
    pub soft_skills: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ScoringCriteria {
    fn default() -> Self {
        Self {
            required_skills: owned(&["Python", "AWS", "SQL", "TensorFlow", "Java", "C++", "C"]),
            relevant_titles: owned(&["software engineer", "backend developer", "ml engineer"]),
            education_keywords: owned(&["bachelor", "b.tech", "m.tech", "degree", "computer science"]),
            soft_skills: owned(&["git", "docker", "team", "communication", "problem solving"]),
        }
    }
}

impl ScoringCriteria {
    /// Every proportional scorer divides by its list length, so none may be empty.
    pub fn validate(&self) -> Result<(), ScoreError> {
        let lists = [
            ("required_skills", &self.required_skills),
            ("relevant_titles", &self.relevant_titles),
            ("education_keywords", &self.education_keywords),
            ("soft_skills", &self.soft_skills),
        ];
        for (name, list) in lists {
            if list.is_empty() {
                return Err(ScoreError::EmptyCriteria(name));
            }
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let criteria: Self = serde_json::from_str(json)
            .map_err(|e| AppError::Config(format!("Invalid scoring criteria: {}", e)))?;
        criteria.validate()?;
        Ok(criteria)
    }

    /// Loads criteria from a JSON file, e.g. `{"required_skills": ["Rust", "Go"]}`.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Could not read criteria file {}: {}", path.display(), e))
        })?;
        let criteria = Self::from_json_str(&raw)?;
        tracing::info!(
            "Loaded scoring criteria from {} ({} skills, {} titles, {} education keywords, {} soft skills)",
            path.display(),
            criteria.required_skills.len(),
            criteria.relevant_titles.len(),
            criteria.education_keywords.len(),
            criteria.soft_skills.len()
        );
        Ok(criteria)
    }
}
