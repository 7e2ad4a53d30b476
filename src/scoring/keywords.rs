// src/scoring/keywords.rs
//! Keyword scorers: case-insensitive substring checks against the reference lists.

use super::round2;

pub const SKILL_WEIGHT: f64 = 40.0;
pub const TITLE_WEIGHT: f64 = 20.0;
pub const EDUCATION_WEIGHT: f64 = 10.0;
pub const SOFT_SKILL_WEIGHT: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    pub score: f64,
    /// Matched skills in reference-list order, original casing
    pub found: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountMatch {
    pub score: f64,
    pub matched: usize,
}

fn matching<'a>(keywords: &'a [String], text: &str) -> impl Iterator<Item = &'a String> + 'a {
    let lowered = text.to_lowercase();
    keywords
        .iter()
        .filter(move |kw| lowered.contains(&kw.to_lowercase()))
}

fn proportion(matched: usize, total: usize, weight: f64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(matched as f64 / total as f64 * weight)
}

pub fn score_skills(required_skills: &[String], resume_text: &str) -> SkillMatch {
    let found: Vec<String> = matching(required_skills, resume_text).cloned().collect();
    let score = proportion(found.len(), required_skills.len(), SKILL_WEIGHT);
    tracing::debug!("Skills matched {}/{}: {:?}", found.len(), required_skills.len(), found);
    SkillMatch { score, found }
}

pub fn score_experience_titles(resume_text: &str, relevant_titles: &[String]) -> CountMatch {
    let matched = matching(relevant_titles, resume_text).count();
    CountMatch {
        score: proportion(matched, relevant_titles.len(), TITLE_WEIGHT),
        matched,
    }
}

/// All or nothing: any keyword present earns the full 10.
pub fn score_education(resume_text: &str, education_keywords: &[String]) -> f64 {
    if matching(education_keywords, resume_text).next().is_some() {
        EDUCATION_WEIGHT
    } else {
        0.0
    }
}

/// `matched` is the raw count; the score caps it at the list length.
pub fn score_soft_skills(resume_text: &str, soft_skills: &[String]) -> CountMatch {
    let matched = matching(soft_skills, resume_text).count();
    let capped = matched.min(soft_skills.len());
    CountMatch {
        score: proportion(capped, soft_skills.len(), SOFT_SKILL_WEIGHT),
        matched,
    }
}
