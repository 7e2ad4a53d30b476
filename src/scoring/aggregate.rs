// src/scoring/aggregate.rs
use serde::{Deserialize, Serialize};

use super::bonus::score_achievements;
use super::criteria::ScoringCriteria;
use super::keywords::{score_education, score_experience_titles, score_skills, score_soft_skills};
use super::round2;
use super::similarity::score_similarity;
use crate::extractors::{
    extract_contact_info, extract_intro_line, extract_professional_summary, extract_work_experience,
};
use crate::utils::error::ScoreError;

/// Full ATS report for one resume. Keys are fixed; text fields fall back to "Not found".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    #[serde(rename = "Candidate Intro Line")]
    pub intro_line: String,
    #[serde(rename = "Professional Summary")]
    pub professional_summary: String,
    #[serde(rename = "Work Experience Summary")]
    pub work_experience: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Total ATS Score (out of 100)")]
    pub total_score: f64,
    #[serde(rename = "Skill Match Score (40%)")]
    pub skill_score: f64,
    #[serde(rename = "Skills Found")]
    pub skills_found: Vec<String>,
    #[serde(rename = "Experience Score (20%)")]
    pub experience_score: f64,
    #[serde(rename = "Matched Titles")]
    pub titles_matched: usize,
    #[serde(rename = "Education Score (10%)")]
    pub education_score: f64,
    #[serde(rename = "Soft Skill Score (10%)")]
    pub soft_skill_score: f64,
    #[serde(rename = "Soft Skills Found")]
    pub soft_skills_found: usize,
    #[serde(rename = "Similarity Score (20%)")]
    pub similarity_score: f64,
    #[serde(rename = "Certifications Found")]
    pub certifications_found: usize,
    #[serde(rename = "Leadership Roles Found")]
    pub leadership_found: usize,
    #[serde(rename = "Hackathon/Achievements Found")]
    pub achievements_found: usize,
    #[serde(rename = "Bonus Score (max 10%)")]
    pub bonus_score: f64,
}

/// Scores one resume against one job description.
///
/// The total is the rounded sum of the six sub-scores (skill 40, experience 20,
/// education 10, soft skills 10, similarity 20, bonus 10).
pub fn ats_score(
    jd_text: &str,
    resume_text: &str,
    criteria: &ScoringCriteria,
) -> Result<ScoreReport, ScoreError> {
    criteria.validate()?;

    let contact = extract_contact_info(resume_text);
    let intro_line = extract_intro_line(resume_text);
    let professional_summary = extract_professional_summary(resume_text);
    let work_experience = extract_work_experience(resume_text);

    let skills = score_skills(&criteria.required_skills, resume_text);
    let titles = score_experience_titles(resume_text, &criteria.relevant_titles);
    let education_score = score_education(resume_text, &criteria.education_keywords);
    let soft = score_soft_skills(resume_text, &criteria.soft_skills);
    let similarity_score = score_similarity(jd_text, resume_text);
    let bonus = score_achievements(resume_text);

    let total_score = round2(
        skills.score
            + titles.score
            + education_score
            + soft.score
            + similarity_score
            + bonus.bonus_score,
    );

    Ok(ScoreReport {
        intro_line,
        professional_summary,
        work_experience,
        email: contact.email,
        phone: contact.phone,
        total_score,
        skill_score: skills.score,
        skills_found: skills.found,
        experience_score: titles.score,
        titles_matched: titles.matched,
        education_score,
        soft_skill_score: soft.score,
        soft_skills_found: soft.matched,
        similarity_score,
        certifications_found: bonus.certifications,
        leadership_found: bonus.leadership,
        achievements_found: bonus.achievements,
        bonus_score: bonus.bonus_score,
    })
}
