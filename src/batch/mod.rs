// src/batch/mod.rs
use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::{Document, TextExtractor};
use crate::scoring::{ats_score, ScoreReport, ScoringCriteria};
use crate::utils::AppError;

/// One scored row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResume {
    #[serde(rename = "Filename")]
    pub filename: String,
    #[serde(flatten)]
    pub report: ScoreReport,
}

/// A document the pipeline could not score, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentFailure {
    pub filename: String,
    pub reason: String,
}

/// Per-document outcome; a failure never aborts the batch.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchItem {
    Scored(RankedResume),
    Failed(DocumentFailure),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Sorted by total score, descending; ties keep encounter order.
    pub ranked: Vec<RankedResume>,
    pub failures: Vec<DocumentFailure>,
}

/// Finds `*.pdf` files directly inside `folder`, sorted by file name.
pub fn discover_documents<P: AsRef<Path>>(folder: P) -> Result<Vec<Document>, AppError> {
    let folder = folder.as_ref();
    if !folder.is_dir() {
        return Err(AppError::Config(format!(
            "Resume folder {} does not exist or is not a directory",
            folder.display()
        )));
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let path = entry?.path();
        let is_pdf = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if path.is_file() && is_pdf {
            paths.push(path);
        }
    }
    paths.sort();

    tracing::info!("Discovered {} PDF document(s) in {}", paths.len(), folder.display());
    Ok(paths.into_iter().map(Document::from_path).collect())
}

/// Runs extraction and scoring for one document.
pub fn process_document(
    document: &Document,
    jd_text: &str,
    criteria: &ScoringCriteria,
    extractor: &dyn TextExtractor,
) -> BatchItem {
    let failed = |reason: String| {
        tracing::warn!("Error processing {}: {}", document.name, reason);
        BatchItem::Failed(DocumentFailure {
            filename: document.name.clone(),
            reason,
        })
    };

    let text = match extractor.extract(document) {
        Ok(text) => text,
        Err(e) => return failed(e.to_string()),
    };

    match ats_score(jd_text, text.as_str(), criteria) {
        Ok(report) => {
            tracing::info!("Scored {}: {:.2}", document.name, report.total_score);
            BatchItem::Scored(RankedResume {
                filename: document.name.clone(),
                report,
            })
        }
        Err(e) => failed(e.to_string()),
    }
}

/// Scores every document against the job description and ranks the results.
///
/// A blank job description is fatal; per-document failures are collected.
pub fn rank_documents(
    documents: &[Document],
    jd_text: &str,
    criteria: &ScoringCriteria,
    extractor: &dyn TextExtractor,
) -> Result<BatchResult, AppError> {
    if jd_text.trim().is_empty() {
        return Err(AppError::Config("Job description is empty".to_string()));
    }
    criteria.validate()?;

    tracing::info!("Ranking {} resume(s)", documents.len());
    let items: Vec<BatchItem> = documents
        .iter()
        .map(|doc| process_document(doc, jd_text, criteria, extractor))
        .collect();

    let result = BatchResult::from_items(items);
    tracing::info!(
        "Processing finished. Scored: {}, Failures: {}",
        result.ranked.len(),
        result.failures.len()
    );
    Ok(result)
}

impl BatchResult {
    pub fn from_items(items: Vec<BatchItem>) -> Self {
        let mut result = Self::default();
        for item in items {
            match item {
                BatchItem::Scored(row) => result.ranked.push(row),
                BatchItem::Failed(failure) => result.failures.push(failure),
            }
        }
        // sort_by is stable, so equal totals stay in encounter order
        result
            .ranked
            .sort_by(|a, b| b.report.total_score.total_cmp(&a.report.total_score));
        result
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Summary table: filename, total, skill and experience scores.
    pub fn leaderboard(&self) -> String {
        let name_width = self
            .ranked
            .iter()
            .map(|r| r.filename.chars().count())
            .max()
            .unwrap_or(0)
            .max("Filename".len());

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>4}  {:<name_width$}  {:>7}  {:>7}  {:>10}",
            "#", "Filename", "Total", "Skills", "Experience"
        );
        for (rank, row) in self.ranked.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:>4}  {:<name_width$}  {:>7.2}  {:>7.2}  {:>10.2}",
                rank + 1,
                row.filename,
                row.report.total_score,
                row.report.skill_score,
                row.report.experience_score
            );
        }
        out
    }

    /// Per-resume detail blocks, in ranked order.
    pub fn details(&self) -> String {
        let mut out = String::new();
        for row in &self.ranked {
            let r = &row.report;
            let _ = writeln!(out, "== {} (Score: {:.2})", row.filename, r.total_score);
            let _ = writeln!(out, "Intro: {}", r.intro_line);
            let _ = writeln!(out, "Professional Summary: {}", r.professional_summary);
            let _ = writeln!(out, "Work Experience Summary:\n{}", r.work_experience);
            let _ = writeln!(out, "Skills Found: {}", r.skills_found.join(", "));
            let _ = writeln!(out, "Certifications: {}", r.certifications_found);
            let _ = writeln!(out, "Leadership Roles: {}", r.leadership_found);
            let _ = writeln!(out, "Hackathons/Achievements: {}", r.achievements_found);
            let _ = writeln!(out, "Email: {}", r.email);
            let _ = writeln!(out, "Phone: {}", r.phone);
            out.push('\n');
        }
        out
    }
}
