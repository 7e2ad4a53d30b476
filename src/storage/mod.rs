// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::batch::BatchResult;
use crate::utils::error::StorageError;

const RANKING_CSV: &str = "ranking.csv";
const RANKING_JSON: &str = "ranking.json";
const RUN_META_JSON: &str = "run_meta.json";

const CSV_HEADER: [&str; 19] = [
    "Filename",
    "Total ATS Score (out of 100)",
    "Skill Match Score (40%)",
    "Experience Score (20%)",
    "Education Score (10%)",
    "Soft Skill Score (10%)",
    "Similarity Score (20%)",
    "Bonus Score (max 10%)",
    "Skills Found",
    "Matched Titles",
    "Soft Skills Found",
    "Certifications Found",
    "Leadership Roles Found",
    "Hackathon/Achievements Found",
    "Candidate Intro Line",
    "Professional Summary",
    "Work Experience Summary",
    "Email",
    "Phone",
];

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Writes the leaderboard as CSV; list fields are joined with "; "
    pub fn save_ranking_csv(&self, result: &BatchResult) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(RANKING_CSV);
        let mut writer = csv::Writer::from_path(&file_path)?;

        writer.write_record(CSV_HEADER)?;
        for row in &result.ranked {
            let r = &row.report;
            writer.write_record([
                row.filename.clone(),
                format!("{:.2}", r.total_score),
                format!("{:.2}", r.skill_score),
                format!("{:.2}", r.experience_score),
                format!("{:.2}", r.education_score),
                format!("{:.2}", r.soft_skill_score),
                format!("{:.2}", r.similarity_score),
                format!("{:.2}", r.bonus_score),
                r.skills_found.join("; "),
                r.titles_matched.to_string(),
                r.soft_skills_found.to_string(),
                r.certifications_found.to_string(),
                r.leadership_found.to_string(),
                r.achievements_found.to_string(),
                r.intro_line.clone(),
                r.professional_summary.clone(),
                r.work_experience.clone(),
                r.email.clone(),
                r.phone.clone(),
            ])?;
        }
        writer.flush()?;

        tracing::info!("Saved ranking to {}", file_path.display());
        Ok(file_path)
    }

    /// Writes the full ranked reports as pretty JSON
    pub fn save_ranking_json(&self, result: &BatchResult) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(RANKING_JSON);
        let body = serde_json::to_string_pretty(&result.ranked)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, body).map_err(StorageError::IoError)?;

        tracing::info!("Saved ranked reports to {}", file_path.display());
        Ok(file_path)
    }

    /// Saves metadata about the run in JSON format
    pub fn save_run_metadata(&self, result: &BatchResult, jd_text: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(RUN_META_JSON);

        let metadata = serde_json::json!({
            "run_timestamp": chrono::Utc::now().to_rfc3339(),
            "job_description_length": jd_text.chars().count(),
            "scored_count": result.ranked.len(),
            "failed_count": result.failures.len(),
            "top_candidate": result.ranked.first().map(|r| r.filename.clone()),
            "failures": result.failures,
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved run metadata to {}", file_path.display());
        Ok(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{BatchItem, DocumentFailure, RankedResume};
    use crate::scoring::{ats_score, ScoringCriteria};

    fn sample_result() -> BatchResult {
        let criteria = ScoringCriteria::default();
        let report = ats_score("Python developer", "Python, AWS, SQL", &criteria).unwrap();
        BatchResult::from_items(vec![
            BatchItem::Scored(RankedResume { filename: "jane.pdf".to_string(), report }),
            BatchItem::Failed(DocumentFailure {
                filename: "broken.pdf".to_string(),
                reason: "Could not parse PDF broken.pdf: invalid file header".to_string(),
            }),
        ])
    }

    #[test]
    fn test_creates_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("run1");
        StorageManager::new(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_save_ranking_csv() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();
        let path = storage.save_ranking_csv(&sample_result()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), CSV_HEADER.len());
        assert_eq!(&headers[0], "Filename");

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "jane.pdf");
        assert_eq!(&rows[0][2], "17.14");
        assert_eq!(&rows[0][8], "Python; AWS; SQL");
    }

    #[test]
    fn test_save_ranking_json_and_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();
        let result = sample_result();

        let json_path = storage.save_ranking_json(&result).unwrap();
        let rows: serde_json::Value = serde_json::from_str(&fs::read_to_string(json_path).unwrap()).unwrap();
        assert_eq!(rows[0]["Filename"], "jane.pdf");

        let meta_path = storage.save_run_metadata(&result, "Python developer").unwrap();
        let meta: serde_json::Value = serde_json::from_str(&fs::read_to_string(meta_path).unwrap()).unwrap();
        assert_eq!(meta["scored_count"], 1);
        assert_eq!(meta["failed_count"], 1);
        assert_eq!(meta["top_candidate"], "jane.pdf");
        assert_eq!(meta["failures"][0]["filename"], "broken.pdf");
    }
}
