// src/main.rs
mod batch;
mod document;
mod extractors;
mod scoring;
mod storage;
mod utils;

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use document::{Document, PdfTextExtractor};
use scoring::ScoringCriteria;
use storage::StorageManager;
use utils::AppError;

/// Ranks PDF resumes against a job description with a heuristic ATS score
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File containing the job description
    #[arg(long, conflicts_with = "jd_text")]
    jd: Option<PathBuf>,

    /// Job description given inline
    #[arg(long)]
    jd_text: Option<String>,

    /// Folder scanned (non-recursively) for *.pdf resumes
    #[arg(short, long)]
    folder: Option<PathBuf>,

    /// Individual resume files to score
    resumes: Vec<PathBuf>,

    /// Also score one PDF read from stdin (an in-memory upload)
    #[arg(long)]
    stdin: bool,

    /// Name reported for the stdin upload
    #[arg(long, default_value = "stdin.pdf", requires = "stdin")]
    stdin_name: String,

    /// JSON file overriding the skill/title/education/soft-skill lists
    #[arg(long)]
    criteria: Option<PathBuf>,

    /// Output directory for the ranking exports
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Print the per-resume detail blocks after the leaderboard
    #[arg(long)]
    details: bool,

    /// Debug-level logging (RUST_LOG still wins when set)
    #[arg(short, long)]
    verbose: bool,
}

fn read_job_description(args: &Args) -> Result<String, AppError> {
    let jd_text = match (&args.jd, &args.jd_text) {
        (Some(path), _) => std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Could not read job description {}: {}", path.display(), e))
        })?,
        (None, Some(text)) => text.clone(),
        (None, None) => {
            return Err(AppError::Config(
                "A job description is required (--jd <file> or --jd-text <text>)".to_string(),
            ))
        }
    };

    if jd_text.trim().is_empty() {
        return Err(AppError::Config("Job description is empty".to_string()));
    }
    Ok(jd_text)
}

/// Reads a whole PDF upload into memory.
fn read_upload<R: Read>(mut reader: R, name: &str) -> Result<Document, AppError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    if bytes.is_empty() {
        return Err(AppError::Config(format!("Upload {} is empty", name)));
    }
    tracing::info!("Read {} bytes for upload {}", bytes.len(), name);
    Ok(Document::from_bytes(name, bytes))
}

fn main() -> Result<(), AppError> {
    // 1. Parse CLI Arguments
    let args = Args::parse();

    // 2. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging(args.verbose);
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Load job description and scoring criteria
    let jd_text = read_job_description(&args)?;
    let criteria = match &args.criteria {
        Some(path) => ScoringCriteria::from_json_file(path)?,
        None => ScoringCriteria::default(),
    };

    // 4. Collect documents: folder first, then explicit files, then the stdin upload
    let mut documents = Vec::new();
    if let Some(folder) = &args.folder {
        documents.extend(batch::discover_documents(folder)?);
    }
    documents.extend(args.resumes.iter().map(Document::from_path));
    if args.stdin {
        documents.push(read_upload(std::io::stdin().lock(), &args.stdin_name)?);
    }

    if documents.is_empty() {
        return Err(AppError::Config(
            "No resumes to process (use --folder <dir>, pass PDF paths, or --stdin)".to_string(),
        ));
    }

    // 5. Score and rank
    let extractor = PdfTextExtractor::new();
    let result = batch::rank_documents(&documents, &jd_text, &criteria, &extractor)?;

    for failure in &result.failures {
        eprintln!("Error with {}: {}", failure.filename, failure.reason);
    }

    if result.is_empty() {
        tracing::warn!("No valid resumes found.");
    } else {
        println!("{}", result.leaderboard());
        if args.details {
            println!("{}", result.details());
        }
    }

    // 6. Export
    let storage = StorageManager::new(&args.output_dir)?;
    match storage.save_ranking_csv(&result) {
        Ok(path) => tracing::info!("Saved leaderboard to: {}", path.display()),
        Err(e) => tracing::error!("Failed to save leaderboard: {}", e),
    }
    match storage.save_ranking_json(&result) {
        Ok(path) => tracing::info!("Saved ranked reports to: {}", path.display()),
        Err(e) => tracing::error!("Failed to save ranked reports: {}", e),
    }
    storage.save_run_metadata(&result, &jd_text)?;

    if result.is_empty() {
        return Err(AppError::Processing(format!(
            "Failed to score any of the {} resume(s)",
            result.failures.len()
        )));
    }

    Ok(())
}
