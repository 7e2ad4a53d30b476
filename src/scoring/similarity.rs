// src/scoring/similarity.rs
//! TF-IDF cosine similarity between the job description and one resume.
//!
//! The vector space is built over exactly two documents. Tokens are lowercased
//! `\b\w\w+\b` runs minus English stop words; idf is smoothed
//! (`ln((1 + n) / (1 + df)) + 1`) and rows are L2-normalised before the dot product.

use std::collections::{BTreeMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use super::round2;
use crate::utils::error::ScoreError;

pub const SIMILARITY_WEIGHT: f64 = 20.0;

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("Failed to compile TOKEN_RE"));

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "amoungst",
    "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere",
    "are", "around", "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming",
    "been", "before", "beforehand", "behind", "being", "below", "beside", "besides", "between",
    "beyond", "bill", "both", "bottom", "but", "by", "call", "can", "cannot", "cant", "co", "con",
    "could", "couldnt", "cry", "de", "describe", "detail", "do", "done", "down", "due", "during",
    "each", "eg", "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "etc", "even",
    "ever", "every", "everyone", "everything", "everywhere", "except", "few", "fifteen", "fifty",
    "fill", "find", "fire", "first", "five", "for", "former", "formerly", "forty", "found", "four",
    "from", "front", "full", "further", "get", "give", "go", "had", "has", "hasnt", "have", "he",
    "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him",
    "himself", "his", "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed",
    "interest", "into", "is", "it", "its", "itself", "keep", "last", "latter", "latterly", "least",
    "less", "ltd", "made", "many", "may", "me", "meanwhile", "might", "mill", "mine", "more",
    "moreover", "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely",
    "neither", "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor",
    "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part",
    "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed", "seeming",
    "seems", "serious", "several", "she", "should", "show", "side", "since", "sincere", "six",
    "sixty", "so", "some", "somehow", "someone", "something", "sometime", "sometimes", "somewhere",
    "still", "such", "system", "take", "ten", "than", "that", "the", "their", "them", "themselves",
    "then", "thence", "there", "thereafter", "thereby", "therefore", "therein", "thereupon", "these",
    "they", "thick", "thin", "third", "this", "those", "though", "three", "through", "throughout",
    "thru", "thus", "to", "together", "too", "top", "toward", "towards", "twelve", "twenty", "two",
    "un", "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were", "what",
    "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas", "whereby", "wherein",
    "whereupon", "wherever", "whether", "which", "while", "whither", "who", "whoever", "whole",
    "whom", "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your",
    "yours", "yourself", "yourselves",
];

/// Raw term counts for one document, stop words removed.
fn term_counts(text: &str) -> BTreeMap<String, f64> {
    let lowered = text.to_lowercase();
    let mut counts = BTreeMap::new();
    for token in TOKEN_RE.find_iter(&lowered) {
        let term = token.as_str();
        if STOP_WORDS.contains(term) {
            continue;
        }
        *counts.entry(term.to_string()).or_insert(0.0) += 1.0;
    }
    counts
}

/// Smoothed idf weights applied to counts, then L2-normalised.
fn tfidf_vector(counts: &BTreeMap<String, f64>, other: &BTreeMap<String, f64>) -> BTreeMap<String, f64> {
    const N_DOCS: f64 = 2.0;
    let mut weighted: BTreeMap<String, f64> = counts
        .iter()
        .map(|(term, tf)| {
            let df = 1.0 + if other.contains_key(term) { 1.0 } else { 0.0 };
            let idf = ((1.0 + N_DOCS) / (1.0 + df)).ln() + 1.0;
            (term.clone(), tf * idf)
        })
        .collect();

    let norm = weighted.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for w in weighted.values_mut() {
            *w /= norm;
        }
    }
    weighted
}

/// Cosine similarity in [0, 1].
///
/// Fails with `DegenerateSimilarityInput` when either side has no vocabulary
/// terms left (empty text or stop words only).
pub fn cosine_similarity(jd_text: &str, resume_text: &str) -> Result<f64, ScoreError> {
    let jd_counts = term_counts(jd_text);
    let resume_counts = term_counts(resume_text);
    if jd_counts.is_empty() || resume_counts.is_empty() {
        return Err(ScoreError::DegenerateSimilarityInput);
    }

    let jd_vec = tfidf_vector(&jd_counts, &resume_counts);
    let resume_vec = tfidf_vector(&resume_counts, &jd_counts);

    let dot: f64 = jd_vec
        .iter()
        .filter_map(|(term, w)| resume_vec.get(term).map(|r| w * r))
        .sum();
    Ok(dot.clamp(0.0, 1.0))
}

/// Similarity × 20, rounded to 2 decimals. Degenerate input scores 0.
pub fn score_similarity(jd_text: &str, resume_text: &str) -> f64 {
    match cosine_similarity(jd_text, resume_text) {
        Ok(similarity) => round2(similarity * SIMILARITY_WEIGHT),
        Err(e) => {
            tracing::debug!("Similarity treated as 0: {}", e);
            0.0
        }
    }
}
