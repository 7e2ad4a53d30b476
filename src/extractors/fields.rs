// src/extractors/fields.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;

// --- Constants ---
/// Placeholder for any text field the extractors could not fill.
pub const NOT_FOUND: &str = "Not found";

const INTRO_MIN_CHARS: usize = 30;
const INTRO_EXCLUDED_WORDS: [&str; 3] = ["email", "linkedin", "phone"];
const EXPERIENCE_MIN_LINE_CHARS: usize = 20;
const EXPERIENCE_MAX_LINES: usize = 5;

// --- Regex Patterns for Text Matching (Lazy Static) ---

/// First email-shaped token. No validation beyond the shape.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
        .expect("Failed to compile EMAIL_RE")
});

/// Optional `+`, a digit, then 9-15 digits/whitespace/hyphens (10-17 chars total).
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+?\d[\d\s\-]{9,15}").expect("Failed to compile PHONE_RE")
});

/// Summary header, separators, then 50-500 chars of anything (capture group 2).
/// Not anchored per line; the content may span several lines.
static SUMMARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(professional summary|profile|summary of qualifications)[\s:\-]*((?s:.){50,500})")
        .expect("Failed to compile SUMMARY_RE")
});

/// Experience header followed by up to 1000 chars. The whole match, header included, is the block.
static EXPERIENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(work experience|experience|employment history|professional experience)(?s:.){0,1000}")
        .expect("Failed to compile EXPERIENCE_RE")
});

// --- Data Structures ---
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

// --- Extractors ---

pub fn extract_contact_info(text: &str) -> ContactInfo {
    let email = EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string());
    let phone = PHONE_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string());

    tracing::trace!("Contact info: email={}, phone={}", email, phone);
    ContactInfo { email, phone }
}

/// First line longer than 30 chars (trimmed) that doesn't look like a contact line.
pub fn extract_intro_line(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .find(|line| {
            let lowered = line.to_lowercase();
            line.chars().count() > INTRO_MIN_CHARS
                && !INTRO_EXCLUDED_WORDS.iter().any(|w| lowered.contains(w))
        })
        .map(str::to_string)
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

/// First line of the captured summary content.
pub fn extract_professional_summary(text: &str) -> String {
    SUMMARY_RE
        .captures(text)
        .and_then(|caps| caps.get(2))
        .map(|content| {
            content
                .as_str()
                .trim()
                .split('\n')
                .next()
                .unwrap_or_default()
                .to_string()
        })
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

/// Up to five lines (trimmed, longer than 20 chars) from the experience block.
pub fn extract_work_experience(text: &str) -> String {
    let Some(block) = EXPERIENCE_RE.find(text) else {
        return NOT_FOUND.to_string();
    };

    block
        .as_str()
        .split('\n')
        .map(str::trim)
        .filter(|line| line.chars().count() > EXPERIENCE_MIN_LINE_CHARS)
        .take(EXPERIENCE_MAX_LINES)
        .collect::<Vec<_>>()
        .join("\n")
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_info_found() {
        let text = "Jane Doe\njane.doe+jobs@example.co.uk | +1 555-123-4567";
        let info = extract_contact_info(text);
        assert_eq!(info.email, "jane.doe+jobs@example.co.uk");
        assert_eq!(info.phone, "+1 555-123-4567");
    }

    #[test]
    fn test_contact_info_missing() {
        let info = extract_contact_info("No contact details here, call 12345");
        assert_eq!(info.email, NOT_FOUND);
        assert_eq!(info.phone, NOT_FOUND);
    }

    #[test]
    fn test_phone_match_is_bounded() {
        let info = extract_contact_info("Phone: 9876543210123456789");
        assert_eq!(info.phone, "9876543210123456");
    }

    #[test]
    fn test_intro_line_skips_short_and_contact_lines() {
        let text = "Jane Doe\nEmail: jane@example.com, LinkedIn: /in/janedoe\n  Backend developer with eight years of Rust and Go  \nMore text";
        assert_eq!(
            extract_intro_line(text),
            "Backend developer with eight years of Rust and Go"
        );
    }

    #[test]
    fn test_intro_line_not_found_for_short_lines() {
        let text = "Jane Doe\nPython, AWS, SQL\nSeattle, WA";
        assert_eq!(extract_intro_line(text), NOT_FOUND);
    }

    #[test]
    fn test_intro_line_exclusion_is_case_insensitive() {
        let text = "PHONE NUMBER AVAILABLE UPON REQUEST FOR ALL";
        assert_eq!(extract_intro_line(text), NOT_FOUND);
    }

    #[test]
    fn test_professional_summary_first_line() {
        let text = "PROFESSIONAL SUMMARY:\n  Seasoned engineer building data platforms at scale.\nLed migrations to AWS and mentored a team of five.";
        assert_eq!(
            extract_professional_summary(text),
            "Seasoned engineer building data platforms at scale."
        );
    }

    #[test]
    fn test_professional_summary_requires_fifty_chars() {
        assert_eq!(extract_professional_summary("Profile: short"), NOT_FOUND);
        assert_eq!(extract_professional_summary("No header in this text at all, however long it gets to be."), NOT_FOUND);
    }

    #[test]
    fn test_professional_summary_capped_at_five_hundred_chars() {
        let text = format!("Profile: {}", "é".repeat(600));
        let summary = extract_professional_summary(&text);
        assert_eq!(summary.chars().count(), 500);
        assert!(summary.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_work_experience_long_section_keeps_first_five_lines() {
        let entries: Vec<String> = (0..100)
            .map(|i| format!("Entry {:03} of the employment record", i))
            .collect();
        let text = format!("Work Experience\n{}", entries.join("\n"));

        let block = extract_work_experience(&text);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines, entries[..5].iter().map(String::as_str).collect::<Vec<_>>());
        let window = &text[..("Work Experience".len() + 1000)];
        assert!(lines.iter().all(|line| window.contains(line)));
    }

    #[test]
    fn test_work_experience_ignores_text_past_thousand_chars() {
        let text = format!(
            "Experience\n{}Staff engineer leading the platform team\n",
            "ab\n".repeat(400)
        );
        assert_eq!(extract_work_experience(&text), "");
    }

    #[test]
    fn test_work_experience_block() {
        let text = "Work Experience\nSenior Software Engineer, Acme Corp\n2019 - 2023\nBuilt ingestion pipelines in Python and SQL\nTiny\nMentored four junior developers on the team\nDesigned event-driven services on AWS Lambda\nOwned the CI pipeline and release tooling end to end\n";
        let block = extract_work_experience(text);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Senior Software Engineer, Acme Corp");
        assert_eq!(lines[1], "Built ingestion pipelines in Python and SQL");
        assert!(!block.contains("2019 - 2023"));
        assert!(!block.contains("Tiny"));
    }

    #[test]
    fn test_work_experience_includes_long_header_line() {
        let text = "Professional Experience at Example Systems\nshort\n";
        assert_eq!(
            extract_work_experience(text),
            "Professional Experience at Example Systems"
        );
    }

    #[test]
    fn test_work_experience_not_found() {
        assert_eq!(extract_work_experience("Education\nBachelor of Science"), NOT_FOUND);
    }
}
