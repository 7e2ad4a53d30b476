// src/scoring/bonus.rs
use once_cell::sync::Lazy;
use regex::Regex;

const MAX_BONUS_MATCHES: usize = 5;
const POINTS_PER_MATCH: f64 = 2.0;

// Alternation order matters: at a given position the first alternative wins,
// so "AWS Certified" counts once, not as "certified" too.
static CERTIFICATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(certified|certification|AWS Certified|Google Certified)")
        .expect("Failed to compile CERTIFICATION_RE")
});

static LEADERSHIP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(team lead|president|vice president|mentor|leadership)")
        .expect("Failed to compile LEADERSHIP_RE")
});

static ACHIEVEMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(hackathon|winner|achievement|finalist|runner[-\s]?up|prize|award)")
        .expect("Failed to compile ACHIEVEMENT_RE")
});

/// Raw per-family counts and the capped bonus they earn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AchievementCounts {
    pub certifications: usize,
    pub leadership: usize,
    pub achievements: usize,
    pub bonus_score: f64,
}

/// Bonus = min(total matches, 5) × 2, i.e. an even number in 0..=10.
pub fn score_achievements(resume_text: &str) -> AchievementCounts {
    let certifications = CERTIFICATION_RE.find_iter(resume_text).count();
    let leadership = LEADERSHIP_RE.find_iter(resume_text).count();
    let achievements = ACHIEVEMENT_RE.find_iter(resume_text).count();

    let total = certifications + leadership + achievements;
    let bonus_score = total.min(MAX_BONUS_MATCHES) as f64 * POINTS_PER_MATCH;

    tracing::debug!(
        "Bonus matches: certifications={}, leadership={}, achievements={} -> {}",
        certifications,
        leadership,
        achievements,
        bonus_score
    );

    AchievementCounts {
        certifications,
        leadership,
        achievements,
        bonus_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certified_and_hackathon_winner() {
        let counts = score_achievements("AWS Certified Solutions Architect. Hackathon winner 2022.");
        assert_eq!(counts.certifications, 1);
        assert_eq!(counts.achievements, 2);
        assert_eq!(counts.leadership, 0);
        assert_eq!(counts.bonus_score, 6.0);
    }

    #[test]
    fn test_bonus_is_capped_at_ten() {
        let text = "certified certification mentor leadership award prize finalist runner-up";
        let counts = score_achievements(text);
        assert_eq!(counts.certifications + counts.leadership + counts.achievements, 8);
        assert_eq!(counts.bonus_score, 10.0);
    }

    #[test]
    fn test_runner_up_variants() {
        let counts = score_achievements("Runner up, runner-up, runnerup");
        assert_eq!(counts.achievements, 3);
    }

    #[test]
    fn test_vice_president_counts_once() {
        let counts = score_achievements("Vice President of the coding club");
        assert_eq!(counts.leadership, 1);
    }

    #[test]
    fn test_bonus_is_even_and_bounded() {
        for text in ["", "mentor", "award award", "prize prize prize prize prize prize prize"] {
            let bonus = score_achievements(text).bonus_score;
            assert!(bonus >= 0.0 && bonus <= 10.0);
            assert_eq!(bonus % 2.0, 0.0);
        }
    }

    #[test]
    fn test_empty_text_has_no_bonus() {
        let counts = score_achievements("");
        assert_eq!(counts, AchievementCounts { certifications: 0, leadership: 0, achievements: 0, bonus_score: 0.0 });
    }
}
