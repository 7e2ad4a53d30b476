// src/scoring/mod.rs
pub mod aggregate;
pub mod bonus;
pub mod criteria;
pub mod keywords;
pub mod similarity;

// Re-export key scoring types for convenience
pub use aggregate::{ats_score, ScoreReport};
pub use criteria::ScoringCriteria;

/// Rounds to 2 decimals, the precision every sub-score is reported at.
/// Exact ties go to the even neighbour.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.0 / 7.0 * 40.0), 17.14);
        assert_eq!(round2(2.0 / 3.0 * 20.0), 13.33);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_round2_ties_go_to_even() {
        // one match out of a 64-entry list at weight 40
        assert_eq!(round2(1.0 / 64.0 * 40.0), 0.62);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-0.625), -0.62);
        assert_eq!(round2(0.6251), 0.63);
    }
}
