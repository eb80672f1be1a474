//! Heuristic strength scoring.
//!
//! Linear in length and class diversity, with a flat penalty below
//! [`SHORT_LENGTH`]. No dictionary or entropy model.

use std::fmt;

use super::charset::classes_in;

pub const MAX_SCORE: u8 = 100;
pub const MEDIUM_THRESHOLD: u8 = 40;
pub const STRONG_THRESHOLD: u8 = 70;
pub const SHORT_LENGTH: usize = 8;
pub const SHORT_PENALTY: i64 = 20;

const PER_CHAR: i64 = 3;
const PER_CLASS: i64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Weak,
    Medium,
    Strong,
}

impl Tier {
    pub fn from_score(score: u8) -> Self {
        if score < MEDIUM_THRESHOLD {
            Tier::Weak
        } else if score < STRONG_THRESHOLD {
            Tier::Medium
        } else {
            Tier::Strong
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Weak => "Weak",
            Tier::Medium => "Medium",
            Tier::Strong => "Strong",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    /// 0..=100
    pub score: u8,
    pub tier: Tier,
}

impl Strength {
    pub fn new(score: u8) -> Self {
        let score = score.min(MAX_SCORE);
        Strength {
            score,
            tier: Tier::from_score(score),
        }
    }
}

/// Score any string. Classes are counted from content, not from what was
/// requested at generation time.
pub fn score(password: &str) -> Strength {
    let len = password.chars().count();
    let classes = classes_in(password).len();

    let mut raw = len as i64 * PER_CHAR + classes as i64 * PER_CLASS;
    if len < SHORT_LENGTH {
        raw -= SHORT_PENALTY;
    }

    Strength::new(raw.clamp(0, MAX_SCORE as i64) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_zero_and_weak() {
        assert_eq!(
            score(""),
            Strength {
                score: 0,
                tier: Tier::Weak
            }
        );
    }

    #[test]
    fn short_penalty_applies_below_eight() {
        // 7*3 + 20 - 20
        assert_eq!(
            score("abcdefg"),
            Strength {
                score: 21,
                tier: Tier::Weak
            }
        );
        // 8*3 + 20
        assert_eq!(
            score("abcdefgh"),
            Strength {
                score: 44,
                tier: Tier::Medium
            }
        );
    }

    #[test]
    fn clamps_to_hundred() {
        let s = score("aB3!aB3!aB3!aB3!aB3!");
        assert_eq!(s.score, 100);
        assert_eq!(s.tier, Tier::Strong);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(Tier::from_score(39), Tier::Weak);
        assert_eq!(Tier::from_score(40), Tier::Medium);
        assert_eq!(Tier::from_score(69), Tier::Medium);
        assert_eq!(Tier::from_score(70), Tier::Strong);
    }

    #[test]
    fn exact_boundary_scores() {
        // 10 lowercase chars, one class: 30 + 20 = 50
        assert_eq!(score("abcdefghij").score, 50);
        // 10 chars, 2 classes: 30 + 40 = 70
        assert_eq!(score("abcdefghi1").tier, Tier::Strong);
        // 5 chars, 3 classes: 15 + 60 - 20 = 55
        assert_eq!(score("aB3cd").score, 55);
    }

    #[test]
    fn counts_chars_not_bytes() {
        // 8 chars (non-ascii ones add length but no class)
        let s = score("ééééaaaa");
        assert_eq!(s.score, 8 * 3 + 20);
    }
}
