//! Password strength scoring.

use serde::{Deserialize, Serialize};

/// Highest score a password can reach.
pub const MAX_STRENGTH_SCORE: u8 = 5;

const MIN_LENGTH: usize = 8;
const STRONG_LENGTH: usize = 12;

bitflags::bitflags! {
    /// Character classes present in a password.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CharClasses: u8 {
        const UPPERCASE = 1 << 0;
        const LOWERCASE = 1 << 1;
        const DIGIT = 1 << 2;
        const SYMBOL = 1 << 3;
    }
}

impl CharClasses {
    /// Collects the classes present in `text`.
    ///
    /// Letters and digits are ASCII; any other character counts as a symbol.
    #[must_use]
    pub fn of(text: &str) -> Self {
        text.chars().fold(Self::empty(), |classes, c| {
            classes
                | if c.is_ascii_uppercase() {
                    Self::UPPERCASE
                } else if c.is_ascii_lowercase() {
                    Self::LOWERCASE
                } else if c.is_ascii_digit() {
                    Self::DIGIT
                } else {
                    Self::SYMBOL
                }
        })
    }
}

/// Scores a password from 0 to 5.
///
/// One point each for length of at least 8, length of at least 12, and each
/// of the four character classes, capped at [`MAX_STRENGTH_SCORE`].
#[must_use]
pub fn calculate_password_strength(password: &str) -> u8 {
    let length = password.chars().count();
    let classes = CharClasses::of(password);

    let mut score = 0u8;
    if length >= MIN_LENGTH {
        score += 1;
    }
    if length >= STRONG_LENGTH {
        score += 1;
    }
    #[allow(clippy::cast_possible_truncation)]
    let class_points = classes.bits().count_ones() as u8;

    (score + class_points).min(MAX_STRENGTH_SCORE)
}

/// Coarse strength bucket shown next to the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    /// Maps a score to its level: 0-2 weak, 3-4 medium, 5 strong.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Self::Weak,
            3..=4 => Self::Medium,
            _ => Self::Strong,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    /// Indicator color token.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Weak => "red",
            Self::Medium => "yellow",
            Self::Strong => "green",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the level for a strength score.
#[must_use]
pub const fn get_password_strength_level(score: u8) -> StrengthLevel {
    StrengthLevel::from_score(score)
}
