//! Heuristic strength scoring

use std::fmt;

const LENGTH_THRESHOLDS: [usize; 3] = [8, 12, 16];

/// Strength band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    /// 0-2 points
    Weak = 1,
    /// 3-4 points
    Medium = 2,
    /// 5-6 points
    Strong = 3,
    /// 7 points
    VeryStrong = 4,
}

impl Strength {
    fn from_points(points: u8) -> Self {
        match points {
            0..=2 => Strength::Weak,
            3..=4 => Strength::Medium,
            5..=6 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }

    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw points (0-7) and the band they fall into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthScore {
    /// One point per length threshold met plus one per character class present
    pub points: u8,
    /// Band derived from `points`
    pub strength: Strength,
}

/// Score a password.
///
/// One point for each of the lengths 8, 12 and 16 reached, counted in
/// characters, and one for each of lowercase, uppercase, digit and symbol
/// present. Anything that is not an ASCII letter or digit is a symbol.
#[must_use]
pub fn score(secret: &str) -> StrengthScore {
    let length = secret.chars().count();
    let length_points = LENGTH_THRESHOLDS.iter().filter(|&&t| length >= t).count();

    let checks: [fn(&char) -> bool; 4] = [
        char::is_ascii_lowercase,
        char::is_ascii_uppercase,
        char::is_ascii_digit,
        |c| !c.is_ascii_alphanumeric(),
    ];
    let class_points = checks
        .iter()
        .filter(|check| secret.chars().any(|c| check(&c)))
        .count();

    // At most 3 + 4.
    let points = (length_points + class_points) as u8;
    StrengthScore {
        points,
        strength: Strength::from_points(points),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands() {
        assert_eq!(score("").strength, Strength::Weak);
        assert_eq!(score("abc").points, 1);
        assert_eq!(score("abcdefgh").points, 2);
        assert_eq!(score("abcdefgh1A").strength, Strength::Medium);
        assert_eq!(score("abcdefgh1A!x").points, 6);
        assert_eq!(score("abcdefgh1A!xyzwv").strength, Strength::VeryStrong);
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        assert_eq!(score("é").points, 1);
        assert_eq!(score("ééééééééé").points, 2);
    }

    #[test]
    fn test_ordering() {
        assert!(Strength::Weak < Strength::VeryStrong);
        assert_eq!(Strength::VeryStrong.to_string(), "Very Strong");
    }
}
