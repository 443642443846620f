//! Grade model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade derived from a subject mark.
///
/// Variants are declared in ascending order so that `Ord` follows
/// `Z < P < C < D < HD`. Codes read from storage that are none of these are
/// kept as [`Grade::Other`] and sort after `HD`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Grade {
    /// Fail (below 50)
    Z,
    /// Pass (50 to below 65)
    P,
    /// Credit (65 to below 75)
    C,
    /// Distinction (75 to below 85)
    D,
    /// High distinction (85 and above)
    HD,
    /// Unrecognised code read from storage, kept verbatim
    Other(String),
}

impl Grade {
    /// Classify a mark. Lower bounds are inclusive.
    ///
    /// # Arguments
    /// * `mark` - Numeric mark, nominally in `[0, 100]`
    ///
    /// # Returns
    /// The grade band the mark falls into. Any value below 50 (including
    /// negative marks and NaN) classifies as `Z`.
    #[must_use]
    pub fn classify(mark: f64) -> Self {
        if mark >= 85.0 {
            Self::HD
        } else if mark >= 75.0 {
            Self::D
        } else if mark >= 65.0 {
            Self::C
        } else if mark >= 50.0 {
            Self::P
        } else {
            Self::Z
        }
    }

    /// Short code as stored on disk (e.g. `"HD"`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Z => "Z",
            Self::P => "P",
            Self::C => "C",
            Self::D => "D",
            Self::HD => "HD",
            Self::Other(code) => code.as_str(),
        }
    }
}

impl From<String> for Grade {
    fn from(code: String) -> Self {
        match code.as_str() {
            "Z" => Self::Z,
            "P" => Self::P,
            "C" => Self::C,
            "D" => Self::D,
            "HD" => Self::HD,
            _ => Self::Other(code),
        }
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        match grade {
            Grade::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_inclusive() {
        assert_eq!(Grade::classify(50.0), Grade::P);
        assert_eq!(Grade::classify(65.0), Grade::C);
        assert_eq!(Grade::classify(75.0), Grade::D);
        assert_eq!(Grade::classify(85.0), Grade::HD);
    }

    #[test]
    fn test_just_below_boundaries() {
        assert_eq!(Grade::classify(49.999), Grade::Z);
        assert_eq!(Grade::classify(64.999), Grade::P);
        assert_eq!(Grade::classify(74.999), Grade::C);
        assert_eq!(Grade::classify(84.999), Grade::D);
    }

    #[test]
    fn test_out_of_range_marks() {
        assert_eq!(Grade::classify(-10.0), Grade::Z);
        assert_eq!(Grade::classify(150.0), Grade::HD);
        assert_eq!(Grade::classify(f64::NAN), Grade::Z);
    }

    #[test]
    fn test_classify_is_monotonic() {
        let mut previous = Grade::classify(0.0);
        for step in 0..=4000 {
            let mark = f64::from(step) * 0.025;
            let grade = Grade::classify(mark);
            assert!(grade >= previous, "grade dropped at mark {mark}");
            previous = grade;
        }
        assert_eq!(previous, Grade::HD);
    }

    #[test]
    fn test_serializes_as_short_code() {
        assert_eq!(serde_json::to_string(&Grade::HD).unwrap(), "\"HD\"");
        let parsed: Grade = serde_json::from_str("\"C\"").unwrap();
        assert_eq!(parsed, Grade::C);
        assert_eq!(Grade::Z.to_string(), "Z");
    }

    #[test]
    fn test_unrecognised_code_is_kept() {
        let parsed: Grade = serde_json::from_str("\"F\"").unwrap();
        assert_eq!(parsed, Grade::Other("F".to_string()));
        assert_eq!(parsed.to_string(), "F");
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"F\"");
        assert!(parsed > Grade::HD);
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        let parsed: Grade = serde_json::from_str("\"hd\"").unwrap();
        assert_eq!(parsed, Grade::Other("hd".to_string()));
    }
}
