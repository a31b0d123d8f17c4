//! Languages the editor offers.
//!
//! The set mirrors the language selector: each variant has a stable id
//! used on the wire (`{"language": "python", ...}`) and as the ruleset
//! key, plus a human label for the dropdown.

use serde::{Deserialize, Serialize};

/// A selectable editor language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Python,
    Cpp,
    Java,
    JavaScript,
}

impl Language {
    /// Every selectable language, in dropdown order.
    pub const ALL: [Language; 4] = [
        Language::Python,
        Language::Cpp,
        Language::Java,
        Language::JavaScript,
    ];

    /// Stable identifier used on the wire and as the ruleset key.
    pub fn id(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::JavaScript => "javascript",
        }
    }

    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::JavaScript => "JavaScript",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "python" | "py" => Ok(Language::Python),
            "cpp" | "c++" => Ok(Language::Cpp),
            "java" => Ok(Language::Java),
            "javascript" | "js" => Ok(Language::JavaScript),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// Error for unrecognized language identifiers.
#[derive(Debug, thiserror::Error)]
#[error("Unknown language: {0}")]
pub struct UnknownLanguage(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.id().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn test_serde_uses_id() {
        let json = serde_json::to_string(&Language::JavaScript).unwrap();
        assert_eq!(json, "\"javascript\"");
    }

    #[test]
    fn test_unknown_language() {
        assert!("fortran".parse::<Language>().is_err());
    }
}
