use serde::{Deserialize, Serialize};
use sqlx::Type;
use utoipa::ToSchema;

/// Alert languages, matching database enum `language_code`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "language_code", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// Bemba
    Bem,
    /// Nyanja
    Nya,
    /// Tonga
    To,
    /// Lozi
    Loz,
    /// Kaonde
    Kqn,
    /// Lunda
    Lun,
    /// Luvale
    Luv,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::En,
        Language::Bem,
        Language::Nya,
        Language::To,
        Language::Loz,
        Language::Kqn,
        Language::Lun,
        Language::Luv,
    ];

    /// Code used as the key in an alert's message map
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Bem => "bem",
            Language::Nya => "nya",
            Language::To => "to",
            Language::Loz => "loz",
            Language::Kqn => "kqn",
            Language::Lun => "lun",
            Language::Luv => "luv",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| format!("unsupported language code '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_codes_parse_back() {
        for lang in Language::ALL {
            assert_eq!(Language::from_str(lang.code()), Ok(lang));
            assert_eq!(
                serde_json::to_value(lang).unwrap(),
                serde_json::json!(lang.code())
            );
        }
        assert!(Language::from_str("EN").is_err());
        assert!(Language::from_str("fr").is_err());
    }
}
