use std::collections::HashMap;

use crate::features::alerts::models::Language;

/// Read-only district -> dominant language lookup
#[derive(Debug, Clone)]
pub struct LanguageMap {
    districts: HashMap<String, Language>,
    default: Language,
}

impl LanguageMap {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Language)>,
        S: Into<String>,
    {
        Self {
            districts: entries.into_iter().map(|(d, l)| (d.into(), l)).collect(),
            default: Language::En,
        }
    }

    /// Built-in table for Zambian districts
    pub fn zambia() -> Self {
        Self::new([
            // Lusaka Province, urban and mixed
            ("Lusaka", Language::En),
            ("Chongwe", Language::Nya),
            // Copperbelt
            ("Ndola", Language::Bem),
            ("Kitwe", Language::Bem),
            // Southern
            ("Livingstone", Language::To),
            ("Choma", Language::To),
            ("Mazabuka", Language::To),
            // Western
            ("Mongu", Language::Loz),
            ("Kaoma", Language::Loz),
            // North-Western
            ("Solwezi", Language::Kqn),
            ("Mwinilunga", Language::Lun),
            ("Zambezi", Language::Luv),
            // Eastern
            ("Chipata", Language::Nya),
            // Northern and Luapula
            ("Kasama", Language::Bem),
            ("Mansa", Language::Bem),
        ])
    }

    /// Dominant language of `district`, English when the district is not listed
    pub fn dominant_language(&self, district: &str) -> Language {
        self.districts
            .get(district)
            .copied()
            .unwrap_or(self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zambia_table() {
        let map = LanguageMap::zambia();
        assert_eq!(map.dominant_language("Ndola"), Language::Bem);
        assert_eq!(map.dominant_language("Livingstone"), Language::To);
        assert_eq!(map.dominant_language("Lusaka"), Language::En);
        assert_eq!(map.dominant_language("Zambezi"), Language::Luv);
    }

    #[test]
    fn test_unknown_district_defaults_to_english() {
        let map = LanguageMap::zambia();
        assert_eq!(map.dominant_language("Atlantis"), Language::En);
        assert_eq!(map.dominant_language("ndola"), Language::En);
        assert_eq!(map.dominant_language(""), Language::En);
    }

    #[test]
    fn test_custom_table() {
        let map = LanguageMap::new([("Testville", Language::Loz)]);
        assert_eq!(map.dominant_language("Testville"), Language::Loz);
        assert_eq!(map.dominant_language("Ndola"), Language::En);
    }
}
