use serde::{Deserialize, Serialize};

/// Locales served by the public site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
    Fr,
}

impl Locale {
    pub const fn ordered() -> [Self; 3] {
        [Self::En, Self::Es, Self::Fr]
    }

    /// Parse a locale tag from a query string or header, falling back to English.
    pub fn from_tag(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "es" => Self::Es,
            "fr" => Self::Fr,
            _ => Self::En,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }
}

/// A single piece of copy in every supported locale.
///
/// Catalog and question-bank records carry these instead of repeating
/// per-field locale conditionals; adding a locale means adding a variant to
/// [`Locale`] and a field here, then filling in data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    en: &'static str,
    es: &'static str,
    fr: &'static str,
}

impl LocalizedText {
    pub const fn new(en: &'static str, es: &'static str, fr: &'static str) -> Self {
        Self { en, es, fr }
    }

    pub const fn resolve(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Es => self.es,
            Locale::Fr => self.fr,
        }
    }
}

/// Shorthand constructor used by the static data tables.
pub const fn tr(en: &'static str, es: &'static str, fr: &'static str) -> LocalizedText {
    LocalizedText::new(en, es, fr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tags_fall_back_to_english() {
        assert_eq!(Locale::from_tag("de"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
        assert_eq!(Locale::from_tag(" ES "), Locale::Es);
        assert_eq!(Locale::from_tag("fr"), Locale::Fr);
    }

    #[test]
    fn localized_text_resolves_per_locale() {
        let text = tr("hello", "hola", "bonjour");
        assert_eq!(text.resolve(Locale::En), "hello");
        assert_eq!(text.resolve(Locale::Es), "hola");
        assert_eq!(text.resolve(Locale::Fr), "bonjour");
    }
}
