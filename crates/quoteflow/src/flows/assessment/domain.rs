use serde::{Deserialize, Serialize};

use crate::flows::category::ServiceCategory;
use crate::i18n::{Locale, LocalizedText};

/// Highest score a single option can carry; category maximums derive from it.
pub const MAX_OPTION_SCORE: u32 = 5;

/// One answer choice on a question.
#[derive(Debug, Clone)]
pub struct AssessmentOption {
    pub text: LocalizedText,
    pub score: u32,
}

/// A multiple-choice question in the static bank.
#[derive(Debug, Clone)]
pub struct AssessmentQuestion {
    pub id: &'static str,
    pub category: ServiceCategory,
    pub text: LocalizedText,
    pub options: Vec<AssessmentOption>,
}

impl AssessmentQuestion {
    pub fn view(&self, locale: Locale) -> QuestionView {
        QuestionView {
            id: self.id,
            category: self.category,
            text: self.text.resolve(locale),
            options: self
                .options
                .iter()
                .map(|option| option.text.resolve(locale))
                .collect(),
        }
    }
}

/// Localized question as served over HTTP. Option scores stay server-side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionView {
    pub id: &'static str,
    pub category: ServiceCategory,
    pub text: &'static str,
    pub options: Vec<&'static str>,
}

/// Recorded once per question as the user progresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentAnswer {
    pub question_id: String,
    pub option_index: usize,
    pub score: u32,
}

/// Derived per-category result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: ServiceCategory,
    pub score: u32,
    pub max_score: u32,
    pub percentage: u8,
}

/// Opaque identifier handed back by the assessment store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// User-visible classification of a percentage score. The breakpoints drive
/// both copy and color coding on the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Solid,
    Developing,
    Critical,
}

impl ScoreBand {
    pub const fn for_score(percentage: u8) -> Self {
        if percentage >= 80 {
            Self::Excellent
        } else if percentage >= 60 {
            Self::Solid
        } else if percentage >= 40 {
            Self::Developing
        } else {
            Self::Critical
        }
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match self {
            Self::Excellent => tr_band("Excellent", "Excelente", "Excellent").resolve(locale),
            Self::Solid => tr_band("Solid", "Sólido", "Solide").resolve(locale),
            Self::Developing => {
                tr_band("Developing", "En desarrollo", "En progression").resolve(locale)
            }
            Self::Critical => tr_band("Needs attention", "Requiere atención", "À traiter")
                .resolve(locale),
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Excellent => "#22c55e",
            Self::Solid => "#eab308",
            Self::Developing => "#f97316",
            Self::Critical => "#ef4444",
        }
    }
}

const fn tr_band(en: &'static str, es: &'static str, fr: &'static str) -> LocalizedText {
    LocalizedText::new(en, es, fr)
}
