use serde::{Deserialize, Serialize};

/// Closed taxonomy shared by the service catalog and the assessment question
/// bank. Weak assessment categories map onto catalog services through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    Strategy,
    Website,
    Ecommerce,
    SocialMedia,
    Content,
    VideoProduction,
    Email,
    Seo,
    Ads,
    AiAutomation,
}

impl ServiceCategory {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::Strategy,
            Self::Website,
            Self::Ecommerce,
            Self::SocialMedia,
            Self::Content,
            Self::VideoProduction,
            Self::Email,
            Self::Seo,
            Self::Ads,
            Self::AiAutomation,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strategy => "Strategy",
            Self::Website => "Website",
            Self::Ecommerce => "E-commerce",
            Self::SocialMedia => "Social Media",
            Self::Content => "Content",
            Self::VideoProduction => "Video Production",
            Self::Email => "Email Marketing",
            Self::Seo => "SEO",
            Self::Ads => "Paid Ads",
            Self::AiAutomation => "AI & Automation",
        }
    }
}
