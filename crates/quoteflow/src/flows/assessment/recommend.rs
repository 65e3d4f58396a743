//! Maps weak assessment categories onto catalog services.

use crate::flows::category::ServiceCategory;

use super::domain::CategoryScore;

/// Categories scoring strictly below this percentage produce recommendations.
pub const RECOMMENDATION_THRESHOLD: u8 = 60;

/// Fixed category → service-id table. Union order over weak categories follows
/// this table's definition order, first occurrence wins.
const CATEGORY_SERVICES: &[(ServiceCategory, &[&str])] = &[
    (ServiceCategory::Strategy, &["brand-strategy", "marketing-audit"]),
    (ServiceCategory::Website, &["website-build", "website-maintenance"]),
    (ServiceCategory::Ecommerce, &["ecommerce-store"]),
    (
        ServiceCategory::SocialMedia,
        &["social-media-management", "social-media-setup"],
    ),
    (ServiceCategory::Content, &["blog-articles", "copywriting"]),
    (ServiceCategory::VideoProduction, &["promo-video"]),
    (
        ServiceCategory::Email,
        &["email-marketing", "email-automation-setup"],
    ),
    (ServiceCategory::Seo, &["seo-audit", "seo-monthly"]),
    (ServiceCategory::Ads, &["ads-setup", "google-ads"]),
    (
        ServiceCategory::AiAutomation,
        &["workflow-automation", "ai-chatbot"],
    ),
];

/// Deduplicated service ids for every category under the threshold. Empty when
/// every category clears it — callers render a congratulation instead.
pub fn recommended_services(scores: &[CategoryScore]) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();
    for (category, service_ids) in CATEGORY_SERVICES {
        let weak = scores
            .iter()
            .any(|entry| entry.category == *category && entry.percentage < RECOMMENDATION_THRESHOLD);
        if !weak {
            continue;
        }
        for id in *service_ids {
            if !recommendations.iter().any(|existing| existing == id) {
                recommendations.push((*id).to_string());
            }
        }
    }
    recommendations
}
