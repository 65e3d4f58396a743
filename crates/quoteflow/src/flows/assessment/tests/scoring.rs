use crate::flows::assessment::bank::QuestionBank;
use crate::flows::assessment::domain::{AssessmentAnswer, CategoryScore, ScoreBand};
use crate::flows::assessment::recommend::{recommended_services, RECOMMENDATION_THRESHOLD};
use crate::flows::assessment::scoring::{category_scores, overall_score};
use crate::flows::category::ServiceCategory;
use crate::i18n::Locale;

fn answer(question_id: &str, option_index: usize, score: u32) -> AssessmentAnswer {
    AssessmentAnswer {
        question_id: question_id.to_string(),
        option_index,
        score,
    }
}

fn entry(category: ServiceCategory, score: u32, max_score: u32, percentage: u8) -> CategoryScore {
    CategoryScore {
        category,
        score,
        max_score,
        percentage,
    }
}

#[test]
fn two_question_category_scores_seven_of_ten() {
    let bank = QuestionBank::standard();
    // E-commerce has exactly two questions; answer them 5 and 2.
    let answers = vec![
        answer("ecommerce-online-sales", 0, 5),
        answer("ecommerce-checkout", 1, 2),
    ];

    let scores = category_scores(&bank, &answers);
    let ecommerce = scores
        .iter()
        .find(|entry| entry.category == ServiceCategory::Ecommerce)
        .expect("ecommerce scored");

    assert_eq!(ecommerce.score, 7);
    assert_eq!(ecommerce.max_score, 10);
    assert_eq!(ecommerce.percentage, 70);
}

#[test]
fn unanswered_questions_count_as_zero_against_full_max() {
    let bank = QuestionBank::standard();
    let scores = category_scores(&bank, &[]);

    for entry in &scores {
        assert_eq!(entry.score, 0);
        assert_eq!(
            entry.max_score as usize,
            bank.question_count(entry.category) * 5
        );
        assert_eq!(entry.percentage, 0);
    }
    assert_eq!(scores.len(), ServiceCategory::ordered().len());
}

#[test]
fn overall_score_pools_points_rather_than_averaging_percentages() {
    // 10/10 and 0/15 pooled: round(100 × 10/25) = 40, not the 50 a plain
    // average of 100% and 0% would give.
    let scores = vec![
        entry(ServiceCategory::Website, 10, 10, 100),
        entry(ServiceCategory::Seo, 0, 15, 0),
    ];
    assert_eq!(overall_score(&scores), 40);
    assert_ne!(overall_score(&scores), 50);
}

#[test]
fn overall_score_guards_against_an_empty_bank() {
    assert_eq!(overall_score(&[]), 0);
    assert_eq!(
        overall_score(&[entry(ServiceCategory::Content, 0, 0, 0)]),
        0
    );
}

#[test]
fn full_marks_score_one_hundred() {
    let bank = QuestionBank::standard();
    let answers: Vec<AssessmentAnswer> = bank
        .questions()
        .iter()
        .map(|question| answer(question.id, 0, 5))
        .collect();

    let scores = category_scores(&bank, &answers);
    assert_eq!(overall_score(&scores), 100);
    for entry in &scores {
        assert_eq!(entry.percentage, 100);
    }
}

#[test]
fn threshold_is_strictly_below_sixty() {
    let at_threshold = vec![entry(ServiceCategory::Seo, 9, 15, 60)];
    assert!(recommended_services(&at_threshold).is_empty());

    let below_threshold = vec![entry(ServiceCategory::Seo, 8, 15, 59)];
    let recommendations = recommended_services(&below_threshold);
    assert_eq!(recommendations, vec!["seo-audit", "seo-monthly"]);
    assert_eq!(RECOMMENDATION_THRESHOLD, 60);
}

#[test]
fn strong_results_produce_no_recommendations() {
    let scores: Vec<CategoryScore> = ServiceCategory::ordered()
        .into_iter()
        .map(|category| entry(category, 10, 10, 100))
        .collect();
    assert!(recommended_services(&scores).is_empty());
}

#[test]
fn recommendations_follow_table_order_and_dedupe() {
    let scores = vec![
        entry(ServiceCategory::Ads, 0, 10, 0),
        entry(ServiceCategory::Strategy, 2, 15, 13),
    ];
    // Table order puts strategy before ads regardless of input order.
    assert_eq!(
        recommended_services(&scores),
        vec!["brand-strategy", "marketing-audit", "ads-setup", "google-ads"]
    );
}

#[test]
fn score_bands_break_at_eighty_sixty_and_forty() {
    assert_eq!(ScoreBand::for_score(100), ScoreBand::Excellent);
    assert_eq!(ScoreBand::for_score(80), ScoreBand::Excellent);
    assert_eq!(ScoreBand::for_score(79), ScoreBand::Solid);
    assert_eq!(ScoreBand::for_score(60), ScoreBand::Solid);
    assert_eq!(ScoreBand::for_score(59), ScoreBand::Developing);
    assert_eq!(ScoreBand::for_score(40), ScoreBand::Developing);
    assert_eq!(ScoreBand::for_score(39), ScoreBand::Critical);
    assert_eq!(ScoreBand::for_score(0), ScoreBand::Critical);
}

#[test]
fn score_bands_localize_and_color() {
    assert_eq!(ScoreBand::Excellent.label(Locale::En), "Excellent");
    assert_eq!(ScoreBand::Developing.label(Locale::Es), "En desarrollo");
    assert_eq!(ScoreBand::Critical.label(Locale::Fr), "À traiter");
    assert_eq!(ScoreBand::Excellent.color(), "#22c55e");
    assert_eq!(ScoreBand::Critical.color(), "#ef4444");
}
