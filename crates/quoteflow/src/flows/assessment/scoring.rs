//! The scoring engine: pure functions from answers to category and overall
//! percentages.

use crate::flows::category::ServiceCategory;

use super::bank::QuestionBank;
use super::domain::{AssessmentAnswer, CategoryScore, MAX_OPTION_SCORE};

/// Integer percentage with a zero-division guard.
fn percentage(score: u32, max_score: u32) -> u8 {
    if max_score == 0 {
        return 0;
    }
    ((100.0 * f64::from(score)) / f64::from(max_score)).round() as u8
}

/// Score every category in taxonomy order. Questions without a matching
/// answer count as 0 but still contribute to the category maximum; callers
/// gate on full completion before invoking this.
pub fn category_scores(bank: &QuestionBank, answers: &[AssessmentAnswer]) -> Vec<CategoryScore> {
    ServiceCategory::ordered()
        .into_iter()
        .map(|category| {
            let mut score = 0u32;
            let mut question_count = 0u32;
            for question in bank
                .questions()
                .iter()
                .filter(|question| question.category == category)
            {
                question_count += 1;
                if let Some(answer) = answers
                    .iter()
                    .find(|answer| answer.question_id == question.id)
                {
                    score += answer.score;
                }
            }
            let max_score = question_count * MAX_OPTION_SCORE;
            CategoryScore {
                category,
                score,
                max_score,
                percentage: percentage(score, max_score),
            }
        })
        .collect()
}

/// Pooled percentage across all categories: total points over total possible,
/// not an average of category percentages. Categories with more questions
/// deliberately weigh more.
pub fn overall_score(scores: &[CategoryScore]) -> u8 {
    let score: u32 = scores.iter().map(|entry| entry.score).sum();
    let max_score: u32 = scores.iter().map(|entry| entry.max_score).sum();
    percentage(score, max_score)
}
