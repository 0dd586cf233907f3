//! Fixed additive scoring heuristic.

use std::ops::RangeInclusive;

use crate::types::PageMetrics;

pub const TITLE_POINTS: u32 = 2;
pub const H1_POINTS: u32 = 2;
pub const DESCRIPTION_POINTS: u32 = 1;
pub const URL_POINTS: u32 = 1;
pub const WORD_COUNT_POINTS: u32 = 2;
pub const DENSITY_POINTS: u32 = 1;

/// Highest score any page can reach.
pub const MAX_SCORE: u32 =
    TITLE_POINTS + H1_POINTS + DESCRIPTION_POINTS + URL_POINTS + WORD_COUNT_POINTS + DENSITY_POINTS;

/// Word counts that earn [`WORD_COUNT_POINTS`].
pub const WORD_COUNT_BAND: RangeInclusive<usize> = 800..=2500;

/// Keyword densities that earn [`DENSITY_POINTS`].
pub const DENSITY_BAND: RangeInclusive<f64> = 0.005..=0.03;

/// Scores the signals in `metrics`, ignoring its current `score` field.
///
/// Every condition only adds points, so satisfying more conditions never
/// lowers the result.
#[must_use]
pub fn score_metrics(metrics: &PageMetrics) -> u32 {
    let mut score = 0;
    if metrics.keyword_in_title {
        score += TITLE_POINTS;
    }
    if metrics.keyword_in_h1 {
        score += H1_POINTS;
    }
    if metrics.keyword_in_description {
        score += DESCRIPTION_POINTS;
    }
    if metrics.keyword_in_url {
        score += URL_POINTS;
    }
    if WORD_COUNT_BAND.contains(&metrics.word_count) {
        score += WORD_COUNT_POINTS;
    }
    if DENSITY_BAND.contains(&metrics.keyword_density) {
        score += DENSITY_POINTS;
    }
    score
}
