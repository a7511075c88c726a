//! Candidate ranking by standard score.
//!
//! Every partition from [`enumerate_dimensions`] is built, then scored on two
//! metrics: the smallest cell's content area (evenness) and the total content
//! area (utilization). Each metric is converted to a standard score over the
//! candidate population and the two scores are summed, so neither metric's
//! absolute scale dominates.
//!
//! # Example
//!
//! ```
//! use zengrid::rank_layouts;
//!
//! let ranked = rank_layouts(1920.0, 1080.0, 3, 16.0 / 9.0).unwrap();
//! assert_eq!(ranked.len(), 3);
//! assert_eq!(ranked[0].layout.id, "2x2");
//! ```

use alloc::vec::Vec;
use core::cmp::Ordering;

use num_traits::Float;

use crate::dimensions::{GridDimensions, enumerate_dimensions};
use crate::error::{LayoutError, check_aspect_ratio, check_container};
use crate::grid::{GridLayout, RowSizing, build_checked};

/// A built layout with its standard scores.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedCandidate {
    pub layout: GridLayout,
    /// Standard score of `content_area.min`.
    pub min_area_deviation: f64,
    /// Standard score of `content_area.total`.
    pub total_area_deviation: f64,
    /// Sum of both scores. Rankings sort on this, highest first.
    pub combined_deviation: f64,
}

impl RankedCandidate {
    /// Layout id, `"<columns>x<rows>"`.
    pub fn id(&self) -> &str {
        &self.layout.id
    }
}

/// Population mean and standard deviation of one metric.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AreaStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl AreaStats {
    /// Stats from a running sum and sum of squares over `n` samples.
    ///
    /// Variance is `E[X²] − E[X]²`, clamped at zero. A variance within
    /// floating-point noise of the squared mean counts as zero.
    pub fn from_sums(sum: f64, sum_of_squares: f64, n: usize) -> Self {
        if n == 0 {
            return Self::default();
        }
        let n = n as f64;
        let mean = sum / n;
        let variance = (sum_of_squares / n - mean * mean).max(0.0);
        let std_dev = if variance <= mean * mean * f64::EPSILON {
            0.0
        } else {
            Float::sqrt(variance)
        };
        Self { mean, std_dev }
    }

    /// Standard score of `value`. Zero when the population has no spread.
    pub fn score(&self, value: f64) -> f64 {
        if self.std_dev > 0.0 {
            (value - self.mean) / self.std_dev
        } else {
            0.0
        }
    }
}

/// Rank every partition of `content_count` items, best first.
///
/// Uses [`RowSizing::Adaptive`]. See [`rank_layouts_with`].
pub fn rank_layouts(
    container_width: f64,
    container_height: f64,
    content_count: u32,
    content_aspect_ratio: f64,
) -> Result<Vec<RankedCandidate>, LayoutError> {
    rank_layouts_with(
        container_width,
        container_height,
        content_count,
        content_aspect_ratio,
        RowSizing::Adaptive,
    )
}

/// Rank every partition of `content_count` items, best first.
///
/// The result holds one entry per candidate, sorted by
/// [`RankedCandidate::combined_deviation`] descending. Equal scores keep
/// enumeration order (fewer columns first). `content_count == 0` yields an
/// empty ranking.
pub fn rank_layouts_with(
    container_width: f64,
    container_height: f64,
    content_count: u32,
    content_aspect_ratio: f64,
    sizing: RowSizing,
) -> Result<Vec<RankedCandidate>, LayoutError> {
    check_aspect_ratio(content_aspect_ratio)?;
    check_container(container_width, container_height)?;

    let candidates = enumerate_dimensions(content_count);
    let layouts = build_all(
        candidates,
        container_width,
        container_height,
        content_count,
        content_aspect_ratio,
        sizing,
    )?;

    let (mut min_sum, mut min_sq, mut total_sum, mut total_sq) = (0.0, 0.0, 0.0, 0.0);
    for layout in &layouts {
        let area = &layout.content_area;
        min_sum += area.min;
        min_sq += area.min * area.min;
        total_sum += area.total;
        total_sq += area.total * area.total;
    }
    let min_stats = AreaStats::from_sums(min_sum, min_sq, layouts.len());
    let total_stats = AreaStats::from_sums(total_sum, total_sq, layouts.len());

    let mut ranked: Vec<RankedCandidate> = layouts
        .into_iter()
        .map(|layout| {
            let min_area_deviation = min_stats.score(layout.content_area.min);
            let total_area_deviation = total_stats.score(layout.content_area.total);
            RankedCandidate {
                layout,
                min_area_deviation,
                total_area_deviation,
                combined_deviation: min_area_deviation + total_area_deviation,
            }
        })
        .collect();
    // Stable: ties stay in enumeration order.
    ranked.sort_by(|a, b| {
        b.combined_deviation
            .partial_cmp(&a.combined_deviation)
            .unwrap_or(Ordering::Equal)
    });

    if let Some(best) = ranked.first() {
        tracing::debug!(
            content_count,
            candidates = ranked.len(),
            best = %best.layout.id,
            score = best.combined_deviation,
            "ranked grid layouts"
        );
    }
    Ok(ranked)
}

#[cfg(not(feature = "parallel"))]
fn build_all(
    candidates: Vec<GridDimensions>,
    container_width: f64,
    container_height: f64,
    content_count: u32,
    aspect_ratio: f64,
    sizing: RowSizing,
) -> Result<Vec<GridLayout>, LayoutError> {
    candidates
        .into_iter()
        .map(|d| {
            build_checked(
                container_width,
                container_height,
                d,
                content_count,
                aspect_ratio,
                sizing,
            )
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn build_all(
    candidates: Vec<GridDimensions>,
    container_width: f64,
    container_height: f64,
    content_count: u32,
    aspect_ratio: f64,
    sizing: RowSizing,
) -> Result<Vec<GridLayout>, LayoutError> {
    use rayon::prelude::*;

    candidates
        .into_par_iter()
        .map(|d| {
            build_checked(
                container_width,
                container_height,
                d,
                content_count,
                aspect_ratio,
                sizing,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const HD: f64 = 16.0 / 9.0;

    fn ids(ranked: &[RankedCandidate]) -> Vec<&str> {
        ranked.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn three_items_full_hd_prefers_two_by_two() {
        let ranked = rank_layouts(1920.0, 1080.0, 3, HD).unwrap();
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].id(), "2x2");
        assert!(
            ranked
                .windows(2)
                .all(|w| w[0].combined_deviation >= w[1].combined_deviation)
        );
    }

    #[test]
    fn ties_keep_enumeration_order() {
        // 1x3 and 3x1 cover exactly the same area on 16:9.
        let ranked = rank_layouts(1920.0, 1080.0, 3, HD).unwrap();
        assert_eq!(ids(&ranked), vec!["2x2", "1x3", "3x1"]);
        assert_eq!(ranked[1].combined_deviation, ranked[2].combined_deviation);
    }

    #[test]
    fn four_items_full_hd() {
        let ranked = rank_layouts(1920.0, 1080.0, 4, HD).unwrap();
        assert_eq!(ids(&ranked), vec!["2x2", "3x2", "1x4", "4x1"]);
    }

    #[test]
    fn single_candidate_scores_zero() {
        let ranked = rank_layouts(1920.0, 1080.0, 1, HD).unwrap();
        assert_eq!(ranked.len(), 1);
        let only = &ranked[0];
        assert_eq!(only.id(), "1x1");
        assert_eq!(only.min_area_deviation, 0.0);
        assert_eq!(only.total_area_deviation, 0.0);
        assert_eq!(only.combined_deviation, 0.0);
    }

    #[test]
    fn identical_metrics_score_zero() {
        // Square container, square content: 1x2 and 2x1 are mirror images.
        let ranked = rank_layouts(1000.0, 1000.0, 2, 1.0).unwrap();
        assert!(ranked.iter().all(|r| r.combined_deviation == 0.0));
        assert_eq!(ids(&ranked), vec!["1x2", "2x1"]);
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(rank_layouts(1920.0, 1080.0, 0, HD).unwrap().is_empty());
    }

    #[test]
    fn invalid_aspect_ratio_fails_whole_ranking() {
        assert_eq!(
            rank_layouts(1920.0, 1080.0, 5, 0.0),
            Err(LayoutError::InvalidAspectRatio)
        );
        assert_eq!(
            rank_layouts(1920.0, 1080.0, 5, -1.0),
            Err(LayoutError::InvalidAspectRatio)
        );
    }

    #[test]
    fn scores_are_finite_and_centered() {
        for count in 1..=24 {
            let ranked = rank_layouts(1280.0, 800.0, count, HD).unwrap();
            assert_eq!(ranked.len(), count as usize);
            let mut min_sum = 0.0;
            let mut total_sum = 0.0;
            for r in &ranked {
                assert!(r.combined_deviation.is_finite(), "{count}: {}", r.id());
                assert_eq!(
                    r.combined_deviation,
                    r.min_area_deviation + r.total_area_deviation
                );
                min_sum += r.min_area_deviation;
                total_sum += r.total_area_deviation;
            }
            // Standard scores sum to zero over the population.
            assert!(min_sum.abs() < 1e-6, "{count}: {min_sum}");
            assert!(total_sum.abs() < 1e-6, "{count}: {total_sum}");
        }
    }

    #[test]
    fn tall_container_prefers_stacking() {
        let ranked = rank_layouts(400.0, 1600.0, 3, HD).unwrap();
        assert_eq!(ranked[0].id(), "1x3");
    }

    #[test]
    fn stats_population_std_dev() {
        // 2, 4, 4, 4, 5, 5, 7, 9 → mean 5, σ 2.
        let xs = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let sum: f64 = xs.iter().sum();
        let sq: f64 = xs.iter().map(|x| x * x).sum();
        let stats = AreaStats::from_sums(sum, sq, xs.len());
        assert_eq!(stats, AreaStats { mean: 5.0, std_dev: 2.0 });
        assert_eq!(stats.score(9.0), 2.0);
        assert_eq!(stats.score(3.0), -1.0);
    }

    #[test]
    fn stats_no_spread() {
        let stats = AreaStats::from_sums(3.0 * 0.1, 3.0 * 0.1 * 0.1, 3);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.score(0.1), 0.0);
        assert_eq!(AreaStats::from_sums(0.0, 0.0, 0), AreaStats::default());
    }
}
