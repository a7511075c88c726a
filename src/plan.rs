//! Request builder for layout planning.
//!
//! # Example
//!
//! ```
//! use zengrid::GridRequest;
//!
//! let best = GridRequest::new(1920.0, 1080.0, 4)
//!     .aspect(16, 9)
//!     .best()
//!     .unwrap()
//!     .expect("at least one item");
//!
//! assert_eq!(best.layout.id, "2x2");
//! assert_eq!(best.layout.template.columns_css(), "repeat(2, 1fr)");
//! ```

use alloc::vec::Vec;

use crate::dimensions::{GridDimensions, estimate_dimensions};
use crate::error::LayoutError;
use crate::grid::{GridLayout, RowSizing, build_layout_with};
use crate::rank::{RankedCandidate, rank_layouts_with};

/// Aspect ratio of most web video.
pub const DEFAULT_ASPECT_RATIO: f64 = 16.0 / 9.0;

/// Everything needed to lay out `count` items in a container.
///
/// Defaults to 16:9 content and [`RowSizing::Adaptive`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridRequest {
    pub container_width: f64,
    pub container_height: f64,
    pub count: u32,
    pub aspect_ratio: f64,
    pub row_sizing: RowSizing,
}

impl GridRequest {
    /// Lay out `count` items in a `container_width`×`container_height` container.
    pub fn new(container_width: f64, container_height: f64, count: u32) -> Self {
        Self {
            container_width,
            container_height,
            count,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            row_sizing: RowSizing::Adaptive,
        }
    }

    /// Set the content aspect ratio (width / height).
    pub fn aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Set the content aspect ratio from integer parts, e.g. `aspect(4, 3)`.
    ///
    /// A zero height gives a ratio that every operation rejects.
    pub fn aspect(mut self, width: u32, height: u32) -> Self {
        self.aspect_ratio = if height == 0 {
            0.0
        } else {
            width as f64 / height as f64
        };
        self
    }

    /// Set how row heights are assigned.
    pub fn row_sizing(mut self, sizing: RowSizing) -> Self {
        self.row_sizing = sizing;
        self
    }

    /// Every candidate, best first.
    pub fn rank(&self) -> Result<Vec<RankedCandidate>, LayoutError> {
        rank_layouts_with(
            self.container_width,
            self.container_height,
            self.count,
            self.aspect_ratio,
            self.row_sizing,
        )
    }

    /// The top-ranked candidate, or `None` for zero items.
    pub fn best(&self) -> Result<Option<RankedCandidate>, LayoutError> {
        Ok(self.rank()?.into_iter().next())
    }

    /// Layout for specific dimensions, e.g. a selection restored by id.
    pub fn layout(&self, dimensions: GridDimensions) -> Result<GridLayout, LayoutError> {
        build_layout_with(
            self.container_width,
            self.container_height,
            dimensions,
            self.count,
            self.aspect_ratio,
            self.row_sizing,
        )
    }

    /// Cheap closed-form guess, see [`estimate_dimensions`].
    pub fn estimate(&self) -> Result<GridDimensions, LayoutError> {
        estimate_dimensions(
            self.container_width,
            self.container_height,
            self.count,
            self.aspect_ratio,
        )
    }
}
