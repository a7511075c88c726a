//! Grid layout optimization for tiling fixed-aspect-ratio content.
//!
//! Given a container size, an item count and the items' shared aspect ratio,
//! enumerates every row/column partition, computes exact geometry for each,
//! and ranks them so the best balances total coverage against the size of
//! the smallest tile.
//!
//! Pure geometry — no rendering, no I/O, `no_std` compatible (needs `alloc`).
//!
//! # Modules
//!
//! - [`fit`] — Aspect-ratio fit of content into one cell
//! - [`dimensions`] — Candidate partitions and the closed-form estimate
//! - [`grid`] — Per-candidate layout: spans, row heights, content areas
//! - [`template`] — Grid-track descriptor for the presentation layer
//! - [`rank`] — Standard-score ranking of candidates
//! - [`plan`] — Request builder
//!
//! # Example
//!
//! ```
//! use zengrid::rank_layouts;
//!
//! let ranked = rank_layouts(1920.0, 1080.0, 3, 16.0 / 9.0).unwrap();
//! let best = &ranked[0].layout;
//! assert_eq!(best.id, "2x2");
//! assert_eq!(best.template.rows_css(), "540px 1fr");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod dimensions;
pub mod error;
pub mod fit;
pub mod grid;
pub mod plan;
pub mod rank;
#[cfg(feature = "svg")]
pub mod svg;
pub mod template;

pub use dimensions::{GridDimensions, enumerate_dimensions, estimate_dimensions};
pub use error::LayoutError;
pub use fit::{Rect, Region, fit_rect};
pub use grid::{
    ContentArea, GridCell, GridLayout, Placement, RowMetrics, RowSizing, build_layout,
    build_layout_with,
};
pub use plan::{DEFAULT_ASPECT_RATIO, GridRequest};
pub use rank::{AreaStats, RankedCandidate, rank_layouts, rank_layouts_with};
pub use template::{GridTemplate, RowTrack};
