//! Aspect-ratio fitting of content into a single cell.
//!
//! # Example
//!
//! ```
//! use zengrid::{fit_rect, Rect};
//!
//! // A 300×100 cell holding 2:1 content is height-bound.
//! let r = fit_rect(300.0, 100.0, 2.0).unwrap();
//! assert_eq!(r, Rect::new(200.0, 100.0));
//! ```

use crate::error::{LayoutError, check_aspect_ratio};

/// Width × height of a fitted rectangle, in container units (usually CSS pixels).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// The degenerate rectangle returned for zero-sized cells.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new rect.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Axis-aligned rectangle positioned in container coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    /// Create a new region.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Place `content` centered inside this region.
    ///
    /// Content larger than the region overhangs evenly on both sides.
    pub fn center(&self, content: Rect) -> Self {
        Self {
            x: self.x + (self.width - content.width) / 2.0,
            y: self.y + (self.height - content.height) / 2.0,
            width: content.width,
            height: content.height,
        }
    }
}

/// Largest `aspect_ratio` rectangle that fits inside a `cell_width`×`cell_height` cell.
///
/// A cell wider than the content is height-bound (content is letterboxed
/// left and right); otherwise it is width-bound. An exact aspect match takes
/// the width-bound branch. A cell with a zero side yields [`Rect::ZERO`].
///
/// Fails with [`LayoutError::InvalidAspectRatio`] when `aspect_ratio <= 0`.
pub fn fit_rect(cell_width: f64, cell_height: f64, aspect_ratio: f64) -> Result<Rect, LayoutError> {
    check_aspect_ratio(aspect_ratio)?;
    Ok(fit_unchecked(cell_width, cell_height, aspect_ratio))
}

/// Whether content of `aspect_ratio` is height-bound in this cell.
pub(crate) fn is_horizontal(cell_width: f64, cell_height: f64, aspect_ratio: f64) -> bool {
    cell_width / cell_height > aspect_ratio
}

/// [`fit_rect`] for callers that already validated the aspect ratio.
pub(crate) fn fit_unchecked(cell_width: f64, cell_height: f64, aspect_ratio: f64) -> Rect {
    if cell_width == 0.0 || cell_height == 0.0 {
        return Rect::ZERO;
    }
    if is_horizontal(cell_width, cell_height, aspect_ratio) {
        Rect::new(cell_height * aspect_ratio, cell_height)
    } else {
        Rect::new(cell_width, cell_width / aspect_ratio)
    }
}
