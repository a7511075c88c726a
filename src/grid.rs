//! Exact geometry for one candidate partition.
//!
//! Rows with different column counts share one set of column tracks: the
//! track count is the least common multiple of the first-row and other-row
//! column counts, and each cell spans an integer number of tracks.
//!
//! ```text
//!     5 items, 3x2 grid (one leftover slot)
//!
//!     ┌─────────┬─────────┐   first row: 2 cells × span 3
//!     │   c0    │   c1    │   tallest the content can use
//!     ├──────┬──┴───┬─────┤
//!     │  c2  │  c3  │ c4  │   other rows: 3 cells × span 2
//!     └──────┴──────┴─────┘   share the remaining height
//! ```
//!
//! # Example
//!
//! ```
//! use zengrid::{build_layout, GridDimensions};
//!
//! let layout = build_layout(1920.0, 1080.0, GridDimensions::new(2, 2), 3, 16.0 / 9.0).unwrap();
//! assert_eq!(layout.id, "2x2");
//! assert_eq!(layout.cell_list[0].span, 2);
//! assert_eq!(layout.cell_list[1].span, 1);
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::dimensions::GridDimensions;
use crate::error::{LayoutError, check_aspect_ratio, check_container};
use crate::fit::{Rect, Region, fit_unchecked, is_horizontal};
use crate::template::{GridTemplate, RowTrack};

/// One occupied grid slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    /// Width in column tracks.
    pub span: u32,
    /// Cell is wider than the content (content is height-bound).
    pub is_horizontal: bool,
}

/// Content coverage of one layout.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentArea {
    /// Sum of fitted content area over all occupied cells.
    pub total: f64,
    /// Fitted content area of an other-rows cell (the smallest cell).
    pub min: f64,
    /// Fitted content area of a first-row cell (the largest cell).
    pub max: f64,
}

/// Shared geometry of every cell in a row.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowMetrics {
    pub column_count: u32,
    pub cell_width: f64,
    pub height: f64,
    /// Largest content rect that fits one cell.
    pub content: Rect,
    pub is_horizontal: bool,
}

impl RowMetrics {
    fn new(column_count: u32, cell_width: f64, height: f64, aspect_ratio: f64) -> Self {
        Self {
            column_count,
            cell_width,
            height,
            content: fit_unchecked(cell_width, height, aspect_ratio),
            is_horizontal: is_horizontal(cell_width, height, aspect_ratio),
        }
    }
}

/// How row heights are assigned.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowSizing {
    /// The first row takes as much height as its wider cells can use,
    /// leaving the other rows at least the height they need.
    #[default]
    Adaptive,
    /// Every row is `container_height / rows` tall.
    Uniform,
}

/// Complete geometry of one candidate partition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    /// `"<columns>x<rows>"`.
    pub id: String,
    pub dimensions: GridDimensions,
    /// Container size the layout was computed for.
    pub container: Rect,
    /// One cell per item, row-major.
    pub cell_list: Vec<GridCell>,
    pub content_area: ContentArea,
    pub first_row: RowMetrics,
    /// Template for rows 2.., equal to `first_row` for single-row layouts.
    pub other_rows: RowMetrics,
    pub template: GridTemplate,
}

/// Where one item lands in the container.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Item index (row-major).
    pub index: usize,
    pub row: u32,
    pub column: u32,
    /// The whole cell.
    pub cell: Region,
    /// Fitted content, centered in the cell.
    pub content: Region,
}

impl GridLayout {
    /// Number of occupied cells.
    pub fn content_count(&self) -> usize {
        self.cell_list.len()
    }

    /// Placement of item `index`, or `None` past the end.
    pub fn placement(&self, index: usize) -> Option<Placement> {
        if index >= self.cell_list.len() {
            return None;
        }
        let first = &self.first_row;
        let (row, column, metrics) = if index < first.column_count as usize {
            (0, index as u32, first)
        } else {
            let rest = index - first.column_count as usize;
            let per_row = self.other_rows.column_count as usize;
            (
                1 + (rest / per_row) as u32,
                (rest % per_row) as u32,
                &self.other_rows,
            )
        };
        let y = if row == 0 {
            0.0
        } else {
            first.height + (row - 1) as f64 * self.other_rows.height
        };
        let cell = Region::new(
            column as f64 * metrics.cell_width,
            y,
            metrics.cell_width,
            metrics.height,
        );
        Some(Placement {
            index,
            row,
            column,
            cell,
            content: cell.center(metrics.content),
        })
    }

    /// Placements of every item in row-major order.
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        (0..self.cell_list.len()).filter_map(move |i| self.placement(i))
    }
}

/// Build the layout of `content_count` items in a `dimensions` grid.
///
/// Uses [`RowSizing::Adaptive`]. See [`build_layout_with`].
pub fn build_layout(
    container_width: f64,
    container_height: f64,
    dimensions: GridDimensions,
    content_count: u32,
    content_aspect_ratio: f64,
) -> Result<GridLayout, LayoutError> {
    build_layout_with(
        container_width,
        container_height,
        dimensions,
        content_count,
        content_aspect_ratio,
        RowSizing::Adaptive,
    )
}

/// Build the layout of `content_count` items in a `dimensions` grid.
///
/// Leftover slots (`columns * rows - content_count`) are taken out of the
/// first row, which therefore has fewer, wider cells. `dimensions` must
/// satisfy [`GridDimensions::holds`] for `content_count`, as every
/// [`enumerate_dimensions`](crate::enumerate_dimensions) candidate does.
pub fn build_layout_with(
    container_width: f64,
    container_height: f64,
    dimensions: GridDimensions,
    content_count: u32,
    content_aspect_ratio: f64,
    sizing: RowSizing,
) -> Result<GridLayout, LayoutError> {
    check_aspect_ratio(content_aspect_ratio)?;
    check_container(container_width, container_height)?;
    build_checked(
        container_width,
        container_height,
        dimensions,
        content_count,
        content_aspect_ratio,
        sizing,
    )
}

/// [`build_layout_with`] minus the aspect ratio and container checks.
pub(crate) fn build_checked(
    container_width: f64,
    container_height: f64,
    dimensions: GridDimensions,
    content_count: u32,
    aspect_ratio: f64,
    sizing: RowSizing,
) -> Result<GridLayout, LayoutError> {
    if content_count == 0 {
        return Err(LayoutError::ZeroContentCount);
    }
    let GridDimensions { columns, rows } = dimensions;
    let invalid = LayoutError::InvalidDimensions {
        columns,
        rows,
        content_count,
    };
    if !dimensions.holds(content_count) {
        return Err(invalid);
    }

    // holds() bounds leftover below `columns`.
    let leftover = (dimensions.cell_count() - content_count as u64) as u32;
    let first_columns = columns - leftover;
    let other_columns = columns;
    let column_tracks = lcm(first_columns, other_columns).ok_or(invalid)?;

    let cell_height = container_height / rows as f64;
    let first_width = container_width / first_columns as f64;
    let first_max_height = first_width / aspect_ratio;
    let other_width = container_width / other_columns as f64;
    let other_min_height = cell_height.min(other_width / aspect_ratio);

    let other_row_count = rows - 1;
    let (first_height, other_height) = match sizing {
        RowSizing::Uniform => (cell_height, cell_height),
        RowSizing::Adaptive if other_row_count == 0 => (container_height, container_height),
        RowSizing::Adaptive => {
            let first = (container_height - other_row_count as f64 * other_min_height)
                .min(first_max_height);
            (first, (container_height - first) / other_row_count as f64)
        }
    };

    let first_row = RowMetrics::new(first_columns, first_width, first_height, aspect_ratio);
    let other_rows = if other_row_count == 0 {
        first_row
    } else {
        RowMetrics::new(other_columns, other_width, other_height, aspect_ratio)
    };
    let first_area = first_row.content.area();
    let other_area = other_rows.content.area();

    let mut cell_list = Vec::with_capacity(content_count as usize);
    let mut total = 0.0;
    for index in 0..content_count {
        let (metrics, area) = if index < first_columns {
            (&first_row, first_area)
        } else {
            (&other_rows, other_area)
        };
        cell_list.push(GridCell {
            span: column_tracks / metrics.column_count,
            is_horizontal: metrics.is_horizontal,
        });
        total += area;
    }

    let template = GridTemplate {
        column_tracks,
        rows: (0..rows)
            .map(|row| {
                if row == 0 && other_row_count > 0 && sizing == RowSizing::Adaptive {
                    RowTrack::Fixed(first_height)
                } else {
                    RowTrack::Flex(1.0)
                }
            })
            .collect(),
    };

    let layout = GridLayout {
        id: dimensions.to_string(),
        dimensions,
        container: Rect::new(container_width, container_height),
        cell_list,
        content_area: ContentArea {
            total,
            min: other_area,
            max: first_area,
        },
        first_row,
        other_rows,
        template,
    };
    tracing::trace!(
        id = %layout.id,
        total = layout.content_area.total,
        min = layout.content_area.min,
        max = layout.content_area.max,
        "built grid layout"
    );
    Ok(layout)
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Least common multiple, or `None` if it does not fit in `u32`.
fn lcm(a: u32, b: u32) -> Option<u32> {
    let l = a as u64 / gcd(a, b) as u64 * b as u64;
    u32::try_from(l).ok()
}
