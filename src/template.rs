//! Grid-track descriptor for the presentation layer.
//!
//! A [`GridTemplate`] carries the column-track count and one track per row.
//! It renders to CSS grid text, but callers driving some other renderer can
//! use [`GridTemplate::resolve_heights`] and the layout's cell spans directly.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::grid::GridCell;

/// Height of one grid row.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowTrack {
    /// Exact height in container units.
    Fixed(f64),
    /// Share of the height left after fixed rows, like CSS `fr`.
    Flex(f64),
}

/// Column and row tracks for one layout.
///
/// Every row spans all `column_tracks`; a cell covers [`GridCell::span`] of them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridTemplate {
    /// Number of indivisible column tracks (LCM of the row column counts).
    pub column_tracks: u32,
    /// One entry per row, top to bottom.
    pub rows: Vec<RowTrack>,
}

impl GridTemplate {
    /// `grid-template-columns` value, e.g. `repeat(6, 1fr)`.
    pub fn columns_css(&self) -> String {
        format!("repeat({}, 1fr)", self.column_tracks)
    }

    /// `grid-template-rows` value, e.g. `540px 1fr 1fr`.
    pub fn rows_css(&self) -> String {
        let tracks: Vec<String> = self
            .rows
            .iter()
            .map(|t| match t {
                RowTrack::Fixed(px) => format!("{px}px"),
                RowTrack::Flex(fr) => format!("{fr}fr"),
            })
            .collect();
        tracks.join(" ")
    }

    /// `grid-template-areas` rows, one quoted string per grid row.
    ///
    /// Cell `i` is named `c<i>` and repeated over its span. `cells` must be
    /// the layout's cell list in row-major order.
    pub fn areas_css(&self, cells: &[GridCell]) -> Vec<String> {
        let mut rows = Vec::with_capacity(self.rows.len());
        let mut names: Vec<String> = Vec::new();
        let mut filled = 0u32;
        for (i, cell) in cells.iter().enumerate() {
            for _ in 0..cell.span {
                names.push(format!("c{i}"));
            }
            filled += cell.span;
            if filled >= self.column_tracks {
                rows.push(format!("\"{}\"", names.join(" ")));
                names.clear();
                filled = 0;
            }
        }
        if !names.is_empty() {
            rows.push(format!("\"{}\"", names.join(" ")));
        }
        rows
    }

    /// Concrete row heights for a container of `container_height`.
    ///
    /// Flex rows share whatever the fixed rows leave. With no flex rows,
    /// slack (or overflow) is spread over fixed rows in proportion to their
    /// size so the heights always sum to the container height.
    pub fn resolve_heights(&self, container_height: f64) -> Vec<f64> {
        let fixed: f64 = self
            .rows
            .iter()
            .map(|t| match t {
                RowTrack::Fixed(px) => *px,
                RowTrack::Flex(_) => 0.0,
            })
            .sum();
        let flex: f64 = self
            .rows
            .iter()
            .map(|t| match t {
                RowTrack::Fixed(_) => 0.0,
                RowTrack::Flex(fr) => *fr,
            })
            .sum();

        if flex > 0.0 {
            let per_fr = (container_height - fixed).max(0.0) / flex;
            return self
                .rows
                .iter()
                .map(|t| match t {
                    RowTrack::Fixed(px) => *px,
                    RowTrack::Flex(fr) => fr * per_fr,
                })
                .collect();
        }

        let scale = if fixed > 0.0 {
            container_height / fixed
        } else {
            0.0
        };
        self.rows
            .iter()
            .map(|t| match t {
                RowTrack::Fixed(px) => px * scale,
                RowTrack::Flex(_) => 0.0,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn cell(span: u32) -> GridCell {
        GridCell {
            span,
            is_horizontal: false,
        }
    }

    #[test]
    fn css_for_fixed_first_row() {
        let t = GridTemplate {
            column_tracks: 6,
            rows: vec![RowTrack::Fixed(540.0), RowTrack::Flex(1.0), RowTrack::Flex(1.0)],
        };
        assert_eq!(t.columns_css(), "repeat(6, 1fr)");
        assert_eq!(t.rows_css(), "540px 1fr 1fr");
    }

    #[test]
    fn css_fractional_height() {
        let t = GridTemplate {
            column_tracks: 1,
            rows: vec![RowTrack::Fixed(337.5), RowTrack::Flex(1.0)],
        };
        assert_eq!(t.rows_css(), "337.5px 1fr");
    }

    #[test]
    fn areas_repeat_names_over_span() {
        // 1 wide cell on top of 2 narrow ones.
        let t = GridTemplate {
            column_tracks: 2,
            rows: vec![RowTrack::Fixed(540.0), RowTrack::Flex(1.0)],
        };
        let areas = t.areas_css(&[cell(2), cell(1), cell(1)]);
        assert_eq!(areas, vec!["\"c0 c0\"", "\"c1 c2\""]);
    }

    #[test]
    fn flex_rows_share_remainder() {
        let t = GridTemplate {
            column_tracks: 2,
            rows: vec![RowTrack::Fixed(400.0), RowTrack::Flex(1.0), RowTrack::Flex(1.0)],
        };
        assert_eq!(t.resolve_heights(1000.0), vec![400.0, 300.0, 300.0]);
    }

    #[test]
    fn all_flex_splits_evenly() {
        let t = GridTemplate {
            column_tracks: 1,
            rows: vec![RowTrack::Flex(1.0); 4],
        };
        assert_eq!(t.resolve_heights(1080.0), vec![270.0; 4]);
    }

    #[test]
    fn fixed_only_absorbs_slack_proportionally() {
        let t = GridTemplate {
            column_tracks: 1,
            rows: vec![RowTrack::Fixed(100.0), RowTrack::Fixed(300.0)],
        };
        assert_eq!(t.resolve_heights(800.0), vec![200.0, 600.0]);
    }
}
