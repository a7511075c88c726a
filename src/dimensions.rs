//! Candidate grid partitions for a given item count.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use num_traits::Float;

use crate::error::{LayoutError, check_aspect_ratio};

/// A `columns`×`rows` partition of the container.
///
/// Produced by [`enumerate_dimensions`], which guarantees
/// `rows == ceil(count / columns)`: the grid has room for every item and
/// never a fully empty row. Formats as the layout id `"<columns>x<rows>"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub columns: u32,
    pub rows: u32,
}

impl GridDimensions {
    /// Create new dimensions.
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Dimensions with `columns` columns and just enough rows for `count` items.
    ///
    /// `columns` must be non-zero.
    pub const fn for_count(columns: u32, count: u32) -> Self {
        Self {
            columns,
            rows: count.div_ceil(columns),
        }
    }

    /// Total cell slots, including slots the first row gives up.
    pub const fn cell_count(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }

    /// Whether `count` items fill these dimensions with no fully empty row.
    pub const fn holds(&self, count: u32) -> bool {
        self.columns >= 1
            && self.rows >= 1
            && self.cell_count() >= count as u64
            && (self.columns as u64) * (self.rows as u64 - 1) < count as u64
    }
}

impl fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

impl FromStr for GridDimensions {
    type Err = LayoutError;

    /// Parse a layout id such as `"3x2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (c, r) = s.split_once('x').ok_or(LayoutError::MalformedId)?;
        let columns: u32 = c.parse().map_err(|_| LayoutError::MalformedId)?;
        let rows: u32 = r.parse().map_err(|_| LayoutError::MalformedId)?;
        if columns == 0 || rows == 0 {
            return Err(LayoutError::MalformedId);
        }
        Ok(Self { columns, rows })
    }
}

/// Every partition of `count` items, columns ascending from 1 to `count`.
///
/// Returns exactly `count` candidates; `count == 0` returns none.
pub fn enumerate_dimensions(count: u32) -> Vec<GridDimensions> {
    (1..=count)
        .map(|columns| GridDimensions::for_count(columns, count))
        .collect()
}

/// Closed-form guess at a good partition, without building any layout.
///
/// Picks the column count that would make square-ish tiles of the content
/// aspect ratio cover a `container_width`×`container_height` container:
/// `ceil(sqrt(count · (W / H) / aspect_ratio))`, clamped to `1..=count`.
/// Useful as a first paint before [`rank_layouts`](crate::rank_layouts) runs.
pub fn estimate_dimensions(
    container_width: f64,
    container_height: f64,
    count: u32,
    aspect_ratio: f64,
) -> Result<GridDimensions, LayoutError> {
    check_aspect_ratio(aspect_ratio)?;
    if count == 0 {
        return Err(LayoutError::ZeroContentCount);
    }
    let guess = if container_height > 0.0 {
        Float::ceil(Float::sqrt(
            count as f64 * container_width / container_height / aspect_ratio,
        ))
    } else {
        1.0
    };
    // NaN and negative guesses land on 1 here.
    let columns = if guess >= count as f64 {
        count
    } else if guess >= 1.0 {
        guess as u32
    } else {
        1
    };
    Ok(GridDimensions::for_count(columns, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn dims(columns: u32, rows: u32) -> GridDimensions {
        GridDimensions::new(columns, rows)
    }

    #[test]
    fn count_one() {
        assert_eq!(enumerate_dimensions(1), vec![dims(1, 1)]);
    }

    #[test]
    fn count_two() {
        assert_eq!(enumerate_dimensions(2), vec![dims(1, 2), dims(2, 1)]);
    }

    #[test]
    fn count_three() {
        assert_eq!(
            enumerate_dimensions(3),
            vec![dims(1, 3), dims(2, 2), dims(3, 1)]
        );
    }

    #[test]
    fn count_four() {
        assert_eq!(
            enumerate_dimensions(4),
            vec![dims(1, 4), dims(2, 2), dims(3, 2), dims(4, 1)]
        );
    }

    #[test]
    fn count_five() {
        assert_eq!(
            enumerate_dimensions(5),
            vec![dims(1, 5), dims(2, 3), dims(3, 2), dims(4, 2), dims(5, 1)]
        );
    }

    #[test]
    fn count_zero_is_empty() {
        assert!(enumerate_dimensions(0).is_empty());
    }

    #[test]
    fn every_candidate_holds_its_count() {
        for n in 1..=64 {
            let all = enumerate_dimensions(n);
            assert_eq!(all.len(), n as usize);
            for d in all {
                assert!(d.holds(n), "{d} for {n}");
                assert!(d.cell_count() - (n as u64) < d.columns as u64, "{d} for {n}");
            }
        }
    }

    #[test]
    fn holds_rejects_empty_rows_and_overflow() {
        assert!(!dims(2, 3).holds(4));
        assert!(!dims(2, 1).holds(3));
        assert!(!dims(0, 3).holds(3));
        assert!(dims(3, 2).holds(4));
    }

    #[test]
    fn id_display_and_parse() {
        assert_eq!(dims(3, 2).to_string(), "3x2");
        assert_eq!("12x1".parse::<GridDimensions>(), Ok(dims(12, 1)));
    }

    #[test]
    fn id_parse_rejects_garbage() {
        for bad in ["", "3", "x2", "3x", "0x2", "3x0", "3x2x1", "-1x2", "3 x 2"] {
            assert_eq!(
                bad.parse::<GridDimensions>(),
                Err(LayoutError::MalformedId),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn estimate_wide_container_prefers_columns() {
        // 1920×1080 with 4 tiles of 16:9 → sqrt(4) = 2 columns.
        let d = estimate_dimensions(1920.0, 1080.0, 4, 16.0 / 9.0).unwrap();
        assert_eq!(d, dims(2, 2));
    }

    #[test]
    fn estimate_clamps_to_count() {
        // Very wide strip: the guess would exceed the item count.
        let d = estimate_dimensions(800.0, 10.0, 4, 1.0).unwrap();
        assert_eq!(d, dims(4, 1));
    }

    #[test]
    fn estimate_tall_container_stacks() {
        let d = estimate_dimensions(100.0, 800.0, 4, 2.0).unwrap();
        assert_eq!(d, dims(1, 4));
    }

    #[test]
    fn estimate_zero_height() {
        assert_eq!(estimate_dimensions(100.0, 0.0, 3, 1.0).unwrap(), dims(1, 3));
    }

    #[test]
    fn estimate_validates_inputs() {
        assert_eq!(
            estimate_dimensions(100.0, 100.0, 3, 0.0),
            Err(LayoutError::InvalidAspectRatio)
        );
        assert_eq!(
            estimate_dimensions(100.0, 100.0, 0, 1.0),
            Err(LayoutError::ZeroContentCount)
        );
    }
}
