//! Layout computation errors.

/// Layout computation error.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Content aspect ratio was zero, negative, or NaN.
    #[error("aspectRatio must be greater than 0")]
    InvalidAspectRatio,
    /// Grid dimensions cannot hold the content without a fully empty row.
    #[error("grid {columns}x{rows} is not a valid partition of {content_count} items")]
    InvalidDimensions {
        columns: u32,
        rows: u32,
        content_count: u32,
    },
    /// Container width or height is negative or not finite.
    #[error("container dimensions must be finite and non-negative")]
    InvalidContainer,
    /// A layout was requested for zero items.
    #[error("content count must be at least 1")]
    ZeroContentCount,
    /// A layout id was not of the form `<columns>x<rows>`.
    #[error("layout id must look like `<columns>x<rows>`")]
    MalformedId,
}

/// Reject aspect ratios that cannot describe a rectangle.
pub(crate) fn check_aspect_ratio(aspect_ratio: f64) -> Result<(), LayoutError> {
    // NaN fails the comparison as well.
    if aspect_ratio > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidAspectRatio)
    }
}

pub(crate) fn check_container(width: f64, height: f64) -> Result<(), LayoutError> {
    let ok = |v: f64| v.is_finite() && v >= 0.0;
    if ok(width) && ok(height) {
        Ok(())
    } else {
        Err(LayoutError::InvalidContainer)
    }
}
