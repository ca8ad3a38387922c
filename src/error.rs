//! Error types for segmentation sessions.

use std::fmt;

/// Errors reported by [`Segmenter`](crate::Segmenter) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentationError {
    /// A merge or report operation was requested before any segmentation
    /// ran for the current session.
    MissingSegmentation,

    /// The input grid is empty or a dimension exceeds the supported 16-bit
    /// range.
    InvalidDimensions { width: usize, height: usize },

    /// A multi-way merge needs at least two selected pixels.
    SelectionTooSmall { got: usize },

    /// Every selected pixel already resolves to the same region, so there
    /// is nothing to merge.
    DegenerateSelection { distinct: usize },
}

impl fmt::Display for SegmentationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentationError::MissingSegmentation => {
                write!(f, "no segmentation available: segment an image first")
            }
            SegmentationError::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "unsupported image dimensions {width}x{height}: both must be in 1..=65535"
                )
            }
            SegmentationError::SelectionTooSmall { got } => {
                write!(f, "select at least two pixels to merge, got {got}")
            }
            SegmentationError::DegenerateSelection { distinct } => {
                write!(
                    f,
                    "selected pixels span {distinct} region(s); nothing to merge"
                )
            }
        }
    }
}

impl std::error::Error for SegmentationError {}
