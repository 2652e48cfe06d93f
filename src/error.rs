//! Error types for the adapter cache, the specification combinator and the
//! demo configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::Attribute;
use crate::geometry::Line;

/// Failures while turning a line into points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Only horizontal and vertical segments can be rasterized.
    #[error("unsupported geometry: {line} is neither horizontal nor vertical")]
    UnsupportedGeometry { line: Line },

    #[error("rectangle at ({x}, {y}) of size {width}x{height} does not fit in i32 coordinates")]
    CoordinateOverflow {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

/// Failures raised while evaluating a specification against one item.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredicateError {
    #[error("item has no '{0}' attribute")]
    MissingAttribute(Attribute),

    /// Raised by a user-supplied predicate; the message is passed through as is.
    #[error("predicate failed: {0}")]
    Custom(String),
}

impl PredicateError {
    pub fn custom(message: impl Into<String>) -> Self {
        PredicateError::Custom(message.into())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid rectangle #{index}: width and height must be non-negative")]
    InvalidRectangle { index: usize },

    #[error("invalid rectangle #{index}: {source}")]
    RectangleOverflow {
        index: usize,
        #[source]
        source: GeometryError,
    },

    #[error("invalid rectangle #{index}: sides longer than {max} are not drawn")]
    RectangleTooLarge { index: usize, max: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_messages() {
        let err = GeometryError::UnsupportedGeometry {
            line: Line::new(Point::new(0, 0), Point::new(2, 3)),
        };
        assert_eq!(
            err.to_string(),
            "unsupported geometry: (0, 0) -> (2, 3) is neither horizontal nor vertical"
        );

        let err = PredicateError::MissingAttribute(Attribute::Size);
        assert_eq!(err.to_string(), "item has no 'size' attribute");

        assert_eq!(PredicateError::custom("boom").to_string(), "predicate failed: boom");
    }
}
