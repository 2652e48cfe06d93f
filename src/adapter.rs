//! Line-to-points adapter.
//!
//! A `Canvas` only knows how to draw single points, so a `Line` has to be
//! adapted into the discrete grid points it covers before it can be drawn.

use tracing::warn;

use crate::error::GeometryError;
use crate::geometry::{Line, Point};

/// The grid points covered by one axis-aligned line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePoints {
    line: Line,
    points: Vec<Point>,
}

impl LinePoints {
    /// Rasterizes `line` without any caching.
    ///
    /// Points run from the smaller to the larger coordinate regardless of the
    /// direction the line was given in. A zero-length line counts as
    /// horizontal and yields its single point. Diagonal lines are rejected.
    pub fn rasterize(line: Line) -> Result<Self, GeometryError> {
        let left = line.start.x.min(line.end.x);
        let right = line.start.x.max(line.end.x);
        let top = line.start.y.min(line.end.y);
        let bottom = line.start.y.max(line.end.y);

        let points = if top == bottom {
            (left..=right).map(|x| Point::new(x, top)).collect()
        } else if left == right {
            (top..=bottom).map(|y| Point::new(left, y)).collect()
        } else {
            warn!(%line, "refusing to rasterize diagonal line");
            return Err(GeometryError::UnsupportedGeometry { line });
        };

        Ok(LinePoints { line, points })
    }

    pub fn line(&self) -> Line {
        self.line
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a LinePoints {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
