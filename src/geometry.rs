//! Points, lines and rectangles on an integer grid.
//!
//! All three are plain values: equality and hashing are structural, which is
//! what lets a `Line` act as a cache key.

use std::fmt;

use crate::error::GeometryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

/// A segment between two points.
///
/// Endpoint order is part of the value: `A -> B` and `B -> A` compare unequal
/// and hash differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub const fn new(start: Point, end: Point) -> Self {
        Line { start, end }
    }

    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// An axis-aligned rectangle made of four sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle {
    sides: [Line; 4],
}

impl Rectangle {
    /// Sides are stored top, left, right, bottom.
    ///
    /// Fails if the far corner does not fit in `i32`.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, GeometryError> {
        let overflow = GeometryError::CoordinateOverflow { x, y, width, height };
        let right = x.checked_add(width).ok_or_else(|| overflow.clone())?;
        let bottom = y.checked_add(height).ok_or(overflow)?;

        let top_left = Point::new(x, y);
        let top_right = Point::new(right, y);
        let bottom_left = Point::new(x, bottom);
        let bottom_right = Point::new(right, bottom);

        Ok(Rectangle {
            sides: [
                Line::new(top_left, top_right),
                Line::new(top_left, bottom_left),
                Line::new(top_right, bottom_right),
                Line::new(bottom_left, bottom_right),
            ],
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.sides.iter()
    }
}

impl<'a> IntoIterator for &'a Rectangle {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.sides.iter()
    }
}
