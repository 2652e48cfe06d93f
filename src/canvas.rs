//! A drawing surface that only understands points.

use indexmap::IndexSet;
use tracing::debug;

use crate::adapter::LinePoints;
use crate::cache::AdapterCache;
use crate::error::GeometryError;
use crate::geometry::{Point, Rectangle};

/// Records drawn points in first-draw order, ignoring repeats.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    points: IndexSet<Point>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw(&mut self, point: Point) {
        self.points.insert(point);
    }

    pub fn draw_line(&mut self, line: &LinePoints) {
        self.points.extend(line.iter().copied());
    }

    /// Draws every side of `rect`, going through `cache` for the adapters.
    pub fn draw_rectangle(
        &mut self,
        rect: &Rectangle,
        cache: &AdapterCache,
    ) -> Result<(), GeometryError> {
        for side in rect {
            let adapter = cache.get_or_create(*side)?;
            self.draw_line(&adapter);
        }
        debug!(points = self.points.len(), "drew rectangle");
        Ok(())
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }

    /// Points rendered as `(x, y)`, in draw order.
    pub fn points_str(&self) -> impl Iterator<Item = String> + '_ {
        self.points.iter().map(ToString::to_string)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
