//! Pattern Kit
//!
//! Two reusable mechanisms from the design-pattern exercises:
//!
//! Pattern 1: Adapter with a memoizing factory
//! - `geometry`: points, lines, rectangles
//! - `adapter`:  line -> grid points
//! - `cache`:    one shared adapter per distinct line
//! - `canvas`:   a point-only drawing surface
//!
//! Pattern 2: Specification combinator (open-closed filtering)
//! - `catalog`:  products and their attributes
//! - `spec`:     equality / all-of / custom predicates
//! - `filter`:   lazy, order-preserving filtering

pub mod adapter;
pub mod cache;
pub mod canvas;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod spec;

pub use adapter::LinePoints;
pub use cache::{AdapterCache, CacheStats};
pub use canvas::Canvas;
pub use catalog::{Attribute, AttributeValue, Attributed, Colour, Product, Size};
pub use config::DemoConfig;
pub use error::{ConfigError, GeometryError, PredicateError};
pub use filter::{filter, FilterExt, Filtered};
pub use geometry::{Line, Point, Rectangle};
pub use spec::Specification;
