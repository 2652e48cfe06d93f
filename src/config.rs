//! TOML configuration for the demo binary.
//!
//! ```toml
//! log_level = "debug"
//!
//! [[products]]
//! name = "Apple"
//! colour = "green"
//! size = "small"
//!
//! [[rectangles]]
//! x = 1
//! y = 6
//! width = 3
//! height = 2
//!
//! [[queries]]
//! label = "large green"
//! colour = "green"
//! size = "large"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{Colour, Product, Size};
use crate::error::{ConfigError, GeometryError};
use crate::geometry::Rectangle;
use crate::spec::Specification;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectangleConfig {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Longest side the demo will rasterize; every side becomes one `Vec<Point>`.
pub const MAX_RECTANGLE_SIDE: i32 = 100_000;

impl RectangleConfig {
    pub fn to_rectangle(&self) -> Result<Rectangle, GeometryError> {
        Rectangle::new(self.x, self.y, self.width, self.height)
    }
}

/// A conjunction of optional attribute matches. Every field left out is
/// unconstrained, so an empty query matches every product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    pub label: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub colour: Option<Colour>,
    #[serde(default)]
    pub size: Option<Size>,
}

impl QueryConfig {
    pub fn to_spec(&self) -> Specification<Product> {
        let name = self.name.clone().map(Specification::name);
        let colour = self.colour.map(Specification::colour);
        let size = self.size.map(Specification::size);
        Specification::all_of(name.into_iter().chain(colour).chain(size))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub rectangles: Vec<RectangleConfig>,
    #[serde(default)]
    pub queries: Vec<QueryConfig>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            log_level: default_log_level(),
            products: vec![
                Product::new("Apple", Colour::Green, Size::Small),
                Product::new("Tree", Colour::Green, Size::Large),
                Product::new("House", Colour::Blue, Size::Large),
            ],
            rectangles: vec![RectangleConfig { x: 1, y: 6, width: 3, height: 2 }],
            queries: vec![
                QueryConfig {
                    label: "large".to_string(),
                    size: Some(Size::Large),
                    ..Default::default()
                },
                QueryConfig {
                    label: "green".to_string(),
                    colour: Some(Colour::Green),
                    ..Default::default()
                },
                QueryConfig {
                    label: "large green".to_string(),
                    colour: Some(Colour::Green),
                    size: Some(Size::Large),
                    ..Default::default()
                },
            ],
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (index, rect) in self.rectangles.iter().enumerate() {
            if rect.width < 0 || rect.height < 0 {
                return Err(ConfigError::InvalidRectangle { index });
            }
            if rect.width > MAX_RECTANGLE_SIDE || rect.height > MAX_RECTANGLE_SIDE {
                return Err(ConfigError::RectangleTooLarge {
                    index,
                    max: MAX_RECTANGLE_SIDE,
                });
            }
            rect.to_rectangle()
                .map_err(|source| ConfigError::RectangleOverflow { index, source })?;
        }
        Ok(())
    }
}
