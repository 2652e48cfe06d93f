//! Items that specifications are evaluated against.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub colour: Colour,
    pub size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, colour: Colour, size: Size) -> Self {
        Product {
            name: name.into(),
            colour,
            size,
        }
    }
}

/// Names of the attributes an equality specification can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Name,
    Colour,
    Size,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Attribute::Name => "name",
            Attribute::Colour => "colour",
            Attribute::Size => "size",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeValue {
    Name(String),
    Colour(Colour),
    Size(Size),
}

impl AttributeValue {
    pub fn attribute(&self) -> Attribute {
        match self {
            AttributeValue::Name(_) => Attribute::Name,
            AttributeValue::Colour(_) => Attribute::Colour,
            AttributeValue::Size(_) => Attribute::Size,
        }
    }
}

/// Attribute lookup for filterable items.
///
/// `None` means the item does not carry that attribute at all.
pub trait Attributed {
    fn attribute(&self, attribute: Attribute) -> Option<AttributeValue>;
}

impl Attributed for Product {
    fn attribute(&self, attribute: Attribute) -> Option<AttributeValue> {
        Some(match attribute {
            Attribute::Name => AttributeValue::Name(self.name.clone()),
            Attribute::Colour => AttributeValue::Colour(self.colour),
            Attribute::Size => AttributeValue::Size(self.size),
        })
    }
}

impl<T: Attributed + ?Sized> Attributed for &T {
    fn attribute(&self, attribute: Attribute) -> Option<AttributeValue> {
        (**self).attribute(attribute)
    }
}
