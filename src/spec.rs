//! Composable item specifications.
//!
//! A `Specification` is a closed set of predicate shapes: attribute equality,
//! conjunction, and a caller-supplied closure. New filtering criteria are
//! built by combining these, without touching the filter itself.
//!
//! ```
//! use pattern_kit::catalog::{Colour, Product, Size};
//! use pattern_kit::spec::Specification;
//!
//! let large_green = Specification::size(Size::Large).and(Specification::colour(Colour::Green));
//! let tree = Product::new("Tree", Colour::Green, Size::Large);
//! assert_eq!(large_green.is_satisfied(&tree), Ok(true));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::catalog::{Attribute, AttributeValue, Attributed, Colour, Size};
use crate::error::PredicateError;

/// Shared, fallible predicate closure.
pub type Predicate<T> = Arc<dyn Fn(&T) -> Result<bool, PredicateError> + Send + Sync>;

pub enum Specification<T> {
    /// The item's `attribute` equals `value`.
    Equals {
        attribute: Attribute,
        value: AttributeValue,
    },
    /// Every sub-specification holds. Empty means always true.
    AllOf(Vec<Specification<T>>),
    Custom(Predicate<T>),
}

impl<T> Specification<T> {
    pub fn equals(value: AttributeValue) -> Self {
        Specification::Equals {
            attribute: value.attribute(),
            value,
        }
    }

    pub fn colour(colour: Colour) -> Self {
        Self::equals(AttributeValue::Colour(colour))
    }

    pub fn size(size: Size) -> Self {
        Self::equals(AttributeValue::Size(size))
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self::equals(AttributeValue::Name(name.into()))
    }

    pub fn all_of(specs: impl IntoIterator<Item = Specification<T>>) -> Self {
        Specification::AllOf(specs.into_iter().collect())
    }

    /// Wraps an infallible closure.
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Specification::Custom(Arc::new(move |item| Ok(predicate(item))))
    }

    /// Wraps a closure whose errors are handed back to the caller unchanged.
    pub fn try_custom<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> Result<bool, PredicateError> + Send + Sync + 'static,
    {
        Specification::Custom(Arc::new(predicate))
    }

    /// Conjunction with `other`, flattening into an existing `AllOf`.
    pub fn and(self, other: Specification<T>) -> Self {
        match self {
            Specification::AllOf(mut specs) => {
                specs.push(other);
                Specification::AllOf(specs)
            }
            spec => Specification::AllOf(vec![spec, other]),
        }
    }
}

impl<T: Attributed> Specification<T> {
    /// Evaluates this specification against one item.
    ///
    /// `AllOf` stops at the first sub-specification that is false or fails.
    pub fn is_satisfied(&self, item: &T) -> Result<bool, PredicateError> {
        match self {
            Specification::Equals { attribute, value } => item
                .attribute(*attribute)
                .map(|actual| actual == *value)
                .ok_or(PredicateError::MissingAttribute(*attribute)),
            Specification::AllOf(specs) => {
                for spec in specs {
                    if !spec.is_satisfied(item)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Specification::Custom(predicate) => predicate(item),
        }
    }
}

impl<T> Clone for Specification<T> {
    fn clone(&self) -> Self {
        match self {
            Specification::Equals { attribute, value } => Specification::Equals {
                attribute: *attribute,
                value: value.clone(),
            },
            Specification::AllOf(specs) => Specification::AllOf(specs.clone()),
            Specification::Custom(predicate) => Specification::Custom(Arc::clone(predicate)),
        }
    }
}

impl<T> fmt::Debug for Specification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Specification::Equals { attribute, value } => f
                .debug_struct("Equals")
                .field("attribute", attribute)
                .field("value", value)
                .finish(),
            Specification::AllOf(specs) => f.debug_tuple("AllOf").field(specs).finish(),
            Specification::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// An item where size is optional, to exercise missing attributes.
    struct Listing {
        name: &'static str,
        size: Option<Size>,
    }

    impl Attributed for Listing {
        fn attribute(&self, attribute: Attribute) -> Option<AttributeValue> {
            match attribute {
                Attribute::Name => Some(AttributeValue::Name(self.name.to_string())),
                Attribute::Size => self.size.map(AttributeValue::Size),
                Attribute::Colour => None,
            }
        }
    }

    fn tree() -> Product {
        Product::new("Tree", Colour::Green, Size::Large)
    }

    #[test]
    fn test_equals() {
        assert_eq!(Specification::colour(Colour::Green).is_satisfied(&tree()), Ok(true));
        assert_eq!(Specification::colour(Colour::Blue).is_satisfied(&tree()), Ok(false));
        assert_eq!(Specification::size(Size::Large).is_satisfied(&tree()), Ok(true));
        assert_eq!(Specification::name("Tree").is_satisfied(&tree()), Ok(true));
        assert_eq!(Specification::name("House").is_satisfied(&tree()), Ok(false));
    }

    #[test]
    fn test_all_of() {
        let spec = Specification::all_of([
            Specification::size(Size::Large),
            Specification::colour(Colour::Green),
        ]);
        assert_eq!(spec.is_satisfied(&tree()), Ok(true));

        let house = Product::new("House", Colour::Blue, Size::Large);
        assert_eq!(spec.is_satisfied(&house), Ok(false));
    }

    #[test]
    fn test_empty_all_of_is_vacuously_true() {
        let spec: Specification<Product> = Specification::all_of([]);
        assert_eq!(spec.is_satisfied(&tree()), Ok(true));
    }

    #[test]
    fn test_and_flattens() {
        let spec: Specification<Product> = Specification::size(Size::Large)
            .and(Specification::colour(Colour::Green))
            .and(Specification::name("Tree"));
        match &spec {
            Specification::AllOf(specs) => assert_eq!(specs.len(), 3),
            other => panic!("expected AllOf, got {:?}", other),
        }
        assert_eq!(spec.is_satisfied(&tree()), Ok(true));
    }

    #[test]
    fn test_all_of_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let spec = Specification::colour(Colour::Red).and(Specification::custom(move |_: &Product| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        }));

        assert_eq!(spec.is_satisfied(&tree()), Ok(false));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_custom() {
        let green = Specification::custom(|p: &Product| p.colour == Colour::Green);
        assert_eq!(green.is_satisfied(&tree()), Ok(true));

        let failing = Specification::try_custom(|_: &Product| Err(PredicateError::custom("no stock data")));
        assert_eq!(failing.is_satisfied(&tree()), Err(PredicateError::custom("no stock data")));
    }

    #[test]
    fn test_missing_attribute() {
        let unsized_item = Listing { name: "Gift card", size: None };
        let sized_item = Listing { name: "Shirt", size: Some(Size::Medium) };
        let spec = Specification::size(Size::Medium);

        assert_eq!(spec.is_satisfied(&sized_item), Ok(true));
        assert_eq!(
            spec.is_satisfied(&unsized_item),
            Err(PredicateError::MissingAttribute(Attribute::Size))
        );
        assert_eq!(Specification::name("Gift card").is_satisfied(&unsized_item), Ok(true));
    }

    #[test]
    fn test_clone_and_debug() {
        let spec: Specification<Product> = Specification::colour(Colour::Green)
            .and(Specification::custom(|p: &Product| p.name.len() > 3));
        let copy = spec.clone();
        assert_eq!(copy.is_satisfied(&tree()), Ok(true));
        assert_eq!(
            format!("{:?}", copy),
            "AllOf([Equals { attribute: Colour, value: Colour(Green) }, Custom(..)])"
        );
    }
}
