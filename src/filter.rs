//! Lazy filtering of item sequences by a `Specification`.

use std::borrow::Borrow;
use std::iter::FusedIterator;

use crate::catalog::Attributed;
use crate::error::PredicateError;
use crate::spec::Specification;

/// Pull-based iterator over the items that satisfy a specification.
///
/// Nothing is evaluated until `next` is called. Items come out in input order
/// and duplicates are kept. If the specification fails on an item, that item's
/// position yields `Err` and iteration may continue with the next one.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Filtered<'s, I, T> {
    items: I,
    spec: &'s Specification<T>,
}

/// Filters `items` by `spec`.
///
/// Accepts owned items or references, e.g. `filter(&products, &spec)`.
pub fn filter<I, T>(items: I, spec: &Specification<T>) -> Filtered<'_, I::IntoIter, T>
where
    I: IntoIterator,
    I::Item: Borrow<T>,
    T: Attributed,
{
    Filtered {
        items: items.into_iter(),
        spec,
    }
}

impl<I, T> Iterator for Filtered<'_, I, T>
where
    I: Iterator,
    I::Item: Borrow<T>,
    T: Attributed,
{
    type Item = Result<I::Item, PredicateError>;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.items.by_ref() {
            match self.spec.is_satisfied(item.borrow()) {
                Ok(true) => return Some(Ok(item)),
                Ok(false) => {}
                Err(err) => return Some(Err(err)),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.items.size_hint().1)
    }
}

impl<I, T> FusedIterator for Filtered<'_, I, T>
where
    I: FusedIterator,
    I::Item: Borrow<T>,
    T: Attributed,
{
}

/// `.satisfying(&spec)` on any iterator.
pub trait FilterExt: Iterator + Sized {
    fn satisfying<T>(self, spec: &Specification<T>) -> Filtered<'_, Self, T>
    where
        Self::Item: Borrow<T>,
        T: Attributed,
    {
        filter(self, spec)
    }
}

impl<I: Iterator> FilterExt for I {}
