//! Containers a collection value can be built into.

use std::collections::BTreeSet;
use std::fmt;

use super::types::IntoRawNode;

/// A container whose own rules decide whether an element is accepted.
pub trait Container<T>: Clone + PartialEq + fmt::Debug + Default + IntoRawNode + 'static {
    /// Add an element. Returns `false` if the container refused it.
    fn add(&mut self, item: T) -> bool;

    fn elements<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a>;

    fn into_elements(self) -> Vec<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Container<T> for Vec<T>
where
    T: Clone + PartialEq + fmt::Debug + IntoRawNode + 'static,
{
    fn add(&mut self, item: T) -> bool {
        self.push(item);
        true
    }

    fn elements<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        Box::new(self.as_slice().iter())
    }

    fn into_elements(self) -> Vec<T> {
        self
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Container<T> for BTreeSet<T>
where
    T: Ord + Clone + fmt::Debug + IntoRawNode + 'static,
{
    fn add(&mut self, item: T) -> bool {
        BTreeSet::insert(self, item)
    }

    fn elements<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        Box::new(BTreeSet::iter(self))
    }

    fn into_elements(self) -> Vec<T> {
        self.into_iter().collect()
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}
