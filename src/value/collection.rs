//! Collection values: a container of elements of one kind.

use std::fmt;
use std::marker::PhantomData;

use super::kind::ValueKind;
use crate::domain::{
    Accumulator, Bound, Container, ConvertError, Outcome, ParseError, RawNode, Unreadable,
};

/// Kind of a configuration value holding a container `C` of `K` elements.
///
/// Element bounds are the element kind's own bounds; container bounds are
/// attached with [`ValueKind::with_bounds`] on the collection itself.
pub struct Collection<K, C> {
    element: K,
    _container: PhantomData<fn() -> C>,
}

impl<K, C> Collection<K, C>
where
    K: ValueKind,
    C: Container<K::Value>,
{
    pub fn new(element: K) -> Self {
        Self {
            element,
            _container: PhantomData,
        }
    }

    pub fn element(&self) -> &K {
        &self.element
    }

    pub fn element_bounds(&self) -> Vec<Bound<K::Value>> {
        self.element.bounds()
    }

    /// Run one stored element through the element pipeline.
    pub fn convert_one(&self, raw: &RawNode) -> Outcome<K::Value> {
        let pipeline = || -> Result<Outcome<K::Value>, Unreadable> {
            let converted = Accumulator::new(raw).convert(|node| self.element.convert(node))?;
            Ok(self.element.validate(converted).finish())
        };
        pipeline().into()
    }

    /// Fold stored elements into a container, noting whether anything was lost or replaced.
    fn fold_elements<'a>(&self, items: impl IntoIterator<Item = &'a RawNode>) -> (C, bool) {
        let mut container = C::default();
        let mut problem = false;
        for item in items {
            match self.convert_one(item) {
                Outcome::Unchanged(value) => {
                    if !container.add(value) {
                        problem = true;
                    }
                }
                Outcome::Replaced(value) => {
                    container.add(value);
                    problem = true;
                }
                Outcome::Unreadable => problem = true,
            }
        }
        (container, problem)
    }
}

impl<K: Clone, C> Clone for Collection<K, C> {
    fn clone(&self) -> Self {
        Self {
            element: self.element.clone(),
            _container: PhantomData,
        }
    }
}

impl<K: fmt::Debug, C> fmt::Debug for Collection<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("element", &self.element)
            .finish()
    }
}

impl<K, C> ValueKind for Collection<K, C>
where
    K: ValueKind,
    C: Container<K::Value>,
{
    type Value = C;

    /// Elements may be separated by commas, whitespace, or any run of both.
    /// Parsing is all-or-nothing.
    fn parse(&self, input: &str) -> Result<C, ParseError> {
        let mut container = C::default();
        let tokens = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty());
        for (index, token) in tokens.enumerate() {
            let value = self
                .element
                .parse(token)
                .map_err(|source| ParseError::Element {
                    index,
                    source: Box::new(source),
                })?;
            container.add(value);
        }
        Ok(container)
    }

    /// A single node is read as a one-element list. Unreadable elements are
    /// dropped rather than failing the whole collection, so this never
    /// returns `Unreadable`, even when nothing survives.
    fn convert(&self, raw: &RawNode) -> Result<C, ConvertError<C>> {
        let (container, problem) = match raw {
            RawNode::List(items) => self.fold_elements(items),
            single => self.fold_elements([single]),
        };
        if problem {
            Err(ConvertError::OutOfBounds(container))
        } else {
            Ok(container)
        }
    }

    /// Re-checks every element against the element bounds, then the container
    /// against the collection's own bounds.
    fn validate(&self, acc: Accumulator<C>) -> Accumulator<C> {
        acc.repair(|container| {
            let mut validated = C::default();
            let mut problem = false;
            for element in container.into_elements() {
                let checked = self.element.validate(Accumulator::new(element));
                problem |= checked.is_repaired();
                if !validated.add(checked.into_value()) {
                    problem = true;
                }
            }
            if problem {
                Err(validated)
            } else {
                Ok(validated)
            }
        })
        .validate(&self.bounds())
    }

    fn to_file_node(&self, container: &C) -> RawNode {
        RawNode::List(
            container
                .elements()
                .map(|element| self.element.to_file_node(element))
                .collect(),
        )
    }

    /// Empty formats as `[]`; otherwise elements joined by ", " without brackets.
    fn format(&self, container: &C) -> String {
        if container.is_empty() {
            return "[]".to_string();
        }
        container
            .elements()
            .map(|element| self.element.format(element))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
