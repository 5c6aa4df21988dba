//! Container-level bounds.

use crate::domain::{Bound, Container};

/// Keeps only the first `max` elements.
pub fn max_len<T, C>(max: usize) -> Bound<C>
where
    T: Clone + 'static,
    C: Container<T>,
{
    Bound::requiring(
        move |c: &C| c.len() <= max,
        move |c| {
            let mut kept = C::default();
            for item in c.elements().take(max) {
                kept.add(item.clone());
            }
            kept
        },
    )
    .named("max_len")
}

/// An empty container is replaced by `fallback`.
pub fn not_empty<T, C>(fallback: C) -> Bound<C>
where
    T: 'static,
    C: Container<T> + Send + Sync,
{
    Bound::disallowing(|c: &C| c.is_empty(), move |_| fallback.clone()).named("not_empty")
}
