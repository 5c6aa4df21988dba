//! Named predicate-plus-repair rules.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type Rule<T> = dyn Fn(&T) -> Result<(), T> + Send + Sync;

/// A single rule a value must satisfy.
///
/// A bound never fails outright: it either passes or hands back a replacement.
/// The replacement is not re-checked here and may violate other bounds, or even
/// this one; callers apply bound lists in order and later bounds see the
/// replacement from earlier ones.
pub struct Bound<T> {
    name: Cow<'static, str>,
    rule: Arc<Rule<T>>,
}

impl<T> Clone for Bound<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            rule: Arc::clone(&self.rule),
        }
    }
}

impl<T> fmt::Debug for Bound<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bound")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<T> Bound<T> {
    /// Check a value. `Err` carries the replacement.
    pub fn check(&self, value: &T) -> Result<(), T> {
        (self.rule)(value)
    }

    /// Name shown in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename this bound; the name only shows up in logs and debug output.
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }
}

impl<T: 'static> Bound<T> {
    /// Bound from a raw rule returning `Err(replacement)` on violation.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        rule: impl Fn(&T) -> Result<(), T> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            rule: Arc::new(rule),
        }
    }

    /// Accepts every value.
    pub fn always_pass() -> Self {
        Self::new("always_pass", |_| Ok(()))
    }

    /// Rejects every value, replacing it with `repair(value)`.
    pub fn always_fail(repair: impl Fn(&T) -> T + Send + Sync + 'static) -> Self {
        Self::new("always_fail", move |value| Err(repair(value)))
    }

    /// Passes iff `predicate` holds; otherwise the replacement is `repair(value)`.
    pub fn requiring(
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
        repair: impl Fn(&T) -> T + Send + Sync + 'static,
    ) -> Self {
        Self::new("requiring", move |value| {
            if predicate(value) {
                Ok(())
            } else {
                Err(repair(value))
            }
        })
    }

    /// Passes iff `predicate` does NOT hold.
    pub fn disallowing(
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
        repair: impl Fn(&T) -> T + Send + Sync + 'static,
    ) -> Self {
        Self::new("disallowing", move |value| {
            if predicate(value) {
                Err(repair(value))
            } else {
                Ok(())
            }
        })
    }

    /// Lift this bound onto optional values. `None` always passes.
    pub fn for_some(self) -> Bound<Option<T>> {
        let rule = self.rule;
        Bound {
            name: self.name,
            rule: Arc::new(move |value: &Option<T>| match value {
                Some(inner) => rule(inner).map_err(Some),
                None => Ok(()),
            }),
        }
    }
}

impl<T: PartialOrd + Clone + Send + Sync + 'static> Bound<T> {
    /// Values below `min` are replaced by `min`.
    pub fn at_least(min: T) -> Self {
        let boundary = min.clone();
        Self::requiring(move |v| *v >= min, move |_| boundary.clone()).named("at_least")
    }

    /// Values above `max` are replaced by `max`.
    pub fn at_most(max: T) -> Self {
        let boundary = max.clone();
        Self::requiring(move |v| *v <= max, move |_| boundary.clone()).named("at_most")
    }

    /// Values at or below `min` are replaced by `min`, which still fails this bound.
    pub fn greater_than(min: T) -> Self {
        let boundary = min.clone();
        Self::requiring(move |v| *v > min, move |_| boundary.clone()).named("greater_than")
    }

    /// Values at or above `max` are replaced by `max`, which still fails this bound.
    pub fn less_than(max: T) -> Self {
        let boundary = max.clone();
        Self::requiring(move |v| *v < max, move |_| boundary.clone()).named("less_than")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_pass_and_fail() {
        let pass = Bound::<i32>::always_pass();
        assert_eq!(pass.check(&5), Ok(()));

        let fail = Bound::always_fail(|v: &i32| v + 1);
        assert_eq!(fail.check(&5), Err(6));
    }

    #[test]
    fn test_clamping_bounds() {
        assert_eq!(Bound::at_least(10).check(&3), Err(10));
        assert_eq!(Bound::at_least(10).check(&10), Ok(()));
        assert_eq!(Bound::at_most(100).check(&150), Err(100));
        assert_eq!(Bound::at_most(100).check(&100), Ok(()));
        assert_eq!(Bound::greater_than(0).check(&0), Err(0));
        assert_eq!(Bound::less_than(0.0).check(&-0.5), Ok(()));
        assert_eq!(Bound::less_than(0.0).check(&0.0), Err(0.0));
    }

    #[test]
    fn test_requiring_and_disallowing() {
        let even = Bound::requiring(|v: &i32| v % 2 == 0, |v| v + 1);
        assert_eq!(even.check(&4), Ok(()));
        assert_eq!(even.check(&3), Err(4));

        let no_empty = Bound::disallowing(|s: &String| s.is_empty(), |_| "none".to_string());
        assert_eq!(no_empty.check(&"x".to_string()), Ok(()));
        assert_eq!(no_empty.check(&String::new()), Err("none".to_string()));
    }

    #[test]
    fn test_bound_is_reusable_across_values() {
        let bound = Bound::at_most(3);
        let results: Vec<_> = [1, 5, 3, 9].iter().map(|v| bound.check(v)).collect();
        assert_eq!(results, vec![Ok(()), Err(3), Ok(()), Err(3)]);
    }

    #[test]
    fn test_for_some() {
        let bound = Bound::at_least(1).for_some();
        assert_eq!(bound.check(&None), Ok(()));
        assert_eq!(bound.check(&Some(0)), Err(Some(1)));
        assert_eq!(bound.name(), "at_least");
    }

    #[test]
    fn test_named() {
        let bound = Bound::<u8>::always_pass().named("anything");
        assert_eq!(bound.name(), "anything");
        assert!(format!("{bound:?}").contains("anything"));
    }
}
