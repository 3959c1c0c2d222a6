//! Sorted view with range and neighbour queries.
//!
//! [`OrderedView`] wraps a [`BTreeSet`], so every lookup below locates its
//! starting point in logarithmic time. Range queries hand back borrowing
//! iterators rather than copies; the borrow checker keeps the view unchanged
//! for as long as one of them is alive.

use std::collections::BTreeSet;
use std::collections::btree_set::{self, Range};
use std::ops::{Bound, RangeBounds};

/// An ordered set of values supporting head, tail, and sub-range queries.
///
/// # Example
///
/// ```
/// use room_catalog::OrderedView;
///
/// let view: OrderedView<u32> = [500, 1500, 2500, 1000, 3000, 2000].into_iter().collect();
///
/// assert_eq!(view.lower(&2000), Some(&1500));
/// assert_eq!(view.higher(&2000), Some(&2500));
/// assert_eq!(view.between(&1000, &2500).copied().collect::<Vec<_>>(), [1500, 2000]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedView<T> {
    items: BTreeSet<T>,
}

impl<T: Ord> OrderedView<T> {
    /// Creates an empty view.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: BTreeSet::new(),
        }
    }

    /// Adds a value, returning `false` if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        self.items.insert(value)
    }

    /// Whether `value` is present.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the view holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ascending traversal.
    pub fn iter(&self) -> btree_set::Iter<'_, T> {
        self.items.iter()
    }

    /// Descending traversal, the exact reverse of [`Self::iter`].
    pub fn reversed(&self) -> std::iter::Rev<btree_set::Iter<'_, T>> {
        self.items.iter().rev()
    }

    /// Smallest value.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Largest value.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Values strictly less than `bound`.
    pub fn less_than(&self, bound: &T) -> Range<'_, T> {
        self.items.range::<T, _>((Bound::Unbounded, Bound::Excluded(bound)))
    }

    /// Values strictly greater than `bound`.
    pub fn greater_than(&self, bound: &T) -> Range<'_, T> {
        self.items.range::<T, _>((Bound::Excluded(bound), Bound::Unbounded))
    }

    /// Values strictly between `low` and `high`.
    ///
    /// Yields nothing when `low >= high`.
    pub fn between<'a>(
        &'a self,
        low: &'a T,
        high: &'a T,
    ) -> impl DoubleEndedIterator<Item = &'a T> {
        self.range((Bound::Excluded(low), Bound::Excluded(high)))
    }

    /// Values within arbitrary bounds, such as `&a..&b` or `(Excluded(&a), Included(&b))`.
    ///
    /// Inverted or empty bounds yield nothing instead of panicking.
    pub fn range<R>(&self, bounds: R) -> impl DoubleEndedIterator<Item = &T>
    where
        R: RangeBounds<T>,
    {
        let valid = bounds_are_ordered(bounds.start_bound(), bounds.end_bound());
        valid
            .then(|| self.items.range::<T, R>(bounds))
            .into_iter()
            .flatten()
    }

    /// Greatest value strictly less than `value`.
    #[must_use]
    pub fn lower(&self, value: &T) -> Option<&T> {
        self.less_than(value).next_back()
    }

    /// Least value strictly greater than `value`.
    #[must_use]
    pub fn higher(&self, value: &T) -> Option<&T> {
        self.greater_than(value).next()
    }

    /// Greatest value less than or equal to `value`.
    #[must_use]
    pub fn floor(&self, value: &T) -> Option<&T> {
        self.items
            .range::<T, _>((Bound::Unbounded, Bound::Included(value)))
            .next_back()
    }

    /// Least value greater than or equal to `value`.
    #[must_use]
    pub fn ceiling(&self, value: &T) -> Option<&T> {
        self.items
            .range::<T, _>((Bound::Included(value), Bound::Unbounded))
            .next()
    }
}

/// `BTreeSet::range` panics on inverted bounds and on equal bounds that are
/// both excluded.
fn bounds_are_ordered<T: Ord>(start: Bound<&T>, end: Bound<&T>) -> bool {
    match (start, end) {
        (Bound::Unbounded, _) | (_, Bound::Unbounded) => true,
        (Bound::Included(low), Bound::Included(high)) => low <= high,
        (Bound::Included(low) | Bound::Excluded(low), Bound::Excluded(high))
        | (Bound::Excluded(low), Bound::Included(high)) => low < high,
    }
}

impl<T: Ord> Default for OrderedView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for OrderedView<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Ord> Extend<T> for OrderedView<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a OrderedView<T> {
    type Item = &'a T;
    type IntoIter = btree_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    //! Covers neighbour lookups, range queries, and traversal order.

    use std::ops::Bound::{Excluded, Included};

    use rstest::{fixture, rstest};

    use super::*;
    use crate::fixtures::sample_rates;

    #[fixture]
    fn rates() -> OrderedView<u32> {
        sample_rates().into_iter().collect()
    }

    fn collect<'a>(values: impl Iterator<Item = &'a u32>) -> Vec<u32> {
        values.copied().collect()
    }

    #[rstest]
    fn iterates_in_ascending_order(rates: OrderedView<u32>) {
        assert_eq!(collect(rates.iter()), [500, 1000, 1500, 2000, 2500, 3000]);
    }

    #[rstest]
    #[case(2000, Some(1500), Some(2500))]
    #[case(1750, Some(1500), Some(2000))]
    #[case(500, None, Some(1000))]
    #[case(3000, Some(2500), None)]
    fn neighbours(
        rates: OrderedView<u32>,
        #[case] value: u32,
        #[case] lower: Option<u32>,
        #[case] higher: Option<u32>,
    ) {
        assert_eq!(rates.lower(&value).copied(), lower);
        assert_eq!(rates.higher(&value).copied(), higher);
    }

    #[rstest]
    #[case(2000, Some(2000), Some(2000))]
    #[case(1750, Some(1500), Some(2000))]
    #[case(100, None, Some(500))]
    fn inclusive_neighbours(
        rates: OrderedView<u32>,
        #[case] value: u32,
        #[case] floor: Option<u32>,
        #[case] ceiling: Option<u32>,
    ) {
        assert_eq!(rates.floor(&value).copied(), floor);
        assert_eq!(rates.ceiling(&value).copied(), ceiling);
    }

    #[rstest]
    fn head_and_tail_are_exclusive(rates: OrderedView<u32>) {
        assert_eq!(collect(rates.less_than(&2000)), [500, 1000, 1500]);
        assert_eq!(collect(rates.greater_than(&2000)), [2500, 3000]);
    }

    #[rstest]
    fn between_excludes_both_bounds(rates: OrderedView<u32>) {
        assert_eq!(collect(rates.between(&1000, &2500)), [1500, 2000]);
    }

    #[rstest]
    fn range_accepts_half_open_and_closed_bounds(rates: OrderedView<u32>) {
        assert_eq!(collect(rates.range(1000..2500)), [1000, 1500, 2000]);
        assert_eq!(collect(rates.range(1000..=2500)), [1000, 1500, 2000, 2500]);
        assert_eq!(
            collect(rates.range((Excluded(1000), Included(2500)))),
            [1500, 2000, 2500]
        );
    }

    #[rstest]
    #[case::inverted(2500, 1000)]
    #[case::equal(2000, 2000)]
    fn degenerate_between_is_empty(
        rates: OrderedView<u32>,
        #[case] low: u32,
        #[case] high: u32,
    ) {
        assert_eq!(rates.between(&low, &high).count(), 0);
    }

    #[rstest]
    fn degenerate_range_is_empty(rates: OrderedView<u32>) {
        let inverted = std::ops::Range {
            start: 2500,
            end: 1000,
        };
        assert_eq!(rates.range(inverted).count(), 0);
        assert_eq!(rates.range((Excluded(2000), Included(2000))).count(), 0);
        assert_eq!(rates.range((Excluded(2000), Excluded(2000))).count(), 0);
        assert_eq!(collect(rates.range((Included(2000), Included(2000)))), [2000]);
    }

    #[rstest]
    fn reversed_is_exact_reverse(rates: OrderedView<u32>) {
        let mut forward = collect(rates.iter());
        forward.reverse();
        assert_eq!(collect(rates.reversed()), forward);
    }

    #[rstest]
    fn insert_ignores_present_values(mut rates: OrderedView<u32>) {
        assert!(!rates.insert(2000));
        assert!(rates.insert(1250));
        assert_eq!(rates.len(), 7);
        assert_eq!(rates.lower(&1500), Some(&1250));
        assert_eq!(rates.first(), Some(&500));
        assert_eq!(rates.last(), Some(&3000));
    }

    #[test]
    fn empty_view_has_no_neighbours() {
        let view: OrderedView<u32> = OrderedView::default();
        assert!(view.is_empty());
        assert_eq!(view.lower(&1), None);
        assert_eq!(view.higher(&1), None);
        assert_eq!(view.reversed().count(), 0);
    }
}
