use std::cmp::Ordering;

use crate::orst::Sorter;

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Usage
///```
/// use larder_inventory::orst::{MergeSorter, Sorter};
///
/// let mut items = vec![1, 5, 4, 2, 3];
/// MergeSorter.sort(&mut items);
/// assert_eq!(items, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Merge sort is a divide-and-conquer algorithm invented by John von Neumann in 1945. The list
/// is halved until every piece holds at most one element, and the pieces are then merged back
/// together pairwise, always in order.
///
/// When the heads of both runs compare equal the merge takes from the left run. Elements that
/// compare equal therefore keep the order they came in with: the sort is stable.
///
/// ```
/// use larder_inventory::orst::{MergeSorter, Sorter};
///
/// let mut items = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// MergeSorter.sort_by(&mut items, |a, b| a.0.cmp(&b.0));
/// assert_eq!(items, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
#[derive(Default, Debug, Clone, Copy)]
pub struct MergeSorter;

fn merge_sort<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, compare);
    let right = merge_sort(right, compare);

    merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
            _ => break,
        };

        if take_left {
            merged.extend(left.next());
        } else {
            merged.extend(right.next());
        }
    }

    // At most one of these still has anything in it.
    merged.extend(left);
    merged.extend(right);
    merged
}

impl<T> Sorter<T> for MergeSorter {
    #[inline]
    fn sort_by<F>(&self, items: &mut Vec<T>, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let unsorted = std::mem::take(items);
        *items = merge_sort(unsorted, &mut compare);
    }
}
