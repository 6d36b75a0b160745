use std::cmp::Ordering;

use crate::orst::Sorter;

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use larder_inventory::orst::{BubbleSorter, Sorter};
///
/// let mut items = vec![1, 5, 4, 2, 3];
/// BubbleSorter.sort(&mut items);
/// assert_eq!(items, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort,
/// is a simple sorting algorithm that repeatedly steps
/// through the list, compares adjacent elements and swaps
/// them if they are in the wrong order. The pass through
/// the list is repeated until the list is sorted. The
/// algorithm, which is a comparison sort, is named for the
/// way smaller or larger elements "bubble" to the top of the list.
///
/// After pass `i` the largest `i + 1` elements are in their final place, so each pass stops one
/// element earlier than the last. A pass that makes no swaps ends the sort, which makes an already
/// sorted input O(n).
///
/// Only pairs that compare `Greater` are swapped. Equal neighbours never trade places.
#[derive(Default, Debug, Clone, Copy)]
pub struct BubbleSorter;

impl<T> Sorter<T> for BubbleSorter {
    #[inline]
    fn sort_by<F>(&self, items: &mut Vec<T>, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let n = items.len();

        for pass in 0..n.saturating_sub(1) {
            let mut swapped = false;
            for i in 1..(n - pass) {
                if compare(&items[i - 1], &items[i]) == Ordering::Greater {
                    items.swap(i - 1, i);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array() {
        let mut items = vec![1, 5, 4, 2, 3];
        BubbleSorter.sort(&mut items);
        assert_eq!(items, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut items = (1..10).collect::<Vec<_>>();
        BubbleSorter.sort(&mut items);
        assert_eq!(items, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut items = (1..1000).rev().collect::<Vec<_>>();
        BubbleSorter.sort(&mut items);
        assert_eq!(items, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn sorted_input_takes_one_pass() {
        let mut comparisons = 0;
        let mut items = (0..100).collect::<Vec<_>>();
        BubbleSorter.sort_by(&mut items, |a, b| {
            comparisons += 1;
            a.cmp(b)
        });
        assert_eq!(comparisons, 99);
    }

    #[test]
    fn custom_comparator() {
        let mut items = vec!["pear", "Fig", "apple"];
        BubbleSorter.sort_by(&mut items, |a, b| b.len().cmp(&a.len()));
        assert_eq!(items, ["apple", "pear", "Fig"]);
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        BubbleSorter.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        BubbleSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        BubbleSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        BubbleSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        BubbleSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }
}
