use std::cmp::Ordering;

use crate::orst::Sorter;

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use larder_inventory::orst::{QuickSorter, Sorter};
///
/// let mut items = vec![1, 5, 4, 2, 3];
/// QuickSorter.sort(&mut items);
/// assert_eq!(items, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Quicksort is an in-place sorting algorithm. Developed
/// by British computer scientist Tony Hoare in 1959 and published
/// in 1961 it is still a commonly used algorithm for
/// sorting.
///
/// # Algorithm
///
/// This is the Lomuto variant. The last element of every subrange is the pivot. A single forward
/// scan moves every element that compares less than or equal to the pivot to the front, then the
/// pivot is swapped in right behind them and both sides are sorted the same way.
///
/// There is no random or median pivot here. Input that is already sorted, or sorted in reverse,
/// therefore costs O(n²) comparisons. Only the smaller side of a partition is sorted recursively
/// and the larger one is handled by the loop, so the stack stays O(log n) deep even then.
///
/// Swapping across the scan means equal elements can change their relative order: the sort is
/// not stable.
#[derive(Default, Debug, Clone, Copy)]
pub struct QuickSorter;

fn quicksort<T, F>(mut slice: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while slice.len() > 1 {
        let pivot = partition(slice, compare);

        let (left, right) = std::mem::take(&mut slice).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, compare);
            slice = right;
        } else {
            quicksort(right, compare);
            slice = left;
        }
    }
}

// Returns the final index of the pivot.
fn partition<T, F>(slice: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let high = slice.len() - 1;
    let mut boundary = 0;

    for j in 0..high {
        if compare(&slice[j], &slice[high]) != Ordering::Greater {
            slice.swap(boundary, j);
            boundary += 1;
        }
    }

    slice.swap(boundary, high);
    boundary
}

impl<T> Sorter<T> for QuickSorter {
    #[inline]
    fn sort_by<F>(&self, items: &mut Vec<T>, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        quicksort(items, &mut compare)
    }
}
