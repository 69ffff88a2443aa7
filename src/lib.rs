use insertion::insertion_sort;
use std::{cmp::Ordering, mem::size_of};

mod insertion;
mod util;

pub(crate) trait Less<T>: Fn(&T, &T) -> bool {}
impl<T, F: Fn(&T, &T) -> bool> Less<T> for F {}

/// Sorts `v` in place in natural order. Stable, *O*(*n*^2) worst-case.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    inssort(v, T::lt);
    debug_assert!(util::is_sorted_by_less(v, &T::lt));
}

/// Sorts `v` in place with a comparator. Stable, *O*(*n*^2) worst-case.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    let is_less = |a: &T, b: &T| compare(a, b) == Ordering::Less;
    inssort(v, &is_less);
    debug_assert!(util::is_sorted_by_less(v, &is_less));
}

/// Sorts `v` in place by the keys `f` extracts. Stable, *O*(*n*^2) worst-case.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], f: F)
where
    F: Fn(&T) -> K,
    K: Ord,
{
    let is_less = |a: &T, b: &T| f(a).lt(&f(b));
    inssort(v, &is_less);
    debug_assert!(util::is_sorted_by_less(v, &is_less));
}

fn inssort<T, F>(v: &mut [T], is_less: F)
where
    F: Less<T>,
{
    // Sorting has no meaningful behavior on zero-sized types. Do nothing.
    if size_of::<T>() == 0 {
        return;
    }
    insertion_sort(v, &is_less);
}
