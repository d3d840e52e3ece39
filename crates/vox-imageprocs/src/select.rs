/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Order statistics of unordered windows
//!
//! [`select`] finds the k-th smallest value without sorting, in expected
//! linear time, and [`median`] builds the median on top of it. Both the
//! 2D and 3D median filters reduce their windows through [`median`].

use core::cmp::Ordering;

/// Lomuto partition of `values[start..=end]` around `values[end]`
///
/// Returns the final position of the pivot, everything before it
/// is `<=` the pivot and everything after it is `>` the pivot.
fn partition<T: Copy + PartialOrd>(values: &mut [T], start: usize, end: usize) -> usize {
    let pivot = values[end];
    let mut store = start;

    for j in start..end {
        if values[j] <= pivot {
            values.swap(store, j);
            store += 1;
        }
    }
    values.swap(store, end);
    store
}

/// Return the value that would sit at position `k` (0 based) if
/// `values` were sorted
///
/// `values` is reordered in the process, but keeps the same elements.
///
/// Returns `None` if `k` is out of bounds, which includes every `k` for
/// an empty slice.
///
/// # Example
/// ```
/// use vox_imageprocs::select::select;
/// let mut values = [9, 1, 8, 2, 7, 3];
/// assert_eq!(select(&mut values, 0), Some(1));
/// assert_eq!(select(&mut values, 4), Some(8));
/// assert_eq!(select(&mut values, 6), None);
/// ```
pub fn select<T: Copy + PartialOrd>(values: &mut [T], k: usize) -> Option<T> {
    if k >= values.len() {
        return None;
    }
    let mut start = 0;
    let mut end = values.len() - 1;

    // k always stays within [start, end]
    loop {
        if start == end {
            return Some(values[start]);
        }
        let pivot = partition(values, start, end);

        match pivot.cmp(&k) {
            Ordering::Equal => return Some(values[pivot]),
            Ordering::Less => start = pivot + 1,
            Ordering::Greater => end = pivot - 1
        }
    }
}

/// Median of a window of samples
///
/// Odd lengths return the middle order statistic, even lengths the
/// truncated average of the two middle ones.
///
/// Returns `None` for an empty window.
///
/// # Example
/// ```
/// use vox_imageprocs::select::median;
/// assert_eq!(median(&mut [5, 1, 3]), Some(3));
/// assert_eq!(median(&mut [10, 1, 3, 20]), Some(6));
/// assert_eq!(median(&mut []), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn median(values: &mut [u8]) -> Option<u8> {
    let len = values.len();

    if len == 0 {
        return None;
    }
    if len % 2 == 0 {
        let lower = select(values, len / 2 - 1)?;
        let upper = select(values, len / 2)?;

        Some(((u16::from(lower) + u16::from(upper)) / 2) as u8)
    } else {
        select(values, len / 2)
    }
}
