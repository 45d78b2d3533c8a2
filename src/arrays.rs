//! Slice utilities: extrema, totals, rotation, splitting.
//!
//! Every function is total over the empty slice — extrema come back as
//! None and rotations of nothing do nothing.

/// Largest element, scanning left to right.
pub fn largest<T: Ord>(values: &[T]) -> Option<&T> {
    let mut best = values.first()?;
    for v in &values[1..] {
        if v > best {
            best = v;
        }
    }
    Some(best)
}

/// Smallest element.
pub fn smallest<T: Ord>(values: &[T]) -> Option<&T> {
    let mut best = values.first()?;
    for v in &values[1..] {
        if v < best {
            best = v;
        }
    }
    Some(best)
}

/// Smallest element strictly greater than the minimum, in one pass.
/// None unless the slice holds at least two distinct values.
pub fn second_smallest<T: Ord>(values: &[T]) -> Option<&T> {
    let mut min = values.first()?;
    let mut second: Option<&T> = None;
    for v in &values[1..] {
        if v < min {
            second = Some(min);
            min = v;
        } else if v > min && second.is_none_or(|s| v < s) {
            second = Some(v);
        }
    }
    second
}

pub fn sum(values: &[i64]) -> i64 {
    let mut total = 0;
    for v in values {
        total += v;
    }
    total
}

/// The odd elements, in their original order.
pub fn odds(values: &[i64]) -> Vec<i64> {
    values.iter().copied().filter(|v| v % 2 != 0).collect()
}

/// Rotate right by `k` places; `k` is reduced modulo the length, so any
/// amount is valid.
pub fn rotate_right<T>(values: &mut [T], k: usize) {
    if values.is_empty() {
        return;
    }
    let n = values.len();
    values.rotate_right(k % n);
}

/// Rotate left by `k` places.
pub fn rotate_left<T>(values: &mut [T], k: usize) {
    if values.is_empty() {
        return;
    }
    let n = values.len();
    values.rotate_left(k % n);
}

/// First half and second half; an odd length leaves the extra element in
/// the second half.
pub fn split_halves<T>(values: &[T]) -> (&[T], &[T]) {
    values.split_at(values.len() / 2)
}
