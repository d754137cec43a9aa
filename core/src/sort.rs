//! Hybrid insertion/quick sort driven by a caller-supplied comparator.
//!
//! The biased shuffle is this sort run with a comparator that answers at
//! random, so the sequence of comparisons is part of the output contract:
//! every call order, argument order and swap below must stay as is or
//! seeded text changes.
//!
//! Small inputs (<= 16) use insertion sort with fixed networks for 2-5
//! elements. Larger inputs pick a median-of-3 pivot (median-of-5 from 1024
//! elements), partition, then recurse into the smaller side first.

use core::cmp::Ordering;

const INSERTION_THRESHOLD: usize = 16;

#[inline]
fn greater<T, F>(v: &[T], a: usize, b: usize, cmp: &mut F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    cmp(&v[a], &v[b]) == Ordering::Greater
}

fn sort2<T, F>(v: &mut [T], a: usize, b: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if greater(v, a, b, cmp) {
        v.swap(a, b);
    }
}

fn sort3<T, F>(v: &mut [T], a: usize, b: usize, c: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if !greater(v, a, b, cmp) {
        if !greater(v, b, c, cmp) {
            return;
        }
        v.swap(b, c);
        if greater(v, a, b, cmp) {
            v.swap(a, b);
        }
        return;
    }
    if !greater(v, c, b, cmp) {
        v.swap(a, c);
        return;
    }
    v.swap(a, b);
    if greater(v, b, c, cmp) {
        v.swap(b, c);
    }
}

fn sort4<T, F>(v: &mut [T], a: usize, b: usize, c: usize, d: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort3(v, a, b, c, cmp);
    if greater(v, c, d, cmp) {
        v.swap(c, d);
        if greater(v, b, c, cmp) {
            v.swap(b, c);
            if greater(v, a, b, cmp) {
                v.swap(a, b);
            }
        }
    }
}

fn sort5<T, F>(v: &mut [T], idx: [usize; 5], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let [a, b, c, d, e] = idx;
    sort4(v, a, b, c, d, cmp);
    if greater(v, d, e, cmp) {
        v.swap(d, e);
        if greater(v, c, d, cmp) {
            v.swap(c, d);
            if greater(v, b, c, cmp) {
                v.swap(b, c);
                if greater(v, a, b, cmp) {
                    v.swap(a, b);
                }
            }
        }
    }
}

/// Move `v[from]` down to `v[to]`, shifting the elements in between up.
fn rotate_into<T>(v: &mut [T], from: usize, to: usize) {
    let mut k = from;
    while k > to {
        v.swap(k, k - 1);
        k -= 1;
    }
}

fn insertion_sort<T, F>(v: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = v.len();
    match n {
        0 | 1 => {}
        2 => sort2(v, 0, 1, cmp),
        3 => sort3(v, 0, 1, 2, cmp),
        4 => sort4(v, 0, 1, 2, 3, cmp),
        5 => sort5(v, [0, 1, 2, 3, 4], cmp),
        _ => {
            // The first six elements: plain linear insertion.
            for i in 1..6 {
                let mut j = i - 1;
                if !greater(v, j, i, cmp) {
                    continue;
                }
                while j != 0 {
                    j -= 1;
                    if !greater(v, j, i, cmp) {
                        j += 1;
                        break;
                    }
                }
                rotate_into(v, i, j);
            }

            // The rest: scan backwards two slots at a time.
            for i in 6..n {
                let mut j = i - 1;
                if !greater(v, j, i, cmp) {
                    continue;
                }
                loop {
                    j -= 2;
                    if !greater(v, j, i, cmp) {
                        j += 1;
                        if !greater(v, j, i, cmp) {
                            j += 1;
                        }
                        break;
                    }
                    if j == 0 {
                        break;
                    }
                    if j == 1 {
                        j -= 1;
                        if greater(v, i, j, cmp) {
                            j += 1;
                        }
                        break;
                    }
                }
                rotate_into(v, i, j);
            }
        }
    }
}

/// Sort `v` in place with `cmp`.
///
/// Unstable. For a consistent comparator the result is sorted ascending;
/// for an arbitrary one the result is some permutation that depends only on
/// the sequence of answers given.
pub fn hybrid_sort_by<T, F>(v: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = v.len();
    if n <= INSERTION_THRESHOLD {
        insertion_sort(v, cmp);
        return;
    }

    let end = n;
    let offset = n >> 1;
    let pivot_src = offset;

    if n >> 10 != 0 {
        let delta = offset >> 1;
        sort5(v, [0, delta, pivot_src, pivot_src + delta, end - 1], cmp);
    } else {
        sort3(v, 0, pivot_src, end - 1, cmp);
    }
    v.swap(1, pivot_src);

    let pivot = 1;
    let mut i = pivot + 1;
    let mut j = end - 1;

    'partition: loop {
        while greater(v, pivot, i, cmp) {
            i += 1;
            if i == j {
                break 'partition;
            }
        }
        j -= 1;
        if j == i {
            break 'partition;
        }
        while greater(v, j, pivot, cmp) {
            j -= 1;
            if j == i {
                break 'partition;
            }
        }
        v.swap(i, j);
        i += 1;
        if i == j {
            break 'partition;
        }
    }

    v.swap(pivot, i - 1);

    let (left, right) = v.split_at_mut(i);
    let left = &mut left[..i - 1];
    if left.len() < right.len() {
        hybrid_sort_by(left, cmp);
        hybrid_sort_by(right, cmp);
    } else {
        hybrid_sort_by(right, cmp);
        hybrid_sort_by(left, cmp);
    }
}
