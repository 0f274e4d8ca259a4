// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A specialized version of `for_each` defined by inclusive ranges of integers, where the
//! callback decides whether to keep going.
//!
//! | Function                     | Visits                        |
//! |------------------------------|-------------------------------|
//! | [`range_each()`]             | `from, from + 1, ..., to`     |
//! | [`range_each_to()`]          | `0, 1, ..., to`               |
//! | [`range_each_reverse()`]     | `from, from - 1, ..., to`     |
//! | [`range_each_reverse_from()`]| `from, from - 1, ..., 0`      |
//!
//! The callback can return anything that converts [`Into`] a [`Continuation`]. Returning
//! `()` or `true` keeps going, and only `false` (or [`Continuation::Stop`]) halts the
//! walk. An empty range (eg: `from > to` going forward) never calls the callback.

use tracing::trace;

use crate::Continuation;

/// How a range walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEachOutcome {
    /// Every index in the range was visited (or the range was empty).
    Completed,
    /// The callback returned [`Continuation::Stop`] for this index.
    StoppedAt(i64),
}

/// Calls `iteratee` for each index from `range_from` up to `range_to` (inclusive).
///
/// ```rust
/// use r3bl_number::{RangeEachOutcome, range_each};
///
/// let mut acc = vec![];
/// let outcome = range_each(0, 10, |index| {
///     acc.push(index);
///     index != 3
/// });
/// assert_eq!(acc, vec![0, 1, 2, 3]);
/// assert_eq!(outcome, RangeEachOutcome::StoppedAt(3));
/// ```
pub fn range_each<R: Into<Continuation>>(
    range_from: i64,
    range_to: i64,
    iteratee: impl FnMut(i64) -> R,
) -> RangeEachOutcome {
    drive(range_from..=range_to, iteratee)
}

/// Calls `iteratee` for each index from `0` up to `range_to` (inclusive).
///
/// ```rust
/// use r3bl_number::range_each_to;
///
/// let mut acc = vec![];
/// range_each_to(5, |index| acc.push(index));
/// assert_eq!(acc, vec![0, 1, 2, 3, 4, 5]);
/// ```
pub fn range_each_to<R: Into<Continuation>>(
    range_to: i64,
    iteratee: impl FnMut(i64) -> R,
) -> RangeEachOutcome {
    range_each(0, range_to, iteratee)
}

/// Calls `iteratee` for each index from `range_from` down to `range_to` (inclusive).
///
/// ```rust
/// use r3bl_number::range_each_reverse;
///
/// let mut acc = vec![];
/// range_each_reverse(3, -1, |index| acc.push(index));
/// assert_eq!(acc, vec![3, 2, 1, 0, -1]);
/// ```
pub fn range_each_reverse<R: Into<Continuation>>(
    range_from: i64,
    range_to: i64,
    iteratee: impl FnMut(i64) -> R,
) -> RangeEachOutcome {
    drive((range_to..=range_from).rev(), iteratee)
}

/// Calls `iteratee` for each index from `range_from` down to `0` (inclusive).
pub fn range_each_reverse_from<R: Into<Continuation>>(
    range_from: i64,
    iteratee: impl FnMut(i64) -> R,
) -> RangeEachOutcome {
    range_each_reverse(range_from, 0, iteratee)
}

fn drive<R: Into<Continuation>>(
    indices: impl Iterator<Item = i64>,
    mut iteratee: impl FnMut(i64) -> R,
) -> RangeEachOutcome {
    for index in indices {
        if iteratee(index).into() == Continuation::Stop {
            trace!(message = "range_each -> stopped early", index);
            return RangeEachOutcome::StoppedAt(index);
        }
    }
    RangeEachOutcome::Completed
}
