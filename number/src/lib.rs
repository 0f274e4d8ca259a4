// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_number
//!
//! Small, pure numeric helpers that are shared by R3BL apps and exposed on the command
//! line via the `numcheck` binary.
//!
//! 1. [`is_numeric()`] and [`is_numeric_with_delimiters()`] decide whether a value should
//!    be treated as a number. Text is matched against a [nom](https://docs.rs/nom) grammar
//!    that accepts signed decimals (with configurable fraction delimiters), exponents, and
//!    `0x` hex literals. See [`NumericCandidate`] for the kinds of values that can be
//!    classified.
//! 2. [`range_each()`], [`range_each_to()`], [`range_each_reverse()`], and
//!    [`range_each_reverse_from()`] walk an inclusive range of integers and let the
//!    callback halt the walk by returning [`Continuation::Stop`] (or `false`).
//! 3. [`value_according_percent()`] calculates a truncated percentage of a value, where
//!    the percentage can be a number or text like `"33%"`. See [`Percent`] for the typed
//!    version that reports parse errors instead of returning `NaN`.
//!
//! All of these functions are synchronous, allocate nothing that outlives the call, and
//! are safe to use from any thread.
//!
//! ```rust
//! use r3bl_number::*;
//!
//! assert!(is_numeric("1e+26"));
//! assert!(is_numeric("0xabcdef"));
//! assert!(!is_numeric(f64::NAN));
//!
//! let mut acc = vec![];
//! range_each(0, 10, |index| {
//!     acc.push(index);
//!     index != 3
//! });
//! assert_eq!(acc, vec![0, 1, 2, 3]);
//!
//! assert_eq!(value_according_percent(7.0, "33%"), 2.0);
//! assert!(value_according_percent(100.0, "abc%").is_nan());
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod cli;
pub mod common;
pub mod log;
pub mod numeric;
pub mod percent;
pub mod range;
pub mod stack_alloc_types;

// Re-export.
pub use common::*;
pub use numeric::*;
pub use percent::*;
pub use range::*;
pub use stack_alloc_types::*;
