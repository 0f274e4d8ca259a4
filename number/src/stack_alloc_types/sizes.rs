// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Keep these small. Delimiter lists and CLI output are short lived, and most of them
//! fit on the stack without ever being [`smallvec::SmallVec::spilled`] on the heap.

use smallvec::SmallVec;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the heap if it
/// gets larger than [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;

/// List of borrowed string slices, eg: the fraction delimiters used by
/// [`crate::parse_numeric_text()`].
pub type InlineVecStr<'a> = InlineVec<&'a str>;
