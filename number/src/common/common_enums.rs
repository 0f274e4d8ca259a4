// Copyright (c) 2023-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Control flow signal for loops driven by a callback.
///
/// Returned (directly, or via [`Into`]) by the iteratee passed to [`crate::range_each()`]
/// and friends. Only [`Continuation::Stop`] halts the loop, so a callback that returns
/// `()` never stops early.
///
/// | Callback returns | Signal      |
/// |------------------|-------------|
/// | `()`             | `Continue`  |
/// | `true`           | `Continue`  |
/// | `false`          | `Stop`      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Continuation {
    /// Continue to the next iteration.
    #[default]
    Continue,

    /// Stop processing and exit the loop.
    Stop,
}

impl From<bool> for Continuation {
    fn from(keep_going: bool) -> Self {
        if keep_going {
            Continuation::Continue
        } else {
            Continuation::Stop
        }
    }
}

impl From<()> for Continuation {
    fn from((): ()) -> Self { Continuation::Continue }
}
