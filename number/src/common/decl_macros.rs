// Copyright (c) 2022-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given value in [`Ok`]. With no args, it is `Ok(())`.
///
/// ```
/// use r3bl_number::{CommonResult, ok};
///
/// fn nothing() -> CommonResult<()> { ok!() }
/// fn something() -> CommonResult<u8> { ok!(42) }
///
/// assert!(nothing().is_ok());
/// assert_eq!(something().unwrap(), 42);
/// ```
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
