// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A percentage as it is handed to [`crate::value_according_percent()`]: either a
/// number, or text like `"33%"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PercentArg<'a> {
    Number(f64),
    Text(&'a str),
}

macro_rules! impl_from_number_for_percent_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for PercentArg<'_> {
                #[allow(trivial_numeric_casts, clippy::cast_precision_loss, clippy::cast_lossless)]
                fn from(it: $ty) -> Self { PercentArg::Number(it as f64) }
            }
        )*
    };
}

impl_from_number_for_percent_arg!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl<'a> From<&'a str> for PercentArg<'a> {
    fn from(it: &'a str) -> Self { PercentArg::Text(it) }
}

impl<'a> From<&'a String> for PercentArg<'a> {
    fn from(it: &'a String) -> Self { PercentArg::Text(it.as_str()) }
}
