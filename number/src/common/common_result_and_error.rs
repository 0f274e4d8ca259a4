// Copyright (c) 2022-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use std::{error::Error,
          fmt::{Display, Formatter, Result}};

use miette::Diagnostic;

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`] wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`CommonError`], [`crate::PercentParseError`] and any other
///   type of error.
pub type CommonResult<T> = miette::Result<T>;

/// Common error struct for the `numcheck` binary and the logging setup. Errors that
/// belong to a single operation (eg: [`crate::PercentParseError`]) get their own type.
///
/// # Example
///
/// ```
/// use r3bl_number::{CommonError, CommonErrorType, CommonResult};
///
/// fn require_delimiter(delimiter: &str) -> CommonResult<&str> {
///     if delimiter.is_empty() {
///         return CommonError::new_error_result(
///             CommonErrorType::InvalidArguments,
///             "Delimiter can't be empty",
///         );
///     }
///     Ok(delimiter)
/// }
///
/// assert!(require_delimiter(",").is_ok());
/// assert!(require_delimiter("").is_err());
/// ```
#[derive(Debug, Clone, Diagnostic)]
#[diagnostic(code(r3bl_number::common_error))]
pub struct CommonError {
    pub error_type: CommonErrorType,
    pub error_message: Option<String>,
}

/// Some common errors that can occur.
#[non_exhaustive]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonErrorType {
    #[default]
    General,
    InvalidArguments,
    IOError,
}

impl Error for CommonError {}

impl Display for CommonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.error_message {
            Some(msg) => write!(f, "{:?}: {msg}", self.error_type),
            None => write!(f, "{:?}", self.error_type),
        }
    }
}

impl CommonError {
    /// Both [`CommonError::error_type`] and [`CommonError::error_message`] available.
    ///
    /// # Errors
    ///
    /// Always returns [`Err`], that's the point.
    pub fn new_error_result<T>(err_type: CommonErrorType, msg: &str) -> CommonResult<T> {
        Err(CommonError {
            error_type: err_type,
            error_message: Some(msg.to_string()),
        }
        .into())
    }
}
