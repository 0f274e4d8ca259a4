// Copyright (c) 2024-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use crate::{CommonError, CommonErrorType, CommonResult};

/// Create a file appender that never rolls over, writing to `path_str`. The parent
/// folder must already exist.
///
/// # Errors
///
/// [`CommonErrorType::IOError`] if the path has no parent folder or no file name.
pub fn try_create(path_str: &str) -> CommonResult<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let Some(parent) = path.parent() else {
        return CommonError::new_error_result(
            CommonErrorType::IOError,
            &format!(
                "Can't access current folder {}. It might not exist, or don't have required permissions.",
                path.display()
            ),
        );
    };

    let Some(file_name) = path.file_name() else {
        return CommonError::new_error_result(
            CommonErrorType::IOError,
            &format!(
                "Can't access file name {}. It might not exist, or don't have required permissions.",
                path.display()
            ),
        );
    };

    Ok(tracing_appender::rolling::never(parent, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_create_rejects_path_without_file_name() {
        assert!(try_create("/").is_err());
        assert!(try_create("").is_err());
    }
}
