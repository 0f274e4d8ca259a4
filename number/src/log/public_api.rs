// Copyright (c) 2022-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::subscriber::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{CommonError, CommonErrorType, CommonResult, log::{TracingConfig, try_create_layers},
            ok};

/// Global default subscriber, which once set, can't be unset or changed.
///
/// If the level filter is [`LevelFilter::OFF`], nothing is installed.
///
/// # Errors
///
/// If the log file can't be created, or a global subscriber is already installed.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> CommonResult<()> {
    let tracing_config: TracingConfig = options.into();

    // Early return if the level filter is off.
    if tracing_config.get_level_filter() == LevelFilter::OFF {
        return ok!();
    }

    let layers = try_create_layers(&tracing_config)?;
    if let Err(error) = tracing_subscriber::registry().with(layers).try_init() {
        return CommonError::new_error_result(
            CommonErrorType::General,
            &format!("Failed to install global tracing subscriber: {error}"),
        );
    }

    ok!()
}

/// Thread local subscriber, which is thread local, and you can assign different ones to
/// different threads. This is great for tests. The subscriber is removed when the
/// returned guard is dropped.
///
/// If the level filter is [`LevelFilter::OFF`], nothing is installed and [`None`] is
/// returned.
///
/// # Errors
///
/// If the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> CommonResult<Option<DefaultGuard>> {
    let tracing_config: TracingConfig = options.into();

    if tracing_config.get_level_filter() == LevelFilter::OFF {
        return ok!(None);
    }

    let layers = try_create_layers(&tracing_config)?;
    let subscriber = tracing_subscriber::registry().with(layers);
    ok!(Some(tracing::subscriber::set_default(subscriber)))
}
