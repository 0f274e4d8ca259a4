// Copyright (c) 2024-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Configure how [`miette::Report`]s are printed when `main()` returns an error.

use miette::MietteHandlerOpts;
use tracing::debug;

/// The [`miette::ErrorHook`] is lazily evaluated.
///
/// The terminal width is only calculated when a report is created, so if an error never
/// occurs, the terminal is never queried.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = usize::from(
                crossterm::terminal::size()
                    .map(|(columns, _rows)| columns)
                    .unwrap_or(80),
            );
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .force_graphical(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::{CommonError, CommonErrorType, CommonResult};

    #[serial]
    #[test]
    fn test_report_uses_installed_hook() {
        setup_default_miette_global_report_handler("https://example.com/issues");

        let result: CommonResult<()> =
            CommonError::new_error_result(CommonErrorType::IOError, "disk is gone");
        let rendered = format!("{:?}", result.unwrap_err());

        assert!(rendered.contains("disk is gone"), "{rendered}");
        assert!(rendered.contains("https://example.com/issues"), "{rendered}");
    }
}
