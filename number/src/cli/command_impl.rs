// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          io::{self, Write}};

use miette::IntoDiagnostic;
use tracing::debug;

use crate::{CommonError, CommonErrorType, CommonResult, Continuation,
            DEFAULT_ADDITIONAL_DELIMITERS, NumericLiteral, RangeEachOutcome,
            build_delimiters,
            cli::{CLIArg, CLICommand},
            is_numeric_with_delimiters, parse_numeric_text, range_each, range_each_reverse,
            range_each_reverse_from, range_each_to, trim_whitespace,
            value_according_percent};

/// What a [`CLICommand`] produced. [`Display`] renders the single line result of
/// `is-numeric` and `percent`. The indices of `range` are streamed to the writer while
/// the range is walked, so only a summary is kept here.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    IsNumeric {
        is_numeric: bool,
        /// `Some("decimal")` or `Some("hexadecimal")` for multi character numeric text.
        literal_kind: Option<&'static str>,
    },
    Percent {
        result: f64,
    },
    Range {
        visited: u64,
        outcome: RangeEachOutcome,
    },
}

impl Display for CommandOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            CommandOutput::IsNumeric {
                is_numeric,
                literal_kind: Some(kind),
            } => write!(f, "{is_numeric} ({kind})"),
            CommandOutput::IsNumeric { is_numeric, .. } => write!(f, "{is_numeric}"),
            CommandOutput::Percent { result } => write!(f, "{result}"),
            CommandOutput::Range { visited, outcome } => {
                write!(f, "{visited} indices, {outcome:?}")
            }
        }
    }
}

/// Run the command in `cli_arg` and write what it prints to `writer`, one line per
/// result (or per range index).
///
/// # Errors
///
/// - [`CommonErrorType::InvalidArguments`] if an empty delimiter is passed to
///   `is-numeric`.
/// - Any [`io::Error`] from `writer`.
pub fn handle_command(
    cli_arg: &CLIArg,
    writer: &mut impl Write,
) -> CommonResult<CommandOutput> {
    debug!(message = "handle_command", command = ?cli_arg.command);

    match &cli_arg.command {
        CLICommand::IsNumeric { value, delimiters } => {
            let output = handle_is_numeric(value, delimiters)?;
            writeln!(writer, "{output}").into_diagnostic()?;
            Ok(output)
        }
        CLICommand::Percent { value, percent } => {
            let output = CommandOutput::Percent {
                result: value_according_percent(*value, percent),
            };
            writeln!(writer, "{output}").into_diagnostic()?;
            Ok(output)
        }
        CLICommand::Range {
            from,
            to,
            reverse,
            stop_at,
        } => handle_range(*from, *to, *reverse, *stop_at, writer),
    }
}

fn handle_is_numeric(value: &str, delimiters: &[String]) -> CommonResult<CommandOutput> {
    if delimiters.iter().any(String::is_empty) {
        return CommonError::new_error_result(
            CommonErrorType::InvalidArguments,
            "Delimiter can't be empty",
        );
    }

    let additional_delimiters: Vec<&str> = if delimiters.is_empty() {
        DEFAULT_ADDITIONAL_DELIMITERS.to_vec()
    } else {
        delimiters.iter().map(String::as_str).collect()
    };

    let is_numeric = is_numeric_with_delimiters(value, &additional_delimiters);

    let literal_kind = if is_numeric && value.chars().nth(1).is_some() {
        let delimiters = build_delimiters(&additional_delimiters);
        match parse_numeric_text(trim_whitespace(value), &delimiters) {
            Ok((_, NumericLiteral::Decimal(_))) => Some("decimal"),
            Ok((_, NumericLiteral::Hexadecimal(_))) => Some("hexadecimal"),
            Err(_) => None,
        }
    } else {
        None
    };

    Ok(CommandOutput::IsNumeric {
        is_numeric,
        literal_kind,
    })
}

/// Each index is written as soon as it is visited, so huge ranges never pile up in
/// memory. A failed write stops the walk.
fn handle_range(
    from: i64,
    to: Option<i64>,
    reverse: bool,
    stop_at: Option<i64>,
    writer: &mut impl Write,
) -> CommonResult<CommandOutput> {
    let mut visited = 0_u64;
    let mut write_error: Option<io::Error> = None;

    let iteratee = |index: i64| {
        if let Err(error) = writeln!(writer, "{index}") {
            write_error = Some(error);
            return Continuation::Stop;
        }
        visited += 1;
        if stop_at == Some(index) {
            Continuation::Stop
        } else {
            Continuation::Continue
        }
    };

    let outcome = match (to, reverse) {
        (Some(to), false) => range_each(from, to, iteratee),
        (None, false) => range_each_to(from, iteratee),
        (Some(to), true) => range_each_reverse(from, to, iteratee),
        (None, true) => range_each_reverse_from(from, iteratee),
    };

    if let Some(error) = write_error {
        return Err(error).into_diagnostic();
    }

    Ok(CommandOutput::Range { visited, outcome })
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::assert_eq2;

    fn run(args: &[&str]) -> (CommonResult<CommandOutput>, String) {
        let mut argv = vec!["numcheck"];
        argv.extend_from_slice(args);
        let cli_arg = CLIArg::try_parse_from(argv).unwrap();
        let mut buffer: Vec<u8> = vec![];
        let result = handle_command(&cli_arg, &mut buffer);
        (result, String::from_utf8(buffer).unwrap())
    }

    /// Accepts a limited number of bytes, then fails every write.
    struct FailAfter {
        remaining: usize,
    }

    impl Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining < buf.len() {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
            }
            self.remaining -= buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> { Ok(()) }
    }

    #[test]
    fn test_is_numeric_command() {
        assert_eq2!(run(&["is-numeric", "0xabcdef"]).1, "true (hexadecimal)\n");
        assert_eq2!(run(&["is-numeric", "1,5"]).1, "true (decimal)\n");
        assert_eq2!(run(&["is-numeric", "5"]).1, "true\n");
        assert_eq2!(run(&["is-numeric", "abc"]).1, "false\n");
        assert_eq2!(run(&["is-numeric", "1,5", "-d", "'"]).1, "false\n");
        assert_eq2!(run(&["is-numeric", "\u{FEFF}0x1f"]).1, "true (hexadecimal)\n");
    }

    #[test]
    fn test_is_numeric_command_rejects_empty_delimiter() {
        let (result, printed) = run(&["is-numeric", "1.5", "-d", ""]);
        let report = result.unwrap_err();
        let common_error = report.downcast_ref::<CommonError>().unwrap();
        assert_eq2!(common_error.error_type, CommonErrorType::InvalidArguments);
        assert_eq2!(printed, "");
    }

    #[test]
    fn test_percent_command() {
        assert_eq2!(run(&["percent", "7", "33%"]).1, "2\n");
        assert_eq2!(run(&["percent", "200", "50"]).1, "100\n");
        assert_eq2!(run(&["percent", "100", "abc%"]).1, "NaN\n");
    }

    #[test]
    fn test_range_command() {
        let (result, printed) = run(&["range", "2", "4"]);
        assert_eq2!(printed, "2\n3\n4\n");
        assert_eq2!(
            result.unwrap(),
            CommandOutput::Range {
                visited: 3,
                outcome: RangeEachOutcome::Completed,
            }
        );

        assert_eq2!(run(&["range", "3"]).1, "0\n1\n2\n3\n");
        assert_eq2!(run(&["range", "3", "--reverse"]).1, "3\n2\n1\n0\n");
        assert_eq2!(run(&["range", "5", "4"]).1, "");

        let (result, printed) = run(&["range", "0", "10", "--stop-at", "3"]);
        assert_eq2!(printed, "0\n1\n2\n3\n");
        assert_eq2!(
            result.unwrap(),
            CommandOutput::Range {
                visited: 4,
                outcome: RangeEachOutcome::StoppedAt(3),
            }
        );
    }

    #[test]
    fn test_huge_range_stops_at_first_failed_write() {
        let cli_arg =
            CLIArg::try_parse_from(["numcheck", "range", "0", "9223372036854775807"])
                .unwrap();
        let mut writer = FailAfter { remaining: 20 };
        assert!(handle_command(&cli_arg, &mut writer).is_err());
    }
}
