// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_core::LevelFilter;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "numcheck")]
#[command(about = "🔢 Check numbers, walk ranges, and calculate percentages")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_enum,
        default_value_t = LogLevel::Debug,
        help = "How much to log when logging is enabled"
    )]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    /// Check whether the value is numeric, eg: `0.001`, `- 10000`, `1e+26`, `0xabcdef`
    IsNumeric {
        #[arg(value_name = "value", allow_hyphen_values = true)]
        value: String,

        #[arg(
            long = "delimiter",
            short = 'd',
            value_name = "delimiter",
            help = "Fraction delimiter accepted in addition to `.`; repeat for more [default: ,]"
        )]
        delimiters: Vec<String>,
    },

    /// Calculate the truncated percentage of a value, eg: `numcheck percent 7 33%`
    Percent {
        #[arg(value_name = "value", allow_negative_numbers = true)]
        value: f64,

        #[arg(value_name = "percent", allow_hyphen_values = true)]
        percent: String,
    },

    /// Print each index of an inclusive range; with only one bound, the other is `0`
    Range {
        #[arg(value_name = "from", allow_negative_numbers = true)]
        from: i64,

        #[arg(value_name = "to", allow_negative_numbers = true)]
        to: Option<i64>,

        #[arg(long, short = 'r', help = "Walk the range from high to low")]
        reverse: bool,

        #[arg(
            long,
            short = 's',
            value_name = "index",
            allow_negative_numbers = true,
            help = "Stop after printing this index"
        )]
        stop_at: Option<i64>,
    },
}
