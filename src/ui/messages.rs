//! User-facing status lines. Diagnostics go through the `log` facade instead.
//!
//! Colors are dropped when the target stream is not a terminal or when
//! `NO_COLOR` is set, so piped output stays clean.

use std::env;
use std::fmt;
use std::io::{self, IsTerminal};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }
}

fn colored(to_stderr: bool) -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if to_stderr {
        io::stderr().is_terminal()
    } else {
        io::stdout().is_terminal()
    }
}

fn line(level: Level, msg: &dyn fmt::Display, to_stderr: bool) -> String {
    if colored(to_stderr) {
        format!("{}{}{}{} {msg}", level.color(), BOLD, level.icon(), RESET)
    } else {
        format!("{} {msg}", level.icon())
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Info, &msg, false));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Success, &msg, false));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Warning, &msg, false));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Level::Error, &msg, true));
}

/// Aligned `label: value` line for status output.
pub fn field<T: fmt::Display>(label: &str, value: T) {
    if colored(false) {
        println!("  {BOLD}{label:<14}{RESET} {value}");
    } else {
        println!("  {label:<14} {value}");
    }
}
