//! ANSI color helpers for terminal output, per theme.

use crate::models::EventClass;
use crate::state::Theme;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const BRIGHT_WHITE: &str = "\x1b[97m";
pub const BLACK: &str = "\x1b[30m";

pub struct Palette {
    pub accent: &'static str,
    pub muted: &'static str,
    pub text: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                accent: CYAN,
                muted: GREY,
                text: BRIGHT_WHITE,
                reset: RESET,
            },
            Theme::Light => Self {
                accent: BLUE,
                muted: GREY,
                text: BLACK,
                reset: RESET,
            },
            Theme::Plain => Self {
                accent: "",
                muted: "",
                text: "",
                reset: "",
            },
        }
    }

    pub fn paint(&self, color: &str, value: &str) -> String {
        if self.reset.is_empty() {
            value.to_string()
        } else {
            format!("{color}{value}{}", self.reset)
        }
    }

    /// Escalations red, bookings green, calls in the accent color.
    pub fn class_color(&self, class: EventClass) -> &'static str {
        if self.reset.is_empty() {
            return "";
        }
        match class {
            EventClass::Escalation => RED,
            EventClass::Booking => GREEN,
            EventClass::Call => self.accent,
        }
    }

    /// Sentiment text colored by tone; unknown values stay muted.
    pub fn sentiment_color(&self, sentiment: &str) -> &'static str {
        if self.reset.is_empty() {
            return "";
        }
        match sentiment.trim().to_lowercase().as_str() {
            "positive" => GREEN,
            "negative" => RED,
            "neutral" => YELLOW,
            "" => self.muted,
            _ => MAGENTA,
        }
    }
}
