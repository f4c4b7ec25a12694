//! ANSI color helpers for terminal output.

use crate::core::calculator::Tone;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Favorable → green, Unfavorable → red, Neutral → reset.
pub fn color_for_tone(tone: Tone) -> &'static str {
    match tone {
        Tone::Favorable => GREEN,
        Tone::Unfavorable => RED,
        Tone::Neutral => RESET,
    }
}

pub fn colorize(value: &str, tone: Tone) -> String {
    match tone {
        Tone::Neutral => value.to_string(),
        _ => format!("{}{value}{RESET}", color_for_tone(tone)),
    }
}

/// Grey out placeholders ("", "None", "N/A").
pub fn colorize_optional(value: &str) -> String {
    match value.trim() {
        "" | "None" | "N/A" => format!("{GREY}{value}{RESET}"),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones_map_to_colors() {
        assert_eq!(colorize("+2.0", Tone::Unfavorable), "\x1b[31m+2.0\x1b[0m");
        assert_eq!(colorize("-1.0", Tone::Favorable), "\x1b[32m-1.0\x1b[0m");
        assert_eq!(colorize("0.0", Tone::Neutral), "0.0");
        assert_eq!(colorize_optional("None"), "\x1b[90mNone\x1b[0m");
    }
}
