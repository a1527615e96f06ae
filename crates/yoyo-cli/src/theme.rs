/// Terminal colour scheme and banner for YOYO.
///
/// All colour choices are made here so the rest of the shell refers to
/// semantically-named tones rather than raw colours.
use colored::{ColoredString, Colorize};

/// Tool name and version shown in the banner and on exit.
pub const TOOL_VERSION: &str = "YOYO v3.4";

/// Semantic tone of a line of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Banner,
    Success,
    Warning,
    Error,
    Plain,
}

/// Apply a tone to `text`.
pub fn paint(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Banner => text.bright_cyan(),
        Tone::Success => text.bright_green(),
        Tone::Warning => text.bright_yellow(),
        Tone::Error => text.bright_red(),
        Tone::Plain => text.bright_white(),
    }
}

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// The start-up banner, uncoloured.
pub fn banner() -> String {
    format!(
        r#"
    ██╗   ██╗ ██████╗ ██╗   ██╗ ██████╗
    ╚██╗ ██╔╝██╔═══██╗╚██╗ ██╔╝██╔═══██╗   Tool: {TOOL_VERSION}
     ╚████╔╝ ██║   ██║ ╚████╔╝ ██║   ██║   Mode: Full USB Backup
      ╚██╔╝  ██║   ██║  ╚██╔╝  ██║   ██║   Status: Ready
       ██║   ╚██████╔╝   ██║   ╚██████╔╝
       ╚═╝    ╚═════╝    ╚═╝    ╚═════╝    Nothing left behind.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_keeps_text() {
        colored::control::set_override(false);
        assert_eq!(paint("hello", Tone::Error).to_string(), "hello");
        colored::control::unset_override();
    }

    #[test]
    fn test_banner_mentions_version() {
        assert!(banner().contains(TOOL_VERSION));
    }
}
