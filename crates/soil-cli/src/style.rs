//! Status-line styling for command output.

use owo_colors::OwoColorize;

#[derive(Clone, Copy)]
enum Level {
    Success,
    Info,
    Warning,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Success => "[OK]",
            Level::Info => "[--]",
            Level::Warning => "[!!]",
        }
    }

    fn line(self, message: &str, no_color: bool) -> String {
        let tag = self.tag();
        if no_color {
            return format!("{tag} {message}");
        }
        match self {
            Level::Success => format!("{} {message}", tag.green()),
            Level::Info => format!("{} {message}", tag.cyan()),
            Level::Warning => format!("{} {message}", tag.yellow()),
        }
    }
}

/// A completed action, e.g. rows inserted or a file written.
pub fn format_success(message: &str, no_color: bool) -> String {
    Level::Success.line(message, no_color)
}

pub fn format_info(message: &str, no_color: bool) -> String {
    Level::Info.line(message, no_color)
}

/// Something the user asked for did not happen, without being an error.
pub fn format_warning(message: &str, no_color: bool) -> String {
    Level::Warning.line(message, no_color)
}

/// Format a section title with an underline.
pub fn format_title(title: &str, no_color: bool) -> String {
    if no_color {
        format!("{}\n{}", title, "━".repeat(title.chars().count()))
    } else {
        format!(
            "{}\n{}",
            title.bold(),
            "━".repeat(title.chars().count()).dimmed()
        )
    }
}
