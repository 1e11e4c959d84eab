use beacon_core::{Notification, NotificationLevel, NotificationSink};

use crate::ui;

/// Prints notifications to stderr as `✓ message` / `✗ message`.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl NotificationSink for ConsoleSink {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => {
                tracing::info!(text = %notification.message, "notification");
            }
            NotificationLevel::Error => {
                tracing::warn!(text = %notification.message, "notification");
            }
        }
        eprintln!("{}", format_line(&notification, ui::prefs().color));
    }
}

fn format_line(notification: &Notification, color: bool) -> String {
    let (mark, code) = match notification.level {
        NotificationLevel::Success => ('✓', "32"),
        NotificationLevel::Error => ('✗', "31"),
    };
    if color {
        format!("\u{1b}[{code}m{mark}\u{1b}[0m {}", notification.message)
    } else {
        format!("{mark} {}", notification.message)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn plain_lines_use_marks() {
        assert_eq!(
            format_line(&Notification::success("Company added successfully"), false),
            "✓ Company added successfully"
        );
        assert_eq!(
            format_line(&Notification::error("Failed to add company"), false),
            "✗ Failed to add company"
        );
    }

    #[test]
    fn colored_lines_wrap_only_the_mark() {
        let line = format_line(&Notification::error("Failed to search companies"), true);
        assert!(line.starts_with("\u{1b}[31m✗\u{1b}[0m"));
        assert!(line.ends_with(" Failed to search companies"));
    }
}
