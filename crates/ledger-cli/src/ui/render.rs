//! Rendering primitives for CLI output.

use ledger_state::tags::Notification;

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge};

/// Render a header line for a command.
///
/// Pretty mode: "Ledger · command"
/// Plain mode: "ledger command"
pub fn header(ctx: &UiContext, command: &str) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Ledger", styles::bold(), ctx.color);
            format!("{} \u{00B7} {}", title, command)
        }
        OutputMode::Plain => format!("ledger {}", command),
        OutputMode::Json => String::new(),
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = kind.display(ctx.unicode);
    let colored_badge = styled(badge_text, kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
///
/// Pretty mode: "Hint: text" with dim styling
/// Plain mode: "hint=text"
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a 1-based numbered list, or a placeholder when empty.
pub fn numbered(ctx: &UiContext, items: &[String], empty: &str) -> String {
    if items.is_empty() {
        return styled(empty, styles::dim(), ctx.color);
    }
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("  {}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a user-visible notification.
pub fn notification(ctx: &UiContext, notification: &Notification) -> String {
    badge(ctx, Badge::from(notification.level), &notification.message)
}

/// Render an error message with optional hint.
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut out = badge(ctx, Badge::Err, message);
    if let Some(h) = error_hint {
        out.push('\n');
        out.push_str(&styled(h, styles::dim(), ctx.color));
    }
    out
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_state::tags::Notification;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: true,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header_pretty() {
        let h = header(&pretty_ctx(), "context");
        assert!(h.contains("Ledger"));
        assert!(h.contains("context"));
    }

    #[test]
    fn test_header_plain() {
        assert_eq!(header(&plain_ctx(), "context"), "ledger context");
    }

    #[test]
    fn test_kv_modes() {
        assert_eq!(kv(&plain_ctx(), "Ledger ID", "L1"), "ledger_id=L1");
        assert_eq!(kv(&pretty_ctx(), "Ledger ID", "L1"), "Ledger ID: L1");
    }

    #[test]
    fn test_numbered_list() {
        let items = vec!["rent".to_string(), "food".to_string()];
        assert_eq!(numbered(&plain_ctx(), &items, "(none)"), "  1. rent\n  2. food");
        assert_eq!(numbered(&plain_ctx(), &[], "(none)"), "(none)");
    }

    #[test]
    fn test_notification_badge() {
        let n = Notification::warning("Failed to fetch tag suggestions.");
        assert_eq!(
            notification(&plain_ctx(), &n),
            "[WARN] Failed to fetch tag suggestions."
        );
    }

    #[test]
    fn test_error_message_with_hint() {
        let msg = error_message(&plain_ctx(), "No ledger selected", Some("Hint: run it"));
        assert_eq!(msg, "[ERR] No ledger selected\nHint: run it");
    }
}
