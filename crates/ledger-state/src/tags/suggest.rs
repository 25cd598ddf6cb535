//! Collaborator seams used by the tag input controller.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;

use super::types::Suggestion;
use crate::error::Result;

/// Something that can answer "which known tags match this partial name?".
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Return matches for `query`, in the order they should be shown.
    async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>>;
}

/// Severity of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// A transient message meant for the user, not the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            raised_at: Utc::now(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, message)
    }
}

/// Surface for user-visible notifications (toasts in a GUI, stderr in a CLI).
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Sends notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Info => tracing::info!("{}", notification.message),
            NotificationLevel::Warning => tracing::warn!("{}", notification.message),
            NotificationLevel::Error => tracing::error!("{}", notification.message),
        }
    }
}

/// Forwards notifications into a channel drained by the UI loop.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            tracing::debug!("notification dropped: receiver closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
        }
    }

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLog {
        type Writer = CapturedLog;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn log_with_tracing_notifier(notification: Notification) -> String {
        let log = CapturedLog::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(log.clone())
            .with_ansi(false)
            .without_time()
            .finish();
        tracing::subscriber::with_default(subscriber, || TracingNotifier.notify(notification));
        log.contents()
    }

    #[test]
    fn test_tracing_notifier_logs_warning() {
        let out = log_with_tracing_notifier(Notification::warning(
            "Failed to fetch tag suggestions.",
        ));
        assert!(out.contains("WARN"), "log: {}", out);
        assert!(out.contains("Failed to fetch tag suggestions."), "log: {}", out);
    }

    #[test]
    fn test_tracing_notifier_maps_levels() {
        let out = log_with_tracing_notifier(Notification::new(NotificationLevel::Info, "saved"));
        assert!(out.contains("INFO") && out.contains("saved"), "log: {}", out);

        let out = log_with_tracing_notifier(Notification::new(NotificationLevel::Error, "boom"));
        assert!(out.contains("ERROR") && out.contains("boom"), "log: {}", out);
    }

    #[test]
    fn test_channel_notifier_forwards() {
        let (notifier, mut rx) = ChannelNotifier::new();
        notifier.notify(Notification::warning("Failed to fetch tag suggestions."));

        let received = rx.try_recv().unwrap();
        assert_eq!(received.level, NotificationLevel::Warning);
        assert_eq!(received.message, "Failed to fetch tag suggestions.");
    }

    #[test]
    fn test_channel_notifier_survives_closed_receiver() {
        let (notifier, rx) = ChannelNotifier::new();
        drop(rx);
        notifier.notify(Notification::warning("ignored"));
    }
}
