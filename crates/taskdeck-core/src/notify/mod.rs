//! Transient user notifications.
//!
//! Views report the outcome of reads and writes through a [`Notifier`]
//! instead of returning errors. Delivery is best-effort: failures are
//! logged but never propagate.

use std::sync::Mutex;

use tracing::{info, warn};

#[cfg(not(target_os = "linux"))]
use tracing::debug;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Sink for transient notifications.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Prints notifications to stderr, optionally mirroring them to the desktop.
#[derive(Debug, Clone, Default)]
pub struct TerminalNotifier {
    desktop: bool,
}

impl TerminalNotifier {
    pub fn new(desktop: bool) -> Self {
        Self { desktop }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", format_terminal_line(&notification));
        if self.desktop {
            send_desktop_notification(&notification);
        }
    }
}

/// Format a notification as a single terminal line.
pub fn format_terminal_line(notification: &Notification) -> String {
    match notification.level {
        NotificationLevel::Success => format!("✅ {}", notification.message),
        NotificationLevel::Error => format!("❌ {}", notification.message),
    }
}

/// Keeps every notification in memory, in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything received so far.
    pub fn notifications(&self) -> Vec<Notification> {
        match self.received.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn count(&self, level: NotificationLevel) -> usize {
        self.notifications()
            .iter()
            .filter(|n| n.level == level)
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        match self.received.lock() {
            Ok(mut guard) => guard.push(notification),
            Err(poisoned) => poisoned.into_inner().push(notification),
        }
    }
}

/// Send a platform-native desktop notification (best-effort).
///
/// - Linux: `notify-send` (requires libnotify)
/// - Other: no-op
fn send_desktop_notification(notification: &Notification) {
    let title = match notification.level {
        NotificationLevel::Success => "taskdeck",
        NotificationLevel::Error => "taskdeck error",
    };

    info!(
        event = "core.notify.desktop_started",
        title = title,
        message = notification.message.as_str(),
    );

    send_platform_notification(title, &notification.message);
}

#[cfg(target_os = "linux")]
fn send_platform_notification(title: &str, message: &str) {
    match which::which("notify-send") {
        Ok(_) => {}
        Err(which::Error::CannotFindBinaryPath) => {
            tracing::debug!(
                event = "core.notify.desktop_skipped",
                reason = "notify-send not found",
            );
            return;
        }
        Err(e) => {
            warn!(
                event = "core.notify.desktop_failed",
                title = title,
                error = %e,
            );
            return;
        }
    }

    match std::process::Command::new("notify-send")
        .arg(title)
        .arg(message)
        .output()
    {
        Ok(output) if output.status.success() => {
            info!(event = "core.notify.desktop_completed", title = title);
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                event = "core.notify.desktop_failed",
                title = title,
                stderr = %stderr,
            );
        }
        Err(e) => {
            warn!(
                event = "core.notify.desktop_failed",
                title = title,
                error = %e,
            );
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn send_platform_notification(_title: &str, _message: &str) {
    debug!(
        event = "core.notify.desktop_skipped",
        reason = "unsupported platform",
    );
}
