// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts and manages auto-dismiss timers.

use super::notification::{Notification, NotificationId, Severity};
use crate::diagnostics::DiagnosticsCollector;
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Prefix shared by every library access warning.
const LIBRARY_KEY_PREFIX: &str = "notification-library-";

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Periodic check of auto-dismiss timers.
    Tick(Instant),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Waiting for a visible slot.
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification to be displayed.
    ///
    /// Shown immediately if fewer than `MAX_VISIBLE` are on screen,
    /// otherwise queued until a slot frees up.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Pushes a notification and records warnings and errors as diagnostics.
    pub fn push_logged(&mut self, notification: Notification, diagnostics: &mut DiagnosticsCollector) {
        match notification.severity() {
            Severity::Warning | Severity::Error => {
                tracing::warn!(key = notification.message_key(), "user notified");
                diagnostics.log_warning(notification.message_key());
            }
            Severity::Info => {}
        }
        self.push(notification);
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible notification that expired at `now`.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.is_expired(now))
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Removes stale library access warnings after a successful scan.
    pub fn clear_library_warnings(&mut self) {
        let visible_before = self.visible.len();
        self.visible
            .retain(|n| !n.message_key().starts_with(LIBRARY_KEY_PREFIX));
        self.queue
            .retain(|n| !n.message_key().starts_with(LIBRARY_KEY_PREFIX));

        if self.visible.len() < visible_before {
            self.promote_from_queue();
        }
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(notification) = self.queue.pop_front() else {
                break;
            };
            self.visible.push_back(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::info(format!("test-{i}")));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);

        manager.push(Notification::info("queued"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::info("visible-0");
        let first_id = first.id();
        manager.push(first);
        for i in 1..MAX_VISIBLE {
            manager.push(Notification::info(format!("visible-{i}")));
        }
        manager.push(Notification::info("queued"));

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let stray = Notification::info("temp").id();
        assert!(!manager.dismiss(stray));
    }

    #[test]
    fn tick_dismisses_expired_but_keeps_errors() {
        let mut manager = Manager::new();
        manager.push(Notification::info("notification-library-rescanned"));
        manager.push(Notification::error("notification-library-denied"));

        manager.handle_message(&Message::Tick(Instant::now() + Duration::from_secs(10)));
        assert_eq!(manager.visible_count(), 1);
        let remaining: Vec<_> = manager.visible().map(Notification::severity).collect();
        assert_eq!(remaining, vec![Severity::Error]);
    }

    #[test]
    fn push_logged_records_warnings_only() {
        let mut manager = Manager::new();
        let mut diagnostics = DiagnosticsCollector::default();
        manager.push_logged(Notification::info("notification-library-rescanned"), &mut diagnostics);
        manager.push_logged(Notification::warning("notification-config-load-error"), &mut diagnostics);

        assert_eq!(manager.visible_count(), 2);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn clear_library_warnings_keeps_other_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::error("notification-library-denied"));
        manager.push(Notification::warning("notification-config-load-error"));
        manager.push(Notification::error("notification-library-missing"));
        manager.push(Notification::warning("notification-geometry-panel-too-short"));

        manager.clear_library_warnings();
        let keys: Vec<_> = manager.visible().map(|n| n.message_key().to_string()).collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.iter().all(|key| !key.starts_with(LIBRARY_KEY_PREFIX)));
        assert_eq!(manager.queued_count(), 0);
    }
}
