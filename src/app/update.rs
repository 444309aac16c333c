// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Picker effects are turned into log lines, diagnostics events and toasts
//! here, so the picker itself stays free of application concerns.

use super::Message;
use crate::diagnostics::DiagnosticsCollector;
use crate::error::Error;
use crate::ui::notifications::{self, Notification};
use crate::ui::picker::{self, Effect};
use iced::{window, Task};

/// Mutable application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub picker: &'a mut picker::State,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a mut DiagnosticsCollector,
    pub print_diagnostics: bool,
}

pub fn handle_picker_message(ctx: &mut UpdateContext<'_>, message: picker::Message) -> Task<Message> {
    let (effect, task) = ctx.picker.update(message);
    apply_picker_effect(ctx, effect);
    task.map(Message::Picker)
}

pub fn apply_picker_effect(ctx: &mut UpdateContext<'_>, effect: Effect) {
    match effect {
        Effect::None => {}
        Effect::GestureBegan { scroll_offset } => {
            tracing::debug!(scroll_offset, "gesture began");
            ctx.diagnostics.log_gesture_began(scroll_offset);
        }
        Effect::CurtainMoved { from, to } => {
            tracing::debug!(%from, %to, "curtain state changed");
            ctx.diagnostics.log_state_change(from, to);
        }
        Effect::GestureEnded {
            from,
            settled,
            cancelled,
        } => {
            if from != settled {
                tracing::debug!(%from, to = %settled, "curtain state changed");
                ctx.diagnostics.log_state_change(from, settled);
            }
            tracing::debug!(%settled, cancelled, "gesture ended");
            ctx.diagnostics.log_gesture_ended(settled, cancelled);
        }
        Effect::LibraryReady { count } => {
            tracing::info!(count, "library scanned");
            ctx.diagnostics.log_library_scanned(count);
            ctx.notifications.clear_library_warnings();
        }
        Effect::LibraryUnavailable { key, path } => {
            let notification =
                Notification::error(key).with_arg("path", path.display().to_string());
            ctx.notifications.push_logged(notification, ctx.diagnostics);
        }
        Effect::GeometryRejected(err) => {
            let err = Error::from(err);
            tracing::warn!(error = %err, "curtain layout rejected, running clamped");
            ctx.notifications
                .push_logged(Notification::warning(err.i18n_key()), ctx.diagnostics);
        }
    }
}

/// Prints the diagnostics report if requested, then closes the window.
pub fn handle_close_request(ctx: &mut UpdateContext<'_>, window_id: window::Id) -> Task<Message> {
    if ctx.print_diagnostics {
        match ctx.diagnostics.export_toml() {
            Ok(report) => eprintln!("{report}"),
            Err(err) => tracing::warn!(error = %err, "failed to export diagnostics report"),
        }
    }
    window::close(window_id)
}
