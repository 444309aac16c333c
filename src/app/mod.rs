// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the picker to localization, notifications and
//! diagnostics, and translates picker effects into those side channels.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::diagnostics::DiagnosticsCollector;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::picker;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    picker: picker::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    /// Whether the diagnostics report is printed on close.
    print_diagnostics: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("curtain", &self.picker.curtain_state())
            .field("notifications", &self.notifications.visible_count())
            .finish()
    }
}

// Portrait window: the panel is as tall as the window is wide.
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be `Fn`; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and localization, then starts the library scan.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);

        let directory = flags
            .directory
            .clone()
            .unwrap_or_else(crate::app::paths::default_library_dir);
        tracing::info!(directory = %directory.display(), locale = %i18n.current_locale(), "starting picker");

        let (picker, task) = picker::State::new(picker::StateConfig {
            top_inset: config.top_inset(),
            settle_duration: config.settle_duration(),
            columns: config.grid_columns(),
            sort_order: config.sort_order(),
            directory,
            initial_width: WINDOW_DEFAULT_WIDTH as f32,
        });

        let mut app = App {
            i18n,
            picker,
            notifications: notifications::Manager::new(),
            diagnostics: DiagnosticsCollector::default(),
            print_diagnostics: flags.diagnostics,
        };

        // Show warnings for config loading issues
        if let Some(key) = config_warning {
            app.notifications
                .push_logged(Notification::warning(key), &mut app.diagnostics);
        }
        if let Some(err) = app.picker.geometry_error() {
            let err = Error::from(err);
            tracing::warn!(error = %err, "curtain layout rejected, running clamped");
            app.notifications
                .push_logged(Notification::warning(err.i18n_key()), &mut app.diagnostics);
        }

        (app, task.map(Message::Picker))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.picker.selected_asset() {
            Some(asset) if !asset.file_name().is_empty() => {
                format!("{} - {app_name}", asset.file_name())
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());
        let frame_sub = subscription::create_frame_subscription(self.picker.is_animating());

        Subscription::batch([event_sub, tick_sub, frame_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            picker: &mut self.picker,
            notifications: &mut self.notifications,
            diagnostics: &mut self.diagnostics,
            print_diagnostics: self.print_diagnostics,
        };

        match message {
            Message::Picker(picker_message) => {
                update::handle_picker_message(&mut ctx, picker_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                ctx.notifications.tick(now);
                Task::none()
            }
            Message::WindowCloseRequested(window_id) => {
                update::handle_close_request(&mut ctx, window_id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            picker: &self.picker,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn flags_with_config(contents: &str) -> (tempfile::TempDir, Flags) {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("settings.toml"), contents).expect("failed to write config");
        let flags = Flags {
            lang: Some("en-US".to_string()),
            directory: Some(temp_dir.path().to_path_buf()),
            config_dir: Some(temp_dir.path().to_path_buf()),
            diagnostics: false,
        };
        (temp_dir, flags)
    }

    #[test]
    fn broken_config_is_reported_as_warning() {
        let (_dir, flags) = flags_with_config("this is not = = toml");
        let (app, _task) = App::new(flags);

        let keys: Vec<_> = app
            .notifications
            .visible()
            .map(|n| n.message_key().to_string())
            .collect();
        assert_eq!(keys, vec!["notification-config-load-error".to_string()]);
        assert_eq!(app.diagnostics.len(), 1);
    }

    #[test]
    fn valid_config_starts_quietly() {
        let (_dir, flags) = flags_with_config("[curtain]\ntop_inset = 40.0\n");
        let (app, _task) = App::new(flags);

        assert!(!app.notifications.has_notifications());
        assert_eq!(app.picker.geometry().top_inset(), 40.0);
        assert_eq!(app.title(), "Curtain Picker");
    }

    #[test]
    fn close_request_without_diagnostics_flag_still_closes() {
        let (_dir, flags) = flags_with_config("");
        let (mut app, _task) = App::new(flags);
        let _task = app.update(Message::WindowCloseRequested(window::Id::unique()));
        assert!(app.diagnostics.is_empty());
    }
}
