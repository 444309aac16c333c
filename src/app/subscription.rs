// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events (mouse, touch, keyboard, window) to the picker and
//! drives the periodic ticks of notifications and the panel animation.

use super::Message;
use crate::ui::picker;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval of the panel settle animation (about 60 fps).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Creates the event subscription feeding the picker.
///
/// Pointer and touch events are forwarded even when a widget captured them:
/// thumbnails capture presses, but the curtain still needs the whole gesture.
/// Wheel scrolling is left to the grid's scrollable.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        // Handle window close request for cleanup
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }

        let forward = match &event {
            event::Event::Mouse(iced::mouse::Event::WheelScrolled { .. }) => false,
            event::Event::Mouse(_) | event::Event::Touch(_) => true,
            event::Event::Window(
                iced::window::Event::Resized(_) | iced::window::Event::Opened { .. },
            ) => true,
            event::Event::Keyboard(_) => status == event::Status::Ignored,
            _ => false,
        };

        forward.then(|| {
            Message::Picker(picker::Message::RawEvent {
                window: window_id,
                event,
            })
        })
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the frame subscription while the panel settles.
pub fn create_frame_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(FRAME_INTERVAL)
            .map(picker::Message::Frame)
            .map(Message::Picker)
    } else {
        Subscription::none()
    }
}
