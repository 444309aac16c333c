// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The picker fills the window; toasts float above it.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Toast};
use crate::ui::picker;
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub picker: &'a picker::State,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let picker_view = ctx
        .picker
        .view(picker::ViewEnv { i18n: ctx.i18n })
        .map(Message::Picker);

    let base = Container::new(picker_view)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(base)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
