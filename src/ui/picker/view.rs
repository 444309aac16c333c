// SPDX-License-Identifier: MPL-2.0
//! Picker layout: the curtain panel stacked above the thumbnail grid.

use super::component::{Message, GRID_SCROLLABLE_ID};
use crate::domain::curtain::Geometry;
use crate::domain::ui::GridColumns;
use crate::i18n::fluent::I18n;
use crate::media::{Asset, Library, LibraryAccess};
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::state::GridViewport;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{
    container, image, mouse_area, Column, Container, Id, Row, Scrollable, Space, Stack, Text,
};
use iced::{mouse, Background, Border, ContentFit, Element, Length, Theme};

/// Everything the layout needs, borrowed from the component state.
pub struct ViewModel<'a> {
    pub i18n: &'a I18n,
    pub geometry: Geometry,
    pub displayed_offset: f32,
    pub columns: GridColumns,
    pub library: Option<&'a LibraryAccess>,
    pub selected: Option<usize>,
    pub is_dragging: bool,
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    let panel = view_panel(&model);

    let body: Element<'_, Message> = match model.library {
        None => view_status(model.i18n.tr("picker-loading")),
        Some(LibraryAccess::Denied(path)) => view_status(model.i18n.tr_with_args(
            "picker-library-denied",
            &[("path", path.display().to_string().as_str())],
        )),
        Some(LibraryAccess::Missing(path)) => view_status(model.i18n.tr_with_args(
            "picker-library-missing",
            &[("path", path.display().to_string().as_str())],
        )),
        Some(LibraryAccess::Authorized(library)) if library.is_empty() => {
            view_status(model.i18n.tr("picker-empty-library"))
        }
        Some(LibraryAccess::Authorized(library)) => view_grid(&model, library),
    };

    let mut column = Column::new()
        .push(panel)
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(LibraryAccess::Authorized(library)) = model.library {
        column = column.push(view_footer(model.i18n, library));
    }

    column.into()
}

/// Visible part of the panel: its bottom `panel_height + offset` pixels.
fn view_panel<'a>(model: &ViewModel<'a>) -> Element<'a, Message> {
    let panel_height = model.geometry.panel_height();
    let visible_height = (panel_height + model.displayed_offset).max(0.0);

    let selected = match (model.library, model.selected) {
        (Some(LibraryAccess::Authorized(library)), Some(index)) => library.get(index),
        _ => None,
    };

    let preview: Element<'a, Message> = match selected {
        Some(asset) => view_preview(asset, panel_height),
        None => Container::new(
            Text::new(model.i18n.tr("picker-no-selection")).size(typography::BODY),
        )
        .width(Length::Fill)
        .height(Length::Fixed(panel_height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(|theme: &Theme| container::Style {
            background: Some(Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            ..Default::default()
        })
        .into(),
    };

    let handle = Container::new(Space::new())
        .width(Length::Fixed(sizing::HANDLE_WIDTH))
        .height(Length::Fixed(sizing::HANDLE_HEIGHT))
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::WHITE)),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let panel = Stack::new().push(preview).push(
        Container::new(handle)
            .width(Length::Fill)
            .height(Length::Fixed(panel_height))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom)
            .padding(spacing::XS),
    );

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fixed(visible_height))
        .align_y(Vertical::Bottom)
        .clip(true)
        .into()
}

fn view_preview<'a>(asset: &'a Asset, panel_height: f32) -> Element<'a, Message> {
    let picture = image(image::Handle::from_path(&asset.path))
        .content_fit(ContentFit::Cover)
        .width(Length::Fill)
        .height(Length::Fixed(panel_height));

    let caption = Container::new(Text::new(asset.file_name()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(crate::ui::design_tokens::scrim())),
            text_color: Some(palette::WHITE),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    Stack::new()
        .push(picture)
        .push(
            Container::new(caption)
                .width(Length::Fill)
                .height(Length::Fixed(panel_height))
                .align_x(Horizontal::Left)
                .align_y(Vertical::Top)
                .padding(spacing::SM),
        )
        .into()
}

fn view_grid<'a>(model: &ViewModel<'a>, library: &'a Library) -> Element<'a, Message> {
    let cell = model.columns.cell_size(model.geometry.panel_height());
    let thumb = (cell - sizing::GRID_GAP).max(0.0);

    let rows = library
        .assets()
        .chunks(model.columns.as_usize())
        .enumerate()
        .map(|(row_index, chunk)| -> Element<'a, Message> {
            let cells = chunk.iter().enumerate().map(|(column_index, asset)| {
                let index = row_index * model.columns.as_usize() + column_index;
                view_thumbnail(asset, index, thumb, model.selected == Some(index))
            });
            Row::with_children(cells).spacing(sizing::GRID_GAP).into()
        });

    let grid = Column::with_children(rows)
        .spacing(sizing::GRID_GAP)
        .width(Length::Fill);

    let scrollable = Scrollable::new(grid)
        .id(Id::new(GRID_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Vertical(Scrollbar::hidden()))
        .on_scroll(|viewport: Viewport| {
            Message::GridScrolled(GridViewport {
                offset_y: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
                content_height: viewport.content_bounds().height,
            })
        });

    let cursor_interaction = if model.is_dragging {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };

    mouse_area(scrollable)
        .interaction(cursor_interaction)
        .into()
}

fn view_thumbnail(asset: &Asset, index: usize, size: f32, selected: bool) -> Element<'_, Message> {
    let picture = image(image::Handle::from_path(&asset.path))
        .content_fit(ContentFit::Cover)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size));

    let framed = Container::new(picture).style(move |_theme: &Theme| container::Style {
        border: Border {
            color: palette::PRIMARY_500,
            width: if selected { border::WIDTH_MD } else { 0.0 },
            radius: 0.0.into(),
        },
        ..Default::default()
    });

    mouse_area(framed)
        .on_release(Message::ThumbnailReleased(index))
        .into()
}

fn view_status<'a>(message: String) -> Element<'a, Message> {
    Container::new(Text::new(message).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::MD)
        .into()
}

fn view_footer<'a>(i18n: &I18n, library: &Library) -> Element<'a, Message> {
    let location = i18n.tr_with_args(
        "picker-library-location",
        &[("path", library.directory().display().to_string().as_str())],
    );

    Row::new()
        .push(
            Text::new(location)
                .size(typography::CAPTION)
                .width(Length::Fill)
                .style(|_theme: &Theme| iced::widget::text::Style {
                    color: Some(palette::GRAY_400),
                }),
        )
        .push(Text::new(i18n.tr_count("picker-asset-count", library.len())).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .spacing(spacing::XS)
        .into()
}
