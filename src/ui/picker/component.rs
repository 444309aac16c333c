// SPDX-License-Identifier: MPL-2.0
//! Picker component encapsulating state and update logic.
//!
//! The component turns raw pointer and touch events into curtain gestures,
//! keeps the grid's scroll position in step with the curtain, and owns the
//! library shown in the grid.

use crate::config::{defaults, SortOrder};
use crate::domain::curtain::{CurtainMachine, CurtainOutput, CurtainState, Geometry, GeometryError};
use crate::domain::ui::{GridColumns, SettleDuration, TopInset};
use crate::i18n::fluent::I18n;
use crate::media::{self, Asset, LibraryAccess};
use crate::ui::picker::presenter::PanelPresenter;
use crate::ui::picker::view;
use crate::ui::state::{GridViewport, PanState};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{event, keyboard, mouse, touch, window, Element, Point, Size, Task};
use std::path::PathBuf;
use std::time::Instant;

/// Identifier used for the thumbnail grid scrollable widget.
pub const GRID_SCROLLABLE_ID: &str = "picker-grid-scrollable";

/// Messages emitted by picker widgets and routed window events.
#[derive(Debug, Clone)]
pub enum Message {
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    GridScrolled(GridViewport),
    /// The pointer was released over the thumbnail at this index.
    ThumbnailReleased(usize),
    LibraryScanned(LibraryAccess),
    Rescan,
    /// Animation frame while the panel settles.
    Frame(Instant),
}

/// Side effects the application must handle after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    GestureBegan {
        scroll_offset: f32,
    },
    CurtainMoved {
        from: CurtainState,
        to: CurtainState,
    },
    GestureEnded {
        from: CurtainState,
        settled: CurtainState,
        cancelled: bool,
    },
    LibraryReady {
        count: usize,
    },
    LibraryUnavailable {
        key: &'static str,
        path: PathBuf,
    },
    /// The layout cannot host a working curtain; it keeps running clamped.
    GeometryRejected(GeometryError),
}

/// Startup values taken from the configuration and CLI.
#[derive(Debug, Clone)]
pub struct StateConfig {
    pub top_inset: TopInset,
    pub settle_duration: SettleDuration,
    pub columns: GridColumns,
    pub sort_order: SortOrder,
    pub directory: PathBuf,
    /// Window width before the first resize event arrives.
    pub initial_width: f32,
}

/// Environment passed down when rendering.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug)]
pub struct State {
    machine: CurtainMachine,
    presenter: PanelPresenter,
    pan: PanState,
    grid: GridViewport,
    /// Whether the last sample of the current gesture was consumed by the curtain.
    scroll_consumed: bool,
    columns: GridColumns,
    top_inset: TopInset,
    sort_order: SortOrder,
    directory: PathBuf,
    /// `None` while the first scan is running.
    library: Option<LibraryAccess>,
    selected: Option<usize>,
    cursor_position: Option<Point>,
    primary_finger: Option<touch::Finger>,
    geometry_error: Option<GeometryError>,
}

impl State {
    /// Creates the picker and starts scanning the library.
    pub fn new(config: StateConfig) -> (Self, Task<Message>) {
        let (geometry, geometry_error) =
            Geometry::resolve(config.top_inset.value(), config.initial_width, 0.0);

        let state = Self {
            machine: CurtainMachine::new(geometry),
            presenter: PanelPresenter::new(config.settle_duration),
            pan: PanState::default(),
            grid: GridViewport::default(),
            scroll_consumed: false,
            columns: config.columns,
            top_inset: config.top_inset,
            sort_order: config.sort_order,
            directory: config.directory,
            library: None,
            selected: None,
            cursor_position: None,
            primary_finger: None,
            geometry_error,
        };

        let task = state.scan_task();
        (state, task)
    }

    pub fn update(&mut self, message: Message) -> (Effect, Task<Message>) {
        let now = Instant::now();
        match message {
            Message::RawEvent { event, .. } => self.handle_raw_event(event, now),
            Message::GridScrolled(viewport) => {
                self.grid = viewport;
                (Effect::None, Task::none())
            }
            Message::ThumbnailReleased(index) => {
                self.select_if_clicked(index);
                (Effect::None, Task::none())
            }
            Message::LibraryScanned(access) => (self.handle_library(access), Task::none()),
            Message::Rescan => (Effect::None, self.scan_task()),
            Message::Frame(now) => {
                self.presenter.tick(now);
                (Effect::None, Task::none())
            }
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        view::view(view::ViewModel {
            i18n: env.i18n,
            geometry: self.machine.geometry(),
            displayed_offset: self.presenter.displayed(),
            columns: self.columns,
            library: self.library.as_ref(),
            selected: self.selected,
            is_dragging: self.pan.is_dragging,
        })
    }

    #[must_use]
    pub fn curtain_state(&self) -> CurtainState {
        self.machine.state()
    }

    #[must_use]
    pub fn curtain_output(&self) -> CurtainOutput {
        self.machine.last_output()
    }

    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.machine.geometry()
    }

    /// Configuration error of the current layout, if any.
    #[must_use]
    pub fn geometry_error(&self) -> Option<GeometryError> {
        self.geometry_error
    }

    #[must_use]
    pub fn displayed_offset(&self) -> f32 {
        self.presenter.displayed()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.presenter.is_animating()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pan.is_dragging
    }

    #[must_use]
    pub fn selected_asset(&self) -> Option<&Asset> {
        match (&self.library, self.selected) {
            (Some(LibraryAccess::Authorized(library)), Some(index)) => library.get(index),
            _ => None,
        }
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn scan_task(&self) -> Task<Message> {
        Task::perform(
            media::scan_library(self.directory.clone(), self.sort_order),
            Message::LibraryScanned,
        )
    }

    fn handle_library(&mut self, access: LibraryAccess) -> Effect {
        let effect = match &access {
            LibraryAccess::Authorized(library) => {
                self.selected = if library.is_empty() { None } else { Some(0) };
                Effect::LibraryReady {
                    count: library.len(),
                }
            }
            LibraryAccess::Denied(path) | LibraryAccess::Missing(path) => {
                self.selected = None;
                Effect::LibraryUnavailable {
                    key: access.warning_key().unwrap_or("notification-library-denied"),
                    path: path.clone(),
                }
            }
        };
        self.library = Some(access);
        effect
    }

    fn handle_raw_event(&mut self, event: event::Event, now: Instant) -> (Effect, Task<Message>) {
        match event {
            event::Event::Window(
                window::Event::Resized(size) | window::Event::Opened { size, .. },
            ) => (self.relayout(size, now), Task::none()),
            event::Event::Mouse(mouse_event) => match mouse_event {
                mouse::Event::ButtonPressed(mouse::Button::Left) => {
                    let effect = match self.cursor_position {
                        Some(position) => self.press(position),
                        None => Effect::None,
                    };
                    (effect, Task::none())
                }
                mouse::Event::ButtonReleased(mouse::Button::Left) => {
                    (self.release(false, now), Task::none())
                }
                mouse::Event::CursorMoved { position } => {
                    self.cursor_position = Some(position);
                    self.drag_to(position, now)
                }
                mouse::Event::CursorLeft => {
                    self.cursor_position = None;
                    (self.release(true, now), Task::none())
                }
                _ => (Effect::None, Task::none()),
            },
            event::Event::Touch(touch_event) => match touch_event {
                touch::Event::FingerPressed { id, position } => {
                    if self.primary_finger.is_some() {
                        return (Effect::None, Task::none());
                    }
                    let effect = self.press(position);
                    if self.pan.is_dragging {
                        self.primary_finger = Some(id);
                    }
                    (effect, Task::none())
                }
                touch::Event::FingerMoved { id, position } if self.primary_finger == Some(id) => {
                    self.drag_to(position, now)
                }
                touch::Event::FingerLifted { id, .. } if self.primary_finger == Some(id) => {
                    self.primary_finger = None;
                    (self.release(false, now), Task::none())
                }
                touch::Event::FingerLost { id, .. } if self.primary_finger == Some(id) => {
                    self.primary_finger = None;
                    (self.release(true, now), Task::none())
                }
                _ => (Effect::None, Task::none()),
            },
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                ..
            }) => match named {
                keyboard::key::Named::F5 => (Effect::None, self.scan_task()),
                keyboard::key::Named::Escape => (self.release(true, now), Task::none()),
                _ => (Effect::None, Task::none()),
            },
            _ => (Effect::None, Task::none()),
        }
    }

    /// The panel is square: its height follows the window width.
    fn relayout(&mut self, size: Size, now: Instant) -> Effect {
        let (geometry, error) = Geometry::resolve(self.top_inset.value(), size.width, 0.0);
        let output = self.machine.relayout(geometry);
        self.presenter.apply(&output, now);

        let newly_rejected = error.is_some() && self.geometry_error.is_none();
        self.geometry_error = error;
        match error {
            Some(err) if newly_rejected => Effect::GeometryRejected(err),
            _ => Effect::None,
        }
    }

    /// Top of the grid in window coordinates.
    fn grid_top(&self) -> f32 {
        self.machine.geometry().closed_bottom() + self.presenter.displayed()
    }

    fn press(&mut self, position: Point) -> Effect {
        if self.pan.is_dragging {
            return Effect::None;
        }
        if position.y < self.grid_top() {
            self.pan.forfeit_click();
            return Effect::None;
        }

        let scroll_offset = self.grid.offset_y;
        self.machine.on_gesture_begin(scroll_offset);
        self.pan.start(position, scroll_offset);
        self.scroll_consumed = false;
        Effect::GestureBegan { scroll_offset }
    }

    fn drag_to(&mut self, position: Point, now: Instant) -> (Effect, Task<Message>) {
        if !self.pan.is_dragging {
            return (Effect::None, Task::none());
        }
        self.pan.record(position);

        let Some(proposed) = self.pan.proposed_offset(position) else {
            return (Effect::None, Task::none());
        };

        let from = self.machine.state();
        let output = self.machine.on_sample(position.y, proposed);
        self.presenter.apply(&output, now);

        let task = if output.consumes_scroll {
            match output.scroll_override {
                Some(offset_y) => self.scroll_grid_to(offset_y),
                None => Task::none(),
            }
        } else {
            if self.scroll_consumed {
                // The curtain just let go: continue panning from here.
                self.pan.rebase(position, self.grid.offset_y);
            }
            let offset_y = self.pan.proposed_offset(position).unwrap_or(proposed);
            self.scroll_grid_to(offset_y)
        };
        self.scroll_consumed = output.consumes_scroll;

        let effect = if from == output.state {
            Effect::None
        } else {
            Effect::CurtainMoved {
                from,
                to: output.state,
            }
        };
        (effect, task)
    }

    fn release(&mut self, cancelled: bool, now: Instant) -> Effect {
        if !self.pan.is_dragging {
            return Effect::None;
        }
        self.pan.stop();
        self.scroll_consumed = false;

        let from = self.machine.state();
        let output = if cancelled {
            self.machine.on_gesture_cancel()
        } else {
            self.machine.on_gesture_end()
        };

        match output {
            Some(output) => {
                self.presenter.apply(&output, now);
                Effect::GestureEnded {
                    from,
                    settled: output.state,
                    cancelled,
                }
            }
            None => Effect::None,
        }
    }

    /// Thumbnail releases are delivered before the raw button release, so
    /// only the distance travelled so far decides between click and drag.
    fn select_if_clicked(&mut self, index: usize) {
        if self.pan.exceeded(defaults::CLICK_SLOP) {
            return;
        }
        if let Some(LibraryAccess::Authorized(library)) = &self.library {
            if index < library.len() {
                self.selected = Some(index);
            }
        }
    }

    fn scroll_grid_to(&mut self, offset_y: f32) -> Task<Message> {
        let clamped = self.grid.clamp(offset_y);
        if clamped == self.grid.offset_y {
            return Task::none();
        }
        self.grid.offset_y = clamped;

        operation::snap_to(
            Id::new(GRID_SCROLLABLE_ID),
            RelativeOffset {
                x: 0.0,
                y: self.grid.relative(clamped),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::Library;
    use crate::test_utils::assert_abs_diff_eq;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    fn config(width: f32) -> StateConfig {
        StateConfig {
            top_inset: TopInset::new(30.0),
            settle_duration: SettleDuration::default(),
            columns: GridColumns::new(2),
            sort_order: SortOrder::Alphabetical,
            directory: PathBuf::from("."),
            initial_width: width,
        }
    }

    fn picker() -> State {
        let (mut state, _task) = State::new(config(300.0));
        state.grid = GridViewport {
            offset_y: 0.0,
            viewport_height: 400.0,
            content_height: 1200.0,
        };
        state
    }

    fn library_with(names: &[&str]) -> (TempDir, LibraryAccess) {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        for name in names {
            fs::write(dir.path().join(name), b"fake image data").expect("failed to write file");
        }
        let access = Library::scan(dir.path(), SortOrder::Alphabetical);
        (dir, access)
    }

    fn mouse(state: &mut State, event: mouse::Event, now: Instant) -> Effect {
        state.handle_raw_event(event::Event::Mouse(event), now).0
    }

    fn move_to(state: &mut State, x: f32, y: f32, now: Instant) -> Effect {
        mouse(
            state,
            mouse::Event::CursorMoved {
                position: Point::new(x, y),
            },
            now,
        )
    }

    fn press(state: &mut State, now: Instant) -> Effect {
        mouse(state, mouse::Event::ButtonPressed(mouse::Button::Left), now)
    }

    fn release(state: &mut State, now: Instant) -> Effect {
        mouse(state, mouse::Event::ButtonReleased(mouse::Button::Left), now)
    }

    #[test]
    fn pulling_the_grid_up_opens_the_curtain() {
        let now = Instant::now();
        let mut state = picker();

        move_to(&mut state, 100.0, 320.0, now);
        assert_eq!(press(&mut state, now), Effect::GestureBegan { scroll_offset: 0.0 });

        let effect = move_to(&mut state, 100.0, 250.0, now);
        assert_eq!(
            effect,
            Effect::CurtainMoved {
                from: CurtainState::Closed,
                to: CurtainState::Opening
            }
        );
        assert_abs_diff_eq!(state.displayed_offset(), -50.0);
        // Scroll stays frozen at the anchor while the curtain moves
        assert_abs_diff_eq!(state.grid.offset_y, 0.0);

        move_to(&mut state, 100.0, 0.0, now);
        assert_abs_diff_eq!(state.displayed_offset(), -270.0);

        let effect = release(&mut state, now);
        assert_eq!(
            effect,
            Effect::GestureEnded {
                from: CurtainState::Opening,
                settled: CurtainState::Opened,
                cancelled: false
            }
        );
        assert_eq!(state.curtain_state(), CurtainState::Opened);
        assert!(!state.is_dragging());
    }

    #[test]
    fn pulling_down_at_the_top_closes_the_curtain() {
        let now = Instant::now();
        let mut state = picker();
        move_to(&mut state, 100.0, 320.0, now);
        press(&mut state, now);
        move_to(&mut state, 100.0, 0.0, now);
        release(&mut state, now);

        move_to(&mut state, 100.0, 100.0, now);
        press(&mut state, now);
        let effect = move_to(&mut state, 100.0, 130.0, now);
        assert_eq!(
            effect,
            Effect::CurtainMoved {
                from: CurtainState::Opened,
                to: CurtainState::Closing
            }
        );
        assert_abs_diff_eq!(state.displayed_offset(), -270.0);

        move_to(&mut state, 100.0, 230.0, now);
        assert_abs_diff_eq!(state.displayed_offset(), -170.0);

        release(&mut state, now);
        assert_eq!(state.curtain_state(), CurtainState::Closed);
        assert!(state.is_animating());

        state.update(Message::Frame(now + Duration::from_millis(250)));
        assert_abs_diff_eq!(state.displayed_offset(), 0.0);
        assert!(!state.is_animating());
    }

    #[test]
    fn dragging_the_grid_scrolls_when_curtain_stays_closed() {
        let now = Instant::now();
        let mut state = picker();
        state.grid.offset_y = 100.0;

        move_to(&mut state, 100.0, 700.0, now);
        press(&mut state, now);
        let effect = move_to(&mut state, 100.0, 640.0, now);

        assert_eq!(effect, Effect::None);
        assert_eq!(state.curtain_state(), CurtainState::Closed);
        assert_abs_diff_eq!(state.grid.offset_y, 160.0);
    }

    #[test]
    fn press_on_the_panel_does_not_start_a_gesture() {
        let now = Instant::now();
        let mut state = picker();
        move_to(&mut state, 100.0, 120.0, now);
        assert_eq!(press(&mut state, now), Effect::None);
        assert!(!state.is_dragging());
    }

    #[test]
    fn cursor_leaving_cancels_like_a_release() {
        let now = Instant::now();
        let mut state = picker();
        move_to(&mut state, 100.0, 320.0, now);
        press(&mut state, now);
        move_to(&mut state, 100.0, 200.0, now);

        let effect = mouse(&mut state, mouse::Event::CursorLeft, now);
        assert_eq!(
            effect,
            Effect::GestureEnded {
                from: CurtainState::Opening,
                settled: CurtainState::Opened,
                cancelled: true
            }
        );
    }

    #[test]
    fn touch_follows_the_first_finger_only() {
        let now = Instant::now();
        let mut state = picker();
        let first = touch::Finger(1);
        let second = touch::Finger(2);

        let touch_event = event::Event::Touch;
        state.handle_raw_event(
            touch_event(touch::Event::FingerPressed {
                id: first,
                position: Point::new(50.0, 320.0),
            }),
            now,
        );
        state.handle_raw_event(
            touch_event(touch::Event::FingerPressed {
                id: second,
                position: Point::new(150.0, 500.0),
            }),
            now,
        );
        state.handle_raw_event(
            touch_event(touch::Event::FingerMoved {
                id: second,
                position: Point::new(150.0, 100.0),
            }),
            now,
        );
        assert_eq!(state.curtain_state(), CurtainState::Closed);

        state.handle_raw_event(
            touch_event(touch::Event::FingerMoved {
                id: first,
                position: Point::new(50.0, 280.0),
            }),
            now,
        );
        assert_eq!(state.curtain_state(), CurtainState::Opening);

        state.handle_raw_event(
            touch_event(touch::Event::FingerLost {
                id: first,
                position: Point::new(50.0, 280.0),
            }),
            now,
        );
        assert_eq!(state.curtain_state(), CurtainState::Opened);
    }

    #[test]
    fn click_selects_but_drag_does_not() {
        let now = Instant::now();
        let mut state = picker();
        let (_dir, access) = library_with(&["a.png", "b.png", "c.png"]);
        assert_eq!(state.handle_library(access), Effect::LibraryReady { count: 3 });
        assert_eq!(state.selected_index(), Some(0));

        // The thumbnail's release message is handled before the raw release
        move_to(&mut state, 200.0, 350.0, now);
        press(&mut state, now);
        state.update(Message::ThumbnailReleased(1));
        release(&mut state, now);
        assert_eq!(state.selected_index(), Some(1));
        assert_eq!(
            state.selected_asset().map(Asset::file_name),
            Some("b.png")
        );

        move_to(&mut state, 100.0, 500.0, now);
        press(&mut state, now);
        move_to(&mut state, 100.0, 460.0, now);
        state.update(Message::ThumbnailReleased(2));
        release(&mut state, now);
        assert_eq!(state.selected_index(), Some(1));
    }

    #[test]
    fn thumbnail_release_after_raw_release_uses_same_rule() {
        let now = Instant::now();
        let mut state = picker();
        let (_dir, access) = library_with(&["a.png", "b.png", "c.png"]);
        state.handle_library(access);

        move_to(&mut state, 200.0, 350.0, now);
        press(&mut state, now);
        release(&mut state, now);
        state.update(Message::ThumbnailReleased(2));
        assert_eq!(state.selected_index(), Some(2));

        move_to(&mut state, 100.0, 500.0, now);
        press(&mut state, now);
        move_to(&mut state, 100.0, 440.0, now);
        release(&mut state, now);
        state.update(Message::ThumbnailReleased(0));
        assert_eq!(state.selected_index(), Some(2));
    }

    #[test]
    fn press_on_the_panel_never_selects_a_thumbnail() {
        let now = Instant::now();
        let mut state = picker();
        let (_dir, access) = library_with(&["a.png", "b.png"]);
        state.handle_library(access);

        move_to(&mut state, 100.0, 120.0, now);
        press(&mut state, now);
        move_to(&mut state, 100.0, 350.0, now);
        state.update(Message::ThumbnailReleased(1));
        release(&mut state, now);
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn reversal_to_closed_settles_animated() {
        let now = Instant::now();
        let mut state = picker();
        move_to(&mut state, 100.0, 320.0, now);
        press(&mut state, now);
        move_to(&mut state, 100.0, 150.0, now);
        assert_eq!(state.curtain_state(), CurtainState::Opening);
        assert_abs_diff_eq!(state.displayed_offset(), -150.0);

        let effect = move_to(&mut state, 100.0, 310.0, now);
        assert_eq!(
            effect,
            Effect::CurtainMoved {
                from: CurtainState::Opening,
                to: CurtainState::Closed
            }
        );
        assert!(state.is_animating());
        assert_abs_diff_eq!(state.displayed_offset(), -150.0);

        // Further samples below the panel do not restart the settle
        let later = now + Duration::from_millis(100);
        move_to(&mut state, 100.0, 330.0, later);
        assert!(state.is_animating());

        state.update(Message::Frame(now + Duration::from_millis(250)));
        assert_abs_diff_eq!(state.displayed_offset(), 0.0);
        assert!(!state.is_animating());
        assert_eq!(state.curtain_state(), CurtainState::Closed);
    }

    #[test]
    fn release_from_partial_opening_settles_animated() {
        let now = Instant::now();
        let mut state = picker();
        move_to(&mut state, 100.0, 320.0, now);
        press(&mut state, now);
        move_to(&mut state, 100.0, 250.0, now);
        assert_abs_diff_eq!(state.displayed_offset(), -50.0);
        assert!(!state.is_animating());

        release(&mut state, now);
        assert_eq!(state.curtain_state(), CurtainState::Opened);
        assert!(state.is_animating());
        assert_abs_diff_eq!(state.displayed_offset(), -50.0);

        state.update(Message::Frame(now + Duration::from_millis(250)));
        assert_abs_diff_eq!(state.displayed_offset(), -270.0);
        assert!(!state.is_animating());
    }

    #[test]
    fn unavailable_library_clears_selection() {
        let mut state = picker();
        let missing = PathBuf::from("/nonexistent/picker/library");
        let effect = state.handle_library(LibraryAccess::Missing(missing.clone()));
        assert_eq!(
            effect,
            Effect::LibraryUnavailable {
                key: "notification-library-missing",
                path: missing
            }
        );
        assert!(state.selected_asset().is_none());
    }

    #[test]
    fn narrow_window_is_rejected_once() {
        let now = Instant::now();
        let mut state = picker();
        let resize = |width| event::Event::Window(window::Event::Resized(Size::new(width, 600.0)));

        let (effect, _) = state.handle_raw_event(resize(20.0), now);
        assert!(matches!(
            effect,
            Effect::GeometryRejected(GeometryError::PanelNotTallerThanInset { .. })
        ));
        assert_abs_diff_eq!(state.geometry().travel(), 0.0);

        let (effect, _) = state.handle_raw_event(resize(25.0), now);
        assert_eq!(effect, Effect::None);

        let (effect, _) = state.handle_raw_event(resize(400.0), now);
        assert_eq!(effect, Effect::None);
        assert!(state.geometry_error().is_none());
        assert_abs_diff_eq!(state.geometry().closed_bottom(), 400.0);
    }

    #[test]
    fn resize_while_opened_keeps_panel_pinned() {
        let now = Instant::now();
        let mut state = picker();
        move_to(&mut state, 100.0, 320.0, now);
        press(&mut state, now);
        move_to(&mut state, 100.0, 0.0, now);
        release(&mut state, now);

        state.handle_raw_event(
            event::Event::Window(window::Event::Resized(Size::new(500.0, 800.0))),
            now,
        );
        assert_abs_diff_eq!(state.curtain_output().panel_offset, -470.0);
        state.update(Message::Frame(now + Duration::from_secs(1)));
        assert_abs_diff_eq!(state.displayed_offset(), -470.0);
    }
}
