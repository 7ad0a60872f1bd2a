//! Dashboard UI state and input handling.
//!
//! Pipeline state lives in immutable `DashboardState` snapshots; everything
//! here is screen-local (search focus, scroll offset, popup, last layout).

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use shelfview_engine::{Catalog, DashboardAction, DashboardState};
use shelfview_types::SortField;
use tracing::{debug, info, warn};

use super::popup::{Hover, PopupState};
use super::{DashboardSettings, TuiEvent};
use crate::presentation::presenters::present_dashboard;
use crate::presentation::view_models::DashboardViewModel;
use crate::presentation::views::tui::{DashboardLayout, Hit};

#[derive(Debug, Clone)]
pub(crate) enum Phase {
    Loading,
    Ready {
        catalog: Catalog,
        state: DashboardState,
    },
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

pub(crate) struct App {
    pub settings: DashboardSettings,
    pub phase: Phase,
    /// Search box contents as typed
    pub search_input: String,
    pub search_focused: bool,
    pub table_offset: usize,
    pub popup: PopupState,
    layout: Option<DashboardLayout>,
    popup_area: Option<Rect>,
}

impl App {
    pub fn new(settings: DashboardSettings) -> Self {
        Self {
            settings,
            phase: Phase::Loading,
            search_input: String::new(),
            search_focused: false,
            table_offset: 0,
            popup: PopupState::default(),
            layout: None,
            popup_area: None,
        }
    }

    pub fn on_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Loaded(catalog) => {
                info!(products = catalog.len(), "catalog loaded");
                let state = DashboardState::new(self.settings.page_size);
                self.phase = Phase::Ready { catalog, state };
            }
            TuiEvent::Failed(reason) => {
                warn!(%reason, "catalog unavailable");
                self.phase = Phase::Failed(reason);
            }
        }
    }

    pub fn view_model(&self) -> Option<DashboardViewModel> {
        let Phase::Ready { catalog, state } = &self.phase else {
            return None;
        };
        let view = state.project(catalog.products());
        Some(present_dashboard(
            &view,
            &self.search_input,
            state.sort,
            &self.settings.choices,
            &self.settings.currency,
        ))
    }

    /// Geometry of the last drawn frame, used for mouse hit-testing
    pub fn remember_frame(&mut self, layout: Option<DashboardLayout>, popup_area: Option<Rect>) {
        if let Some(layout) = &layout {
            self.table_offset = layout.table.offset;
        }
        self.layout = layout;
        self.popup_area = popup_area;
    }

    pub fn tick(&mut self, now: Instant) {
        self.popup.tick(now);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return Flow::Quit;
        }

        let Phase::Ready { .. } = self.phase else {
            return match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Flow::Quit,
                _ => Flow::Continue,
            };
        };

        if self.search_focused {
            self.handle_search_key(key, ctrl);
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('u') if ctrl => self.clear_search(),
            KeyCode::Char('/') => self.search_focused = true,
            KeyCode::Char('t') => self.dispatch(DashboardAction::ToggleSort(SortField::Title)),
            KeyCode::Char('p') => self.dispatch(DashboardAction::ToggleSort(SortField::Price)),
            KeyCode::Left | KeyCode::Char('h') => self.dispatch(DashboardAction::PreviousPage),
            KeyCode::Right | KeyCode::Char('l') => self.dispatch(DashboardAction::NextPage),
            KeyCode::Home => self.dispatch(DashboardAction::FirstPage),
            KeyCode::End => self.dispatch(DashboardAction::LastPage),
            KeyCode::Char('+') | KeyCode::Char(']') => self.step_page_size(true),
            KeyCode::Char('-') | KeyCode::Char('[') => self.step_page_size(false),
            KeyCode::Down | KeyCode::Char('j') => self.scroll(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll(-1),
            _ => {}
        }
        Flow::Continue
    }

    fn handle_search_key(&mut self, key: KeyEvent, ctrl: bool) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.search_focused = false,
            KeyCode::Char('u') if ctrl => self.clear_search(),
            KeyCode::Backspace => {
                if self.search_input.pop().is_some() {
                    self.dispatch(DashboardAction::Search(self.search_input.clone()));
                }
            }
            KeyCode::Char(c) if !ctrl => {
                self.search_input.push(c);
                self.dispatch(DashboardAction::Search(self.search_input.clone()));
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let position = Position::new(mouse.column, mouse.row);
        let on_popup = self
            .popup_area
            .is_some_and(|area| area.contains(position));
        let hit = match &self.layout {
            Some(layout) => layout.hit(position),
            None => return,
        };

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let hover = match hit {
                    _ if on_popup => Hover::Popup,
                    Hit::Hint { row, anchor } => Hover::Hint { row, anchor },
                    _ => Hover::Outside,
                };
                self.popup.pointer_moved(hover, now);
            }
            MouseEventKind::Down(MouseButton::Left) if !on_popup => self.click(hit, now),
            MouseEventKind::ScrollDown => self.scroll(1),
            MouseEventKind::ScrollUp => self.scroll(-1),
            _ => {}
        }
    }

    fn click(&mut self, hit: Hit, now: Instant) {
        self.search_focused = matches!(hit, Hit::Search | Hit::ClearSearch);

        match hit {
            Hit::ClearSearch => self.clear_search(),
            Hit::SortHeader(field) => self.dispatch(DashboardAction::ToggleSort(field)),
            Hit::Hint { row, anchor } => self.popup.pointer_moved(Hover::Hint { row, anchor }, now),
            Hit::Control(index) => {
                let action = self
                    .layout
                    .as_ref()
                    .and_then(|layout| layout.pagination.controls.get(index))
                    .and_then(|control| control.action.clone());
                if let Some(action) = action {
                    self.dispatch(action);
                }
            }
            Hit::Search | Hit::Nothing => {}
        }
    }

    fn clear_search(&mut self) {
        self.search_input.clear();
        self.dispatch(DashboardAction::ClearSearch);
    }

    fn step_page_size(&mut self, larger: bool) {
        let Phase::Ready { state, .. } = &self.phase else {
            return;
        };
        let current = state.page.page_size;
        let size = if larger {
            self.settings.choices.next_after(current)
        } else {
            self.settings.choices.previous_before(current)
        };
        self.dispatch(DashboardAction::SetPageSize(size));
    }

    fn scroll(&mut self, delta: isize) {
        let offset = self.table_offset.saturating_add_signed(delta);
        if offset != self.table_offset {
            self.table_offset = offset;
            self.popup.hide();
        }
    }

    fn dispatch(&mut self, action: DashboardAction) {
        let Phase::Ready { catalog, state } = &mut self.phase else {
            return;
        };

        let next = state.apply(action, catalog.products());
        if next != *state {
            debug!(?next, "dashboard state changed");
            *state = next;
            self.table_offset = 0;
            self.popup.hide();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::views::tui::ControlKind;
    use crossterm::event::KeyEventState;
    use shelfview_testing::{numbered_products, sample_products};
    use shelfview_types::{PageSize, PageSizeChoices, SortState};

    fn app_with(products: Vec<shelfview_types::Product>) -> App {
        let mut app = App::new(DashboardSettings {
            page_size: PageSize::new(5).unwrap(),
            choices: PageSizeChoices::new(&[5, 10, 20]).unwrap(),
            currency: "VND".to_string(),
            source: "test".to_string(),
        });
        app.on_event(TuiEvent::Loaded(Catalog::new(products)));
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn state(app: &App) -> &DashboardState {
        match &app.phase {
            Phase::Ready { state, .. } => state,
            other => panic!("not ready: {:?}", other),
        }
    }

    fn lay_out(app: &mut App) {
        let vm = app.view_model().unwrap();
        let layout = DashboardLayout::compute(Rect::new(0, 0, 120, 30), &vm, app.table_offset);
        app.remember_frame(Some(layout), None);
    }

    fn mouse(kind: MouseEventKind, position: Position) -> MouseEvent {
        MouseEvent {
            kind,
            column: position.x,
            row: position.y,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_loading_screen_only_quits() {
        let mut app = App::new(DashboardSettings {
            page_size: PageSize::new(5).unwrap(),
            choices: PageSizeChoices::new(&[5]).unwrap(),
            currency: "VND".to_string(),
            source: "test".to_string(),
        });
        assert_eq!(app.handle_key(key(KeyCode::Char('t'))), Flow::Continue);
        assert!(app.view_model().is_none());
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Flow::Quit);
    }

    #[test]
    fn test_failure_is_persistent() {
        let mut app = app_with(Vec::new());
        app.on_event(TuiEvent::Failed("HTTP 500".to_string()));
        assert!(matches!(&app.phase, Phase::Failed(reason) if reason == "HTTP 500"));
        assert_eq!(app.handle_key(key(KeyCode::Right)), Flow::Continue);
        assert!(matches!(app.phase, Phase::Failed(_)));
    }

    #[test]
    fn test_typing_filters_and_resets_page() {
        let mut app = app_with(sample_products());
        app.handle_key(key(KeyCode::Right));
        assert_eq!(state(&app).page.current_page, 2);

        app.handle_key(key(KeyCode::Char('/')));
        for c in "Sleek".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(state(&app).search, "sleek");
        assert_eq!(state(&app).page.current_page, 1);
        assert_eq!(app.view_model().unwrap().rows.len(), 2);

        // q is text while the search box has focus
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Flow::Continue);
        assert_eq!(app.search_input, "Sleekq");

        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.search_focused);
        assert_eq!(app.search_input, "Sleek");

        app.handle_key(ctrl('u'));
        assert_eq!(state(&app).search, "");
        assert!(app.search_input.is_empty());
    }

    #[test]
    fn test_sort_keys_cycle() {
        let mut app = app_with(sample_products());
        app.handle_key(key(KeyCode::Char('p')));
        assert_eq!(state(&app).sort, SortState::ascending(SortField::Price));
        app.handle_key(key(KeyCode::Char('p')));
        assert_eq!(state(&app).sort, SortState::descending(SortField::Price));
        app.handle_key(key(KeyCode::Char('p')));
        assert_eq!(state(&app).sort, SortState::Unsorted);
        app.handle_key(key(KeyCode::Char('t')));
        assert_eq!(state(&app).sort, SortState::ascending(SortField::Title));
    }

    #[test]
    fn test_page_keys_clamp_and_size_keys_step() {
        let mut app = app_with(numbered_products(12));
        app.handle_key(key(KeyCode::End));
        assert_eq!(state(&app).page.current_page, 3);
        app.handle_key(key(KeyCode::Char('l')));
        assert_eq!(state(&app).page.current_page, 3);
        app.handle_key(key(KeyCode::Home));
        assert_eq!(state(&app).page.current_page, 1);
        app.handle_key(key(KeyCode::Left));
        assert_eq!(state(&app).page.current_page, 1);

        app.handle_key(key(KeyCode::End));
        app.handle_key(key(KeyCode::Char('+')));
        assert_eq!(state(&app).page.page_size.get(), 10);
        assert_eq!(state(&app).page.current_page, 1);
        app.handle_key(key(KeyCode::Char('-')));
        app.handle_key(key(KeyCode::Char('[')));
        assert_eq!(state(&app).page.page_size.get(), 5);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = app_with(numbered_products(12));
        let mut release = key(KeyCode::Right);
        release.kind = KeyEventKind::Release;
        release.state = KeyEventState::NONE;
        app.handle_key(release);
        assert_eq!(state(&app).page.current_page, 1);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut app = app_with(sample_products());
        app.handle_key(key(KeyCode::Char('/')));
        assert_eq!(app.handle_key(ctrl('c')), Flow::Quit);
    }

    #[test]
    fn test_clicks_on_headers_and_page_buttons() {
        let mut app = app_with(numbered_products(12));
        lay_out(&mut app);

        let layout = app.layout.clone().unwrap();
        let price = layout.table.columns[3];
        app.handle_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), Position::new(price.x, price.y)),
            Instant::now(),
        );
        assert_eq!(state(&app).sort, SortState::ascending(SortField::Price));

        lay_out(&mut app);
        let layout = app.layout.clone().unwrap();
        let page_three = layout
            .pagination
            .controls
            .iter()
            .find(|control| control.kind == ControlKind::Page(3))
            .unwrap()
            .area;
        app.handle_mouse(
            mouse(
                MouseEventKind::Down(MouseButton::Left),
                Position::new(page_three.x, page_three.y),
            ),
            Instant::now(),
        );
        assert_eq!(state(&app).page.current_page, 3);
    }

    #[test]
    fn test_hover_shows_popup_and_page_change_hides_it() {
        let mut app = app_with(numbered_products(12));
        lay_out(&mut app);
        let layout = app.layout.clone().unwrap();
        let hint = layout
            .table
            .cell(crate::presentation::views::tui::Column::Hint, layout.table.rows[2].area);

        let now = Instant::now();
        app.handle_mouse(
            mouse(MouseEventKind::Moved, Position::new(hint.x, hint.y)),
            now,
        );
        assert_eq!(app.popup.shown().map(|shown| shown.row), Some(2));

        app.handle_key(key(KeyCode::Right));
        assert!(app.popup.shown().is_none());
    }

    #[test]
    fn test_mouse_is_ignored_before_first_frame() {
        let mut app = app_with(sample_products());
        app.handle_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), Position::new(3, 3)),
            Instant::now(),
        );
        assert_eq!(state(&app).sort, SortState::Unsorted);
    }
}
