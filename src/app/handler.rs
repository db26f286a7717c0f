//! Input handling — maps key/mouse events to state mutations.
//!
//! View-state changes go through the four [`ViewState`] operations only;
//! everything else here is focus bookkeeping and the inert filter form.
//!
//! [`ViewState`]: crate::core::view::ViewState

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders};

use crate::config::Action;
use crate::core::filters::{FilterControl, FilterOutcome};
use crate::ui::{details, filter_panel, layout::point_in_rect, map};

use super::event::AppEvent;
use super::state::{AppState, Focus, Overlay};

/// Route one item from the event channel.  `None` means the terminal reader
/// has stopped, so there is no way left to drive the app and it quits.
pub fn handle_event(state: &mut AppState, event: Option<AppEvent>) {
    match event {
        Some(AppEvent::Key(k)) => handle_key(state, k),
        Some(AppEvent::Mouse(m)) => handle_mouse(state, m),
        Some(AppEvent::Resize(w, h)) => {
            tracing::debug!(width = w, height = h, "terminal resized");
        }
        None => {
            tracing::warn!("terminal event stream closed");
            state.should_quit = true;
        }
    }
}

/// Process a key event, dispatching based on overlay and focus.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of focus.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    if state.overlay == Overlay::Help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
            state.overlay = Overlay::None;
        }
        return;
    }

    match state.focus {
        Focus::Search => {
            handle_search_key(state, key);
            return;
        }
        Focus::Filters => {
            if handle_filters_key(state, key) {
                return;
            }
        }
        Focus::Map | Focus::Details => {
            // Number keys jump straight to a pin.
            if let KeyCode::Char(c @ '1'..='9') = key.code {
                if key.modifiers.is_empty() {
                    select_pin(state, (c as usize) - ('1' as usize));
                    return;
                }
            }
        }
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };
    handle_action(state, action);
}

fn handle_action(state: &mut AppState, action: Action) {
    state.status_message = None;
    match action {
        Action::Quit => state.should_quit = true,
        Action::OpenHelp => state.overlay = Overlay::Help,
        Action::ToggleSidebar => toggle_sidebar(state),
        Action::ToggleMobileFilters => toggle_mobile_filters(state),
        Action::NextPin => move_pin_cursor(state, true),
        Action::PrevPin => move_pin_cursor(state, false),
        Action::OpenPin => {
            state.focus = Focus::Map;
            select_pin(state, state.pin_cursor);
        }
        Action::CloseDetails => {
            let vis = state.visibility();
            if vis.details {
                close_details(state);
            } else if vis.mobile_filters {
                toggle_mobile_filters(state);
            }
        }
        Action::ScrollUp => {
            state.details_scroll = state.details_scroll.saturating_sub(1);
        }
        Action::ScrollDown => scroll_details_down(state),
        Action::FocusSearch => state.focus = Focus::Search,
        Action::CycleFocus => cycle_focus(state),
    }
}

// ── View-state operations ───────────────────────────────────────

fn toggle_sidebar(state: &mut AppState) {
    state.view.toggle_sidebar();
    if state.focus == Focus::Filters && !state.visibility().sidebar && !state.is_compact() {
        state.focus = Focus::Map;
    }
}

fn toggle_mobile_filters(state: &mut AppState) {
    state.view.toggle_mobile_filters();
    let vis = state.visibility();
    if vis.mobile_filters {
        state.focus = Focus::Filters;
    } else if state.focus == Focus::Filters && state.is_compact() {
        state.focus = Focus::Map;
    }
}

/// Select the place behind pin `index`.  Out-of-range indices (including
/// every index on an empty catalog) are ignored.
fn select_pin(state: &mut AppState, index: usize) {
    let Some(place) = state.catalog.get(index) else {
        return;
    };
    state.view.select_place(place);
    let image = place.image.clone();
    state.pin_cursor = index;
    state.details_scroll = 0;
    if let Some(path) = image {
        state.request_image(path);
    }
}

fn close_details(state: &mut AppState) {
    state.view.clear_selection();
    state.details_scroll = 0;
    if state.focus == Focus::Details {
        state.focus = Focus::Map;
    }
}

// ── Focus and cursor helpers ────────────────────────────────────

fn move_pin_cursor(state: &mut AppState, forward: bool) {
    let len = state.catalog.len();
    if len == 0 {
        return;
    }
    state.pin_cursor = if forward {
        (state.pin_cursor + 1) % len
    } else {
        (state.pin_cursor + len - 1) % len
    };
}

fn scroll_details_down(state: &mut AppState) {
    let Some(area) = state.layout().details_area else {
        return;
    };
    let Some(place) = state.view.selected(&state.catalog) else {
        return;
    };
    let max = details::max_scroll(place, area);
    state.details_scroll = (state.details_scroll + 1).min(max);
}

/// Cycle Map → Filters → Details → Search, skipping hidden regions.
fn cycle_focus(state: &mut AppState) {
    let vis = state.visibility();
    let order = [Focus::Map, Focus::Filters, Focus::Details, Focus::Search];
    let available = |f: &Focus| match f {
        Focus::Filters => vis.sidebar || vis.mobile_filters,
        Focus::Details => vis.details,
        Focus::Map | Focus::Search => true,
    };
    let start = order.iter().position(|f| *f == state.focus).unwrap_or(0);
    state.focus = (1..=order.len())
        .map(|step| order[(start + step) % order.len()])
        .find(|f| available(f))
        .unwrap_or(Focus::Map);
}

// ── Search box (text entry, never executed) ─────────────────────

fn handle_search_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => state.focus = Focus::Map,
        KeyCode::Tab => cycle_focus(state),
        KeyCode::Backspace => {
            state.search_query.pop();
        }
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            state.search_query.push(ch);
        }
        _ => {}
    }
}

// ── Filter panel (hardcoded keys) ───────────────────────────────

/// Returns `true` when the key was consumed by the panel.
fn handle_filters_key(state: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.filters.focus_prev(),
        KeyCode::Down | KeyCode::Char('j') => state.filters.focus_next(),
        KeyCode::Left | KeyCode::Char('h') => {
            state.filters.adjust(false);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.filters.adjust(true);
        }
        KeyCode::Enter | KeyCode::Char(' ') => activate_filter(state),
        KeyCode::Esc => {
            if state.visibility().mobile_filters {
                toggle_mobile_filters(state);
            }
            state.focus = Focus::Map;
        }
        _ => return false,
    }
    true
}

fn activate_filter(state: &mut AppState) {
    match state.filters.activate() {
        FilterOutcome::Changed => {
            tracing::debug!(filters = ?state.filters, "filter value changed");
        }
        FilterOutcome::Pressed(FilterControl::Apply) => {
            tracing::info!(filters = ?state.filters, "apply filters pressed");
            state.status_message = Some("Filtering is not available yet".to_string());
        }
        FilterOutcome::Pressed(control) => {
            tracing::debug!(?control, "environment button pressed");
        }
    }
}

// ── Mouse ───────────────────────────────────────────────────────

/// Process a mouse event.  Regions are tested topmost-first, mirroring the
/// drawing order.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let (col, row) = (mouse.column, mouse.row);
    let layout = state.layout();

    match mouse.kind {
        MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
            if layout.details_area.is_some_and(|a| point_in_rect(a, col, row)) {
                if mouse.kind == MouseEventKind::ScrollDown {
                    scroll_details_down(state);
                } else {
                    state.details_scroll = state.details_scroll.saturating_sub(1);
                }
            }
            return;
        }
        MouseEventKind::Down(MouseButton::Left) => {}
        _ => return,
    }

    if state.overlay == Overlay::Help {
        state.overlay = Overlay::None;
        return;
    }
    state.status_message = None;

    if let Some(area) = layout.details_area.filter(|a| point_in_rect(*a, col, row)) {
        if point_in_rect(details::details_geometry(area).close, col, row) {
            close_details(state);
        } else {
            state.focus = Focus::Details;
        }
        return;
    }

    if let Some(area) = layout.mobile_filters_area.filter(|a| point_in_rect(*a, col, row)) {
        if point_in_rect(filter_panel::close_button(area), col, row) {
            toggle_mobile_filters(state);
        } else {
            click_filter_panel(state, area, col, row);
        }
        return;
    }

    if layout.menu_button.is_some_and(|a| point_in_rect(a, col, row)) {
        toggle_mobile_filters(state);
        return;
    }

    if point_in_rect(layout.search_area, col, row) {
        state.focus = Focus::Search;
        return;
    }

    if layout.sidebar_toggle.is_some_and(|a| point_in_rect(a, col, row)) {
        toggle_sidebar(state);
        return;
    }

    if let Some(area) = layout.sidebar_area.filter(|a| point_in_rect(*a, col, row)) {
        click_filter_panel(state, area, col, row);
        return;
    }

    if point_in_rect(layout.map_area, col, row) {
        state.focus = Focus::Map;
        if let Some(index) = map::pin_at(map_inner(layout.map_area), &state.catalog, col, row) {
            select_pin(state, index);
        }
    }
}

fn map_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

fn click_filter_panel(state: &mut AppState, area: Rect, col: u16, row: u16) {
    state.focus = Focus::Filters;
    let Some((index, control)) = filter_panel::control_at(area, col, row) else {
        return;
    };
    state.filters.focused = index;
    if control == FilterControl::QuietLevel {
        // Notches are three columns apart.
        let rel = col - filter_panel::panel_inner(area).x;
        state.filters.set_quiet_level((rel / 3) as u8 + 1);
        return;
    }
    activate_filter(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::catalog::Catalog;

    fn app(catalog: Catalog, width: u16, height: u16) -> AppState {
        let mut state = AppState::new(catalog, AppConfig::default());
        state.terminal_area = Rect::new(0, 0, width, height);
        state
    }

    fn wide() -> AppState {
        app(Catalog::sample().unwrap(), 120, 40)
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(state: &mut AppState, col: u16, row: u16) {
        handle_mouse(
            state,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: col,
                row,
                modifiers: KeyModifiers::NONE,
            },
        );
    }

    #[test]
    fn sidebar_key_toggles_and_restores() {
        let mut state = wide();
        press(&mut state, KeyCode::Char('s'));
        assert!(!state.view.sidebar_open());
        press(&mut state, KeyCode::Char('s'));
        assert!(state.view.sidebar_open());
        assert!(!state.view.mobile_filters_open());
    }

    #[test]
    fn mobile_filter_key_leaves_other_slots_alone() {
        let mut state = wide();
        press(&mut state, KeyCode::Char('2'));
        press(&mut state, KeyCode::Char('f'));
        assert!(state.view.mobile_filters_open());
        assert!(state.view.sidebar_open());
        assert_eq!(state.view.selected_place(), Some(2));
    }

    #[test]
    fn enter_opens_cursor_pin_and_escape_closes() {
        let mut state = wide();
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.view.selected_place(), Some(2));
        assert!(state.visibility().details);

        press(&mut state, KeyCode::Esc);
        assert_eq!(state.view.selected_place(), None);
        assert!(state.view.sidebar_open());
        assert!(!state.view.mobile_filters_open());
    }

    #[test]
    fn pin_cursor_wraps() {
        let mut state = wide();
        press(&mut state, KeyCode::Left);
        assert_eq!(state.pin_cursor, 2);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.pin_cursor, 0);
    }

    #[test]
    fn digit_past_the_catalog_is_ignored() {
        let mut state = wide();
        press(&mut state, KeyCode::Char('9'));
        assert_eq!(state.view.selected_place(), None);
        press(&mut state, KeyCode::Char('3'));
        assert_eq!(state.view.selected_place(), Some(3));
    }

    #[test]
    fn empty_catalog_never_opens_details() {
        let mut state = app(Catalog::empty(), 120, 40);
        for code in [KeyCode::Enter, KeyCode::Char('1'), KeyCode::Right, KeyCode::Enter] {
            press(&mut state, code);
        }
        let map = map_inner(state.layout().map_area);
        for y in map.top()..map.bottom() {
            for x in (map.left()..map.right()).step_by(3) {
                click(&mut state, x, y);
            }
        }
        assert_eq!(state.view.selected_place(), None);
        assert!(!state.visibility().details);
    }

    #[test]
    fn clicking_a_pin_selects_its_place() {
        let mut state = wide();
        let layout = state.layout();
        let pins = map::pin_geometry(map_inner(layout.map_area), &state.catalog);
        let target = &pins[2];
        click(&mut state, target.marker.x + 1, target.marker.y);
        assert_eq!(state.view.selected_place(), Some(3));
        assert_eq!(state.focus, Focus::Map);
    }

    #[test]
    fn clicking_close_clears_selection() {
        let mut state = wide();
        press(&mut state, KeyCode::Char('1'));
        let area = state.layout().details_area.unwrap();
        let close = details::details_geometry(area).close;

        click(&mut state, close.x + 4, close.y + 3);
        assert_eq!(state.focus, Focus::Details);
        assert_eq!(state.view.selected_place(), Some(1));

        click(&mut state, close.x, close.y);
        assert_eq!(state.view.selected_place(), None);
        assert_eq!(state.focus, Focus::Map);
    }

    #[test]
    fn chevron_click_toggles_sidebar() {
        let mut state = wide();
        let toggle = state.layout().sidebar_toggle.unwrap();
        click(&mut state, toggle.x, toggle.y);
        assert!(!state.view.sidebar_open());
        // The chevron moves with the map edge.
        let toggle = state.layout().sidebar_toggle.unwrap();
        assert_eq!(toggle.x, 0);
        click(&mut state, toggle.x, toggle.y);
        assert!(state.view.sidebar_open());
    }

    #[test]
    fn compact_menu_button_and_overlay_close() {
        let mut state = app(Catalog::sample().unwrap(), 60, 30);
        let menu = state.layout().menu_button.unwrap();
        click(&mut state, menu.x + 1, menu.y + 1);
        assert!(state.view.mobile_filters_open());
        assert_eq!(state.focus, Focus::Filters);

        let overlay = state.layout().mobile_filters_area.unwrap();
        let close = filter_panel::close_button(overlay);
        click(&mut state, close.x, close.y);
        assert!(!state.view.mobile_filters_open());
        assert_eq!(state.focus, Focus::Map);
        assert!(state.view.sidebar_open());
    }

    #[test]
    fn escape_closes_details_before_overlay() {
        let mut state = app(Catalog::sample().unwrap(), 60, 30);
        press(&mut state, KeyCode::Char('f'));
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.focus, Focus::Search);
        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Char('1'));
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.view.selected_place(), None);
        assert!(state.view.mobile_filters_open());
        press(&mut state, KeyCode::Esc);
        assert!(!state.view.mobile_filters_open());
    }

    #[test]
    fn search_typing_does_not_touch_view_state() {
        let mut state = wide();
        press(&mut state, KeyCode::Char('/'));
        for c in "sfq1".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        assert_eq!(state.search_query, "sfq1");
        assert_eq!(state.view, crate::core::view::ViewState::new());
        assert!(!state.should_quit);
        press(&mut state, KeyCode::Backspace);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.search_query, "sfq");
        assert_eq!(state.focus, Focus::Map);
    }

    #[test]
    fn filter_panel_keys_edit_the_form_only() {
        let mut state = wide();
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.focus, Focus::Filters);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Enter);
        assert!(state.filters.wifi);

        press(&mut state, KeyCode::Up);
        press(&mut state, KeyCode::Up);
        press(&mut state, KeyCode::Enter);
        assert!(state.status_message.is_some());
        assert_eq!(state.view, crate::core::view::ViewState::new());
    }

    #[test]
    fn clicking_sidebar_controls() {
        let mut state = wide();
        let area = state.layout().sidebar_area.unwrap();
        let inner = filter_panel::panel_inner(area);
        click(&mut state, inner.x + 1, inner.y + 8);
        assert!(state.filters.open_now);
        click(&mut state, inner.x + 12, inner.y + 3);
        assert_eq!(state.filters.quiet_level, 5);
        assert_eq!(state.focus, Focus::Filters);
    }

    #[test]
    fn closing_sidebar_moves_focus_back_to_map() {
        let mut state = wide();
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.focus, Focus::Filters);
        press(&mut state, KeyCode::Char('s'));
        assert_eq!(state.focus, Focus::Map);
    }

    #[test]
    fn help_overlay_swallows_keys_until_closed() {
        let mut state = wide();
        press(&mut state, KeyCode::Char('?'));
        assert_eq!(state.overlay, Overlay::Help);
        press(&mut state, KeyCode::Char('s'));
        assert!(state.view.sidebar_open());
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.overlay, Overlay::None);
    }

    #[test]
    fn quit_keys() {
        let mut state = wide();
        handle_key(&mut state, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(state.should_quit);

        let mut state = wide();
        press(&mut state, KeyCode::Char('q'));
        assert!(state.should_quit);
    }

    #[test]
    fn details_scroll_is_bounded() {
        let mut state = wide();
        press(&mut state, KeyCode::Down);
        assert_eq!(state.details_scroll, 0);
        press(&mut state, KeyCode::Char('1'));
        for _ in 0..100 {
            press(&mut state, KeyCode::Down);
        }
        let area = state.layout().details_area.unwrap();
        let place = state.view.selected(&state.catalog).unwrap();
        assert_eq!(state.details_scroll, details::max_scroll(place, area));
        press(&mut state, KeyCode::Char('2'));
        assert_eq!(state.details_scroll, 0);
    }

    #[test]
    fn narrow_terminal_can_scroll_to_the_last_review() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut state = app(Catalog::sample().unwrap(), 24, 16);
        press(&mut state, KeyCode::Char('1'));
        for _ in 0..200 {
            press(&mut state, KeyCode::Down);
        }
        assert!(state.details_scroll > 0);

        let mut terminal = Terminal::new(TestBackend::new(24, 16)).unwrap();
        terminal.draw(|frame| crate::ui::render::draw(frame, &state)).unwrap();
        let buf = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..16u16 {
            for x in 0..24u16 {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        assert!(text.contains("James T."));
        assert!(text.contains("week."));
    }

    #[test]
    fn closed_event_stream_quits() {
        let mut state = wide();
        handle_event(&mut state, Some(AppEvent::Resize(100, 30)));
        assert!(!state.should_quit);
        handle_event(&mut state, None);
        assert!(state.should_quit);
    }
}
