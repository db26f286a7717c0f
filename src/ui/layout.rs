//! Layout helpers — split the terminal area into regions.
//!
//! The same [`AppLayout`] is used for drawing and for mouse hit-testing, so a
//! click always lands on what was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::config::AppConfig;
use crate::core::view::Visibility;

const HEADER_HEIGHT: u16 = 3;
const MENU_BUTTON_WIDTH: u16 = 5;
const BRAND_WIDTH: u16 = 12;
const USER_BUTTON_WIDTH: u16 = 5;
const SEARCH_MAX_WIDTH: u16 = 48;
/// The chevron sits on the map's left edge, one row below the top.
const TOGGLE_WIDTH: u16 = 3;

/// Every region of the browser for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header_area: Rect,
    pub menu_button: Option<Rect>,
    pub brand_area: Rect,
    pub search_area: Rect,
    pub user_button: Rect,
    /// Everything between the header and the status bar.
    pub body_area: Rect,
    pub sidebar_area: Option<Rect>,
    pub sidebar_toggle: Option<Rect>,
    pub map_area: Rect,
    /// Drawn over the left of the body.
    pub mobile_filters_area: Option<Rect>,
    /// Drawn over the right of the body.
    pub details_area: Option<Rect>,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn compute(area: Rect, vis: Visibility, config: &AppConfig) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(3),    // body (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);
        let (header_area, body_area, status_area) = (rows[0], rows[1], rows[2]);

        // ── header ────────────────────────────────────────────────
        let menu_width = if vis.menu_button { MENU_BUTTON_WIDTH } else { 0 };
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(menu_width),
                Constraint::Length(BRAND_WIDTH),
                Constraint::Min(0),
                Constraint::Length(USER_BUTTON_WIDTH),
            ])
            .split(header_area);
        let menu_button = vis.menu_button.then_some(cols[0]);
        let brand_area = cols[1];
        let user_button = cols[3];
        let search_slot = cols[2];
        let search_width = search_slot.width.min(SEARCH_MAX_WIDTH);
        let search_area = Rect::new(
            search_slot.x + (search_slot.width - search_width) / 2,
            search_slot.y,
            search_width,
            search_slot.height,
        );

        // ── body ──────────────────────────────────────────────────
        let sidebar_width = config.sidebar_width.min(body_area.width / 2);
        let (sidebar_area, map_area) = if vis.sidebar {
            let split = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
                .split(body_area);
            (Some(split[0]), split[1])
        } else {
            (None, body_area)
        };

        let sidebar_toggle = vis.sidebar_toggle.then(|| {
            Rect::new(
                map_area.x,
                map_area.y.saturating_add(1).min(map_area.bottom().saturating_sub(1)),
                TOGGLE_WIDTH.min(map_area.width),
                1u16.min(map_area.height),
            )
        });

        let mobile_filters_area = vis.mobile_filters.then(|| {
            Rect::new(
                body_area.x,
                body_area.y,
                config.sidebar_width.min(body_area.width),
                body_area.height,
            )
        });

        let details_area = vis.details.then(|| {
            // Full width in the compact layout, fixed width otherwise.
            let width = if vis.menu_button {
                body_area.width
            } else {
                config.detail_width.min(body_area.width)
            };
            Rect::new(
                body_area.right().saturating_sub(width),
                body_area.y,
                width,
                body_area.height,
            )
        });

        Self {
            header_area,
            menu_button,
            brand_area,
            search_area,
            user_button,
            body_area,
            sidebar_area,
            sidebar_toggle,
            map_area,
            mobile_filters_area,
            details_area,
            status_area,
        }
    }
}

/// Whether (`col`, `row`) falls inside `area`.
pub fn point_in_rect(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x
        && col < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
