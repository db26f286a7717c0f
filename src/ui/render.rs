//! Frame composition — draws every region from an `AppState` snapshot.
//!
//! Drawing order matters: the map goes first, then the sidebar, then the
//! overlays that slide over it (compact filters, details, help).

use ratatui::{
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::state::{AppState, Focus, Overlay};
use crate::ui::{
    details::DetailsWidget,
    filter_panel::FilterPanel,
    header::HeaderWidget,
    map::MapWidget,
    popup::HelpPopup,
    theme::Theme,
};

pub fn draw(frame: &mut Frame, state: &AppState) {
    let layout = state.layout();

    frame.render_widget(
        HeaderWidget {
            layout: &layout,
            query: &state.search_query,
            search_focused: state.focus == Focus::Search,
        },
        layout.header_area,
    );

    let map_block = Block::default()
        .title(format!(" Quiet places nearby · {} ", state.catalog.len()))
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(if state.focus == Focus::Map {
            Theme::focused_border_style()
        } else {
            Theme::border_style()
        });
    let backdrop = state
        .map_image
        .as_ref()
        .and_then(|p| state.image_cache.get(p))
        .cloned();
    frame.render_widget(
        MapWidget {
            block: map_block,
            catalog: &state.catalog,
            selected: state.view.selected_place(),
            cursor: (state.focus == Focus::Map && !state.catalog.is_empty())
                .then_some(state.pin_cursor),
            backdrop,
        },
        layout.map_area,
    );

    if let Some(area) = layout.sidebar_area {
        frame.render_widget(
            FilterPanel {
                form: &state.filters,
                has_focus: state.focus == Focus::Filters,
                closable: false,
            },
            area,
        );
    }

    if let Some(toggle) = layout.sidebar_toggle {
        let chevron = if state.view.sidebar_open() { "‹" } else { "›" };
        frame.render_widget(
            Paragraph::new(format!(" {chevron} ")).style(Theme::primary_button_style()),
            toggle,
        );
    }

    if let Some(area) = layout.mobile_filters_area {
        frame.render_widget(
            FilterPanel {
                form: &state.filters,
                has_focus: state.focus == Focus::Filters,
                closable: true,
            },
            area,
        );
    }

    if let (Some(area), Some(place)) = (layout.details_area, state.view.selected(&state.catalog)) {
        let image = place
            .image
            .as_ref()
            .and_then(|p| state.image_cache.get(p))
            .cloned();
        frame.render_widget(
            DetailsWidget {
                place,
                image,
                scroll: state.details_scroll,
                has_focus: state.focus == Focus::Details,
            },
            area,
        );
    }

    let hint = state.config.status_bar_hint();
    let status_text = state.status_message.as_deref().unwrap_or(&hint);
    frame.render_widget(
        Paragraph::new(status_text).style(Theme::status_bar_style()),
        layout.status_area,
    );

    if state.overlay == Overlay::Help {
        frame.render_widget(HelpPopup { config: &state.config }, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::config::AppConfig;
    use crate::core::catalog::Catalog;

    fn render(state: &mut AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        state.terminal_area = ratatui::layout::Rect::new(0, 0, width, height);
        terminal.draw(|frame| draw(frame, state)).unwrap();
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn first_load_shows_sidebar_and_pins_but_no_details() {
        let mut state = AppState::new(Catalog::sample().unwrap(), AppConfig::default());
        let text = render(&mut state, 120, 40);
        assert!(text.contains("FindMe"));
        assert!(text.contains("Wi-Fi Available"));
        assert!(text.contains("Serenity Garden"));
        assert!(text.contains("Lakeside Retreat"));
        assert!(!text.contains("About"));
    }

    #[test]
    fn selecting_a_place_opens_details() {
        let mut state = AppState::new(Catalog::sample().unwrap(), AppConfig::default());
        let place = state.catalog.get(2).unwrap().clone();
        state.view.select_place(&place);
        let text = render(&mut state, 120, 40);
        assert!(text.contains("About"));
        assert!(text.contains("36 reviews"));
    }

    #[test]
    fn compact_layout_hides_sidebar_until_overlay_opens() {
        let mut state = AppState::new(Catalog::sample().unwrap(), AppConfig::default());
        let text = render(&mut state, 60, 30);
        assert!(text.contains("☰"));
        assert!(!text.contains("Wi-Fi Available"));

        state.view.toggle_mobile_filters();
        let text = render(&mut state, 60, 30);
        assert!(text.contains("Wi-Fi Available"));
    }

    #[test]
    fn empty_catalog_renders_no_pins_and_no_details() {
        let mut state = AppState::new(Catalog::empty(), AppConfig::default());
        let text = render(&mut state, 120, 40);
        assert!(text.contains("No places to show."));
        assert!(!text.contains("(❦)"));
        assert!(!text.contains("About"));
    }

    #[test]
    fn single_row_terminal_does_not_panic() {
        for width in [120, 60] {
            let mut state = AppState::new(Catalog::sample().unwrap(), AppConfig::default());
            render(&mut state, width, 1);

            let place = state.catalog.get(0).unwrap().clone();
            state.view.select_place(&place);
            state.view.toggle_mobile_filters();
            state.overlay = Overlay::Help;
            render(&mut state, width, 1);
        }
    }

    #[test]
    fn help_overlay_lists_bindings() {
        let mut state = AppState::new(Catalog::sample().unwrap(), AppConfig::default());
        state.overlay = Overlay::Help;
        let text = render(&mut state, 120, 40);
        assert!(text.contains("Toggle Sidebar"));
        assert!(text.contains("Close Details"));
    }
}
