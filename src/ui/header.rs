//! Top bar: menu button (compact layout only), brand, search box, user button.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::ui::layout::AppLayout;
use crate::ui::theme::{Theme, LEAF};

const SEARCH_PLACEHOLDER: &str = "Search for quiet places...";

pub struct HeaderWidget<'a> {
    pub layout: &'a AppLayout,
    pub query: &'a str,
    pub search_focused: bool,
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let layout = self.layout;
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Theme::dim_style())
            .render(layout.header_area, buf);
        // Glyphs sit on the middle row; a short terminal clips them away.
        let header = layout.header_area;
        let middle = |slot: Rect, indent: u16| {
            Rect::new(
                slot.x.saturating_add(indent),
                header.y.saturating_add(1),
                slot.width.saturating_sub(indent),
                1,
            )
            .intersection(header)
        };

        if let Some(menu) = layout.menu_button {
            Paragraph::new(Span::styled("☰", Theme::heading_style())).render(middle(menu, 1), buf);
        }

        let brand = Line::from(vec![
            Span::styled(format!(" {LEAF} "), Theme::brand_style()),
            Span::styled("FindMe", Theme::brand_style()),
        ]);
        Paragraph::new(brand).render(middle(layout.brand_area, 0), buf);

        let search_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.search_focused {
                Theme::focused_border_style()
            } else {
                Theme::border_style()
            });
        let inner = search_block.inner(layout.search_area);
        search_block.render(layout.search_area, buf);
        let text = if self.query.is_empty() && !self.search_focused {
            Span::styled(format!("⌕ {SEARCH_PLACEHOLDER}"), Theme::placeholder_style())
        } else {
            let cursor = if self.search_focused { "▏" } else { "" };
            Span::styled(format!("⌕ {}{cursor}", self.query), Theme::input_style())
        };
        Paragraph::new(Line::from(text)).render(inner, buf);

        Paragraph::new(Span::styled("(☺)", Theme::body_style()))
            .render(middle(layout.user_button, 1), buf);
    }
}
