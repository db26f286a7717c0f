//! Help overlay listing the active keybindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::config::{Action, AppConfig};
use crate::ui::layout::centered_fixed;

pub struct HelpPopup<'a> {
    pub config: &'a AppConfig,
}

impl<'a> Widget for HelpPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // actions + digits row + 2 blanks + hint + 2 border
        let height = (Action::ALL.len() as u16) + 6;
        let popup = centered_fixed(52, height, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Controls ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let dim = Style::default().fg(Color::DarkGray);
        let key_style = Style::default().fg(Color::Yellow);
        let inner_width = inner.width as usize;

        let row = |label: &str, keys: String| {
            // Fixed-width columns: label left-aligned, keys right-aligned.
            let label_col = format!("   {label:<24}");
            let keys_width = inner_width.saturating_sub(label_col.len()).max(1);
            Line::from(vec![
                Span::styled(label_col, Style::default().fg(Color::White)),
                Span::styled(format!("{keys:>keys_width$}"), key_style),
            ])
        };

        let mut lines = vec![Line::raw("")];
        for &action in Action::ALL {
            lines.push(row(action.label(), self.config.display_bindings(action)));
        }
        lines.push(row("Open Pin N", "1-9".to_string()));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Edit ~/.config/findme/config.toml to rebind",
            dim,
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}
