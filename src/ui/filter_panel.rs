//! Filter panel — shared by the desktop sidebar and the compact overlay.
//!
//! Controls are drawn one per row so that a click row maps straight back to
//! a [`FilterControl`].  The environment buttons share two rows of two.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::core::filters::{Environment, FilterControl, FilterForm};
use crate::ui::theme::Theme;

/// Close button label for the overlay variant.
pub const CLOSE_LABEL: &str = "[x]";

/// Row of each control relative to the panel's inner area, and the column
/// span (relative start, width) for the environment buttons.
fn control_row(control: FilterControl) -> (u16, Option<(u16, u16)>) {
    match control {
        FilterControl::QuietLevel => (3, None),
        FilterControl::Wifi => (6, None),
        FilterControl::Coffee => (7, None),
        FilterControl::OpenNow => (8, None),
        FilterControl::Distance => (11, None),
        FilterControl::Environment(env) => {
            let i = Environment::ALL.iter().position(|e| *e == env).unwrap_or(0) as u16;
            (14 + i / 2, Some(((i % 2) * 12, 11)))
        }
        FilterControl::Apply => (17, None),
    }
}

/// Inner area for a filter panel drawn in `area`.
pub fn panel_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// The overlay's close button, on the title row.
pub fn close_button(area: Rect) -> Rect {
    let w = CLOSE_LABEL.len() as u16;
    Rect::new(area.right().saturating_sub(w + 1), area.y, w.min(area.width), 1)
}

/// Control under (`col`, `row`), if any.
pub fn control_at(area: Rect, col: u16, row: u16) -> Option<(usize, FilterControl)> {
    let inner = panel_inner(area);
    if col < inner.x || col >= inner.right() || row < inner.y {
        return None;
    }
    let rel_row = row - inner.y;
    let rel_col = col - inner.x;
    FilterControl::ALL
        .iter()
        .enumerate()
        .find(|(_, c)| match control_row(**c) {
            (r, None) => r == rel_row,
            (r, Some((start, width))) => r == rel_row && rel_col >= start && rel_col < start + width,
        })
        .map(|(i, c)| (i, *c))
}

pub struct FilterPanel<'a> {
    pub form: &'a FilterForm,
    pub has_focus: bool,
    /// Overlay variant: titled with a close button.
    pub closable: bool,
}

impl<'a> FilterPanel<'a> {
    fn style_for(&self, control: FilterControl, base: Style) -> Style {
        if self.has_focus && self.form.focused_control() == control {
            base.patch(Theme::focused_style())
        } else {
            base
        }
    }

    fn checkbox(&self, control: FilterControl, on: bool, label: &str) -> Line<'static> {
        let mark = if on { "[x]" } else { "[ ]" };
        Line::from(vec![
            Span::styled(format!("{mark} "), Theme::accent_style()),
            Span::styled(label.to_string(), self.style_for(control, Theme::body_style())),
        ])
    }
}

impl<'a> Widget for FilterPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(if self.has_focus {
                Theme::focused_border_style()
            } else {
                Theme::border_style()
            });
        if self.closable {
            block = block.title(" Filters ").title_style(Theme::title_style());
        }
        let inner = block.inner(area);
        block.render(area, buf);
        if self.closable {
            Paragraph::new(Span::styled(CLOSE_LABEL, Theme::heading_style()))
                .render(close_button(area), buf);
        }

        let form = self.form;
        let slider: String = (FilterForm::QUIET_MIN..=FilterForm::QUIET_MAX)
            .map(|v| if v == form.quiet_level { "●" } else { "─" })
            .collect::<Vec<_>>()
            .join("──");

        let mut lines = vec![
            Line::from(Span::styled("Filters", Theme::heading_style())),
            Line::raw(""),
            Line::from(Span::styled("Quiet Level", Theme::heading_style())),
            Line::from(Span::styled(
                format!("{slider}  {}", form.quiet_level),
                self.style_for(FilterControl::QuietLevel, Theme::accent_style()),
            )),
            Line::from(Span::styled("Whisper        Silent", Theme::dim_style())),
            Line::raw(""),
            self.checkbox(FilterControl::Wifi, form.wifi, "Wi-Fi Available"),
            self.checkbox(FilterControl::Coffee, form.coffee, "Coffee Available"),
            self.checkbox(FilterControl::OpenNow, form.open_now, "Open Now"),
            Line::raw(""),
            Line::from(Span::styled("Distance", Theme::heading_style())),
            Line::from(Span::styled(
                format!("‹ {} ›", form.distance.label()),
                self.style_for(FilterControl::Distance, Theme::body_style()),
            )),
            Line::raw(""),
            Line::from(Span::styled("Environment", Theme::heading_style())),
        ];
        for pair in Environment::ALL.chunks(2) {
            let mut spans = Vec::new();
            for env in pair {
                let control = FilterControl::Environment(*env);
                spans.push(Span::styled(
                    format!(" {:<9} ", env.label()),
                    self.style_for(control, Theme::button_style()),
                ));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!("{:^22}", "Apply Filters"),
            self.style_for(FilterControl::Apply, Theme::primary_button_style()),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}
