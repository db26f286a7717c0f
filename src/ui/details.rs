//! Slide-in detail panel for the selected place.
//!
//! The panel is drawn over the right of the body.  Its top section shows the
//! place photo (or a placeholder) with a close button; below sits a
//! scrollable body with rating, amenities, description and reviews.

use std::sync::Arc;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::core::place::{Amenity, Place, Rating};
use crate::ui::halfblocks::{self, Fit};
use crate::ui::theme::{Theme, LEAF};

const IMAGE_MAX_HEIGHT: u16 = 8;
const CLOSE_LABEL: &str = "[x]";

// ─── geometry ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailsGeometry {
    pub image: Rect,
    pub close: Rect,
    pub body: Rect,
}

pub fn details_geometry(area: Rect) -> DetailsGeometry {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let image_h = IMAGE_MAX_HEIGHT.min(inner.height / 3);
    let image = Rect::new(inner.x, inner.y, inner.width, image_h);
    let close = Rect::new(
        inner.x,
        inner.y,
        (CLOSE_LABEL.len() as u16).min(inner.width),
        1u16.min(inner.height),
    );
    let body = Rect::new(
        inner.x,
        inner.y.saturating_add(image_h),
        inner.width,
        inner.height.saturating_sub(image_h),
    );
    DetailsGeometry { image, close, body }
}

// ─── text ───────────────────────────────────────────────────────

fn leaves(rating: Rating) -> Vec<Span<'static>> {
    let (on, off) = rating.leaves();
    vec![
        Span::styled(LEAF.repeat(on), Theme::leaf_on_style()),
        Span::styled(LEAF.repeat(off), Theme::leaf_off_style()),
    ]
}

fn amenity_span(amenity: Amenity) -> Span<'static> {
    let style = match amenity {
        Amenity::Wifi => Theme::wifi_style(),
        Amenity::Coffee => Theme::coffee_style(),
        Amenity::Open => Theme::open_style(),
    };
    Span::styled(format!("● {}", amenity.label()), style)
}

/// Body lines for `place`, before wrapping.
pub fn detail_lines(place: &Place) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(place.name.clone(), Theme::heading_style()))];

    let mut rating = leaves(place.rating);
    rating.push(Span::styled(
        format!("  {}/5 · {} reviews", place.rating.value(), place.review_count),
        Theme::body_style(),
    ));
    lines.push(Line::from(rating));

    let amenities = place.amenities();
    if !amenities.is_empty() {
        lines.push(Line::raw(""));
        let mut spans = Vec::new();
        for (i, a) in amenities.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(amenity_span(a));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("About", Theme::heading_style())));
    lines.push(Line::from(Span::styled(
        place.description.clone(),
        Theme::body_style(),
    )));

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("Reviews", Theme::heading_style())));
    if place.reviews.is_empty() {
        lines.push(Line::from(Span::styled("No reviews yet.", Theme::dim_style())));
    }
    for review in &place.reviews {
        lines.push(Line::raw(""));
        let mut header = vec![Span::styled(
            format!("{}  ", review.user),
            Theme::heading_style(),
        )];
        header.extend(leaves(review.rating));
        lines.push(Line::from(header));
        lines.push(Line::from(Span::styled(
            review.comment.clone(),
            Theme::body_style(),
        )));
    }

    lines
}

/// Largest useful scroll offset for `place` in a panel drawn at `area`:
/// the wrapped body height minus the rows that fit.
pub fn max_scroll(place: &Place, area: Rect) -> u16 {
    let body = details_geometry(area).body;
    let rows = body_paragraph(place).line_count(body.width);
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_sub(body.height)
}

fn body_paragraph(place: &Place) -> Paragraph<'static> {
    Paragraph::new(detail_lines(place)).wrap(Wrap { trim: false })
}

// ─── widget ─────────────────────────────────────────────────────

pub struct DetailsWidget<'a> {
    pub place: &'a Place,
    pub image: Option<Arc<image::RgbaImage>>,
    pub scroll: u16,
    pub has_focus: bool,
}

impl<'a> Widget for DetailsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let border = if self.has_focus {
            Theme::focused_border_style()
        } else {
            Theme::border_style()
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .render(area, buf);

        let geom = details_geometry(area);
        if geom.image.height > 0 {
            match &self.image {
                Some(img) => halfblocks::render_image(img, geom.image, Fit::Contain, buf),
                None => render_image_placeholder(geom.image, buf),
            }
        }
        Paragraph::new(Line::from(Span::styled(CLOSE_LABEL, Theme::primary_button_style())))
            .render(geom.close, buf);

        // A resize can leave the offset past the end.
        let scroll = self.scroll.min(max_scroll(self.place, area));
        body_paragraph(self.place)
            .scroll((scroll, 0))
            .render(geom.body, buf);
    }
}

fn render_image_placeholder(area: Rect, buf: &mut Buffer) {
    for y in area.top()..area.bottom() {
        buf.set_string(
            area.x,
            y,
            "░".repeat(area.width as usize),
            Theme::dim_style(),
        );
    }
    let label = format!("{LEAF} no photo");
    let w = Span::raw(label.as_str()).width() as u16;
    if area.height > 0 && area.width >= w {
        buf.set_string(
            area.x + (area.width - w) / 2,
            area.y + area.height / 2,
            &label,
            Theme::dim_style(),
        );
    }
}
