//! Map pane — placeholder backdrop plus one clickable pin per place.
//!
//! ## Architecture
//!
//! * **Geometry** (`PinGeometry`, `pin_geometry`) — pure layout math shared
//!   between the widget (rendering) and the handler (hit-testing).
//! * **Widget** (`MapWidget`) — draws backdrop, pins and labels.

use std::sync::Arc;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::core::{catalog::Catalog, place::PlaceId};
use crate::ui::halfblocks::{self, Fit};
use crate::ui::theme::Theme;

// ─── constants ──────────────────────────────────────────────────

/// Anchor points (fraction of the map's width and height) for the first pins.
const FIXED_ANCHORS: &[(f32, f32)] = &[(0.25, 1.0 / 3.0), (0.5, 0.5), (2.0 / 3.0, 0.25)];
/// Pins past the fixed anchors go on a grid along the bottom of the map.
const GRID_COLUMNS: usize = 4;
const LABEL_MAX: usize = 22;
const MARKER: &str = "(❦)";

// ─── geometry ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinGeometry {
    /// Pin index (= catalog index).
    pub index: usize,
    pub marker: Rect,
    pub label: Rect,
    pub label_text: String,
}

impl PinGeometry {
    /// Whether a click at (`col`, `row`) activates this pin.
    pub fn hit(&self, col: u16, row: u16) -> bool {
        super::layout::point_in_rect(self.marker, col, row)
            || super::layout::point_in_rect(self.label, col, row)
    }
}

fn anchor(index: usize) -> (f32, f32) {
    if let Some(&a) = FIXED_ANCHORS.get(index) {
        return a;
    }
    let k = index - FIXED_ANCHORS.len();
    let col = k % GRID_COLUMNS;
    let row = k / GRID_COLUMNS;
    let fx = 0.15 + 0.7 * (col as f32) / ((GRID_COLUMNS - 1) as f32);
    let fy = (0.7 + 0.12 * row as f32).min(0.9);
    (fx, fy)
}

fn text_width(s: &str) -> u16 {
    Span::raw(s).width() as u16
}

fn truncate_label(name: &str) -> String {
    if name.chars().count() <= LABEL_MAX {
        return name.to_string();
    }
    let mut s: String = name.chars().take(LABEL_MAX - 1).collect();
    s.push('…');
    s
}

/// Marker and label rectangles for every place in `catalog`, laid out in
/// `map` (the map's inner area).  Pins never leave `map`.
pub fn pin_geometry(map: Rect, catalog: &Catalog) -> Vec<PinGeometry> {
    if map.width < 3 || map.height < 2 {
        return Vec::new();
    }
    let marker_w = text_width(MARKER);

    catalog
        .places()
        .iter()
        .enumerate()
        .map(|(index, place)| {
            let (fx, fy) = anchor(index);
            let label_text = truncate_label(&place.name);
            let label_w = (text_width(&label_text) + 2).min(map.width);

            let cx = map.x + ((map.width as f32) * fx) as u16;
            let top = map.y + ((map.height as f32) * fy) as u16;
            let top = top.min(map.bottom() - 2);

            let marker_x = cx
                .saturating_sub(marker_w / 2)
                .clamp(map.x, map.right() - marker_w);
            let label_x = cx
                .saturating_sub(label_w / 2)
                .clamp(map.x, map.right() - label_w);

            PinGeometry {
                index,
                marker: Rect::new(marker_x, top, marker_w, 1),
                label: Rect::new(label_x, top + 1, label_w, 1),
                label_text,
            }
        })
        .collect()
}

/// First pin (in catalog order) under (`col`, `row`).
pub fn pin_at(map: Rect, catalog: &Catalog, col: u16, row: u16) -> Option<usize> {
    pin_geometry(map, catalog)
        .into_iter()
        .find(|g| g.hit(col, row))
        .map(|g| g.index)
}

// ─── widget ─────────────────────────────────────────────────────

pub struct MapWidget<'a> {
    pub block: Block<'a>,
    pub catalog: &'a Catalog,
    pub selected: Option<PlaceId>,
    /// Pin under the keyboard cursor, when the map has focus.
    pub cursor: Option<usize>,
    pub backdrop: Option<Arc<image::RgbaImage>>,
}

impl<'a> Widget for MapWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = self.block.inner(area);
        self.block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        match &self.backdrop {
            Some(img) => halfblocks::render_image(img, inner, Fit::Cover, buf),
            None => render_placeholder(inner, buf),
        }

        if self.catalog.is_empty() {
            let msg = "No places to show.";
            let y = inner.y + inner.height / 2;
            let x = inner.x + inner.width.saturating_sub(text_width(msg)) / 2;
            buf.set_stringn(x, y, msg, inner.width as usize, Theme::dim_style());
            return;
        }

        for pin in pin_geometry(inner, self.catalog) {
            let place = &self.catalog.places()[pin.index];
            let selected = self.selected == Some(place.id);
            let marker_style = if selected {
                Theme::pin_selected_style()
            } else {
                Theme::pin_style()
            };
            let mut label_style = Theme::pin_label_style();
            if self.cursor == Some(pin.index) {
                label_style = label_style.patch(Theme::focused_style());
            }

            Paragraph::new(Line::from(Span::styled(MARKER, marker_style))).render(pin.marker, buf);
            Paragraph::new(Line::from(Span::styled(
                format!(" {} ", pin.label_text),
                label_style,
            )))
            .render(pin.label, buf);
        }
    }
}

/// Faint dotted grid standing in for map tiles.
fn render_placeholder(area: Rect, buf: &mut Buffer) {
    let style = Theme::backdrop_style();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let ch = if (y - area.y) % 4 == 0 && (x - area.x) % 8 == 0 {
                "+"
            } else if (y - area.y) % 4 == 0 || (x - area.x) % 8 == 0 {
                "·"
            } else {
                continue;
            };
            buf.set_string(x, y, ch, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> Rect {
        Rect::new(10, 5, 80, 30)
    }

    #[test]
    fn first_three_pins_sit_at_fixed_anchors() {
        let catalog = Catalog::sample().unwrap();
        let pins = pin_geometry(map(), &catalog);
        assert_eq!(pins.len(), 3);
        // Second pin centred on the map.
        let m = pins[1].marker;
        assert_eq!(m.y, 5 + 15);
        assert!(m.x <= 50 && m.right() > 50);
    }

    #[test]
    fn pins_stay_inside_the_map() {
        let catalog = Catalog::sample().unwrap();
        for area in [map(), Rect::new(0, 0, 12, 3), Rect::new(3, 3, 30, 8)] {
            for pin in pin_geometry(area, &catalog) {
                assert!(area.contains(pin.marker.as_position()), "{pin:?} in {area:?}");
                assert!(pin.label.right() <= area.right());
                assert!(pin.label.bottom() <= area.bottom());
            }
        }
    }

    #[test]
    fn clicking_a_label_or_marker_hits_its_pin() {
        let catalog = Catalog::sample().unwrap();
        let pins = pin_geometry(map(), &catalog);
        for pin in &pins {
            assert_eq!(pin_at(map(), &catalog, pin.marker.x, pin.marker.y), Some(pin.index));
            assert_eq!(pin_at(map(), &catalog, pin.label.x, pin.label.y), Some(pin.index));
        }
        assert_eq!(pin_at(map(), &catalog, map().x, map().y), None);
    }

    #[test]
    fn empty_catalog_has_no_pins() {
        assert!(pin_geometry(map(), &Catalog::empty()).is_empty());
        assert_eq!(pin_at(map(), &Catalog::empty(), 50, 20), None);
    }

    #[test]
    fn extra_pins_are_laid_out_on_a_grid() {
        let sample = Catalog::sample().unwrap();
        let base = sample.get(0).unwrap().clone();
        let places = (0..9)
            .map(|i| {
                let mut p = base.clone();
                p.id = i + 1;
                p.name = format!("Spot {i}");
                p
            })
            .collect();
        let catalog = Catalog::new(places).unwrap();
        let pins = pin_geometry(map(), &catalog);
        assert_eq!(pins.len(), 9);
        let grid_row: Vec<_> = pins[3..7].iter().map(|p| p.marker.y).collect();
        assert!(grid_row.windows(2).all(|w| w[0] == w[1]));
        assert!(pins[7].marker.y > pins[3].marker.y);
    }

    #[test]
    fn long_names_are_truncated() {
        let label = truncate_label("An Exceptionally Long Place Name Indeed");
        assert_eq!(label.chars().count(), LABEL_MAX);
        assert!(label.ends_with('…'));
    }

    #[test]
    fn renders_zero_pins_for_empty_catalog() {
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        MapWidget {
            block: Block::default(),
            catalog: &Catalog::empty(),
            selected: None,
            cursor: None,
            backdrop: None,
        }
        .render(area, &mut buf);
        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(!text.contains('❦'));
        assert!(text.contains("No places to show."));
    }
}
