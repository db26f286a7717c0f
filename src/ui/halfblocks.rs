//! Draw an RGBA image into terminal cells using `▀` half-blocks: the glyph
//! carries the upper pixel in its foreground, the cell background carries
//! the lower one.

use image::imageops::FilterType;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Color,
};

/// How the image is fitted into the target area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Whole image visible, centred, aspect preserved.
    Contain,
    /// Area fully covered, overflow cropped from the centre.
    Cover,
}

pub fn render_image(img: &image::RgbaImage, area: Rect, fit: Fit, buf: &mut Buffer) {
    if area.width == 0 || area.height == 0 || img.width() == 0 || img.height() == 0 {
        return;
    }

    // Pixel budget: each column is one pixel wide, each row two pixels tall.
    let max_w = area.width as f64;
    let max_h = (area.height as f64) * 2.0;
    let src_w = img.width() as f64;
    let src_h = img.height() as f64;

    let scale = match fit {
        Fit::Contain => (max_w / src_w).min(max_h / src_h),
        Fit::Cover => (max_w / src_w).max(max_h / src_h),
    };
    let fit_w = (src_w * scale).round().max(1.0) as u32;
    let fit_h = (src_h * scale).round().max(1.0) as u32;
    let rgba = image::imageops::resize(img, fit_w, fit_h, FilterType::Triangle);

    let (iw, ih) = (rgba.width(), rgba.height());
    let draw_w = iw.min(area.width as u32);
    let draw_h = ih.min((area.height as u32) * 2);
    // Centre in the area; for Cover, crop the same amount from each side.
    let src_x = (iw - draw_w) / 2;
    let src_y = (ih - draw_h) / 2;
    let col_offset = (area.width as u32 - draw_w) / 2;
    let row_offset = ((area.height as u32) * 2 - draw_h) / 4;

    for row in 0..(draw_h.div_ceil(2)) {
        let yt = src_y + row * 2;
        let yb = yt + 1;
        for col in 0..draw_w {
            let t = rgba.get_pixel(src_x + col, yt);
            let fg = Color::Rgb(t[0], t[1], t[2]);
            let bg = if yb < src_y + draw_h {
                let b = rgba.get_pixel(src_x + col, yb);
                Color::Rgb(b[0], b[1], b[2])
            } else {
                Color::Reset
            };
            let pos = Position::new(
                area.x + (col_offset + col) as u16,
                area.y + (row_offset + row) as u16,
            );
            if let Some(cell) = buf.cell_mut(pos) {
                cell.set_char('▀').set_fg(fg).set_bg(bg);
            }
        }
    }
}
