//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Leaf glyph used for pins, the brand and ratings.
pub const LEAF: &str = "❦";

const TEAL: Color = Color::Rgb(13, 148, 136);
const TEAL_LIGHT: Color = Color::Rgb(94, 234, 212);

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── header ─────────────────────────────────────────────────
    pub fn brand_style() -> Style {
        Style::default().fg(TEAL).add_modifier(Modifier::BOLD)
    }

    pub fn placeholder_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn input_style() -> Style {
        Style::default().fg(Color::White)
    }

    // ── map ────────────────────────────────────────────────────
    pub fn backdrop_style() -> Style {
        Style::default().fg(Color::Rgb(59, 89, 122))
    }

    pub fn pin_style() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn pin_selected_style() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(TEAL_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn pin_label_style() -> Style {
        Style::default().fg(Color::Black).bg(Color::White)
    }

    // ── details ────────────────────────────────────────────────
    pub fn heading_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn body_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn leaf_on_style() -> Style {
        Style::default().fg(TEAL_LIGHT)
    }

    pub fn leaf_off_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn wifi_style() -> Style {
        Style::default().fg(Color::LightBlue)
    }

    pub fn coffee_style() -> Style {
        Style::default().fg(Color::Rgb(217, 119, 6))
    }

    pub fn open_style() -> Style {
        Style::default().fg(Color::Green)
    }

    // ── filters ────────────────────────────────────────────────
    pub fn accent_style() -> Style {
        Style::default().fg(TEAL_LIGHT)
    }

    pub fn button_style() -> Style {
        Style::default().fg(TEAL_LIGHT).bg(Color::Rgb(19, 78, 74))
    }

    pub fn primary_button_style() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn focused_style() -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn focused_border_style() -> Style {
        Style::default().fg(TEAL_LIGHT)
    }

    pub fn title_style() -> Style {
        Style::default().fg(TEAL_LIGHT).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn dim_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
