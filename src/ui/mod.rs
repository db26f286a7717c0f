//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* data structures and turns them into cells on
//! the terminal.  It reads state; it never mutates it.

pub mod details;
pub mod filter_panel;
pub mod halfblocks;
pub mod header;
pub mod layout;
pub mod map;
pub mod popup;
pub mod render;
pub mod theme;
