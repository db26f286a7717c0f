//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::{
    catalog::Catalog,
    filters::FilterForm,
    view::{ViewState, Visibility},
};
use crate::ui::layout::AppLayout;

/// Which region receives plain key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Map,
    Search,
    Filters,
    Details,
}

/// Which overlay, if any, is drawn on top of the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Help,
}

/// Top-level application state.
pub struct AppState {
    /// The fixed place catalog.
    pub catalog: Catalog,
    /// Sidebar / overlay / selection slots.
    pub view: ViewState,
    /// Inert filter controls.
    pub filters: FilterForm,
    /// Text typed into the header search box.  Never executed.
    pub search_query: String,
    /// Keyboard focus.
    pub focus: Focus,
    pub overlay: Overlay,
    /// Pin under the keyboard cursor (index into the catalog).
    pub pin_cursor: usize,
    /// First visible line of the detail panel body.
    pub details_scroll: u16,
    /// User-configurable keybindings and widths.
    pub config: AppConfig,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Last known terminal size, for mouse hit-testing.
    pub terminal_area: Rect,
    /// Optional backdrop for the map.
    pub map_image: Option<PathBuf>,
    /// Decoded images keyed by path.
    pub image_cache: HashMap<PathBuf, Arc<image::RgbaImage>>,
    /// Images waiting to be handed to the loader.
    pub pending_images: Vec<PathBuf>,
    /// Images handed to the loader and not yet answered.
    pub loading_images: HashSet<PathBuf>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: AppConfig) -> Self {
        Self {
            catalog,
            view: ViewState::new(),
            filters: FilterForm::default(),
            search_query: String::new(),
            focus: Focus::default(),
            overlay: Overlay::default(),
            pin_cursor: 0,
            details_scroll: 0,
            config,
            should_quit: false,
            status_message: None,
            terminal_area: Rect::default(),
            map_image: None,
            image_cache: HashMap::new(),
            pending_images: Vec::new(),
            loading_images: HashSet::new(),
        }
    }

    /// Whether the current terminal width selects the compact layout.
    pub fn is_compact(&self) -> bool {
        self.terminal_area.width < self.config.compact_width
    }

    /// What the current state shows at the current terminal size.
    pub fn visibility(&self) -> Visibility {
        Visibility::derive(&self.view, &self.catalog, self.is_compact())
    }

    /// Layout for the current terminal size and view state.
    pub fn layout(&self) -> AppLayout {
        AppLayout::compute(self.terminal_area, self.visibility(), &self.config)
    }

    /// Queue an image for decoding unless it is cached or already queued.
    pub fn request_image(&mut self, path: PathBuf) {
        if self.image_cache.contains_key(&path) || !self.loading_images.insert(path.clone()) {
            return;
        }
        self.pending_images.push(path);
    }
}
