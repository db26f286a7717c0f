//! Session view state — sidebar, mobile filter overlay and place selection.
//!
//! [`ViewState`] holds three independent slots and exposes the only four
//! operations that mutate them.  [`Visibility`] is a pure derivation of what
//! the screen should show from a state snapshot, the catalog and the viewport
//! class.  Renderers read a `Visibility`; they never inspect the flags directly.

use super::catalog::Catalog;
use super::place::{Place, PlaceId};

// ───────────────────────────────────────── state ─────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    selected_place: Option<PlaceId>,
    sidebar_open: bool,
    mobile_filters_open: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected_place: None,
            sidebar_open: true,
            mobile_filters_open: false,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        tracing::debug!(open = self.sidebar_open, "sidebar toggled");
    }

    pub fn toggle_mobile_filters(&mut self) {
        self.mobile_filters_open = !self.mobile_filters_open;
        tracing::debug!(open = self.mobile_filters_open, "mobile filters toggled");
    }

    /// Select `place`.
    ///
    /// Callers hand in a borrow from the catalog.  `Place` can also be built
    /// by hand, so an id from elsewhere is stored as-is; [`Self::selected`]
    /// and [`Visibility::derive`] treat an id the catalog lacks as no
    /// selection.
    pub fn select_place(&mut self, place: &Place) {
        self.selected_place = Some(place.id);
        tracing::debug!(id = place.id, name = %place.name, "place selected");
    }

    pub fn clear_selection(&mut self) {
        if self.selected_place.take().is_some() {
            tracing::debug!("selection cleared");
        }
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn mobile_filters_open(&self) -> bool {
        self.mobile_filters_open
    }

    pub fn selected_place(&self) -> Option<PlaceId> {
        self.selected_place
    }

    /// Resolve the selection against `catalog`.
    pub fn selected<'c>(&self, catalog: &'c Catalog) -> Option<&'c Place> {
        self.selected_place.and_then(|id| catalog.find(id))
    }
}

// ───────────────────────────────────────── derivation ────────

/// What the presentation layer draws for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    /// Desktop filter sidebar.
    pub sidebar: bool,
    /// Chevron button that collapses / expands the desktop sidebar.
    pub sidebar_toggle: bool,
    /// Header menu button that opens the mobile overlay.
    pub menu_button: bool,
    /// Mobile filter overlay.
    pub mobile_filters: bool,
    /// Slide-in detail panel.
    pub details: bool,
}

impl Visibility {
    /// Derive visibility.  `compact` selects the narrow (mobile) layout, in
    /// which the desktop sidebar and its toggle are hidden regardless of
    /// `sidebar_open`, and vice versa for the overlay.
    pub fn derive(view: &ViewState, catalog: &Catalog, compact: bool) -> Self {
        Self {
            sidebar: !compact && view.sidebar_open,
            sidebar_toggle: !compact,
            menu_button: compact,
            mobile_filters: compact && view.mobile_filters_open,
            details: view.selected(catalog).is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::sample().unwrap()
    }

    #[test]
    fn defaults_match_first_load() {
        let view = ViewState::new();
        assert!(view.sidebar_open());
        assert!(!view.mobile_filters_open());
        assert_eq!(view.selected_place(), None);
    }

    #[test]
    fn sidebar_returns_to_initial_value_after_even_toggles() {
        for n in 0..8 {
            let mut view = ViewState::new();
            let initial = view.sidebar_open();
            for _ in 0..n {
                view.toggle_sidebar();
            }
            assert_eq!(view.sidebar_open() == initial, n % 2 == 0, "n = {n}");
        }
    }

    #[test]
    fn select_then_read_returns_the_place() {
        let catalog = sample();
        let mut view = ViewState::new();
        for place in catalog.places() {
            view.select_place(place);
            assert_eq!(view.selected_place(), Some(place.id));
            assert_eq!(view.selected(&catalog), Some(place));
        }
    }

    #[test]
    fn clear_selection_always_empties() {
        let catalog = sample();
        let mut view = ViewState::new();
        view.clear_selection();
        assert_eq!(view.selected_place(), None);

        view.select_place(catalog.get(1).unwrap());
        view.clear_selection();
        view.clear_selection();
        assert_eq!(view.selected_place(), None);
    }

    #[test]
    fn toggles_and_selection_are_independent() {
        let catalog = sample();
        let mut view = ViewState::new();
        view.select_place(catalog.get(2).unwrap());

        view.toggle_mobile_filters();
        assert!(view.sidebar_open());
        assert_eq!(view.selected_place(), Some(3));

        view.toggle_sidebar();
        assert!(view.mobile_filters_open());
        assert_eq!(view.selected_place(), Some(3));

        view.clear_selection();
        assert!(!view.sidebar_open());
        assert!(view.mobile_filters_open());
    }

    #[test]
    fn select_and_close_leaves_flags_untouched() {
        let catalog = sample();
        let mut view = ViewState::new();
        view.select_place(catalog.find(1).unwrap());
        assert_eq!(
            view,
            ViewState {
                selected_place: Some(1),
                sidebar_open: true,
                mobile_filters_open: false,
            }
        );
        view.clear_selection();
        assert_eq!(view, ViewState::new());
    }

    #[test]
    fn wide_layout_follows_sidebar_flag_and_hides_overlay() {
        let catalog = sample();
        let mut view = ViewState::new();
        view.toggle_mobile_filters();

        let vis = Visibility::derive(&view, &catalog, false);
        assert!(vis.sidebar && vis.sidebar_toggle);
        assert!(!vis.mobile_filters && !vis.menu_button);

        view.toggle_sidebar();
        assert!(!Visibility::derive(&view, &catalog, false).sidebar);
    }

    #[test]
    fn compact_layout_follows_overlay_flag_and_hides_sidebar() {
        let catalog = sample();
        let mut view = ViewState::new();

        let vis = Visibility::derive(&view, &catalog, true);
        assert!(!vis.sidebar && !vis.sidebar_toggle);
        assert!(vis.menu_button && !vis.mobile_filters);

        view.toggle_mobile_filters();
        assert!(Visibility::derive(&view, &catalog, true).mobile_filters);
    }

    #[test]
    fn details_visible_only_for_a_resolvable_selection() {
        let catalog = sample();
        let mut view = ViewState::new();
        assert!(!Visibility::derive(&view, &catalog, false).details);

        view.select_place(catalog.get(0).unwrap());
        assert!(Visibility::derive(&view, &catalog, false).details);
        // A selection made against one catalog never shows against another
        // that lacks the place.
        assert!(!Visibility::derive(&view, &Catalog::empty(), false).details);
    }

    #[test]
    fn selection_of_a_place_outside_the_catalog_stays_hidden() {
        let catalog = sample();
        let mut stray = catalog.get(0).unwrap().clone();
        stray.id = 99;

        let mut view = ViewState::new();
        view.select_place(&stray);
        assert_eq!(view.selected_place(), Some(99));
        assert!(view.selected(&catalog).is_none());
        assert!(!Visibility::derive(&view, &catalog, false).details);
    }
}
