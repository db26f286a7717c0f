//! Core model – places, the catalog, view state and the filter form.
//!
//! Nothing in this module depends on any TUI or rendering crate.

pub mod catalog;
pub mod filters;
pub mod place;
pub mod view;

use thiserror::Error;

use self::place::PlaceId;

/// Problems building a catalog from place records.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("rating {0} is out of range (0-5)")]
    RatingOutOfRange(u8),
    #[error("duplicate place id {0}")]
    DuplicateId(PlaceId),
}
