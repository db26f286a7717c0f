//! Place and review records.
//!
//! These are plain immutable data.  A [`Place`] owns its [`Review`]s; neither
//! has a lifecycle of its own beyond the catalog that holds them.

use std::path::PathBuf;

use super::CatalogError;

/// Stable identity of a place within a catalog.
pub type PlaceId = u32;

// ───────────────────────────────────────── rating ────────────

/// A 0–5 score, rendered as a row of leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, CatalogError> {
        if value > Self::MAX {
            return Err(CatalogError::RatingOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// `(filled, empty)` leaf counts for a five-leaf strip.
    pub fn leaves(self) -> (usize, usize) {
        let filled = self.0 as usize;
        (filled, (Self::MAX as usize) - filled)
    }
}

// ───────────────────────────────────────── review ────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub user: String,
    pub rating: Rating,
    pub comment: String,
}

impl Review {
    pub fn new(user: &str, rating: u8, comment: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            user: user.to_string(),
            rating: Rating::new(rating)?,
            comment: comment.to_string(),
        })
    }
}

// ───────────────────────────────────────── place ─────────────

/// A point of interest with amenity metadata and reviews.
///
/// `review_count` is the advertised total and is deliberately independent of
/// `reviews.len()`, which only holds the reviews shipped with the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub description: String,
    /// Photo shown at the top of the detail panel.  `None` shows a placeholder.
    pub image: Option<PathBuf>,
    pub has_wifi: bool,
    pub has_coffee: bool,
    pub is_open_now: bool,
    pub rating: Rating,
    pub review_count: u32,
    pub reviews: Vec<Review>,
}

/// An amenity badge shown under the place name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amenity {
    Wifi,
    Coffee,
    Open,
}

impl Amenity {
    pub fn label(self) -> &'static str {
        match self {
            Amenity::Wifi => "Wi-Fi",
            Amenity::Coffee => "Coffee",
            Amenity::Open => "Open",
        }
    }
}

impl Place {
    /// Amenity badges in display order, skipping the ones the place lacks.
    pub fn amenities(&self) -> Vec<Amenity> {
        let mut out = Vec::with_capacity(3);
        if self.has_wifi {
            out.push(Amenity::Wifi);
        }
        if self.has_coffee {
            out.push(Amenity::Coffee);
        }
        if self.is_open_now {
            out.push(Amenity::Open);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_rejects_values_above_five() {
        assert!(Rating::new(5).is_ok());
        assert!(matches!(
            Rating::new(6),
            Err(CatalogError::RatingOutOfRange(6))
        ));
    }

    #[test]
    fn rating_leaves_always_sum_to_five() {
        for v in 0..=5 {
            let (filled, empty) = Rating::new(v).unwrap().leaves();
            assert_eq!(filled, v as usize);
            assert_eq!(filled + empty, 5);
        }
    }

    #[test]
    fn amenities_follow_flags_in_order() {
        let place = Place {
            id: 9,
            name: "Reading Room".into(),
            description: String::new(),
            image: None,
            has_wifi: true,
            has_coffee: false,
            is_open_now: true,
            rating: Rating::new(3).unwrap(),
            review_count: 0,
            reviews: Vec::new(),
        };
        assert_eq!(place.amenities(), vec![Amenity::Wifi, Amenity::Open]);
    }
}
