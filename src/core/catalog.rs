//! The fixed catalog of places the map shows.
//!
//! The catalog is built once at startup and never mutated.  Pins are laid out
//! in catalog order, so indices into [`Catalog::places`] double as pin indices.

use std::collections::HashSet;

use super::place::{Place, PlaceId, Rating, Review};
use super::CatalogError;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    places: Vec<Place>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate place ids.
    pub fn new(places: Vec<Place>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(places.len());
        for place in &places {
            if !seen.insert(place.id) {
                return Err(CatalogError::DuplicateId(place.id));
            }
        }
        Ok(Self { places })
    }

    /// A catalog with nothing to select.
    pub fn empty() -> Self {
        Self { places: Vec::new() }
    }

    /// The three bundled sample places.
    pub fn sample() -> Result<Self, CatalogError> {
        Self::new(vec![
            Place {
                id: 1,
                name: "Serenity Garden".into(),
                description: "A peaceful garden with comfortable seating areas, surrounded by lush \
                              greenery and a small pond. Perfect for reading or quiet contemplation."
                    .into(),
                image: None,
                has_wifi: true,
                has_coffee: true,
                is_open_now: true,
                rating: Rating::new(5)?,
                review_count: 42,
                reviews: vec![
                    Review::new(
                        "Emma S.",
                        5,
                        "My favorite spot to read and relax. The ambient sounds of nature are so calming.",
                    )?,
                    Review::new(
                        "James T.",
                        5,
                        "Great Wi-Fi speed and the coffee is excellent. I come here to work at least twice a week.",
                    )?,
                ],
            },
            Place {
                id: 2,
                name: "Quiet Corner Café".into(),
                description: "A cozy café with a dedicated quiet zone. They serve excellent coffee \
                              and have a strict no-phone-calls policy in certain areas."
                    .into(),
                image: None,
                has_wifi: true,
                has_coffee: true,
                is_open_now: true,
                rating: Rating::new(4)?,
                review_count: 28,
                reviews: vec![
                    Review::new(
                        "Michael R.",
                        4,
                        "The quiet zone is well-maintained. Staff are respectful of the atmosphere.",
                    )?,
                    Review::new("Sarah L.", 3, "Good place, but can get busy during lunch hours.")?,
                ],
            },
            Place {
                id: 3,
                name: "Lakeside Retreat".into(),
                description: "A natural setting by the lake with benches and small pavilions. No \
                              amenities, but the sounds of water and birds create a perfect natural \
                              soundscape."
                    .into(),
                image: None,
                has_wifi: false,
                has_coffee: false,
                is_open_now: true,
                rating: Rating::new(5)?,
                review_count: 36,
                reviews: vec![
                    Review::new(
                        "David K.",
                        5,
                        "No distractions, just nature. Perfect for meditation and clearing your mind.",
                    )?,
                    Review::new(
                        "Lisa M.",
                        5,
                        "The sunset views are incredible. My favorite place to journal.",
                    )?,
                ],
            },
        ])
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Place at pin position `index`.
    pub fn get(&self, index: usize) -> Option<&Place> {
        self.places.get(index)
    }

    pub fn find(&self, id: PlaceId) -> Option<&Place> {
        self.places.iter().find(|p| p.id == id)
    }
}
