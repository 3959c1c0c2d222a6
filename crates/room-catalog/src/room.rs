//! The `Room` record held by a catalogue.

use crate::error::CatalogError;
use crate::rate::Rate;

/// A bookable room.
///
/// Equality and hashing cover every field, so two rooms built from the same
/// literals are duplicates for set-like catalogues.
///
/// # Example
///
/// ```
/// use room_catalog::{Rate, Room};
///
/// let mut oxford = Room::new("Oxford", "Suite", 5, Rate::from_major_units(225))
///     .expect("valid room");
/// assert!(!oxford.is_pet_friendly());
///
/// oxford.set_pet_friendly(true);
/// assert!(oxford.is_pet_friendly());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Room {
    name: String,
    kind: String,
    capacity: u32,
    rate: Rate,
    pet_friendly: bool,
}

impl Room {
    /// Builds a room that is not pet friendly.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::BlankName`] for an empty or whitespace-only
    /// name and [`CatalogError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        capacity: u32,
        rate: Rate,
    ) -> Result<Self, CatalogError> {
        let owned_name = name.into();
        if owned_name.trim().is_empty() {
            return Err(CatalogError::BlankName);
        }
        if capacity == 0 {
            return Err(CatalogError::InvalidCapacity);
        }
        Ok(Self {
            name: owned_name,
            kind: kind.into(),
            capacity,
            rate,
            pet_friendly: false,
        })
    }

    /// Returns the room name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the accommodation category, such as "Suite".
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Maximum number of occupants.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Nightly price.
    #[must_use]
    pub const fn rate(&self) -> Rate {
        self.rate
    }

    /// Whether pets are allowed.
    #[must_use]
    pub const fn is_pet_friendly(&self) -> bool {
        self.pet_friendly
    }

    /// Allows or forbids pets.
    pub const fn set_pet_friendly(&mut self, pet_friendly: bool) {
        self.pet_friendly = pet_friendly;
    }

    /// Returns the room with pets allowed, for use when building fixtures.
    #[must_use]
    pub const fn with_pets(mut self) -> Self {
        self.pet_friendly = true;
        self
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn new_rooms_do_not_allow_pets() {
        let room = Room::new("Cambridge", "Premiere Room", 4, Rate::from_major_units(175))
            .expect("valid room");
        assert!(!room.is_pet_friendly());
        assert_eq!(room.name(), "Cambridge");
        assert_eq!(room.kind(), "Premiere Room");
        assert_eq!(room.capacity(), 4);
        assert_eq!(room.rate(), Rate::from_minor_units(17_500));
    }

    #[rstest]
    #[case::empty("")]
    #[case::spaces("   ")]
    fn rejects_blank_names(#[case] name: &str) {
        let result = Room::new(name, "Suite", 5, Rate::ZERO);
        assert_eq!(result, Err(CatalogError::BlankName));
    }

    #[test]
    fn rejects_zero_capacity() {
        let result = Room::new("Oxford", "Suite", 0, Rate::ZERO);
        assert_eq!(result, Err(CatalogError::InvalidCapacity));
    }

    #[test]
    fn pet_flag_takes_part_in_equality() {
        let plain = Room::new("Oxford", "Suite", 5, Rate::ZERO).expect("valid room");
        let pets = plain.clone().with_pets();
        assert_ne!(plain, pets);
    }
}
