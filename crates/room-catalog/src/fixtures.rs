//! Literal demonstration data.
//!
//! Each call builds fresh values so scenarios and tests never share state.

use crate::error::CatalogError;
use crate::rate::Rate;
use crate::room::Room;

/// Builds the four demonstration rooms in listing order.
///
/// Oxford and Victoria allow pets; Cambridge and Manchester do not.
///
/// # Errors
///
/// Propagates [`CatalogError`] from [`Room::new`]; the literals here are
/// valid, so this does not fail in practice.
///
/// # Example
///
/// ```
/// use room_catalog::fixtures::sample_rooms;
///
/// let rooms = sample_rooms().expect("fixture rooms are valid");
/// let names: Vec<&str> = rooms.iter().map(|room| room.name()).collect();
/// assert_eq!(names, ["Cambridge", "Oxford", "Victoria", "Manchester"]);
/// ```
pub fn sample_rooms() -> Result<Vec<Room>, CatalogError> {
    Ok(vec![
        Room::new("Cambridge", "Premiere Room", 4, Rate::from_major_units(175))?,
        Room::new("Oxford", "Suite", 5, Rate::from_major_units(225))?.with_pets(),
        Room::new("Victoria", "Suite", 5, Rate::from_major_units(225))?.with_pets(),
        Room::new("Manchester", "Suite", 5, Rate::from_major_units(250))?,
    ])
}

/// Unordered integers used to demonstrate ordered-view queries.
#[must_use]
pub fn sample_rates() -> Vec<u32> {
    vec![500, 1500, 2500, 1000, 3000, 2000]
}
