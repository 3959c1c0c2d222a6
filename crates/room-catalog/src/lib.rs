//! In-memory room catalogue for demonstrating collection processing.
//!
//! This crate holds a small, fixed set of hotel rooms and shows the usual
//! collection operations over them: de-duplicating inserts, lazy filtering,
//! decimal sums, ordered range queries, and read-only snapshots.
//!
//! # Overview
//!
//! - [`RoomCatalog`] keeps rooms in insertion order under a [`Uniqueness`]
//!   policy
//! - [`sum_attribute`] folds any numeric attribute over a sequence of rooms
//! - [`OrderedView`] answers head, tail, sub-range, and neighbour queries
//! - [`Snapshot`] freezes a copy and rejects writes
//! - [`run_scenario`] packages the demonstrations behind the CLI
//!
//! Everything is single-threaded and synchronous.
//!
//! # Example
//!
//! ```
//! use room_catalog::fixtures::sample_rooms;
//! use room_catalog::{Rate, Room, RoomCatalog, sum_attribute};
//!
//! let catalog: RoomCatalog = sample_rooms().expect("valid fixtures").into_iter().collect();
//! let total = sum_attribute(catalog.filter(Room::is_pet_friendly), Room::rate);
//!
//! assert_eq!(total, Rate::from_major_units(450));
//! ```

mod catalog;
pub mod demo_cli;
mod error;
pub mod fixtures;
mod ordered;
mod rate;
mod room;
mod scenario;
mod snapshot;

pub use catalog::{RoomCatalog, Uniqueness, sum_attribute};
pub use error::CatalogError;
pub use ordered::OrderedView;
pub use rate::Rate;
pub use room::Room;
pub use scenario::{Report, Scenario, run_all, run_scenario};
pub use snapshot::Snapshot;
