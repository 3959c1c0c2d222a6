//! Demonstration flows over the fixture data.
//!
//! Each [`Scenario`] builds its own fixtures, runs a handful of catalogue
//! operations, and describes the outcome as report lines. Nothing is printed
//! here; the binary decides how to render the reports.

use std::fmt::Display;

use serde::Serialize;
use tracing::debug;

use crate::catalog::{RoomCatalog, Uniqueness, sum_attribute};
use crate::error::CatalogError;
use crate::fixtures::{sample_rates, sample_rooms};
use crate::ordered::OrderedView;
use crate::rate::Rate;
use crate::room::Room;

/// Pivot used by the ordered-view neighbour queries.
const PIVOT: u32 = 2000;

/// Exclusive bounds used by the ordered-view sub-range query.
const BETWEEN: (u32, u32) = (1000, 2500);

/// A self-contained demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Lists pet-friendly rooms in catalogue order.
    PetFriendly,
    /// Shows a repeated insert being suppressed.
    Deduplication,
    /// Sums nightly rates and lists distinct room kinds.
    RateTotals,
    /// Removes pet-friendly rooms in one pass instead of mid-iteration.
    Removal,
    /// Runs neighbour and range queries over an ordered view.
    Ordered,
    /// Shows a snapshot ignoring later changes and rejecting writes.
    ReadOnly,
}

impl Scenario {
    /// Every scenario, in presentation order.
    pub const ALL: [Self; 6] = [
        Self::PetFriendly,
        Self::Deduplication,
        Self::RateTotals,
        Self::Removal,
        Self::Ordered,
        Self::ReadOnly,
    ];

    /// Kebab-case name used in headers and on the command line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PetFriendly => "pet-friendly",
            Self::Deduplication => "deduplication",
            Self::RateTotals => "rate-totals",
            Self::Removal => "removal",
            Self::Ordered => "ordered",
            Self::ReadOnly => "read-only",
        }
    }
}

/// Outcome of one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// The scenario that produced these lines.
    pub scenario: Scenario,
    /// Human-readable result lines.
    pub lines: Vec<String>,
}

/// Runs a single scenario against fresh fixtures.
///
/// # Errors
///
/// Returns [`CatalogError`] if the fixture rooms fail validation.
///
/// # Example
///
/// ```
/// use room_catalog::{Scenario, run_scenario};
///
/// let report = run_scenario(Scenario::PetFriendly).expect("scenario runs");
/// assert_eq!(report.lines, ["Oxford", "Victoria"]);
/// ```
pub fn run_scenario(scenario: Scenario) -> Result<Report, CatalogError> {
    debug!(scenario = scenario.label(), "running scenario");
    let lines = match scenario {
        Scenario::PetFriendly => pet_friendly()?,
        Scenario::Deduplication => deduplication()?,
        Scenario::RateTotals => rate_totals()?,
        Scenario::Removal => removal()?,
        Scenario::Ordered => ordered(),
        Scenario::ReadOnly => read_only()?,
    };
    Ok(Report { scenario, lines })
}

/// Runs every scenario in [`Scenario::ALL`] order.
///
/// # Errors
///
/// Returns the first [`CatalogError`] raised by a scenario.
pub fn run_all() -> Result<Vec<Report>, CatalogError> {
    Scenario::ALL.into_iter().map(run_scenario).collect()
}

fn sample_catalog(uniqueness: Uniqueness) -> Result<RoomCatalog, CatalogError> {
    Ok(RoomCatalog::from_rooms(uniqueness, sample_rooms()?))
}

fn pet_friendly() -> Result<Vec<String>, CatalogError> {
    let catalog = sample_catalog(Uniqueness::AllowDuplicates)?;
    Ok(catalog
        .filter(Room::is_pet_friendly)
        .map(|room| room.name().to_owned())
        .collect())
}

fn deduplication() -> Result<Vec<String>, CatalogError> {
    let mut rooms = sample_rooms()?;
    let repeated = rooms
        .iter()
        .find(|room| room.name() == "Oxford")
        .cloned();
    rooms.extend(repeated);

    let offered = rooms.len();
    let mut catalog = RoomCatalog::new(Uniqueness::ByValue);
    let kept = rooms
        .into_iter()
        .map(|room| catalog.insert(room))
        .filter(|&inserted| inserted)
        .count();

    let mut lines = vec![format!(
        "offered {offered} rooms, kept {kept}, suppressed {}",
        offered.saturating_sub(kept)
    )];
    lines.extend(catalog.iter().map(|room| room.name().to_owned()));
    Ok(lines)
}

fn rate_totals() -> Result<Vec<String>, CatalogError> {
    let catalog = sample_catalog(Uniqueness::ByValue)?;
    let pet_friendly = sum_attribute(catalog.filter(Room::is_pet_friendly), Room::rate);
    let everything = catalog.total(Room::rate);
    Ok(vec![
        format!("pet-friendly total: {pet_friendly}"),
        format!("all rooms total: {everything}"),
        format!("kinds: {}", catalog.kinds().join(", ")),
    ])
}

fn removal() -> Result<Vec<String>, CatalogError> {
    let mut catalog = sample_catalog(Uniqueness::ByValue)?;
    let removed = catalog.remove_where(Room::is_pet_friendly);
    Ok(vec![
        format!("removed: {}", join(removed.iter().map(Room::name))),
        format!("remaining: {}", join(catalog.iter().map(Room::name))),
    ])
}

fn ordered() -> Vec<String> {
    let view: OrderedView<u32> = sample_rates().into_iter().collect();
    let (low, high) = BETWEEN;
    vec![
        format!("ascending: {}", join(view.iter())),
        format!("lower than {PIVOT}: {}", describe(view.lower(&PIVOT))),
        format!("higher than {PIVOT}: {}", describe(view.higher(&PIVOT))),
        format!("less than {PIVOT}: {}", join(view.less_than(&PIVOT))),
        format!("greater than {PIVOT}: {}", join(view.greater_than(&PIVOT))),
        format!("between {low} and {high}: {}", join(view.between(&low, &high))),
        format!("descending: {}", join(view.reversed())),
    ]
}

fn read_only() -> Result<Vec<String>, CatalogError> {
    let mut catalog = sample_catalog(Uniqueness::ByValue)?;
    let mut snapshot = catalog.snapshot();
    catalog.remove_where(Room::is_pet_friendly);

    let outcome = snapshot
        .try_push(Room::new("Bath", "Single", 1, Rate::ZERO)?)
        .map_or_else(
            |err| format!("write rejected: {err}"),
            |()| "write accepted".to_owned(),
        );

    Ok(vec![
        format!("source now holds {} rooms", catalog.len()),
        format!(
            "snapshot still holds {} rooms: {}",
            snapshot.len(),
            join(snapshot.iter().map(Room::name))
        ),
        outcome,
    ])
}

fn join<D: Display>(items: impl IntoIterator<Item = D>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe<D: Display>(value: Option<D>) -> String {
    value.map_or_else(|| "none".to_owned(), |found| found.to_string())
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn lines(scenario: Scenario) -> Vec<String> {
        run_scenario(scenario).expect("scenario runs").lines
    }

    #[rstest]
    #[case(Scenario::PetFriendly, "pet-friendly")]
    #[case(Scenario::RateTotals, "rate-totals")]
    #[case(Scenario::ReadOnly, "read-only")]
    fn labels_match_serialized_names(#[case] scenario: Scenario, #[case] label: &str) {
        assert_eq!(scenario.label(), label);
        let json = serde_json::to_string(&scenario).expect("serialize");
        assert_eq!(json, format!("\"{label}\""));
    }

    #[test]
    fn pet_friendly_lists_flagged_rooms() {
        assert_eq!(lines(Scenario::PetFriendly), ["Oxford", "Victoria"]);
    }

    #[test]
    fn deduplication_suppresses_repeat() {
        assert_eq!(
            lines(Scenario::Deduplication),
            [
                "offered 5 rooms, kept 4, suppressed 1",
                "Cambridge",
                "Oxford",
                "Victoria",
                "Manchester",
            ]
        );
    }

    #[test]
    fn rate_totals_sum_decimals() {
        assert_eq!(
            lines(Scenario::RateTotals),
            [
                "pet-friendly total: 450.00",
                "all rooms total: 875.00",
                "kinds: Premiere Room, Suite",
            ]
        );
    }

    #[test]
    fn removal_splits_catalogue() {
        assert_eq!(
            lines(Scenario::Removal),
            [
                "removed: Oxford, Victoria",
                "remaining: Cambridge, Manchester",
            ]
        );
    }

    #[test]
    fn ordered_reports_neighbours_and_ranges() {
        assert_eq!(
            lines(Scenario::Ordered),
            [
                "ascending: 500, 1000, 1500, 2000, 2500, 3000",
                "lower than 2000: 1500",
                "higher than 2000: 2500",
                "less than 2000: 500, 1000, 1500",
                "greater than 2000: 2500, 3000",
                "between 1000 and 2500: 1500, 2000",
                "descending: 3000, 2500, 2000, 1500, 1000, 500",
            ]
        );
    }

    #[test]
    fn read_only_snapshot_is_unchanged() {
        assert_eq!(
            lines(Scenario::ReadOnly),
            [
                "source now holds 2 rooms",
                "snapshot still holds 4 rooms: Cambridge, Oxford, Victoria, Manchester",
                "write rejected: cannot push: collection is read-only",
            ]
        );
    }

    #[test]
    fn run_all_covers_every_scenario() {
        let reports = run_all().expect("scenarios run");
        let order: Vec<Scenario> = reports.iter().map(|report| report.scenario).collect();
        assert_eq!(order, Scenario::ALL);
    }
}
