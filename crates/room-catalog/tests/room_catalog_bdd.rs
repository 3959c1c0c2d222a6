//! Behavioural tests for the room-catalog crate.
//!
//! These tests validate de-duplication, filtering, aggregation, and snapshot
//! behaviour against Gherkin scenarios.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use room_catalog::fixtures::sample_rooms;
use room_catalog::{CatalogError, Rate, Room, RoomCatalog, Snapshot, Uniqueness, sum_attribute};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

// ============================================================================
// Test fixtures
// ============================================================================

/// Test world holding the catalogue and derived results.
#[derive(Default, ScenarioState)]
struct World {
    catalog: Slot<RoomCatalog>,
    selected: Slot<Vec<Room>>,
    snapshot: Slot<Snapshot<Room>>,
}

impl World {
    /// Extracts the catalogue from the world state.
    fn catalog(&self) -> RoomCatalog {
        self.catalog.get().expect("catalogue should be set")
    }

    /// Extracts the selected rooms from the world state.
    fn selected(&self) -> Vec<Room> {
        self.selected.get().expect("selection should be set")
    }

    /// Extracts the snapshot from the world state.
    fn snapshot(&self) -> Snapshot<Room> {
        self.snapshot.get().expect("snapshot should be set")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

fn fixture_catalog(uniqueness: Uniqueness) -> RoomCatalog {
    RoomCatalog::from_rooms(uniqueness, sample_rooms().expect("fixture rooms are valid"))
}

// ============================================================================
// Given steps
// ============================================================================

#[given("the sample rooms in a de-duplicating catalogue")]
fn the_sample_rooms_in_a_deduplicating_catalogue(world: &World) {
    world.catalog.set(fixture_catalog(Uniqueness::ByValue));
}

#[given("the sample rooms in a list catalogue")]
fn the_sample_rooms_in_a_list_catalogue(world: &World) {
    world.catalog.set(fixture_catalog(Uniqueness::AllowDuplicates));
}

#[given("an empty catalogue")]
fn an_empty_catalogue(world: &World) {
    world.catalog.set(RoomCatalog::default());
}

// ============================================================================
// When steps
// ============================================================================

#[when("the Oxford room is inserted again")]
fn the_oxford_room_is_inserted_again(world: &World) {
    let mut catalog = world.catalog();
    let oxford = catalog
        .find_by_name("Oxford")
        .cloned()
        .expect("Oxford should be present");
    catalog.insert(oxford);
    world.catalog.set(catalog);
}

#[when("pet-friendly rooms are selected")]
fn pet_friendly_rooms_are_selected(world: &World) {
    let catalog = world.catalog();
    let selected = catalog.filter(Room::is_pet_friendly).cloned().collect();
    world.selected.set(selected);
}

#[when("a snapshot is taken and pet-friendly rooms are removed")]
fn a_snapshot_is_taken_and_pet_friendly_rooms_are_removed(world: &World) {
    let mut catalog = world.catalog();
    world.snapshot.set(catalog.snapshot());
    catalog.remove_where(Room::is_pet_friendly);
    world.catalog.set(catalog);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the catalogue holds {count:usize} rooms")]
fn the_catalogue_holds_rooms(world: &World, count: usize) {
    assert_eq!(world.catalog().len(), count);
}

#[then("the selected names are Oxford then Victoria")]
fn the_selected_names_are_oxford_then_victoria(world: &World) {
    let selected = world.selected();
    let names: Vec<&str> = selected.iter().map(Room::name).collect();
    assert_eq!(names, ["Oxford", "Victoria"]);
}

#[then("the selected rates total {total}")]
fn the_selected_rates_total(world: &World, total: String) {
    let expected: Rate = total.parse().expect("valid expected rate");
    assert_eq!(sum_attribute(&world.selected(), Room::rate), expected);
}

#[then("the snapshot still holds {count:usize} rooms")]
fn the_snapshot_still_holds_rooms(world: &World, count: usize) {
    assert_eq!(world.snapshot().len(), count);
}

#[then("writing to the snapshot fails as read-only")]
fn writing_to_the_snapshot_fails_as_read_only(world: &World) {
    let mut snapshot = world.snapshot();
    match snapshot.try_clear() {
        Err(CatalogError::ReadOnly { operation: "clear" }) => {}
        other => panic!("Expected ReadOnly, got: {other:?}"),
    }
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/room_catalog.feature",
    name = "Repeated rooms are suppressed by a set-like catalogue"
)]
fn repeated_rooms_are_suppressed(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/room_catalog.feature",
    name = "List-like catalogues keep repeated rooms"
)]
fn list_catalogues_keep_repeated_rooms(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/room_catalog.feature",
    name = "Filtering keeps only pet-friendly rooms in order"
)]
fn filtering_keeps_pet_friendly_rooms(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/room_catalog.feature",
    name = "Pet-friendly rates are totalled exactly"
)]
fn pet_friendly_rates_are_totalled(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/room_catalog.feature",
    name = "An empty selection totals zero"
)]
fn empty_selection_totals_zero(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/room_catalog.feature",
    name = "Snapshots ignore later removals and reject writes"
)]
fn snapshots_ignore_later_removals(world: World) {
    let _ = world;
}
