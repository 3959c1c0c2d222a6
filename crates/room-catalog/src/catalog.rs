//! The in-memory room catalogue.
//!
//! A [`RoomCatalog`] keeps rooms in insertion order and optionally suppresses
//! duplicates according to its [`Uniqueness`] policy. Queries borrow the
//! catalogue, so it cannot be modified while a filter or fold over it is still
//! being consumed.
//!
//! # Concurrency
//!
//! The catalogue has no internal synchronisation. It may be moved between
//! threads, but sharing one catalogue between threads that insert and filter
//! needs an external lock such as `Mutex<RoomCatalog>`.

use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, RandomState};
use std::iter::Sum;
use std::mem;

use tracing::{debug, trace};

use crate::ordered::OrderedView;
use crate::room::Room;
use crate::snapshot::Snapshot;

/// How a catalogue decides whether an incoming room is a duplicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Uniqueness {
    /// List semantics: every insert is kept.
    AllowDuplicates,
    /// Set semantics: a room equal in every field to a present room is ignored.
    #[default]
    ByValue,
    /// A room sharing its name with a present room is ignored.
    ByName,
}

impl Uniqueness {
    /// Hash of the part of `room` this policy compares, or `None` when every
    /// room is kept.
    fn key_hash(self, hasher: &RandomState, room: &Room) -> Option<u64> {
        match self {
            Self::AllowDuplicates => None,
            Self::ByValue => Some(hasher.hash_one(room)),
            Self::ByName => Some(hasher.hash_one(room.name())),
        }
    }

    fn same(self, present: &Room, incoming: &Room) -> bool {
        match self {
            Self::AllowDuplicates => false,
            Self::ByValue => present == incoming,
            Self::ByName => present.name() == incoming.name(),
        }
    }
}

/// An ordered, optionally de-duplicating collection of rooms.
///
/// # Example
///
/// ```
/// use room_catalog::{Rate, Room, RoomCatalog, Uniqueness, sum_attribute};
///
/// let oxford = Room::new("Oxford", "Suite", 5, Rate::from_major_units(225))
///     .expect("valid room")
///     .with_pets();
/// let cambridge = Room::new("Cambridge", "Premiere Room", 4, Rate::from_major_units(175))
///     .expect("valid room");
///
/// let mut catalog = RoomCatalog::new(Uniqueness::ByValue);
/// assert!(catalog.insert(oxford.clone()));
/// assert!(catalog.insert(cambridge));
/// assert!(!catalog.insert(oxford));
/// assert_eq!(catalog.len(), 2);
///
/// let pet_friendly: Vec<&str> = catalog
///     .filter(Room::is_pet_friendly)
///     .map(Room::name)
///     .collect();
/// assert_eq!(pet_friendly, ["Oxford"]);
///
/// let total = sum_attribute(catalog.iter(), Room::rate);
/// assert_eq!(total.to_string(), "400.00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoomCatalog {
    uniqueness: Uniqueness,
    rooms: Vec<Room>,
    /// Positions in `rooms`, grouped by key hash.
    index: HashMap<u64, Vec<usize>>,
    hasher: RandomState,
}

impl RoomCatalog {
    /// Creates an empty catalogue with the given duplicate policy.
    #[must_use]
    pub fn new(uniqueness: Uniqueness) -> Self {
        Self {
            uniqueness,
            rooms: Vec::new(),
            index: HashMap::new(),
            hasher: RandomState::new(),
        }
    }

    /// Creates a catalogue and inserts `rooms` in order.
    #[must_use]
    pub fn from_rooms(uniqueness: Uniqueness, rooms: impl IntoIterator<Item = Room>) -> Self {
        let mut catalog = Self::new(uniqueness);
        catalog.extend(rooms);
        catalog
    }

    /// Returns the duplicate policy in force.
    #[must_use]
    pub const fn uniqueness(&self) -> Uniqueness {
        self.uniqueness
    }

    /// Adds a room, returning `false` when it was suppressed as a duplicate.
    pub fn insert(&mut self, room: Room) -> bool {
        let uniqueness = self.uniqueness;
        if let Some(hash) = uniqueness.key_hash(&self.hasher, &room) {
            let positions = self.index.entry(hash).or_default();
            let duplicate = positions.iter().any(|&position| {
                self.rooms
                    .get(position)
                    .is_some_and(|present| uniqueness.same(present, &room))
            });
            if duplicate {
                debug!(room = room.name(), policy = ?uniqueness, "suppressed duplicate room");
                return false;
            }
            positions.push(self.rooms.len());
        }
        trace!(room = room.name(), "inserted room");
        self.rooms.push(room);
        true
    }

    /// Lazily yields the rooms matching `predicate`, in catalogue order.
    ///
    /// The catalogue is left untouched; call again to restart.
    pub fn filter<P>(&self, predicate: P) -> impl Iterator<Item = &Room>
    where
        P: Fn(&Room) -> bool,
    {
        self.rooms.iter().filter(move |&room| {
            let matched = predicate(room);
            trace!(room = room.name(), matched, "tested room");
            matched
        })
    }

    /// Sums an attribute over every room in the catalogue.
    ///
    /// See [`sum_attribute`] for sums over an arbitrary sequence.
    #[must_use]
    pub fn total<F, T>(&self, extractor: F) -> T
    where
        F: Fn(&Room) -> T,
        T: Sum,
    {
        sum_attribute(self.iter(), extractor)
    }

    /// Builds an ordered view over one attribute of every room.
    ///
    /// Equal attribute values collapse into a single entry.
    #[must_use]
    pub fn to_sorted_view<F, T>(&self, extractor: F) -> OrderedView<T>
    where
        F: Fn(&Room) -> T,
        T: Ord,
    {
        self.rooms.iter().map(extractor).collect()
    }

    /// Removes every room matching `predicate` and returns them in order.
    pub fn remove_where<P>(&mut self, predicate: P) -> Vec<Room>
    where
        P: Fn(&Room) -> bool,
    {
        let (removed, kept): (Vec<Room>, Vec<Room>) =
            mem::take(&mut self.rooms).into_iter().partition(|room| predicate(room));
        self.rooms = kept;
        self.rebuild_index();
        debug!(removed = removed.len(), remaining = self.rooms.len(), "removed rooms");
        removed
    }

    /// Distinct room kinds in first-seen order.
    #[must_use]
    pub fn kinds(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.rooms
            .iter()
            .map(Room::kind)
            .filter(|kind| seen.insert(*kind))
            .collect()
    }

    /// Returns the first room with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.name() == name)
    }

    /// Whether a room equal to `room` is present.
    #[must_use]
    pub fn contains(&self, room: &Room) -> bool {
        self.rooms.contains(room)
    }

    /// Iterates over rooms in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Room> {
        self.rooms.iter()
    }

    /// Number of rooms held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the catalogue holds no rooms.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Copies the current rooms into a read-only snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<Room> {
        self.rooms.iter().cloned().collect()
    }

    fn rebuild_index(&mut self) {
        let mut index: HashMap<u64, Vec<usize>> = HashMap::new();
        for (position, room) in self.rooms.iter().enumerate() {
            if let Some(hash) = self.uniqueness.key_hash(&self.hasher, room) {
                index.entry(hash).or_default().push(position);
            }
        }
        self.index = index;
    }
}

impl Extend<Room> for RoomCatalog {
    fn extend<I: IntoIterator<Item = Room>>(&mut self, iter: I) {
        for room in iter {
            self.insert(room);
        }
    }
}

impl FromIterator<Room> for RoomCatalog {
    fn from_iter<I: IntoIterator<Item = Room>>(iter: I) -> Self {
        Self::from_rooms(Uniqueness::default(), iter)
    }
}

impl<'a> IntoIterator for &'a RoomCatalog {
    type Item = &'a Room;
    type IntoIter = std::slice::Iter<'a, Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}

/// Sums the attribute chosen by `extractor` across `rooms`.
///
/// An empty sequence sums to the attribute type's zero.
///
/// # Example
///
/// ```
/// use room_catalog::{Rate, Room, sum_attribute};
///
/// let none: Vec<Room> = Vec::new();
/// assert_eq!(sum_attribute(&none, Room::rate), Rate::ZERO);
/// assert_eq!(sum_attribute(&none, Room::capacity), 0);
/// ```
#[must_use]
pub fn sum_attribute<'a, I, F, T>(rooms: I, extractor: F) -> T
where
    I: IntoIterator<Item = &'a Room>,
    F: Fn(&Room) -> T,
    T: Sum,
{
    rooms.into_iter().map(extractor).sum()
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]
mod tests {
    //! Covers duplicate policies, filtering, removal, and aggregation.

    use rstest::{fixture, rstest};

    use super::*;
    use crate::fixtures::sample_rooms;
    use crate::rate::Rate;

    #[fixture]
    fn rooms() -> Vec<Room> {
        sample_rooms().expect("fixture rooms are valid")
    }

    fn names<'a>(rooms: impl IntoIterator<Item = &'a Room>) -> Vec<&'a str> {
        rooms.into_iter().map(Room::name).collect()
    }

    #[rstest]
    #[case::list(Uniqueness::AllowDuplicates, 5)]
    #[case::set(Uniqueness::ByValue, 4)]
    #[case::name(Uniqueness::ByName, 4)]
    fn repeated_room_respects_policy(
        rooms: Vec<Room>,
        #[case] uniqueness: Uniqueness,
        #[case] expected: usize,
    ) {
        let mut catalog = RoomCatalog::from_rooms(uniqueness, rooms.clone());
        let oxford = rooms
            .into_iter()
            .find(|room| room.name() == "Oxford")
            .expect("Oxford fixture");
        catalog.insert(oxford);
        assert_eq!(catalog.len(), expected);
    }

    #[rstest]
    fn by_value_keeps_same_name_with_different_fields(rooms: Vec<Room>) {
        let mut catalog = RoomCatalog::from_rooms(Uniqueness::ByValue, rooms);
        let renovated = Room::new("Oxford", "Suite", 6, Rate::from_major_units(300))
            .expect("valid room");

        assert!(catalog.insert(renovated.clone()));
        assert_eq!(catalog.len(), 5);

        let mut by_name = RoomCatalog::new(Uniqueness::ByName);
        by_name.extend(catalog.iter().cloned());
        assert_eq!(by_name.len(), 4);
        assert!(!by_name.contains(&renovated));
    }

    #[rstest]
    fn filter_preserves_order(rooms: Vec<Room>) {
        let catalog: RoomCatalog = rooms.into_iter().collect();
        assert_eq!(
            names(catalog.filter(Room::is_pet_friendly)),
            ["Oxford", "Victoria"]
        );
        // restartable
        assert_eq!(catalog.filter(Room::is_pet_friendly).count(), 2);
        assert_eq!(catalog.len(), 4);
    }

    #[rstest]
    fn filter_accepts_closures(rooms: Vec<Room>) {
        let catalog: RoomCatalog = rooms.into_iter().collect();
        let cheap = names(catalog.filter(|room| room.rate() < Rate::from_major_units(200)));
        assert_eq!(cheap, ["Cambridge"]);
    }

    #[rstest]
    fn totals_pet_friendly_rates(rooms: Vec<Room>) {
        let catalog: RoomCatalog = rooms.into_iter().collect();
        let total = sum_attribute(catalog.filter(Room::is_pet_friendly), Room::rate);
        assert_eq!(total, Rate::from_major_units(450));
        assert_eq!(catalog.total(Room::rate).to_string(), "875.00");
        assert_eq!(catalog.total(Room::capacity), 19);
    }

    #[rstest]
    fn remove_where_returns_removed_rooms(rooms: Vec<Room>) {
        let mut catalog = RoomCatalog::from_rooms(Uniqueness::ByName, rooms);
        let removed = catalog.remove_where(Room::is_pet_friendly);

        assert_eq!(names(&removed), ["Oxford", "Victoria"]);
        assert_eq!(names(&catalog), ["Cambridge", "Manchester"]);

        // removed names may be inserted again
        for room in removed {
            assert!(catalog.insert(room));
        }
        assert_eq!(catalog.len(), 4);
    }

    #[rstest]
    fn by_value_index_follows_removal(rooms: Vec<Room>) {
        let mut catalog = RoomCatalog::from_rooms(Uniqueness::ByValue, rooms.clone());
        catalog.remove_where(|room| room.name() == "Oxford");

        // positions shifted, but the remaining rooms are still recognised
        for room in rooms {
            let reinserted = room.name() == "Oxford";
            assert_eq!(catalog.insert(room), reinserted);
        }
        assert_eq!(
            names(&catalog),
            ["Cambridge", "Victoria", "Manchester", "Oxford"]
        );
    }

    #[rstest]
    fn kinds_are_distinct_in_first_seen_order(rooms: Vec<Room>) {
        let catalog: RoomCatalog = rooms.into_iter().collect();
        assert_eq!(catalog.kinds(), ["Premiere Room", "Suite"]);
    }

    #[rstest]
    fn sorted_view_over_capacities(rooms: Vec<Room>) {
        let catalog: RoomCatalog = rooms.into_iter().collect();
        let capacities = catalog.to_sorted_view(Room::capacity);
        assert_eq!(capacities.iter().copied().collect::<Vec<_>>(), [4, 5]);
    }

    #[rstest]
    fn find_by_name_returns_first_match(rooms: Vec<Room>) {
        let catalog: RoomCatalog = rooms.into_iter().collect();
        let manchester = catalog.find_by_name("Manchester").expect("present");
        assert_eq!(manchester.rate(), Rate::from_major_units(250));
        assert!(catalog.find_by_name("Bath").is_none());
    }

    #[test]
    fn empty_catalog_totals_zero() {
        let catalog = RoomCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.total(Room::rate), Rate::ZERO);
        assert_eq!(catalog.uniqueness(), Uniqueness::ByValue);
    }
}
