//! Shopping bag types.
//!
//! A [`Bag`] is an ordered list of `(item id, quantity)` entries, unique by
//! item id. Operations return a new bag rather than mutating in place, so
//! callers can hand the result to the state mutator as a whole-field
//! replacement.

use serde::{Deserialize, Serialize};

use super::id::ItemId;

/// One bag entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagItem {
    pub id: ItemId,
    /// Always at least 1; entries are removed rather than decremented to 0.
    pub quantity: u32,
}

/// The in-progress order.
///
/// Serialises as a plain array. Deserialising goes through
/// `From<Vec<BagItem>>`, so a stored bag with duplicate ids or zero
/// quantities is normalised on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<BagItem>")]
pub struct Bag(Vec<BagItem>);

impl Bag {
    /// An empty bag.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// The bag with one more unit of `id`.
    ///
    /// An existing entry keeps its position and gains one unit; otherwise a
    /// new entry with quantity 1 is appended.
    #[must_use]
    pub fn with_added(&self, id: ItemId) -> Self {
        let mut entries = self.0.clone();
        match entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(1),
            None => entries.push(BagItem { id, quantity: 1 }),
        }
        Self(entries)
    }

    /// The bag without any entry for `id`.
    #[must_use]
    pub fn without(&self, id: ItemId) -> Self {
        Self(
            self.0
                .iter()
                .filter(|entry| entry.id != id)
                .copied()
                .collect(),
        )
    }

    /// Quantity of `id` in the bag (0 when absent).
    #[must_use]
    pub fn quantity_of(&self, id: ItemId) -> u32 {
        self.0
            .iter()
            .find(|entry| entry.id == id)
            .map_or(0, |entry| entry.quantity)
    }

    /// Number of distinct entries (what the header badge shows).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &BagItem> {
        self.0.iter()
    }
}

impl From<Vec<BagItem>> for Bag {
    /// Merge duplicate ids (first position wins) and drop zero quantities.
    fn from(entries: Vec<BagItem>) -> Self {
        let mut bag: Vec<BagItem> = Vec::with_capacity(entries.len());
        for entry in entries.into_iter().filter(|entry| entry.quantity > 0) {
            match bag.iter_mut().find(|existing| existing.id == entry.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(entry.quantity);
                }
                None => bag.push(entry),
            }
        }
        Self(bag)
    }
}

impl<'a> IntoIterator for &'a Bag {
    type Item = &'a BagItem;
    type IntoIter = std::slice::Iter<'a, BagItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
