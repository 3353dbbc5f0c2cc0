//! Derived views of the state: the visible catalog and the priced bag.
//!
//! Pure functions over [`ShopState`]; the view layer calls them on every
//! render.

use hollixton_core::{Item, Price, Tab};
use rust_decimal::Decimal;

use super::state::ShopState;

/// What the catalog grid should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<'a> {
    /// Items to render as cards, in catalog order. May be empty when no
    /// search is active (e.g. the Sale tab with nothing on sale).
    Items(Vec<&'a Item>),
    /// A search is active and nothing matched.
    NoMatches,
}

/// Keep the items that belong on `tab`.
#[must_use]
pub fn filter_by_tab<'a, I>(items: I, tab: Tab) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    items.into_iter().filter(|item| tab.admits(item)).collect()
}

/// Keep the items whose name contains `search`, ignoring case. An empty
/// search keeps everything.
#[must_use]
pub fn filter_by_search<'a>(items: Vec<&'a Item>, search: &str) -> Vec<&'a Item> {
    if search.is_empty() {
        return items;
    }
    let needle = search.to_lowercase();
    items
        .into_iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .collect()
}

/// Tab filter, then search filter.
#[must_use]
pub fn listing(state: &ShopState) -> Listing<'_> {
    let items = filter_by_search(filter_by_tab(state.catalog(), state.tab()), state.search());
    if items.is_empty() && !state.search().is_empty() {
        Listing::NoMatches
    } else {
        Listing::Items(items)
    }
}

/// A bag entry joined with its catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BagLine<'a> {
    pub item: &'a Item,
    pub quantity: u32,
}

impl BagLine<'_> {
    /// Charged price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.item.effective_price() * Decimal::from(self.quantity)
    }
}

/// Bag entries joined with the catalog.
///
/// Entries whose item is not in the catalog (not loaded yet, or dropped from
/// the store) are left out of the lines and the total, and logged. They still
/// count towards the header badge, and the bag modal lists them as
/// unavailable so they can be removed.
#[must_use]
pub fn bag_lines(state: &ShopState) -> Vec<BagLine<'_>> {
    state
        .bag()
        .iter()
        .filter_map(|entry| match state.item(entry.id) {
            Some(item) => Some(BagLine {
                item,
                quantity: entry.quantity,
            }),
            None => {
                tracing::warn!(item_id = %entry.id, "Bag entry has no catalog item");
                None
            }
        })
        .collect()
}

/// Sum of line subtotals.
#[must_use]
pub fn bag_total(lines: &[BagLine<'_>]) -> Price {
    Price::gbp(lines.iter().map(BagLine::subtotal).sum())
}
