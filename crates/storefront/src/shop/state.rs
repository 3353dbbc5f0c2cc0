//! The single application state value and its only write path.
//!
//! Fields are private: the rest of the crate reads through accessors and
//! writes by handing a [`StatePatch`] to [`ShopState::apply`].

use hollixton_core::{Bag, Customer, Item, ItemId, Modal, Tab};

/// Everything the view renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopState {
    catalog: Vec<Item>,
    tab: Tab,
    modal: Option<Modal>,
    search: String,
    customer: Option<Customer>,
    selected: Option<Item>,
    bag: Bag,
}

impl ShopState {
    /// Catalog in the order the record store returned it.
    #[must_use]
    pub fn catalog(&self) -> &[Item] {
        &self.catalog
    }

    #[must_use]
    pub const fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub const fn modal(&self) -> Option<Modal> {
        self.modal
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub const fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.customer.is_some()
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&Item> {
        self.selected.as_ref()
    }

    #[must_use]
    pub const fn bag(&self) -> &Bag {
        &self.bag
    }

    /// Look up a catalog item by id. `None` before the catalog has loaded or
    /// when the id is not in it.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.catalog.iter().find(|item| item.id == id)
    }

    /// Merge `patch` into the state.
    ///
    /// Shallow: every field present in the patch replaces the whole field;
    /// absent fields are left alone. No validation happens here.
    pub fn apply(&mut self, patch: StatePatch) {
        let StatePatch {
            catalog,
            tab,
            modal,
            search,
            customer,
            selected,
            bag,
        } = patch;

        if let Some(catalog) = catalog {
            self.catalog = catalog;
        }
        if let Some(tab) = tab {
            self.tab = tab;
        }
        if let Some(modal) = modal {
            self.modal = modal;
        }
        if let Some(search) = search {
            self.search = search;
        }
        if let Some(customer) = customer {
            self.customer = customer;
        }
        if let Some(selected) = selected {
            self.selected = selected;
        }
        if let Some(bag) = bag {
            self.bag = bag;
        }
    }
}

/// A partial update of [`ShopState`].
///
/// Nullable fields use `Option<Option<_>>`: the outer `None` means "leave
/// alone", `Some(None)` means "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct StatePatch {
    pub catalog: Option<Vec<Item>>,
    pub tab: Option<Tab>,
    pub modal: Option<Option<Modal>>,
    pub search: Option<String>,
    pub customer: Option<Option<Customer>>,
    pub selected: Option<Option<Item>>,
    pub bag: Option<Bag>,
}

impl StatePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(mut self, catalog: Vec<Item>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn tab(mut self, tab: Tab) -> Self {
        self.tab = Some(tab);
        self
    }

    pub fn modal(mut self, modal: Option<Modal>) -> Self {
        self.modal = Some(modal);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn customer(mut self, customer: Option<Customer>) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn selected(mut self, selected: Option<Item>) -> Self {
        self.selected = Some(selected);
        self
    }

    pub fn bag(mut self, bag: Bag) -> Self {
        self.bag = Some(bag);
        self
    }

    /// Whether applying this patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
