//! Fixtures shared by the unit tests of the shop and view modules.

use hollixton_core::{Account, Bag, Customer, Email, Item, ItemId};
use rust_decimal::Decimal;

use super::state::{ShopState, StatePatch};

/// A catalog item with whole-pound prices and no entry date.
pub fn item(id: i64, category: &str, price: i64, discounted: Option<i64>) -> Item {
    Item {
        id: ItemId::new(id),
        category: category.to_string().into(),
        name: format!("Item {id}"),
        image: format!("https://img.hollixton.test/{id}.jpg"),
        price: Decimal::new(price, 0),
        discounted_price: discounted.map(|amount| Decimal::new(amount, 0)),
        date_entered: None,
        stock: 10,
    }
}

/// Same as [`item`] with a chosen name.
pub fn named(id: i64, category: &str, name: &str) -> Item {
    Item {
        name: name.to_string(),
        ..item(id, category, 10, None)
    }
}

#[allow(clippy::unwrap_used)]
pub fn customer() -> Customer {
    Customer {
        id: Email::parse("nicolas@email.com").unwrap(),
        first_name: "Nicolas".to_string(),
        last_name: "Marcora".to_string(),
    }
}

pub fn account(bag: Bag) -> Account {
    Account {
        customer: customer(),
        bag,
    }
}

/// The two-item catalog used throughout the examples: a full-price Girls
/// item and a discounted Guys item.
pub fn sample_catalog() -> Vec<Item> {
    vec![item(1, "Girls", 20, None), item(2, "Guys", 30, Some(15))]
}

pub fn state_with_catalog(catalog: Vec<Item>) -> ShopState {
    let mut state = ShopState::default();
    state.apply(StatePatch::new().catalog(catalog));
    state
}
