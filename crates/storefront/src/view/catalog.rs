//! The main region: product grid or the selected item's detail panel.

use chrono::{DateTime, Utc};
use hollixton_core::Item;

use crate::dom::DomNode;
use crate::shop::catalog::{Listing, listing};
use crate::shop::{Action, ShopState};

pub const NO_MATCHES: &str = "No products matched your search.";

pub fn main(state: &ShopState, now: DateTime<Utc>) -> DomNode {
    let main = DomNode::new("main");
    match state.selected() {
        Some(item) => main.child(details(item)),
        None => main
            .child_opt(current_search(state.search()))
            .child(cards(state, now)),
    }
}

fn current_search(search: &str) -> Option<DomNode> {
    if search.is_empty() {
        return None;
    }
    let clear = DomNode::text("button", "X")
        .class("main__current-search__clear-search")
        .on("click", Action::ClearSearch);

    Some(
        DomNode::text("h3", format!("Current search: {search}"))
            .class("main__current-search")
            .child(clear),
    )
}

fn cards(state: &ShopState, now: DateTime<Utc>) -> DomNode {
    let section = DomNode::new("div")
        .class("main__product-cards")
        .child(DomNode::text("h2", state.tab().as_str()).class("main__title"));

    match listing(state) {
        Listing::NoMatches => {
            section.child(DomNode::text("p", NO_MATCHES).class("main__no-matches"))
        }
        Listing::Items(items) => section.child(
            DomNode::new("div")
                .class("main__product-card-list")
                .children(items.into_iter().map(|item| card(item, now))),
        ),
    }
}

fn card(item: &Item, now: DateTime<Utc>) -> DomNode {
    let new_label = item
        .is_new(now)
        .then(|| DomNode::text("span", "NEW!").class("product-card__new-label"));

    let top = DomNode::new("div").class("product-card__top").child(
        DomNode::new("img")
            .class("product-card__image")
            .attr("src", format!("{}?policy=product-small", item.image))
            .attr("alt", item.name.clone())
            .on("click", Action::SelectItem(item.id)),
    );

    let bottom = DomNode::new("div")
        .class("product-card__bottom")
        .child(DomNode::text("p", item.name.clone()).class("product-card__name"))
        .child(price_section(item, "product-card"));

    DomNode::new("div")
        .class("product-card")
        .key(format!("item-{}", item.id))
        .child_opt(new_label)
        .child(top)
        .child(bottom)
}

/// List price, plus the sale price when discounted. `block` is the BEM
/// block the classes hang off (`product-card`, `bag-item`).
pub fn price_section(item: &Item, block: &str) -> DomNode {
    let list_class = if item.is_discounted() {
        format!("{block}__price discounted")
    } else {
        format!("{block}__price")
    };

    DomNode::new("div")
        .class(&format!("{block}__price-section"))
        .child(DomNode::text("p", item.list_price().to_string()).class(&list_class))
        .child_opt(item.sale_price().map(|sale| {
            DomNode::text("p", sale.to_string()).class(&format!("{block}__discounted-price"))
        }))
}

fn details(item: &Item) -> DomNode {
    let info = DomNode::new("div")
        .class("product-details__info")
        .child(DomNode::text("h2", item.name.clone()).class("product-details__info__title"))
        .child(
            DomNode::text("button", "ADD TO BAG")
                .class("product-details__add-to-bag")
                .on("click", Action::AddToBag(item.id)),
        );

    DomNode::new("div").class("product-details-section").child(
        DomNode::new("div")
            .class("product-details")
            .key(format!("details-{}", item.id))
            .child(
                DomNode::new("img")
                    .attr("src", format!("{}?policy=product-large", item.image))
                    .attr("alt", item.name.clone()),
            )
            .child(info),
    )
}
