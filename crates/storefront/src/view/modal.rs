//! The modal overlay and its four bodies.
//!
//! Clicking the backdrop closes the overlay; the modal body is marked
//! `data-stop="click"` so clicks inside it do not reach the backdrop.

use hollixton_core::{BagItem, Modal};

use crate::dom::DomNode;
use crate::shop::catalog::{BagLine, bag_lines, bag_total};
use crate::shop::{Action, ShopState};

use super::catalog::price_section;

pub const EMPTY_BAG: &str = "Your bag is currently empty.";

pub fn overlay(state: &ShopState) -> Option<DomNode> {
    let modal = state.modal()?;

    let contents = match modal {
        Modal::Search => search(state),
        Modal::Profile => profile(state),
        Modal::SignIn => sign_in(),
        Modal::Bag => bag(state),
    };

    let body = DomNode::new("div")
        .class("modal")
        .attr("data-stop", "click")
        .child(
            DomNode::text("button", "X")
                .class("close-modal")
                .on("click", Action::CloseModal),
        )
        .child(contents);

    Some(
        DomNode::new("div")
            .class("modal-wrapper")
            .key(format!("modal-{}", modal.slug()))
            .on("click", Action::CloseModal)
            .child(body),
    )
}

fn search(state: &ShopState) -> DomNode {
    let form = DomNode::new("form")
        .class("search-modal__form")
        .attr("method", "post")
        .attr("action", "/search")
        .child(
            DomNode::new("input")
                .class("search-modal__search-bar")
                .attr("type", "search")
                .attr("name", "search")
                .attr("placeholder", "Search...")
                .attr("value", state.search())
                .attr("autofocus", "autofocus"),
        );

    DomNode::new("div")
        .class("search-modal modal-contents")
        .child(DomNode::text("h2", "Search for your favourite items!").class("search-modal__title"))
        .child(form)
}

fn sign_in() -> DomNode {
    let form = DomNode::new("form")
        .class("profile-modal__sign-in-form")
        .attr("method", "post")
        .attr("action", "/sign-in")
        .child(DomNode::text("label", "Email").attr("for", "email"))
        .child(
            DomNode::new("input")
                .attr("id", "email")
                .attr("type", "email")
                .attr("name", "email")
                .attr("required", "required"),
        )
        .child(DomNode::text("label", "Password").attr("for", "password"))
        .child(
            DomNode::new("input")
                .attr("id", "password")
                .attr("type", "password")
                .attr("name", "password")
                .attr("required", "required"),
        )
        .child(DomNode::text("button", "SIGN IN").attr("type", "submit"));

    DomNode::new("div")
        .class("sign-in-modal modal-contents")
        .child(DomNode::text("h2", "Sign In").class("profile-modal__title"))
        .child(form)
}

fn profile(state: &ShopState) -> DomNode {
    let first_name = state
        .customer()
        .map_or("", |customer| customer.first_name.as_str());

    DomNode::new("div")
        .class("profile-modal modal-contents")
        .child(DomNode::text("h2", "Profile").class("profile-modal__title"))
        .child(DomNode::text("p", format!("Hey, {first_name}!")).class("profile-modal__greeting"))
        .child(
            DomNode::text("button", "SIGN OUT")
                .class("profile-modal__sign-out")
                .on("click", Action::SignOut),
        )
}

fn bag(state: &ShopState) -> DomNode {
    let contents = DomNode::new("div")
        .class("bag-modal modal-contents")
        .child(DomNode::text("h2", "Bag"));

    if state.bag().is_empty() {
        return contents.child(DomNode::text("p", EMPTY_BAG));
    }

    // Rows follow bag order; entries missing from the catalog keep a REMOVE
    let rows = state.bag().iter().map(|entry| match state.item(entry.id) {
        Some(item) => bag_item(&BagLine {
            item,
            quantity: entry.quantity,
        }),
        None => unavailable_item(entry),
    });
    let contents = contents.children(rows);

    let lines = bag_lines(state);
    if lines.is_empty() {
        return contents;
    }
    let total = bag_total(&lines);
    contents
        .child(DomNode::text("button", format!("Pay now: {}", total.display_fixed())).class("pay"))
}

fn unavailable_item(entry: &BagItem) -> DomNode {
    DomNode::new("div")
        .class("bag-item bag-item--unavailable")
        .key(format!("bag-{}", entry.id))
        .child(
            DomNode::new("div")
                .class("bag-item__info")
                .child(
                    DomNode::text("p", format!("Item #{} is no longer available", entry.id))
                        .class("bag-item__name"),
                )
                .child(
                    DomNode::text("p", format!("(x{})", entry.quantity))
                        .class("bag-item__quantity"),
                )
                .child(
                    DomNode::text("button", "REMOVE")
                        .class("bag-item__remove secondary")
                        .on("click", Action::RemoveFromBag(entry.id)),
                ),
        )
}

fn bag_item(line: &BagLine<'_>) -> DomNode {
    let item = line.item;

    let prices = price_section(item, "bag-item")
        .child(DomNode::text("p", format!("(x{})", line.quantity)).class("bag-item__quantity"));

    let info = DomNode::new("div")
        .class("bag-item__info")
        .child(
            DomNode::text("h3", item.name.clone())
                .class("bag-item__name")
                .on("click", Action::SelectItem(item.id)),
        )
        .child(prices)
        .child(
            DomNode::text("button", "REMOVE")
                .class("bag-item__remove secondary")
                .on("click", Action::RemoveFromBag(item.id)),
        );

    DomNode::new("div")
        .class("bag-item")
        .key(format!("bag-{}", item.id))
        .child(
            DomNode::new("img")
                .class("bag-item__image")
                .attr("src", format!("{}?policy=product-small", item.image))
                .attr("alt", item.name.clone()),
        )
        .child(info)
}
