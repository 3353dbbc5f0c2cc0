//! Whole-page rendering.
//!
//! [`render`] rebuilds the entire tree from the state on every change; there
//! is no diffing and no retained widget state. Every function here is pure.

mod catalog;
mod footer;
mod header;
mod modal;

use chrono::{DateTime, Utc};

use crate::dom::DomNode;
use crate::shop::ShopState;

/// Class of the root element.
pub const ROOT_CLASS: &str = "app";

/// Render the page for `state`. `now` decides which items are labelled new.
#[must_use]
pub fn render(state: &ShopState, now: DateTime<Utc>) -> DomNode {
    DomNode::new("div")
        .class(ROOT_CLASS)
        .child(header::header(state))
        .child(catalog::main(state, now))
        .child(footer::footer())
        .child_opt(modal::overlay(state))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use hollixton_core::{Bag, ItemId, Modal};

    use super::*;
    use crate::shop::StatePatch;
    use crate::shop::testing::{account, sample_catalog, state_with_catalog};

    #[test]
    fn test_layout_without_modal() {
        let tree = render(&ShopState::default(), Utc::now());
        let tags: Vec<&str> = tree.children.iter().map(|node| node.tag.as_str()).collect();
        assert_eq!(tags, vec!["header", "main", "footer"]);
    }

    #[test]
    fn test_modal_is_appended_last() {
        let mut state = ShopState::default();
        state.apply(StatePatch::new().modal(Some(Modal::Search)));
        let tree = render(&state, Utc::now());
        assert_eq!(tree.children.len(), 4);
        assert!(tree.children[3].has_class("modal-wrapper"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut state = state_with_catalog(sample_catalog());
        state.apply(
            StatePatch::new()
                .customer(Some(account(Bag::new()).customer))
                .bag(Bag::new().with_added(ItemId::new(2)))
                .modal(Some(Modal::Bag)),
        );
        let now = Utc::now();
        assert_eq!(render(&state, now), render(&state, now));
    }
}
