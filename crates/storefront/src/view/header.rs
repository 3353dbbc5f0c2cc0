//! Logo, tab menu and the search/profile/bag icons.

use hollixton_core::{Modal, Tab};

use crate::dom::DomNode;
use crate::shop::{Action, ShopState};

pub fn header(state: &ShopState) -> DomNode {
    DomNode::new("header").child(left()).child(right(state))
}

fn left() -> DomNode {
    let logo = DomNode::new("a")
        .on("click", Action::Home)
        .child(DomNode::text("h1", "Hollixton").class("logo"));

    DomNode::new("div")
        .class("header__left")
        .child(logo)
        .children(Tab::MENU.into_iter().map(|tab| {
            DomNode::text("a", tab.as_str())
                .key(format!("tab-{}", tab.as_str().to_ascii_lowercase()))
                .on("click", Action::ShowTab(tab))
        }))
}

fn right(state: &ShopState) -> DomNode {
    let search = DomNode::new("a")
        .class("header__search-link")
        .on("click", Action::OpenModal(Modal::Search))
        .child(icon("search", "Search"));

    let profile = DomNode::new("a")
        .class("header__profile-link")
        .on("click", Action::OpenProfile)
        .child(icon("user", "Profile"));

    // Counts entries, not units
    let bag = DomNode::new("a")
        .class("header__bag-link")
        .on("click", Action::OpenModal(Modal::Bag))
        .child(icon("bag", "Bag"))
        .child(
            DomNode::text("span", state.bag().len().to_string())
                .class("header__bag-link__bag-count"),
        );

    DomNode::new("div")
        .class("header__right")
        .child(search)
        .child(profile)
        .child(bag)
}

/// Icons live in the directory served under `/assets`.
fn icon(name: &str, alt: &str) -> DomNode {
    DomNode::new("img")
        .attr("src", format!("/assets/icons/{name}.svg"))
        .attr("alt", alt)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use hollixton_core::{Bag, ItemId};

    use super::*;
    use crate::shop::StatePatch;

    #[test]
    fn test_menu_links_carry_tab_actions() {
        let node = header(&ShopState::default());
        let links: Vec<(String, String)> = node
            .find_by_class("header__left")
            .unwrap()
            .children
            .iter()
            .skip(1)
            .map(|link| (link.text_content(), link.event("click").unwrap().to_string()))
            .collect();
        assert_eq!(
            links,
            vec![
                ("Girls".to_string(), "tab:girls".to_string()),
                ("Guys".to_string(), "tab:guys".to_string()),
                ("Sale".to_string(), "tab:sale".to_string()),
            ]
        );
    }

    #[test]
    fn test_logo_goes_home() {
        let node = header(&ShopState::default());
        let logo = node.find(&|n: &DomNode| n.event("click") == Some("home"));
        assert_eq!(logo.unwrap().text_content(), "Hollixton");
    }

    #[test]
    fn test_bag_count_is_number_of_entries() {
        let mut state = ShopState::default();
        let bag = Bag::new()
            .with_added(ItemId::new(1))
            .with_added(ItemId::new(1))
            .with_added(ItemId::new(2));
        state.apply(StatePatch::new().bag(bag));

        let node = header(&state);
        let count = node.find_by_class("header__bag-link__bag-count").unwrap();
        assert_eq!(count.text_content(), "2");
    }

    #[test]
    fn test_icons_open_modals() {
        let node = header(&ShopState::default());
        let right = node.find_by_class("header__right").unwrap();
        let actions: Vec<&str> = right
            .children
            .iter()
            .map(|link| link.event("click").unwrap())
            .collect();
        assert_eq!(actions, vec!["modal:search", "profile", "modal:bag"]);
    }

    #[test]
    fn test_icons_exist_in_shipped_assets() {
        let node = header(&ShopState::default());
        let icons = node.find_all(&|n: &DomNode| n.tag == "img");
        assert_eq!(icons.len(), 3);
        for icon in icons {
            let src = icon.attrs.get("src").unwrap();
            let relative = src.strip_prefix("/assets/").unwrap();
            let path = std::path::Path::new(crate::config::DEFAULT_ASSETS_DIR).join(relative);
            assert!(path.is_file(), "{}", path.display());
        }
    }
}
