use crate::dom::DomNode;

pub fn footer() -> DomNode {
    DomNode::new("footer")
        .child(DomNode::text("p", "Hollixton").class("footer__company-name logo"))
        .child(DomNode::text("p", "🇬🇧 United Kingdom").class("footer__country"))
}
