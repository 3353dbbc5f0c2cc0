//! Renderer-neutral DOM tree.
//!
//! The view layer produces a [`DomNode`] tree; [`crate::html`] serialises it
//! for the browser and `/snapshot` exposes it as JSON. Interactive elements
//! carry an `events` map from DOM event name to action name (e.g.
//! `"click" → "add:3"`), which the page script posts back to the server.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single node in the rendered tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomNode {
    /// HTML tag name (e.g. "div", "button", "input")
    pub tag: String,

    /// Stable identity for list entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// HTML attributes, ordered for deterministic output
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,

    /// DOM event name → action name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub events: BTreeMap<String, String>,

    /// Text content for leaf nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DomNode>,
}

/// A complete snapshot wrapping the root node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub root: DomNode,
}

impl DomNode {
    /// Create an empty element.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            ..Self::default()
        }
    }

    /// Create a simple text node.
    #[must_use]
    pub fn text(tag: &str, content: impl Into<String>) -> Self {
        Self::new(tag).with_text(content)
    }

    #[must_use]
    pub fn key(mut self, key: impl Display) -> Self {
        self.key = Some(key.to_string());
        self
    }

    #[must_use]
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.insert(name.to_owned(), value.into());
        self
    }

    #[must_use]
    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    /// Bind a DOM event to an action name.
    #[must_use]
    pub fn on(mut self, event: &str, action: impl Display) -> Self {
        self.events.insert(event.to_owned(), action.to_string());
        self
    }

    #[must_use]
    pub fn with_text(mut self, content: impl Into<String>) -> Self {
        self.text = Some(content.into());
        self
    }

    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn child_opt(mut self, child: Option<Self>) -> Self {
        self.children.extend(child);
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// The class attribute, if present.
    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.attrs.get("class").map(String::as_str)
    }

    /// Whether the class attribute contains `class` as a whole word.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.class_name()
            .is_some_and(|names| names.split_whitespace().any(|name| name == class))
    }

    /// Get an event action by event name.
    #[must_use]
    pub fn event(&self, name: &str) -> Option<&str> {
        self.events.get(name).map(String::as_str)
    }

    /// Depth-first search for the first node matching `predicate`.
    pub fn find(&self, predicate: &impl Fn(&Self) -> bool) -> Option<&Self> {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(predicate))
    }

    /// All nodes matching `predicate`, in document order.
    pub fn find_all<'a>(&'a self, predicate: &impl Fn(&Self) -> bool) -> Vec<&'a Self> {
        let mut found = Vec::new();
        self.collect(predicate, &mut found);
        found
    }

    fn collect<'a>(&'a self, predicate: &impl Fn(&Self) -> bool, found: &mut Vec<&'a Self>) {
        if predicate(self) {
            found.push(self);
        }
        for child in &self.children {
            child.collect(predicate, found);
        }
    }

    /// First node carrying `class`.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Option<&Self> {
        self.find(&|node: &Self| node.has_class(class))
    }

    /// Concatenated text of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut buf = String::new();
        self.push_text(&mut buf);
        buf
    }

    fn push_text(&self, buf: &mut String) {
        if let Some(text) = &self.text {
            buf.push_str(text);
        }
        for child in &self.children {
            child.push_text(buf);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> DomNode {
        DomNode::new("div")
            .key("app")
            .children([
                DomNode::text("h1", "Count: 0"),
                DomNode::text("button", "+")
                    .class("primary wide")
                    .on("click", "increment"),
            ])
    }

    #[test]
    fn test_snapshot_json_omits_empty_fields() {
        let json = serde_json::to_value(Snapshot { root: sample() }).unwrap();
        let heading = &json["root"]["children"][0];
        assert_eq!(heading["tag"], "h1");
        assert!(heading.get("attrs").is_none());
        assert!(heading.get("children").is_none());
        assert_eq!(json["root"]["children"][1]["events"]["click"], "increment");
    }

    #[test]
    fn test_parse_snapshot() {
        let json = r#"{
            "root": {
                "tag": "div",
                "key": "app",
                "children": [
                    { "tag": "h1", "text": "Count: 0" },
                    { "tag": "button", "events": { "click": "increment" }, "text": "+" }
                ]
            }
        }"#;
        let snap: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.root.key.as_deref(), Some("app"));
        assert_eq!(snap.root.children[1].event("click"), Some("increment"));
    }

    #[test]
    fn test_queries() {
        let root = sample();
        assert!(root.find_by_class("wide").is_some());
        assert!(root.find_by_class("wid").is_none());
        assert_eq!(root.text_content(), "Count: 0+");
        let with_events = root.find_all(&|node: &DomNode| !node.events.is_empty());
        assert_eq!(with_events.len(), 1);
    }
}
