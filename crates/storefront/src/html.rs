//! Serialise [`DomNode`] trees to HTML.
//!
//! Event bindings become `data-a_<event>` attributes; the page script turns
//! a click on such an element into `POST /actions/<action>` and swaps the
//! returned fragment into the mount point.

use crate::dom::DomNode;

/// Void elements that must not have closing tags
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Id of the element the app is mounted into.
pub const MOUNT_ID: &str = "app";

/// Client glue: posts clicked actions and swaps in the re-rendered app.
/// Elements marked `data-stop="click"` swallow clicks (the modal body, so
/// only the backdrop closes the overlay).
const CLIENT_SCRIPT: &str = r"
document.addEventListener('click', async (event) => {
  const target = event.target.closest('[data-a_click], [data-stop=click]');
  if (!target || !target.dataset.a_click) return;
  event.preventDefault();
  const resp = await fetch('/actions/' + encodeURIComponent(target.dataset.a_click), { method: 'POST' });
  if (resp.ok) document.getElementById('app').innerHTML = await resp.text();
});
";

/// Options for rendering a full HTML page.
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub root: DomNode,
    pub title: String,
    /// Blocking notice shown above the app (e.g. a failed sign-in).
    pub notice: Option<String>,
}

impl PageOptions {
    #[must_use]
    pub fn new(root: DomNode, title: impl Into<String>) -> Self {
        Self {
            root,
            title: title.into(),
            notice: None,
        }
    }

    #[must_use]
    pub fn with_notice(mut self, notice: Option<String>) -> Self {
        self.notice = notice;
        self
    }
}

/// Render a node tree to an HTML string.
#[must_use]
pub fn render_to_html(node: &DomNode) -> String {
    let mut buf = String::with_capacity(4096);
    write_node(node, &mut buf);
    buf
}

/// Render a full HTML page around the app tree.
#[must_use]
pub fn render_page(opts: &PageOptions) -> String {
    let body_html = render_to_html(&opts.root);

    let mut html = String::with_capacity(body_html.len() + 2048);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\" />\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
    html.push_str("<title>");
    html.push_str(&escape_html(&opts.title));
    html.push_str("</title>\n");
    html.push_str("</head>\n<body>\n");

    if let Some(notice) = &opts.notice {
        html.push_str("<div class=\"notice\" role=\"alert\">");
        html.push_str(&escape_html(notice));
        html.push_str("</div>\n");
    }

    html.push_str("<div id=\"");
    html.push_str(MOUNT_ID);
    html.push_str("\">");
    html.push_str(&body_html);
    html.push_str("</div>\n<script>");
    html.push_str(CLIENT_SCRIPT);
    html.push_str("</script>\n</body>\n</html>");
    html
}

fn write_node(node: &DomNode, buf: &mut String) {
    let is_void = VOID_ELEMENTS.contains(&node.tag.as_str());

    buf.push('<');
    buf.push_str(&node.tag);

    if let Some(key) = &node.key {
        push_attr(buf, "data-key", key);
    }

    for (name, value) in &node.attrs {
        push_attr(buf, name, value);
    }

    for (event, action) in &node.events {
        push_attr(buf, &format!("data-a_{event}"), action);
    }

    buf.push('>');

    if is_void {
        return;
    }

    if let Some(text) = &node.text {
        buf.push_str(&escape_html(text));
    }

    for child in &node.children {
        write_node(child, buf);
    }

    buf.push_str("</");
    buf.push_str(&node.tag);
    buf.push('>');
}

fn push_attr(buf: &mut String, name: &str, value: &str) {
    buf.push(' ');
    buf.push_str(name);
    buf.push_str("=\"");
    buf.push_str(&escape_attr(value));
    buf.push('"');
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
