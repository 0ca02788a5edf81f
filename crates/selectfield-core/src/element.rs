//! Element tree produced by rendering.
//!
//! A component renders to a small, owned tree of [`Element`]s and text
//! [`Node`]s. The tree has two consumers: [`Element::to_html`] for static
//! output and the browser runtime, which mirrors it into the live DOM.
//!
//! # Examples
//!
//! ```
//! use selectfield_core::Element;
//!
//! let select = Element::new("select")
//!     .attr("name", "fruit")
//!     .child(Element::new("option").attr("value", "a").text("Apple"));
//!
//! assert_eq!(select.children().len(), 1);
//! assert_eq!(
//!     select.to_html(),
//!     r#"<select name="fruit"><option value="a">Apple</option></select>"#
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single attribute on an element.
///
/// A `None` value is a boolean attribute (`selected`, `disabled`) that is
/// rendered by name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name
    pub name: String,
    /// Attribute value (None for boolean attributes)
    pub value: Option<String>,
}

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// Nested element
    Element(Element),
    /// Text content
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An element with a tag, ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    tag: String,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with the given tag name.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name.into(), Some(value.into()));
        self
    }

    /// Set a boolean attribute.
    #[must_use]
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.set_attribute(name.into(), None);
        self
    }

    /// Append a class name.
    #[must_use]
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        let class = class.as_ref();
        let merged = match self.attribute("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attribute("class".to_string(), Some(merged));
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append children.
    #[must_use]
    pub fn children_from(mut self, nodes: impl IntoIterator<Item = impl Into<Node>>) -> Self {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append a text node.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    fn set_attribute(&mut self, name: String, value: Option<String>) {
        if let Some(existing) = self.attributes.iter_mut().find(|a| a.name == name) {
            existing.value = value;
        } else {
            self.attributes.push(Attribute { name, value });
        }
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// All attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Value of an attribute. Boolean attributes yield `Some("")`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_deref().unwrap_or(""))
    }

    /// Check whether an attribute is present.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    /// Check whether the `class` attribute contains a class name.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    /// Child nodes.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of this element and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Element(element) => element.collect_text(out),
                Node::Text(text) => out.push_str(text),
            }
        }
    }

    /// Serialize to an HTML fragment.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for attribute in &self.attributes {
            out.push(' ');
            out.push_str(&attribute.name);
            if let Some(value) = &attribute.value {
                out.push_str("=\"");
                escape_into(value, true, out);
                out.push('"');
            }
        }
        out.push('>');
        for node in &self.children {
            match node {
                Node::Element(element) => element.write_html(out),
                Node::Text(text) => escape_into(text, false, out),
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

fn escape_into(input: &str, in_attribute: bool, out: &mut String) {
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Builder Tests
    // =========================================================================

    #[test]
    fn test_element_new() {
        let el = Element::new("select");
        assert_eq!(el.tag(), "select");
        assert!(el.attributes().is_empty());
        assert!(el.children().is_empty());
    }

    #[test]
    fn test_attr_replaces_existing() {
        let el = Element::new("option").attr("value", "a").attr("value", "b");
        assert_eq!(el.attributes().len(), 1);
        assert_eq!(el.attribute("value"), Some("b"));
    }

    #[test]
    fn test_attributes_keep_insertion_order() {
        let el = Element::new("select").attr("name", "n").attr("id", "n");
        let names: Vec<&str> = el.attributes().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["name", "id"]);
    }

    #[test]
    fn test_flag_attribute() {
        let el = Element::new("option").flag("selected");
        assert!(el.has_attribute("selected"));
        assert_eq!(el.attribute("selected"), Some(""));
        assert!(!el.has_attribute("disabled"));
    }

    #[test]
    fn test_class_appends() {
        let el = Element::new("select").class("a").class("b");
        assert_eq!(el.attribute("class"), Some("a b"));
        assert!(el.has_class("a"));
        assert!(el.has_class("b"));
        assert!(!el.has_class("c"));
    }

    #[test]
    fn test_children_from() {
        let el = Element::new("select")
            .children_from(["x", "y"].iter().map(|v| Element::new("option").attr("value", *v)));
        assert_eq!(el.child_elements().count(), 2);
    }

    // =========================================================================
    // Text Tests
    // =========================================================================

    #[test]
    fn test_text_content_nested() {
        let el = Element::new("select")
            .child(Element::new("option").text("Alpha"))
            .child(Element::new("option").text("Beta"));
        assert_eq!(el.text_content(), "AlphaBeta");
    }

    #[test]
    fn test_child_elements_skip_text() {
        let el = Element::new("label").text("Pick").child(Element::new("select"));
        assert_eq!(el.children().len(), 2);
        assert_eq!(el.child_elements().count(), 1);
    }

    // =========================================================================
    // HTML Serialization Tests
    // =========================================================================

    #[test]
    fn test_to_html_empty() {
        assert_eq!(Element::new("select").to_html(), "<select></select>");
    }

    #[test]
    fn test_to_html_boolean_attribute() {
        let el = Element::new("option")
            .attr("value", "a")
            .flag("selected")
            .text("A");
        assert_eq!(el.to_html(), r#"<option value="a" selected>A</option>"#);
    }

    #[test]
    fn test_to_html_escapes_text() {
        let el = Element::new("option").text("Fish & <Chips>");
        assert_eq!(el.to_html(), "<option>Fish &amp; &lt;Chips&gt;</option>");
    }

    #[test]
    fn test_to_html_escapes_attribute() {
        let el = Element::new("option").attr("value", r#"say "hi""#);
        assert_eq!(el.to_html(), r#"<option value="say &quot;hi&quot;"></option>"#);
    }

    #[test]
    fn test_display_matches_to_html() {
        let el = Element::new("select").attr("id", "s");
        assert_eq!(el.to_string(), el.to_html());
    }

    #[test]
    fn test_serde_roundtrip() {
        let el = Element::new("select")
            .attr("name", "fruit")
            .child(Element::new("option").flag("selected").text("A"));
        let json = serde_json::to_string(&el).unwrap();
        let parsed: Element = serde_json::from_str(&json).unwrap();
        assert_eq!(el, parsed);
    }
}
