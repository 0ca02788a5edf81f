//! Test harness for selectfield widgets.
//!
//! Renders a widget, queries the element tree with CSS-like selectors and
//! simulates control events the way a browser would deliver them.

use crate::selector::{Selector, SelectorError};
use selectfield_core::{Element, Event, Message, Widget};
use thiserror::Error;

/// Tags that accept `change` events.
const FORM_CONTROLS: [&str; 3] = ["select", "input", "textarea"];

/// Error from a simulated interaction.
#[derive(Debug, Error)]
pub enum HarnessError<E: std::error::Error + 'static> {
    /// Selector could not be parsed
    #[error("invalid selector: {0}")]
    InvalidSelector(#[from] SelectorError),
    /// No rendered element matched the selector
    #[error("no element matches '{0}'")]
    NotFound(String),
    /// The selector matched, but not a form control
    #[error("'{0}' does not match a form control")]
    NotAControl(String),
    /// The widget rejected the event
    #[error("widget error: {0}")]
    Widget(#[source] E),
}

/// Test harness for interacting with a widget.
pub struct Harness<W: Widget> {
    widget: W,
    tree: Element,
}

impl<W: Widget> Harness<W> {
    /// Create a new harness and render the widget.
    pub fn new(widget: W) -> Self {
        let tree = widget.render();
        Self { widget, tree }
    }

    /// Widget under test.
    pub const fn widget(&self) -> &W {
        &self.widget
    }

    /// Mutate the widget (e.g. new props from the host) and re-render.
    pub fn update(&mut self, f: impl FnOnce(&mut W)) -> &mut Self {
        f(&mut self.widget);
        self.rerender();
        self
    }

    /// Re-render the widget.
    pub fn rerender(&mut self) -> &mut Self {
        self.tree = self.widget.render();
        self
    }

    /// Last rendered tree.
    pub const fn tree(&self) -> &Element {
        &self.tree
    }

    /// Last rendered tree as HTML.
    pub fn html(&self) -> String {
        self.tree.to_html()
    }

    // === Event Simulation ===

    /// Simulate the user committing `value` on the control matching
    /// `selector`.
    ///
    /// The first match must be a `select`, `input` or `textarea`.
    pub fn change(
        &mut self,
        selector: &str,
        value: &str,
    ) -> Result<Option<Message>, HarnessError<W::Error>> {
        let sel = Selector::parse(selector)?;
        let target = sel
            .select_all(&self.tree)
            .into_iter()
            .next()
            .ok_or_else(|| HarnessError::NotFound(selector.to_string()))?;
        if !FORM_CONTROLS.contains(&target.tag()) {
            return Err(HarnessError::NotAControl(selector.to_string()));
        }
        self.dispatch(&Event::change(value))
            .map_err(HarnessError::Widget)
    }

    /// Deliver an event to the widget and re-render.
    pub fn dispatch(&mut self, event: &Event) -> Result<Option<Message>, W::Error> {
        let result = self.widget.event(event);
        self.rerender();
        result
    }

    // === Queries ===

    /// First element matching the selector.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<&Element> {
        self.query_all(selector).into_iter().next()
    }

    /// All elements matching the selector, in document order.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<&Element> {
        Selector::parse(selector)
            .map(|sel| sel.select_all(&self.tree))
            .unwrap_or_default()
    }

    /// Text content of the first match (empty if none).
    #[must_use]
    pub fn text(&self, selector: &str) -> String {
        self.query(selector)
            .map(Element::text_content)
            .unwrap_or_default()
    }

    /// Text content of every match.
    #[must_use]
    pub fn texts(&self, selector: &str) -> Vec<String> {
        self.query_all(selector)
            .into_iter()
            .map(Element::text_content)
            .collect()
    }

    /// Attribute value on the first match.
    #[must_use]
    pub fn attribute(&self, selector: &str, name: &str) -> Option<&str> {
        self.query(selector).and_then(|el| el.attribute(name))
    }

    /// Check if any element matches.
    #[must_use]
    pub fn exists(&self, selector: &str) -> bool {
        self.query(selector).is_some()
    }

    // === Assertions ===

    /// Assert that an element exists.
    pub fn assert_exists(&self, selector: &str) -> &Self {
        assert!(
            self.exists(selector),
            "Expected element matching '{selector}' to exist in {}",
            self.html()
        );
        self
    }

    /// Assert that no element matches.
    pub fn assert_not_exists(&self, selector: &str) -> &Self {
        assert!(
            !self.exists(selector),
            "Expected no element matching '{selector}' in {}",
            self.html()
        );
        self
    }

    /// Assert the number of matches.
    pub fn assert_count(&self, selector: &str, expected: usize) -> &Self {
        let actual = self.query_all(selector).len();
        assert_eq!(
            actual, expected,
            "Expected {expected} elements matching '{selector}', found {actual}"
        );
        self
    }

    /// Assert the text of the first match.
    pub fn assert_text(&self, selector: &str, expected: &str) -> &Self {
        let actual = self.text(selector);
        assert_eq!(
            actual, expected,
            "Expected text '{expected}' for '{selector}', got '{actual}'"
        );
        self
    }

    /// Assert an attribute of the first match.
    pub fn assert_attribute(&self, selector: &str, name: &str, expected: &str) -> &Self {
        let actual = self.attribute(selector, name);
        assert_eq!(
            actual,
            Some(expected),
            "Expected {name}='{expected}' on '{selector}'"
        );
        self
    }
}
