//! SelectField: a native dropdown bound to host-owned options.
//!
//! The host owns the option list and the current selection and passes
//! both in on every render, together with an `on_select` callback. The
//! widget renders one `<option>` per entry and, when the user picks one,
//! resolves the raw key back to the full [`SelectOption`] before calling
//! the host.

use crate::error::SelectError;
use crate::option::SelectOption;
use selectfield_core::{
    scoped_class, widget::Message, AccessibleRole, Callback, Color, Element, Event, StyleRule,
    Stylesheet, TypeId, Widget,
};
use tracing::{debug, warn};

/// Class scope of the select stylesheet.
pub const STYLE_SCOPE: &str = "select-field";

/// Local class applied to the `<select>` element.
pub const SELECT_CLASS: &str = "select";

/// Configuration record for [`SelectField`].
///
/// `options` and `on_select` are always required. The selection is
/// explicit: [`SelectProps::new`] takes one, and
/// [`SelectProps::without_selection`] is the only way to render without.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectProps {
    /// Form field name, also used as the element id
    pub name: Option<String>,
    /// Candidate options, rendered in order
    pub options: Vec<SelectOption>,
    /// Option currently considered active
    pub selected_option: Option<SelectOption>,
    /// Invoked with the resolved option on every user change
    pub on_select: Callback<SelectOption>,
}

impl SelectProps {
    /// Props with an active selection.
    pub fn new(
        options: impl IntoIterator<Item = SelectOption>,
        selected_option: SelectOption,
        on_select: Callback<SelectOption>,
    ) -> Self {
        Self {
            name: None,
            options: options.into_iter().collect(),
            selected_option: Some(selected_option),
            on_select,
        }
    }

    /// Props with no active selection (e.g. an empty option list).
    pub fn without_selection(
        options: impl IntoIterator<Item = SelectOption>,
        on_select: Callback<SelectOption>,
    ) -> Self {
        Self {
            name: None,
            options: options.into_iter().collect(),
            selected_option: None,
            on_select,
        }
    }

    /// Set the field name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Message emitted when the user picks an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    /// The resolved option
    pub option: SelectOption,
}

/// Dropdown widget over host-owned options.
#[derive(Debug, Clone)]
pub struct SelectField {
    props: SelectProps,
    test_id_value: Option<String>,
}

impl SelectField {
    /// Create a select field from props.
    #[must_use]
    pub const fn new(props: SelectProps) -> Self {
        Self {
            props,
            test_id_value: None,
        }
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Replace the props for the next render.
    pub fn set_props(&mut self, props: SelectProps) {
        self.props = props;
    }

    /// Current props.
    #[must_use]
    pub const fn props(&self) -> &SelectProps {
        &self.props
    }

    /// All options.
    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.props.options
    }

    /// Get option count.
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.props.options.len()
    }

    /// Check if empty (no options).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.options.is_empty()
    }

    /// Find the first option whose key equals `key`.
    ///
    /// With duplicate keys the earliest entry wins.
    #[must_use]
    pub fn resolve_key(&self, key: &str) -> Option<&SelectOption> {
        self.props.options.iter().find(|option| option.key == key)
    }

    fn active_index(&self) -> Option<usize> {
        let selected = self.props.selected_option.as_ref()?;
        self.props
            .options
            .iter()
            .position(|option| option.key == selected.key)
    }

    /// Value the control shows as active.
    ///
    /// `None` when there is no selection or the selected key is not in the
    /// current options.
    #[must_use]
    pub fn active_value(&self) -> Option<&str> {
        self.active_index()
            .map(|index| self.props.options[index].key.as_str())
    }

    /// Resolve a raw change value and notify the host.
    ///
    /// Calls `on_select` exactly once on success. An unknown key returns
    /// [`SelectError::UnknownOption`] and leaves `on_select` uncalled.
    pub fn handle_change(&self, key: &str) -> Result<SelectOption, SelectError> {
        let Some(option) = self.resolve_key(key).cloned() else {
            warn!(key, options = self.props.options.len(), "change for unknown option");
            return Err(SelectError::UnknownOption {
                key: key.to_string(),
            });
        };
        debug!(key, label = %option.label, "selection changed");
        self.props.on_select.emit(option.clone());
        Ok(option)
    }

    /// Scoped class name of the `<select>` element.
    #[must_use]
    pub fn class_name() -> String {
        scoped_class(STYLE_SCOPE, SELECT_CLASS)
    }

    /// Default stylesheet for the widget.
    #[must_use]
    pub fn stylesheet() -> Stylesheet {
        let border = Color::from_hex("#cccccc").unwrap_or(Color::BLACK);
        let focus = Color::from_hex("#3378f5").unwrap_or(Color::BLACK);
        let disabled = Color::from_hex("#b3b3b3").unwrap_or(Color::BLACK);

        Stylesheet::new(STYLE_SCOPE)
            .rule(
                StyleRule::new(SELECT_CLASS)
                    .declare("min-width", "150px")
                    .declare("height", "32px")
                    .declare("padding", "0 8px")
                    .declare("font-size", "16px")
                    .color("color", Color::BLACK)
                    .color("background-color", Color::WHITE)
                    .declare("border", format!("1px solid {}", border.to_css()))
                    .declare("border-radius", "4px"),
            )
            .rule(
                StyleRule::new(SELECT_CLASS)
                    .pseudo("focus")
                    .declare("outline", "none")
                    .color("border-color", focus),
            )
            .rule(
                StyleRule::new(SELECT_CLASS)
                    .pseudo("disabled")
                    .color("color", disabled),
            )
    }
}

impl Widget for SelectField {
    type Error = SelectError;

    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn render(&self) -> Element {
        let active = self.active_index();
        if active.is_none() {
            if let Some(selected) = &self.props.selected_option {
                debug!(key = %selected.key, "selected option not in options");
            }
        }

        let mut select = Element::new("select").class(Self::class_name());
        if let Some(name) = &self.props.name {
            select = select.attr("name", name).attr("id", name);
        }
        if let Some(id) = &self.test_id_value {
            select = select.attr("data-testid", id);
        }

        select.children_from(self.props.options.iter().enumerate().map(|(index, option)| {
            let entry = Element::new("option").attr("value", &option.key);
            let entry = if Some(index) == active {
                entry.flag("selected")
            } else {
                entry
            };
            entry.text(&option.label)
        }))
    }

    fn event(&self, event: &Event) -> Result<Option<Message>, SelectError> {
        match event {
            Event::Change { value } => {
                let option = self.handle_change(value)?;
                Ok(Some(Box::new(SelectionChanged { option })))
            }
            _ => Ok(None),
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        self.props.name.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ComboBox
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn alpha_beta() -> Vec<SelectOption> {
        vec![SelectOption::new("a", "Alpha"), SelectOption::new("b", "Beta")]
    }

    fn recording() -> (Rc<RefCell<Vec<SelectOption>>>, Callback<SelectOption>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let cb = Callback::new(move |opt: SelectOption| sink.borrow_mut().push(opt));
        (calls, cb)
    }

    fn field(options: Vec<SelectOption>, selected: usize) -> SelectField {
        let selected = options[selected].clone();
        SelectField::new(SelectProps::new(options, selected, Callback::noop()))
    }

    // =========================================================================
    // Props Tests
    // =========================================================================

    #[test]
    fn test_props_new_has_selection() {
        let props = SelectProps::new(alpha_beta(), SelectOption::new("a", "Alpha"), Callback::noop());
        assert_eq!(props.selected_option, Some(SelectOption::new("a", "Alpha")));
        assert_eq!(props.name, None);
        assert_eq!(props.options.len(), 2);
    }

    #[test]
    fn test_props_without_selection() {
        let props = SelectProps::without_selection(Vec::new(), Callback::noop());
        assert!(props.selected_option.is_none());
        assert!(props.options.is_empty());
    }

    #[test]
    fn test_props_name() {
        let props = SelectProps::without_selection(alpha_beta(), Callback::noop()).name("fruit");
        assert_eq!(props.name.as_deref(), Some("fruit"));
    }

    // =========================================================================
    // Key Resolution Tests
    // =========================================================================

    #[test]
    fn test_resolve_key_found() {
        let f = field(alpha_beta(), 0);
        assert_eq!(f.resolve_key("b"), Some(&SelectOption::new("b", "Beta")));
    }

    #[test]
    fn test_resolve_key_missing() {
        let f = field(alpha_beta(), 0);
        assert_eq!(f.resolve_key("zz"), None);
    }

    #[test]
    fn test_resolve_key_first_duplicate_wins() {
        let options = vec![
            SelectOption::new("dup", "First"),
            SelectOption::new("dup", "Second"),
        ];
        let f = field(options, 0);
        assert_eq!(f.resolve_key("dup").map(|o| o.label.as_str()), Some("First"));
    }

    #[test]
    fn test_resolve_key_idempotent() {
        let f = field(alpha_beta(), 0);
        assert_eq!(f.resolve_key("a"), f.resolve_key("a"));
    }

    // =========================================================================
    // Render Tests
    // =========================================================================

    #[test]
    fn test_render_alpha_beta() {
        let f = field(alpha_beta(), 0);
        let el = f.render();
        assert_eq!(el.tag(), "select");
        let entries: Vec<_> = el.child_elements().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text_content(), "Alpha");
        assert_eq!(entries[0].attribute("value"), Some("a"));
        assert!(entries[0].has_attribute("selected"));
        assert_eq!(entries[1].text_content(), "Beta");
        assert!(!entries[1].has_attribute("selected"));
        assert_eq!(f.active_value(), Some("a"));
    }

    #[test]
    fn test_render_html() {
        let props = SelectProps::new(alpha_beta(), SelectOption::new("b", "Beta"), Callback::noop())
            .name("fruit");
        let html = SelectField::new(props).render().to_html();
        assert_eq!(
            html,
            "<select class=\"select-field__select\" name=\"fruit\" id=\"fruit\">\
             <option value=\"a\">Alpha</option>\
             <option value=\"b\" selected>Beta</option></select>"
        );
    }

    #[test]
    fn test_render_without_name_has_no_id() {
        let el = field(alpha_beta(), 0).render();
        assert!(!el.has_attribute("name"));
        assert!(!el.has_attribute("id"));
        assert!(el.has_class(&SelectField::class_name()));
    }

    #[test]
    fn test_render_test_id() {
        let el = field(alpha_beta(), 0).with_test_id("picker").render();
        assert_eq!(el.attribute("data-testid"), Some("picker"));
    }

    #[test]
    fn test_render_empty_options() {
        let f = SelectField::new(SelectProps::without_selection(Vec::new(), Callback::noop()));
        let el = f.render();
        assert_eq!(el.child_elements().count(), 0);
        assert_eq!(f.active_value(), None);
        assert!(f.is_empty());
    }

    #[test]
    fn test_render_selection_not_in_options() {
        let props = SelectProps::new(alpha_beta(), SelectOption::new("gone", "Gone"), Callback::noop());
        let f = SelectField::new(props);
        let el = f.render();
        assert!(el.child_elements().all(|e| !e.has_attribute("selected")));
        assert_eq!(f.active_value(), None);
    }

    #[test]
    fn test_render_duplicate_keys_marks_first_only() {
        let options = vec![
            SelectOption::new("dup", "First"),
            SelectOption::new("dup", "Second"),
        ];
        let el = field(options, 1).render();
        let flags: Vec<bool> = el
            .child_elements()
            .map(|e| e.has_attribute("selected"))
            .collect();
        assert_eq!(flags, vec![true, false]);
    }

    // =========================================================================
    // Change Handling Tests
    // =========================================================================

    #[test]
    fn test_handle_change_invokes_callback_once() {
        let (calls, cb) = recording();
        let f = SelectField::new(SelectProps::new(alpha_beta(), SelectOption::new("a", "Alpha"), cb));
        let resolved = f.handle_change("b").unwrap();
        assert_eq!(resolved, SelectOption::new("b", "Beta"));
        assert_eq!(*calls.borrow(), vec![SelectOption::new("b", "Beta")]);
    }

    #[test]
    fn test_handle_change_unknown_key_skips_callback() {
        let (calls, cb) = recording();
        let f = SelectField::new(SelectProps::new(alpha_beta(), SelectOption::new("a", "Alpha"), cb));
        let err = f.handle_change("zz").unwrap_err();
        assert_eq!(
            err,
            SelectError::UnknownOption {
                key: "zz".to_string()
            }
        );
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_handle_change_on_empty_list() {
        let (calls, cb) = recording();
        let f = SelectField::new(SelectProps::without_selection(Vec::new(), cb));
        assert!(f.handle_change("").is_err());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_handle_change_does_not_mutate_props() {
        let f = field(alpha_beta(), 0);
        f.handle_change("b").unwrap();
        assert_eq!(f.active_value(), Some("a"));
    }

    #[test]
    fn test_set_props_rerenders() {
        let mut f = field(alpha_beta(), 0);
        f.set_props(SelectProps::new(alpha_beta(), SelectOption::new("b", "Beta"), Callback::noop()));
        assert_eq!(f.active_value(), Some("b"));
        assert_eq!(f.props().options.len(), 2);
    }

    // =========================================================================
    // Widget Trait Tests
    // =========================================================================

    #[test]
    fn test_event_change_returns_message() {
        let f = field(alpha_beta(), 0);
        let msg = f.event(&Event::change("b")).unwrap().unwrap();
        let msg = msg.downcast::<SelectionChanged>().unwrap();
        assert_eq!(msg.option, SelectOption::new("b", "Beta"));
    }

    #[test]
    fn test_event_ignores_focus() {
        let (calls, cb) = recording();
        let f = SelectField::new(SelectProps::new(alpha_beta(), SelectOption::new("a", "Alpha"), cb));
        assert!(f.event(&Event::FocusIn).unwrap().is_none());
        assert!(f.event(&Event::FocusOut).unwrap().is_none());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_event_unknown_key_is_error() {
        let f = field(alpha_beta(), 0);
        assert!(f.event(&Event::change("nope")).is_err());
    }

    #[test]
    fn test_widget_metadata() {
        let props = SelectProps::new(alpha_beta(), SelectOption::new("a", "Alpha"), Callback::noop())
            .name("fruit");
        let f = SelectField::new(props).with_test_id("fruit-select");
        assert_eq!(Widget::type_id(&f), TypeId::of::<SelectField>());
        assert!(f.is_interactive());
        assert!(f.is_focusable());
        assert_eq!(f.accessible_name(), Some("fruit"));
        assert_eq!(f.accessible_role(), AccessibleRole::ComboBox);
        assert_eq!(Widget::test_id(&f), Some("fruit-select"));
    }

    // =========================================================================
    // Stylesheet Tests
    // =========================================================================

    #[test]
    fn test_stylesheet_targets_rendered_class() {
        let sheet = SelectField::stylesheet();
        assert_eq!(sheet.scope(), STYLE_SCOPE);
        let css = sheet.to_css();
        assert!(css.contains(&format!(".{} {{", SelectField::class_name())));
        assert!(css.contains(":focus"));
    }

    #[test]
    fn test_stylesheet_palette() {
        let css = SelectField::stylesheet().to_css();
        assert!(css.contains("border: 1px solid #cccccc;"));
        assert!(css.contains("border-color: #3378f5;"));
        assert!(css.contains("color: #b3b3b3;"));
        assert!(css.contains("background-color: #ffffff;"));
    }

    // =========================================================================
    // Property Tests
    // =========================================================================

    fn options_strategy() -> impl Strategy<Value = Vec<SelectOption>> {
        prop::collection::btree_map("[a-z]{1,8}", "[A-Za-z ]{0,12}", 1..20).prop_map(|m| {
            m.into_iter()
                .map(|(key, label)| SelectOption::new(key, label))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_render_completeness(options in options_strategy()) {
            let f = field(options.clone(), 0);
            let el = f.render();
            let rendered: Vec<(String, String)> = el
                .child_elements()
                .map(|e| (e.attribute("value").unwrap_or_default().to_string(), e.text_content()))
                .collect();
            let expected: Vec<(String, String)> = options
                .iter()
                .map(|o| (o.key.clone(), o.label.clone()))
                .collect();
            prop_assert_eq!(rendered, expected);
        }

        #[test]
        fn prop_selection_reflects_prop(options in options_strategy(), pick in any::<prop::sample::Index>()) {
            let index = pick.index(options.len());
            let f = field(options.clone(), index);
            prop_assert_eq!(f.active_value(), Some(options[index].key.as_str()));
        }

        #[test]
        fn prop_change_round_trip(options in options_strategy(), pick in any::<prop::sample::Index>()) {
            let index = pick.index(options.len());
            let (calls, cb) = recording();
            let f = SelectField::new(SelectProps::new(options.clone(), options[0].clone(), cb));
            f.handle_change(&options[index].key).unwrap();
            prop_assert_eq!(calls.borrow().len(), 1);
            prop_assert_eq!(&calls.borrow()[0], &options[index]);
        }
    }
}
