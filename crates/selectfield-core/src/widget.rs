//! Widget trait and related types.
//!
//! A widget is a pure function of its props: [`Widget::render`] produces an
//! element tree, and [`Widget::event`] translates raw input events into
//! typed messages and host callbacks. Widgets keep no state between
//! renders; the host owns everything that changes.
//!
//! # Examples
//!
//! ```
//! use selectfield_core::{AccessibleRole, TypeId};
//!
//! let string_type = TypeId::of::<String>();
//! let i32_type = TypeId::of::<i32>();
//! assert_ne!(string_type, i32_type);
//! assert_eq!(AccessibleRole::ComboBox.as_aria(), "combobox");
//! ```

use crate::element::Element;
use crate::event::Event;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Message produced by a handled event, downcast by the receiver.
pub type Message = Box<dyn Any>;

/// Core widget trait.
pub trait Widget {
    /// Error raised when an event cannot be translated.
    type Error: std::error::Error + 'static;

    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Produce the element tree for the current props.
    fn render(&self) -> Element;

    /// Handle an input event.
    ///
    /// Returns `Ok(None)` for events the widget ignores.
    fn event(&self, event: &Event) -> Result<Option<Message>, Self::Error>;

    /// Check if this widget is interactive (can receive events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Check if this widget can receive keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }
}

/// Accessible roles for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Combo box / dropdown
    ComboBox,
    /// Option inside a list box or combo box
    Option,
    /// List box
    ListBox,
}

impl AccessibleRole {
    /// ARIA role name.
    #[must_use]
    pub const fn as_aria(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::ComboBox => "combobox",
            Self::Option => "option",
            Self::ListBox => "listbox",
        }
    }
}
