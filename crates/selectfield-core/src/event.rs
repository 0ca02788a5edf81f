//! Input events for widgets.

use serde::{Deserialize, Serialize};

/// Input event types.
///
/// Events carry the raw values the control reports, before any widget
/// resolves them into domain types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// The control's committed value changed
    Change {
        /// Raw value reported by the control
        value: String,
    },
    /// The control's value is being edited
    Input {
        /// Raw value reported by the control
        value: String,
    },
    /// Widget gained focus
    FocusIn,
    /// Widget lost focus
    FocusOut,
}

impl Event {
    /// Create a change event.
    #[must_use]
    pub fn change(value: impl Into<String>) -> Self {
        Self::Change {
            value: value.into(),
        }
    }

    /// DOM event name for this event.
    #[must_use]
    pub const fn dom_name(&self) -> &'static str {
        match self {
            Self::Change { .. } => "change",
            Self::Input { .. } => "input",
            Self::FocusIn => "focusin",
            Self::FocusOut => "focusout",
        }
    }

    /// Raw value carried by the event, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Change { value } | Self::Input { value } => Some(value),
            Self::FocusIn | Self::FocusOut => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_constructor() {
        assert_eq!(
            Event::change("b"),
            Event::Change {
                value: "b".to_string()
            }
        );
    }

    #[test]
    fn test_dom_names() {
        assert_eq!(Event::change("x").dom_name(), "change");
        assert_eq!(
            Event::Input {
                value: String::new()
            }
            .dom_name(),
            "input"
        );
        assert_eq!(Event::FocusIn.dom_name(), "focusin");
        assert_eq!(Event::FocusOut.dom_name(), "focusout");
    }

    #[test]
    fn test_value() {
        assert_eq!(Event::change("k").value(), Some("k"));
        assert_eq!(Event::FocusOut.value(), None);
    }

    #[test]
    fn test_event_json() {
        let json = serde_json::to_string(&Event::change("a")).unwrap();
        assert_eq!(json, r#"{"Change":{"value":"a"}}"#);
        let parsed: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Event::change("a"));
    }
}
