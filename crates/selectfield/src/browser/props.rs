//! Props exchanged with JavaScript hosts.
//!
//! Hosts describe the component as JSON:
//!
//! ```json
//! {
//!   "name": "fruit",
//!   "options": [{"key": "a", "label": "Alpha"}, {"key": "b", "label": "Beta"}],
//!   "selectedOption": {"key": "a", "label": "Alpha"}
//! }
//! ```
//!
//! `name` and `selectedOption` may be omitted or `null`; `options` is
//! required.

use selectfield_core::Callback;
use selectfield_widgets::{SelectOption, SelectProps};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Browser runtime error.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// Props JSON was malformed or missing required fields
    #[error("invalid props: {0}")]
    InvalidProps(#[from] serde_json::Error),
    /// A DOM operation failed
    #[error("dom error: {0}")]
    Dom(String),
}

/// Serializable half of [`SelectProps`]; the callback is supplied separately.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropsData {
    /// Form field name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Candidate options
    pub options: Vec<SelectOption>,
    /// Active option
    #[serde(default)]
    pub selected_option: Option<SelectOption>,
}

impl PropsData {
    /// Parse props from host JSON.
    pub fn from_json(json: &str) -> Result<Self, BrowserError> {
        let data: Self = serde_json::from_str(json)?;
        debug!(
            options = data.options.len(),
            selected = data.selected_option.as_ref().map(|o| o.key.as_str()),
            "props received"
        );
        Ok(data)
    }

    /// Serialize props for a host.
    pub fn to_json(&self) -> Result<String, BrowserError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Attach the host callback.
    #[must_use]
    pub fn into_props(self, on_select: Callback<SelectOption>) -> SelectProps {
        SelectProps {
            name: self.name,
            options: self.options,
            selected_option: self.selected_option,
            on_select,
        }
    }
}

impl From<&SelectProps> for PropsData {
    fn from(props: &SelectProps) -> Self {
        Self {
            name: props.name.clone(),
            options: props.options.clone(),
            selected_option: props.selected_option.clone(),
        }
    }
}
