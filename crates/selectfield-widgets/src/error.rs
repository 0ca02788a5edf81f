//! Error types for select widgets.

use thiserror::Error;

/// Error raised while translating a control event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The control reported a key that is not in the current options
    #[error("no option with key '{key}'")]
    UnknownOption {
        /// Raw key reported by the control
        key: String,
    },
}
