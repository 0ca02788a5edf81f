//! Widget implementations for the selectfield component.

pub mod error;
pub mod option;
pub mod select_field;

pub use error::SelectError;
pub use option::SelectOption;
pub use select_field::{SelectField, SelectProps, SelectionChanged, SELECT_CLASS, STYLE_SCOPE};
