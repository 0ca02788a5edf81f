//! Browser runtime for the select component.
//!
//! Bridges host props passed as JSON to [`SelectField`](crate::SelectField)
//! and mirrors its element tree into the DOM.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod component;
#[cfg(target_arch = "wasm32")]
pub mod dom;

// Cross-platform modules
pub mod props;

#[cfg(target_arch = "wasm32")]
pub use component::SelectComponent;
pub use props::{BrowserError, PropsData};
