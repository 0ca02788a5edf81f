//! SelectField: a dropdown select component for Rust and the browser.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { SelectComponent, stylesheet } from './select-field.js';
//!
//! async function main() {
//!     await init();
//!     const props = {
//!         name: 'fruit',
//!         options: [{ key: 'a', label: 'Alpha' }, { key: 'b', label: 'Beta' }],
//!         selectedOption: { key: 'a', label: 'Alpha' },
//!     };
//!     const select = new SelectComponent('root', JSON.stringify(props), (json) => {
//!         props.selectedOption = JSON.parse(json);
//!         select.update(JSON.stringify(props));
//!     });
//! }
//! ```

#![allow(
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::needless_pass_by_value,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    unreachable_pub
)]

pub use selectfield_core::*;
pub use selectfield_widgets as widgets;
pub use selectfield_widgets::{SelectError, SelectField, SelectOption, SelectProps, SelectionChanged};

pub mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::SelectComponent;

pub use browser::{BrowserError, PropsData};
