#![allow(clippy::unwrap_used)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::manual_assert)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
//! Testing harness for selectfield widgets.
//!
//! Renders widgets to an element tree, queries it with CSS-like selectors,
//! simulates control events and records host callbacks.
//!
//! ```ignore
//! use selectfield_test::{Harness, Recorder};
//!
//! let recorder = Recorder::new();
//! let mut harness = Harness::new(SelectField::new(props(recorder.callback())));
//! harness.assert_count("option", 2);
//! harness.change("select", "b").unwrap();
//! recorder.assert_called_once_with(&SelectOption::new("b", "Beta"));
//! ```

mod a11y;
mod harness;
mod recorder;
mod selector;

pub use a11y::{A11yChecker, A11yReport, A11yViolation, Impact};
pub use harness::{Harness, HarnessError};
pub use recorder::Recorder;
pub use selector::{Selector, SelectorError, SelectorParser};
