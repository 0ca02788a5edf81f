//! Core types and traits for the selectfield component.
//!
//! This crate provides the foundation the widget and its runtimes share:
//! - Element tree: [`Element`], [`Node`] with HTML serialization
//! - Input events: [`Event`]
//! - Component contract: [`Widget`]
//! - Host callbacks: [`Callback`]
//! - Styling: [`Color`], [`Stylesheet`], [`StyleRule`]

mod callback;
mod color;
mod element;
mod event;
mod style;
pub mod widget;

pub use callback::Callback;
pub use color::{Color, ColorParseError};
pub use element::{Attribute, Element, Node};
pub use event::Event;
pub use style::{scoped_class, StyleRule, Stylesheet};
pub use widget::{AccessibleRole, Message, TypeId, Widget};
