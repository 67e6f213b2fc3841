//! Labels and the borders layered around them.
//!
//! A [`Label`] is plain centered text. Borders are applied by wrapping a
//! [`Layer`] in another one; drawing the outermost layer draws everything it
//! wraps first, so borders stack from the inside out.

pub mod base;
pub mod decorator;
pub mod layer;

pub use base::Label;
pub use decorator::{DecoratorKind, Theme, UnknownKind};
pub use layer::Layer;
