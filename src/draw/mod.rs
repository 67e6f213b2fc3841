//! Rendering primitives and the canvas abstraction (Cairo-based).
//!
//! This module defines the core drawing types used by labels and borders:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Canvas`]: the drawing capability a host provides
//! - [`Primitive`]: one recorded drawing call
//! - [`Frame`]: recording canvas holding every primitive of one refresh
//! - [`CairoCanvas`]: canvas that rasterizes through Cairo and Pango

pub mod canvas;
pub mod color;
pub mod font;
pub mod frame;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use canvas::{Canvas, Paint, TextStyle};
pub use color::Color;
pub use font::FontDescriptor;
pub use frame::Frame;
pub use render::CairoCanvas;
pub use shape::Primitive;
