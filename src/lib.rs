//! Decorate on-screen text labels with layered borders.
//!
//! A [`Sketch`] owns a [`Board`] of label slots. Each slot holds a
//! decoration chain ([`label::Layer`]): a bare [`label::Label`] wrapped in any
//! number of borders. [`Command`]s select a slot, add a border around it, or
//! peel the last border off. Frames are drawn onto any [`draw::Canvas`]; the
//! [`draw::Frame`] recorder and the Cairo canvas ship with the crate.

pub mod board;
pub mod config;
pub mod draw;
pub mod export;
pub mod label;
pub mod sketch;
pub mod util;

pub use board::{Board, Command, CommandError};
pub use config::Config;
pub use sketch::Sketch;
