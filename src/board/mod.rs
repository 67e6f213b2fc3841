//! Label registry and the commands that mutate it.
//!
//! The [`Board`] holds the current decoration chain of every label slot and
//! which slot is selected. [`Command`] is the text-friendly form of the three
//! user actions (select, add border, remove last border).

pub mod command;
mod state;

pub use command::{Command, CommandError};
pub use state::Board;

#[cfg(test)]
mod tests;
