//! Navigation for Halite ships.
//!
//! Turns "go toward point P" into a clipped, obstacle-aware thrust command.
//! Pure functions over the core types plus an obstacle query; the only output
//! besides the command is the position the ship will reach next turn.

pub mod approach;
pub mod navigation;

pub use navigation::{navigate, Navigation, NavigationRequest};
