//! Core types and definitions for the Halite navigation agent.
//!
//! This crate defines the vocabulary shared across all other crates:
//! coordinates, entities (ships, planets, players), wire commands,
//! game-rule constants, and the diagnostic views used for export.
//! It has no dependency on the map, the navigator, or any runtime.

pub mod commands;
pub mod constants;
pub mod entity;
pub mod planet;
pub mod ship;
pub mod types;
pub mod views;

pub use commands::{Command, ParseCommandError};
pub use entity::{Entity, EntityBase, EntityId, PlayerId};
pub use planet::Planet;
pub use ship::Ship;
pub use types::{Coordinate, Velocity};
