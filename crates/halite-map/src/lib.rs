//! Turn snapshot and obstacle queries for Halite navigation.
//!
//! Holds the entities of the current turn, answers "what lies between this
//! ship and that point", and layers in the positions other ships have
//! already reserved for next turn.

pub mod game_map;
pub mod geometry;
pub mod obstacles;

pub use game_map::GameMap;
pub use geometry::segment_circle_intersects;
pub use obstacles::{Obstacle, ObstacleQuery, Reservations, ReservedMap};
