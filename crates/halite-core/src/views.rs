//! Read-only diagnostic views, serialized for logs and exports.
//!
//! These are not used to rebuild entities.

use serde::Serialize;

use crate::entity::{EntityId, PlayerId};
use crate::types::{Coordinate, Velocity};

/// Flat snapshot of a ship.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipView {
    pub owner: Option<PlayerId>,
    pub id: EntityId,
    pub coordinate: Coordinate,
    pub health: u32,
    pub radius: f64,
    pub velocity: Velocity,
    /// `"yes"` or `"no"`; existing consumers expect a string.
    pub docked: &'static str,
    pub planet_id: Option<EntityId>,
    pub docking_progress: f64,
    pub weapon_cooldown: f64,
}

/// Flat snapshot of a planet.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetView {
    pub owner: Option<PlayerId>,
    pub id: EntityId,
    pub coordinate: Coordinate,
    pub health: u32,
    pub radius: f64,
    pub num_docking_spots: u32,
    pub current_production: u32,
    pub remaining_resources: u32,
    pub docked_ships: Vec<EntityId>,
}
