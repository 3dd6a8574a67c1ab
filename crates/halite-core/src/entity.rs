//! Shared entity record and the capability trait implemented by ships and planets.

use serde::{Deserialize, Serialize};

use crate::types::Coordinate;

/// Entity id, unique within one turn's snapshot and stable across turns.
pub type EntityId = u32;

/// Player id as assigned by the engine.
pub type PlayerId = u32;

/// Fields common to everything that occupies space on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityBase {
    /// Owning player. Planets may be unowned.
    pub owner: Option<PlayerId>,
    pub id: EntityId,
    pub coordinate: Coordinate,
    pub health: u32,
    /// Collision radius, fixed at construction.
    pub radius: f64,
}

/// Capabilities shared by ships and planets: position, radius, owner, identity.
pub trait Entity {
    fn base(&self) -> &EntityBase;

    fn id(&self) -> EntityId {
        self.base().id
    }

    fn owner(&self) -> Option<PlayerId> {
        self.base().owner
    }

    fn coordinate(&self) -> Coordinate {
        self.base().coordinate
    }

    fn radius(&self) -> f64 {
        self.base().radius
    }

    fn health(&self) -> u32 {
        self.base().health
    }

    /// Center-to-center distance.
    fn distance_to<E: Entity + ?Sized>(&self, other: &E) -> f64 {
        self.coordinate().distance_to(&other.coordinate())
    }

    /// Center-to-center bearing in radians.
    fn angle_to<E: Entity + ?Sized>(&self, other: &E) -> f64 {
        self.coordinate().angle_to(&other.coordinate())
    }

    fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner() == Some(player)
    }
}
