//! Planets: static bodies ships dock at.

use crate::entity::{Entity, EntityBase, EntityId, PlayerId};
use crate::types::Coordinate;
use crate::views::PlanetView;

/// A planet as reported by the engine for the current turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub base: EntityBase,
    pub num_docking_spots: u32,
    pub current_production: u32,
    pub remaining_resources: u32,
    /// Ids of ships docked or docking here.
    pub docked_ships: Vec<EntityId>,
}

impl Planet {
    pub fn new(id: EntityId, coordinate: Coordinate, health: u32, radius: f64, num_docking_spots: u32) -> Self {
        Self {
            base: EntityBase {
                owner: None,
                id,
                coordinate,
                health,
                radius,
            },
            num_docking_spots,
            current_production: 0,
            remaining_resources: 0,
            docked_ships: Vec::new(),
        }
    }

    pub fn owned_by(mut self, owner: PlayerId, docked_ships: Vec<EntityId>) -> Self {
        self.base.owner = Some(owner);
        self.docked_ships = docked_ships;
        self
    }

    pub fn is_owned(&self) -> bool {
        self.base.owner.is_some()
    }

    pub fn open_docks(&self) -> u32 {
        self.num_docking_spots
            .saturating_sub(self.docked_ships.len() as u32)
    }

    pub fn is_full(&self) -> bool {
        self.open_docks() == 0
    }

    /// A planet accepts `owner` when it is free, or already held by `owner`
    /// with a spot left.
    pub fn is_dockable(&self, owner: PlayerId) -> bool {
        match self.base.owner {
            None => !self.is_full(),
            Some(current) => current == owner && !self.is_full(),
        }
    }

    pub fn view(&self) -> PlanetView {
        PlanetView {
            owner: self.base.owner,
            id: self.base.id,
            coordinate: self.base.coordinate,
            health: self.base.health,
            radius: self.base.radius,
            num_docking_spots: self.num_docking_spots,
            current_production: self.current_production,
            remaining_resources: self.remaining_resources,
            docked_ships: self.docked_ships.clone(),
        }
    }
}

impl Entity for Planet {
    fn base(&self) -> &EntityBase {
        &self.base
    }
}
