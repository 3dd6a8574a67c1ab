//! Authoritative snapshot of every entity for the current turn.

use std::collections::HashMap;

use halite_core::entity::{Entity, EntityId, PlayerId};
use halite_core::planet::Planet;
use halite_core::ship::Ship;

/// All ships and planets visible this turn, plus lookups by id.
#[derive(Debug, Clone, Default)]
pub struct GameMap {
    my_id: PlayerId,
    width: u32,
    height: u32,
    ships: Vec<Ship>,
    planets: Vec<Planet>,
    ship_index: HashMap<EntityId, usize>,
    planet_index: HashMap<EntityId, usize>,
}

impl GameMap {
    pub fn new(my_id: PlayerId, width: u32, height: u32, ships: Vec<Ship>, planets: Vec<Planet>) -> Self {
        let ship_index = ships.iter().enumerate().map(|(i, s)| (s.id(), i)).collect();
        let planet_index = planets.iter().enumerate().map(|(i, p)| (p.id(), i)).collect();
        Self {
            my_id,
            width,
            height,
            ships,
            planets,
            ship_index,
            planet_index,
        }
    }

    /// The player this agent controls.
    pub fn my_id(&self) -> PlayerId {
        self.my_id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn ship(&self, id: EntityId) -> Option<&Ship> {
        self.ship_index.get(&id).map(|&i| &self.ships[i])
    }

    pub fn planet(&self, id: EntityId) -> Option<&Planet> {
        self.planet_index.get(&id).map(|&i| &self.planets[i])
    }

    /// Planet a ship is docked at or docking to, resolved through its `planet_id`.
    pub fn planet_of(&self, ship: &Ship) -> Option<&Planet> {
        ship.planet_id.and_then(|id| self.planet(id))
    }

    pub fn all_ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn all_planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn ships_of(&self, player: PlayerId) -> impl Iterator<Item = &Ship> {
        self.ships.iter().filter(move |s| s.is_owned_by(player))
    }

    pub fn my_ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships_of(self.my_id)
    }

    /// Ships docked (or docking) at `planet`.
    pub fn docked_ships<'a>(&'a self, planet: &'a Planet) -> impl Iterator<Item = &'a Ship> + 'a {
        planet.docked_ships.iter().filter_map(move |&id| self.ship(id))
    }
}
