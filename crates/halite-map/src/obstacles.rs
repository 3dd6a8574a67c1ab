//! Obstacle queries along a flight path.
//!
//! `GameMap` answers against current positions. `ReservedMap` answers against
//! the positions ships have claimed for next turn, so ships ordered later in a
//! turn steer around the destinations of ships ordered earlier.

use std::collections::HashMap;

use halite_core::constants::NAV_FUDGE;
use halite_core::entity::{Entity, EntityId};
use halite_core::planet::Planet;
use halite_core::ship::Ship;
use halite_core::types::Coordinate;

use crate::game_map::GameMap;
use crate::geometry::segment_circle_intersects;

/// Something whose body lies across a flight path.
#[derive(Debug, Clone, Copy)]
pub enum Obstacle<'a> {
    Planet(&'a Planet),
    Ship(&'a Ship),
    /// A ship tested at the position it reserved for next turn.
    Reserved {
        ship: &'a Ship,
        coordinate: Coordinate,
    },
}

impl Obstacle<'_> {
    pub fn id(&self) -> EntityId {
        match self {
            Obstacle::Planet(p) => p.id(),
            Obstacle::Ship(s) | Obstacle::Reserved { ship: s, .. } => s.id(),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        match self {
            Obstacle::Planet(p) => p.coordinate(),
            Obstacle::Ship(s) => s.coordinate(),
            Obstacle::Reserved { coordinate, .. } => *coordinate,
        }
    }

    pub fn radius(&self) -> f64 {
        match self {
            Obstacle::Planet(p) => p.radius(),
            Obstacle::Ship(s) | Obstacle::Reserved { ship: s, .. } => s.radius(),
        }
    }
}

/// Answers which entities lie between a moving ship and a target point.
///
/// Only emptiness matters to the navigator; order is unspecified.
pub trait ObstacleQuery {
    fn entities_between(&self, mover: &Ship, target: Coordinate) -> Vec<Obstacle<'_>>;
}

/// Positions ships intend to occupy after this turn's orders, keyed by ship id.
///
/// Valid for one turn only.
#[derive(Debug, Clone, Default)]
pub struct Reservations {
    positions: HashMap<EntityId, Coordinate>,
}

impl Reservations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the reserved position for `ship_id`.
    pub fn reserve(&mut self, ship_id: EntityId, coordinate: Coordinate) {
        self.positions.insert(ship_id, coordinate);
    }

    pub fn get(&self, ship_id: EntityId) -> Option<Coordinate> {
        self.positions.get(&ship_id).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, Coordinate)> + '_ {
        self.positions.iter().map(|(&id, &c)| (id, c))
    }
}

/// A map view where reserved ships are tested at their reserved position.
#[derive(Debug, Clone, Copy)]
pub struct ReservedMap<'a> {
    map: &'a GameMap,
    reservations: &'a Reservations,
}

impl<'a> ReservedMap<'a> {
    pub fn new(map: &'a GameMap, reservations: &'a Reservations) -> Self {
        Self { map, reservations }
    }
}

fn blocks(mover: &Ship, target: Coordinate, obstacle: &Obstacle<'_>) -> bool {
    segment_circle_intersects(
        mover.coordinate(),
        target,
        obstacle.coordinate(),
        obstacle.radius() + mover.radius() + NAV_FUDGE,
    )
}

/// Shared scan: planets, then every ship other than the mover, placed by `place`.
fn scan<'a>(
    map: &'a GameMap,
    mover: &Ship,
    target: Coordinate,
    place: impl Fn(&'a Ship) -> Obstacle<'a>,
) -> Vec<Obstacle<'a>> {
    let planets = map.all_planets().iter().map(Obstacle::Planet);
    let ships = map
        .all_ships()
        .iter()
        .filter(|s| s.id() != mover.id())
        .map(place);

    planets
        .chain(ships)
        .filter(|obstacle| blocks(mover, target, obstacle))
        .collect()
}

impl ObstacleQuery for GameMap {
    fn entities_between(&self, mover: &Ship, target: Coordinate) -> Vec<Obstacle<'_>> {
        scan(self, mover, target, Obstacle::Ship)
    }
}

impl ObstacleQuery for ReservedMap<'_> {
    fn entities_between(&self, mover: &Ship, target: Coordinate) -> Vec<Obstacle<'_>> {
        let reservations = self.reservations;
        scan(self.map, mover, target, |ship| match reservations.get(ship.id()) {
            Some(coordinate) => Obstacle::Reserved { ship, coordinate },
            None => Obstacle::Ship(ship),
        })
    }
}
