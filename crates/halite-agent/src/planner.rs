//! Turn planner: one order per ship, in call order.
//!
//! Each planned move reserves the ship's next-turn position. Ships planned
//! later see that reservation in place of the ship's current position when
//! their paths are checked.

use thiserror::Error;
use tracing::{debug, info};

use halite_core::commands::Command;
use halite_core::entity::{Entity, EntityId};
use halite_core::ship::Ship;
use halite_core::types::Coordinate;
use halite_map::game_map::GameMap;
use halite_map::obstacles::{Reservations, ReservedMap};
use halite_nav::approach::approach_target;
use halite_nav::navigation::navigate;

use crate::config::NavigationConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("unknown ship {0}")]
    UnknownShip(EntityId),
    #[error("unknown planet {0}")]
    UnknownPlanet(EntityId),
    #[error("ship {0} belongs to another player")]
    NotOurs(EntityId),
    #[error("ship {0} already has an order this turn")]
    AlreadyOrdered(EntityId),
}

/// Orders produced for one turn.
#[derive(Debug, Clone, Default)]
pub struct TurnOrders {
    pub commands: Vec<Command>,
    pub reservations: Reservations,
}

impl TurnOrders {
    /// Wire encoding, one command per line.
    pub fn encode(&self) -> String {
        self.commands
            .iter()
            .map(Command::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub struct TurnPlanner<'a> {
    map: &'a GameMap,
    config: NavigationConfig,
    reservations: Reservations,
    commands: Vec<Command>,
}

impl<'a> TurnPlanner<'a> {
    pub fn new(map: &'a GameMap, config: NavigationConfig) -> Self {
        Self {
            map,
            config,
            reservations: Reservations::new(),
            commands: Vec::new(),
        }
    }

    /// Move `ship_id` toward `target`.
    ///
    /// Returns `Ok(None)` when no clear path was found within the correction
    /// budget; nothing is recorded for the ship in that case.
    pub fn navigate_to(&mut self, ship_id: EntityId, target: Coordinate) -> Result<Option<Command>, PlanError> {
        let ship = self.orderable_ship(ship_id)?;
        let request = self.config.request(target);
        let navigation = navigate(ship, &ReservedMap::new(self.map, &self.reservations), &request);

        match (navigation.command, navigation.coordinate_next_turn) {
            (Some(command), Some(next)) => {
                debug!(
                    ship = ship_id,
                    corrections = navigation.corrections,
                    reserved = ?next,
                    "move planned"
                );
                self.reservations.reserve(ship_id, next);
                self.commands.push(command);
                Ok(Some(command))
            }
            _ => {
                info!(
                    ship = ship_id,
                    corrections = navigation.corrections,
                    "no clear path, ship holds"
                );
                Ok(None)
            }
        }
    }

    /// Move `ship_id` toward the near side of a planet, `min_distance` off its surface.
    pub fn approach(
        &mut self,
        ship_id: EntityId,
        planet_id: EntityId,
        min_distance: f64,
    ) -> Result<Option<Command>, PlanError> {
        let ship = self.orderable_ship(ship_id)?;
        let planet = self
            .map
            .planet(planet_id)
            .ok_or(PlanError::UnknownPlanet(planet_id))?;
        let target = approach_target(ship, planet, min_distance);
        self.navigate_to(ship_id, target)
    }

    /// Dock at `planet_id`. The ship stays where it is for obstacle purposes.
    ///
    /// Eligibility is not checked; see `Ship::can_dock`.
    pub fn dock(&mut self, ship_id: EntityId, planet_id: EntityId) -> Result<Command, PlanError> {
        let ship = self.orderable_ship(ship_id)?;
        if self.map.planet(planet_id).is_none() {
            return Err(PlanError::UnknownPlanet(planet_id));
        }
        Ok(self.hold(ship, ship.dock(planet_id)))
    }

    pub fn undock(&mut self, ship_id: EntityId) -> Result<Command, PlanError> {
        let ship = self.orderable_ship(ship_id)?;
        Ok(self.hold(ship, ship.undock()))
    }

    pub fn reservations(&self) -> &Reservations {
        &self.reservations
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn finish(self) -> TurnOrders {
        info!(orders = self.commands.len(), "turn planned");
        TurnOrders {
            commands: self.commands,
            reservations: self.reservations,
        }
    }

    fn hold(&mut self, ship: &Ship, command: Command) -> Command {
        debug!(ship = ship.id(), %command, "stationary order");
        self.reservations.reserve(ship.id(), ship.coordinate());
        self.commands.push(command);
        command
    }

    /// Our ship `ship_id`, provided it has no order yet this turn.
    fn orderable_ship(&self, ship_id: EntityId) -> Result<&'a Ship, PlanError> {
        let map: &'a GameMap = self.map;
        let ship = map.ship(ship_id).ok_or(PlanError::UnknownShip(ship_id))?;
        if !ship.is_owned_by(map.my_id()) {
            return Err(PlanError::NotOurs(ship_id));
        }
        if self.commands.iter().any(|c| c.ship_id() == ship_id) {
            return Err(PlanError::AlreadyOrdered(ship_id));
        }
        Ok(ship)
    }
}
