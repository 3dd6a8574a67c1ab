//! Ships: the entities the agent gives orders to.

use crate::commands::Command;
use crate::constants::{DOCK_RADIUS, SHIP_RADIUS};
use crate::entity::{Entity, EntityBase, EntityId, PlayerId};
use crate::planet::Planet;
use crate::types::{Coordinate, Velocity};
use crate::views::ShipView;

/// A ship as reported by the engine for the current turn.
///
/// Built once per turn from the snapshot and never mutated. The planned
/// position for next turn is not stored here; navigation returns it and the
/// turn planner keeps it.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub base: EntityBase,
    pub velocity: Velocity,
    pub docked: bool,
    /// Planet the ship is docked at or docking to.
    pub planet_id: Option<EntityId>,
    pub docking_progress: f64,
    pub weapon_cooldown: f64,
}

impl Ship {
    pub fn new(owner: PlayerId, id: EntityId, coordinate: Coordinate, health: u32) -> Self {
        Self {
            base: EntityBase {
                owner: Some(owner),
                id,
                coordinate,
                health,
                radius: SHIP_RADIUS,
            },
            velocity: Velocity::default(),
            docked: false,
            planet_id: None,
            docking_progress: 0.0,
            weapon_cooldown: 0.0,
        }
    }

    pub fn with_velocity(mut self, velocity: Velocity) -> Self {
        self.velocity = velocity;
        self
    }

    /// Mark the ship as docked (or docking) at `planet_id`.
    pub fn docked_at(mut self, planet_id: EntityId, docking_progress: f64) -> Self {
        self.docked = true;
        self.planet_id = Some(planet_id);
        self.docking_progress = docking_progress;
        self
    }

    pub fn with_weapon_cooldown(mut self, weapon_cooldown: f64) -> Self {
        self.weapon_cooldown = weapon_cooldown;
        self
    }

    /// Thrust order. The angle is rounded to the nearest whole degree;
    /// range checks are the caller's job.
    pub fn thrust(&self, magnitude: u32, angle_deg: f64) -> Command {
        Command::Thrust {
            ship_id: self.id(),
            magnitude,
            heading: angle_deg.round() as i32,
        }
    }

    /// Dock order for `planet_id`. Eligibility is not checked.
    pub fn dock(&self, planet_id: EntityId) -> Command {
        Command::Dock {
            ship_id: self.id(),
            planet_id,
        }
    }

    /// Undock order.
    pub fn undock(&self) -> Command {
        Command::Undock { ship_id: self.id() }
    }

    /// True when `planet` accepts this ship's owner and the ship is within
    /// docking range of its surface.
    pub fn can_dock(&self, planet: &Planet) -> bool {
        let Some(owner) = self.owner() else {
            return false;
        };
        planet.is_dockable(owner) && self.distance_to(planet) <= planet.radius() + DOCK_RADIUS
    }

    pub fn view(&self) -> ShipView {
        ShipView {
            owner: self.base.owner,
            id: self.base.id,
            coordinate: self.base.coordinate,
            health: self.base.health,
            radius: self.base.radius,
            velocity: self.velocity,
            docked: if self.docked { "yes" } else { "no" },
            planet_id: self.planet_id,
            docking_progress: self.docking_progress,
            weapon_cooldown: self.weapon_cooldown,
        }
    }
}

impl Entity for Ship {
    fn base(&self) -> &EntityBase {
        &self.base
    }
}
