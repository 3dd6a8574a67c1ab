//! Obstacle-aware path correction and thrust/heading computation.
//!
//! While the straight path to the target is blocked, the target is rotated
//! counter-clockwise around the ship by a fixed step (keeping its distance)
//! and the path is tested again. Every rotation spends one unit of the
//! correction budget; an empty budget means no order this turn.

use tracing::debug;

use halite_core::commands::Command;
use halite_core::entity::Entity;
use halite_core::ship::Ship;
use halite_core::types::{heading_degrees, Coordinate};
use halite_map::obstacles::ObstacleQuery;

/// Parameters for one navigate call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationRequest {
    pub target: Coordinate,
    /// Requested thrust; clipped so the ship never overshoots the target.
    pub thrust: u32,
    pub avoid_obstacles: bool,
    /// Maximum number of rotations. Zero yields no command.
    pub max_corrections: u32,
    /// Rotation applied per correction (radians, counter-clockwise).
    pub angular_step_rad: f64,
}

/// Result of one navigate call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Navigation {
    /// `None` when the correction budget ran out: issue no order.
    pub command: Option<Command>,
    /// Position the ship will occupy after `command`, valid for this turn only.
    pub coordinate_next_turn: Option<Coordinate>,
    /// Rotations actually applied.
    pub corrections: u32,
}

impl Navigation {
    fn exhausted(corrections: u32) -> Self {
        Self {
            command: None,
            coordinate_next_turn: None,
            corrections,
        }
    }
}

/// Plan a thrust for `ship` toward `request.target`.
///
/// Runs at most `max_corrections + 1` iterations. Degenerate geometry (target
/// on top of the ship) resolves to heading 0 and thrust 0.
pub fn navigate(ship: &Ship, query: &impl ObstacleQuery, request: &NavigationRequest) -> Navigation {
    let origin = ship.coordinate();
    let mut target = request.target;
    let mut remaining = request.max_corrections;
    let mut corrections = 0;

    loop {
        debug!(
            ship = ship.id(),
            from = ?origin,
            to = ?target,
            remaining,
            "navigate"
        );

        if remaining == 0 {
            debug!(ship = ship.id(), corrections, "correction budget exhausted");
            return Navigation::exhausted(corrections);
        }

        let distance = origin.distance_to(&target);
        let angle_rad = origin.angle_to(&target);

        if request.avoid_obstacles {
            let obstacles = query.entities_between(ship, target).len();
            if obstacles > 0 {
                target = target.rotated_around(&origin, request.angular_step_rad);
                remaining -= 1;
                corrections += 1;
                debug!(ship = ship.id(), obstacles, corrected = ?target, "path blocked");
                continue;
            }
        }

        let thrust = clip_thrust(request.thrust, distance);
        let heading = heading_degrees(angle_rad);
        debug!(
            ship = ship.id(),
            distance,
            angle_rad,
            heading,
            thrust,
            "thrust decided"
        );

        return Navigation {
            command: Some(ship.thrust(thrust, f64::from(heading))),
            coordinate_next_turn: Some(target.forecast_move(thrust, heading)),
            corrections,
        };
    }
}

/// Never thrust past the target: `min(thrust, floor(distance))`.
fn clip_thrust(thrust: u32, distance: f64) -> u32 {
    if distance < f64::from(thrust) {
        distance as u32
    } else {
        thrust
    }
}
