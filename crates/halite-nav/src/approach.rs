//! Approach points for entity targets.

use halite_core::entity::Entity;
use halite_core::ship::Ship;
use halite_core::types::Coordinate;

/// Point `min_distance` off the surface of `entity`, on the side facing `ship`.
///
/// Navigating to an entity's center would always report the entity itself
/// as an obstacle.
pub fn approach_target<E: Entity + ?Sized>(ship: &Ship, entity: &E, min_distance: f64) -> Coordinate {
    ship.coordinate()
        .closest_point_to(&entity.coordinate(), entity.radius(), min_distance)
}
