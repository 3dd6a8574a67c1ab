//! Fundamental geometric types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::DEGREES_PER_TURN;

/// 2D point in map space. x grows to the right, y grows downward,
/// angles follow the engine convention (0 = +x, 90 = +y).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

/// Per-turn displacement of a ship as reported by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another coordinate.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Bearing to another coordinate in radians, `atan2(dy, dx)`.
    ///
    /// Returns 0 when both points coincide.
    pub fn angle_to(&self, other: &Coordinate) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dy.atan2(dx)
    }

    /// Position reached by moving `thrust` units along `heading_deg`.
    pub fn forecast_move(&self, thrust: u32, heading_deg: i32) -> Coordinate {
        let heading = f64::from(heading_deg).to_radians();
        let thrust = f64::from(thrust);
        Coordinate::new(
            self.x + thrust * heading.cos(),
            self.y + thrust * heading.sin(),
        )
    }

    /// Point `radius + min_distance` away from `center`, on the side facing `self`.
    pub fn closest_point_to(&self, center: &Coordinate, radius: f64, min_distance: f64) -> Coordinate {
        let angle = center.angle_to(self);
        let reach = radius + min_distance;
        Coordinate::new(
            center.x + reach * angle.cos(),
            center.y + reach * angle.sin(),
        )
    }

    /// `self` rotated by `delta_rad` around `pivot`, keeping its distance to the pivot.
    pub fn rotated_around(&self, pivot: &Coordinate, delta_rad: f64) -> Coordinate {
        let distance = pivot.distance_to(self);
        let angle = pivot.angle_to(self) + delta_rad;
        Coordinate::new(
            pivot.x + distance * angle.cos(),
            pivot.y + distance * angle.sin(),
        )
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Coordinate> for DVec2 {
    fn from(c: Coordinate) -> Self {
        DVec2::new(c.x, c.y)
    }
}

impl From<DVec2> for Coordinate {
    fn from(v: DVec2) -> Self {
        Coordinate::new(v.x, v.y)
    }
}

/// Convert a bearing in radians to an engine heading: whole degrees in `[0, 360)`.
///
/// Rounds to the nearest degree, then wraps negative and overflowing values.
pub fn heading_degrees(angle_rad: f64) -> i32 {
    let degrees = angle_rad.to_degrees().round() as i64;
    (((degrees % DEGREES_PER_TURN) + DEGREES_PER_TURN) % DEGREES_PER_TURN) as i32
}
