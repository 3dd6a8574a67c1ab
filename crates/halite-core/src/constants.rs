//! Game-rule constants and navigation tuning parameters.
//!
//! Game-rule values must match the engine exactly.

// --- Game rules ---

/// Maximum number of distance units a ship can travel in one turn.
pub const MAX_SPEED: u32 = 7;

/// Collision radius of every ship.
pub const SHIP_RADIUS: f64 = 0.5;

/// Distance from a planet's surface within which a ship may dock.
pub const DOCK_RADIUS: f64 = 4.0;

// --- Navigation ---

/// Extra clearance added around obstacles when testing a flight path.
pub const NAV_FUDGE: f64 = 0.1;

/// Default correction budget for a single navigate call.
/// 90 one-degree steps sweep a quarter circle.
pub const DEFAULT_MAX_CORRECTIONS: u32 = 90;

/// Default angular step per correction (one degree, in radians).
pub const DEFAULT_ANGULAR_STEP_RAD: f64 = std::f64::consts::PI / 180.0;

/// Headings are sent to the engine as whole degrees in `[0, 360)`.
pub const DEGREES_PER_TURN: i64 = 360;
