//! Per-turn order planning for the Halite agent.
//!
//! Sequences navigation calls for our ships within one turn, feeds each
//! ship's reserved next-turn position into the obstacle checks of the ships
//! planned after it, and collects the resulting commands.

pub mod config;
pub mod logging;
pub mod planner;

pub use config::{ConfigError, NavigationConfig};
pub use planner::{PlanError, TurnOrders, TurnPlanner};
