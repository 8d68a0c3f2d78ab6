//! Creature module containing creature state and behavior policies.

mod behavior;
#[allow(clippy::module_inception)]
mod creature;
mod wander;

// Re-export everything from the creature module
pub use creature::*;

// Re-export behavior components
pub use behavior::{Behavior, Surroundings};
pub use wander::{WAYPOINT_COLUMNS, WanderBehavior};
