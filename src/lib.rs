//! # Creatures - Closed Ecosystem Simulation
//!
//! A small world of creatures that wander, forage, mate and die. Creatures carry
//! heritable traits that are averaged between parents and mutated at conception.
//!
//! ## Features
//!
//! - Per-tick world update with sequential, order-dependent visibility
//! - Pluggable behavior policies choosing each creature's movement target
//! - Energy, age and pregnancy lifecycles
//! - Trait inheritance with randomized mutation
//! - Food spawning bounded by a configurable maximum
//! - Seedable randomness for reproducible runs
//!
//! ## Core Modules
//!
//! - [`simulation::world`] - World state and validated parameter setters
//! - [`simulation::update`] - One simulation tick
//! - [`simulation::creature`] - Creature state and behavior policies
//! - [`simulation::genetics`] - Trait inheritance
//! - [`simulation::events`] - Lifecycle events reported by a tick

/// Core simulation logic and data structures.
pub mod simulation {
    /// Creature state, the behavior trait and the default wandering behavior.
    pub mod creature;
    /// Lifecycle events collected while a tick runs.
    pub mod events;
    /// Helpers that build populated worlds.
    pub mod factory;
    /// Food items that creatures can consume.
    pub mod food;
    /// Trait inheritance and mutation.
    pub mod genetics;
    /// Geometric utility functions for distance calculations and movement.
    pub mod geometric_utils;
    /// Trait for entities with a position.
    ///
    /// The [`locatable::Locatable`] trait is implemented by every entity that has
    /// a position in 2D space (Creature, Food).
    pub mod locatable;
    /// Simulation parameters.
    pub mod params;
    /// The per-tick world update.
    pub mod update;
    /// World state.
    pub mod world;
}

pub use simulation::creature::{
    Behavior, Creature, CreatureId, Gender, Surroundings, Traits, WanderBehavior,
};
pub use simulation::events::{DeathCause, LifecycleEvent, TickReport};
pub use simulation::food::Food;
pub use simulation::params::{Params, ParamsError};
pub use simulation::world::{World, WorldError};
