//! Abstract behavior trait deciding where a creature wants to go.
//!
//! A behavior is attached to exactly one creature. The update engine calls
//! [`Behavior::update`] once per tick before moving the creature; the only effect a
//! behavior has on the world is the creature's `target`.

use std::fmt;

use rand::RngCore;

use super::Creature;
use crate::simulation::food::Food;
use crate::simulation::params::Params;

/// Read-only view of the world as seen by one creature.
///
/// The creature itself is excluded from [`Surroundings::creatures`]; the remaining
/// creatures keep world iteration order.
#[derive(Clone, Copy)]
pub struct Surroundings<'a> {
    /// Current world parameters.
    pub params: &'a Params,
    /// Food lying in the world.
    pub food: &'a [Food],
    before: &'a [Creature],
    after: &'a [Creature],
}

impl<'a> Surroundings<'a> {
    /// Builds a view from the creatures preceding and following the observer.
    pub fn new(
        params: &'a Params,
        food: &'a [Food],
        before: &'a [Creature],
        after: &'a [Creature],
    ) -> Self {
        Self {
            params,
            food,
            before,
            after,
        }
    }

    /// World width.
    pub fn width(&self) -> f64 {
        self.params.width
    }

    /// World height.
    pub fn height(&self) -> f64 {
        self.params.height
    }

    /// Every other creature, in world order.
    pub fn creatures(self) -> impl Iterator<Item = &'a Creature> {
        self.before.iter().chain(self.after.iter())
    }
}

impl fmt::Debug for Surroundings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surroundings")
            .field("food", &self.food.len())
            .field("creatures", &(self.before.len() + self.after.len()))
            .finish_non_exhaustive()
    }
}

/// Trait for policies that choose a creature's movement target.
///
/// New behaviors are new implementations; the update engine only relies on this
/// method set.
pub trait Behavior: fmt::Debug + Send {
    /// One-time setup once the creature has joined a world.
    ///
    /// # Arguments
    ///
    /// * `world` - The world the creature joined, without the creature itself
    /// * `creature` - The creature this behavior drives
    /// * `rng` - The world's random number generator
    fn init(&mut self, world: &Surroundings<'_>, creature: &Creature, rng: &mut dyn RngCore);

    /// Inspects the world and sets or keeps `creature.target`.
    ///
    /// Called once per tick right before the creature moves. Creatures processed
    /// earlier in the same tick are seen in their updated state.
    fn update(&mut self, world: &Surroundings<'_>, creature: &mut Creature, rng: &mut dyn RngCore);

    /// Returns a human-readable name for this behavior.
    fn name(&self) -> &'static str;
}
