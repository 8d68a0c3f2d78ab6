//! The world holding every creature and food item.
//!
//! The world is the single shared mutable state of the simulation. It owns:
//! - the creatures, in insertion order, each with a stable [`CreatureId`]
//! - the food items, never more than `params.max_food`
//! - the parameters, writable only through validated setters
//! - the random number generator every random draw goes through
//!
//! The per-tick update lives in [`super::update`].

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info};

use super::creature::{Creature, CreatureId, Surroundings};
use super::food::Food;
use super::params::{self, Params, ParamsError};

/// Errors raised when mutating a world.
#[derive(Debug, Error)]
pub enum WorldError {
    /// The world already holds the maximum number of food items.
    #[error("food limit of {max} items reached")]
    FoodLimitReached {
        /// The configured maximum.
        max: usize,
    },
    /// A parameter update was rejected.
    #[error(transparent)]
    Params(#[from] ParamsError),
}

/// A bounded rectangle populated by creatures and food.
#[derive(Debug)]
pub struct World {
    pub(crate) params: Params,
    pub(crate) creatures: Vec<Creature>,
    pub(crate) food: Vec<Food>,
    pub(crate) rng: StdRng,
    pub(crate) time: f64,
    next_id: u64,
}

impl World {
    /// Creates an empty world.
    pub fn new(params: Params) -> Result<Self, WorldError> {
        params.validate()?;

        let rng = match params.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        info!(
            width = params.width,
            height = params.height,
            seeded = params.rng_seed.is_some(),
            "world created"
        );

        Ok(Self {
            params,
            creatures: Vec::new(),
            food: Vec::new(),
            rng,
            time: 0.0,
            next_id: 1,
        })
    }

    /// Current parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// World width.
    pub fn width(&self) -> f64 {
        self.params.width
    }

    /// World height.
    pub fn height(&self) -> f64 {
        self.params.height
    }

    /// Total simulated time, already scaled by the time scale.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Living creatures in iteration order.
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Food items currently lying in the world.
    pub fn food(&self) -> &[Food] {
        &self.food
    }

    /// Looks up a creature by id.
    pub fn creature(&self, id: CreatureId) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.id() == id)
    }

    /// Looks up a creature by id for mutation.
    pub fn creature_mut(&mut self, id: CreatureId) -> Option<&mut Creature> {
        self.creatures.iter_mut().find(|c| c.id() == id)
    }

    /// The world's random number generator.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Adds a creature at the end of the iteration order.
    ///
    /// # Arguments
    ///
    /// * `creature` - The creature to add. Its behavior is initialized against the
    ///   current world before the creature is inserted.
    ///
    /// # Returns
    ///
    /// The id assigned to the creature.
    pub fn add_creature(&mut self, mut creature: Creature) -> CreatureId {
        let id = CreatureId(self.next_id);
        self.next_id += 1;
        creature.set_id(id);

        if let Some(mut behavior) = creature.take_behavior() {
            let surroundings = Surroundings::new(&self.params, &self.food, &self.creatures, &[]);
            behavior.init(&surroundings, &creature, &mut self.rng);
            creature.restore_behavior(behavior);
        }

        self.creatures.push(creature);
        id
    }

    /// Removes a creature, returning it if it was present.
    pub fn remove_creature(&mut self, id: CreatureId) -> Option<Creature> {
        let index = self.creatures.iter().position(|c| c.id() == id)?;
        Some(self.creatures.remove(index))
    }

    /// Adds a food item unless the world is already full.
    ///
    /// # Errors
    ///
    /// [`WorldError::FoodLimitReached`] if the world already holds `max_food` items.
    pub fn add_food(&mut self, food: Food) -> Result<(), WorldError> {
        if self.food.len() >= self.params.max_food {
            return Err(WorldError::FoodLimitReached {
                max: self.params.max_food,
            });
        }
        self.food.push(food);
        Ok(())
    }

    /// Removes the food item at `index`.
    pub fn remove_food(&mut self, index: usize) -> Option<Food> {
        (index < self.food.len()).then(|| self.food.remove(index))
    }

    /// Sets the time scale applied to every time-dependent effect.
    pub fn set_time_scale(&mut self, time_scale: f64) -> Result<(), WorldError> {
        params::check_time_scale(time_scale)?;
        debug!(time_scale, "time scale changed");
        self.params.time_scale = time_scale;
        Ok(())
    }

    /// Adjusts the time scale by `change`.
    pub fn change_time_scale(&mut self, change: f64) -> Result<(), WorldError> {
        self.set_time_scale(self.params.time_scale + change)
    }

    /// Sets the base energy depletion rate.
    pub fn set_base_energy_depletion(&mut self, rate: f64) -> Result<(), WorldError> {
        params::check_base_energy_depletion(rate)?;
        self.params.base_energy_depletion = rate;
        Ok(())
    }

    /// Sets the maximum number of food items, dropping the newest surplus items.
    pub fn set_max_food(&mut self, max_food: usize) {
        self.params.max_food = max_food;
        self.food.truncate(max_food);
    }

    /// Sets the upper bound for the energy of spawned food.
    pub fn set_max_food_energy(&mut self, max_energy: f64) -> Result<(), WorldError> {
        params::check_max_food_energy(max_energy)?;
        self.params.max_food_energy = max_energy;
        Ok(())
    }

    /// Sets the per-roll food spawn chance in percent.
    pub fn set_food_spawn_rate(&mut self, rate: u32) -> Result<(), WorldError> {
        params::check_food_spawn_rate(rate)?;
        self.params.food_spawn_rate = rate;
        Ok(())
    }

    /// Sets the mutation rate applied to inherited traits.
    pub fn set_mutation_rate(&mut self, rate: f64) -> Result<(), WorldError> {
        params::check_mutation_rate(rate)?;
        self.params.mutation_rate = rate;
        Ok(())
    }
}
