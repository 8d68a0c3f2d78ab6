//! Helpers that build populated worlds.

use geo::Point;
use rand::Rng;
use tracing::info;

use super::creature::{Creature, Gender, Traits};
use super::food::Food;
use super::params::Params;
use super::world::{World, WorldError};

/// Food items placed per creature by [`basic_world`].
pub const FOOD_PER_CREATURE: usize = 10;

/// Exclusive upper bound for the energy of food placed by [`basic_world`].
pub const INITIAL_FOOD_ENERGY: f64 = 100.0;

/// Creates a world without creatures or food.
pub fn empty_world(params: Params) -> Result<World, WorldError> {
    World::new(params)
}

/// Creates a randomly populated world.
///
/// # Arguments
///
/// * `params` - Parameters of the new world
/// * `creature_count` - Number of creatures, placed uniformly at random with random
///   gender and default traits
///
/// # Returns
///
/// A world holding the creatures and [`FOOD_PER_CREATURE`] food items per creature,
/// capped by the world's food limit.
pub fn basic_world(params: Params, creature_count: usize) -> Result<World, WorldError> {
    let mut world = World::new(params)?;
    let (width, height) = (world.width(), world.height());

    for _ in 0..creature_count {
        let rng = world.rng();
        let pos = Point::new(width * rng.random::<f64>(), height * rng.random::<f64>());
        let gender = Gender::random(rng);
        world.add_creature(Creature::new(pos, gender, Traits::default()));
    }

    let food_count = (creature_count * FOOD_PER_CREATURE).min(world.params().max_food);
    for _ in 0..food_count {
        let food = Food::new_random(width, height, INITIAL_FOOD_ENERGY, world.rng());
        world.add_food(food)?;
    }

    info!(
        creatures = world.creatures().len(),
        food = world.food().len(),
        "basic world populated"
    );

    Ok(world)
}

/// Creates a small hand-made world: one male, one female and two food items.
pub fn test_world() -> Result<World, WorldError> {
    let mut world = World::new(Params {
        width: 1000.0,
        height: 800.0,
        food_spawn_rate: 50,
        ..Params::default()
    })?;

    let male = Creature::new(Point::new(100.0, 100.0), Gender::Male, Traits::default());
    let female = Creature::new(Point::new(200.0, 100.0), Gender::Female, Traits::default());
    world.add_creature(male);
    world.add_creature(female);

    world.add_food(Food::new(Point::new(150.0, 150.0), 100.0))?;
    world.add_food(Food::new(Point::new(230.0, 80.0), 100.0))?;

    Ok(world)
}
