//! Default behavior: wander between waypoints, forage and look for mates.

use geo::Point;
use rand::{Rng, RngCore};

use super::Creature;
use super::behavior::{Behavior, Surroundings};
use crate::simulation::geometric_utils::clamp_to_bounds;
use crate::simulation::locatable::nearest_within;

/// Number of waypoint columns. Rows scale with the world's aspect ratio.
pub const WAYPOINT_COLUMNS: usize = 10;

/// Wanders across a jittered waypoint grid, heads for food it can fully use and
/// prefers reachable mates over everything else.
///
/// Rules are re-evaluated every tick, later ones overriding earlier ones:
/// 1. no target: pick a random waypoint
/// 2. nearest visible food whose value fits into the energy budget
/// 3. nearest visible compatible mate
#[derive(Debug, Clone, Default)]
pub struct WanderBehavior {
    waypoints: Vec<Point<f64>>,
}

impl WanderBehavior {
    /// Precomputed wander destinations. Empty until [`Behavior::init`] runs.
    pub fn waypoints(&self) -> &[Point<f64>] {
        &self.waypoints
    }

    fn build_waypoints(&mut self, width: f64, height: f64, rng: &mut dyn RngCore) {
        let columns = WAYPOINT_COLUMNS;
        // a very wide world still gets one row
        let rows = ((WAYPOINT_COLUMNS as f64 * (height / width)) as usize).max(1);

        let deviation_x = width / columns as f64;
        let deviation_y = height / rows as f64;
        let max_jitter = deviation_x / 2.0;

        self.waypoints.clear();
        self.waypoints.reserve(columns * rows);

        for y in 0..rows {
            for x in 0..columns {
                let point = Point::new(
                    x as f64 * deviation_x + rng.random::<f64>() * max_jitter,
                    y as f64 * deviation_y + rng.random::<f64>() * max_jitter,
                );
                self.waypoints.push(clamp_to_bounds(point, width, height));
            }
        }
    }

    fn random_waypoint(&self, rng: &mut dyn RngCore) -> Option<Point<f64>> {
        if self.waypoints.is_empty() {
            return None;
        }
        Some(self.waypoints[rng.random_range(0..self.waypoints.len())])
    }
}

impl Behavior for WanderBehavior {
    fn init(&mut self, world: &Surroundings<'_>, _creature: &Creature, rng: &mut dyn RngCore) {
        self.build_waypoints(world.width(), world.height(), rng);
    }

    fn update(&mut self, world: &Surroundings<'_>, creature: &mut Creature, rng: &mut dyn RngCore) {
        if creature.target.is_none() {
            creature.target = self.random_waypoint(rng);
        }

        let vision = creature.traits.vision_radius;

        if let Some(food) = nearest_within(creature.pos, vision, world.food)
            && creature.energy + food.energy <= creature.traits.max_energy
        {
            creature.target = Some(food.pos);
        }

        let mates = world
            .creatures()
            .filter(|other| creature.is_compatible_mate(other));

        if let Some(mate) = nearest_within(creature.pos, vision, mates) {
            creature.target = Some(mate.pos);
        }
    }

    fn name(&self) -> &'static str {
        "wander"
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::simulation::creature::{Gender, Traits};
    use crate::simulation::food::Food;
    use crate::simulation::params::Params;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn params(width: f64, height: f64) -> Params {
        Params {
            width,
            height,
            ..Params::default()
        }
    }

    fn male() -> Creature {
        Creature::new(Point::new(0.0, 0.0), Gender::Male, Traits::default())
    }

    fn female(x: f64) -> Creature {
        Creature::new(Point::new(x, 0.0), Gender::Female, Traits::default())
    }

    fn initialized(params: &Params, creature: &Creature, rng: &mut StdRng) -> WanderBehavior {
        let mut behavior = WanderBehavior::default();
        behavior.init(&Surroundings::new(params, &[], &[], &[]), creature, rng);
        behavior
    }

    #[test]
    fn waypoint_grid_follows_aspect_ratio() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = params(1000.0, 500.0);
        let creature = male();
        let behavior = initialized(&params, &creature, &mut rng);

        assert_eq!(behavior.waypoints().len(), 10 * 5);
        for (i, p) in behavior.waypoints().iter().enumerate() {
            let column = (i % 10) as f64;
            let row = (i / 10) as f64;
            assert!(p.x() >= column * 100.0 && p.x() <= column * 100.0 + 50.0);
            assert!(p.y() >= row * 100.0 && p.y() <= row * 100.0 + 50.0);
        }
    }

    #[test]
    fn wide_world_keeps_one_row() {
        let mut rng = StdRng::seed_from_u64(2);
        let params = params(1000.0, 10.0);
        let creature = male();
        let behavior = initialized(&params, &creature, &mut rng);

        assert_eq!(behavior.waypoints().len(), 10);
        assert!(behavior.waypoints().iter().all(|p| p.y() <= 10.0));
    }

    #[test]
    fn idle_creature_picks_a_waypoint() {
        let mut rng = StdRng::seed_from_u64(3);
        let params = params(1000.0, 800.0);
        let mut creature = male();
        let mut behavior = initialized(&params, &creature, &mut rng);

        let world = Surroundings::new(&params, &[], &[], &[]);
        behavior.update(&world, &mut creature, &mut rng);

        let target = creature.target.expect("target assigned");
        assert!(behavior.waypoints().contains(&target));
    }

    #[test]
    fn food_that_would_overflow_is_ignored() {
        let mut rng = StdRng::seed_from_u64(4);
        let params = params(1000.0, 800.0);
        let mut creature = male();
        creature.energy = creature.traits.max_energy - 10.0;
        creature.target = Some(Point::new(500.0, 500.0));
        let mut behavior = initialized(&params, &creature, &mut rng);

        let food = [Food::new(Point::new(5.0, 0.0), 50.0)];
        let world = Surroundings::new(&params, &food, &[], &[]);
        behavior.update(&world, &mut creature, &mut rng);
        assert_eq!(creature.target, Some(Point::new(500.0, 500.0)));

        creature.energy = 100.0;
        behavior.update(&world, &mut creature, &mut rng);
        assert_eq!(creature.target, Some(Point::new(5.0, 0.0)));
    }

    #[test]
    fn nearest_food_wins_and_ties_keep_the_first() {
        let mut rng = StdRng::seed_from_u64(5);
        let params = params(1000.0, 800.0);
        let mut creature = male();
        creature.energy = 100.0;
        let mut behavior = initialized(&params, &creature, &mut rng);

        let food = [
            Food::new(Point::new(30.0, 0.0), 10.0),
            Food::new(Point::new(0.0, 20.0), 10.0),
            Food::new(Point::new(20.0, 0.0), 10.0),
            Food::new(Point::new(1000.0, 0.0), 10.0),
        ];
        let world = Surroundings::new(&params, &food, &[], &[]);
        behavior.update(&world, &mut creature, &mut rng);
        assert_eq!(creature.target, Some(Point::new(0.0, 20.0)));
    }

    #[test]
    fn mates_override_food() {
        let mut rng = StdRng::seed_from_u64(6);
        let params = params(1000.0, 800.0);
        let mut creature = male();
        creature.energy = 900.0;
        let mut behavior = initialized(&params, &creature, &mut rng);

        let food = [Food::new(Point::new(5.0, 0.0), 10.0)];
        let mut rival = male();
        rival.pos = Point::new(40.0, 0.0);
        let others = [rival, female(60.0), female(50.0)];
        let world = Surroundings::new(&params, &food, &others, &[]);
        behavior.update(&world, &mut creature, &mut rng);
        assert_eq!(creature.target, Some(Point::new(50.0, 0.0)));
    }

    #[test]
    fn exhausted_creature_does_not_seek_mates() {
        let mut rng = StdRng::seed_from_u64(7);
        let params = params(1000.0, 800.0);
        let mut creature = male();
        creature.energy = creature.traits.mating_energy_needed;
        creature.target = Some(Point::new(300.0, 300.0));
        let mut behavior = initialized(&params, &creature, &mut rng);

        let others = [female(50.0)];
        let world = Surroundings::new(&params, &[], &[], &others);
        behavior.update(&world, &mut creature, &mut rng);
        assert_eq!(creature.target, Some(Point::new(300.0, 300.0)));
    }
}
