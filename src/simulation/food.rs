//! Food items that creatures can consume for energy.

use geo::Point;
use rand::{Rng, RngCore};

use super::locatable::Locatable;

/// A food item lying in the world.
///
/// The whole value is granted to the first creature that comes close enough,
/// after which the item is removed from the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    /// Position in 2D space.
    pub pos: Point<f64>,
    /// Energy granted on consumption.
    pub energy: f64,
}

impl Food {
    /// Creates a food item at a fixed position.
    pub fn new(pos: Point<f64>, energy: f64) -> Self {
        Self { pos, energy }
    }

    /// Creates a food item at a uniformly random position.
    ///
    /// # Arguments
    ///
    /// * `width` - Width of the world
    /// * `height` - Height of the world
    /// * `max_energy` - Exclusive upper bound for the energy
    /// * `rng` - Random number generator
    ///
    /// # Returns
    ///
    /// A food item inside `width` x `height` whose energy is a whole number drawn
    /// uniformly below `max_energy`.
    pub fn new_random(width: f64, height: f64, max_energy: f64, rng: &mut dyn RngCore) -> Self {
        let x = width * rng.random::<f64>();
        let y = height * rng.random::<f64>();
        let energy = (rng.random::<f64>() * max_energy).floor();

        Self::new(Point::new(x, y), energy)
    }
}

impl Locatable for Food {
    fn pos(&self) -> Point<f64> {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_food_stays_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let food = Food::new_random(50.0, 20.0, 100.0, &mut rng);
            assert!((0.0..50.0).contains(&food.pos.x()));
            assert!((0.0..20.0).contains(&food.pos.y()));
            assert!((0.0..100.0).contains(&food.energy));
            assert!((food.energy.fract()).abs() < f64::EPSILON);
        }
    }
}
