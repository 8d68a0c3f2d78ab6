//! Trait inheritance for newly conceived creatures.
//!
//! Each heritable trait is the mean of both parents, scaled by its own mutation
//! factor drawn uniformly from `[1 - rate, 1 + rate]`.

use rand::{Rng, RngCore};

use super::creature::{Creature, Gender, Offspring, Traits, WanderBehavior};

/// Draws a multiplier centered on 1.0 with spread `mutation_rate`.
///
/// # Arguments
///
/// * `mutation_rate` - Maximum relative deviation from 1.0
/// * `rng` - Random number generator
///
/// # Returns
///
/// A factor in `[1 - mutation_rate, 1 + mutation_rate)`. A rate of zero always
/// yields exactly 1.0.
pub fn mutation_factor(mutation_rate: f64, rng: &mut dyn RngCore) -> f64 {
    let mutation = rng.random::<f64>() * 2.0 - 1.0; // Range: [-1, 1)
    1.0 + mutation * mutation_rate
}

/// Combines both parents' traits into a child's traits.
///
/// # Arguments
///
/// * `father` - Traits of the father
/// * `mother` - Traits of the mother
/// * `mutation_rate` - Spread of the per-trait mutation factor
/// * `rng` - Random number generator
///
/// # Returns
///
/// Traits where every field is the parents' mean scaled by its own mutation factor.
pub fn crossover(
    father: &Traits,
    mother: &Traits,
    mutation_rate: f64,
    rng: &mut dyn RngCore,
) -> Traits {
    let mut inherit = |f: f64, m: f64| f.midpoint(m) * mutation_factor(mutation_rate, rng);

    Traits {
        max_energy: inherit(father.max_energy, mother.max_energy),
        max_life: inherit(father.max_life, mother.max_life),
        speed: inherit(father.speed, mother.speed),
        vision_radius: inherit(father.vision_radius, mother.vision_radius),
        mating_energy_needed: inherit(father.mating_energy_needed, mother.mating_energy_needed),
        breed_length: inherit(father.breed_length, mother.breed_length),
        breed_progress_speed: inherit(father.breed_progress_speed, mother.breed_progress_speed),
    }
}

/// Creates the pending child of `father` and `mother`.
///
/// # Arguments
///
/// * `father` - The male parent
/// * `mother` - The female parent, whose gestation length sets the child's energy
/// * `mutation_rate` - Spread of the per-trait mutation factor
/// * `rng` - Random number generator
///
/// # Returns
///
/// An [`Offspring`] with inherited traits, a random gender and a fresh wandering
/// behavior.
pub fn conceive(
    father: &Creature,
    mother: &Creature,
    mutation_rate: f64,
    rng: &mut dyn RngCore,
) -> Offspring {
    let traits = crossover(&father.traits, &mother.traits, mutation_rate, rng);
    let gender = Gender::random(rng);

    Offspring::new(
        mother.traits.breed_length,
        gender,
        traits,
        Box::new(WanderBehavior::default()),
    )
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use geo::Point;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn parents() -> (Creature, Creature) {
        let father = Creature::new(
            Point::new(0.0, 0.0),
            Gender::Male,
            Traits {
                max_energy: 800.0,
                max_life: 100.0,
                speed: 20.0,
                vision_radius: 100.0,
                mating_energy_needed: 400.0,
                breed_length: 200.0,
                breed_progress_speed: 10.0,
            },
        );
        let mother = Creature::new(
            Point::new(1.0, 1.0),
            Gender::Female,
            Traits {
                max_energy: 1200.0,
                max_life: 140.0,
                speed: 40.0,
                vision_radius: 200.0,
                mating_energy_needed: 600.0,
                breed_length: 300.0,
                breed_progress_speed: 30.0,
            },
        );
        (father, mother)
    }

    #[test]
    fn zero_mutation_averages_parents() {
        let mut rng = StdRng::seed_from_u64(9);
        let (father, mother) = parents();
        let child = conceive(&father, &mother, 0.0, &mut rng);

        assert_eq!(
            child.traits,
            Traits {
                max_energy: 1000.0,
                max_life: 120.0,
                speed: 30.0,
                vision_radius: 150.0,
                mating_energy_needed: 500.0,
                breed_length: 250.0,
                breed_progress_speed: 20.0,
            }
        );
        assert_eq!(child.energy, mother.traits.breed_length);
    }

    #[test]
    fn mutation_factor_stays_within_spread() {
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..1000 {
            let factor = mutation_factor(0.2, &mut rng);
            assert!((0.8..=1.2).contains(&factor));
        }
        assert_eq!(mutation_factor(0.0, &mut rng), 1.0);
    }

    #[test]
    fn genders_are_drawn_independently_of_parents() {
        let mut rng = StdRng::seed_from_u64(12);
        let (father, mother) = parents();
        let males = (0..200)
            .map(|_| conceive(&father, &mother, 0.1, &mut rng).gender)
            .filter(|gender| *gender == Gender::Male)
            .count();
        assert!(males > 50 && males < 150);
    }
}
