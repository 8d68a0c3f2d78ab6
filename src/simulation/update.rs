//! One simulation tick.
//!
//! Creatures are processed one after another in world order. Each creature is fully
//! handled (think, move, mate, eat, gestate, lose energy, age) before the next one,
//! so later creatures see everything earlier creatures did in the same tick:
//! positions, eaten food, pregnancies and deaths. Newborns join the world after the
//! pass, then food is spawned.

use rand::Rng;
use tracing::{debug, trace};

use super::creature::{Creature, Gender, Surroundings};
use super::events::{DeathCause, LifecycleEvent, TickReport};
use super::food::Food;
use super::genetics;
use super::geometric_utils::{Step, step_towards};
use super::locatable::Locatable;
use super::world::World;

/// Reach multiplier: a creature arrives at, eats or mates with anything closer
/// than its per-tick stride times this factor.
pub const MIN_DISTANCE: f64 = 1.25;

impl World {
    /// Advances the simulation by `delta` time units, scaled by the time scale.
    ///
    /// # Arguments
    ///
    /// * `delta` - Unscaled time step. Must not be negative.
    ///
    /// # Returns
    ///
    /// A [`TickReport`] listing conceptions, food eaten, deaths, births and spawned
    /// food in the order they happened.
    pub fn tick(&mut self, delta: f64) -> TickReport {
        let mut report = TickReport::new();
        let dt = delta * self.params.time_scale;
        let mut newborns = Vec::new();

        let mut index = 0;
        while index < self.creatures.len() {
            self.think(index);
            move_creature(&mut self.creatures[index], dt);
            self.handle_mating(index, dt, &mut report);
            self.handle_food_intake(index, dt, &mut report);

            let creature = &mut self.creatures[index];
            if let Some(newborn) = creature.progress_gestation(dt) {
                newborns.push((creature.id(), newborn));
            }

            if let Some(cause) = self.handle_attrition(index, dt) {
                let dead = self.creatures.remove(index);
                debug!(creature = %dead.id(), ?cause, life = dead.life, "creature died");
                report.push(LifecycleEvent::Died {
                    creature: dead.id(),
                    cause,
                });
                // the next creature has shifted into `index`
                continue;
            }

            index += 1;
        }

        for (mother, newborn) in newborns {
            let pos = newborn.pos;
            let id = self.add_creature(newborn);
            debug!(creature = %id, %mother, "creature born");
            report.push(LifecycleEvent::Born {
                creature: id,
                mother,
                pos,
            });
        }

        self.spawn_food(&mut report);
        self.time += dt;

        report
    }

    /// Lets the creature's behavior refresh its target.
    fn think(&mut self, index: usize) {
        let (before, rest) = self.creatures.split_at_mut(index);
        let Some((creature, after)) = rest.split_first_mut() else {
            return;
        };
        let Some(mut behavior) = creature.take_behavior() else {
            return;
        };

        let surroundings = Surroundings::new(&self.params, &self.food, before, after);
        behavior.update(&surroundings, creature, &mut self.rng);
        creature.restore_behavior(behavior);
    }

    /// Pairs the creature with every compatible partner within reach.
    ///
    /// A female stops after her first conception since she is pregnant from then
    /// on; a male may father several children in the same tick.
    fn handle_mating(&mut self, index: usize, dt: f64, report: &mut TickReport) {
        for other in 0..self.creatures.len() {
            if other == index {
                continue;
            }

            let creature = &self.creatures[index];
            let partner = &self.creatures[other];
            let range = reach(creature, dt);

            if creature.distance_to(partner) >= range || !creature.is_compatible_mate(partner) {
                continue;
            }

            let (father, mother) = if creature.gender == Gender::Female {
                (other, index)
            } else {
                (index, other)
            };

            let offspring = genetics::conceive(
                &self.creatures[father],
                &self.creatures[mother],
                self.params.mutation_rate,
                &mut self.rng,
            );
            self.creatures[mother].conceive(offspring);

            let mother = self.creatures[mother].id();
            let father = self.creatures[father].id();
            debug!(%mother, %father, "creature conceived");
            report.push(LifecycleEvent::Conceived { mother, father });
        }
    }

    /// Eats every food item within reach.
    fn handle_food_intake(&mut self, index: usize, dt: f64, report: &mut TickReport) {
        let creature = &mut self.creatures[index];
        let range = reach(creature, dt);

        self.food.retain(|food| {
            if creature.distance_to(food) >= range {
                return true;
            }

            creature.gain_energy(food.energy);
            trace!(creature = %creature.id(), energy = food.energy, "food eaten");
            report.push(LifecycleEvent::FoodEaten {
                creature: creature.id(),
                energy: food.energy,
            });
            false
        });
    }

    /// Drains energy and adds age, returning why the creature died if it did.
    fn handle_attrition(&mut self, index: usize, dt: f64) -> Option<DeathCause> {
        let base = self.params.base_energy_depletion;
        let creature = &mut self.creatures[index];

        let depletion = creature.energy_depletion_rate(base);
        creature.consume_energy(depletion * dt);
        if creature.is_starved() {
            return Some(DeathCause::Starvation);
        }

        creature.age_by(dt);
        if creature.is_too_old() {
            return Some(DeathCause::OldAge);
        }

        None
    }

    /// Rolls for new food once per whole unit of time scale.
    fn spawn_food(&mut self, report: &mut TickReport) {
        let rolls = self.params.time_scale as usize;

        for _ in 0..rolls {
            if self.food.len() >= self.params.max_food {
                break;
            }

            if self.rng.random_range(0..100) < self.params.food_spawn_rate {
                let food = Food::new_random(
                    self.params.width,
                    self.params.height,
                    self.params.max_food_energy,
                    &mut self.rng,
                );
                trace!(
                    x = food.pos.x(),
                    y = food.pos.y(),
                    energy = food.energy,
                    "food spawned"
                );
                report.push(LifecycleEvent::FoodSpawned {
                    pos: food.pos,
                    energy: food.energy,
                });
                self.food.push(food);
            }
        }
    }
}

/// Distance below which `creature` arrives, eats or mates this tick.
fn reach(creature: &Creature, dt: f64) -> f64 {
    creature.traits.speed * dt * MIN_DISTANCE
}

/// Moves the creature towards its target, clearing the target on arrival.
fn move_creature(creature: &mut Creature, dt: f64) {
    let Some(target) = creature.target else {
        return;
    };

    let stride = creature.traits.speed * dt;
    match step_towards(creature.pos, target, stride, reach(creature, dt)) {
        Step::Towards(pos) => creature.pos = pos,
        Step::Arrived(pos) => {
            creature.pos = pos;
            creature.target = None;
        }
    }
}
