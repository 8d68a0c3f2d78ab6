use std::fmt;

use geo::Point;
use rand::{Rng, RngCore};

use super::behavior::Behavior;
use super::wander::WanderBehavior;
use crate::simulation::locatable::Locatable;

/// Energy at or below which a creature starves.
pub const STARVATION_ENERGY: f64 = 1.0;

/// Remaining gestation at or below which the pending child is born.
pub const BIRTH_THRESHOLD: f64 = 1.0;

/// Stable identifier assigned when a creature joins a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CreatureId(pub u64);

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Biological sex of a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Fathers offspring.
    Male,
    /// Carries offspring until birth.
    Female,
}

impl Gender {
    /// Draws a gender with equal probability.
    pub fn random(rng: &mut dyn RngCore) -> Self {
        if rng.random_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

/// Heritable numeric traits of a creature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Traits {
    /// Energy cap.
    pub max_energy: f64,
    /// Age at which the creature dies.
    pub max_life: f64,
    /// Distance travelled per unit of time. Also the energy cost of moving.
    pub speed: f64,
    /// Distance at which food and mates are noticed.
    pub vision_radius: f64,
    /// Energy that must be exceeded before mating.
    pub mating_energy_needed: f64,
    /// Full gestation length.
    pub breed_length: f64,
    /// Gestation progress per unit of time. Also the energy cost of pregnancy.
    pub breed_progress_speed: f64,
}

impl Default for Traits {
    fn default() -> Self {
        Self {
            max_energy: 1000.0,
            max_life: 120.0,
            speed: 30.0,
            vision_radius: 150.0,
            mating_energy_needed: 600.0,
            breed_length: 300.0,
            breed_progress_speed: 20.0,
        }
    }
}

/// A child that has been conceived but not yet born.
///
/// It has no position until birth places it next to its mother.
#[derive(Debug)]
pub struct Offspring {
    /// Energy the child starts with.
    pub energy: f64,
    /// Gender of the child.
    pub gender: Gender,
    /// Inherited traits.
    pub traits: Traits,
    behavior: Box<dyn Behavior>,
}

impl Offspring {
    /// Creates a pending child driven by `behavior` once born.
    pub fn new(energy: f64, gender: Gender, traits: Traits, behavior: Box<dyn Behavior>) -> Self {
        Self {
            energy,
            gender,
            traits,
            behavior,
        }
    }

    /// Turns the pending child into a creature standing at `pos`.
    ///
    /// Starting energy is capped at the child's own maximum.
    pub fn born_at(self, pos: Point<f64>) -> Creature {
        let mut creature = Creature::new(pos, self.gender, self.traits);
        creature.behavior = Some(self.behavior);
        creature.energy = self.energy.min(self.traits.max_energy);
        creature
    }
}

/// A simulated creature.
///
/// Creatures wander, eat, mate and age. Energy and life are kept within bounds by
/// the update engine, which removes the creature once either runs out.
#[derive(Debug)]
pub struct Creature {
    id: CreatureId,
    /// Position in 2D space.
    pub pos: Point<f64>,
    /// Where the creature is heading. `None` means idle.
    pub target: Option<Point<f64>>,
    /// Current energy.
    pub energy: f64,
    /// Age. Counts up towards `traits.max_life`.
    pub life: f64,
    /// Gender of the creature.
    pub gender: Gender,
    /// Heritable traits.
    pub traits: Traits,
    /// Remaining gestation while pregnant. Reset to `traits.breed_length` after birth.
    pub gestation: f64,
    fetus: Option<Offspring>,
    behavior: Option<Box<dyn Behavior>>,
}

impl Creature {
    /// Creates a creature with full energy, zero age and the default wandering behavior.
    ///
    /// # Arguments
    ///
    /// * `pos` - Initial position
    /// * `gender` - Gender of the creature
    /// * `traits` - Heritable traits; `max_energy` is also the starting energy
    ///
    /// # Returns
    ///
    /// A creature with a default id. The world assigns the real one on insertion.
    pub fn new(pos: Point<f64>, gender: Gender, traits: Traits) -> Self {
        Self {
            id: CreatureId::default(),
            pos,
            target: None,
            energy: traits.max_energy,
            life: 0.0,
            gender,
            traits,
            gestation: traits.breed_length,
            fetus: None,
            behavior: Some(Box::new(WanderBehavior::default())),
        }
    }

    /// Replaces the behavior that picks this creature's targets.
    #[must_use]
    pub fn with_behavior(mut self, behavior: Box<dyn Behavior>) -> Self {
        self.behavior = Some(behavior);
        self
    }

    /// Identifier assigned by the world. Default until the creature is added.
    pub fn id(&self) -> CreatureId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: CreatureId) {
        self.id = id;
    }

    /// Name of the attached behavior.
    pub fn behavior_name(&self) -> &'static str {
        self.behavior.as_deref().map_or("none", Behavior::name)
    }

    pub(crate) fn take_behavior(&mut self) -> Option<Box<dyn Behavior>> {
        self.behavior.take()
    }

    pub(crate) fn restore_behavior(&mut self, behavior: Box<dyn Behavior>) {
        self.behavior = Some(behavior);
    }

    /// Whether the creature carries a pending child.
    pub fn is_pregnant(&self) -> bool {
        self.fetus.is_some()
    }

    /// The pending child, if pregnant.
    pub fn fetus(&self) -> Option<&Offspring> {
        self.fetus.as_ref()
    }

    /// Starts a pregnancy carrying `offspring`.
    pub fn conceive(&mut self, offspring: Offspring) {
        self.fetus = Some(offspring);
    }

    /// Whether this creature is currently able to mate.
    pub fn is_fertile(&self) -> bool {
        self.energy > self.traits.mating_energy_needed && !self.is_pregnant()
    }

    /// Whether this creature and `other` could mate with each other.
    pub fn is_compatible_mate(&self, other: &Creature) -> bool {
        self.gender != other.gender && self.is_fertile() && other.is_fertile()
    }

    /// Increases energy, capped at `traits.max_energy`.
    pub fn gain_energy(&mut self, amount: f64) {
        self.energy = (self.energy + amount).min(self.traits.max_energy);
    }

    /// Reduces energy.
    pub fn consume_energy(&mut self, amount: f64) {
        self.energy -= amount;
    }

    /// Increases age.
    pub fn age_by(&mut self, dt: f64) {
        self.life += dt;
    }

    /// Energy spent per unit of time given the world's base depletion.
    pub fn energy_depletion_rate(&self, base: f64) -> f64 {
        let mut rate = base;

        if self.target.is_some() {
            rate += self.traits.speed;
        }

        if self.is_pregnant() {
            rate += self.traits.breed_progress_speed;
        }

        rate
    }

    /// Whether energy has dropped to the starvation threshold.
    pub fn is_starved(&self) -> bool {
        self.energy <= STARVATION_ENERGY
    }

    /// Whether the creature has reached its maximum age.
    pub fn is_too_old(&self) -> bool {
        self.life >= self.traits.max_life
    }

    /// Advances an ongoing pregnancy by `dt` and returns the newborn once it is due.
    ///
    /// Gestation counts down while above [`BIRTH_THRESHOLD`]; the first call that
    /// finds it at or below the threshold delivers the child at the mother's position.
    ///
    /// # Arguments
    ///
    /// * `dt` - Scaled time step of the current tick
    ///
    /// # Returns
    ///
    /// The newborn, not yet added to any world, or `None` if nothing was delivered.
    pub fn progress_gestation(&mut self, dt: f64) -> Option<Creature> {
        if !self.is_pregnant() {
            return None;
        }

        if self.gestation > BIRTH_THRESHOLD {
            self.gestation -= self.traits.breed_progress_speed * dt;
            return None;
        }

        self.gestation = self.traits.breed_length;
        self.fetus.take().map(|fetus| fetus.born_at(self.pos))
    }
}

impl Locatable for Creature {
    fn pos(&self) -> Point<f64> {
        self.pos
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn female() -> Creature {
        Creature::new(Point::new(4.0, 2.0), Gender::Female, Traits::default())
    }

    fn offspring() -> Offspring {
        Offspring::new(
            42.0,
            Gender::Male,
            Traits::default(),
            Box::new(WanderBehavior::default()),
        )
    }

    #[test]
    fn new_creature_starts_full_and_young() {
        let creature = female();
        assert_eq!(creature.energy, creature.traits.max_energy);
        assert_eq!(creature.life, 0.0);
        assert_eq!(creature.gestation, creature.traits.breed_length);
        assert!(!creature.is_pregnant());
        assert_eq!(creature.behavior_name(), "wander");
    }

    #[test]
    fn gain_energy_is_capped() {
        let mut creature = female();
        creature.energy = 10.0;
        creature.gain_energy(1e9);
        assert_eq!(creature.energy, creature.traits.max_energy);
    }

    #[test]
    fn depletion_includes_movement_and_pregnancy() {
        let mut creature = female();
        assert_eq!(creature.energy_depletion_rate(2.0), 2.0);

        creature.target = Some(Point::new(0.0, 0.0));
        let moving = 2.0 + creature.traits.speed;
        assert_eq!(creature.energy_depletion_rate(2.0), moving);

        creature.conceive(offspring());
        let carrying = moving + creature.traits.breed_progress_speed;
        assert_eq!(creature.energy_depletion_rate(2.0), carrying);
    }

    #[test]
    fn gestation_counts_down_then_delivers() {
        let mut mother = female();
        mother.traits.breed_length = 10.0;
        mother.traits.breed_progress_speed = 5.0;
        mother.gestation = 10.0;
        mother.conceive(offspring());

        assert!(mother.progress_gestation(1.0).is_none());
        assert_eq!(mother.gestation, 5.0);
        assert!(mother.progress_gestation(1.0).is_none());
        assert_eq!(mother.gestation, 0.0);

        let newborn = mother.progress_gestation(1.0).expect("child is due");
        assert_eq!(newborn.pos, mother.pos);
        assert_eq!(newborn.energy, 42.0);
        assert_eq!(newborn.gender, Gender::Male);
        assert_eq!(newborn.behavior_name(), "wander");
        assert!(!mother.is_pregnant());
        assert_eq!(mother.gestation, 10.0);
    }

    #[test]
    fn pregnant_creatures_are_not_fertile() {
        let mut mother = female();
        let father = Creature::new(Point::new(0.0, 0.0), Gender::Male, Traits::default());
        assert!(mother.is_compatible_mate(&father));

        mother.conceive(offspring());
        assert!(!mother.is_compatible_mate(&father));
    }

    #[test]
    fn same_gender_is_never_compatible() {
        let a = female();
        let b = female();
        assert!(!a.is_compatible_mate(&b));
    }
}
