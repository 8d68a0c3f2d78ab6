//! Lifecycle events recorded while a tick runs.
//!
//! Events are collected in the order they happen so a driver or viewer can react
//! to births and deaths without diffing world snapshots.

use geo::Point;

use super::creature::CreatureId;

/// Why a creature left the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Energy dropped to the starvation threshold.
    Starvation,
    /// Life reached the creature's maximum.
    OldAge,
}

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleEvent {
    /// A mother started carrying a child.
    Conceived {
        /// The mother.
        mother: CreatureId,
        /// The father.
        father: CreatureId,
    },
    /// A creature ate a food item.
    FoodEaten {
        /// The creature that ate.
        creature: CreatureId,
        /// Energy value of the food.
        energy: f64,
    },
    /// A newborn joined the world.
    Born {
        /// The newborn.
        creature: CreatureId,
        /// Its mother.
        mother: CreatureId,
        /// Where it was born.
        pos: Point<f64>,
    },
    /// A creature was removed from the world.
    Died {
        /// The creature that died.
        creature: CreatureId,
        /// What killed it.
        cause: DeathCause,
    },
    /// A food item was spawned.
    FoodSpawned {
        /// Where the food appeared.
        pos: Point<f64>,
        /// Energy value of the food.
        energy: f64,
    },
}

/// Everything that happened during one tick.
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    events: Vec<LifecycleEvent>,
}

impl TickReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn push(&mut self, event: LifecycleEvent) {
        self.events.push(event);
    }

    /// All events in the order they happened.
    pub fn events(&self) -> &[LifecycleEvent] {
        &self.events
    }

    /// Number of conceptions.
    pub fn conceptions(&self) -> usize {
        self.count(|e| matches!(e, LifecycleEvent::Conceived { .. }))
    }

    /// Number of births.
    pub fn births(&self) -> usize {
        self.count(|e| matches!(e, LifecycleEvent::Born { .. }))
    }

    /// Number of deaths with the given cause.
    pub fn deaths(&self, cause: DeathCause) -> usize {
        self.count(|e| match e {
            LifecycleEvent::Died { cause: c, .. } => *c == cause,
            _ => false,
        })
    }

    /// Number of food items eaten.
    pub fn food_eaten(&self) -> usize {
        self.count(|e| matches!(e, LifecycleEvent::FoodEaten { .. }))
    }

    /// Number of food items spawned.
    pub fn food_spawned(&self) -> usize {
        self.count(|e| matches!(e, LifecycleEvent::FoodSpawned { .. }))
    }

    fn count(&self, predicate: impl Fn(&LifecycleEvent) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(e)).count()
    }
}
