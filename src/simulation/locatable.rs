//! Trait for entities that have a position in the world.
//!
//! Creatures and food both implement it so proximity scans can be written once.

use geo::Point;

use super::geometric_utils;

/// Trait for entities with a position in 2D space.
pub trait Locatable {
    /// Returns the entity's position.
    fn pos(&self) -> Point<f64>;

    /// Distance between this entity and another one.
    fn distance_to(&self, other: &impl Locatable) -> f64
    where
        Self: Sized,
    {
        geometric_utils::distance(self.pos(), other.pos())
    }
}

/// Finds the nearest item strictly closer than `radius` to `origin`.
///
/// Ties keep the first item in iteration order.
pub fn nearest_within<'a, T, I>(origin: Point<f64>, radius: f64, items: I) -> Option<&'a T>
where
    T: Locatable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut nearest = None;
    let mut nearest_distance = f64::MAX;

    for item in items {
        let distance = geometric_utils::distance(origin, item.pos());
        if distance < radius && distance < nearest_distance {
            nearest = Some(item);
            nearest_distance = distance;
        }
    }

    nearest
}
