//! Simulation constants, overridable from configuration files.

use serde::{Deserialize, Serialize};

use crate::{Circle, Position};

/// Every adjustable constant of the simulation.
///
/// Missing fields fall back to [`Tuning::default`] when deserialising, so a
/// configuration file only needs to list the values it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Simulated time covered by a single tick.
    pub delta_t: f64,
    /// Ant speed in world units per unit of simulated time.
    pub ant_speed: f64,
    /// Age in ticks at which an ant dies of old age.
    pub ant_lifetime: u32,
    /// Half width of the square domain; valid coordinates satisfy `|c| < half_width`.
    pub domain_half_width: f64,
    /// Radius of workers and guards.
    pub ant_radius: f64,
    /// Radius of a food item.
    pub food_radius: f64,
    /// Food units carried by one item; colonies below this stock may collapse.
    pub food_value: f64,
    /// Probability of an automatic food spawn per tick.
    pub food_rate: f64,
    /// Food consumed per ant per tick.
    pub feed_rate: f64,
    /// Birth probability per unit of stored food per tick.
    pub birth_rate: f64,
    /// Maximum number of colonies a scenario may declare.
    pub max_colonies: usize,
    /// Margin (ε) applied to every runtime contact test.
    pub tolerance: f64,
    /// Attempts made to find a free site before an automatic spawn is skipped.
    pub max_food_placement_attempts: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            delta_t: 0.25,
            ant_speed: 1.0,
            ant_lifetime: 1_000,
            domain_half_width: 20.0,
            ant_radius: 1.0,
            food_radius: 0.25,
            food_value: 1.0,
            food_rate: 0.2,
            feed_rate: 0.002,
            birth_rate: 0.0005,
            max_colonies: 10,
            tolerance: 0.01,
            max_food_placement_attempts: 256,
        }
    }
}

impl Tuning {
    /// Distance an ant covers in one tick.
    #[must_use]
    pub fn step_length(&self) -> f64 {
        self.ant_speed * self.delta_t
    }

    /// Radius a colony may reach for the given population and food stock.
    ///
    /// Negative stocks count as empty.
    #[must_use]
    pub fn theoretical_radius(&self, population: usize, food: f64) -> f64 {
        (1.0 + (population as f64).sqrt() + food.max(0.0).sqrt()) * self.ant_radius
    }

    /// Reports whether the position lies strictly inside the domain.
    #[must_use]
    pub fn in_domain(&self, position: Position) -> bool {
        position.x().abs() < self.domain_half_width && position.y().abs() < self.domain_half_width
    }

    /// Footprint of an ant standing at `position`.
    #[must_use]
    pub fn ant_circle(&self, position: Position) -> Circle {
        Circle::new(position, self.ant_radius)
    }

    /// Footprint of a food item lying at `position`.
    #[must_use]
    pub fn food_circle(&self, position: Position) -> Circle {
        Circle::new(position, self.food_radius)
    }

    /// Reports whether a food item at `position` would touch none of `obstacles`.
    pub fn food_site_clear<I>(&self, position: Position, obstacles: I) -> bool
    where
        I: IntoIterator<Item = Circle>,
    {
        let site = self.food_circle(position);
        obstacles
            .into_iter()
            .all(|obstacle| !site.touches(&obstacle, self.tolerance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_colony_has_unit_theoretical_radius() {
        let tuning = Tuning::default();
        assert!((tuning.theoretical_radius(0, 0.0) - 1.0).abs() < 1e-12);
        assert!((tuning.theoretical_radius(4, 9.0) - 6.0).abs() < 1e-12);
        assert!((tuning.theoretical_radius(0, -3.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn domain_bounds_are_exclusive() {
        let tuning = Tuning::default();
        assert!(tuning.in_domain(Position::new(19.99, -19.99)));
        assert!(!tuning.in_domain(Position::new(20.0, 0.0)));
        assert!(!tuning.in_domain(Position::new(0.0, -20.0)));
    }

    #[test]
    fn food_site_rejects_touching_obstacles() {
        let tuning = Tuning::default();
        let obstacle = Circle::new(Position::new(1.25, 0.0), 1.0);
        assert!(!tuning.food_site_clear(Position::ORIGIN, [obstacle]));
        assert!(tuning.food_site_clear(Position::new(-2.0, 0.0), [obstacle]));
    }
}
