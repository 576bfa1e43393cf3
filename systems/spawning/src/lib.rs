#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic spawning system responsible for emitting automatic food placements.

use bugs_life_core::{Command, Event, FoodOrigin, Position, Tuning, WorldView};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration parameters required to construct the spawning system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided seed.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self { rng_seed }
    }
}

/// Pure system that drops food at random free sites as time advances.
#[derive(Debug)]
pub struct FoodSpawning {
    rng: ChaCha8Rng,
}

impl FoodSpawning {
    /// Creates a new spawning system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        }
    }

    /// Consumes events and an immutable view to emit food placement commands.
    ///
    /// Every elapsed tick spawns one item with probability `food_rate`.
    pub fn handle(
        &mut self,
        events: &[Event],
        view: &WorldView,
        tuning: &Tuning,
        out: &mut Vec<Command>,
    ) {
        let ticks = events
            .iter()
            .filter(|event| matches!(event, Event::TimeAdvanced { .. }))
            .count();

        for _ in 0..ticks {
            let draw: f64 = self.rng.gen();
            if draw >= tuning.food_rate {
                continue;
            }
            match self.find_site(view, tuning) {
                Some(position) => out.push(Command::PlaceFood {
                    position,
                    origin: FoodOrigin::Automatic,
                }),
                None => tracing::warn!(
                    "no free food site after {} attempts, spawn skipped",
                    tuning.max_food_placement_attempts
                ),
            }
        }
    }

    fn find_site(&mut self, view: &WorldView, tuning: &Tuning) -> Option<Position> {
        let half_width = tuning.domain_half_width;
        if half_width <= 0.0 {
            return None;
        }
        (0..tuning.max_food_placement_attempts).find_map(|_| {
            let candidate = Position::new(
                self.rng.gen_range(-half_width..half_width),
                self.rng.gen_range(-half_width..half_width),
            );
            (tuning.in_domain(candidate) && view.food_site_clear(candidate, tuning))
                .then_some(candidate)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_attempts_skip_the_spawn() {
        let tuning = Tuning {
            food_rate: 1.0,
            max_food_placement_attempts: 0,
            ..Tuning::default()
        };
        let mut spawning = FoodSpawning::new(Config::new(5));
        assert_eq!(spawning.find_site(&WorldView::default(), &tuning), None);
    }
}
