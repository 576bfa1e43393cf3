#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state for the Bug's Life colony simulation.
//!
//! The world owns every registry and mutates them only through [`apply`].
//! It trusts the scenario it is built from; parsing and structural
//! validation happen before construction.

mod ant;
mod colony;
mod defense;
mod food;
mod forage;
mod registry;
mod tick;

use bugs_life_core::{
    AntKind, ColonyId, Command, Event, FoodId, ForagingMode, GuardId, Scenario, Tuning, WorkerId,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{
    ant::{GuardState, WorkerState},
    colony::ColonyState,
    food::FoodState,
    registry::Registry,
};

const DEFAULT_SEED: u64 = 0x6275_6773_6c69_6665;

/// Parameters fixed for the lifetime of a world.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    tuning: Tuning,
    seed: u64,
}

impl Config {
    /// Creates a configuration from simulation constants and a random seed.
    #[must_use]
    pub const fn new(tuning: Tuning, seed: u64) -> Self {
        Self { tuning, seed }
    }

    /// Simulation constants.
    #[must_use]
    pub const fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Seed for every random generator derived from this configuration.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Tuning::default(), DEFAULT_SEED)
    }
}

#[derive(Debug, Default)]
struct IdAllocator {
    colony: u32,
    worker: u32,
    guard: u32,
    food: u32,
}

impl IdAllocator {
    fn colony(&mut self) -> ColonyId {
        let id = ColonyId::new(self.colony);
        self.colony += 1;
        id
    }

    fn worker(&mut self) -> WorkerId {
        let id = WorkerId::new(self.worker);
        self.worker += 1;
        id
    }

    fn guard(&mut self) -> GuardId {
        let id = GuardId::new(self.guard);
        self.guard += 1;
        id
    }

    fn food(&mut self) -> FoodId {
        let id = FoodId::new(self.food);
        self.food += 1;
        id
    }
}

/// Represents the authoritative Bug's Life world state.
#[derive(Debug)]
pub struct World {
    tuning: Tuning,
    colonies: Registry<ColonyState>,
    workers: Registry<WorkerState>,
    guards: Registry<GuardState>,
    food: Registry<FoodState>,
    ids: IdAllocator,
    mode: ForagingMode,
    next_birth: AntKind,
    rng: ChaCha8Rng,
    tick_index: u64,
}

impl World {
    /// Builds a world from an already validated scenario.
    ///
    /// Colonies receive identifiers in declaration order, starting at zero.
    #[must_use]
    pub fn from_scenario(scenario: &Scenario, config: Config) -> Self {
        let Config { tuning, seed } = config;
        let mut world = Self {
            colonies: Registry::new(),
            workers: Registry::new(),
            guards: Registry::new(),
            food: Registry::new(),
            ids: IdAllocator::default(),
            mode: ForagingMode::Peace,
            next_birth: AntKind::Guard,
            rng: ChaCha8Rng::seed_from_u64(seed),
            tick_index: 0,
            tuning,
        };

        for record in &scenario.colonies {
            let colony = world.ids.colony();
            world.colonies.insert(ColonyState {
                id: colony,
                center: record.center,
                radius: record.radius,
                theoretical_radius: world
                    .tuning
                    .theoretical_radius(record.population(), record.food),
                food: record.food,
                delivered: 0,
                pending_deliveries: 0,
            });
            for worker in &record.workers {
                let id = world.ids.worker();
                world.workers.insert(WorkerState {
                    id,
                    colony,
                    age: worker.age,
                    position: worker.position,
                    goal: worker.goal,
                    carrying_food: worker.carrying_food,
                    in_contact: false,
                });
            }
            for guard in &record.guards {
                let id = world.ids.guard();
                world.guards.insert(GuardState {
                    id,
                    colony,
                    age: guard.age,
                    position: guard.position,
                    goal: guard.position,
                    in_contact: false,
                });
            }
        }

        for item in &scenario.food {
            let id = world.ids.food();
            world.food.insert(FoodState {
                id,
                position: item.position,
            });
        }

        tracing::info!(
            "world built with {} colonies, {} ants and {} food items",
            scenario.colonies.len(),
            scenario.ant_count(),
            scenario.food.len()
        );
        world
    }

    fn switch_mode(&mut self, mode: ForagingMode, out: &mut Vec<Event>) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        tracing::debug!("foraging mode switched to {:?}", mode);
        out.push(Event::ForagingModeChanged { mode });
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Tick => tick::run(world, out_events),
        Command::PlaceFood { position, origin } => food::place(world, position, origin, out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use bugs_life_core::{
        ColonyId, ColonyRecord, ColonySnapshot, FoodRecord, FoodSnapshot, ForagingMode,
        GuardRecord, GuardSnapshot, Scenario, Tuning, WorkerRecord, WorkerSnapshot, WorldView,
    };

    use super::World;

    /// Simulation constants the world runs with.
    #[must_use]
    pub fn tuning(world: &World) -> &Tuning {
        &world.tuning
    }

    /// Current world-wide foraging mode.
    #[must_use]
    pub fn mode(world: &World) -> ForagingMode {
        world.mode
    }

    /// Number of ticks applied since construction.
    #[must_use]
    pub fn tick_index(world: &World) -> u64 {
        world.tick_index
    }

    /// Snapshot of a single colony, if it is still alive.
    #[must_use]
    pub fn colony(world: &World, id: ColonyId) -> Option<ColonySnapshot> {
        let colony = world.colonies.get(id)?;
        let (workers, guards) = world.population(id);
        Some(ColonySnapshot {
            id: colony.id,
            center: colony.center,
            radius: colony.radius,
            theoretical_radius: colony.theoretical_radius,
            workers,
            guards,
            food: colony.food,
            delivered: colony.delivered,
        })
    }

    /// Captures a read-only view of every registry.
    #[must_use]
    pub fn world_view(world: &World) -> WorldView {
        let colonies = world
            .colonies
            .iter()
            .filter_map(|colony| self::colony(world, colony.id))
            .collect();
        let workers = world
            .workers
            .iter()
            .map(|worker| WorkerSnapshot {
                id: worker.id,
                colony: worker.colony,
                age: worker.age,
                position: worker.position,
                goal: worker.goal,
                carrying_food: worker.carrying_food,
                in_contact: worker.in_contact,
            })
            .collect();
        let guards = world
            .guards
            .iter()
            .map(|guard| GuardSnapshot {
                id: guard.id,
                colony: guard.colony,
                age: guard.age,
                position: guard.position,
                goal: guard.goal,
                in_contact: guard.in_contact,
            })
            .collect();
        let food = world
            .food
            .iter()
            .map(|item| FoodSnapshot {
                id: item.id,
                position: item.position,
            })
            .collect();
        WorldView::from_snapshots(colonies, workers, guards, food, world.mode)
    }

    /// Describes the current state as a scenario the parser accepts.
    ///
    /// Colonies keep their relative order; the rendered radius is written.
    #[must_use]
    pub fn to_scenario(world: &World) -> Scenario {
        let colonies = world
            .colonies
            .iter()
            .map(|colony| ColonyRecord {
                center: colony.center,
                food: colony.food,
                radius: colony.radius,
                workers: world
                    .workers
                    .iter()
                    .filter(|worker| worker.colony == colony.id)
                    .map(|worker| WorkerRecord {
                        age: worker.age,
                        position: worker.position,
                        goal: worker.goal,
                        carrying_food: worker.carrying_food,
                    })
                    .collect(),
                guards: world
                    .guards
                    .iter()
                    .filter(|guard| guard.colony == colony.id)
                    .map(|guard| GuardRecord {
                        age: guard.age,
                        position: guard.position,
                    })
                    .collect(),
            })
            .collect();
        let food = world
            .food
            .iter()
            .map(|item| FoodRecord {
                position: item.position,
            })
            .collect();
        Scenario { colonies, food }
    }
}
