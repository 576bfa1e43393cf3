#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Facade wiring the world, the scenario format and the pure systems together.
//!
//! A [`Simulation`] only exists for scenes that parsed and passed structural
//! validation; a failed load leaves nothing behind.

use std::{fs, path::Path};

use bugs_life_core::{
    AntRef, ColonyId, Command, Event, FoodId, FoodOrigin, FoodPlacementError, LoadError, Position,
    Scenario, Tuning, WorldView,
};
use bugs_life_rendering::Scene;
use bugs_life_system_analytics::StatsTable;
use bugs_life_system_spawning::{self as spawning, FoodSpawning};
use bugs_life_world::{self as world, query, World};

pub use bugs_life_world::Config;

/// Decorrelates the food spawner from the birth generator sharing the seed.
const SPAWNING_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Loaded scene plus the systems that drive it.
#[derive(Debug)]
pub struct Simulation {
    world: World,
    spawning: FoodSpawning,
}

impl Simulation {
    /// Parses and validates a scene held in memory.
    pub fn load(text: &str, config: Config) -> Result<Self, LoadError> {
        let scenario = bugs_life_system_scenario::parse(text, config.tuning())?;
        Self::from_scenario(&scenario, config)
    }

    /// Reads, parses and validates a scene file.
    pub fn load_file<P: AsRef<Path>>(path: P, config: Config) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("loading scene from {}", path.display());
        Self::load(&text, config)
    }

    /// Validates an already parsed scene and builds the world from it.
    pub fn from_scenario(scenario: &Scenario, config: Config) -> Result<Self, LoadError> {
        bugs_life_system_validation::validate(scenario, config.tuning())?;
        let spawning = FoodSpawning::new(spawning::Config::new(
            config.seed() ^ SPAWNING_SEED_SALT,
        ));
        Ok(Self {
            world: World::from_scenario(scenario, config),
            spawning,
        })
    }

    /// Runs the structural overlap checks against the current state.
    ///
    /// Colonies in the reported error carry their world identifiers. An
    /// [`AntRef`] index counts the living ants of that kind in the colony, in
    /// identifier order.
    pub fn validate_structure(&self) -> Result<(), LoadError> {
        let scenario = query::to_scenario(&self.world);
        bugs_life_system_validation::validate(&scenario, self.tuning()).map_err(|error| {
            let view = self.view();
            let ids: Vec<ColonyId> = view.colonies().iter().map(|colony| colony.id).collect();
            with_colony_ids(error, &ids)
        })
    }

    /// Advances the simulation by one tick and returns everything that happened.
    ///
    /// With `auto_food` the spawner may drop one food item after the colonies
    /// have been updated.
    pub fn tick(&mut self, auto_food: bool) -> Vec<Event> {
        let mut events = Vec::new();
        world::apply(&mut self.world, Command::Tick, &mut events);

        if auto_food {
            let mut commands = Vec::new();
            self.spawning.handle(
                &events,
                &query::world_view(&self.world),
                query::tuning(&self.world),
                &mut commands,
            );
            for command in commands {
                world::apply(&mut self.world, command, &mut events);
            }
        }
        events
    }

    /// Places one food item at a caller-chosen position.
    ///
    /// A refused placement leaves the world untouched.
    pub fn place_food(&mut self, position: Position) -> Result<FoodId, FoodPlacementError> {
        let mut events = Vec::new();
        world::apply(
            &mut self.world,
            Command::PlaceFood {
                position,
                origin: FoodOrigin::Manual,
            },
            &mut events,
        );
        events
            .into_iter()
            .find_map(|event| match event {
                Event::FoodPlaced { food, .. } => Some(Ok(food)),
                Event::FoodPlacementRejected { reason, .. } => Some(Err(reason)),
                _ => None,
            })
            .unwrap_or(Err(FoodPlacementError::Overlap))
    }

    /// Current state in the scene text format.
    #[must_use]
    pub fn serialize(&self) -> String {
        bugs_life_system_scenario::write(&query::to_scenario(&self.world))
    }

    /// Circles describing the current state.
    #[must_use]
    pub fn render_state(&self) -> Scene {
        Scene::from_view(&self.view(), self.tuning())
    }

    /// Per-colony statistics.
    #[must_use]
    pub fn stats(&self) -> StatsTable {
        StatsTable::from_view(&self.view())
    }

    /// Read-only snapshot of every registry.
    #[must_use]
    pub fn view(&self) -> WorldView {
        query::world_view(&self.world)
    }

    /// Simulation constants in use.
    #[must_use]
    pub fn tuning(&self) -> &Tuning {
        query::tuning(&self.world)
    }

    /// Underlying world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }
}

/// Replaces list positions in overlap errors with the colony identifiers in `ids`.
fn with_colony_ids(error: LoadError, ids: &[ColonyId]) -> LoadError {
    let colony = |slot: ColonyId| {
        usize::try_from(slot.get())
            .ok()
            .and_then(|index| ids.get(index).copied())
            .unwrap_or(slot)
    };
    let ant = |ant: AntRef| AntRef {
        colony: colony(ant.colony),
        ..ant
    };
    match error {
        LoadError::ColonyOverlap { first, second } => LoadError::ColonyOverlap {
            first: colony(first),
            second: colony(second),
        },
        LoadError::AntOverlap { first, second } => LoadError::AntOverlap {
            first: ant(first),
            second: ant(second),
        },
        other => other,
    }
}
