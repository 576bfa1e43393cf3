#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Bug's Life colony simulation.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then reports [`Event`] values describing every
//! birth, death, meal and raid that happened. Systems consume event streams,
//! query immutable [`WorldView`] snapshots, and respond with new commands.

mod error;
mod geometry;
mod scenario;
mod tuning;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use error::{FoodPlacementError, LoadError, RecordKind};
pub use geometry::{line_distance, Circle, Normalized, Position, Vector};
pub use scenario::{ColonyRecord, FoodRecord, GuardRecord, Scenario, WorkerRecord};
pub use tuning::Tuning;

/// Token terminating every variable-length list in the scenario grammar.
pub const LIST_SENTINEL: &str = "FIN_LISTE";

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Advances every colony and ant by one tick.
    Tick,
    /// Requests a new food item at the provided position.
    PlaceFood {
        /// Location of the new item.
        position: Position,
        /// Who asked for the item.
        origin: FoodOrigin,
    },
}

/// Events reported by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Indicates that the simulation advanced by one tick.
    TimeAdvanced {
        /// Number of ticks elapsed since the scene was loaded.
        tick: u64,
    },
    /// A colony raised a new worker.
    WorkerBorn {
        /// Identifier of the newborn.
        worker: WorkerId,
        /// Colony that raised it.
        colony: ColonyId,
    },
    /// A colony raised a new guard.
    GuardBorn {
        /// Identifier of the newborn.
        guard: GuardId,
        /// Colony that raised it.
        colony: ColonyId,
    },
    /// A worker was removed from the world.
    WorkerDied {
        /// Identifier of the worker.
        worker: WorkerId,
        /// Colony the worker belonged to.
        colony: ColonyId,
        /// Last position of the worker.
        position: Position,
        /// Reason for the death.
        cause: DeathCause,
    },
    /// A guard was removed from the world.
    GuardDied {
        /// Identifier of the guard.
        guard: GuardId,
        /// Colony the guard belonged to.
        colony: ColonyId,
        /// Last position of the guard.
        position: Position,
        /// Reason for the death.
        cause: DeathCause,
    },
    /// A worker picked up a food item.
    FoodEaten {
        /// Item that was consumed.
        food: FoodId,
        /// Worker now carrying it.
        worker: WorkerId,
    },
    /// A worker delivered its food to its home colony.
    FoodDeposited {
        /// Receiving colony.
        colony: ColonyId,
        /// Delivering worker.
        worker: WorkerId,
    },
    /// A worker stole one food unit from a foreign colony.
    ColonyRaided {
        /// Raiding worker.
        worker: WorkerId,
        /// Colony that lost the food unit.
        victim: ColonyId,
    },
    /// A food item entered the world.
    FoodPlaced {
        /// Identifier of the new item.
        food: FoodId,
        /// Location of the item.
        position: Position,
        /// How the item came to be.
        origin: FoodOrigin,
    },
    /// A placement request was refused; the world did not change.
    FoodPlacementRejected {
        /// Requested location.
        position: Position,
        /// Reason for the refusal.
        reason: FoodPlacementError,
    },
    /// The world-wide foraging mode switched.
    ForagingModeChanged {
        /// Mode now in effect.
        mode: ForagingMode,
    },
    /// A colony ran out of ants and food and was removed.
    ColonyDied {
        /// Identifier of the colony.
        colony: ColonyId,
    },
}

/// World-wide behavioral switch shared by every worker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForagingMode {
    /// Workers forage for neutral food.
    #[default]
    Peace,
    /// Workers raid the nearest foreign colony holding food.
    War,
}

/// The two kinds of ants a colony raises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AntKind {
    /// Forages and raids.
    Worker,
    /// Defends the colony against intruding workers.
    Guard,
}

impl AntKind {
    /// Returns the other kind, used to alternate births.
    #[must_use]
    pub const fn alternate(self) -> Self {
        match self {
            Self::Worker => Self::Guard,
            Self::Guard => Self::Worker,
        }
    }
}

impl fmt::Display for AntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Worker => f.write_str("worker"),
            Self::Guard => f.write_str("guard"),
        }
    }
}

/// Names an ant by colony, kind and position within the colony's list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AntRef {
    /// Owning colony.
    pub colony: ColonyId,
    /// Worker or guard.
    pub kind: AntKind,
    /// Zero-based index within the colony's list of that kind.
    pub index: usize,
}

impl AntRef {
    /// Creates a new reference.
    #[must_use]
    pub const fn new(colony: ColonyId, kind: AntKind, index: usize) -> Self {
        Self {
            colony,
            kind,
            index,
        }
    }
}

impl fmt::Display for AntRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} of colony {}", self.kind, self.index, self.colony)
    }
}

/// Why an ant left the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathCause {
    /// Reached the lifetime limit.
    OldAge,
    /// Touched an ant of another colony.
    Combat,
    /// Removed together with its colony.
    ColonyCollapse,
}

/// How a food item entered the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodOrigin {
    /// Spawned at random by the simulation.
    Automatic,
    /// Requested by the user.
    Manual,
    /// Dropped by a worker that died while carrying it.
    Dropped,
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(u32);

        impl $name {
            /// Creates a new identifier with the provided numeric value.
            #[must_use]
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Retrieves the numeric representation of the identifier.
            #[must_use]
            pub const fn get(&self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

entity_id!(
    /// Unique identifier assigned to a colony.
    ColonyId
);
entity_id!(
    /// Unique identifier assigned to a worker.
    WorkerId
);
entity_id!(
    /// Unique identifier assigned to a guard.
    GuardId
);
entity_id!(
    /// Unique identifier assigned to a food item.
    FoodId
);

/// Immutable representation of a colony used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColonySnapshot {
    /// Identifier of the colony.
    pub id: ColonyId,
    /// Center of the colony circle.
    pub center: Position,
    /// Rendered radius of the colony circle.
    pub radius: f64,
    /// Radius allowed by population and food at the last update.
    pub theoretical_radius: f64,
    /// Number of living workers.
    pub workers: u32,
    /// Number of living guards.
    pub guards: u32,
    /// Current food stock.
    pub food: f64,
    /// Food units delivered by workers since the scene was loaded.
    pub delivered: u32,
}

impl ColonySnapshot {
    /// Total number of ants in the colony.
    #[must_use]
    pub const fn population(&self) -> u32 {
        self.workers + self.guards
    }

    /// Footprint of the colony.
    #[must_use]
    pub const fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }
}

/// Immutable representation of a worker used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkerSnapshot {
    /// Identifier of the worker.
    pub id: WorkerId,
    /// Owning colony.
    pub colony: ColonyId,
    /// Age in ticks.
    pub age: u32,
    /// Current location.
    pub position: Position,
    /// Location the worker is heading to.
    pub goal: Position,
    /// Whether the worker carries a food unit.
    pub carrying_food: bool,
    /// Whether the worker touched a foreign ant and will die when updated.
    pub in_contact: bool,
}

/// Immutable representation of a guard used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuardSnapshot {
    /// Identifier of the guard.
    pub id: GuardId,
    /// Owning colony.
    pub colony: ColonyId,
    /// Age in ticks.
    pub age: u32,
    /// Current location.
    pub position: Position,
    /// Location the guard is heading to.
    pub goal: Position,
    /// Whether the guard touched a foreign worker and will die when updated.
    pub in_contact: bool,
}

/// Immutable representation of a food item used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoodSnapshot {
    /// Identifier of the item.
    pub id: FoodId,
    /// Location of the item.
    pub position: Position,
}

/// Read-only snapshot of every registry in the world.
#[derive(Clone, Debug, Default)]
pub struct WorldView {
    colonies: Vec<ColonySnapshot>,
    workers: Vec<WorkerSnapshot>,
    guards: Vec<GuardSnapshot>,
    food: Vec<FoodSnapshot>,
    mode: ForagingMode,
}

impl WorldView {
    /// Creates a view from the provided snapshots, sorted by identifier.
    #[must_use]
    pub fn from_snapshots(
        mut colonies: Vec<ColonySnapshot>,
        mut workers: Vec<WorkerSnapshot>,
        mut guards: Vec<GuardSnapshot>,
        mut food: Vec<FoodSnapshot>,
        mode: ForagingMode,
    ) -> Self {
        colonies.sort_by_key(|snapshot| snapshot.id);
        workers.sort_by_key(|snapshot| snapshot.id);
        guards.sort_by_key(|snapshot| snapshot.id);
        food.sort_by_key(|snapshot| snapshot.id);
        Self {
            colonies,
            workers,
            guards,
            food,
            mode,
        }
    }

    /// Living colonies in identifier order.
    #[must_use]
    pub fn colonies(&self) -> &[ColonySnapshot] {
        &self.colonies
    }

    /// Living workers in identifier order.
    #[must_use]
    pub fn workers(&self) -> &[WorkerSnapshot] {
        &self.workers
    }

    /// Living guards in identifier order.
    #[must_use]
    pub fn guards(&self) -> &[GuardSnapshot] {
        &self.guards
    }

    /// Food items in identifier order.
    #[must_use]
    pub fn food(&self) -> &[FoodSnapshot] {
        &self.food
    }

    /// Foraging mode at the time of the snapshot.
    #[must_use]
    pub const fn mode(&self) -> ForagingMode {
        self.mode
    }

    /// Reports whether a food item at `position` would touch nothing in the view.
    #[must_use]
    pub fn food_site_clear(&self, position: Position, tuning: &Tuning) -> bool {
        let food = self.food.iter().map(|item| tuning.food_circle(item.position));
        let workers = self
            .workers
            .iter()
            .map(|worker| tuning.ant_circle(worker.position));
        let guards = self
            .guards
            .iter()
            .map(|guard| tuning.ant_circle(guard.position));
        let colonies = self.colonies.iter().map(ColonySnapshot::circle);
        tuning.food_site_clear(position, food.chain(workers).chain(guards).chain(colonies))
    }
}
