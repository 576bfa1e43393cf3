//! Plain records describing a complete scene, as read from or written to text.

use serde::{Deserialize, Serialize};

use crate::Position;

/// Entire scene: every colony with its members followed by loose food.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Colonies in declaration order; the index doubles as the colony id.
    pub colonies: Vec<ColonyRecord>,
    /// Food items lying in the world.
    pub food: Vec<FoodRecord>,
}

impl Scenario {
    /// Total number of ants across all colonies.
    #[must_use]
    pub fn ant_count(&self) -> usize {
        self.colonies.iter().map(ColonyRecord::population).sum()
    }
}

/// Colony header plus its worker and guard lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColonyRecord {
    /// Center of the colony circle.
    pub center: Position,
    /// Food stock held by the colony.
    pub food: f64,
    /// Radius of the colony circle.
    pub radius: f64,
    /// Workers belonging to the colony.
    pub workers: Vec<WorkerRecord>,
    /// Guards belonging to the colony.
    pub guards: Vec<GuardRecord>,
}

impl ColonyRecord {
    /// Number of workers and guards declared for the colony.
    #[must_use]
    pub fn population(&self) -> usize {
        self.workers.len() + self.guards.len()
    }
}

/// Serialized state of a single worker.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkerRecord {
    /// Age measured in ticks.
    pub age: u32,
    /// Current location.
    pub position: Position,
    /// Location the worker is heading to.
    pub goal: Position,
    /// Whether the worker carries a food unit.
    pub carrying_food: bool,
}

/// Serialized state of a single guard.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuardRecord {
    /// Age measured in ticks.
    pub age: u32,
    /// Current location.
    pub position: Position,
}

/// Serialized food item.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    /// Location of the item.
    pub position: Position,
}
