//! Failures reported while loading scenes or placing food.

use std::{fmt, io, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{AntRef, ColonyId, Position};

/// Kind of record the scenario parser was reading when it failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// Line declaring the number of colonies.
    ColonyCount,
    /// Colony header or the sentinel closing the colony list.
    Colony,
    /// Worker record.
    Worker,
    /// Guard record.
    Guard,
    /// Line declaring the number of food items.
    FoodCount,
    /// Food record.
    Food,
}

impl RecordKind {
    /// Number of numeric fields a record of this kind carries.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::ColonyCount | Self::FoodCount => 1,
            Self::Colony | Self::Worker => 6,
            Self::Guard => 3,
            Self::Food => 2,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ColonyCount => "colony count",
            Self::Colony => "colony",
            Self::Worker => "worker",
            Self::Guard => "guard",
            Self::FoodCount => "food count",
            Self::Food => "food",
        };
        f.write_str(label)
    }
}

/// Reasons a scene could not be loaded.
///
/// Line numbers are one-based and refer to the physical line of the input.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The scenario file could not be opened or read.
    #[error("could not read scenario file {}", path.display())]
    FileUnreadable {
        /// Path supplied by the caller.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The input ended before the scene was complete.
    #[error("scenario ended while expecting a {expecting} record")]
    FileIncomplete {
        /// Record the parser was waiting for.
        expecting: RecordKind,
    },
    /// A record had fewer readable fields than its kind requires.
    #[error("line {line}: {record} record has {found} of {expected} fields")]
    TooFewFields {
        /// Offending line.
        line: usize,
        /// Record being read.
        record: RecordKind,
        /// Fields required by the record kind.
        expected: usize,
        /// Fields that could be read.
        found: usize,
    },
    /// More records were present than the count declared.
    #[error("line {line}: more {record} records than the {declared} declared")]
    TooManyRecords {
        /// Offending line.
        line: usize,
        /// Record being read.
        record: RecordKind,
        /// Colony owning the list, if the list belongs to one.
        colony: Option<ColonyId>,
        /// Count declared by the scenario.
        declared: usize,
    },
    /// A list ended before the declared count was reached.
    #[error("line {line}: only {found} of {declared} {record} records before end of list")]
    TooFewRecords {
        /// Line holding the sentinel.
        line: usize,
        /// Record being read.
        record: RecordKind,
        /// Colony owning the list, if the list belongs to one.
        colony: Option<ColonyId>,
        /// Count declared by the scenario.
        declared: usize,
        /// Records actually read.
        found: usize,
    },
    /// An ant was declared at or beyond the lifetime limit.
    #[error("line {line}: {ant} has age {age}, lifetime is {lifetime}")]
    AgeOutOfRange {
        /// Offending line.
        line: usize,
        /// Offending ant.
        ant: AntRef,
        /// Declared age.
        age: u32,
        /// Lifetime limit from the tuning.
        lifetime: u32,
    },
    /// A record lies outside the simulation domain.
    #[error("line {line}: {record} {index} at {position} lies outside the domain")]
    PositionOutOfDomain {
        /// Offending line.
        line: usize,
        /// Record being read.
        record: RecordKind,
        /// Index of the record within its list.
        index: usize,
        /// Declared position.
        position: Position,
    },
    /// A colony declared a radius larger than its population and food allow.
    #[error("line {line}: colony {colony} radius {radius} exceeds theoretical radius {theoretical}")]
    RadiusInconsistent {
        /// Offending line.
        line: usize,
        /// Offending colony.
        colony: ColonyId,
        /// Declared radius.
        radius: f64,
        /// Radius allowed by population and food stock.
        theoretical: f64,
    },
    /// A guard does not start inside its own colony.
    #[error("line {line}: {guard} lies outside its colony")]
    GuardOutsideColony {
        /// Offending line.
        line: usize,
        /// Offending guard.
        guard: AntRef,
    },
    /// The scene declared more colonies than allowed.
    #[error("line {line}: {declared} colonies declared, at most {maximum} allowed")]
    TooManyColonies {
        /// Offending line.
        line: usize,
        /// Count declared by the scenario.
        declared: usize,
        /// Maximum from the tuning.
        maximum: usize,
    },
    /// Two colony circles intersect or touch.
    #[error("colonies {first} and {second} overlap")]
    ColonyOverlap {
        /// First colony of the pair.
        first: ColonyId,
        /// Second colony of the pair.
        second: ColonyId,
    },
    /// Two ants from different colonies start in contact.
    #[error("{first} overlaps {second}")]
    AntOverlap {
        /// First ant of the pair.
        first: AntRef,
        /// Second ant of the pair.
        second: AntRef,
    },
}

/// Reasons a food item could not be placed.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodPlacementError {
    /// The requested position lies outside the domain.
    #[error("food cannot be placed outside the domain")]
    OutOfDomain,
    /// The requested position touches existing food, an ant, or a colony.
    #[error("food cannot be placed here, the site is occupied")]
    Overlap,
}
