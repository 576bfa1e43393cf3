#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Colony statistics derived from world views.
//!
//! [`StatsTable`] summarises the current state per colony and
//! [`PopulationRecorder`] accumulates a population time series suitable for
//! plotting with gnuplot.

mod population;
mod stats;

pub use population::{PopulationRecorder, PopulationSample};
pub use stats::{ColonyStats, StatsTable, StatsTotals};
