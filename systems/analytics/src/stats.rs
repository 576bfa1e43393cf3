//! Per-colony summary table.

use std::fmt;

use bugs_life_core::{ColonyId, WorldView};

/// Counts for a single living colony.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColonyStats {
    /// Colony the row describes.
    pub colony: ColonyId,
    /// Workers plus guards.
    pub ants: u32,
    /// Living workers.
    pub workers: u32,
    /// Living guards.
    pub guards: u32,
    /// Whole food units in stock; a non-positive stock reads as zero.
    pub food: u64,
}

/// Sums over every row of a [`StatsTable`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatsTotals {
    /// Workers plus guards.
    pub ants: u32,
    /// Living workers.
    pub workers: u32,
    /// Living guards.
    pub guards: u32,
    /// Whole food units in stock.
    pub food: u64,
}

/// Rows for every living colony in id order, plus totals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsTable {
    rows: Vec<ColonyStats>,
    totals: StatsTotals,
}

impl StatsTable {
    /// Builds the table from a world view.
    #[must_use]
    pub fn from_view(view: &WorldView) -> Self {
        let rows: Vec<ColonyStats> = view
            .colonies()
            .iter()
            .map(|colony| ColonyStats {
                colony: colony.id,
                ants: colony.population(),
                workers: colony.workers,
                guards: colony.guards,
                food: whole_units(colony.food),
            })
            .collect();
        let totals = rows
            .iter()
            .fold(StatsTotals::default(), |totals, row| StatsTotals {
                ants: totals.ants + row.ants,
                workers: totals.workers + row.workers,
                guards: totals.guards + row.guards,
                food: totals.food + row.food,
            });
        Self { rows, totals }
    }

    /// One row per living colony.
    #[must_use]
    pub fn rows(&self) -> &[ColonyStats] {
        &self.rows
    }

    /// Column sums.
    #[must_use]
    pub const fn totals(&self) -> StatsTotals {
        self.totals
    }
}

fn whole_units(food: f64) -> u64 {
    if food > 0.0 {
        food.trunc() as u64
    } else {
        0
    }
}

impl fmt::Display for StatsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>8} {:>6} {:>8} {:>7} {:>6}",
            "colony", "ants", "workers", "guards", "food"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:>8} {:>6} {:>8} {:>7} {:>6}",
                row.colony, row.ants, row.workers, row.guards, row.food
            )?;
        }
        write!(
            f,
            "{:>8} {:>6} {:>8} {:>7} {:>6}",
            "total", self.totals.ants, self.totals.workers, self.totals.guards, self.totals.food
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn food_is_floored_and_never_negative() {
        assert_eq!(whole_units(3.99), 3);
        assert_eq!(whole_units(-0.5), 0);
        assert_eq!(whole_units(0.0), 0);
    }
}
