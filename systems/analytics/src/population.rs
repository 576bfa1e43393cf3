//! Population time series over the colonies present at load time.

use std::fmt;

use bugs_life_core::{ColonyId, Event, WorldView};

/// Populations of every tracked colony after one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopulationSample {
    /// Tick the sample was taken after.
    pub tick: u64,
    /// Population per tracked colony; dead colonies read as zero.
    pub populations: Vec<u32>,
}

/// Records one [`PopulationSample`] per elapsed tick.
#[derive(Clone, Debug, Default)]
pub struct PopulationRecorder {
    slots: Vec<ColonyId>,
    samples: Vec<PopulationSample>,
}

impl PopulationRecorder {
    /// Starts tracking the colonies alive in `view`.
    #[must_use]
    pub fn new(view: &WorldView) -> Self {
        Self {
            slots: view.colonies().iter().map(|colony| colony.id).collect(),
            samples: Vec::new(),
        }
    }

    /// Samples `view` once for every `TimeAdvanced` event in `events`.
    pub fn handle(&mut self, events: &[Event], view: &WorldView) {
        for event in events {
            if let Event::TimeAdvanced { tick } = event {
                let populations = self
                    .slots
                    .iter()
                    .map(|slot| {
                        view.colonies()
                            .iter()
                            .find(|colony| colony.id == *slot)
                            .map_or(0, |colony| colony.population())
                    })
                    .collect();
                self.samples.push(PopulationSample {
                    tick: *tick,
                    populations,
                });
            }
        }
    }

    /// Samples recorded so far, oldest first.
    #[must_use]
    pub fn samples(&self) -> &[PopulationSample] {
        &self.samples
    }
}

/// One `tick pop0 pop1 ...` line per sample.
impl fmt::Display for PopulationRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sample in &self.samples {
            write!(f, "{}", sample.tick)?;
            for population in &sample.populations {
                write!(f, " {population}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
