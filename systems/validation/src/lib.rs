#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Structural checks run once on a freshly parsed scene.
//!
//! Contact here is strict: rims that merely touch already count as an
//! overlap. Pairs are scanned exhaustively and the first violation in
//! declaration order is reported.

use bugs_life_core::{AntKind, AntRef, Circle, ColonyId, LoadError, Scenario, Tuning};

/// Checks that no two colonies and no two ants of different colonies overlap.
pub fn validate(scenario: &Scenario, tuning: &Tuning) -> Result<(), LoadError> {
    check_colonies(scenario)?;
    check_ants(scenario, tuning)?;
    tracing::debug!(
        "scene with {} colonies passed structural validation",
        scenario.colonies.len()
    );
    Ok(())
}

fn check_colonies(scenario: &Scenario) -> Result<(), LoadError> {
    let circles: Vec<Circle> = scenario
        .colonies
        .iter()
        .map(|colony| Circle::new(colony.center, colony.radius))
        .collect();
    for (first, circle) in circles.iter().enumerate() {
        for (second, other) in circles.iter().enumerate().skip(first + 1) {
            if circle.overlaps(other) {
                return Err(LoadError::ColonyOverlap {
                    first: colony_id(first),
                    second: colony_id(second),
                });
            }
        }
    }
    Ok(())
}

#[derive(Clone, Copy, Debug)]
struct Footprint {
    ant: AntRef,
    circle: Circle,
}

fn footprints(scenario: &Scenario, tuning: &Tuning) -> Vec<Footprint> {
    let mut footprints = Vec::with_capacity(scenario.ant_count());
    for (index, colony) in scenario.colonies.iter().enumerate() {
        let id = colony_id(index);
        footprints.extend(colony.workers.iter().enumerate().map(|(slot, worker)| Footprint {
            ant: AntRef::new(id, AntKind::Worker, slot),
            circle: tuning.ant_circle(worker.position),
        }));
        footprints.extend(colony.guards.iter().enumerate().map(|(slot, guard)| Footprint {
            ant: AntRef::new(id, AntKind::Guard, slot),
            circle: tuning.ant_circle(guard.position),
        }));
    }
    footprints
}

fn check_ants(scenario: &Scenario, tuning: &Tuning) -> Result<(), LoadError> {
    let footprints = footprints(scenario, tuning);
    for (index, first) in footprints.iter().enumerate() {
        let rivals = footprints[index + 1..]
            .iter()
            .filter(|second| second.ant.colony != first.ant.colony);
        for second in rivals {
            if first.circle.overlaps(&second.circle) {
                return Err(LoadError::AntOverlap {
                    first: first.ant,
                    second: second.ant,
                });
            }
        }
    }
    Ok(())
}

fn colony_id(index: usize) -> ColonyId {
    ColonyId::new(u32::try_from(index).unwrap_or(u32::MAX))
}
