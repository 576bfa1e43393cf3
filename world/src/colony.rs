//! Colony economics: births, feeding, radius growth and collapse.

use bugs_life_core::{AntKind, Circle, ColonyId, DeathCause, Event, Position};
use rand::Rng;

use crate::{
    ant::{GuardState, WorkerState},
    registry::Keyed,
    World,
};

/// Colony stored inside the world.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ColonyState {
    pub(crate) id: ColonyId,
    pub(crate) center: Position,
    /// Rendered radius; never shrinks.
    pub(crate) radius: f64,
    pub(crate) theoretical_radius: f64,
    pub(crate) food: f64,
    /// Deliveries since load.
    pub(crate) delivered: u32,
    /// Deliveries of the current tick, folded into `food` at the end of the update.
    pub(crate) pending_deliveries: u32,
}

impl ColonyState {
    pub(crate) const fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }
}

impl Keyed for ColonyState {
    type Id = ColonyId;

    fn id(&self) -> ColonyId {
        self.id
    }
}

/// Radius after one growth step.
///
/// When `theoretical` exceeds `current` the candidate is pulled back in front
/// of every neighbor it would touch. The result never drops below `current`.
pub(crate) fn grown_radius(
    center: Position,
    current: f64,
    theoretical: f64,
    neighbors: &[Circle],
    tolerance: f64,
) -> f64 {
    if theoretical <= current {
        return current;
    }

    let mut candidate = theoretical;
    for neighbor in neighbors {
        if Circle::new(center, candidate).touches(neighbor, tolerance) {
            candidate = center.distance_to(neighbor.center()) - neighbor.radius() - tolerance;
        }
    }
    current.max(candidate)
}

impl World {
    /// Workers and guards currently belonging to `colony`.
    pub(crate) fn population(&self, colony: ColonyId) -> (u32, u32) {
        let workers = self.workers.iter().filter(|w| w.colony == colony).count();
        let guards = self.guards.iter().filter(|g| g.colony == colony).count();
        (count(workers), count(guards))
    }

    /// Draws the birth lottery and raises the next ant kind on success.
    pub(crate) fn give_birth(&mut self, id: ColonyId, out: &mut Vec<Event>) {
        let Some(colony) = self.colonies.get(id) else {
            return;
        };
        let threshold = colony.food * self.tuning.birth_rate;
        let center = colony.center;
        let draw: f64 = self.rng.gen();
        if threshold <= 0.0 || draw > threshold {
            return;
        }

        let kind = self.next_birth;
        self.next_birth = kind.alternate();
        match kind {
            AntKind::Worker => {
                let worker = self.ids.worker();
                self.workers.insert(WorkerState::newborn(worker, id, center));
                tracing::debug!("colony {} raised worker {}", id, worker);
                out.push(Event::WorkerBorn { worker, colony: id });
            }
            AntKind::Guard => {
                let guard = self.ids.guard();
                self.guards.insert(GuardState::newborn(guard, id, center));
                tracing::debug!("colony {} raised guard {}", id, guard);
                out.push(Event::GuardBorn { guard, colony: id });
            }
        }
    }

    /// Feeds every member and grows the rendered radius toward the theoretical one.
    pub(crate) fn feed_and_grow(&mut self, id: ColonyId) {
        let (workers, guards) = self.population(id);
        let population = workers + guards;
        let neighbors: Vec<Circle> = self
            .colonies
            .iter()
            .filter(|other| other.id != id)
            .map(ColonyState::circle)
            .collect();
        let tuning = &self.tuning;
        let Some(colony) = self.colonies.get_mut(id) else {
            return;
        };

        colony.food -= f64::from(population) * tuning.feed_rate;
        let stock = colony.food.max(0.0).trunc();
        colony.theoretical_radius = tuning.theoretical_radius(population as usize, stock);
        colony.radius = grown_radius(
            colony.center,
            colony.radius,
            colony.theoretical_radius,
            &neighbors,
            tuning.tolerance,
        );
    }

    /// Folds the tick's deliveries into the stock and removes a colony left
    /// without ants or food.
    pub(crate) fn settle(&mut self, id: ColonyId, out: &mut Vec<Event>) {
        let (workers, guards) = self.population(id);
        let food_value = self.tuning.food_value;
        let Some(colony) = self.colonies.get_mut(id) else {
            return;
        };

        colony.food += f64::from(colony.pending_deliveries) * food_value;
        colony.pending_deliveries = 0;
        if workers + guards == 0 && colony.food < food_value {
            self.remove_colony(id, out);
        }
    }

    fn remove_colony(&mut self, id: ColonyId, out: &mut Vec<Event>) {
        for worker in self.workers.ids_where(|worker| worker.colony == id) {
            self.kill_worker(worker, DeathCause::ColonyCollapse, out);
        }
        for guard in self.guards.ids_where(|guard| guard.colony == id) {
            self.kill_guard(guard, DeathCause::ColonyCollapse, out);
        }
        if self.colonies.remove(id).is_some() {
            tracing::info!("colony {} died", id);
            out.push(Event::ColonyDied { colony: id });
        }
    }
}

fn count(members: usize) -> u32 {
    u32::try_from(members).unwrap_or(u32::MAX)
}
