//! Worker and guard state plus the movement and removal rules they share.

use bugs_life_core::{ColonyId, DeathCause, Event, FoodOrigin, GuardId, Position, WorkerId};

use crate::{registry::Keyed, World};

/// Worker stored inside the world.
#[derive(Clone, Copy, Debug)]
pub(crate) struct WorkerState {
    pub(crate) id: WorkerId,
    pub(crate) colony: ColonyId,
    pub(crate) age: u32,
    pub(crate) position: Position,
    pub(crate) goal: Position,
    pub(crate) carrying_food: bool,
    pub(crate) in_contact: bool,
}

impl WorkerState {
    /// Worker just raised at its colony center.
    pub(crate) const fn newborn(id: WorkerId, colony: ColonyId, center: Position) -> Self {
        Self {
            id,
            colony,
            age: 0,
            position: center,
            goal: center,
            carrying_food: false,
            in_contact: false,
        }
    }
}

impl Keyed for WorkerState {
    type Id = WorkerId;

    fn id(&self) -> WorkerId {
        self.id
    }
}

/// Guard stored inside the world.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GuardState {
    pub(crate) id: GuardId,
    pub(crate) colony: ColonyId,
    pub(crate) age: u32,
    pub(crate) position: Position,
    pub(crate) goal: Position,
    pub(crate) in_contact: bool,
}

impl GuardState {
    /// Guard just raised at its colony center.
    pub(crate) const fn newborn(id: GuardId, colony: ColonyId, center: Position) -> Self {
        Self {
            id,
            colony,
            age: 0,
            position: center,
            goal: center,
            in_contact: false,
        }
    }
}

impl Keyed for GuardState {
    type Id = GuardId;

    fn id(&self) -> GuardId {
        self.id
    }
}

/// Advances `position` by `step` toward `goal`, landing on the goal once it
/// lies within `snap_radius`.
pub(crate) fn step_toward(position: Position, goal: Position, step: f64, snap_radius: f64) -> Position {
    let heading = (goal - position).normalize();
    if heading.magnitude() <= snap_radius {
        return goal;
    }
    position + heading.unit().scaled(step)
}

impl World {
    /// Removes a worker, leaving its carried food on the ground.
    pub(crate) fn kill_worker(&mut self, id: WorkerId, cause: DeathCause, out: &mut Vec<Event>) {
        let Some(worker) = self.workers.remove(id) else {
            return;
        };
        tracing::debug!(
            "worker {} of colony {} died at {} ({:?})",
            id,
            worker.colony,
            worker.position,
            cause
        );
        out.push(Event::WorkerDied {
            worker: id,
            colony: worker.colony,
            position: worker.position,
            cause,
        });
        if worker.carrying_food {
            let _ = self.spawn_food(worker.position, FoodOrigin::Dropped, out);
        }
    }

    /// Removes a guard.
    pub(crate) fn kill_guard(&mut self, id: GuardId, cause: DeathCause, out: &mut Vec<Event>) {
        let Some(guard) = self.guards.remove(id) else {
            return;
        };
        tracing::debug!(
            "guard {} of colony {} died at {} ({:?})",
            id,
            guard.colony,
            guard.position,
            cause
        );
        out.push(Event::GuardDied {
            guard: id,
            colony: guard.colony,
            position: guard.position,
            cause,
        });
    }
}
