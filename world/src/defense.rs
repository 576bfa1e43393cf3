//! Guard behavior: chase intruding workers without leaving the colony.

use bugs_life_core::{Circle, DeathCause, Event, GuardId, Position};

use crate::{
    ant::{step_toward, GuardState},
    World,
};

/// Ages, retargets and moves one guard, then resolves its contacts.
pub(crate) fn update_guard(world: &mut World, id: GuardId, out: &mut Vec<Event>) {
    let Some(mut guard) = world.guards.get(id).copied() else {
        return;
    };

    guard.age += 1;
    if guard.age >= world.tuning.ant_lifetime {
        world.kill_guard(id, DeathCause::OldAge, out);
        return;
    }

    let Some(home) = world.colonies.get(guard.colony).map(|colony| colony.circle()) else {
        return;
    };
    guard.goal = choose_goal(world, &guard, home);
    guard.position = step_toward(
        guard.position,
        guard.goal,
        world.tuning.step_length(),
        world.tuning.ant_radius,
    );
    if let Some(slot) = world.guards.get_mut(id) {
        *slot = guard;
    }

    mark_contacts(world, id);
    if world.guards.get(id).is_some_and(|guard| guard.in_contact) {
        world.kill_guard(id, DeathCause::Combat, out);
    }
}

/// Nearest foreign worker inside the colony, or the center when the guard has
/// strayed outside or nobody intrudes.
fn choose_goal(world: &World, guard: &GuardState, home: Circle) -> Position {
    let center = home.center();
    let leash = home.radius() - world.tuning.tolerance - world.tuning.ant_radius;
    if guard.position.distance_to(center) > leash {
        return center;
    }

    let mut best_distance = f64::INFINITY;
    let mut goal = center;
    for worker in world.workers.iter() {
        if worker.colony == guard.colony || worker.position.distance_to(center) > home.radius() {
            continue;
        }
        let distance = guard.position.distance_to(worker.position);
        if distance < best_distance {
            best_distance = distance;
            goal = worker.position;
        }
    }
    goal
}

/// Marks the guard and every foreign worker it touches.
fn mark_contacts(world: &mut World, id: GuardId) {
    let Some(guard) = world.guards.get(id).copied() else {
        return;
    };
    let reach = world.tuning.ant_circle(guard.position);
    let ant_radius = world.tuning.ant_radius;
    let tolerance = world.tuning.tolerance;
    let hits = world.workers.ids_where(|worker| {
        worker.colony != guard.colony
            && reach.touches(&Circle::new(worker.position, ant_radius), tolerance)
    });
    if hits.is_empty() {
        return;
    }

    for worker in hits {
        if let Some(state) = world.workers.get_mut(worker) {
            state.in_contact = true;
        }
    }
    if let Some(state) = world.guards.get_mut(id) {
        state.in_contact = true;
    }
}
