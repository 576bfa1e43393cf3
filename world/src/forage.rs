//! Worker behavior: movement, foraging, raiding and deliveries.

use bugs_life_core::{
    line_distance, Circle, ColonyId, DeathCause, Event, FoodId, ForagingMode, Position, WorkerId,
};

use crate::{
    ant::{step_toward, WorkerState},
    World,
};

/// Ages, moves and retargets one worker, then resolves its contacts.
pub(crate) fn update_worker(world: &mut World, id: WorkerId, out: &mut Vec<Event>) {
    let Some(mut worker) = world.workers.get(id).copied() else {
        return;
    };

    worker.age += 1;
    if worker.age >= world.tuning.ant_lifetime {
        world.kill_worker(id, DeathCause::OldAge, out);
        return;
    }

    worker.position = step_toward(
        worker.position,
        worker.goal,
        world.tuning.step_length(),
        world.tuning.ant_radius,
    );
    retarget(world, &mut worker, out);
    if let Some(slot) = world.workers.get_mut(id) {
        *slot = worker;
    }

    mark_contacts(world, id);
    if world.workers.get(id).is_some_and(|worker| worker.in_contact) {
        world.kill_worker(id, DeathCause::Combat, out);
    }
}

fn retarget(world: &mut World, worker: &mut WorkerState, out: &mut Vec<Event>) {
    let Some(home) = world.colonies.get(worker.colony).map(|colony| colony.center) else {
        return;
    };
    let ant_radius = world.tuning.ant_radius;

    if worker.carrying_food {
        worker.goal = home;
        if worker.position.distance_to(home) < ant_radius {
            deposit(world, worker, out);
        }
        return;
    }

    if world.mode == ForagingMode::Peace && touches_foreign_colony(world, worker) {
        worker.goal = home;
        return;
    }

    if let Some((food, position)) = nearest_eligible_food(world, worker) {
        world.switch_mode(ForagingMode::Peace, out);
        worker.goal = position;
        let reach = world.tuning.ant_circle(worker.position);
        if reach.touches(&world.tuning.food_circle(position), world.tuning.tolerance) {
            let _ = world.food.remove(food);
            worker.carrying_food = true;
            worker.goal = home;
            tracing::debug!("worker {} picked up food {}", worker.id, food);
            out.push(Event::FoodEaten {
                food,
                worker: worker.id,
            });
        }
        return;
    }

    if let Some(victim) = nearest_rich_colony(world, worker) {
        world.switch_mode(ForagingMode::War, out);
        let Some(target) = world.colonies.get(victim).map(|colony| colony.center) else {
            return;
        };
        worker.goal = target;
        if worker.position.distance_to(target) < ant_radius {
            raid(world, worker, victim, out);
            worker.goal = home;
        }
        return;
    }

    worker.goal = home;
}

fn deposit(world: &mut World, worker: &mut WorkerState, out: &mut Vec<Event>) {
    let Some(colony) = world.colonies.get_mut(worker.colony) else {
        return;
    };
    worker.carrying_food = false;
    colony.delivered += 1;
    colony.pending_deliveries += 1;
    tracing::debug!("worker {} delivered food to colony {}", worker.id, colony.id);
    out.push(Event::FoodDeposited {
        colony: colony.id,
        worker: worker.id,
    });
}

fn raid(world: &mut World, worker: &mut WorkerState, victim: ColonyId, out: &mut Vec<Event>) {
    let food_value = world.tuning.food_value;
    let Some(colony) = world.colonies.get_mut(victim) else {
        return;
    };
    colony.food -= food_value;
    worker.carrying_food = true;
    tracing::debug!("worker {} raided colony {}", worker.id, victim);
    out.push(Event::ColonyRaided {
        worker: worker.id,
        victim,
    });
}

fn touches_foreign_colony(world: &World, worker: &WorkerState) -> bool {
    let reach = world.tuning.ant_circle(worker.position);
    world
        .colonies
        .iter()
        .filter(|colony| colony.id != worker.colony)
        .any(|colony| reach.touches(&colony.circle(), world.tuning.tolerance))
}

/// Closest food item nobody else is better placed to take.
fn nearest_eligible_food(world: &World, worker: &WorkerState) -> Option<(FoodId, Position)> {
    let mut best_distance = 2.0 * world.tuning.domain_half_width;
    let mut best = None;
    for item in world.food.iter() {
        let distance = worker.position.distance_to(item.position);
        if distance < best_distance && food_is_eligible(world, worker, item.position, distance) {
            best_distance = distance;
            best = Some((item.id, item.position));
        }
    }
    best
}

fn food_is_eligible(world: &World, worker: &WorkerState, target: Position, distance: f64) -> bool {
    let claimed = world.workers.iter().any(|other| {
        other.id != worker.id && other.colony == worker.colony && other.goal == target
    });
    if claimed {
        return false;
    }

    let contested = world
        .workers
        .iter()
        .any(|other| other.colony != worker.colony && other.position.distance_to(target) <= distance);
    if contested {
        return false;
    }

    // The line is unbounded: colonies behind the worker or past the food block too.
    let ant_radius = world.tuning.ant_radius;
    let tolerance = world.tuning.tolerance;
    !world
        .colonies
        .iter()
        .filter(|colony| colony.id != worker.colony)
        .any(|colony| {
            line_distance(worker.position, target, colony.center) - (colony.radius + ant_radius)
                <= tolerance
        })
}

fn nearest_rich_colony(world: &World, worker: &WorkerState) -> Option<ColonyId> {
    let mut best_distance = f64::INFINITY;
    let mut best = None;
    for colony in world.colonies.iter() {
        if colony.id == worker.colony || colony.food <= 0.0 {
            continue;
        }
        let distance = worker.position.distance_to(colony.center);
        if distance < best_distance {
            best_distance = distance;
            best = Some(colony.id);
        }
    }
    best
}

/// Marks the worker and every foreign ant it touches.
fn mark_contacts(world: &mut World, id: WorkerId) {
    let Some(worker) = world.workers.get(id).copied() else {
        return;
    };
    let reach = world.tuning.ant_circle(worker.position);
    let ant_radius = world.tuning.ant_radius;
    let tolerance = world.tuning.tolerance;
    let touches = |position: Position| {
        reach.touches(&Circle::new(position, ant_radius), tolerance)
    };

    let workers = world
        .workers
        .ids_where(|other| other.colony != worker.colony && touches(other.position));
    let guards = world
        .guards
        .ids_where(|guard| guard.colony != worker.colony && touches(guard.position));
    if workers.is_empty() && guards.is_empty() {
        return;
    }

    for other in workers.into_iter().chain(std::iter::once(id)) {
        if let Some(state) = world.workers.get_mut(other) {
            state.in_contact = true;
        }
    }
    for guard in guards {
        if let Some(state) = world.guards.get_mut(guard) {
            state.in_contact = true;
        }
    }
}
