//! One simulation tick: every colony in id order, then its workers and guards.

use bugs_life_core::{ColonyId, Event};

use crate::{defense, forage, World};

pub(crate) fn run(world: &mut World, out: &mut Vec<Event>) {
    world.tick_index = world.tick_index.saturating_add(1);
    out.push(Event::TimeAdvanced {
        tick: world.tick_index,
    });

    for colony in world.colonies.ids_where(|_| true) {
        if world.colonies.contains(colony) {
            update_colony(world, colony, out);
        }
    }
}

fn update_colony(world: &mut World, id: ColonyId, out: &mut Vec<Event>) {
    world.give_birth(id, out);
    world.feed_and_grow(id);

    // Newborns of this tick are already registered and take part.
    for worker in world.workers.ids_where(|worker| worker.colony == id) {
        forage::update_worker(world, worker, out);
    }
    for guard in world.guards.ids_where(|guard| guard.colony == id) {
        defense::update_guard(world, guard, out);
    }

    world.settle(id, out);
}
