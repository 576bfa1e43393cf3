//! Loose food items and the placement rule shared by manual and automatic spawns.

use bugs_life_core::{Event, FoodId, FoodOrigin, FoodPlacementError, Position};

use crate::{registry::Keyed, World};

/// Food item lying in the world.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FoodState {
    pub(crate) id: FoodId,
    pub(crate) position: Position,
}

impl Keyed for FoodState {
    type Id = FoodId;

    fn id(&self) -> FoodId {
        self.id
    }
}

impl World {
    /// Inserts a food item without checking the site.
    pub(crate) fn spawn_food(
        &mut self,
        position: Position,
        origin: FoodOrigin,
        out: &mut Vec<Event>,
    ) -> FoodId {
        let id = self.ids.food();
        self.food.insert(FoodState { id, position });
        out.push(Event::FoodPlaced {
            food: id,
            position,
            origin,
        });
        id
    }

    fn check_food_site(&self, position: Position) -> Result<(), FoodPlacementError> {
        let tuning = &self.tuning;
        if !tuning.in_domain(position) {
            return Err(FoodPlacementError::OutOfDomain);
        }

        let food = self.food.iter().map(|item| tuning.food_circle(item.position));
        let workers = self
            .workers
            .iter()
            .map(|worker| tuning.ant_circle(worker.position));
        let guards = self
            .guards
            .iter()
            .map(|guard| tuning.ant_circle(guard.position));
        let colonies = self.colonies.iter().map(|colony| colony.circle());
        if tuning.food_site_clear(position, food.chain(workers).chain(guards).chain(colonies)) {
            Ok(())
        } else {
            Err(FoodPlacementError::Overlap)
        }
    }
}

/// Places a food item when the site is inside the domain and unoccupied.
pub(crate) fn place(world: &mut World, position: Position, origin: FoodOrigin, out: &mut Vec<Event>) {
    match world.check_food_site(position) {
        Ok(()) => {
            let id = world.spawn_food(position, origin, out);
            tracing::debug!("food {} placed at {} ({:?})", id, position, origin);
        }
        Err(reason) => {
            tracing::debug!("food placement at {} refused: {}", position, reason);
            out.push(Event::FoodPlacementRejected { position, reason });
        }
    }
}
