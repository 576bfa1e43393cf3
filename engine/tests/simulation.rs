use bugs_life_core::{
    ColonyId, Event, FoodPlacementError, LoadError, Position, RecordKind, Tuning,
};
use bugs_life_engine::{Config, Simulation};

fn config() -> Config {
    Config::new(Tuning::default(), 0x00c0_ffee)
}

fn quiet_config(seed: u64) -> Config {
    let tuning = Tuning {
        birth_rate: 0.0,
        ..Tuning::default()
    };
    Config::new(tuning, seed)
}

#[test]
fn lone_empty_colony_dies_on_the_first_tick() {
    let mut simulation = Simulation::load("1\n0 0 0 0 0 1\nFIN_LISTE\n0\n", config())
        .expect("valid scene");

    let events = simulation.tick(false);

    assert!(events.contains(&Event::ColonyDied {
        colony: ColonyId::new(0)
    }));
    assert!(simulation.view().colonies().is_empty());
    assert!(simulation.stats().rows().is_empty());
}

#[test]
fn touching_colonies_fail_to_load() {
    let text = "2\n0 0 0 0 0 1\n3 0 0 0 4 2\nFIN_LISTE\n0\n";
    let error = Simulation::load(text, config()).expect_err("colonies touch");
    assert!(matches!(
        error,
        LoadError::ColonyOverlap { first, second }
            if first == ColonyId::new(0) && second == ColonyId::new(1)
    ));
}

#[test]
fn carrying_worker_at_home_counts_one_delivery() {
    let text = "1\n0 0 1 0 0 2\n0 0 0 0 0 1\nFIN_LISTE\nFIN_LISTE\n0\n";
    let mut simulation = Simulation::load(text, config()).expect("valid scene");
    let before = simulation.view().colonies()[0].delivered;

    let _ = simulation.tick(false);

    let view = simulation.view();
    assert_eq!(view.colonies()[0].delivered, before + 1);
    assert!(!view.workers()[0].carrying_food);
}

#[test]
fn missing_file_is_unreadable() {
    let error = Simulation::load_file("/definitely/not/here.txt", config())
        .expect_err("file does not exist");
    assert!(matches!(error, LoadError::FileUnreadable { .. }));
}

#[test]
fn parse_errors_surface_unchanged() {
    let error = Simulation::load("1\n", config()).expect_err("scene is truncated");
    assert!(matches!(
        error,
        LoadError::FileIncomplete {
            expecting: RecordKind::Colony
        }
    ));
}

#[test]
fn manual_food_is_refused_without_side_effects() {
    let mut simulation =
        Simulation::load("1\n0 0 0 0 4 3\nFIN_LISTE\n0\n", config()).expect("valid scene");

    assert_eq!(
        simulation.place_food(Position::new(0.0, 21.0)),
        Err(FoodPlacementError::OutOfDomain)
    );
    assert_eq!(
        simulation.place_food(Position::new(2.0, 0.0)),
        Err(FoodPlacementError::Overlap)
    );
    assert!(simulation.view().food().is_empty());

    let placed = simulation
        .place_food(Position::new(10.0, 0.0))
        .expect("free site");
    assert_eq!(simulation.view().food()[0].id, placed);
    assert_eq!(
        simulation.place_food(Position::new(10.3, 0.0)),
        Err(FoodPlacementError::Overlap)
    );
}

const FAR_APART: &str = "\
2
-12 0 2 0 100 3
  0 -12 1 -12 1 0
  0 -12 -1 -12 -1 0
FIN_LISTE
12 0 2 0 100 3
  0 12 1 12 1 0
  0 12 -1 12 -1 0
FIN_LISTE
FIN_LISTE
2
0 15  0 -15
FIN_LISTE
";

#[test]
fn saved_scene_reloads_to_the_same_state() {
    let mut simulation = Simulation::load(FAR_APART, quiet_config(5)).expect("valid scene");
    assert_eq!(
        Simulation::load(&simulation.serialize(), quiet_config(5))
            .expect("fresh save reloads")
            .serialize(),
        simulation.serialize()
    );

    for _ in 0..10 {
        let _ = simulation.tick(true);
    }
    let saved = simulation.serialize();
    let reloaded = Simulation::load(&saved, quiet_config(5)).expect("save reloads");

    assert_eq!(reloaded.serialize(), saved);
    assert!(reloaded.validate_structure().is_ok());
    let before = simulation.view();
    let after = reloaded.view();
    assert_eq!(before.workers().len(), after.workers().len());
    assert_eq!(before.food().len(), after.food().len());
    for (old, new) in before.colonies().iter().zip(after.colonies()) {
        assert_eq!(old.food, new.food);
        assert_eq!(old.center, new.center);
    }
}

#[test]
fn seeded_simulations_replay_identically() {
    let run = || {
        let mut simulation = Simulation::load(FAR_APART, config()).expect("valid scene");
        let events: Vec<Vec<Event>> = (0..200).map(|_| simulation.tick(true)).collect();
        (events, simulation.serialize())
    };

    assert_eq!(run(), run());
}

#[test]
fn render_state_draws_every_entity() {
    let simulation = Simulation::load(FAR_APART, config()).expect("valid scene");
    let scene = simulation.render_state();
    // Two colonies, two food items and four workers, none carrying.
    assert_eq!(scene.circles.len(), 8);
}
