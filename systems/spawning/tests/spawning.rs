use bugs_life_core::{
    ColonyRecord, Command, Event, FoodOrigin, ForagingMode, Position, Scenario, Tuning, WorldView,
};
use bugs_life_system_spawning::{Config, FoodSpawning};
use bugs_life_world::{self as world, query, World};

fn ticks(count: u64) -> Vec<Event> {
    (1..=count).map(|tick| Event::TimeAdvanced { tick }).collect()
}

#[test]
fn certain_rate_spawns_once_per_tick() {
    let tuning = Tuning {
        food_rate: 1.0,
        ..Tuning::default()
    };
    let mut spawning = FoodSpawning::new(Config::new(0x5eed));
    let mut commands = Vec::new();

    spawning.handle(&ticks(3), &WorldView::default(), &tuning, &mut commands);

    assert_eq!(commands.len(), 3);
    for command in &commands {
        match command {
            Command::PlaceFood { position, origin } => {
                assert_eq!(*origin, FoodOrigin::Automatic);
                assert!(tuning.in_domain(*position));
            }
            other => panic!("unexpected command emitted: {other:?}"),
        }
    }
}

#[test]
fn zero_rate_never_spawns() {
    let tuning = Tuning {
        food_rate: 0.0,
        ..Tuning::default()
    };
    let mut spawning = FoodSpawning::new(Config::new(1));
    let mut commands = Vec::new();

    spawning.handle(&ticks(50), &WorldView::default(), &tuning, &mut commands);

    assert!(commands.is_empty());
}

#[test]
fn other_events_do_not_spawn() {
    let tuning = Tuning {
        food_rate: 1.0,
        ..Tuning::default()
    };
    let mut spawning = FoodSpawning::new(Config::new(1));
    let mut commands = Vec::new();

    spawning.handle(
        &[Event::ForagingModeChanged {
            mode: ForagingMode::War,
        }],
        &WorldView::default(),
        &tuning,
        &mut commands,
    );

    assert!(commands.is_empty());
}

#[test]
fn spawned_sites_avoid_colonies_and_are_accepted_by_the_world() {
    let tuning = Tuning {
        food_rate: 1.0,
        birth_rate: 0.0,
        ..Tuning::default()
    };
    let scenario = Scenario {
        colonies: vec![ColonyRecord {
            center: Position::ORIGIN,
            food: 100.0,
            radius: 10.0,
            workers: Vec::new(),
            guards: Vec::new(),
        }],
        food: Vec::new(),
    };
    let mut world = World::from_scenario(&scenario, world::Config::new(tuning.clone(), 11));
    let mut spawning = FoodSpawning::new(Config::new(0xfeed));

    for _ in 0..20 {
        let mut events = Vec::new();
        world::apply(&mut world, Command::Tick, &mut events);
        let mut commands = Vec::new();
        spawning.handle(&events, &query::world_view(&world), &tuning, &mut commands);
        for command in commands {
            if let Command::PlaceFood { position, .. } = command {
                assert!(position.distance_to(Position::ORIGIN) > 10.25);
            }
            let mut placed = Vec::new();
            world::apply(&mut world, command, &mut placed);
            assert!(matches!(
                placed.as_slice(),
                [Event::FoodPlaced {
                    origin: FoodOrigin::Automatic,
                    ..
                }]
            ));
        }
    }

    assert_eq!(query::world_view(&world).food().len(), 20);
}

#[test]
fn identical_seeds_pick_identical_sites() {
    let tuning = Tuning {
        food_rate: 0.5,
        ..Tuning::default()
    };
    let run = |seed| {
        let mut spawning = FoodSpawning::new(Config::new(seed));
        let mut commands = Vec::new();
        spawning.handle(&ticks(40), &WorldView::default(), &tuning, &mut commands);
        commands
    };

    assert_eq!(run(0x4d59_5df4_d0f3_3173), run(0x4d59_5df4_d0f3_3173));
}
