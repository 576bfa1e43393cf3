use bugs_life_core::{
    AntKind, AntRef, ColonyId, ColonyRecord, GuardRecord, LoadError, Position, Scenario, Tuning,
    WorkerRecord,
};
use bugs_life_system_validation::validate;

fn colony(x: f64, y: f64, radius: f64) -> ColonyRecord {
    ColonyRecord {
        center: Position::new(x, y),
        food: 0.0,
        radius,
        workers: Vec::new(),
        guards: Vec::new(),
    }
}

fn worker_at(x: f64, y: f64) -> WorkerRecord {
    let position = Position::new(x, y);
    WorkerRecord {
        age: 0,
        position,
        goal: position,
        carrying_food: false,
    }
}

#[test]
fn separated_colonies_pass() {
    let scenario = Scenario {
        colonies: vec![colony(-5.0, 0.0, 2.0), colony(5.0, 0.0, 2.0)],
        food: Vec::new(),
    };
    assert!(validate(&scenario, &Tuning::default()).is_ok());
}

#[test]
fn colonies_touching_exactly_overlap() {
    let scenario = Scenario {
        colonies: vec![
            colony(0.0, 0.0, 1.0),
            colony(-10.0, 10.0, 1.0),
            colony(3.0, 0.0, 2.0),
        ],
        food: Vec::new(),
    };
    let error = validate(&scenario, &Tuning::default()).expect_err("rims touch");
    assert!(matches!(
        error,
        LoadError::ColonyOverlap { first, second }
            if first == ColonyId::new(0) && second == ColonyId::new(2)
    ));
}

#[test]
fn teammates_may_overlap() {
    let mut home = colony(0.0, 0.0, 3.0);
    home.workers.push(worker_at(5.0, 5.0));
    home.workers.push(worker_at(5.5, 5.0));
    home.guards.push(GuardRecord {
        age: 0,
        position: Position::new(5.0, 5.5),
    });
    let scenario = Scenario {
        colonies: vec![home],
        food: Vec::new(),
    };
    assert!(validate(&scenario, &Tuning::default()).is_ok());
}

#[test]
fn foreign_worker_and_guard_overlap() {
    let mut reds = colony(-10.0, 0.0, 3.0);
    reds.workers.push(worker_at(-15.0, 15.0));
    reds.workers.push(worker_at(4.0, 0.0));
    let mut blues = colony(10.0, 0.0, 3.0);
    blues.guards.push(GuardRecord {
        age: 0,
        position: Position::new(5.5, 0.0),
    });
    let scenario = Scenario {
        colonies: vec![reds, blues],
        food: Vec::new(),
    };
    let error = validate(&scenario, &Tuning::default()).expect_err("ants touch");
    let worker = AntRef::new(ColonyId::new(0), AntKind::Worker, 1);
    let guard = AntRef::new(ColonyId::new(1), AntKind::Guard, 0);
    assert!(matches!(
        error,
        LoadError::AntOverlap { first, second } if first == worker && second == guard
    ));
}
