use bugs_life_core::{
    AntKind, AntRef, ColonyId, LoadError, Position, RecordKind, Scenario, Tuning,
};
use bugs_life_system_scenario::{parse, write};

const TWO_COLONIES: &str = "\
# two colonies
2
-10 -10 2 1 16 4     # home of the reds

  0 -9 -9 0 0 0
  5 -11 -10 -11 -10 1
FIN_LISTE
  3 -10 -10
FIN_LISTE
10 10 0 2 0 2.4
  1 10 10  2 10.5 10.5
FIN_LISTE
FIN_LISTE
4
1 1  2 2  3 3
-5 5 FIN_LISTE
";

fn load(text: &str) -> Result<Scenario, LoadError> {
    parse(text, &Tuning::default())
}

#[test]
fn reads_a_complete_scene() {
    let scenario = load(TWO_COLONIES).expect("valid scene");

    assert_eq!(scenario.colonies.len(), 2);
    let reds = &scenario.colonies[0];
    assert_eq!(reds.center, Position::new(-10.0, -10.0));
    assert_eq!(reds.food, 16.0);
    assert_eq!(reds.radius, 4.0);
    assert_eq!(reds.workers.len(), 2);
    assert!(!reds.workers[0].carrying_food);
    assert!(reds.workers[1].carrying_food);
    assert_eq!(reds.workers[1].goal, Position::new(-11.0, -10.0));
    assert_eq!(reds.guards.len(), 1);
    assert_eq!(reds.guards[0].age, 3);

    let blues = &scenario.colonies[1];
    assert!(blues.workers.is_empty());
    assert_eq!(blues.guards.len(), 2);
    assert_eq!(blues.guards[1].position, Position::new(10.5, 10.5));

    let food: Vec<Position> = scenario.food.iter().map(|item| item.position).collect();
    assert_eq!(
        food,
        vec![
            Position::new(1.0, 1.0),
            Position::new(2.0, 2.0),
            Position::new(3.0, 3.0),
            Position::new(-5.0, 5.0),
        ]
    );
}

#[test]
fn written_scene_reads_back_identically() {
    let scenario = load(TWO_COLONIES).expect("valid scene");
    let text = write(&scenario);
    assert_eq!(load(&text).expect("written scene is valid"), scenario);
}

#[test]
fn fractional_values_survive_a_round_trip() {
    let text = "1\n0.1 -0.30000000000000004 0 0 0.7 1.2\nFIN_LISTE\n1\n13.333333333333334 1e-7\nFIN_LISTE\n";
    let scenario = load(text).expect("valid scene");
    assert_eq!(load(&write(&scenario)).expect("round trip"), scenario);
}

#[test]
fn empty_scene_needs_only_counts() {
    let scenario = load("0\n0\n").expect("valid scene");
    assert_eq!(scenario, Scenario::default());
}

#[test]
fn lines_after_the_food_list_are_ignored() {
    let scenario = load("0\n1\n0 0\nFIN_LISTE\nanything at all\n").expect("valid scene");
    assert_eq!(scenario.food.len(), 1);
}

#[test]
fn short_colony_record_reports_readable_fields() {
    let error = load("1\n0 0 1\n").expect_err("colony header is short");
    assert!(matches!(
        error,
        LoadError::TooFewFields {
            line: 2,
            record: RecordKind::Colony,
            expected: 6,
            found: 3,
        }
    ));
}

#[test]
fn unreadable_count_is_a_short_record() {
    let error = load("two\n").expect_err("count is not a number");
    assert!(matches!(
        error,
        LoadError::TooFewFields {
            record: RecordKind::ColonyCount,
            found: 0,
            ..
        }
    ));
}

#[test]
fn too_many_colonies_are_rejected() {
    let error = load("11\n").expect_err("above the limit");
    assert!(matches!(
        error,
        LoadError::TooManyColonies {
            line: 1,
            declared: 11,
            maximum: 10,
        }
    ));
}

#[test]
fn extra_worker_is_rejected() {
    let text = "1\n0 0 1 0 0 2\n0 0 0 0 0 0\n1 1 1 1 1 0\nFIN_LISTE\nFIN_LISTE\n0\n";
    let error = load(text).expect_err("two workers for one declared");
    assert!(matches!(
        error,
        LoadError::TooManyRecords {
            line: 4,
            record: RecordKind::Worker,
            colony: Some(colony),
            declared: 1,
        } if colony == ColonyId::new(0)
    ));
}

#[test]
fn early_guard_sentinel_is_rejected() {
    let text = "1\n0 0 0 2 0 2\n0 0 0 FIN_LISTE\nFIN_LISTE\n0\n";
    let error = load(text).expect_err("one guard for two declared");
    assert!(matches!(
        error,
        LoadError::TooFewRecords {
            line: 3,
            record: RecordKind::Guard,
            declared: 2,
            found: 1,
            ..
        }
    ));
}

#[test]
fn huge_declared_worker_count_ends_at_the_sentinel() {
    let text = "1\n0 0 4000000000 0 0 1\nFIN_LISTE\nFIN_LISTE\n0\n";
    let error = load(text).expect_err("no worker records for the declared count");
    assert!(matches!(
        error,
        LoadError::TooFewRecords {
            line: 3,
            record: RecordKind::Worker,
            colony: Some(colony),
            declared: 4_000_000_000,
            found: 0,
        } if colony == ColonyId::new(0)
    ));
}

#[test]
fn early_food_sentinel_is_rejected() {
    let text = "0\n3\n1 1  2 2\nFIN_LISTE\n";
    let error = load(text).expect_err("two food items for three declared");
    assert!(matches!(
        error,
        LoadError::TooFewRecords {
            line: 4,
            record: RecordKind::Food,
            colony: None,
            declared: 3,
            found: 2,
        }
    ));
}

#[test]
fn partial_packed_food_record_is_short() {
    let text = "0\n2\n1 1 2\nFIN_LISTE\n";
    let error = load(text).expect_err("second food item lacks y");
    assert!(matches!(
        error,
        LoadError::TooFewFields {
            line: 3,
            record: RecordKind::Food,
            found: 1,
            ..
        }
    ));
}

#[test]
fn ant_at_lifetime_is_rejected() {
    let text = "1\n0 0 1 0 0 2\n1000 0 0 0 0 0\nFIN_LISTE\nFIN_LISTE\n0\n";
    let error = load(text).expect_err("worker too old");
    let expected = AntRef::new(ColonyId::new(0), AntKind::Worker, 0);
    assert!(matches!(
        error,
        LoadError::AgeOutOfRange {
            line: 3,
            ant,
            age: 1000,
            lifetime: 1000,
        } if ant == expected
    ));
}

#[test]
fn food_on_the_domain_edge_is_rejected() {
    let error = load("0\n1\n20 0\nFIN_LISTE\n").expect_err("edge is outside");
    assert!(matches!(
        error,
        LoadError::PositionOutOfDomain {
            line: 3,
            record: RecordKind::Food,
            index: 0,
            ..
        }
    ));
}

#[test]
fn oversized_colony_is_rejected() {
    let error = load("1\n0 0 0 0 0 1.5\nFIN_LISTE\n0\n").expect_err("radius too large");
    match error {
        LoadError::RadiusInconsistent {
            line,
            colony,
            radius,
            theoretical,
        } => {
            assert_eq!(line, 2);
            assert_eq!(colony, ColonyId::new(0));
            assert_eq!(radius, 1.5);
            assert_eq!(theoretical, 1.0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn guard_near_the_rim_is_outside() {
    let error = load("1\n0 0 0 1 0 2\n0 1.5 0\nFIN_LISTE\nFIN_LISTE\n0\n")
        .expect_err("guard pokes out of its colony");
    let expected = AntRef::new(ColonyId::new(0), AntKind::Guard, 0);
    assert!(matches!(
        error,
        LoadError::GuardOutsideColony { line: 3, guard } if guard == expected
    ));
}

#[test]
fn missing_colony_list_sentinel_is_an_extra_colony() {
    let error = load("1\n0 0 0 0 0 1\n3\n").expect_err("sentinel missing");
    assert!(matches!(
        error,
        LoadError::TooManyRecords {
            line: 3,
            record: RecordKind::Colony,
            colony: None,
            declared: 1,
        }
    ));
}

#[test]
fn truncated_scene_is_incomplete() {
    let error = load("1\n0 0 0 0 0 1\nFIN_LISTE\n").expect_err("food section missing");
    assert!(matches!(
        error,
        LoadError::FileIncomplete {
            expecting: RecordKind::FoodCount
        }
    ));
}
