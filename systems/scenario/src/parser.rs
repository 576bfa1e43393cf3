//! Line-driven state machine turning scene text into a [`Scenario`].

use std::str::FromStr;

use bugs_life_core::{
    AntKind, AntRef, ColonyId, ColonyRecord, FoodRecord, GuardRecord, LoadError, Position,
    RecordKind, Scenario, Tuning, WorkerRecord, LIST_SENTINEL,
};

/// Parses a scene, stopping at the first invalid record.
///
/// Nothing partial is returned on failure. Lines after the food list are
/// ignored.
pub fn parse(text: &str, tuning: &Tuning) -> Result<Scenario, LoadError> {
    let mut parser = Parser::new(tuning);
    for (index, raw) in text.lines().enumerate() {
        let content = raw.split('#').next().unwrap_or_default();
        let tokens: Vec<&str> = content.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        parser.line = index + 1;
        parser.feed(&tokens)?;
        if parser.state == State::Done {
            break;
        }
    }
    parser.finish()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    ColonyCount,
    Colony,
    Workers,
    Guards,
    ColonyListEnd,
    FoodCount,
    Food,
    Done,
}

impl State {
    const fn expecting(self) -> RecordKind {
        match self {
            Self::ColonyCount => RecordKind::ColonyCount,
            Self::Colony | Self::ColonyListEnd => RecordKind::Colony,
            Self::Workers => RecordKind::Worker,
            Self::Guards => RecordKind::Guard,
            Self::FoodCount | Self::Done => RecordKind::FoodCount,
            Self::Food => RecordKind::Food,
        }
    }
}

/// Colony whose member lists are being read.
#[derive(Debug)]
struct OpenColony {
    record: ColonyRecord,
    declared_workers: usize,
    declared_guards: usize,
}

#[derive(Debug)]
struct Parser<'a> {
    tuning: &'a Tuning,
    state: State,
    line: usize,
    declared_colonies: usize,
    declared_food: usize,
    open: Option<OpenColony>,
    scenario: Scenario,
}

impl<'a> Parser<'a> {
    fn new(tuning: &'a Tuning) -> Self {
        Self {
            tuning,
            state: State::ColonyCount,
            line: 0,
            declared_colonies: 0,
            declared_food: 0,
            open: None,
            scenario: Scenario::default(),
        }
    }

    fn feed(&mut self, tokens: &[&str]) -> Result<(), LoadError> {
        match self.state {
            State::ColonyCount => self.colony_count(tokens),
            State::Colony => self.colony(tokens),
            State::Workers => self.worker(tokens),
            State::Guards => self.guards(tokens),
            State::ColonyListEnd => self.colony_list_end(tokens),
            State::FoodCount => self.food_count(tokens),
            State::Food => self.food(tokens),
            State::Done => Ok(()),
        }
    }

    fn finish(self) -> Result<Scenario, LoadError> {
        if self.state != State::Done {
            return Err(LoadError::FileIncomplete {
                expecting: self.state.expecting(),
            });
        }
        tracing::debug!(
            "parsed {} colonies and {} food items",
            self.scenario.colonies.len(),
            self.scenario.food.len()
        );
        Ok(self.scenario)
    }

    fn colony_count(&mut self, tokens: &[&str]) -> Result<(), LoadError> {
        let mut fields = Fields::new(tokens, RecordKind::ColonyCount, self.line);
        let declared: usize = fields.next()?;
        if declared > self.tuning.max_colonies {
            return Err(LoadError::TooManyColonies {
                line: self.line,
                declared,
                maximum: self.tuning.max_colonies,
            });
        }
        self.declared_colonies = declared;
        self.state = if declared == 0 {
            State::FoodCount
        } else {
            State::Colony
        };
        Ok(())
    }

    fn colony(&mut self, tokens: &[&str]) -> Result<(), LoadError> {
        let index = self.scenario.colonies.len();
        if is_sentinel(tokens[0]) {
            return Err(LoadError::TooFewRecords {
                line: self.line,
                record: RecordKind::Colony,
                colony: None,
                declared: self.declared_colonies,
                found: index,
            });
        }

        let mut fields = Fields::new(tokens, RecordKind::Colony, self.line);
        let x: f64 = fields.next()?;
        let y: f64 = fields.next()?;
        let workers: u32 = fields.next()?;
        let guards: u32 = fields.next()?;
        let food: f64 = fields.next()?;
        let radius: f64 = fields.next()?;

        let center = Position::new(x, y);
        self.check_domain(RecordKind::Colony, index, center)?;
        let population = workers as usize + guards as usize;
        let theoretical = self.tuning.theoretical_radius(population, food);
        if radius > theoretical {
            return Err(LoadError::RadiusInconsistent {
                line: self.line,
                colony: colony_id(index),
                radius,
                theoretical,
            });
        }

        // Lists grow as records arrive; declared counts are not trusted for sizing.
        self.open = Some(OpenColony {
            record: ColonyRecord {
                center,
                food,
                radius,
                workers: Vec::new(),
                guards: Vec::new(),
            },
            declared_workers: workers as usize,
            declared_guards: guards as usize,
        });
        self.advance_within_colony(State::Colony);
        Ok(())
    }

    /// Moves past the lists of the open colony that have nothing left to read.
    fn advance_within_colony(&mut self, finished: State) {
        let Some(open) = self.open.as_ref() else {
            return;
        };
        if finished == State::Colony && open.declared_workers > 0 {
            self.state = State::Workers;
            return;
        }
        if finished != State::Guards && open.declared_guards > 0 {
            self.state = State::Guards;
            return;
        }
        self.close_colony();
    }

    fn close_colony(&mut self) {
        if let Some(open) = self.open.take() {
            self.scenario.colonies.push(open.record);
        }
        self.state = if self.scenario.colonies.len() < self.declared_colonies {
            State::Colony
        } else {
            State::ColonyListEnd
        };
    }

    fn worker(&mut self, tokens: &[&str]) -> Result<(), LoadError> {
        let line = self.line;
        let colony = colony_id(self.scenario.colonies.len());
        let lifetime = self.tuning.ant_lifetime;
        let Some(open) = self.open.as_ref() else {
            return Ok(());
        };
        let found = open.record.workers.len();
        let declared = open.declared_workers;

        if is_sentinel(tokens[0]) {
            if found < declared {
                return Err(LoadError::TooFewRecords {
                    line,
                    record: RecordKind::Worker,
                    colony: Some(colony),
                    declared,
                    found,
                });
            }
            self.advance_within_colony(State::Workers);
            return Ok(());
        }
        if found == declared {
            return Err(LoadError::TooManyRecords {
                line,
                record: RecordKind::Worker,
                colony: Some(colony),
                declared,
            });
        }

        let mut fields = Fields::new(tokens, RecordKind::Worker, line);
        let age: u32 = fields.next()?;
        let x: f64 = fields.next()?;
        let y: f64 = fields.next()?;
        let goal_x: f64 = fields.next()?;
        let goal_y: f64 = fields.next()?;
        let carrying: i64 = fields.next()?;

        if age >= lifetime {
            return Err(LoadError::AgeOutOfRange {
                line,
                ant: AntRef::new(colony, AntKind::Worker, found),
                age,
                lifetime,
            });
        }
        let position = Position::new(x, y);
        self.check_domain(RecordKind::Worker, found, position)?;

        if let Some(open) = self.open.as_mut() {
            open.record.workers.push(WorkerRecord {
                age,
                position,
                goal: Position::new(goal_x, goal_y),
                carrying_food: carrying != 0,
            });
        }
        Ok(())
    }

    fn guards(&mut self, tokens: &[&str]) -> Result<(), LoadError> {
        let line = self.line;
        let colony = colony_id(self.scenario.colonies.len());
        let mut rest = tokens;
        while let Some(first) = rest.first() {
            let Some(open) = self.open.as_ref() else {
                return Ok(());
            };
            let found = open.record.guards.len();
            let declared = open.declared_guards;

            if is_sentinel(first) {
                if found < declared {
                    return Err(LoadError::TooFewRecords {
                        line,
                        record: RecordKind::Guard,
                        colony: Some(colony),
                        declared,
                        found,
                    });
                }
                self.advance_within_colony(State::Guards);
                return Ok(());
            }
            if found == declared {
                return Err(LoadError::TooManyRecords {
                    line,
                    record: RecordKind::Guard,
                    colony: Some(colony),
                    declared,
                });
            }

            let (record, remaining) = split_record(rest, RecordKind::Guard);
            rest = remaining;
            let mut fields = Fields::new(record, RecordKind::Guard, line);
            let age: u32 = fields.next()?;
            let x: f64 = fields.next()?;
            let y: f64 = fields.next()?;
            let guard = self.check_guard(colony, found, age, Position::new(x, y))?;
            if let Some(open) = self.open.as_mut() {
                open.record.guards.push(guard);
            }
        }
        Ok(())
    }

    fn check_guard(
        &self,
        colony: ColonyId,
        index: usize,
        age: u32,
        position: Position,
    ) -> Result<GuardRecord, LoadError> {
        let ant = AntRef::new(colony, AntKind::Guard, index);
        if age >= self.tuning.ant_lifetime {
            return Err(LoadError::AgeOutOfRange {
                line: self.line,
                ant,
                age,
                lifetime: self.tuning.ant_lifetime,
            });
        }
        self.check_domain(RecordKind::Guard, index, position)?;

        if let Some(open) = self.open.as_ref() {
            let home = &open.record;
            let reach = home.radius - self.tuning.tolerance - self.tuning.ant_radius;
            if position.distance_to(home.center) > reach {
                return Err(LoadError::GuardOutsideColony {
                    line: self.line,
                    guard: ant,
                });
            }
        }
        Ok(GuardRecord { age, position })
    }

    fn colony_list_end(&mut self, tokens: &[&str]) -> Result<(), LoadError> {
        if !is_sentinel(tokens[0]) {
            return Err(LoadError::TooManyRecords {
                line: self.line,
                record: RecordKind::Colony,
                colony: None,
                declared: self.declared_colonies,
            });
        }
        self.state = State::FoodCount;
        Ok(())
    }

    fn food_count(&mut self, tokens: &[&str]) -> Result<(), LoadError> {
        let mut fields = Fields::new(tokens, RecordKind::FoodCount, self.line);
        let declared: usize = fields.next()?;
        self.declared_food = declared;
        self.state = if declared == 0 {
            State::Done
        } else {
            State::Food
        };
        Ok(())
    }

    fn food(&mut self, tokens: &[&str]) -> Result<(), LoadError> {
        let mut rest = tokens;
        while let Some(first) = rest.first() {
            let found = self.scenario.food.len();
            if is_sentinel(first) {
                if found < self.declared_food {
                    return Err(LoadError::TooFewRecords {
                        line: self.line,
                        record: RecordKind::Food,
                        colony: None,
                        declared: self.declared_food,
                        found,
                    });
                }
                self.state = State::Done;
                return Ok(());
            }
            if found == self.declared_food {
                return Err(LoadError::TooManyRecords {
                    line: self.line,
                    record: RecordKind::Food,
                    colony: None,
                    declared: self.declared_food,
                });
            }

            let (record, remaining) = split_record(rest, RecordKind::Food);
            rest = remaining;
            let mut fields = Fields::new(record, RecordKind::Food, self.line);
            let x: f64 = fields.next()?;
            let y: f64 = fields.next()?;
            let position = Position::new(x, y);
            self.check_domain(RecordKind::Food, found, position)?;
            self.scenario.food.push(FoodRecord { position });
        }
        Ok(())
    }

    fn check_domain(
        &self,
        record: RecordKind,
        index: usize,
        position: Position,
    ) -> Result<(), LoadError> {
        if self.tuning.in_domain(position) {
            Ok(())
        } else {
            Err(LoadError::PositionOutOfDomain {
                line: self.line,
                record,
                index,
                position,
            })
        }
    }
}

/// Sequential reader over the numeric fields of one record.
struct Fields<'t> {
    tokens: &'t [&'t str],
    record: RecordKind,
    line: usize,
    read: usize,
}

impl<'t> Fields<'t> {
    fn new(tokens: &'t [&'t str], record: RecordKind, line: usize) -> Self {
        Self {
            tokens,
            record,
            line,
            read: 0,
        }
    }

    fn next<T: FromStr>(&mut self) -> Result<T, LoadError> {
        let value = self
            .tokens
            .get(self.read)
            .and_then(|token| token.parse().ok())
            .ok_or(LoadError::TooFewFields {
                line: self.line,
                record: self.record,
                expected: self.record.arity(),
                found: self.read,
            })?;
        self.read += 1;
        Ok(value)
    }
}

/// Splits off the tokens of one packed record, stopping early at a sentinel.
fn split_record<'t>(tokens: &'t [&'t str], record: RecordKind) -> (&'t [&'t str], &'t [&'t str]) {
    let limit = record.arity().min(tokens.len());
    let length = tokens[..limit]
        .iter()
        .position(|token| is_sentinel(token))
        .unwrap_or(limit);
    tokens.split_at(length)
}

fn is_sentinel(token: &str) -> bool {
    token == LIST_SENTINEL
}

fn colony_id(index: usize) -> ColonyId {
    ColonyId::new(u32::try_from(index).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_records_stop_at_sentinel() {
        let tokens = ["1", "2", "FIN_LISTE"];
        let (record, rest) = split_record(&tokens, RecordKind::Guard);
        assert_eq!(record, &["1", "2"]);
        assert_eq!(rest, &["FIN_LISTE"]);
    }

    #[test]
    fn fields_count_what_was_readable() {
        let tokens = ["3", "oops"];
        let mut fields = Fields::new(&tokens, RecordKind::Food, 4);
        let x: f64 = fields.next().expect("first field");
        assert_eq!(x, 3.0);
        let error = fields.next::<f64>().expect_err("second field is not a number");
        assert!(matches!(
            error,
            LoadError::TooFewFields {
                line: 4,
                record: RecordKind::Food,
                expected: 2,
                found: 1,
            }
        ));
    }
}
