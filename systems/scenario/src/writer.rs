//! Emits scenes in the grammar accepted by [`crate::parse`].

use std::fmt;

use bugs_life_core::{Scenario, LIST_SENTINEL};

const GUARDS_PER_LINE: usize = 2;
const FOOD_PER_LINE: usize = 3;

/// Renders a scene as text.
///
/// Numbers use the shortest decimal form that reads back to the same value,
/// so `parse(write(s))` reproduces `s` exactly.
#[must_use]
pub fn write(scenario: &Scenario) -> String {
    SceneText(scenario).to_string()
}

struct SceneText<'a>(&'a Scenario);

impl fmt::Display for SceneText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scenario = self.0;
        writeln!(f, "# Bug's Life scene")?;
        writeln!(f)?;
        writeln!(f, "# number of colonies")?;
        writeln!(f, "{}", scenario.colonies.len())?;

        for (index, colony) in scenario.colonies.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "# colony {index}: x y workers guards food radius")?;
            writeln!(
                f,
                "{} {} {} {} {} {}",
                colony.center.x(),
                colony.center.y(),
                colony.workers.len(),
                colony.guards.len(),
                colony.food,
                colony.radius
            )?;

            if !colony.workers.is_empty() {
                writeln!(f, "  # workers: age x y goal_x goal_y carrying")?;
                for worker in &colony.workers {
                    writeln!(
                        f,
                        "  {} {} {} {} {} {}",
                        worker.age,
                        worker.position.x(),
                        worker.position.y(),
                        worker.goal.x(),
                        worker.goal.y(),
                        u8::from(worker.carrying_food)
                    )?;
                }
                writeln!(f, "{LIST_SENTINEL}")?;
            }

            if !colony.guards.is_empty() {
                writeln!(f, "  # guards: age x y")?;
                for chunk in colony.guards.chunks(GUARDS_PER_LINE) {
                    let records: Vec<String> = chunk
                        .iter()
                        .map(|guard| {
                            format!("{} {} {}", guard.age, guard.position.x(), guard.position.y())
                        })
                        .collect();
                    writeln!(f, "  {}", records.join("    "))?;
                }
                writeln!(f, "{LIST_SENTINEL}")?;
            }
        }

        if !scenario.colonies.is_empty() {
            writeln!(f, "{LIST_SENTINEL}")?;
        }

        writeln!(f)?;
        writeln!(f, "# number of food items")?;
        writeln!(f, "{}", scenario.food.len())?;
        if !scenario.food.is_empty() {
            writeln!(f, "  # food: x y")?;
            for chunk in scenario.food.chunks(FOOD_PER_LINE) {
                let records: Vec<String> = chunk
                    .iter()
                    .map(|item| format!("{} {}", item.position.x(), item.position.y()))
                    .collect();
                writeln!(f, "  {}", records.join("    "))?;
            }
            writeln!(f, "{LIST_SENTINEL}")?;
        }
        Ok(())
    }
}
