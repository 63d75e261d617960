use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::MealAssignment;
use crate::planner::PlanReport;

const CSV_HEADER: [&str; 6] = ["meal", "label", "role", "food_key", "food_label", "grams"];

/// Pretty-printed JSON for a computed plan.
pub fn plan_to_json(report: &PlanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write one CSV row per food portion to `path`.
pub fn write_csv(meals: &[MealAssignment], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    write_rows(&mut wtr, meals)
}

/// Same rows as [`write_csv`], to any writer.
pub fn write_csv_to<W: Write>(meals: &[MealAssignment], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    write_rows(&mut wtr, meals)
}

fn write_rows<W: Write>(wtr: &mut csv::Writer<W>, meals: &[MealAssignment]) -> Result<()> {
    wtr.write_record(CSV_HEADER)?;

    for (i, meal) in meals.iter().enumerate() {
        for portion in &meal.portions {
            wtr.write_record([
                (i + 1).to_string(),
                meal.label.to_string(),
                portion.role.to_string(),
                portion.food.key.to_string(),
                portion.food.label.to_string(),
                portion.grams.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
