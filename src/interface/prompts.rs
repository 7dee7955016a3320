use dialoguer::{Confirm, Input, Select};

use crate::error::{DietError, Result};
use crate::models::{
    ActivityLevel, Allergen, BmiReading, BodyFat, Gender, Goal, PlanRequest, Preference,
};
use crate::planner::calculations::{bmi, navy_body_fat};

fn prompt_f64(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| DietError::InvalidInput(format!("'{}' is not a number", input)))
}

fn prompt_gender() -> Result<Gender> {
    let options = [Gender::Male, Gender::Female];
    let labels: Vec<&str> = options.iter().map(|g| g.label()).collect();

    let selection = Select::new()
        .with_prompt("Gender")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options[selection])
}

fn prompt_activity() -> Result<ActivityLevel> {
    let labels: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&labels)
        .default(2) // Moderate
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

fn prompt_goal() -> Result<Goal> {
    let labels: Vec<&str> = Goal::ALL.iter().map(|g| g.label()).collect();

    let selection = Select::new()
        .with_prompt("Goal")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Goal::ALL[selection])
}

fn prompt_preference() -> Result<Preference> {
    let labels: Vec<&str> = Preference::ALL.iter().map(|p| p.label()).collect();

    let selection = Select::new()
        .with_prompt("Dietary preference")
        .items(&labels)
        .default(5) // Everything
        .interact()?;

    Ok(Preference::ALL[selection])
}

fn prompt_allergy() -> Result<Allergen> {
    let labels: Vec<&str> = Allergen::ALL.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("Allergy")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Allergen::ALL[selection])
}

/// Collect a full plan request interactively.
///
/// Numeric defaults match the reference app's form. BMI and body fat are
/// computed here and carried into the request as display fields.
pub fn collect_plan_request() -> Result<PlanRequest> {
    let age = prompt_f64("Age", "25")?;
    let gender = prompt_gender()?;
    let weight_kg = prompt_f64("Weight (kg)", "70")?;
    let height_cm = prompt_f64("Height (cm)", "175")?;
    let neck_cm = prompt_f64("Neck (cm)", "35")?;
    let waist_cm = prompt_f64("Waist (cm)", "80")?;
    let activity = prompt_activity()?;
    let goal = prompt_goal()?;
    let preference = prompt_preference()?;
    let allergy = prompt_allergy()?;

    let bmi_reading: BmiReading = bmi(weight_kg, height_cm)?;
    let body_fat: BodyFat = navy_body_fat(gender, height_cm, neck_cm, waist_cm)?;

    Ok(PlanRequest {
        age,
        gender,
        weight_kg,
        height_cm,
        neck_cm,
        waist_cm,
        activity,
        goal,
        preference,
        allergy,
        bmi: bmi_reading,
        body_fat_pct: body_fat.percent,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for one chat message; empty input or an exit word ends the
/// session.
pub fn prompt_chat_message() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("You")
        .allow_empty(true)
        .interact_text()?;

    let trimmed = input.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("exit")
        || trimmed.eq_ignore_ascii_case("quit")
    {
        return Ok(None);
    }

    Ok(Some(trimmed.to_string()))
}
