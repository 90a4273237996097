use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{DietError, Result};
use crate::models::{ActivityLevel, Gender, Goal, Profile, Restriction, RestrictionType};

fn prompt_f64(prompt: &str) -> Result<f64> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| DietError::InvalidInput("Invalid number".to_string()))
}

fn prompt_u32(prompt: &str) -> Result<u32> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| DietError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for gender.
pub fn prompt_gender() -> Result<Gender> {
    let labels: Vec<&str> = Gender::ALL.iter().map(Gender::label).collect();

    let selection = Select::new()
        .with_prompt("Gender")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Gender::ALL[selection])
}

/// Prompt for a training goal.
pub fn prompt_goal() -> Result<Goal> {
    let labels: Vec<&str> = Goal::ALL.iter().map(Goal::label).collect();

    let selection = Select::new()
        .with_prompt("Goal")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Goal::ALL[selection])
}

/// Prompt for an activity level, defaulting to the previous one if known.
pub fn prompt_activity_level(current: Option<ActivityLevel>) -> Result<ActivityLevel> {
    let labels: Vec<&str> = ActivityLevel::ALL.iter().map(ActivityLevel::label).collect();
    let default = current
        .and_then(|c| ActivityLevel::ALL.iter().position(|l| *l == c))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

/// Collect a full profile interactively. The result is validated before it
/// is returned, so downstream calculations never see non-positive values.
pub fn collect_profile() -> Result<Profile> {
    let gender = prompt_gender()?;
    let weight_kg = prompt_f64("Weight (kg)")?;
    let height_m = prompt_f64("Height (m)")?;
    let age_years = prompt_u32("Age (years)")?;
    let goal = prompt_goal()?;

    let profile = Profile {
        gender,
        weight_kg,
        height_m,
        age_years,
        goal,
    };
    profile.validate()?;

    Ok(profile)
}

/// Prompt for a dietary restriction.
///
/// The description is free text matched by substring against food names, so
/// when it matches nothing in the catalog we fuzzy-suggest the closest name
/// before saving.
pub fn prompt_restriction(catalog_names: &[&str]) -> Result<Restriction> {
    let labels: Vec<&str> = RestrictionType::ALL
        .iter()
        .map(RestrictionType::label)
        .collect();

    let selection = Select::new()
        .with_prompt("Restriction type")
        .items(&labels)
        .default(0)
        .interact()?;
    let restriction_type = RestrictionType::ALL[selection];

    let input: String = Input::new()
        .with_prompt("Restricted food or ingredient")
        .interact_text()?;
    let input = input.trim().to_string();
    if input.is_empty() {
        return Err(DietError::InvalidInput(
            "Restriction description cannot be empty".to_string(),
        ));
    }

    let needle = input.to_lowercase();
    let matches = catalog_names
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .count();

    let description = if matches > 0 {
        println!("Excludes {} catalog food(s).", matches);
        input
    } else {
        // Nothing matches; offer the closest catalog name instead.
        let best = catalog_names
            .iter()
            .map(|name| (*name, jaro_winkler(&name.to_lowercase(), &needle)))
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        match best {
            Some((name, score)) if score > 0.7 => {
                let use_suggestion = Confirm::new()
                    .with_prompt(format!(
                        "No catalog food matches '{}'. Did you mean '{}'?",
                        input, name
                    ))
                    .default(true)
                    .interact()?;

                if use_suggestion {
                    name.to_string()
                } else {
                    input
                }
            }
            _ => {
                println!("No catalog food matches '{}'; saving anyway.", input);
                input
            }
        }
    };

    Ok(Restriction {
        restriction_type,
        description,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
