use std::path::Path;

use chrono::Utc;
use clap::Parser;

use nutri_plan_rs::calculator::{build_meal_suggestions, calorie_target, macro_targets};
use nutri_plan_rs::cli::{Cli, Command, RestrictionAction};
use nutri_plan_rs::error::{DietError, Result};
use nutri_plan_rs::interface::{
    collect_profile, display_catalog, display_diet, display_meal_plan, display_restrictions,
    prompt_activity_level, prompt_restriction, prompt_yes_no,
};
use nutri_plan_rs::models::DietResult;
use nutri_plan_rs::state::{
    default_catalog, import_catalog_csv, load_catalog, load_state, save_catalog, save_state,
    Catalog,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Calculate => cmd_calculate(&cli.state),
        Command::Suggest => cmd_suggest(&cli.state, &cli.catalog),
        Command::Profile => cmd_profile(&cli.state),
        Command::Restriction { action } => cmd_restriction(&cli.state, &cli.catalog, action),
        Command::Foods => cmd_foods(&cli.catalog),
        Command::InitCatalog => cmd_init_catalog(&cli.catalog),
        Command::ImportFoods { file } => cmd_import_foods(&cli.catalog, &file),
    }
}

/// Compute the calorie target and macro split, then store the result.
fn cmd_calculate(state_path: &str) -> Result<()> {
    let mut state = load_state(state_path)?;

    if state.profile.is_none() {
        println!("No profile found in {}.", state_path);
        let create = prompt_yes_no("Set one up now?", true)?;
        if !create {
            return Ok(());
        }
        state.profile = Some(collect_profile()?);
    }

    let profile = state.require_profile()?.clone();
    // Stored files can be hand-edited; re-check before computing.
    profile.validate()?;

    let previous_level = state.diet.as_ref().map(|d| d.activity_level);
    let activity = prompt_activity_level(previous_level)?;

    let calories = calorie_target(&profile, activity);
    let macros = macro_targets(calories, profile.goal, profile.weight_kg);

    state.set_diet(DietResult {
        calories,
        macros,
        activity_level: activity,
        last_updated: Utc::now(),
    });
    save_state(state_path, &state)?;

    display_diet(&profile, state.require_diet()?);
    println!("Diet saved to {}.", state_path);

    Ok(())
}

/// Build and display meal suggestions from the stored diet and catalog.
fn cmd_suggest(state_path: &str, catalog_path: &str) -> Result<()> {
    let state = load_state(state_path)?;
    let diet = state.require_diet()?;

    if !Path::new(catalog_path).exists() {
        eprintln!("Food catalog not found: {}", catalog_path);
        eprintln!("Run 'init-catalog' to create the starter catalog.");
        return Ok(());
    }

    let catalog = Catalog::new(load_catalog(catalog_path)?);
    if catalog.is_empty() {
        println!("Catalog is empty; suggestions will only use fallback foods.");
    }

    let pools = catalog.suggestion_pools(&state.restrictions);
    let plan = build_meal_suggestions(diet, &pools);

    if let Some(profile) = &state.profile {
        display_diet(profile, diet);
    }
    if !state.restrictions.is_empty() {
        println!(
            "Honoring {} restriction(s) when picking foods.",
            state.restrictions.len()
        );
    }
    display_meal_plan(&plan);

    Ok(())
}

/// Create or replace the stored profile.
fn cmd_profile(state_path: &str) -> Result<()> {
    let mut state = load_state(state_path)?;

    if state.profile.is_some() {
        println!("A profile already exists; answers below replace it.");
    }

    state.profile = Some(collect_profile()?);
    save_state(state_path, &state)?;
    println!("Profile saved to {}.", state_path);

    if state.diet.is_some() {
        println!("Run 'calculate' to refresh the diet for the new profile.");
    }

    Ok(())
}

fn cmd_restriction(state_path: &str, catalog_path: &str, action: RestrictionAction) -> Result<()> {
    let mut state = load_state(state_path)?;

    match action {
        RestrictionAction::Add => {
            // Catalog names feed the fuzzy suggestion; an absent catalog
            // just means no suggestions.
            let foods = if Path::new(catalog_path).exists() {
                load_catalog(catalog_path)?
            } else {
                Vec::new()
            };
            let catalog = Catalog::new(foods);

            let restriction = prompt_restriction(&catalog.names())?;
            state.restrictions.push(restriction);
            save_state(state_path, &state)?;

            println!("Restriction added ({} total).", state.restrictions.len());
            if state.diet.is_some() {
                println!("Run 'suggest' to see updated meal suggestions.");
            }
        }
        RestrictionAction::List => {
            display_restrictions(&state.restrictions);
        }
        RestrictionAction::Remove { number } => {
            if number == 0 || number > state.restrictions.len() {
                return Err(DietError::InvalidInput(format!(
                    "no restriction number {} (have {})",
                    number,
                    state.restrictions.len()
                )));
            }

            let removed = state.restrictions.remove(number - 1);
            save_state(state_path, &state)?;
            println!("Removed restriction '{}'.", removed.description);
        }
    }

    Ok(())
}

fn cmd_foods(catalog_path: &str) -> Result<()> {
    if !Path::new(catalog_path).exists() {
        eprintln!("Food catalog not found: {}", catalog_path);
        eprintln!("Run 'init-catalog' to create the starter catalog.");
        return Ok(());
    }

    let catalog = Catalog::new(load_catalog(catalog_path)?);
    display_catalog(&catalog);

    Ok(())
}

fn cmd_init_catalog(catalog_path: &str) -> Result<()> {
    if Path::new(catalog_path).exists() {
        let overwrite = prompt_yes_no(
            &format!("{} exists. Overwrite with the starter catalog?", catalog_path),
            false,
        )?;
        if !overwrite {
            return Ok(());
        }
    }

    let foods = default_catalog();
    save_catalog(catalog_path, &foods)?;
    println!("Wrote {} foods to {}.", foods.len(), catalog_path);

    Ok(())
}

fn cmd_import_foods(catalog_path: &str, csv_path: &str) -> Result<()> {
    if !Path::new(csv_path).exists() {
        return Err(DietError::InvalidInput(format!(
            "CSV file not found: {}",
            csv_path
        )));
    }

    let imported = import_catalog_csv(csv_path)?;
    let catalog = Catalog::new(imported);
    save_catalog(catalog_path, &catalog.to_foods())?;

    println!(
        "Imported {} foods from {} into {}.",
        catalog.len(),
        csv_path,
        catalog_path
    );

    Ok(())
}
