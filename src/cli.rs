use clap::{Parser, Subcommand};

/// NutriPlan — calorie targets, macro splits, and meal suggestions from a
/// biometric profile.
#[derive(Parser, Debug)]
#[command(name = "nutri_plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the user state JSON file.
    #[arg(short, long, default_value = "diet_state.json")]
    pub state: String,

    /// Path to the food catalog JSON file.
    #[arg(short, long, default_value = "foods.json")]
    pub catalog: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate the daily calorie target and macro split.
    Calculate,

    /// Suggest meals from the catalog, honoring restrictions.
    Suggest,

    /// Create or update the stored profile.
    Profile,

    /// Manage dietary restrictions.
    Restriction {
        #[command(subcommand)]
        action: RestrictionAction,
    },

    /// List the food catalog by category.
    Foods,

    /// Write the built-in starter catalog.
    InitCatalog,

    /// Replace the catalog with foods imported from a CSV file.
    ImportFoods {
        /// CSV file with name,category and per-100g nutrition columns.
        file: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum RestrictionAction {
    /// Add a restriction interactively.
    Add,

    /// List registered restrictions.
    List,

    /// Remove a restriction by its list number.
    Remove {
        number: usize,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Calculate
    }
}
