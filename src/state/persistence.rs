use std::fs;
use std::path::Path;

use crate::error::{DietError, Result};
use crate::models::FoodItem;
use crate::state::UserState;

/// Load the food catalog from a JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let content = fs::read_to_string(path)?;
    let foods: Vec<FoodItem> = serde_json::from_str(&content)?;
    Ok(foods)
}

/// Save the food catalog to a JSON file.
pub fn save_catalog<P: AsRef<Path>>(path: P, foods: &[FoodItem]) -> Result<()> {
    let json = serde_json::to_string_pretty(foods)?;
    fs::write(path, json)?;
    Ok(())
}

/// Import a catalog from CSV with the columns
/// `name,category,calories_per_100g,protein_per_100g,carbs_per_100g,fat_per_100g`.
///
/// Rows with negative nutrition values or an empty name are rejected.
pub fn import_catalog_csv<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut foods = Vec::new();

    for record in reader.deserialize() {
        let food: FoodItem = record?;
        if !food.is_valid() {
            return Err(DietError::InvalidInput(format!(
                "invalid catalog row for '{}'",
                food.name
            )));
        }
        foods.push(food);
    }

    Ok(foods)
}

/// Load the user state, or an empty default when the file does not exist.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<UserState> {
    if !path.as_ref().exists() {
        return Ok(UserState::default());
    }
    let content = fs::read_to_string(path)?;
    let state: UserState = serde_json::from_str(&content)?;
    Ok(state)
}

/// Save the user state to a JSON file.
pub fn save_state<P: AsRef<Path>>(path: P, state: &UserState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}
