pub mod calculator;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{DietError, Result};
pub use models::{DietResult, FoodItem, MealPlan, Profile};
