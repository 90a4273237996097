pub mod calculations;
pub mod constants;
pub mod suggestions;

pub use calculations::{bmr, calorie_target, macro_targets};
pub use constants::{activity_multiplier, goal_adjustment, macro_split, MacroSplit, MealShare};
pub use suggestions::{build_meal_suggestions, filter_by_restrictions, SuggestionPools};
