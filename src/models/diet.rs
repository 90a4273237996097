use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ActivityLevel;

/// Daily macronutrient targets in grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    pub protein_g: i32,
    pub carbs_g: i32,
    pub fat_g: i32,
}

impl Macros {
    /// Energy implied by the gram targets (4/4/9 kcal per gram).
    ///
    /// Because each field rounds independently this can drift a few kcal
    /// from the calorie target; that drift is accepted, not reconciled.
    pub fn kcal(&self) -> i32 {
        self.protein_g * 4 + self.carbs_g * 4 + self.fat_g * 9
    }
}

/// A computed daily diet: calorie target plus macro split.
///
/// One live result per user; recalculating overwrites it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietResult {
    pub calories: i32,

    #[serde(flatten)]
    pub macros: Macros,

    pub activity_level: ActivityLevel,

    pub last_updated: DateTime<Utc>,
}

/// One suggested composition for a meal: three foods and the meal's share of
/// the daily targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealOption {
    pub name: String,
    pub foods: Vec<String>,
    pub calories: i32,
    pub macros: Macros,
}

/// A named meal with its fixed option variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub options: Vec<MealOption>,
}

/// Derived meal suggestions for a day. Never persisted; rebuilt on demand
/// from the diet result and the filtered catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    pub snacks: Meal,
}

impl MealPlan {
    pub fn meals(&self) -> [&Meal; 4] {
        [&self.breakfast, &self.lunch, &self.dinner, &self.snacks]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macros_kcal() {
        let macros = Macros {
            protein_g: 160,
            carbs_g: 444,
            fat_g: 89,
        };
        assert_eq!(macros.kcal(), 160 * 4 + 444 * 4 + 89 * 9);
    }

    #[test]
    fn test_diet_result_serializes_flat() {
        let diet = DietResult {
            calories: 3217,
            macros: Macros {
                protein_g: 160,
                carbs_g: 444,
                fat_g: 89,
            },
            activity_level: ActivityLevel::ModeratelyActive,
            last_updated: Utc::now(),
        };

        let json = serde_json::to_string(&diet).unwrap();
        // Macro fields sit at the top level, like the legacy diet record.
        assert!(json.contains("\"protein_g\":160"));
        assert!(json.contains("\"Moderadamente ativo\""));

        let back: DietResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.calories, 3217);
        assert_eq!(back.macros, diet.macros);
    }
}
