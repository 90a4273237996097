use crate::models::{ActivityLevel, Goal};

/// Energy content per gram of macronutrient.
pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
pub const CARB_KCAL_PER_G: f64 = 4.0;
pub const FAT_KCAL_PER_G: f64 = 9.0;

/// Flat calorie deficit applied for weight loss.
pub const WEIGHT_LOSS_DEFICIT: i32 = -500;

/// Flat calorie surplus applied for hypertrophy.
pub const HYPERTROPHY_SURPLUS: i32 = 300;

/// BMR multiplier for a declared activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
        ActivityLevel::ExtremelyActive => 1.9,
    }
}

/// Flat adjustment added to the post-multiplier calorie value.
///
/// Applied unconditionally; there is no lower clamp on the result.
pub fn goal_adjustment(goal: Goal) -> i32 {
    match goal {
        Goal::WeightLoss => WEIGHT_LOSS_DEFICIT,
        Goal::Hypertrophy => HYPERTROPHY_SURPLUS,
        _ => 0,
    }
}

/// Per-goal macro split: protein per kg of bodyweight, fat as a fraction of
/// total calories. Carbs take the remainder.
#[derive(Debug, Clone, Copy)]
pub struct MacroSplit {
    pub protein_g_per_kg: f64,
    pub fat_fraction: f64,
}

pub fn macro_split(goal: Goal) -> MacroSplit {
    match goal {
        Goal::Hypertrophy => MacroSplit {
            protein_g_per_kg: 2.0,
            fat_fraction: 0.25,
        },
        Goal::WeightLoss => MacroSplit {
            protein_g_per_kg: 2.2,
            fat_fraction: 0.30,
        },
        Goal::Definition => MacroSplit {
            protein_g_per_kg: 2.0,
            fat_fraction: 0.25,
        },
        Goal::Conditioning => MacroSplit {
            protein_g_per_kg: 1.6,
            fat_fraction: 0.25,
        },
        Goal::Rehabilitation => MacroSplit {
            protein_g_per_kg: 1.8,
            fat_fraction: 0.30,
        },
        Goal::Maintenance => MacroSplit {
            protein_g_per_kg: 1.6,
            fat_fraction: 0.30,
        },
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Meal allocation shares
// ─────────────────────────────────────────────────────────────────────────────

/// Fraction of the daily calories and macro targets allocated to one meal.
#[derive(Debug, Clone, Copy)]
pub struct MealShare {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

pub const BREAKFAST_SHARE: MealShare = MealShare {
    calories: 0.25,
    protein: 0.20,
    carbs: 0.25,
    fat: 0.20,
};

pub const LUNCH_SHARE: MealShare = MealShare {
    calories: 0.35,
    protein: 0.40,
    carbs: 0.35,
    fat: 0.30,
};

pub const DINNER_SHARE: MealShare = MealShare {
    calories: 0.30,
    protein: 0.30,
    carbs: 0.30,
    fat: 0.30,
};

/// Each of the two snacks gets the same 10% share.
pub const SNACK_SHARE: MealShare = MealShare {
    calories: 0.10,
    protein: 0.10,
    carbs: 0.10,
    fat: 0.10,
};

// ─────────────────────────────────────────────────────────────────────────────
// Suggestion pool sizes
// ─────────────────────────────────────────────────────────────────────────────

/// How many foods per category feed the suggestion builder, in catalog order,
/// before restriction filtering.
pub const PROTEIN_POOL_LIMIT: usize = 10;
pub const CARB_POOL_LIMIT: usize = 10;
pub const FAT_POOL_LIMIT: usize = 5;
pub const VEGETABLE_POOL_LIMIT: usize = 8;
pub const FRUIT_POOL_LIMIT: usize = 5;
