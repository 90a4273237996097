use crate::calculator::constants::{
    activity_multiplier, goal_adjustment, macro_split, CARB_KCAL_PER_G, FAT_KCAL_PER_G,
    PROTEIN_KCAL_PER_G,
};
use crate::models::{ActivityLevel, Gender, Goal, Macros, Profile};

/// Basal metabolic rate via the Harris-Benedict formula, in kcal/day.
///
/// Height is stored in meters; the formula expects centimeters.
pub fn bmr(gender: Gender, weight_kg: f64, height_m: f64, age_years: u32) -> f64 {
    let height_cm = height_m * 100.0;
    let age = age_years as f64;

    match gender {
        Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    }
}

/// Daily calorie target: BMR scaled by the activity multiplier, rounded,
/// then adjusted flat for the goal.
///
/// No lower bound is enforced; a light or old profile under WeightLoss can
/// land below common safe minimums.
pub fn calorie_target(profile: &Profile, activity: ActivityLevel) -> i32 {
    let base = bmr(
        profile.gender,
        profile.weight_kg,
        profile.height_m,
        profile.age_years,
    );
    let total = (base * activity_multiplier(activity)).round() as i32;

    total + goal_adjustment(profile.goal)
}

/// Macro targets for a calorie total: protein from bodyweight, fat from a
/// calorie fraction, carbs from the remainder.
///
/// The carb remainder is computed from the unrounded protein and fat terms;
/// each field then rounds independently, so `Macros::kcal` can drift a few
/// kcal from `calories`.
pub fn macro_targets(calories: i32, goal: Goal, weight_kg: f64) -> Macros {
    let split = macro_split(goal);

    let protein = weight_kg * split.protein_g_per_kg;
    let fat = (calories as f64 * split.fat_fraction) / FAT_KCAL_PER_G;
    let carbs = (calories as f64 - protein * PROTEIN_KCAL_PER_G - fat * FAT_KCAL_PER_G)
        / CARB_KCAL_PER_G;

    Macros {
        protein_g: protein.round() as i32,
        carbs_g: carbs.round() as i32,
        fat_g: fat.round() as i32,
    }
}
