use crate::models::{DietResult, FoodCategory, MealPlan, Profile, Restriction};
use crate::state::Catalog;

/// Display a computed diet next to the profile it was computed for.
pub fn display_diet(profile: &Profile, diet: &DietResult) {
    println!();
    println!("=== Daily Diet ===");
    println!();
    println!("Goal:           {}", profile.goal.label());
    println!("Activity level: {}", diet.activity_level.label());
    println!();
    println!("Calories: {} kcal/day", diet.calories);
    println!(
        "Macros:   P {} g | C {} g | F {} g ({} kcal implied)",
        diet.macros.protein_g,
        diet.macros.carbs_g,
        diet.macros.fat_g,
        diet.macros.kcal()
    );
    println!(
        "Updated:  {}",
        diet.last_updated.format("%Y-%m-%d %H:%M UTC")
    );
    println!();
}

/// Display the meal suggestions for a day.
pub fn display_meal_plan(plan: &MealPlan) {
    println!();
    println!("=== Meal Suggestions ===");

    for meal in plan.meals() {
        println!();
        println!("--- {} ---", meal.name);

        for option in &meal.options {
            println!("  {}: {}", option.name, option.foods.join(", "));
            println!(
                "      {} kcal | P {} g | C {} g | F {} g",
                option.calories,
                option.macros.protein_g,
                option.macros.carbs_g,
                option.macros.fat_g
            );
        }
    }

    println!();
}

/// Display the catalog grouped by category.
pub fn display_catalog(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("Catalog is empty. Run 'init-catalog' to seed it.");
        return;
    }

    println!();
    println!("=== Food Catalog ({} items) ===", catalog.len());

    for category in FoodCategory::ALL {
        let foods: Vec<_> = catalog
            .all()
            .iter()
            .filter(|f| f.category == category)
            .collect();
        if foods.is_empty() {
            continue;
        }

        println!();
        println!("--- {} ---", category.label());
        for food in foods {
            println!(
                "  {} - {} kcal, P:{} C:{} F:{} (per 100g)",
                food.name,
                food.calories_per_100g,
                food.protein_per_100g,
                food.carbs_per_100g,
                food.fat_per_100g
            );
        }
    }

    println!();
}

/// Display restrictions as a numbered list. Numbers are what the
/// `restriction remove` command takes.
pub fn display_restrictions(restrictions: &[Restriction]) {
    if restrictions.is_empty() {
        println!("No restrictions registered.");
        return;
    }

    println!();
    println!("=== Restrictions ({}) ===", restrictions.len());
    println!();

    for (i, restriction) in restrictions.iter().enumerate() {
        println!(
            "{:>3}. [{}] {}",
            i + 1,
            restriction.restriction_type.label(),
            restriction.description
        );
    }

    println!();
}
