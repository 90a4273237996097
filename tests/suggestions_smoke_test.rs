use chrono::Utc;
use tempfile::NamedTempFile;

use nutri_plan_rs::calculator::{build_meal_suggestions, calorie_target, macro_targets};
use nutri_plan_rs::models::{
    ActivityLevel, DietResult, FoodCategory, FoodItem, Gender, Goal, Profile, Restriction,
    RestrictionType,
};
use nutri_plan_rs::state::{
    default_catalog, load_catalog, load_state, save_catalog, save_state, Catalog, UserState,
};

fn restriction(description: &str) -> Restriction {
    Restriction {
        restriction_type: RestrictionType::Preference,
        description: description.to_string(),
    }
}

fn sample_diet() -> DietResult {
    let profile = Profile {
        gender: Gender::Male,
        weight_kg: 80.0,
        height_m: 1.80,
        age_years: 25,
        goal: Goal::Hypertrophy,
    };
    let calories = calorie_target(&profile, ActivityLevel::ModeratelyActive);

    DietResult {
        calories,
        macros: macro_targets(calories, profile.goal, profile.weight_kg),
        activity_level: ActivityLevel::ModeratelyActive,
        last_updated: Utc::now(),
    }
}

#[test]
fn test_full_plan_from_starter_catalog() {
    let catalog = Catalog::new(default_catalog());
    let pools = catalog.suggestion_pools(&[]);

    let plan = build_meal_suggestions(&sample_diet(), &pools);

    // Positional picks in seed order, no fallbacks needed.
    assert_eq!(
        plan.breakfast.options[0].foods,
        vec!["Peito de frango", "Arroz branco", "Banana"]
    );
    assert_eq!(
        plan.breakfast.options[1].foods,
        vec!["Iogurte natural", "Maçã", "Arroz integral"]
    );
    assert_eq!(
        plan.lunch.options[0].foods,
        vec!["Carne bovina (acém)", "Batata doce", "Brócolis"]
    );
    assert_eq!(
        plan.lunch.options[1].foods,
        vec!["Salmão", "Macarrão integral", "Espinafre"]
    );
    assert_eq!(
        plan.dinner.options[0].foods,
        vec!["Atum em conserva", "Pão integral", "Alface"]
    );
    assert_eq!(
        plan.dinner.options[1].foods,
        vec!["Ovos", "Aveia", "Tomate"]
    );
    assert_eq!(
        plan.snacks.options[0].foods,
        vec!["Laranja", "Whey protein", "Azeite de oliva"]
    );
    assert_eq!(
        plan.snacks.options[1].foods,
        vec!["Iogurte grego", "Morango", "Abacate"]
    );
}

#[test]
fn test_restriction_shifts_positional_picks() {
    let catalog = Catalog::new(default_catalog());
    let pools = catalog.suggestion_pools(&[restriction("arroz")]);

    // Both rice entries are gone, so every carb pick moves up two slots.
    let plan = build_meal_suggestions(&sample_diet(), &pools);
    assert_eq!(plan.breakfast.options[0].foods[1], "Batata doce");
    assert_eq!(plan.lunch.options[0].foods[1], "Pão integral");
}

#[test]
fn test_restriction_excludes_by_substring() {
    let catalog = Catalog::new(default_catalog());
    let pools = catalog.suggestion_pools(&[restriction("frango")]);

    assert!(pools
        .proteins
        .iter()
        .all(|f| !f.name.to_lowercase().contains("frango")));
    // Everything kept was in the unrestricted pool.
    let unrestricted = catalog.suggestion_pools(&[]);
    for food in &pools.proteins {
        assert!(unrestricted.proteins.iter().any(|f| f.name == food.name));
    }
}

#[test]
fn test_meal_shares_follow_diet_totals() {
    let diet = sample_diet();
    let catalog = Catalog::new(default_catalog());
    let plan = build_meal_suggestions(&diet, &catalog.suggestion_pools(&[]));

    for meal in plan.meals() {
        for option in &meal.options {
            assert!(option.calories > 0);
            assert!(option.calories < diet.calories);
        }
    }

    // Breakfast carries a quarter of the day's calories.
    let expected = (diet.calories as f64 * 0.25).round() as i32;
    assert_eq!(plan.breakfast.options[0].calories, expected);
    // Both options of a meal share identical macro allocations.
    assert_eq!(
        plan.lunch.options[0].calories,
        plan.lunch.options[1].calories
    );
}

#[test]
fn test_calculate_store_suggest_flow() {
    // The end-to-end shape of the CLI: compute, persist, reload, suggest.
    let diet = sample_diet();

    let state_file = NamedTempFile::new().unwrap();
    let state = UserState {
        profile: Some(Profile {
            gender: Gender::Male,
            weight_kg: 80.0,
            height_m: 1.80,
            age_years: 25,
            goal: Goal::Hypertrophy,
        }),
        restrictions: vec![restriction("leite")],
        diet: Some(diet),
    };
    save_state(state_file.path(), &state).unwrap();

    let catalog_file = NamedTempFile::new().unwrap();
    let mut foods = default_catalog();
    foods.push(FoodItem {
        name: "Leite desnatado".to_string(),
        category: FoodCategory::Dairy,
        calories_per_100g: 35.0,
        protein_per_100g: 3.4,
        carbs_per_100g: 5.0,
        fat_per_100g: 0.1,
    });
    save_catalog(catalog_file.path(), &foods).unwrap();

    let loaded = load_state(state_file.path()).unwrap();
    let catalog = Catalog::new(load_catalog(catalog_file.path()).unwrap());
    assert!(catalog.find("Leite desnatado").is_some());

    let reloaded_diet = loaded.diet.as_ref().unwrap();
    assert_eq!(reloaded_diet.calories, 3217);

    let pools = catalog.suggestion_pools(&loaded.restrictions);
    let plan = build_meal_suggestions(reloaded_diet, &pools);

    // The restriction filter only sees the five suggestion categories, and
    // no suggested food may contain the restricted text anywhere.
    for meal in plan.meals() {
        for option in &meal.options {
            for food in &option.foods {
                assert!(
                    !food.to_lowercase().contains("leite"),
                    "'{}' leaked through the restriction",
                    food
                );
            }
        }
    }
}
