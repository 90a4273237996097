use crate::calculator::constants::{
    MealShare, BREAKFAST_SHARE, DINNER_SHARE, LUNCH_SHARE, SNACK_SHARE,
};
use crate::models::{DietResult, FoodItem, Macros, Meal, MealOption, MealPlan, Restriction};

/// Keep only foods whose name contains no restriction description.
///
/// Pure case-insensitive substring containment: a restriction of "leite"
/// drops "Leite desnatado" and anything else with "leite" in the name. The
/// bluntness is intentional and must not be refined; outputs depend on it.
pub fn filter_by_restrictions<'a>(
    foods: &[&'a FoodItem],
    restrictions: &[Restriction],
) -> Vec<&'a FoodItem> {
    let needles: Vec<String> = restrictions
        .iter()
        .map(|r| r.description.to_lowercase())
        .collect();

    foods
        .iter()
        .copied()
        .filter(|food| {
            let name = food.name.to_lowercase();
            !needles.iter().any(|needle| name.contains(needle))
        })
        .collect()
}

/// Restriction-filtered, category-partitioned food lists feeding the meal
/// builder. Order matters: selection is positional within each list.
#[derive(Debug, Default)]
pub struct SuggestionPools<'a> {
    pub proteins: Vec<&'a FoodItem>,
    pub carbs: Vec<&'a FoodItem>,
    pub fats: Vec<&'a FoodItem>,
    pub vegetables: Vec<&'a FoodItem>,
    pub fruits: Vec<&'a FoodItem>,
}

/// Food at a fixed position in a pool, or the literal fallback when the pool
/// is too short. Index-based on purpose; see the pool ordering contract.
fn pick(pool: &[&FoodItem], index: usize, fallback: &str) -> String {
    pool.get(index)
        .map(|food| food.name.clone())
        .unwrap_or_else(|| fallback.to_string())
}

fn option(name: &str, foods: Vec<String>, diet: &DietResult, share: MealShare) -> MealOption {
    MealOption {
        name: name.to_string(),
        foods,
        calories: (diet.calories as f64 * share.calories).round() as i32,
        macros: Macros {
            protein_g: (diet.macros.protein_g as f64 * share.protein).round() as i32,
            carbs_g: (diet.macros.carbs_g as f64 * share.carbs).round() as i32,
            fat_g: (diet.macros.fat_g as f64 * share.fat).round() as i32,
        },
    }
}

/// Build the day's meal suggestions from a diet result and filtered pools.
///
/// Deterministic: fixed share percentages per meal, fixed positional picks
/// per option. Running it twice over the same inputs yields the same plan.
pub fn build_meal_suggestions(diet: &DietResult, pools: &SuggestionPools) -> MealPlan {
    let breakfast = Meal {
        name: "Café da manhã".to_string(),
        options: vec![
            option(
                "Opção 1",
                vec![
                    pick(&pools.proteins, 0, "Ovos mexidos"),
                    pick(&pools.carbs, 0, "Pão integral"),
                    pick(&pools.fruits, 0, "Banana"),
                ],
                diet,
                BREAKFAST_SHARE,
            ),
            option(
                "Opção 2",
                vec![
                    "Iogurte natural".to_string(),
                    pick(&pools.fruits, 1, "Maçã"),
                    pick(&pools.carbs, 1, "Aveia"),
                ],
                diet,
                BREAKFAST_SHARE,
            ),
        ],
    };

    let lunch = Meal {
        name: "Almoço".to_string(),
        options: vec![
            option(
                "Opção 1",
                vec![
                    pick(&pools.proteins, 1, "Peito de frango"),
                    pick(&pools.carbs, 2, "Arroz integral"),
                    pick(&pools.vegetables, 0, "Brócolis"),
                ],
                diet,
                LUNCH_SHARE,
            ),
            option(
                "Opção 2",
                vec![
                    pick(&pools.proteins, 2, "Peixe grelhado"),
                    pick(&pools.carbs, 3, "Batata doce"),
                    pick(&pools.vegetables, 1, "Salada verde"),
                ],
                diet,
                LUNCH_SHARE,
            ),
        ],
    };

    let dinner = Meal {
        name: "Jantar".to_string(),
        options: vec![
            option(
                "Opção 1",
                vec![
                    pick(&pools.proteins, 3, "Carne magra"),
                    pick(&pools.carbs, 4, "Macarrão integral"),
                    pick(&pools.vegetables, 2, "Espinafre"),
                ],
                diet,
                DINNER_SHARE,
            ),
            option(
                "Opção 2",
                vec![
                    pick(&pools.proteins, 4, "Tofu"),
                    pick(&pools.carbs, 5, "Quinoa"),
                    pick(&pools.vegetables, 3, "Cenoura"),
                ],
                diet,
                DINNER_SHARE,
            ),
        ],
    };

    let snacks = Meal {
        name: "Lanches".to_string(),
        options: vec![
            option(
                "Lanche da manhã",
                vec![
                    pick(&pools.fruits, 2, "Maçã"),
                    "Whey protein".to_string(),
                    pick(&pools.fats, 0, "Amêndoas"),
                ],
                diet,
                SNACK_SHARE,
            ),
            option(
                "Lanche da tarde",
                vec![
                    "Iogurte grego".to_string(),
                    pick(&pools.fruits, 3, "Morango"),
                    pick(&pools.fats, 1, "Castanhas"),
                ],
                diet,
                SNACK_SHARE,
            ),
        ],
    };

    MealPlan {
        breakfast,
        lunch,
        dinner,
        snacks,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::{ActivityLevel, FoodCategory, RestrictionType};

    fn food(name: &str, category: FoodCategory) -> FoodItem {
        FoodItem {
            name: name.to_string(),
            category,
            calories_per_100g: 100.0,
            protein_per_100g: 10.0,
            carbs_per_100g: 10.0,
            fat_per_100g: 5.0,
        }
    }

    fn restriction(description: &str) -> Restriction {
        Restriction {
            restriction_type: RestrictionType::Intolerance,
            description: description.to_string(),
        }
    }

    fn sample_diet() -> DietResult {
        DietResult {
            calories: 3217,
            macros: Macros {
                protein_g: 160,
                carbs_g: 443,
                fat_g: 89,
            },
            activity_level: ActivityLevel::ModeratelyActive,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_filter_excludes_substring_matches() {
        let milk = food("Leite desnatado", FoodCategory::Dairy);
        let chicken = food("Peito de frango", FoodCategory::Protein);
        let foods = vec![&milk, &chicken];

        let filtered = filter_by_restrictions(&foods, &[restriction("leite")]);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Peito de frango");
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let milk = food("LEITE Desnatado", FoodCategory::Dairy);
        let foods = vec![&milk];

        assert!(filter_by_restrictions(&foods, &[restriction("Leite")]).is_empty());
    }

    #[test]
    fn test_filter_is_a_subset() {
        let a = food("Arroz branco", FoodCategory::Carb);
        let b = food("Aveia", FoodCategory::Carb);
        let c = food("Abacate", FoodCategory::Fat);
        let foods = vec![&a, &b, &c];

        let filtered = filter_by_restrictions(&foods, &[restriction("av")]);

        for kept in &filtered {
            assert!(foods.iter().any(|f| f.name == kept.name));
            assert!(!kept.name.to_lowercase().contains("av"));
        }
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_without_restrictions_keeps_everything() {
        let a = food("Banana", FoodCategory::Fruit);
        let foods = vec![&a];
        assert_eq!(filter_by_restrictions(&foods, &[]).len(), 1);
    }

    #[test]
    fn test_empty_pools_fall_back_to_literals() {
        let plan = build_meal_suggestions(&sample_diet(), &SuggestionPools::default());

        assert_eq!(
            plan.breakfast.options[0].foods,
            vec!["Ovos mexidos", "Pão integral", "Banana"]
        );
        assert_eq!(
            plan.dinner.options[1].foods,
            vec!["Tofu", "Quinoa", "Cenoura"]
        );
        assert_eq!(
            plan.snacks.options[1].foods,
            vec!["Iogurte grego", "Morango", "Castanhas"]
        );
    }

    #[test]
    fn test_selection_is_positional() {
        let p0 = food("Frango", FoodCategory::Protein);
        let p1 = food("Salmão", FoodCategory::Protein);
        let c: Vec<FoodItem> = (0..6)
            .map(|i| food(&format!("Carbo {}", i), FoodCategory::Carb))
            .collect();
        let pools = SuggestionPools {
            proteins: vec![&p0, &p1],
            carbs: c.iter().collect(),
            ..Default::default()
        };

        let plan = build_meal_suggestions(&sample_diet(), &pools);

        // breakfast option 1 takes protein[0] and carb[0]
        assert_eq!(plan.breakfast.options[0].foods[0], "Frango");
        assert_eq!(plan.breakfast.options[0].foods[1], "Carbo 0");
        // lunch option 1 takes protein[1] and carb[2]
        assert_eq!(plan.lunch.options[0].foods[0], "Salmão");
        assert_eq!(plan.lunch.options[0].foods[1], "Carbo 2");
        // dinner option 1 ran out of proteins (index 3) and falls back
        assert_eq!(plan.dinner.options[0].foods[0], "Carne magra");
        assert_eq!(plan.dinner.options[0].foods[1], "Carbo 4");
    }

    #[test]
    fn test_meal_shares_round_from_daily_totals() {
        let plan = build_meal_suggestions(&sample_diet(), &SuggestionPools::default());

        let breakfast = &plan.breakfast.options[0];
        assert_eq!(breakfast.calories, 804); // round(3217 * 0.25)
        assert_eq!(breakfast.macros.protein_g, 32); // round(160 * 0.20)
        assert_eq!(breakfast.macros.carbs_g, 111); // round(443 * 0.25)
        assert_eq!(breakfast.macros.fat_g, 18); // round(89 * 0.20)

        let lunch = &plan.lunch.options[1];
        assert_eq!(lunch.calories, 1126); // round(3217 * 0.35)
        assert_eq!(lunch.macros.protein_g, 64); // round(160 * 0.40)

        let snack = &plan.snacks.options[0];
        assert_eq!(snack.calories, 322); // round(3217 * 0.10)
    }

    #[test]
    fn test_plan_is_idempotent() {
        let p = food("Frango", FoodCategory::Protein);
        let pools = SuggestionPools {
            proteins: vec![&p],
            ..Default::default()
        };
        let diet = sample_diet();

        let first = build_meal_suggestions(&diet, &pools);
        let second = build_meal_suggestions(&diet, &pools);

        for (a, b) in first.meals().iter().zip(second.meals().iter()) {
            assert_eq!(a.name, b.name);
            for (oa, ob) in a.options.iter().zip(b.options.iter()) {
                assert_eq!(oa.foods, ob.foods);
                assert_eq!(oa.calories, ob.calories);
            }
        }
    }
}
