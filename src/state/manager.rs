use serde::{Deserialize, Serialize};

use crate::calculator::constants::{
    CARB_POOL_LIMIT, FAT_POOL_LIMIT, FRUIT_POOL_LIMIT, PROTEIN_POOL_LIMIT, VEGETABLE_POOL_LIMIT,
};
use crate::calculator::suggestions::{filter_by_restrictions, SuggestionPools};
use crate::error::{DietError, Result};
use crate::models::{DietResult, FoodCategory, FoodItem, Profile, Restriction};

/// The food catalog: static reference data, read-only to the calculator.
///
/// Insertion order is preserved because suggestion picks are positional.
/// Names are deduplicated case-insensitively; a later duplicate replaces the
/// earlier entry in place.
pub struct Catalog {
    foods: Vec<FoodItem>,
}

impl Catalog {
    pub fn new(foods: Vec<FoodItem>) -> Self {
        let mut deduped: Vec<FoodItem> = Vec::with_capacity(foods.len());
        for food in foods {
            match deduped.iter_mut().find(|f| f.key() == food.key()) {
                Some(existing) => *existing = food,
                None => deduped.push(food),
            }
        }
        Self { foods: deduped }
    }

    /// Look up a food by name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<&FoodItem> {
        let key = name.to_lowercase();
        self.foods.iter().find(|f| f.key() == key)
    }

    /// The first `limit` foods of a category, in catalog order.
    pub fn by_category(&self, category: FoodCategory, limit: usize) -> Vec<&FoodItem> {
        self.foods
            .iter()
            .filter(|f| f.category == category)
            .take(limit)
            .collect()
    }

    /// Category-partitioned, restriction-filtered pools for the suggestion
    /// builder, using the fixed per-category limits.
    pub fn suggestion_pools(&self, restrictions: &[Restriction]) -> SuggestionPools<'_> {
        SuggestionPools {
            proteins: filter_by_restrictions(
                &self.by_category(FoodCategory::Protein, PROTEIN_POOL_LIMIT),
                restrictions,
            ),
            carbs: filter_by_restrictions(
                &self.by_category(FoodCategory::Carb, CARB_POOL_LIMIT),
                restrictions,
            ),
            fats: filter_by_restrictions(
                &self.by_category(FoodCategory::Fat, FAT_POOL_LIMIT),
                restrictions,
            ),
            vegetables: filter_by_restrictions(
                &self.by_category(FoodCategory::Vegetable, VEGETABLE_POOL_LIMIT),
                restrictions,
            ),
            fruits: filter_by_restrictions(
                &self.by_category(FoodCategory::Fruit, FRUIT_POOL_LIMIT),
                restrictions,
            ),
        }
    }

    /// All food names, for fuzzy matching in prompts.
    pub fn names(&self) -> Vec<&str> {
        self.foods.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn all(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn to_foods(&self) -> Vec<FoodItem> {
        self.foods.clone()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

/// Everything persisted per user: profile, restrictions, and the latest
/// diet result. One live diet per user; recalculation overwrites it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserState {
    pub profile: Option<Profile>,

    #[serde(default)]
    pub restrictions: Vec<Restriction>,

    pub diet: Option<DietResult>,
}

impl UserState {
    pub fn require_profile(&self) -> Result<&Profile> {
        self.profile.as_ref().ok_or(DietError::ProfileNotFound)
    }

    pub fn require_diet(&self) -> Result<&DietResult> {
        self.diet.as_ref().ok_or(DietError::DietNotCalculated)
    }

    /// Upsert semantics for the diet result: last write wins.
    pub fn set_diet(&mut self, diet: DietResult) {
        self.diet = Some(diet);
    }
}
