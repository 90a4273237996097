use serde::{Deserialize, Serialize};

/// Catalog category of a food item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodCategory {
    #[serde(rename = "Proteína")]
    Protein,
    #[serde(rename = "Carboidrato")]
    Carb,
    #[serde(rename = "Gordura")]
    Fat,
    #[serde(rename = "Vegetal")]
    Vegetable,
    #[serde(rename = "Fruta")]
    Fruit,
    #[serde(rename = "Laticínio")]
    Dairy,
    #[serde(rename = "Outro")]
    Other,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 7] = [
        FoodCategory::Protein,
        FoodCategory::Carb,
        FoodCategory::Fat,
        FoodCategory::Vegetable,
        FoodCategory::Fruit,
        FoodCategory::Dairy,
        FoodCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FoodCategory::Protein => "Proteína",
            FoodCategory::Carb => "Carboidrato",
            FoodCategory::Fat => "Gordura",
            FoodCategory::Vegetable => "Vegetal",
            FoodCategory::Fruit => "Fruta",
            FoodCategory::Dairy => "Laticínio",
            FoodCategory::Other => "Outro",
        }
    }

    /// Parse a legacy label. Unknown strings land in `Other`.
    pub fn from_label(s: &str) -> Self {
        match s.trim() {
            "Proteína" => FoodCategory::Protein,
            "Carboidrato" => FoodCategory::Carb,
            "Gordura" => FoodCategory::Fat,
            "Vegetal" => FoodCategory::Vegetable,
            "Fruta" => FoodCategory::Fruit,
            "Laticínio" => FoodCategory::Dairy,
            _ => FoodCategory::Other,
        }
    }
}

/// A food catalog entry with nutrition per 100 g.
///
/// Static reference data: the calculator only reads and filters it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,

    pub category: FoodCategory,

    pub calories_per_100g: f64,

    pub protein_per_100g: f64,

    pub carbs_per_100g: f64,

    pub fat_per_100g: f64,
}

impl FoodItem {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Basic validation: non-negative nutrition values.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.calories_per_100g >= 0.0
            && self.protein_per_100g >= 0.0
            && self.carbs_per_100g >= 0.0
            && self.fat_per_100g >= 0.0
    }
}

impl PartialEq for FoodItem {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl Eq for FoodItem {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> FoodItem {
        FoodItem {
            name: "Peito de frango".to_string(),
            category: FoodCategory::Protein,
            calories_per_100g: 165.0,
            protein_per_100g: 31.0,
            carbs_per_100g: 0.0,
            fat_per_100g: 3.6,
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_food().is_valid());

        let mut invalid = sample_food();
        invalid.calories_per_100g = -1.0;
        assert!(!invalid.is_valid());

        let mut unnamed = sample_food();
        unnamed.name = "  ".to_string();
        assert!(!unnamed.is_valid());
    }

    #[test]
    fn test_equality_case_insensitive() {
        let a = sample_food();
        let mut b = sample_food();
        b.name = "PEITO DE FRANGO".to_string();
        assert_eq!(a, b);
    }

    #[test]
    fn test_category_labels_roundtrip() {
        for cat in FoodCategory::ALL {
            assert_eq!(FoodCategory::from_label(cat.label()), cat);
        }
        assert_eq!(FoodCategory::from_label("Bebida"), FoodCategory::Other);
    }

    #[test]
    fn test_json_uses_legacy_category_label() {
        let json = serde_json::to_string(&sample_food()).unwrap();
        assert!(json.contains("\"Proteína\""));
    }
}
