use crate::models::{FoodCategory, FoodItem};

fn item(
    name: &str,
    category: FoodCategory,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
) -> FoodItem {
    FoodItem {
        name: name.to_string(),
        category,
        calories_per_100g: calories,
        protein_per_100g: protein,
        carbs_per_100g: carbs,
        fat_per_100g: fat,
    }
}

/// The built-in starter catalog written by `init-catalog`.
///
/// Order matters downstream: suggestion picks are positional per category.
pub fn default_catalog() -> Vec<FoodItem> {
    use FoodCategory::{Carb, Fat, Fruit, Protein, Vegetable};

    vec![
        // Proteínas
        item("Peito de frango", Protein, 165.0, 31.0, 0.0, 3.6),
        item("Carne bovina (acém)", Protein, 250.0, 26.0, 0.0, 17.0),
        item("Salmão", Protein, 208.0, 20.0, 0.0, 13.0),
        item("Atum em conserva", Protein, 116.0, 25.0, 0.0, 1.0),
        item("Ovos", Protein, 155.0, 13.0, 1.0, 11.0),
        item("Tofu", Protein, 76.0, 8.0, 2.0, 4.5),
        item("Whey Protein", Protein, 400.0, 80.0, 10.0, 3.0),
        item("Feijão preto", Protein, 132.0, 8.9, 23.7, 0.5),
        item("Lentilha", Protein, 116.0, 9.0, 20.0, 0.4),
        item("Grão de bico", Protein, 164.0, 8.9, 27.4, 2.6),
        // Carboidratos
        item("Arroz branco", Carb, 130.0, 2.7, 28.0, 0.3),
        item("Arroz integral", Carb, 111.0, 2.6, 23.0, 0.9),
        item("Batata doce", Carb, 86.0, 1.6, 20.0, 0.1),
        item("Macarrão integral", Carb, 158.0, 5.5, 30.0, 1.3),
        item("Pão integral", Carb, 247.0, 13.0, 41.0, 3.6),
        item("Aveia", Carb, 389.0, 16.9, 66.3, 6.9),
        item("Quinoa", Carb, 120.0, 4.4, 21.3, 1.9),
        item("Tapioca", Carb, 358.0, 0.5, 88.0, 0.3),
        item("Mandioca", Carb, 159.0, 1.4, 38.0, 0.3),
        item("Batata inglesa", Carb, 77.0, 2.0, 17.0, 0.1),
        // Gorduras
        item("Azeite de oliva", Fat, 884.0, 0.0, 0.0, 100.0),
        item("Abacate", Fat, 160.0, 2.0, 8.5, 14.7),
        item("Castanha do Pará", Fat, 656.0, 14.5, 12.0, 67.0),
        item("Amêndoas", Fat, 576.0, 21.0, 22.0, 49.0),
        item("Óleo de coco", Fat, 862.0, 0.0, 0.0, 100.0),
        // Vegetais
        item("Brócolis", Vegetable, 34.0, 2.8, 7.0, 0.4),
        item("Espinafre", Vegetable, 23.0, 2.9, 3.6, 0.4),
        item("Alface", Vegetable, 15.0, 1.4, 2.9, 0.2),
        item("Tomate", Vegetable, 18.0, 0.9, 3.9, 0.2),
        item("Cenoura", Vegetable, 41.0, 0.9, 10.0, 0.2),
        item("Abobrinha", Vegetable, 17.0, 1.2, 3.1, 0.3),
        item("Pepino", Vegetable, 15.0, 0.7, 3.6, 0.1),
        item("Cebola", Vegetable, 40.0, 1.1, 9.3, 0.1),
        // Frutas
        item("Banana", Fruit, 89.0, 1.1, 22.8, 0.3),
        item("Maçã", Fruit, 52.0, 0.3, 14.0, 0.2),
        item("Laranja", Fruit, 47.0, 0.9, 12.0, 0.1),
        item("Morango", Fruit, 32.0, 0.7, 7.7, 0.3),
        item("Abacaxi", Fruit, 50.0, 0.5, 13.0, 0.1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_size_and_validity() {
        let foods = default_catalog();
        assert_eq!(foods.len(), 38);
        assert!(foods.iter().all(FoodItem::is_valid));
    }

    #[test]
    fn test_seed_category_counts() {
        let foods = default_catalog();
        let count = |cat: FoodCategory| foods.iter().filter(|f| f.category == cat).count();

        assert_eq!(count(FoodCategory::Protein), 10);
        assert_eq!(count(FoodCategory::Carb), 10);
        assert_eq!(count(FoodCategory::Fat), 5);
        assert_eq!(count(FoodCategory::Vegetable), 8);
        assert_eq!(count(FoodCategory::Fruit), 5);
    }

    #[test]
    fn test_seed_has_no_duplicate_names() {
        let foods = default_catalog();
        let mut keys: Vec<String> = foods.iter().map(FoodItem::key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), foods.len());
    }
}
