// ============================================================================
// Bizup Core - Menu Aggregate
// File: crates/bizup-core/src/domain/menu.rs
// Description: Sellable menu and the ingredient rows it owns
// ============================================================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Unit recorded for every ingredient parsed from a menu CSV.
pub const DEFAULT_INGREDIENT_UNIT: &str = "ml";

/// Quantity of one inventory item consumed per unit sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRequirement {
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: String,
}

impl IngredientRequirement {
    pub fn new(ingredient_name: impl Into<String>, quantity: f64) -> Self {
        Self {
            ingredient_name: ingredient_name.into(),
            quantity,
            unit: DEFAULT_INGREDIENT_UNIT.to_string(),
        }
    }
}

/// Parsed menu line, consumed by reconciliation and never stored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuDefinition {
    pub name: String,
    pub ingredients: Vec<IngredientRequirement>,
}

/// Ingredient row owned by a [`Menu`]. `id` is `None` until persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuIngredient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: String,
}

impl From<&IngredientRequirement> for MenuIngredient {
    fn from(req: &IngredientRequirement) -> Self {
        Self {
            id: None,
            ingredient_name: req.ingredient_name.clone(),
            quantity: req.quantity,
            unit: req.unit.clone(),
        }
    }
}

/// Menu aggregate. Deleting it deletes its ingredient rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: i64,
    pub name: String,
    pub ingredients: Vec<MenuIngredient>,
}

impl Menu {
    /// Additive merge. The N-th requirement with a given ingredient name
    /// overwrites quantity/unit of the N-th row with that name; requirements
    /// without such a row are appended. Rows absent from `requirements` are
    /// kept.
    pub fn merge_requirements(&mut self, requirements: &[IngredientRequirement]) {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for req in requirements {
            let occurrence = seen.entry(req.ingredient_name.as_str()).or_insert(0);
            let nth = *occurrence;
            *occurrence += 1;

            match self
                .ingredients
                .iter_mut()
                .filter(|row| row.ingredient_name == req.ingredient_name)
                .nth(nth)
            {
                Some(row) => {
                    row.quantity = req.quantity;
                    row.unit = req.unit.clone();
                }
                None => self.ingredients.push(MenuIngredient::from(req)),
            }
        }
    }

    pub fn ingredient(&self, name: &str) -> Option<&MenuIngredient> {
        self.ingredients.iter().find(|row| row.ingredient_name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latte() -> Menu {
        Menu {
            id: 1,
            name: "Latte".to_string(),
            ingredients: vec![
                MenuIngredient {
                    id: Some(10),
                    ingredient_name: "Milk".to_string(),
                    quantity: 200.0,
                    unit: "ml".to_string(),
                },
                MenuIngredient {
                    id: Some(11),
                    ingredient_name: "Espresso".to_string(),
                    quantity: 30.0,
                    unit: "ml".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_merge_updates_appends_and_keeps() {
        let mut menu = latte();
        menu.merge_requirements(&[
            IngredientRequirement::new("Milk", 300.0),
            IngredientRequirement::new("Sugar", 5.0),
        ]);

        assert_eq!(menu.ingredients.len(), 3);
        let milk = menu.ingredient("Milk").unwrap();
        assert_eq!(milk.quantity, 300.0);
        assert_eq!(milk.id, Some(10));
        assert_eq!(menu.ingredient("Espresso").unwrap().quantity, 30.0);
        let sugar = menu.ingredient("Sugar").unwrap();
        assert_eq!(sugar.id, None);
        assert_eq!(sugar.unit, "ml");
    }

    #[test]
    fn test_merge_repeated_ingredient_pairs_rows_in_order() {
        let mut menu = Menu {
            id: 2,
            name: "Latte".to_string(),
            ingredients: Vec::new(),
        };
        let requirements = [
            IngredientRequirement::new("Milk", 10.0),
            IngredientRequirement::new("Milk", 20.0),
        ];

        menu.merge_requirements(&requirements);
        let before = menu.clone();
        menu.merge_requirements(&requirements);
        assert_eq!(menu, before);

        menu.merge_requirements(&[
            IngredientRequirement::new("Milk", 15.0),
            IngredientRequirement::new("Milk", 25.0),
            IngredientRequirement::new("Milk", 5.0),
        ]);
        let quantities: Vec<f64> = menu.ingredients.iter().map(|row| row.quantity).collect();
        assert_eq!(quantities, vec![15.0, 25.0, 5.0]);
    }

    #[test]
    fn test_merge_matches_names_exactly() {
        let mut menu = latte();
        menu.merge_requirements(&[IngredientRequirement::new("milk", 1.0)]);
        assert_eq!(menu.ingredients.len(), 3);
        assert_eq!(menu.ingredient("Milk").unwrap().quantity, 200.0);
    }
}
