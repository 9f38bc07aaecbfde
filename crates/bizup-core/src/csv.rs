// ============================================================================
// Bizup Core - Menu CSV Parser
// File: crates/bizup-core/src/csv.rs
// ============================================================================
//! Line format: `<menu>,<ingredient>-<qty>,<ingredient>-<qty>,...`
//!
//! The quantity follows the last hyphen, so ingredient names may contain
//! hyphens. Malformed fields and lines are logged and skipped; parsing
//! never fails.

use tracing::{debug, warn};

use crate::domain::{IngredientRequirement, MenuDefinition};

pub fn parse_menu_csv(content: &str) -> Vec<MenuDefinition> {
    let mut menus = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 2 {
            warn!(line = line_no, "Menu line has no ingredient fields, skipping");
            continue;
        }

        let name = fields[0];
        let ingredients: Vec<IngredientRequirement> = fields[1..]
            .iter()
            .filter(|field| !field.is_empty())
            .filter_map(|field| parse_ingredient(field, line_no))
            .collect();

        if ingredients.is_empty() {
            warn!(line = line_no, menu = %name, "No valid ingredients, menu dropped");
            continue;
        }

        debug!(menu = %name, ingredients = ingredients.len(), "Parsed menu line");
        menus.push(MenuDefinition {
            name: name.to_string(),
            ingredients,
        });
    }

    menus
}

fn parse_ingredient(field: &str, line_no: usize) -> Option<IngredientRequirement> {
    let Some((name, quantity)) = field.rsplit_once('-') else {
        warn!(line = line_no, field, "Ingredient field has no hyphen, skipping");
        return None;
    };

    let quantity = match quantity.trim().parse::<f64>() {
        Ok(q) if q.is_finite() => q,
        _ => {
            warn!(line = line_no, field, "Ingredient quantity is not a number, skipping");
            return None;
        }
    };

    let name = name.trim();
    if name.is_empty() {
        warn!(line = line_no, field, "Ingredient name is empty, skipping");
        return None;
    }

    Some(IngredientRequirement::new(name, quantity))
}
