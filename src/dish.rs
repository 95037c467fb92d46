//! Dish classification and decomposition.
//!
//! A free-text dish name (Finnish or English) is mapped to a [`DishType`] by
//! ordered keyword rules; the type selects a component template whose mass
//! shares are normalized per dish instance.

use crate::factors::FactorTables;
use crate::models::{ComponentWeight, DishBreakdown, DishComponent, DishType};

/// Classification rules, evaluated top to bottom. First match wins.
///
/// Dish-format words come before protein words, and proteins are ordered
/// from most to least emission-intensive.
const DISH_RULES: &[(DishType, &[&str])] = &[
    (DishType::Soup, &["keitto", "soup"]),
    (DishType::Casserole, &["laatikko", "kiusaus", "gratin"]),
    (DishType::Salad, &["salaatti", "salad"]),
    (DishType::PastaDish, &["pasta", "makaroni", "spagetti"]),
    (DishType::MeatMain, &["nauda", "beef", "pihvi"]),
    (DishType::FishMain, &["kala", "lohi", "fish", "salmon"]),
    (
        DishType::PoultryMain,
        &["broiler", "kana", "kalkku", "chicken", "turkey"],
    ),
    (
        DishType::VegetarianMain,
        &["kasvi", "tofu", "kikherne", "papu", "sieni", "vegetarian"],
    ),
];

/// Classifies a dish name by keyword substring matching.
///
/// Matching is case-insensitive. Names with no recognized keyword fall back
/// to [`DishType::VegetarianMain`], so this never fails.
///
/// # Example
///
/// ```
/// use foodco2::dish::identify_dish_type;
/// use foodco2::models::DishType;
///
/// assert_eq!(identify_dish_type("Lohikeitto"), DishType::Soup);
/// assert_eq!(identify_dish_type("Broileripasta"), DishType::PastaDish);
/// assert_eq!(identify_dish_type("Pizza"), DishType::VegetarianMain);
/// ```
pub fn identify_dish_type(dish_name: &str) -> DishType {
    let name = dish_name.to_lowercase();
    DISH_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| name.contains(k)))
        .map(|(dish_type, _)| *dish_type)
        .unwrap_or(DishType::VegetarianMain)
}

/// Clamps negative or non-finite weights to zero.
pub(crate) fn sanitize_weight(dish_name: &str, weight_kg: f64) -> f64 {
    if weight_kg.is_finite() && weight_kg >= 0.0 {
        weight_kg
    } else {
        tracing::warn!(dish = dish_name, weight_kg, "invalid dish weight, using 0 kg");
        0.0
    }
}

/// Clamps negative or non-finite mass shares to zero.
fn sanitize_share(component: &DishComponent) -> f64 {
    let share = component.mass_share;
    if share.is_finite() && share >= 0.0 {
        share
    } else {
        tracing::warn!(
            ingredient = %component.ingredient_key,
            mass_share = share,
            "invalid mass share, using 0"
        );
        0.0
    }
}

/// Rescales shares so they sum to 1.0. Shares summing to zero are split evenly.
fn normalize_components(components: &[DishComponent]) -> Vec<DishComponent> {
    let shares: Vec<f64> = components.iter().map(sanitize_share).collect();
    let total: f64 = shares.iter().sum();
    let even = 1.0 / components.len().max(1) as f64;

    components
        .iter()
        .zip(shares)
        .map(|(c, share)| DishComponent {
            mass_share: if total > 0.0 { share / total } else { even },
            ..c.clone()
        })
        .collect()
}

/// Decomposes a dish into components with normalized mass shares.
///
/// If `custom_components` is given it is used as the component set and the
/// template lookup is skipped; otherwise the dish is classified with
/// [`identify_dish_type`] and the matching template is used.
///
/// # Example
///
/// ```
/// use foodco2::dish::create_dish_breakdown;
/// use foodco2::factors::FactorTables;
/// use foodco2::models::DishType;
///
/// let breakdown = create_dish_breakdown(FactorTables::embedded(), "Naudanlihapata", 2.5, None);
/// assert_eq!(breakdown.dish_type, DishType::MeatMain);
/// let total: f64 = breakdown.components.iter().map(|c| c.mass_share).sum();
/// assert!((total - 1.0).abs() < 1e-9);
/// ```
pub fn create_dish_breakdown(
    tables: &FactorTables,
    dish_name: &str,
    total_weight_kg: f64,
    custom_components: Option<&[DishComponent]>,
) -> DishBreakdown {
    let dish_type = identify_dish_type(dish_name);
    let components = custom_components.unwrap_or_else(|| tables.template_for(dish_type));

    DishBreakdown {
        dish_name: dish_name.to_string(),
        dish_type,
        total_weight_kg: sanitize_weight(dish_name, total_weight_kg),
        components: normalize_components(components),
    }
}

/// Decomposes a dish using the template of an explicitly chosen type.
pub fn create_dish_breakdown_for_type(
    tables: &FactorTables,
    dish_name: &str,
    dish_type: DishType,
    total_weight_kg: f64,
) -> DishBreakdown {
    DishBreakdown {
        dish_name: dish_name.to_string(),
        dish_type,
        total_weight_kg: sanitize_weight(dish_name, total_weight_kg),
        components: normalize_components(tables.template_for(dish_type)),
    }
}

/// Cooked mass of each component, in breakdown order.
pub fn get_component_weights(breakdown: &DishBreakdown) -> Vec<ComponentWeight> {
    breakdown
        .components
        .iter()
        .map(|c| ComponentWeight {
            ingredient_key: c.ingredient_key.clone(),
            ingredient_name: c.ingredient_name.clone(),
            category: c.category,
            weight_kg: breakdown.total_weight_kg * c.mass_share,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IngredientCategory;

    #[test]
    fn test_normalize_zero_shares_splits_evenly() {
        let components = vec![
            DishComponent::new("a", "A", IngredientCategory::Other, 0.0),
            DishComponent::new("b", "B", IngredientCategory::Other, 0.0),
        ];
        let normalized = normalize_components(&components);
        assert_eq!(normalized[0].mass_share, 0.5);
        assert_eq!(normalized[1].mass_share, 0.5);
    }

    #[test]
    fn test_normalize_clamps_invalid_shares() {
        let components = vec![
            DishComponent::new("a", "A", IngredientCategory::Other, 2.0),
            DishComponent::new("b", "B", IngredientCategory::Other, -1.0),
            DishComponent::new("c", "C", IngredientCategory::Other, f64::INFINITY),
            DishComponent::new("d", "D", IngredientCategory::Other, f64::NAN),
        ];
        let normalized = normalize_components(&components);
        assert_eq!(normalized[0].mass_share, 1.0);
        assert!(normalized[1..].iter().all(|c| c.mass_share == 0.0));
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize_components(&[]).is_empty());
    }

    #[test]
    fn test_sanitize_weight() {
        assert_eq!(sanitize_weight("x", 1.5), 1.5);
        assert_eq!(sanitize_weight("x", -2.0), 0.0);
        assert_eq!(sanitize_weight("x", f64::NAN), 0.0);
        assert_eq!(sanitize_weight("x", f64::INFINITY), 0.0);
    }

    #[test]
    fn test_rules_cover_every_keyword_once() {
        let mut seen = std::collections::HashSet::new();
        for (_, keywords) in DISH_RULES {
            for k in keywords.iter() {
                assert!(seen.insert(*k), "duplicate keyword {}", k);
            }
        }
    }
}
