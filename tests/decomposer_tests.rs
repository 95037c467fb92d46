//! Tests for dish decomposition and component weights.

use foodco2::dish::{create_dish_breakdown, create_dish_breakdown_for_type, get_component_weights};
use foodco2::factors::FactorTables;
use foodco2::models::{DishComponent, DishType, IngredientCategory};

const EPS: f64 = 1e-9;

fn share_sum(components: &[DishComponent]) -> f64 {
    components.iter().map(|c| c.mass_share).sum()
}

#[test]
fn test_template_shares_normalized_for_every_type() {
    let tables = FactorTables::embedded();
    for dish_type in DishType::ALL {
        let breakdown = create_dish_breakdown_for_type(tables, "x", dish_type, 1.0);
        assert!(!breakdown.components.is_empty(), "{}", dish_type);
        assert!((share_sum(&breakdown.components) - 1.0).abs() < EPS, "{}", dish_type);
    }
}

#[test]
fn test_unnormalized_template_is_rescaled() {
    // casserole template shares sum to 0.95
    let tables = FactorTables::embedded();
    let raw_sum = share_sum(tables.template_for(DishType::Casserole));
    assert!((raw_sum - 0.95).abs() < EPS);

    let breakdown = create_dish_breakdown(tables, "Makaronilaatikko", 1.0, None);
    assert_eq!(breakdown.dish_type, DishType::Casserole);
    assert_eq!(breakdown.components[0].ingredient_key, "minced_beef");
    assert!((breakdown.components[0].mass_share - 0.20 / 0.95).abs() < EPS);
    assert!((share_sum(&breakdown.components) - 1.0).abs() < EPS);
}

#[test]
fn test_meat_main_breakdown() {
    let tables = FactorTables::embedded();
    let breakdown = create_dish_breakdown(tables, "Naudanlihapata", 2.5, None);

    assert_eq!(breakdown.dish_name, "Naudanlihapata");
    assert_eq!(breakdown.dish_type, DishType::MeatMain);
    assert_eq!(breakdown.total_weight_kg, 2.5);
    let keys: Vec<&str> = breakdown
        .components
        .iter()
        .map(|c| c.ingredient_key.as_str())
        .collect();
    assert_eq!(keys, vec!["beef", "potato", "carrot", "rapeseed_oil"]);
    assert!((breakdown.components[0].mass_share - 0.40).abs() < EPS);
}

#[test]
fn test_custom_components_override_template() {
    let tables = FactorTables::embedded();
    let custom = vec![
        DishComponent::new("salmon", "Lohi", IngredientCategory::Fish, 3.0),
        DishComponent::new("rice", "Riisi", IngredientCategory::Grains, 1.0),
    ];
    // the name alone would classify as meat_main
    let breakdown = create_dish_breakdown(tables, "Naudanliha", 2.0, Some(custom.as_slice()));

    assert_eq!(breakdown.components.len(), 2);
    assert_eq!(breakdown.components[0].ingredient_key, "salmon");
    assert!((breakdown.components[0].mass_share - 0.75).abs() < EPS);
    assert!((breakdown.components[1].mass_share - 0.25).abs() < EPS);
}

#[test]
fn test_invalid_custom_shares_clamped() {
    let tables = FactorTables::embedded();
    let negative = vec![
        DishComponent::new("beef", "Naudanliha", IngredientCategory::Beef, 2.0),
        DishComponent::new("potato", "Peruna", IngredientCategory::Vegetables, -1.0),
    ];
    let breakdown = create_dish_breakdown(tables, "Pata", 1.0, Some(negative.as_slice()));
    let weights: Vec<f64> = get_component_weights(&breakdown).iter().map(|w| w.weight_kg).collect();
    assert_eq!(weights, vec![1.0, 0.0]);

    let infinite = vec![
        DishComponent::new("beef", "Naudanliha", IngredientCategory::Beef, f64::INFINITY),
        DishComponent::new("potato", "Peruna", IngredientCategory::Vegetables, 1.0),
    ];
    let breakdown = create_dish_breakdown(tables, "Pata", 1.0, Some(infinite.as_slice()));
    let weights: Vec<f64> = get_component_weights(&breakdown).iter().map(|w| w.weight_kg).collect();
    assert_eq!(weights, vec![0.0, 1.0]);
    assert!((share_sum(&breakdown.components) - 1.0).abs() < EPS);
}

#[test]
fn test_component_weights_conserve_mass() {
    let tables = FactorTables::embedded();
    for name in ["Lohikeitto", "Kinkkukiusaus", "Caesar salad", "Tofuwok", "Pippuripihvi"] {
        for weight in [0.0, 0.3, 2.5, 117.25] {
            let breakdown = create_dish_breakdown(tables, name, weight, None);
            let weights = get_component_weights(&breakdown);
            let total: f64 = weights.iter().map(|w| w.weight_kg).sum();
            assert!((total - weight).abs() < 1e-9 * weight.max(1.0), "{} {}", name, weight);
            assert_eq!(weights.len(), breakdown.components.len());
        }
    }
}

#[test]
fn test_component_weights_preserve_order() {
    let tables = FactorTables::embedded();
    let breakdown = create_dish_breakdown(tables, "Broileri", 2.0, None);
    let weights = get_component_weights(&breakdown);
    for (w, c) in weights.iter().zip(&breakdown.components) {
        assert_eq!(w.ingredient_key, c.ingredient_key);
        assert_eq!(w.category, c.category);
    }
    assert!((weights[0].weight_kg - 0.8).abs() < EPS);
}

#[test]
fn test_zero_weight() {
    let tables = FactorTables::embedded();
    let breakdown = create_dish_breakdown(tables, "Naudanliha", 0.0, None);
    assert!(get_component_weights(&breakdown)
        .iter()
        .all(|w| w.weight_kg == 0.0));
}

#[test]
fn test_negative_weight_clamped() {
    let tables = FactorTables::embedded();
    let breakdown = create_dish_breakdown(tables, "Naudanliha", -3.0, None);
    assert_eq!(breakdown.total_weight_kg, 0.0);
}

#[test]
fn test_empty_custom_components() {
    let tables = FactorTables::embedded();
    let breakdown = create_dish_breakdown(tables, "Tyhjä", 1.0, Some(&[][..]));
    assert!(breakdown.components.is_empty());
    assert!(get_component_weights(&breakdown).is_empty());
}
