//! CO2e calculation algorithms.
//!
//! This module implements the two estimation paths and the batch aggregation
//! built on top of them:
//!
//! 1. **Component-based**: the dish is decomposed into ingredient components,
//!    each component's cooked mass is converted back to raw mass and multiplied
//!    by that ingredient's emission factor.
//!
//! 2. **Simplified**: a single pre-known blended factor is applied to the
//!    whole dish mass.
//!
//! All functions are total. Unknown ingredients degrade to the category
//! average and then to 0; zero denominators yield 0 instead of NaN.

use crate::dish::{
    create_dish_breakdown, create_dish_breakdown_for_type, get_component_weights, sanitize_weight,
};
use crate::factors::FactorTables;
use crate::models::{
    AggregateResult, CalculationMethod, Co2CalculationResult, ComponentEmission, DishBreakdown,
    DishComponent, DishType, Donation, DonationMixShare, ImpactComparison,
};

/// Computes emissions for an already decomposed dish.
///
/// Percentages are filled in once the dish total is known; they are all 0
/// when the total is 0.
pub fn calculate_breakdown_emissions(
    tables: &FactorTables,
    breakdown: &DishBreakdown,
) -> Co2CalculationResult {
    let mut emissions: Vec<ComponentEmission> = get_component_weights(breakdown)
        .into_iter()
        .map(|component| {
            let raw_weight_kg =
                tables.convert_cooked_to_raw(component.weight_kg, &component.ingredient_key);
            let factor =
                tables.resolve_emission_factor(&component.ingredient_key, component.category);
            ComponentEmission {
                component_name: component.ingredient_name,
                cooked_weight_kg: component.weight_kg,
                raw_weight_kg,
                emission_factor_kg_co2e_per_kg: factor,
                co2e_kg: raw_weight_kg * factor,
                percentage: 0.0,
            }
        })
        .collect();

    let total_co2e_kg: f64 = emissions.iter().map(|e| e.co2e_kg).sum();
    if total_co2e_kg > 0.0 {
        for emission in &mut emissions {
            emission.percentage = emission.co2e_kg / total_co2e_kg * 100.0;
        }
    }

    Co2CalculationResult {
        total_co2e_kg,
        breakdown: emissions,
        method: CalculationMethod::ComponentBased,
        dish_name: breakdown.dish_name.clone(),
        total_weight_kg: breakdown.total_weight_kg,
    }
}

/// Estimates a dish's CO2e by decomposing it into ingredient components.
///
/// # Arguments
///
/// * `tables` - Emission, conversion and template tables
/// * `dish_name` - Free-text dish name used for classification
/// * `total_weight_kg` - Cooked mass of the dish
/// * `custom_components` - Optional explicit component set (skips classification)
///
/// # Example
///
/// ```
/// use foodco2::calculator::calculate_co2_component_based;
/// use foodco2::factors::FactorTables;
///
/// let result = calculate_co2_component_based(FactorTables::embedded(), "Naudanlihapata", 2.5, None);
/// let beef = &result.breakdown[0];
/// assert!((beef.cooked_weight_kg - 1.0).abs() < 1e-9);
/// assert!((beef.co2e_kg - 36.0).abs() < 1e-9);
/// ```
pub fn calculate_co2_component_based(
    tables: &FactorTables,
    dish_name: &str,
    total_weight_kg: f64,
    custom_components: Option<&[DishComponent]>,
) -> Co2CalculationResult {
    let breakdown = create_dish_breakdown(tables, dish_name, total_weight_kg, custom_components);
    calculate_breakdown_emissions(tables, &breakdown)
}

/// Component-based estimate using the template of an explicitly chosen dish type.
pub fn calculate_co2_for_dish_type(
    tables: &FactorTables,
    dish_name: &str,
    dish_type: DishType,
    total_weight_kg: f64,
) -> Co2CalculationResult {
    let breakdown = create_dish_breakdown_for_type(tables, dish_name, dish_type, total_weight_kg);
    calculate_breakdown_emissions(tables, &breakdown)
}

/// Applies one blended factor to the whole dish mass.
///
/// The result has a single component covering the whole dish at 100 %.
/// Cooked and raw mass are treated as equal.
pub fn calculate_co2_simplified(
    dish_name: &str,
    total_weight_kg: f64,
    emission_factor_kg_co2e_per_kg: f64,
) -> Co2CalculationResult {
    let total_weight_kg = sanitize_weight(dish_name, total_weight_kg);
    let co2e_kg = total_weight_kg * emission_factor_kg_co2e_per_kg;

    Co2CalculationResult {
        total_co2e_kg: co2e_kg,
        breakdown: vec![ComponentEmission {
            component_name: dish_name.to_string(),
            cooked_weight_kg: total_weight_kg,
            raw_weight_kg: total_weight_kg,
            emission_factor_kg_co2e_per_kg,
            co2e_kg,
            percentage: 100.0,
        }],
        method: CalculationMethod::Simplified,
        dish_name: dish_name.to_string(),
        total_weight_kg,
    }
}

/// Estimates a batch of donations and sums the results.
///
/// Each donation goes through the component-based path when
/// `use_component_based` is true or it carries no `emission_factor`;
/// otherwise its factor is applied via [`calculate_co2_simplified`].
///
/// # Example
///
/// ```
/// use foodco2::calculator::calculate_total_co2_saved;
/// use foodco2::factors::FactorTables;
/// use foodco2::models::Donation;
///
/// let donations = vec![
///     Donation::new("Lohikeitto", 3.0),
///     Donation::new("Sekalainen", 2.0).with_emission_factor(1.5),
/// ];
/// let total = calculate_total_co2_saved(FactorTables::embedded(), &donations, false);
/// assert_eq!(total.donation_count, 2);
/// assert_eq!(total.total_weight_kg, 5.0);
/// ```
pub fn calculate_total_co2_saved(
    tables: &FactorTables,
    donations: &[Donation],
    use_component_based: bool,
) -> AggregateResult {
    let results: Vec<Co2CalculationResult> = donations
        .iter()
        .map(|donation| match donation.emission_factor {
            Some(factor) if !use_component_based => {
                calculate_co2_simplified(&donation.dish_name, donation.weight_kg, factor)
            }
            _ => calculate_co2_component_based(
                tables,
                &donation.dish_name,
                donation.weight_kg,
                donation.custom_components.as_deref(),
            ),
        })
        .collect();

    let total_co2e_kg: f64 = results.iter().map(|r| r.total_co2e_kg).sum();
    let total_weight_kg: f64 = results.iter().map(|r| r.total_weight_kg).sum();
    let average_co2_per_kg = if total_weight_kg > 0.0 {
        total_co2e_kg / total_weight_kg
    } else {
        0.0
    };

    AggregateResult {
        total_co2e_kg,
        total_weight_kg,
        donation_count: donations.len(),
        average_co2_per_kg,
        results,
    }
}

/// Compares the raw-ingredient emissions of two ingredients at the same mass.
///
/// Unknown keys count as 0 kg CO2e. Invalid weights count as 0 kg.
/// `savings_percent` is 0 when the reference emits nothing.
///
/// # Example
///
/// ```
/// use foodco2::calculator::compare_co2_impact;
/// use foodco2::factors::FactorTables;
///
/// let cmp = compare_co2_impact(FactorTables::embedded(), "beef", "chickpeas", 1.0);
/// assert!((cmp.savings_kg - 26.2).abs() < 1e-9);
/// ```
pub fn compare_co2_impact(
    tables: &FactorTables,
    reference_key: &str,
    alternative_key: &str,
    weight_kg: f64,
) -> ImpactComparison {
    let weight_kg = sanitize_weight(reference_key, weight_kg);
    let factor_of = |key: &str| {
        tables
            .get_emission_factor(key)
            .map_or(0.0, |f| f.kg_co2e_per_kg)
    };
    let reference_co2 = factor_of(reference_key) * weight_kg;
    let alternative_co2 = factor_of(alternative_key) * weight_kg;
    let savings_kg = reference_co2 - alternative_co2;
    let savings_percent = if reference_co2 == 0.0 {
        0.0
    } else {
        savings_kg / reference_co2 * 100.0
    };

    ImpactComparison {
        reference_co2,
        alternative_co2,
        savings_kg,
        savings_percent,
    }
}

/// Splits a donated-mass total across a mix of representative dishes and
/// estimates it component-based.
///
/// Shares are relative; they are divided by their sum. An empty mix or one
/// whose shares sum to zero yields an all-zero aggregate.
pub fn estimate_donation_mix(
    tables: &FactorTables,
    total_donations_kg: f64,
    mix: &[DonationMixShare],
) -> AggregateResult {
    let share_sum: f64 = mix.iter().map(|m| m.share.max(0.0)).sum();
    if share_sum <= 0.0 {
        return calculate_total_co2_saved(tables, &[], true);
    }

    let donations: Vec<Donation> = mix
        .iter()
        .map(|m| Donation::new(&m.dish_name, total_donations_kg * m.share.max(0.0) / share_sum))
        .collect();
    calculate_total_co2_saved(tables, &donations, true)
}
