//! Display and formatting utilities for foodco2.
//!
//! This module provides the presentation converters (CO2e to everyday
//! equivalents, kg to a display string) and the terminal rendering used by
//! the command-line interface.

use crate::factors::FactorTables;
use crate::models::{
    AggregateResult, CalculationMethod, Co2CalculationResult, Co2Equivalents, ImpactComparison,
    IngredientCategory,
};

/// kg CO2 emitted per km by an average passenger car.
pub const CAR_KG_CO2_PER_KM: f64 = 0.12;
/// kg CO2 absorbed by one tree in a year.
pub const TREE_KG_CO2_PER_YEAR: f64 = 21.0;
/// kg CO2 per full smartphone charge.
pub const PHONE_CHARGE_KG_CO2: f64 = 0.008;

/// Formats a CO2e mass given in kg to a human-readable string.
///
/// Values of 1000 kg and above are shown in tonnes, values below 1 kg in
/// whole grams, everything else in kilograms. The unit is chosen after
/// rounding, so 999.996 kg prints as 1.00 t.
///
/// # Example
///
/// ```
/// use foodco2::display::format_co2;
///
/// assert_eq!(format_co2(1500.0), "1.50 t CO₂e");
/// assert_eq!(format_co2(12.345), "12.35 kg CO₂e");
/// assert_eq!(format_co2(0.5), "500 g CO₂e");
/// ```
pub fn format_co2(co2_kg: f64) -> String {
    if (co2_kg * 100.0).round() >= 100_000.0 {
        format!("{:.2} t CO₂e", co2_kg / 1000.0)
    } else if (co2_kg * 1000.0).round() >= 1000.0 {
        format!("{:.2} kg CO₂e", co2_kg)
    } else {
        format!("{:.0} g CO₂e", co2_kg * 1000.0)
    }
}

/// Converts a CO2e mass in kg into everyday equivalents.
///
/// Values are not rounded.
pub fn get_co2_equivalents(co2_kg: f64) -> Co2Equivalents {
    Co2Equivalents {
        car_km: co2_kg / CAR_KG_CO2_PER_KM,
        trees_needed: co2_kg / TREE_KG_CO2_PER_YEAR,
        phone_charges: co2_kg / PHONE_CHARGE_KG_CO2,
    }
}

fn print_equivalents(co2_kg: f64) {
    let eq = get_co2_equivalents(co2_kg);
    println!("  Car driving:      {:.0} km", eq.car_km);
    println!("  Tree-years:       {:.1} trees", eq.trees_needed);
    println!("  Phone charges:    {:.0}", eq.phone_charges);
}

/// Prints a single dish estimate with its component breakdown.
pub fn display_result(result: &Co2CalculationResult) {
    println!();
    println!("+================================================================+");
    println!("|                  DISH CO2e ESTIMATE                            |");
    println!("+================================================================+");
    println!();
    println!("  Dish:             {}", result.dish_name);
    println!("  Weight:           {:.2} kg", result.total_weight_kg);
    println!("  Method:           {}", result.method);

    println!();
    println!("[COMPONENTS]");
    println!("----------------------------------------------------------------");
    println!(
        "{:<20} {:>9} {:>9} {:>8} {:>9} {:>6}",
        "Component", "Cooked kg", "Raw kg", "Factor", "CO2e kg", "%"
    );
    println!("----------------------------------------------------------------");
    for c in &result.breakdown {
        println!(
            "{:<20} {:>9.3} {:>9.3} {:>8.2} {:>9.3} {:>6.1}",
            c.component_name,
            c.cooked_weight_kg,
            c.raw_weight_kg,
            c.emission_factor_kg_co2e_per_kg,
            c.co2e_kg,
            c.percentage
        );
    }

    println!();
    println!("[SUMMARY]");
    println!("----------------------------------------------------------------");
    println!("  Total:            {}", format_co2(result.total_co2e_kg));
    print_equivalents(result.total_co2e_kg);
    println!();
}

/// Prints totals for a batch of donations.
pub fn display_aggregate(aggregate: &AggregateResult) {
    println!();
    println!("+================================================================+");
    println!("|                  CO2e SAVED BY DONATIONS                       |");
    println!("+================================================================+");
    println!();
    println!("[DONATIONS]");
    println!("----------------------------------------------------------------");
    println!(
        "{:<28} {:>10} {:>18} {:>6}",
        "Dish", "Weight kg", "CO2e", "Method"
    );
    println!("----------------------------------------------------------------");
    for r in &aggregate.results {
        let method = match r.method {
            CalculationMethod::ComponentBased => "comp",
            CalculationMethod::Simplified => "simp",
        };
        println!(
            "{:<28} {:>10.2} {:>18} {:>6}",
            r.dish_name,
            r.total_weight_kg,
            format_co2(r.total_co2e_kg),
            method
        );
    }

    println!();
    println!("[SUMMARY]");
    println!("----------------------------------------------------------------");
    println!("  Donations:        {}", aggregate.donation_count);
    println!("  Total Weight:     {:.2} kg", aggregate.total_weight_kg);
    println!("  Total CO2e:       {}", format_co2(aggregate.total_co2e_kg));
    println!("  Average:          {:.2} kg CO₂e/kg", aggregate.average_co2_per_kg);
    print_equivalents(aggregate.total_co2e_kg);
    println!();
}

/// Prints a protein comparison.
pub fn display_comparison(reference: &str, alternative: &str, cmp: &ImpactComparison) {
    println!();
    println!("[COMPARISON]");
    println!("----------------------------------------------------------------");
    println!("  {:<16}  {}", reference, format_co2(cmp.reference_co2));
    println!("  {:<16}  {}", alternative, format_co2(cmp.alternative_co2));
    println!("----------------------------------------------------------------");
    println!(
        "  Savings:          {} ({:.1} %)",
        format_co2(cmp.savings_kg),
        cmp.savings_percent
    );
    println!();
}

/// Prints the emission factor table, optionally filtered by category.
pub fn display_factors(tables: &FactorTables, category: Option<IngredientCategory>) {
    println!();
    println!("[EMISSION FACTORS]");
    println!("----------------------------------------------------------------");
    println!(
        "{:<18} {:<20} {:<11} {:>8} {:>6}",
        "Key", "Name", "Category", "kgCO2e", "Conv"
    );
    println!("----------------------------------------------------------------");
    for (key, factor) in tables
        .emission_factors()
        .filter(|(_, f)| category.map_or(true, |c| f.category == c))
    {
        println!(
            "{:<18} {:<20} {:<11} {:>8.2} {:>6.2}",
            key,
            factor.name,
            factor.category,
            factor.kg_co2e_per_kg,
            tables.get_conversion_factor(key)
        );
    }

    if let Some(c) = category {
        println!("----------------------------------------------------------------");
        println!(
            "  Category average ({}): {:.2} kg CO₂e/kg",
            c,
            tables.get_category_average_emission(c)
        );
    }
    println!();
}
