//! WebAssembly bindings for foodco2.
//!
//! This module provides JavaScript-accessible functions for the dashboard.
//! Inputs and outputs are JSON strings; every result is wrapped in
//! `{ "success": bool, "error": string | null, "result": ... }`.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::calculator::{
    calculate_co2_component_based, calculate_co2_for_dish_type, calculate_co2_simplified,
    calculate_total_co2_saved, compare_co2_impact, estimate_donation_mix,
};
use crate::dish::identify_dish_type;
use crate::display::{format_co2, get_co2_equivalents};
use crate::factors::FactorTables;
use crate::models::{DishComponent, DishType, Donation, DonationMixShare};

/// JavaScript-friendly input for a single dish estimate.
#[derive(Debug, Clone, Deserialize)]
pub struct JsDishInput {
    pub dish_name: String,
    pub weight_kg: f64,
    /// Blended factor; selects the simplified method when present
    #[serde(default)]
    pub emission_factor: Option<f64>,
    /// Skips classification and uses this type's template
    #[serde(default)]
    pub dish_type: Option<DishType>,
    #[serde(default)]
    pub custom_components: Option<Vec<DishComponent>>,
}

/// JavaScript-friendly input for a batch of donations.
#[derive(Debug, Clone, Deserialize)]
pub struct JsBatchInput {
    pub donations: Vec<Donation>,
    #[serde(default = "default_true")]
    pub use_component_based: bool,
}

/// JavaScript-friendly input for a protein comparison.
#[derive(Debug, Clone, Deserialize)]
pub struct JsCompareInput {
    pub reference: String,
    pub alternative: String,
    #[serde(default = "default_weight")]
    pub weight_kg: f64,
}

fn default_true() -> bool {
    true
}

fn default_weight() -> f64 {
    1.0
}

/// Response envelope returned to JavaScript.
#[derive(Debug, Clone, Serialize)]
pub struct JsResponse<T: Serialize> {
    pub success: bool,
    pub error: Option<String>,
    pub result: Option<T>,
}

fn ok_json<T: Serialize>(result: T) -> String {
    serde_json::to_string(&JsResponse {
        success: true,
        error: None,
        result: Some(result),
    })
    .unwrap_or_default()
}

fn error_json(message: String) -> String {
    log_warning(&message);
    serde_json::to_string(&JsResponse::<()> {
        success: false,
        error: Some(message),
        result: None,
    })
    .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn log_warning(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
fn log_warning(message: &str) {
    tracing::warn!("{}", message);
}

/// Estimates one dish. See [`JsDishInput`] for the accepted fields.
#[wasm_bindgen]
pub fn calculate_dish(input_json: &str) -> String {
    let input: JsDishInput = match serde_json::from_str(input_json) {
        Ok(i) => i,
        Err(e) => return error_json(format!("Invalid input: {}", e)),
    };

    if input.custom_components.is_some()
        && (input.emission_factor.is_some() || input.dish_type.is_some())
    {
        log_warning("custom_components ignored: emission_factor or dish_type takes precedence");
    }

    let tables = FactorTables::embedded();
    let result = match (input.emission_factor, input.dish_type) {
        (Some(factor), _) => calculate_co2_simplified(&input.dish_name, input.weight_kg, factor),
        (None, Some(dish_type)) => {
            calculate_co2_for_dish_type(tables, &input.dish_name, dish_type, input.weight_kg)
        }
        (None, None) => calculate_co2_component_based(
            tables,
            &input.dish_name,
            input.weight_kg,
            input.custom_components.as_deref(),
        ),
    };
    ok_json(result)
}

/// Estimates a batch of donations and returns the aggregate.
#[wasm_bindgen]
pub fn calculate_batch(input_json: &str) -> String {
    let input: JsBatchInput = match serde_json::from_str(input_json) {
        Ok(i) => i,
        Err(e) => return error_json(format!("Invalid input: {}", e)),
    };
    ok_json(calculate_total_co2_saved(
        FactorTables::embedded(),
        &input.donations,
        input.use_component_based,
    ))
}

/// Compares two ingredients by key.
#[wasm_bindgen]
pub fn compare_impact(input_json: &str) -> String {
    let input: JsCompareInput = match serde_json::from_str(input_json) {
        Ok(i) => i,
        Err(e) => return error_json(format!("Invalid input: {}", e)),
    };
    ok_json(compare_co2_impact(
        FactorTables::embedded(),
        &input.reference,
        &input.alternative,
        input.weight_kg,
    ))
}

/// Estimates a donated-mass total with the dashboard's default donation mix.
#[wasm_bindgen]
pub fn estimate_dashboard(total_donations_kg: f64) -> String {
    ok_json(estimate_donation_mix(
        FactorTables::embedded(),
        total_donations_kg,
        &DonationMixShare::dashboard_default(),
    ))
}

/// Everyday equivalents of a CO2e amount.
#[wasm_bindgen]
pub fn co2_equivalents(co2_kg: f64) -> String {
    ok_json(get_co2_equivalents(co2_kg))
}

/// Display string for a CO2e amount (plain string, not JSON).
#[wasm_bindgen]
pub fn format_co2_value(co2_kg: f64) -> String {
    format_co2(co2_kg)
}

/// Dish type identifier for a dish name (plain string, not JSON).
#[wasm_bindgen]
pub fn classify_dish(dish_name: &str) -> String {
    identify_dish_type(dish_name).as_str().to_string()
}

/// Get the version of the library.
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_calculate_dish_component_based() {
        let out: Value =
            serde_json::from_str(&calculate_dish(r#"{"dish_name":"Lohikeitto","weight_kg":2.0}"#))
                .unwrap();
        assert_eq!(out["success"], true);
        assert_eq!(out["result"]["method"], "component-based");
        assert_eq!(out["result"]["breakdown"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_calculate_dish_simplified() {
        let out: Value = serde_json::from_str(&calculate_dish(
            r#"{"dish_name":"Mix","weight_kg":2.0,"emission_factor":3.0}"#,
        ))
        .unwrap();
        assert_eq!(out["result"]["method"], "simplified");
        assert_eq!(out["result"]["total_co2e_kg"], 6.0);
    }

    #[test]
    fn test_calculate_dish_explicit_type() {
        let out: Value = serde_json::from_str(&calculate_dish(
            r#"{"dish_name":"Bowl","weight_kg":1.0,"dish_type":"grain_bowl"}"#,
        ))
        .unwrap();
        assert_eq!(out["success"], true);
        assert_eq!(out["result"]["breakdown"][0]["component_name"], "Kvinoa");
    }

    #[test]
    fn test_calculate_dish_type_wins_over_custom_components() {
        let out: Value = serde_json::from_str(&calculate_dish(
            r#"{"dish_name":"Bowl","weight_kg":1.0,"dish_type":"grain_bowl",
                "custom_components":[{"ingredient_key":"beef","ingredient_name":"Naudanliha",
                "category":"beef","mass_share":1.0}]}"#,
        ))
        .unwrap();
        assert_eq!(out["success"], true);
        assert_eq!(out["result"]["breakdown"][0]["component_name"], "Kvinoa");
    }

    #[test]
    fn test_invalid_json() {
        let out: Value = serde_json::from_str(&calculate_dish("not json")).unwrap();
        assert_eq!(out["success"], false);
        assert!(out["error"].as_str().unwrap().starts_with("Invalid input"));
        assert!(out["result"].is_null());
    }

    #[test]
    fn test_calculate_batch_defaults_to_component_based() {
        let out: Value = serde_json::from_str(&calculate_batch(
            r#"{"donations":[{"dish_name":"Lohi","weight_kg":1.0,"emission_factor":2.0}]}"#,
        ))
        .unwrap();
        assert_eq!(out["result"]["donation_count"], 1);
        assert_eq!(out["result"]["results"][0]["method"], "component-based");
    }

    #[test]
    fn test_compare_default_weight() {
        let out: Value = serde_json::from_str(&compare_impact(
            r#"{"reference":"beef","alternative":"tofu"}"#,
        ))
        .unwrap();
        assert_eq!(out["result"]["reference_co2"], 27.0);
        assert_eq!(out["result"]["alternative_co2"], 2.0);
    }

    #[test]
    fn test_plain_string_helpers() {
        assert_eq!(classify_dish("Kanakeitto"), "soup");
        assert_eq!(format_co2_value(0.25), "250 g CO₂e");
        assert!(!get_version().is_empty());
    }
}
