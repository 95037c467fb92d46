//! Data models and structures for foodco2.
//!
//! This module contains the value types used throughout the crate: table
//! rows (emission factors, conversion factors, dish components), the
//! per-call decomposition and calculation results, and batch inputs.
//!
//! Everything here except the CSV row structures is created fresh for each
//! calculation and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse ingredient category, used for the category-average emission fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    Beef,
    Pork,
    Poultry,
    Fish,
    Seafood,
    Dairy,
    Eggs,
    Legumes,
    Grains,
    Vegetables,
    Fruits,
    Nuts,
    Oils,
    Other,
}

impl IngredientCategory {
    /// All categories, in declaration order.
    pub const ALL: [IngredientCategory; 14] = [
        IngredientCategory::Beef,
        IngredientCategory::Pork,
        IngredientCategory::Poultry,
        IngredientCategory::Fish,
        IngredientCategory::Seafood,
        IngredientCategory::Dairy,
        IngredientCategory::Eggs,
        IngredientCategory::Legumes,
        IngredientCategory::Grains,
        IngredientCategory::Vegetables,
        IngredientCategory::Fruits,
        IngredientCategory::Nuts,
        IngredientCategory::Oils,
        IngredientCategory::Other,
    ];

    /// Returns the identifier used in data files and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientCategory::Beef => "beef",
            IngredientCategory::Pork => "pork",
            IngredientCategory::Poultry => "poultry",
            IngredientCategory::Fish => "fish",
            IngredientCategory::Seafood => "seafood",
            IngredientCategory::Dairy => "dairy",
            IngredientCategory::Eggs => "eggs",
            IngredientCategory::Legumes => "legumes",
            IngredientCategory::Grains => "grains",
            IngredientCategory::Vegetables => "vegetables",
            IngredientCategory::Fruits => "fruits",
            IngredientCategory::Nuts => "nuts",
            IngredientCategory::Oils => "oils",
            IngredientCategory::Other => "other",
        }
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for IngredientCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        IngredientCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| format!("unknown ingredient category: {}", s))
    }
}

/// Structural dish type. Exactly one template exists per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DishType {
    MeatMain,
    FishMain,
    PoultryMain,
    VegetarianMain,
    Soup,
    Casserole,
    Stew,
    Salad,
    GrainBowl,
    PastaDish,
}

impl DishType {
    /// All dish types, in declaration order.
    pub const ALL: [DishType; 10] = [
        DishType::MeatMain,
        DishType::FishMain,
        DishType::PoultryMain,
        DishType::VegetarianMain,
        DishType::Soup,
        DishType::Casserole,
        DishType::Stew,
        DishType::Salad,
        DishType::GrainBowl,
        DishType::PastaDish,
    ];

    /// Returns the identifier used in data files and JSON (e.g. `"meat_main"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            DishType::MeatMain => "meat_main",
            DishType::FishMain => "fish_main",
            DishType::PoultryMain => "poultry_main",
            DishType::VegetarianMain => "vegetarian_main",
            DishType::Soup => "soup",
            DishType::Casserole => "casserole",
            DishType::Stew => "stew",
            DishType::Salad => "salad",
            DishType::GrainBowl => "grain_bowl",
            DishType::PastaDish => "pasta_dish",
        }
    }
}

impl fmt::Display for DishType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for DishType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace('-', "_");
        DishType::ALL
            .into_iter()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| format!("unknown dish type: {}", s))
    }
}

/// Emission factor of one raw ingredient.
///
/// # Example
///
/// ```
/// use foodco2::models::{EmissionFactor, IngredientCategory};
///
/// let beef = EmissionFactor {
///     name: "Naudanliha".to_string(),
///     category: IngredientCategory::Beef,
///     kg_co2e_per_kg: 27.0,
///     source: None,
/// };
/// assert_eq!(beef.category.as_str(), "beef");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactor {
    /// Display name of the ingredient
    pub name: String,
    /// Category used for the fallback average
    pub category: IngredientCategory,
    /// kg CO2e released per kg of raw ingredient (always >= 0)
    pub kg_co2e_per_kg: f64,
    /// Where the figure comes from, when recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Cooked-to-raw mass ratio of one ingredient.
///
/// Values below 1.0 mean the ingredient loses mass when cooked (meat),
/// values above 1.0 mean it absorbs water (grains, legumes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionFactor {
    /// Display name of the ingredient
    pub name: String,
    /// cooked mass / raw mass (always > 0)
    pub cooked_to_raw_factor: f64,
}

/// One structural component of a dish.
///
/// In templates `mass_share` is an illustrative ratio; inside a
/// [`DishBreakdown`] it has been normalized so the shares sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishComponent {
    /// Key into the emission and conversion tables (e.g. "beef")
    pub ingredient_key: String,
    /// Display name (e.g. "Naudanliha")
    pub ingredient_name: String,
    /// Category of the ingredient
    pub category: IngredientCategory,
    /// Fraction of total dish mass
    pub mass_share: f64,
}

impl DishComponent {
    /// Convenience constructor.
    pub fn new(
        ingredient_key: &str,
        ingredient_name: &str,
        category: IngredientCategory,
        mass_share: f64,
    ) -> Self {
        DishComponent {
            ingredient_key: ingredient_key.to_string(),
            ingredient_name: ingredient_name.to_string(),
            category,
            mass_share,
        }
    }
}

/// A dish decomposed into components with normalized mass shares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishBreakdown {
    pub dish_name: String,
    pub dish_type: DishType,
    /// Total cooked mass of the dish in kg
    pub total_weight_kg: f64,
    /// Components whose `mass_share` values sum to 1.0 (empty only for an empty custom list)
    pub components: Vec<DishComponent>,
}

/// Cooked mass attributed to one component of a breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentWeight {
    pub ingredient_key: String,
    pub ingredient_name: String,
    pub category: IngredientCategory,
    pub weight_kg: f64,
}

/// Emission result for a single component of a dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentEmission {
    /// Display name of the component
    pub component_name: String,
    /// Cooked mass in kg
    pub cooked_weight_kg: f64,
    /// Raw mass in kg after cooked-to-raw conversion
    pub raw_weight_kg: f64,
    /// Emission factor applied to the raw mass
    pub emission_factor_kg_co2e_per_kg: f64,
    /// `raw_weight_kg * emission_factor_kg_co2e_per_kg`
    pub co2e_kg: f64,
    /// Share of the dish total in percent (0 when the total is 0)
    pub percentage: f64,
}

/// How a [`Co2CalculationResult`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculationMethod {
    /// Dish decomposed into ingredient components
    ComponentBased,
    /// One blended factor applied to the whole dish mass
    Simplified,
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationMethod::ComponentBased => f.pad("component-based"),
            CalculationMethod::Simplified => f.pad("simplified"),
        }
    }
}

/// CO2e estimate for one dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Co2CalculationResult {
    /// Sum of `breakdown[].co2e_kg`
    pub total_co2e_kg: f64,
    pub breakdown: Vec<ComponentEmission>,
    pub method: CalculationMethod,
    pub dish_name: String,
    pub total_weight_kg: f64,
}

/// One rescued food donation to be estimated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub dish_name: String,
    pub weight_kg: f64,
    /// Pre-known blended factor; enables the simplified path
    #[serde(default)]
    pub emission_factor: Option<f64>,
    /// Explicit component override for the component-based path
    #[serde(default)]
    pub custom_components: Option<Vec<DishComponent>>,
}

impl Donation {
    /// A donation with only a name and a mass.
    pub fn new(dish_name: &str, weight_kg: f64) -> Self {
        Donation {
            dish_name: dish_name.to_string(),
            weight_kg,
            emission_factor: None,
            custom_components: None,
        }
    }

    /// Attaches a pre-known blended emission factor.
    pub fn with_emission_factor(mut self, factor: f64) -> Self {
        self.emission_factor = Some(factor);
        self
    }
}

/// Totals across a batch of donations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub total_co2e_kg: f64,
    pub total_weight_kg: f64,
    pub donation_count: usize,
    /// `total_co2e_kg / total_weight_kg`, or 0 when no mass was donated
    pub average_co2_per_kg: f64,
    pub results: Vec<Co2CalculationResult>,
}

/// Everyday equivalents of an amount of CO2e.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Co2Equivalents {
    /// Kilometres driven by an average passenger car
    pub car_km: f64,
    /// Trees needed to absorb the amount in one year
    pub trees_needed: f64,
    /// Smartphone full charges
    pub phone_charges: f64,
}

/// Emission difference between a reference protein and an alternative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactComparison {
    pub reference_co2: f64,
    pub alternative_co2: f64,
    pub savings_kg: f64,
    /// Percent of the reference saved (0 when the reference is 0)
    pub savings_percent: f64,
}

/// One slice of a donation mix: a representative dish and its relative share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationMixShare {
    pub dish_name: String,
    pub share: f64,
}

impl DonationMixShare {
    /// The dashboard's fixed 30/20/50 meat/fish/vegetarian split.
    pub fn dashboard_default() -> Vec<DonationMixShare> {
        vec![
            DonationMixShare {
                dish_name: "Naudanliha".to_string(),
                share: 0.30,
            },
            DonationMixShare {
                dish_name: "Lohi".to_string(),
                share: 0.20,
            },
            DonationMixShare {
                dish_name: "Kasvisruoka".to_string(),
                share: 0.50,
            },
        ]
    }
}

// ============================================================================
// CSV Row Structures
// ============================================================================

/// CSV row structure for `emission_factors.csv`.
#[derive(Debug, Deserialize)]
pub struct EmissionFactorRow {
    /// Ingredient key
    pub key: String,
    /// Display name
    pub name: String,
    /// Ingredient category
    pub category: IngredientCategory,
    /// kg CO2e per kg raw
    pub kg_co2e_per_kg: f64,
    /// Provenance note (may be empty)
    pub source: Option<String>,
}

/// CSV row structure for `conversion_factors.csv`.
#[derive(Debug, Deserialize)]
pub struct ConversionFactorRow {
    /// Ingredient key
    pub key: String,
    /// Display name
    pub name: String,
    /// cooked mass / raw mass
    pub cooked_to_raw_factor: f64,
}

/// CSV row structure for `dish_templates.csv`.
#[derive(Debug, Deserialize)]
pub struct DishTemplateRow {
    /// Dish type the component belongs to
    pub dish_type: DishType,
    /// Ingredient key
    pub ingredient_key: String,
    /// Display name
    pub ingredient_name: String,
    /// Ingredient category
    pub category: IngredientCategory,
    /// Illustrative mass ratio
    pub mass_share: f64,
}

/// CSV row structure for batch donation files.
#[derive(Debug, Deserialize)]
pub struct DonationRow {
    pub dish_name: String,
    pub weight_kg: f64,
    pub emission_factor: Option<f64>,
}

impl From<DonationRow> for Donation {
    fn from(row: DonationRow) -> Self {
        Donation {
            dish_name: row.dish_name,
            weight_kg: row.weight_kg,
            emission_factor: row.emission_factor,
            custom_components: None,
        }
    }
}
