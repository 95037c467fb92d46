//! # foodco2
//!
//! A library and command-line tool for estimating the CO2e emissions avoided
//! by rescuing cooked food donations.
//!
//! A dish is estimated by:
//!
//! - Classifying its free-text name (Finnish or English) into a dish type
//! - Decomposing it into ingredient components using that type's template
//! - Converting each component's cooked mass back to raw mass
//! - Multiplying raw mass by the ingredient's emission factor
//!
//! ## Modules
//!
//! - [`models`] - Value types for tables, breakdowns and results
//! - [`data`] - CSV table loading (embedded or from a directory)
//! - [`factors`] - Emission, conversion and template lookups
//! - [`dish`] - Dish classification and decomposition
//! - [`calculator`] - Component-based and simplified estimation, batch aggregation
//! - [`display`] - Formatting, everyday equivalents and terminal output
//! - [`config`] - CLI configuration
//! - [`error`] - Error types for loading tables and configuration
//!
//! ## Example Usage
//!
//! ```
//! use foodco2::{
//!     calculator::{calculate_co2_component_based, calculate_total_co2_saved},
//!     display::format_co2,
//!     factors::FactorTables,
//!     models::Donation,
//! };
//!
//! let tables = FactorTables::embedded();
//!
//! // One dish
//! let result = calculate_co2_component_based(tables, "Broilerikastike", 4.0, None);
//! println!("{}: {}", result.dish_name, format_co2(result.total_co2e_kg));
//!
//! // A batch of donations
//! let donations = vec![Donation::new("Lohikeitto", 6.0), Donation::new("Makaronilaatikko", 3.5)];
//! let total = calculate_total_co2_saved(tables, &donations, true);
//! assert_eq!(total.donation_count, 2);
//! ```
//!
//! ## Estimation Methods
//!
//! 1. **Component-based** (default): decomposes the dish and sums per-ingredient
//!    emissions, reporting each component's share of the total.
//!
//! 2. **Simplified**: multiplies the dish mass by one pre-known blended factor.
//!
//! Every calculation is a pure function over immutable tables and can be
//! called from any number of threads.

pub mod calculator;
pub mod config;
pub mod data;
pub mod dish;
pub mod display;
pub mod error;
pub mod factors;
pub mod models;
pub mod wasm;
