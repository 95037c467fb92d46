//! Data loading functionality for foodco2.
//!
//! The three lookup tables (emission factors, conversion factors and dish
//! templates) are CSV files under `data/`. They are compiled into the crate
//! with `include_str!` and can also be loaded from a directory at runtime,
//! so an operator can swap in audited figures without rebuilding.

use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::DataError;
use crate::factors::FactorTables;
use crate::models::{
    ConversionFactor, ConversionFactorRow, DishComponent, DishTemplateRow, DishType,
    EmissionFactor, EmissionFactorRow,
};

/// Embedded default tables.
pub(crate) const EMISSION_FACTORS_CSV: &str = include_str!("../data/emission_factors.csv");
pub(crate) const CONVERSION_FACTORS_CSV: &str = include_str!("../data/conversion_factors.csv");
pub(crate) const DISH_TEMPLATES_CSV: &str = include_str!("../data/dish_templates.csv");

fn open(path: &Path) -> Result<File, DataError> {
    File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses emission factor rows from any CSV reader.
///
/// # CSV Format
///
/// Expected columns: `key, name, category, kg_co2e_per_kg, source`
///
/// Rows are returned in file order. A negative or non-finite factor is an error.
pub fn parse_emission_factors<R: Read>(
    reader: R,
) -> Result<Vec<(String, EmissionFactor)>, DataError> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: EmissionFactorRow = result?;
        if !row.kg_co2e_per_kg.is_finite() || row.kg_co2e_per_kg < 0.0 {
            return Err(DataError::InvalidEmissionFactor {
                key: row.key,
                value: row.kg_co2e_per_kg,
            });
        }
        let source = row.source.filter(|s| !s.is_empty());
        rows.push((
            row.key,
            EmissionFactor {
                name: row.name,
                category: row.category,
                kg_co2e_per_kg: row.kg_co2e_per_kg,
                source,
            },
        ));
    }
    Ok(rows)
}

/// Parses conversion factor rows from any CSV reader.
///
/// # CSV Format
///
/// Expected columns: `key, name, cooked_to_raw_factor`
pub fn parse_conversion_factors<R: Read>(
    reader: R,
) -> Result<Vec<(String, ConversionFactor)>, DataError> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: ConversionFactorRow = result?;
        if !row.cooked_to_raw_factor.is_finite() || row.cooked_to_raw_factor <= 0.0 {
            return Err(DataError::InvalidConversionFactor {
                key: row.key,
                value: row.cooked_to_raw_factor,
            });
        }
        rows.push((
            row.key,
            ConversionFactor {
                name: row.name,
                cooked_to_raw_factor: row.cooked_to_raw_factor,
            },
        ));
    }
    Ok(rows)
}

/// Parses dish template rows from any CSV reader.
///
/// # CSV Format
///
/// Expected columns: `dish_type, ingredient_key, ingredient_name, category, mass_share`
///
/// Component order within a dish type follows row order.
pub fn parse_dish_templates<R: Read>(
    reader: R,
) -> Result<Vec<(DishType, DishComponent)>, DataError> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: DishTemplateRow = result?;
        if !row.mass_share.is_finite() || row.mass_share < 0.0 {
            return Err(DataError::InvalidMassShare {
                dish_type: row.dish_type,
                key: row.ingredient_key,
                value: row.mass_share,
            });
        }
        rows.push((
            row.dish_type,
            DishComponent {
                ingredient_key: row.ingredient_key,
                ingredient_name: row.ingredient_name,
                category: row.category,
                mass_share: row.mass_share,
            },
        ));
    }
    Ok(rows)
}

/// Loads emission factors from a CSV file.
pub fn load_emission_factors(path: &Path) -> Result<Vec<(String, EmissionFactor)>, DataError> {
    parse_emission_factors(open(path)?)
}

/// Loads conversion factors from a CSV file.
pub fn load_conversion_factors(
    path: &Path,
) -> Result<Vec<(String, ConversionFactor)>, DataError> {
    parse_conversion_factors(open(path)?)
}

/// Loads dish templates from a CSV file.
pub fn load_dish_templates(path: &Path) -> Result<Vec<(DishType, DishComponent)>, DataError> {
    parse_dish_templates(open(path)?)
}

/// Loads all three tables from a data directory.
///
/// The directory must contain `emission_factors.csv`, `conversion_factors.csv`
/// and `dish_templates.csv`.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use foodco2::data::load_all_data;
///
/// let tables = load_all_data(Path::new("data")).unwrap();
/// println!("Loaded {} emission factors", tables.emission_factors().count());
/// ```
pub fn load_all_data(data_dir: &Path) -> Result<FactorTables, DataError> {
    let emissions = load_emission_factors(&data_dir.join("emission_factors.csv"))?;
    let conversions = load_conversion_factors(&data_dir.join("conversion_factors.csv"))?;
    let templates = load_dish_templates(&data_dir.join("dish_templates.csv"))?;

    tracing::debug!(
        dir = %data_dir.display(),
        emission_factors = emissions.len(),
        conversion_factors = conversions.len(),
        template_rows = templates.len(),
        "loaded factor tables"
    );

    FactorTables::new(emissions, conversions, templates)
}

/// Builds the tables compiled into the crate.
pub fn embedded_tables() -> Result<FactorTables, DataError> {
    FactorTables::new(
        parse_emission_factors(EMISSION_FACTORS_CSV.as_bytes())?,
        parse_conversion_factors(CONVERSION_FACTORS_CSV.as_bytes())?,
        parse_dish_templates(DISH_TEMPLATES_CSV.as_bytes())?,
    )
}
