//! Emission, conversion and dish template lookups.
//!
//! [`FactorTables`] holds the three read-only tables. The default instance is
//! parsed from the embedded CSV data on first use and shared for the rest of
//! the process; tables loaded from disk via [`crate::data::load_all_data`]
//! behave identically. There is no mutation API.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::data::embedded_tables;
use crate::error::DataError;
use crate::models::{
    ConversionFactor, DishComponent, DishType, EmissionFactor, IngredientCategory,
};

static EMBEDDED: LazyLock<FactorTables> =
    LazyLock::new(|| embedded_tables().expect("embedded factor tables should be valid"));

/// Immutable lookup tables used by every calculation.
#[derive(Debug, Clone)]
pub struct FactorTables {
    emissions: Vec<(String, EmissionFactor)>,
    emission_index: HashMap<String, usize>,
    conversions: Vec<(String, ConversionFactor)>,
    conversion_index: HashMap<String, usize>,
    templates: HashMap<DishType, Vec<DishComponent>>,
}

/// Keeps the first position of each key and the last value, so listing order
/// stays stable while later rows override earlier ones.
fn dedup_keyed<T>(
    table: &str,
    rows: Vec<(String, T)>,
) -> (Vec<(String, T)>, HashMap<String, usize>) {
    let mut entries: Vec<(String, T)> = Vec::with_capacity(rows.len());
    let mut index: HashMap<String, usize> = HashMap::with_capacity(rows.len());
    for (key, value) in rows {
        match index.get(&key).copied() {
            Some(pos) => {
                tracing::warn!(table, key = %key, "duplicate key, later row wins");
                entries[pos].1 = value;
            }
            None => {
                index.insert(key.clone(), entries.len());
                entries.push((key, value));
            }
        }
    }
    (entries, index)
}

impl FactorTables {
    /// Builds tables from parsed rows.
    ///
    /// Fails with [`DataError::MissingTemplate`] if any [`DishType`] has no
    /// template rows.
    pub fn new(
        emissions: Vec<(String, EmissionFactor)>,
        conversions: Vec<(String, ConversionFactor)>,
        template_rows: Vec<(DishType, DishComponent)>,
    ) -> Result<Self, DataError> {
        let (emissions, emission_index) = dedup_keyed("emission_factors", emissions);
        let (conversions, conversion_index) = dedup_keyed("conversion_factors", conversions);

        let mut templates: HashMap<DishType, Vec<DishComponent>> = HashMap::new();
        for (dish_type, component) in template_rows {
            templates.entry(dish_type).or_default().push(component);
        }
        if let Some(missing) = DishType::ALL
            .into_iter()
            .find(|t| templates.get(t).map_or(true, |c| c.is_empty()))
        {
            return Err(DataError::MissingTemplate(missing));
        }

        Ok(FactorTables {
            emissions,
            emission_index,
            conversions,
            conversion_index,
            templates,
        })
    }

    /// The tables compiled into the crate.
    ///
    /// # Example
    ///
    /// ```
    /// use foodco2::factors::FactorTables;
    ///
    /// let tables = FactorTables::embedded();
    /// assert_eq!(tables.get_emission_factor("beef").unwrap().kg_co2e_per_kg, 27.0);
    /// ```
    pub fn embedded() -> &'static FactorTables {
        &EMBEDDED
    }

    // ------------------------------------------------------------------------
    // Emission factors
    // ------------------------------------------------------------------------

    /// Direct lookup by ingredient key.
    pub fn get_emission_factor(&self, key: &str) -> Option<&EmissionFactor> {
        self.emission_index.get(key).map(|&i| &self.emissions[i].1)
    }

    /// Mean `kg_co2e_per_kg` over all entries in `category`, or 0.0 if the
    /// category has none.
    pub fn get_category_average_emission(&self, category: IngredientCategory) -> f64 {
        let (sum, count) = self
            .emissions
            .iter()
            .filter(|(_, f)| f.category == category)
            .fold((0.0, 0usize), |(sum, count), (_, f)| (sum + f.kg_co2e_per_kg, count + 1));
        if count == 0 {
            0.0
        } else {
            sum / count as f64
        }
    }

    /// Case-insensitive search by key or display name.
    ///
    /// Tries, in order: exact key, exact name, then the first entry (in table
    /// order) whose key or name contains the query or is contained in it.
    ///
    /// # Example
    ///
    /// ```
    /// use foodco2::factors::FactorTables;
    ///
    /// let tables = FactorTables::embedded();
    /// let (key, _) = tables.find_emission_factor("Lohi").unwrap();
    /// assert_eq!(key, "salmon");
    /// ```
    pub fn find_emission_factor(&self, query: &str) -> Option<(&str, &EmissionFactor)> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        if let Some((key, factor)) = self
            .emissions
            .iter()
            .find(|(k, _)| k.to_lowercase() == needle)
        {
            return Some((key.as_str(), factor));
        }
        if let Some((key, factor)) = self
            .emissions
            .iter()
            .find(|(_, f)| f.name.to_lowercase() == needle)
        {
            return Some((key.as_str(), factor));
        }
        self.emissions
            .iter()
            .find(|(k, f)| {
                let key = k.to_lowercase();
                let name = f.name.to_lowercase();
                key.contains(&needle)
                    || name.contains(&needle)
                    || needle.contains(&key)
                    || needle.contains(&name)
            })
            .map(|(k, f)| (k.as_str(), f))
    }

    /// Resolves the factor for a component: direct key, then category
    /// average, then 0.0.
    pub fn resolve_emission_factor(&self, key: &str, category: IngredientCategory) -> f64 {
        match self.get_emission_factor(key) {
            Some(factor) => factor.kg_co2e_per_kg,
            None => {
                let average = self.get_category_average_emission(category);
                tracing::debug!(
                    key,
                    category = %category,
                    average,
                    "no emission factor for ingredient, using category average"
                );
                average
            }
        }
    }

    /// All emission factors in table order.
    pub fn emission_factors(&self) -> impl Iterator<Item = (&str, &EmissionFactor)> {
        self.emissions.iter().map(|(k, f)| (k.as_str(), f))
    }

    // ------------------------------------------------------------------------
    // Conversion factors
    // ------------------------------------------------------------------------

    /// Cooked-to-raw factor for `key`, or 1.0 (no conversion) if unknown.
    pub fn get_conversion_factor(&self, key: &str) -> f64 {
        self.conversion_index
            .get(key)
            .map_or(1.0, |&i| self.conversions[i].1.cooked_to_raw_factor)
    }

    /// Raw mass needed to yield `cooked_weight_kg` of the ingredient.
    ///
    /// # Example
    ///
    /// ```
    /// use foodco2::factors::FactorTables;
    ///
    /// let tables = FactorTables::embedded();
    /// let raw = tables.convert_cooked_to_raw(0.75, "beef");
    /// assert!((raw - 1.0).abs() < 1e-9);
    /// ```
    pub fn convert_cooked_to_raw(&self, cooked_weight_kg: f64, key: &str) -> f64 {
        cooked_weight_kg / self.get_conversion_factor(key)
    }

    /// Cooked mass obtained from `raw_weight_kg` of the ingredient.
    pub fn convert_raw_to_cooked(&self, raw_weight_kg: f64, key: &str) -> f64 {
        raw_weight_kg * self.get_conversion_factor(key)
    }

    /// All conversion factors in table order.
    pub fn conversion_factors(&self) -> impl Iterator<Item = (&str, &ConversionFactor)> {
        self.conversions.iter().map(|(k, f)| (k.as_str(), f))
    }

    // ------------------------------------------------------------------------
    // Dish templates
    // ------------------------------------------------------------------------

    /// Template components for a dish type, with their un-normalized shares.
    pub fn template_for(&self, dish_type: DishType) -> &[DishComponent] {
        self.templates
            .get(&dish_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
