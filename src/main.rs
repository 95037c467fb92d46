//! foodco2 - Command Line Interface
//!
//! This is the main entry point for the CO2e estimation tool.
//! Run with `--help` to see all available options.

use clap::{Parser, Subcommand};
use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::Level;

use foodco2::{
    calculator::{
        calculate_co2_component_based, calculate_co2_for_dish_type, calculate_co2_simplified,
        calculate_total_co2_saved, compare_co2_impact, estimate_donation_mix,
    },
    config::{Config, OutputFormat},
    data::load_all_data,
    dish::identify_dish_type,
    display::{display_aggregate, display_comparison, display_factors, display_result},
    factors::FactorTables,
    models::{DishType, Donation, DonationRow, IngredientCategory},
};

/// Command-line arguments for foodco2.
#[derive(Parser, Debug)]
#[command(name = "foodco2")]
#[command(author, version, about = "Estimate CO2e saved by rescued food donations", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Configuration file (defaults to ./foodco2.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory with emission_factors.csv, conversion_factors.csv and dish_templates.csv
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format (table, json). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    format: Option<OutputFormat>,

    /// Verbose logging to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate a single dish
    Dish {
        /// Dish name, e.g. "Naudanlihakeitto"
        name: String,

        /// Cooked weight in kg
        #[arg(short, long)]
        weight: f64,

        /// Blended emission factor (kg CO2e/kg); uses the simplified method
        #[arg(long)]
        factor: Option<f64>,

        /// Skip classification and use this dish type's template
        #[arg(long, value_parser = parse_dish_type)]
        dish_type: Option<DishType>,
    },

    /// Estimate a batch of donations from a .json or .csv file
    Batch {
        /// Donations file
        file: PathBuf,

        /// Use each donation's emission_factor when present
        #[arg(long)]
        simplified: bool,
    },

    /// Compare two ingredients by emission factor
    Compare {
        /// Reference ingredient key, e.g. "beef"
        reference: String,

        /// Alternative ingredient key, e.g. "chickpeas"
        alternative: String,

        /// Raw weight in kg
        #[arg(short, long, default_value = "1.0")]
        weight: f64,
    },

    /// Estimate a donated-mass total using the configured donation mix
    Dashboard {
        /// Total donated food in kg
        total_kg: f64,
    },

    /// Print the dish type a name is classified as
    Classify {
        /// Dish name
        name: String,
    },

    /// List emission factors
    Factors {
        /// Only show one category (e.g. "beef", "legumes")
        #[arg(long, value_parser = parse_category)]
        category: Option<IngredientCategory>,
    },
}

fn parse_dish_type(s: &str) -> Result<DishType, String> {
    s.parse()
}

fn parse_category(s: &str) -> Result<IngredientCategory, String> {
    s.parse()
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Reads donations from JSON (array of objects) or CSV (`dish_name,weight_kg,emission_factor`).
fn read_donations(path: &Path) -> Result<Vec<Donation>, Box<dyn Error>> {
    let is_csv = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(File::open(path)?);
        let mut donations = Vec::new();
        for result in rdr.deserialize() {
            let row: DonationRow = result?;
            donations.push(row.into());
        }
        Ok(donations)
    } else {
        Ok(serde_json::from_reader(File::open(path)?)?)
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = Config::load_or_default(args.config.as_deref())?;
    let format = args.format.unwrap_or(config.output_format);

    // Tables from --data-dir, then config, then the embedded defaults
    let loaded;
    let tables: &FactorTables = match args.data_dir.as_ref().or(config.data_dir.as_ref()) {
        Some(dir) => {
            loaded = load_all_data(dir)?;
            &loaded
        }
        None => FactorTables::embedded(),
    };

    match args.command {
        Command::Dish {
            name,
            weight,
            factor,
            dish_type,
        } => {
            let result = match (factor, dish_type) {
                (Some(f), _) => calculate_co2_simplified(&name, weight, f),
                (None, Some(t)) => calculate_co2_for_dish_type(tables, &name, t, weight),
                (None, None) => calculate_co2_component_based(tables, &name, weight, None),
            };
            match format {
                OutputFormat::Json => print_json(&result)?,
                OutputFormat::Table => display_result(&result),
            }
        }
        Command::Batch { file, simplified } => {
            let donations = read_donations(&file)?;
            if donations.is_empty() {
                println!("[WARNING] No donations found in {}", file.display());
                return Ok(());
            }
            let aggregate = calculate_total_co2_saved(tables, &donations, !simplified);
            match format {
                OutputFormat::Json => print_json(&aggregate)?,
                OutputFormat::Table => display_aggregate(&aggregate),
            }
        }
        Command::Compare {
            reference,
            alternative,
            weight,
        } => {
            for key in [&reference, &alternative] {
                if tables.get_emission_factor(key).is_none() {
                    tracing::warn!(key = %key, "unknown ingredient key, counted as 0 kg CO2e");
                }
            }
            let cmp = compare_co2_impact(tables, &reference, &alternative, weight);
            match format {
                OutputFormat::Json => print_json(&cmp)?,
                OutputFormat::Table => display_comparison(&reference, &alternative, &cmp),
            }
        }
        Command::Dashboard { total_kg } => {
            let aggregate = estimate_donation_mix(tables, total_kg, &config.donation_mix);
            match format {
                OutputFormat::Json => print_json(&aggregate)?,
                OutputFormat::Table => display_aggregate(&aggregate),
            }
        }
        Command::Classify { name } => {
            let dish_type = identify_dish_type(&name);
            match format {
                OutputFormat::Json => print_json(&dish_type)?,
                OutputFormat::Table => println!("{} -> {}", name, dish_type),
            }
        }
        Command::Factors { category } => match format {
            OutputFormat::Json => {
                let rows: Vec<_> = tables
                    .emission_factors()
                    .filter(|(_, f)| category.map_or(true, |c| f.category == c))
                    .collect();
                print_json(&rows)?
            }
            OutputFormat::Table => display_factors(tables, category),
        },
    }

    Ok(())
}
