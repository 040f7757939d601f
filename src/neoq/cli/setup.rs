use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use neoq::filters::FilterCriteria;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "neoq", bin_name = "neoq", version)]
#[command(about = "Explore near-Earth objects and their close approaches", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// CSV file with NEO records (overrides config)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub neofile: Option<PathBuf>,

    /// JSON file with close-approach records (overrides config)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub cadfile: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect a single NEO by designation or name
    #[command(alias = "i")]
    Inspect(InspectArgs),

    /// Query close approaches matching all given criteria
    #[command(alias = "q")]
    Query(QueryArgs),
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub target: InspectTarget,

    /// Also list the NEO's close approaches
    #[arg(short, long)]
    pub approaches: bool,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct InspectTarget {
    /// Primary designation of the NEO (e.g. 433)
    #[arg(short, long, value_name = "DES")]
    pub pdes: Option<String>,

    /// Name of the NEO (e.g. Eros)
    #[arg(short, long)]
    pub name: Option<String>,
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Only approaches on this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Only approaches on or after this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date, value_name = "DATE")]
    pub start_date: Option<NaiveDate>,

    /// Only approaches on or before this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date, value_name = "DATE")]
    pub end_date: Option<NaiveDate>,

    /// Minimum approach distance in au
    #[arg(long, value_name = "AU")]
    pub min_distance: Option<f64>,

    /// Maximum approach distance in au
    #[arg(long, value_name = "AU")]
    pub max_distance: Option<f64>,

    /// Minimum relative velocity in km/s
    #[arg(long, value_name = "KM_S")]
    pub min_velocity: Option<f64>,

    /// Maximum relative velocity in km/s
    #[arg(long, value_name = "KM_S")]
    pub max_velocity: Option<f64>,

    /// Minimum NEO diameter in km
    #[arg(long, value_name = "KM")]
    pub min_diameter: Option<f64>,

    /// Maximum NEO diameter in km
    #[arg(long, value_name = "KM")]
    pub max_diameter: Option<f64>,

    /// Only potentially hazardous NEOs
    #[arg(long, conflicts_with = "not_hazardous")]
    pub hazardous: bool,

    /// Only NEOs that are not potentially hazardous
    #[arg(long)]
    pub not_hazardous: bool,

    /// Maximum number of results (0 for no limit)
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// Write results to a .csv or .json file instead of printing them
    #[arg(short, long, value_name = "PATH")]
    pub outfile: Option<PathBuf>,
}

impl QueryArgs {
    pub fn criteria(&self) -> FilterCriteria {
        let hazardous = match (self.hazardous, self.not_hazardous) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        FilterCriteria {
            date: self.date,
            start_date: self.start_date,
            end_date: self.end_date,
            distance_min: self.min_distance,
            distance_max: self.max_distance,
            velocity_min: self.min_velocity,
            velocity_max: self.max_velocity,
            diameter_min: self.min_diameter,
            diameter_max: self.max_diameter,
            hazardous,
        }
    }
}

fn parse_date(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}' ({}), expected YYYY-MM-DD", input, e))
}
