use crate::core::radius_search::RadiusSearchRequest;
use crate::domain::model::{Language, SortMode};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "naver-map-search")]
#[command(about = "Naver Maps geocoding, local search and radius search")]
pub struct CliConfig {
    /// Path to TOML configuration file (falls back to environment variables)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert an address to coordinates
    Geocode {
        address: String,
        #[arg(long, value_enum, default_value_t = LanguageArg::Kor)]
        language: LanguageArg,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        count: u32,
    },
    /// Search places by text
    Search {
        query: String,
        #[arg(long, default_value_t = 5)]
        display: u8,
        #[arg(long, value_enum, default_value_t = SortArg::Random)]
        sort: SortArg,
        #[arg(long, default_value_t = 1)]
        start: u32,
    },
    /// Search places within a radius of a coordinate
    Radius(RadiusArgs),
}

#[derive(Debug, Clone, Args)]
pub struct RadiusArgs {
    pub query: String,
    /// Center longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: f64,
    /// Center latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: f64,
    /// Radius in meters
    #[arg(long, default_value_t = 1000)]
    pub radius: u32,
    #[arg(long, default_value_t = 5)]
    pub display: u8,
    #[arg(long, value_enum, default_value_t = SortArg::Random)]
    pub sort: SortArg,
    #[arg(long, default_value_t = 1)]
    pub min_results: u8,
}

impl From<RadiusArgs> for RadiusSearchRequest {
    fn from(args: RadiusArgs) -> Self {
        RadiusSearchRequest::new(args.query, args.longitude, args.latitude)
            .with_radius(args.radius)
            .with_display(args.display)
            .with_sort(args.sort.into())
            .with_min_results(args.min_results)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// By relevance
    Random,
    /// By review count
    Comment,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Random => SortMode::Relevance,
            SortArg::Comment => SortMode::ReviewCount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    Kor,
    Eng,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Kor => Language::Korean,
            LanguageArg::Eng => Language::English,
        }
    }
}
