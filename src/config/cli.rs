use crate::config::toml_config::TomlConfig;
use crate::domain::model::FilterCriteria;
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "monument-aggregator")]
#[command(about = "Query historical monuments of Armentières, Lille and Roubaix open data")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override the favorites directory from config
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List monuments matching the given filters
    Monuments(MonumentArgs),
    /// List the distinct monument types across all sources
    Types,
    /// Add a monument to a user's favorites
    Favorite {
        monument_id: String,
        #[arg(long)]
        user_id: Option<String>,
    },
    /// Show a user's favorites
    Favorites {
        #[arg(long)]
        user_id: Option<String>,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct MonumentArgs {
    #[arg(long, visible_alias = "ville")]
    pub municipality: Option<String>,

    /// Reference year, matched as a ±10 year window
    #[arg(long, visible_alias = "date")]
    pub year: Option<i64>,

    /// Substring of the monument type
    #[arg(long = "type")]
    pub monument_type: Option<String>,

    #[arg(long)]
    pub id: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Radius in meters around --lat/--lon
    #[arg(long)]
    pub radius: Option<f64>,

    /// Print the request URLs instead of fetching
    #[arg(long)]
    pub dry_run: bool,
}

impl From<&MonumentArgs> for FilterCriteria {
    fn from(args: &MonumentArgs) -> Self {
        FilterCriteria {
            municipality: args.municipality.clone(),
            year: args.year,
            monument_type: args.monument_type.clone(),
            id: args.id.clone(),
            lat: args.lat,
            lon: args.lon,
            radius_meters: args.radius,
        }
    }
}

impl CliConfig {
    /// Loads the TOML file when given, otherwise the built-in defaults, then applies CLI overrides.
    pub fn load_config(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(data_dir) = &self.data_dir {
            config.favorites.data_dir = data_dir.clone();
        }

        Ok(config)
    }
}
