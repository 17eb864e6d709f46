use clap::Parser;
use monument_aggregator::config::{CliConfig, Command, MonumentArgs, TomlConfig};
use monument_aggregator::core::query::build_query;
use monument_aggregator::core::source::SourceDescriptor;
use monument_aggregator::domain::ports::ConfigProvider;
use monument_aggregator::utils::error::{ErrorSeverity, MonumentError};
use monument_aggregator::utils::{logger, validation::Validate};
use monument_aggregator::{
    FavoritesService, FilterCriteria, JsonFileStore, LocalStorage, MonumentAggregator,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli.command, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Severity: {:?})",
            e,
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(command: &Command, config: &TomlConfig) -> Result<(), MonumentError> {
    match command {
        Command::Monuments(args) if args.dry_run => print_request_targets(args, config),
        Command::Monuments(args) => {
            let aggregator = MonumentAggregator::from_config(config)?;
            let monuments = aggregator.fetch_all(&FilterCriteria::from(args)).await;
            println!("{}", serde_json::to_string_pretty(&monuments)?);
            Ok(())
        }
        Command::Types => {
            let aggregator = MonumentAggregator::from_config(config)?;
            let types = aggregator.list_types().await;
            println!("{}", serde_json::to_string_pretty(&types)?);
            Ok(())
        }
        Command::Favorite {
            monument_id,
            user_id,
        } => {
            let service = favorites_service(config);
            service
                .add_favorite(monument_id, user_id.as_deref().unwrap_or_default())
                .await?;
            println!("⭐ {} added to favorites", monument_id);
            Ok(())
        }
        Command::Favorites { user_id } => {
            let service = favorites_service(config);
            let favorites = service
                .favorites(user_id.as_deref().unwrap_or_default())
                .await?;
            println!("{}", serde_json::to_string_pretty(&favorites)?);
            Ok(())
        }
    }
}

fn favorites_service(config: &TomlConfig) -> FavoritesService<JsonFileStore<LocalStorage>> {
    let storage = LocalStorage::new(config.favorites_dir());
    FavoritesService::new(JsonFileStore::new(storage))
}

fn print_request_targets(args: &MonumentArgs, config: &TomlConfig) -> Result<(), MonumentError> {
    tracing::info!("🔍 DRY RUN MODE - No request will be sent");
    let criteria = FilterCriteria::from(args);

    for source in SourceDescriptor::from_config(config) {
        let target = build_query(&source, &criteria);
        println!("{}\t{}", source.kind, target.to_url());
    }

    if let Some(geo) = criteria.geo_filter() {
        println!(
            "# distance filter: {} m around ({}, {})",
            geo.radius_meters, geo.center.lat, geo.center.lon
        );
    }

    Ok(())
}
