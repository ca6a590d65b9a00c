use clap::Parser;
use tracing_subscriber::EnvFilter;
use workshop_mod_resolver::{Config, WorkshopItemId, WorkshopManager};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "workshop-mod-resolver",
    version = env!("CARGO_PKG_VERSION"),
    about = "Resolve a Steam Workshop collection into mod IDs and map folders"
)]
struct CliArgs {
    /// The ID of the collection to resolve
    #[arg(required_unless_present = "items")]
    collection_id: Option<String>,
    
    /// Resolve these workshop items instead of a collection
    #[arg(long = "item", short = 'i', value_name = "ID", conflicts_with = "collection_id")]
    items: Vec<WorkshopItemId>,
    
    /// Exit with an error when a request fails instead of reporting items as unresolved
    #[arg(long)]
    strict: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    
    let args = CliArgs::parse();
    let config = Config::from_env()?;
    let manager = WorkshopManager::new(config.api_builder().build()?);
    let details = match (&args.collection_id, args.strict) {
        (Some(collection_id), true) => manager.try_resolve_collection(collection_id).await?,
        (Some(collection_id), false) => manager.resolve_collection(collection_id).await,
        (None, true) => manager.try_get_mod_details(&args.items).await?,
        (None, false) => manager.get_mod_details(args.items).await?,
    };
    let unresolved = details
        .iter()
        .filter(|details| !details.is_resolved())
        .count();
    
    if unresolved > 0 {
        log::warn!("{unresolved} of {} workshop items have no usable mod ID", details.len());
    }
    
    println!("{}", serde_json::to_string_pretty(&details)?);
    
    Ok(())
}
