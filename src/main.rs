use dotenvy::dotenv;
use furniture_catalog::{
    config::{self, load_catalog},
    errors::Result,
    shell::{LoggingContact, Shell, ShellData},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application settings
    let app_config = config::load_app_config();

    // 4. Load the catalog
    let loaded = load_catalog(&app_config.catalog_path)
        .inspect(|loaded| {
            info!("Catalog loaded with {} products.", loaded.catalog.len());
        })
        .inspect_err(|e| error!("Failed to load catalog: {}", e))?;

    // 5. Run the shell on stdin/stdout
    let data = ShellData::new(
        loaded,
        &app_config.business_name,
        &app_config.contact_number,
    );
    let mut shell = Shell::new(data, Box::new(LoggingContact));
    shell.run(std::io::stdin().lock(), std::io::stdout().lock())
}
