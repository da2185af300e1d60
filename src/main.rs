use clap::Parser;
use folio::core::config;
use folio::core::model::AuthorRef;
use folio::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "folio", about = "Browse and edit authors and their books over GraphQL")]
struct Args {
    /// GraphQL endpoint (overrides config file and FOLIO_GRAPHQL_ENDPOINT)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Open straight to the books of the author with this id
    #[arg(long, requires = "name")]
    author: Option<String>,

    /// Display name of the author given with --author
    #[arg(long, requires = "author")]
    name: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The log file location comes from the config, so load problems are
    // held until the logger is up.
    let (file_config, load_warning) = config_or_default(config::load_config());
    if let Some(warning) = &load_warning {
        eprintln!("Warning: {warning}");
    }
    let initial_author = match (args.author, args.name) {
        (Some(id), Some(name)) => Some(AuthorRef { id, name }),
        _ => None,
    };
    let resolved = config::resolve(&file_config, args.endpoint.as_deref(), initial_author);

    // File logger so the terminal UI stays clean
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    match (&load_warning, config::config_path()) {
        (Some(warning), _) => log::warn!("{}", warning),
        (None, Some(path)) => log::info!("Config file: {}", path.display()),
        (None, None) => log::warn!("Could not determine home directory, using default config"),
    }
    log::info!(
        "Folio starting up against {} (deep link: {:?})",
        resolved.endpoint,
        resolved.initial_author
    );

    tui::run(resolved)
}

/// Falls back to defaults on a load error and returns the message to report.
fn config_or_default(
    loaded: Result<config::FolioConfig, config::ConfigError>,
) -> (config::FolioConfig, Option<String>) {
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (
            config::FolioConfig::default(),
            Some(format!("{e}. Using defaults.")),
        ),
    }
}
