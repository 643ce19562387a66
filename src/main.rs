use clap::Parser;
use cwgc_records::utils::{logger, validation::Validate};
use cwgc_records::{CliConfig, ClientError, Record, RecordClient};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        tracing::error!("Invalid arguments: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match run(&cli) {
        Ok(record) => {
            let json = if cli.pretty {
                serde_json::to_string_pretty(&record)?
            } else {
                serde_json::to_string(&record)?
            };
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Extraction failed: {} (category: {:?})", e, e.category());
            eprintln!("❌ {}", e);
            if e.is_retryable() {
                eprintln!("The registry is temporarily unavailable; try again later.");
                std::process::exit(2);
            }
            std::process::exit(1);
        }
    }
}

fn run(cli: &CliConfig) -> Result<Record, ClientError> {
    let config = cli.client_config()?;
    let client = RecordClient::new(&config)?;

    match &cli.file {
        Some(path) => {
            tracing::info!("Reading record page from {}", path.display());
            let markup = std::fs::read_to_string(path)?;
            client.parse_details(&cli.url, &markup)
        }
        None => {
            tracing::info!("Fetching record page {}", cli.url);
            client.get_details(&cli.url)
        }
    }
}
