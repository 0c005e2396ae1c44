use clap::Parser;
use org_roles_etl::config::MISSING_FILENAME_PROMPT;
use org_roles_etl::utils::{logger, validation::Validate};
use org_roles_etl::{CliConfig, CsvJsonPipeline, EtlEngine, EtlError, LocalStorage};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if config.filename.is_none() {
        print!("{}", MISSING_FILENAME_PROMPT);
        return;
    }

    match run(config) {
        Ok(json) => print!("{}", json),
        Err(e) => {
            tracing::error!("Conversion failed: {} (Category: {:?})", e, e.category());
            eprintln!("{}", e);
            eprintln!("hint: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(config: CliConfig) -> Result<String, EtlError> {
    config.validate()?;

    let storage = LocalStorage::current_dir()?;
    let pipeline = CsvJsonPipeline::new(storage, config);
    EtlEngine::new(pipeline).run()
}
