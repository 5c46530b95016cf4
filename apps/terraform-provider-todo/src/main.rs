use terraform_provider_todo::error::ProviderAppError;
use terraform_provider_todo::logger::initialize as LoggerInitialize;
use terraform_provider_todo::run::{self, PROVIDER_VERSION};

use common::ErrorLocation;
use provider_core::ProcessEnvironment;
use provider_core::environment::load_dotenv;

use std::fs::create_dir_all;
use std::io::stdin;
use std::panic::Location;
use std::path::PathBuf;
use std::process::ExitCode;

use log::{error, info};

fn main() -> ExitCode {
    match run_provider() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run_provider() -> Result<(), ProviderAppError> {
    // .env may set TODO_LOG_DIR, so load it before the logger
    let env_result = load_dotenv();

    let log_dir = run::log_dir(&ProcessEnvironment);
    create_dir_all(&log_dir).map_err(|e| ProviderAppError::Setup {
        message: format!("Failed to create log directory: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    LoggerInitialize(&log_dir)?;

    info!("TODO provider {PROVIDER_VERSION} starting");
    info!("Log directory: {}", log_dir.display());
    if let Some(path) = &env_result.path {
        info!("Environment defaults loaded from {}", path.display());
    }

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let raw = run::read_raw_config(config_path.as_deref(), stdin().lock())?;

    match run::configure(&raw, &ProcessEnvironment) {
        Ok(_client) => Ok(()),
        Err(diagnostics) => {
            println!("{}", run::render_diagnostics(&diagnostics)?);
            Err(ProviderAppError::Configure {
                message: format!(
                    "provider configuration failed with {} diagnostic(s)",
                    diagnostics.len()
                ),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}
