//! notebook-data - CLI entry point.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use notebook_data::{
    cli::{Args, Command},
    config::{validate_fetch_config, Config},
    download::{DataFetcher, FetchOutcome},
    error::{exit_codes, Error, Result},
    fs::DataPathResolver,
    output::{print_environment_summary, print_error, print_info, print_warning, EnvironmentReport},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_)
                | Error::UrlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Download(_)
                | Error::DownloadTool { .. }
                | Error::DownloadToolNotFound(_)
                | Error::Http(_) => ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging; stdout is reserved for command output
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = args.config.clone().unwrap_or_else(Config::default_path);
    let mut config = match &args.command {
        Command::InitConfig { .. } => Config::default(),
        _ => load_config(&config_path, args.config.is_some())?,
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Decided once here and passed down
    let environment = config.environment.detect();
    tracing::debug!("Environment: {} (mode {})", environment, config.environment);

    match &args.command {
        Command::Resolve {
            project_dir,
            filename,
            ..
        } => {
            let resolver = DataPathResolver::from_config(&config, environment);
            println!("{}", resolver.resolve(project_dir, filename).display());
        }
        Command::Fetch(_) => {
            // Outside the hosted notebook the fetcher only prints its notice,
            // so the repo settings are not needed there
            if environment.running_in_hosted_notebook() {
                validate_fetch_config(&config)?;
                if config.fetch.filenames.is_empty() {
                    print_warning("No files to fetch");
                }
            }
            let repo_url = config.fetch.repo_url.as_deref().unwrap_or_default();

            let fetcher = DataFetcher::from_config(&config, environment);
            if let FetchOutcome::Downloaded(paths) =
                fetcher.fetch(repo_url, &config.fetch.filenames).await?
            {
                print_info(&format!(
                    "{} file(s) staged in {}",
                    paths.len(),
                    fetcher.destination().display()
                ));
            }
        }
        Command::Env { json, .. } => {
            let resolver = DataPathResolver::from_config(&config, environment);
            let report = EnvironmentReport::from(&resolver);
            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_environment_summary(&report);
            }
        }
        Command::InitConfig { force } => init_config(&config, &config_path, *force)?,
    }

    Ok(())
}

/// Load the config file, falling back to defaults when the default file is absent.
fn load_config(path: &Path, explicit: bool) -> Result<Config> {
    if path.exists() || explicit {
        return Config::load(path);
    }

    tracing::debug!("No configuration file at {}, using defaults", path.display());
    Ok(Config::default())
}

fn init_config(config: &Config, path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    config.save(path)?;
    print_info(&format!("Wrote configuration to {}", path.display()));
    Ok(())
}
