use deb_deps::adapters::outbound::console::StderrProgressReporter;
use deb_deps::adapters::outbound::filesystem::FileSystemFetcher;
use deb_deps::adapters::outbound::network::HttpIndexFetcher;
use deb_deps::adapters::outbound::SourceRouter;
use deb_deps::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use deb_deps::application::use_cases::ResolveDependenciesUseCase;
use deb_deps::cli::Args;
use deb_deps::config::{self, ConfigError, RawSettings, ResolvedConfig};
use deb_deps::shared::error::ExitCode;
use deb_deps::shared::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_tracing(args.log_filter());

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

fn init_tracing(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Configuration problems exit with 1, everything else with 3.
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    if error.downcast_ref::<ConfigError>().is_some() {
        ExitCode::InvalidConfig
    } else {
        ExitCode::ApplicationError
    }
}

fn run(args: Args) -> Result<()> {
    let resolved = resolve_config(&args, Path::new("."))?;
    debug!(?resolved, "configuration resolved");

    if args.show_config {
        for (name, value) in resolved.describe() {
            println!("{}: {}", name, value);
        }
        return Ok(());
    }

    // Create adapters (Dependency Injection)
    let fetcher = SourceRouter::new(HttpIndexFetcher::new()?, FileSystemFetcher::new());
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = ResolveDependenciesUseCase::new(fetcher, progress_reporter);

    // Execute use case
    let response = use_case.execute(resolved.to_request())?;

    eprintln!("{}", FormatterFactory::progress_message(resolved.format));
    let formatter = FormatterFactory::create(resolved.format);
    let formatted_output = formatter.format(&response.graph)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(resolved.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Merges the config file (explicit or discovered in `dir`) with the flags and validates.
fn resolve_config(args: &Args, dir: &Path) -> Result<ResolvedConfig> {
    let file = match &args.config {
        Some(path) => {
            let file = config::load_config_from_path(path)?;
            eprintln!("📄 Loaded config from: {}", path.display());
            Some(file)
        }
        None => {
            let discovered = config::discover_config(dir)?;
            if discovered.is_some() {
                eprintln!(
                    "📄 Auto-discovered config file: {}",
                    dir.join(config::CONFIG_FILENAME).display()
                );
            }
            discovered
        }
    };

    let file_settings = match file {
        Some(file) => file.into_settings()?,
        None => RawSettings::default(),
    };

    let resolved = config::validate(file_settings.overlay(args.to_settings()))?;
    Ok(resolved)
}
