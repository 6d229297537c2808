mod cli;
mod config;

use cli::{Args, Command};
use config::ConfigFile;
use owo_colors::OwoColorize;
use pseo_content::prelude::*;
use pseo_content::shared::logger::init_cli_logger;
use std::path::PathBuf;
use std::process;

/// Vertical whose copy pools fill any axis another vertical lacks
const DEFAULT_FALLBACK_VERTICAL: &str = "accountants";

fn main() {
    if let Err(e) = run() {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();
    init_cli_logger(args.verbose);

    let config = load_config(&args)?;
    let settings = Settings::merge(&args, config);
    tracing::debug!(
        domain = %settings.domain,
        fallback = %settings.fallback_vertical,
        data_dir = ?settings.data_dir,
        "settings resolved"
    );

    let site = SiteProfile::new(settings.domain.clone(), settings.brand.clone());
    let library = match &settings.data_dir {
        Some(dir) => {
            let reader = DataDirectoryReader::new(dir.clone());
            ContentLibrary::load(&reader, &reader, &settings.fallback_vertical, site)?
        }
        None => {
            let data = EmbeddedDataSource::new();
            ContentLibrary::load(&data, &data, &settings.fallback_vertical, site)?
        }
    };

    match args.command {
        Command::Resolve {
            vertical,
            slug,
            format,
            output,
        } => {
            let format = format.unwrap_or(settings.format);
            let page = ResolvePageUseCase::new(&library)
                .execute(&ResolvePageRequest::new(vertical, slug))?;

            eprintln!("{}", FormatterFactory::progress_message(format));
            let rendered = FormatterFactory::create(format).format(&page)?;
            PresenterFactory::create(PresenterType::from_output(output)).present(&rendered)?;
        }
        Command::List { vertical, output } => {
            let slugs = ListPagesUseCase::new(&library).execute(&vertical)?;
            PresenterFactory::create(PresenterType::from_output(output))
                .present(&ListPagesUseCase::render(&slugs))?;
        }
        Command::Verticals => {
            let summaries = ListVerticalsUseCase::new(&library).execute()?;
            StdoutPresenter::new().present(&VerticalSummary::render_all(&summaries))?;
        }
        Command::Export {
            vertical,
            out_dir,
            format,
        } => {
            let format = format.unwrap_or(settings.format);
            let exporter = DirectoryExporter::new(out_dir)?;
            tracing::debug!(out_dir = %exporter.out_dir().display(), "exporting pages");

            let summary = ExportVerticalUseCase::new(
                &library,
                FormatterFactory::create(format),
                exporter,
                StderrProgressReporter::new(),
            )
            .execute(&ExportRequest::new(vertical))?;
            tracing::debug!(
                vertical = %summary.vertical,
                pages = summary.page_count(),
                "export finished"
            );
        }
    }

    Ok(())
}

/// `--config FILE` when given, otherwise `./pseo-content.config.yml` if present
fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(path) = &args.config {
        let loaded = config::load_config_from_path(path)?;
        eprintln!("📄 Loaded config from: {}", path.display());
        return Ok(loaded);
    }
    let cwd = std::env::current_dir()?;
    match config::discover_config(&cwd)? {
        Some(loaded) => {
            eprintln!(
                "📄 Auto-discovered config file: {}",
                cwd.join(config::CONFIG_FILENAME).display()
            );
            Ok(loaded)
        }
        None => Ok(ConfigFile::default()),
    }
}

/// Effective settings: command-line flags over the config file over defaults
#[derive(Debug)]
struct Settings {
    domain: String,
    brand: String,
    data_dir: Option<PathBuf>,
    fallback_vertical: String,
    format: OutputFormat,
}

impl Settings {
    fn merge(args: &Args, config: ConfigFile) -> Self {
        let defaults = SiteProfile::default();
        let format = config.output_format().unwrap_or_default();
        Self {
            domain: args
                .domain
                .clone()
                .or(config.domain)
                .unwrap_or_else(|| defaults.domain().to_string()),
            brand: config
                .brand
                .unwrap_or_else(|| defaults.brand().to_string()),
            data_dir: args.data_dir.clone().or(config.data_dir),
            fallback_vertical: config
                .fallback_vertical
                .unwrap_or_else(|| DEFAULT_FALLBACK_VERTICAL.to_string()),
            format,
        }
    }
}
