use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber for the CLI.
///
/// Diagnostics go to stderr so stdout stays clean for JSON/Markdown output.
/// `RUST_LOG` wins over the verbosity flag when it is set.
pub fn init_cli_logger(verbose: bool) {
    let default_directive = if verbose {
        "pseo_content=debug,warn"
    } else {
        "pseo_content=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A second init (e.g. from tests) is not an error worth surfacing.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
