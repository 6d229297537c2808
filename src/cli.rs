use clap::{Parser, Subcommand};
use pseo_content::application::dto::OutputFormat;
use std::path::PathBuf;

/// Deterministic content for programmatic-SEO integration pages
#[derive(Parser, Debug)]
#[command(name = "pseo-content")]
#[command(version)]
#[command(
    about = "Deterministic content for programmatic-SEO integration pages",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./pseo-content.config.yml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding verticals.json, software-systems.json and copy-pools.json
    /// (defaults to the built-in data)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Public host used in canonical URLs and breadcrumbs
    #[arg(long, global = true, value_name = "HOST")]
    pub domain: Option<String>,

    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve one integration page and print its content model
    Resolve {
        /// Vertical id or slug (e.g. accountants)
        vertical: String,

        /// Integration slug (e.g. quickbooks-to-netsuite)
        slug: String,

        /// Output format: json or markdown
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List every valid integration slug of a vertical
    List {
        /// Vertical id or slug
        vertical: String,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List verticals with their page counts and hub links
    Verticals,

    /// Write every page of a vertical into a directory, one file per page
    Export {
        /// Vertical id or slug
        vertical: String,

        /// Existing directory to write pages into
        #[arg(long, value_name = "DIR")]
        out_dir: PathBuf,

        /// Output format: json or markdown
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve() {
        let args = Args::try_parse_from([
            "pseo-content",
            "resolve",
            "accountants",
            "quickbooks-to-netsuite",
            "-f",
            "md",
        ])
        .unwrap();
        match args.command {
            Command::Resolve {
                vertical,
                slug,
                format,
                output,
            } => {
                assert_eq!(vertical, "accountants");
                assert_eq!(slug, "quickbooks-to-netsuite");
                assert_eq!(format, Some(OutputFormat::Markdown));
                assert!(output.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "pseo-content",
            "list",
            "warehousing",
            "--domain",
            "staging.example.com",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.domain.as_deref(), Some("staging.example.com"));
        assert!(args.verbose);
        assert!(matches!(args.command, Command::List { .. }));
    }

    #[test]
    fn test_export_requires_out_dir() {
        assert!(Args::try_parse_from(["pseo-content", "export", "accountants"]).is_err());
        let args =
            Args::try_parse_from(["pseo-content", "export", "accountants", "--out-dir", "out"])
                .unwrap();
        match args.command {
            Command::Export { out_dir, format, .. } => {
                assert_eq!(out_dir, PathBuf::from("out"));
                assert!(format.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = Args::try_parse_from([
            "pseo-content",
            "resolve",
            "accountants",
            "xero-to-netsuite",
            "--format",
            "html",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["pseo-content"]).is_err());
    }
}
