//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate sitemap.xml from an MDX documentation content tree
#[derive(Parser, Debug)]
#[command(name = "pagemap")]
#[command(about = "Generate sitemap.xml from an MDX documentation content tree")]
#[command(version)]
pub struct Args {
    /// Config file path (defaults to ./pagemap.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Runs `generate` with defaults when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Scan the content tree and write the sitemap
    Generate {
        /// Content directory to scan
        #[arg(long)]
        content_dir: Option<PathBuf>,

        /// Sitemap file to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Site origin prepended to every route
        #[arg(long)]
        base_url: Option<String>,

        /// Print the sitemap instead of writing it
        #[arg(long)]
        stdout: bool,
    },

    /// List the routes that would be published
    Routes {
        /// Content directory to scan
        #[arg(long)]
        content_dir: Option<PathBuf>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = Args::try_parse_from(["pagemap"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.config.is_none());
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_generate_defaults() {
        let args = Args::try_parse_from(["pagemap", "generate"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Generate {
                content_dir: None,
                output: None,
                base_url: None,
                stdout: false,
            })
        );
    }

    #[test]
    fn test_generate_with_options() {
        let args = Args::try_parse_from([
            "pagemap", "generate",
            "--content-dir", "docs/pages",
            "--output", "dist/sitemap.xml",
            "--base-url", "https://docs.example.org",
            "--stdout",
            "--verbose",
            "--config", "custom.toml",
        ])
        .unwrap();

        assert!(args.verbose);
        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
        match args.command {
            Some(Command::Generate { content_dir, output, base_url, stdout }) => {
                assert_eq!(content_dir, Some(PathBuf::from("docs/pages")));
                assert_eq!(output, Some(PathBuf::from("dist/sitemap.xml")));
                assert_eq!(base_url.as_deref(), Some("https://docs.example.org"));
                assert!(stdout);
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_routes_json() {
        let args = Args::try_parse_from(["pagemap", "routes", "--json"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Routes { content_dir: None, json: true })
        );
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Args::try_parse_from(["pagemap", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_version_command() {
        let args = Args::try_parse_from(["pagemap", "version"]).unwrap();
        assert!(matches!(args.command, Some(Command::Version)));
    }
}
