//! CLI module for Pagemap

mod args;
mod logging;

pub use args::{Args, Command};
pub use logging::initialize_logging;

use crate::config::Config;
use crate::error::Result;
use crate::generator::SitemapGenerator;
use crate::routes::RouteDescriptor;
use std::process::ExitCode;
use tracing::error;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();

    if let Err(e) = initialize_logging(args.verbose, args.quiet) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    let command = args.command.unwrap_or(Command::Generate {
        content_dir: None,
        output: None,
        base_url: None,
        stdout: false,
    });

    match command {
        Command::Generate {
            content_dir,
            output,
            base_url,
            stdout,
        } => {
            let mut cfg = Config::discover(args.config.as_deref())?;
            cfg.merge_cli(content_dir, output, base_url);
            cfg.validate()?;

            let generator = SitemapGenerator::new(cfg);

            if stdout {
                let document = generator.preview_at(chrono::Utc::now())?;
                println!("{}", document);
            } else {
                generator.generate()?;
            }

            Ok(())
        }

        Command::Routes { content_dir, json } => {
            let mut cfg = Config::discover(args.config.as_deref())?;
            cfg.merge_cli(content_dir, None, None);
            cfg.validate()?;

            let routes = SitemapGenerator::new(cfg).discover()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&routes)?);
            } else {
                print!("{}", format_routes(&routes));
            }

            Ok(())
        }

        Command::Version => {
            println!("pagemap {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// One line per route: url, priority, change frequency
fn format_routes(routes: &[RouteDescriptor]) -> String {
    let width = routes.iter().map(|r| r.url.len()).max().unwrap_or(0);
    let mut out = String::new();

    for route in routes {
        out.push_str(&format!(
            "{:<width$}  {:<4}  {}\n",
            route.url,
            route.priority,
            route.change_frequency,
            width = width
        ));
    }

    out
}
