//! Pagemap - Generate sitemap.xml from a documentation content tree
//!
//! Walks an MDX pages directory, maps each publishable file to a route,
//! orders the routes and writes a sitemap for crawlers.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod routes;

// Re-export main types
pub use config::Config;
pub use error::{Error, Result};
pub use generator::{GenerationReport, SitemapGenerator};
pub use output::{render_sitemap, SitemapWriter};
pub use routes::{sort_routes, ChangeFrequency, RouteDescriptor, RouteWalker};
