// Sitemap generation pipeline: walk, order, render, write

use crate::config::Config;
use crate::error::Result;
use crate::output::{render_sitemap, SitemapWriter};
use crate::routes::{sort_routes, RouteDescriptor, RouteWalker};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::info;

/// Orchestrates one sitemap build from a validated [`Config`]
pub struct SitemapGenerator {
    config: Config,
}

impl SitemapGenerator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Discover and order every publishable route in the content directory
    pub fn discover(&self) -> Result<Vec<RouteDescriptor>> {
        let content_dir = &self.config.content.directory;
        info!("Scanning {}", content_dir.display());

        let walker = RouteWalker::new(&self.config.content);
        let mut routes = walker.walk(content_dir, "")?;
        sort_routes(&mut routes);

        info!("Found {} pages", routes.len());
        Ok(routes)
    }

    pub fn render(&self, routes: &[RouteDescriptor], generated_at: DateTime<Utc>) -> String {
        render_sitemap(routes, &self.config.site.base_url, generated_at)
    }

    /// Build the document without touching the output file
    pub fn preview_at(&self, generated_at: DateTime<Utc>) -> Result<String> {
        let routes = self.discover()?;
        Ok(self.render(&routes, generated_at))
    }

    /// Run the full pipeline stamped with the current time
    pub fn generate(&self) -> Result<GenerationReport> {
        self.generate_at(Utc::now())
    }

    /// Run the full pipeline with an explicit `lastmod` timestamp.
    ///
    /// The content tree is fully walked before the output is opened, so a
    /// walk failure leaves any previous sitemap untouched.
    pub fn generate_at(&self, generated_at: DateTime<Utc>) -> Result<GenerationReport> {
        let routes = self.discover()?;
        let document = self.render(&routes, generated_at);

        let writer = SitemapWriter::new(&self.config.output.file);
        writer.write(&document)?;

        info!("Sitemap written to {}", writer.output_file().display());

        Ok(GenerationReport {
            content_dir: self.config.content.directory.clone(),
            pages_found: routes.len(),
            output_file: writer.output_file().to_path_buf(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Report of what was generated
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub content_dir: PathBuf,
    pub pages_found: usize,
    pub output_file: PathBuf,
}
