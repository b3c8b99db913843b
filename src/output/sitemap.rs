// sitemap.xml rendering and writing
//
// The document layout is fixed: XML declaration, a `urlset` carrying the
// sitemap and schema-instance namespaces, then one `url` block per route.

use crate::error::{Error, Result};
use crate::routes::RouteDescriptor;
use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::escape::partial_escape;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const SCHEMA_LOCATION: &str = "http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd";

/// Render the sitemap document for already-ordered routes.
///
/// Every entry shares `generated_at` as its `lastmod`. A trailing slash on
/// `base_url` is dropped so `loc` never contains `//`.
pub fn render_sitemap(
    routes: &[RouteDescriptor],
    base_url: &str,
    generated_at: DateTime<Utc>,
) -> String {
    let base_url = base_url.trim_end_matches('/');
    let lastmod = format_lastmod(generated_at);
    let mut xml = String::new();

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<urlset xmlns=\"{}\"\n", SITEMAP_NAMESPACE));
    xml.push_str(&format!("        xmlns:xsi=\"{}\"\n", XSI_NAMESPACE));
    xml.push_str(&format!(
        "        xsi:schemaLocation=\"{}\n",
        SITEMAP_NAMESPACE
    ));
    xml.push_str(&format!("        {}\">\n", SCHEMA_LOCATION));

    for route in routes {
        let loc = format!("{}{}", base_url, route.url);
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", partial_escape(loc.as_str())));
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            route.change_frequency
        ));
        xml.push_str(&format!("    <priority>{}</priority>\n", route.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>");
    xml
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2025-01-02T03:04:05.678Z`
pub fn format_lastmod(generated_at: DateTime<Utc>) -> String {
    generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Writes a rendered document to its fixed output path
#[derive(Debug, Clone)]
pub struct SitemapWriter {
    output_file: PathBuf,
}

impl SitemapWriter {
    pub fn new(output_file: impl Into<PathBuf>) -> Self {
        Self {
            output_file: output_file.into(),
        }
    }

    /// Create missing parent directories, then replace the file contents.
    pub fn write(&self, document: &str) -> Result<()> {
        if let Some(parent) = self.output_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| Error::filesystem_write(parent, e))?;
            }
        }

        let file = File::create(&self.output_file)
            .map_err(|e| Error::filesystem_write(&self.output_file, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(document.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| Error::filesystem_write(&self.output_file, e))?;

        Ok(())
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }
}
