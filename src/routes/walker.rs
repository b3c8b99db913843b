// Content tree walker
//
// Turns every publishable content file under a directory into a route
// descriptor. Output is in filesystem enumeration order; callers sort.

use crate::config::ContentConfig;
use crate::error::{Error, Result};
use crate::routes::RouteDescriptor;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Walks a content tree and classifies its files into routes
pub struct RouteWalker<'a> {
    content: &'a ContentConfig,
}

impl<'a> RouteWalker<'a> {
    pub fn new(content: &'a ContentConfig) -> Self {
        Self { content }
    }

    /// Collect one route per eligible file below `dir`.
    ///
    /// `prefix` is the route path `dir` itself maps to (empty for the content
    /// root). Any entry that cannot be listed aborts the walk.
    pub fn walk(&self, dir: &Path, prefix: &str) -> Result<Vec<RouteDescriptor>> {
        let metadata = fs::metadata(dir).map_err(|e| Error::filesystem_access(dir, e))?;
        if !metadata.is_dir() {
            return Err(Error::filesystem_access(
                dir,
                io::Error::other("not a directory"),
            ));
        }

        let mut routes = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).follow_links(true) {
            let entry = entry.map_err(|e| Error::from_walk(dir, e))?;

            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();

            if self.is_excluded(&name) {
                debug!("Skipping reserved file {}", entry.path().display());
                continue;
            }

            let Some(stem) = self.content_stem(&name) else {
                trace!("Ignoring non-content file {}", entry.path().display());
                continue;
            };

            let relative_dir = entry
                .path()
                .parent()
                .and_then(|parent| parent.strip_prefix(dir).ok())
                .unwrap_or_else(|| Path::new(""));
            let route_prefix = join_prefix(prefix, relative_dir);

            let route = RouteDescriptor::from_content_file(&route_prefix, stem);
            trace!("{} -> {}", entry.path().display(), route.url);
            routes.push(route);
        }

        Ok(routes)
    }

    /// Reserved names match exactly; patterns match anywhere in the name.
    ///
    /// The substring match also catches legitimately named pages such as
    /// `500-level-responses.mdx`. That is the established behavior.
    pub fn is_excluded(&self, file_name: &str) -> bool {
        if self.content.exclude_files.iter().any(|f| f == file_name) {
            return true;
        }

        self.content
            .exclude_patterns
            .iter()
            .any(|pattern| file_name.contains(pattern.as_str()))
    }

    /// Base name of a content file, or `None` when the extension is not a
    /// content format or nothing is left once it is stripped.
    pub fn content_stem<'n>(&self, file_name: &'n str) -> Option<&'n str> {
        self.content.extensions.iter().find_map(|ext| {
            let ext = ext.trim_start_matches('.');
            file_name
                .strip_suffix(ext)
                .and_then(|rest| rest.strip_suffix('.'))
                .filter(|stem| !stem.is_empty())
        })
    }
}

fn join_prefix(prefix: &str, relative_dir: &Path) -> String {
    let mut segments: Vec<String> = Vec::new();
    if !prefix.is_empty() {
        segments.push(prefix.to_string());
    }
    segments.extend(
        relative_dir
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );
    segments.join("/")
}
