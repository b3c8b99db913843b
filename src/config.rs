use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "pagemap.toml";

pub const DEFAULT_BASE_URL: &str = "https://server.localzet.com";
pub const DEFAULT_CONTENT_DIR: &str = "src/pages";
pub const DEFAULT_OUTPUT_FILE: &str = "public/sitemap.xml";
pub const DEFAULT_EXTENSIONS: &[&str] = &["mdx"];

/// Framework entry points that never become routes
pub const DEFAULT_EXCLUDE_FILES: &[&str] = &["_app.jsx", "_document.jsx", "_error.jsx"];

/// Any file whose name contains one of these is skipped, wherever it appears
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &["_app", "_document", "_error", "404", "500"];

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub content: ContentConfig,
    pub output: OutputConfig,
}

/// Published site settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute origin prepended to every route, without a trailing slash
    pub base_url: String,
}

/// Content tree settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub directory: PathBuf,
    pub extensions: Vec<String>,
    pub exclude_files: Vec<String>,
    pub exclude_patterns: Vec<String>,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub file: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_CONTENT_DIR),
            extensions: to_strings(DEFAULT_EXTENSIONS),
            exclude_files: to_strings(DEFAULT_EXCLUDE_FILES),
            exclude_patterns: to_strings(DEFAULT_EXCLUDE_PATTERNS),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load an explicitly requested config file, or `pagemap.toml` in the
    /// working directory when it exists, or fall back to defaults.
    ///
    /// A config file that exists but fails to load is an error, never a
    /// silent fallback.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(
        &mut self,
        content_dir: Option<PathBuf>,
        output: Option<PathBuf>,
        base_url: Option<String>,
    ) {
        if let Some(dir) = content_dir {
            self.content.directory = dir;
        }

        if let Some(out) = output {
            self.output.file = out;
        }

        if let Some(url) = base_url {
            self.site.base_url = url;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let base_url = &self.site.base_url;
        if base_url.is_empty() {
            return Err(Error::config_validation("base_url must not be empty"));
        }

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::config_validation(format!(
                "base_url must start with http:// or https://, got {base_url}"
            )));
        }

        if base_url.ends_with('/') {
            return Err(Error::config_validation(
                "base_url must not end with a slash",
            ));
        }

        if self.content.extensions.is_empty() {
            return Err(Error::config_validation(
                "at least one content extension required",
            ));
        }

        if self
            .content
            .extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.').is_empty())
        {
            return Err(Error::config_validation("content extensions must not be empty"));
        }

        if self.output.file.as_os_str().is_empty() {
            return Err(Error::config_validation("output file must not be empty"));
        }

        Ok(())
    }
}
