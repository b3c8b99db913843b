// Route descriptors and the order they are published in

pub mod walker;

pub use walker::*;

use crate::error::{Error, Result};
use feruca::{Collator, Locale, Tailoring};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Base name that collapses into its directory's route
pub const INDEX_STEM: &str = "index";

pub const ROOT_PRIORITY: f32 = 1.0;
pub const SECTION_PRIORITY: f32 = 0.8;
pub const PAGE_PRIORITY: f32 = 0.7;

/// Update cadence hint emitted as `<changefreq>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChangeFrequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            "never" => Ok(Self::Never),
            _ => Err(Error::config_validation(format!(
                "Invalid changefreq value: {s}"
            ))),
        }
    }
}

/// One publishable page discovered in the content tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDescriptor {
    /// Absolute route path, `/`-separated, no trailing slash except for `/`
    pub url: String,
    pub priority: f32,
    pub change_frequency: ChangeFrequency,
}

impl RouteDescriptor {
    /// Classify a content file by its extension-less `stem`, given the
    /// `/`-joined directory prefix it was found under.
    ///
    /// `index` collapses into the directory route; the top-level index is
    /// the site root.
    pub fn from_content_file(prefix: &str, stem: &str) -> Self {
        if stem == INDEX_STEM {
            if prefix.is_empty() {
                Self {
                    url: "/".to_string(),
                    priority: ROOT_PRIORITY,
                    change_frequency: ChangeFrequency::Daily,
                }
            } else {
                Self {
                    url: normalize_separators(&format!("/{prefix}")),
                    priority: SECTION_PRIORITY,
                    change_frequency: ChangeFrequency::Weekly,
                }
            }
        } else {
            let url = if prefix.is_empty() {
                format!("/{stem}")
            } else {
                format!("/{prefix}/{stem}")
            };
            Self {
                url: normalize_separators(&url),
                priority: PAGE_PRIORITY,
                change_frequency: ChangeFrequency::Weekly,
            }
        }
    }

    pub fn is_root(&self) -> bool {
        self.url == "/"
    }
}

/// Rewrite OS-native separators so routes are always `/`-joined
pub fn normalize_separators(url: &str) -> String {
    url.replace('\\', "/")
}

/// Order routes for publication: `/` first, the rest by Unicode collation.
///
/// The sort is stable and looks at nothing but the url.
pub fn sort_routes(routes: &mut [RouteDescriptor]) {
    let mut collator = url_collator();
    routes.sort_by(|a, b| match (a.is_root(), b.is_root()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => collator.collate(a.url.as_str(), b.url.as_str()),
    });
}

/// Compare two urls the way `sort_routes` orders non-root routes
pub fn compare_urls(a: &str, b: &str) -> Ordering {
    url_collator().collate(a, b)
}

/// CLDR root collation with punctuation kept significant, lowercase before
/// uppercase, and a code point tie-break for canonically equal strings.
fn url_collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}
