use crate::expand::expand;
use serde::{Deserialize, Serialize};

/// Format version used when constructing documents programmatically
pub const DEFAULT_VERSION: u32 = 4;

/// A parsed watch file: declared version, global options and entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchFile {
    pub version: u32,
    /// Options declared on standalone `opts=` lines, in declaration order
    pub options: Vec<String>,
    /// Upstream-source entries, in file order
    pub entries: Vec<Watch>,
}

impl WatchFile {
    pub fn new() -> Self {
        Self {
            version: DEFAULT_VERSION,
            options: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// True when the document declares no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for WatchFile {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a WatchFile {
    type Item = &'a Watch;
    type IntoIter = std::slice::Iter<'a, Watch>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// One upstream-source entry of a watch file.
///
/// `options` distinguishes a line that carried no `opts=` clause (`None`)
/// from one whose clause yielded no tokens (`Some` of an empty vector);
/// both serialize identically but compare unequal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watch {
    pub url: String,
    pub matching_pattern: Option<String>,
    pub version_policy: Option<String>,
    pub script: Option<String>,
    pub options: Option<Vec<String>>,
}

impl Watch {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            matching_pattern: None,
            version_policy: None,
            script: None,
            options: None,
        }
    }

    pub fn with_pattern(url: impl Into<String>, matching_pattern: impl Into<String>) -> Self {
        Self {
            matching_pattern: Some(matching_pattern.into()),
            ..Self::new(url)
        }
    }

    /// Expand the macro vocabulary in this entry's URL for a concrete
    /// source package name
    pub fn format_url(&self, package: &str) -> String {
        expand(&self.url, package)
    }

    /// True when the entry carries at least one local option
    pub fn has_options(&self) -> bool {
        self.options.as_ref().is_some_and(|opts| !opts.is_empty())
    }
}
