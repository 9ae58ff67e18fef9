//! Man-page metadata.
//!
//! Controls the `.TH` title line and the SEE ALSO trailer. The defaults
//! describe `mcelog.conf(5)`, so a page config file is only needed when
//! documenting a different config file.
//!
//! # Example YAML
//!
//! ```yaml
//! title: mcelog.conf
//! section: "5"
//! source: mcelog
//! see_also:
//!   - name: mcelog
//!     section: "8"
//!   - name: mcelog.triggers
//!     section: "5"
//! url: http://www.mcelog.org
//! ```

use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

/// A man page listed under SEE ALSO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManReference {
    pub name: String,
    /// Manual section, e.g. `"8"`. Quote it in YAML.
    pub section: String,
}

impl ManReference {
    pub fn new(name: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            section: section.into(),
        }
    }
}

/// Metadata for the generated page. Missing YAML fields take the defaults.
///
/// # Examples
///
/// ```
/// use confman_core::PageConfig;
///
/// let page = PageConfig::default();
/// assert_eq!(page.title, "mcelog.conf");
/// assert_eq!(page.section, "5");
/// assert_eq!(page.see_also.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page name used in the `.TH` line and the generated-file notice.
    pub title: String,
    pub section: String,
    /// Third `.TH` argument, usually the package name.
    pub source: String,
    pub see_also: Vec<ManReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "mcelog.conf".to_string(),
            section: "5".to_string(),
            source: "mcelog".to_string(),
            see_also: vec![
                ManReference::new("mcelog", "8"),
                ManReference::new("mcelog.triggers", "5"),
            ],
            url: Some("http://www.mcelog.org".to_string()),
        }
    }
}

impl PageConfig {
    /// Loads a page config from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Io`] if the file cannot be read and
    /// [`GenError::PageConfig`] if it is not a valid page config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|err| GenError::io(path, err))?;
        serde_yaml::from_reader(BufReader::new(file)).map_err(|source| GenError::PageConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}
