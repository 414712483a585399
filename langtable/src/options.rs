//! Options controlling how a translations directory is loaded.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::formats::Format;

/// What to do when two files produce the same dotted key for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateKeys {
    /// The file that sorts later by path wins; a warning is logged.
    #[default]
    Overwrite,
    /// Fail the load with [`crate::Error::DuplicateKey`].
    Reject,
}

/// Load options for [`crate::Resolver::new`] and [`crate::loader::load`].
///
/// Deserializable so a host application can embed it in its own config:
///
/// ```rust
/// use langtable::{DuplicateKeys, Format, LoadOptions};
///
/// let options: LoadOptions = serde_json::from_str(
///     r#"{ "root_dir": "i18n", "format": "yaml", "duplicate_keys": "reject" }"#,
/// )?;
/// assert_eq!(options.format, Format::Yaml);
/// assert_eq!(options.duplicate_keys, DuplicateKeys::Reject);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoadOptions {
    /// Translations root. An empty path disables loading.
    #[serde(default)]
    pub root_dir: PathBuf,
    /// Format of every file under the root.
    pub format: Format,
    /// Collision policy for dotted keys.
    #[serde(default)]
    pub duplicate_keys: DuplicateKeys,
}

impl LoadOptions {
    /// Creates options for `root_dir` in `format`, overwriting duplicate keys.
    pub fn new(root_dir: impl Into<PathBuf>, format: Format) -> Self {
        Self {
            root_dir: root_dir.into(),
            format,
            duplicate_keys: DuplicateKeys::default(),
        }
    }

    /// Options with loading disabled.
    pub fn disabled(format: Format) -> Self {
        Self::new(PathBuf::new(), format)
    }

    /// Sets the duplicate-key policy.
    pub fn with_duplicate_keys(mut self, duplicate_keys: DuplicateKeys) -> Self {
        self.duplicate_keys = duplicate_keys;
        self
    }

    /// Shorthand for [`DuplicateKeys::Reject`] when `strict` is set.
    pub fn with_strict(self, strict: bool) -> Self {
        self.with_duplicate_keys(if strict {
            DuplicateKeys::Reject
        } else {
            DuplicateKeys::Overwrite
        })
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Whether a root directory was configured at all.
    pub fn is_enabled(&self) -> bool {
        !self.root_dir.as_os_str().is_empty()
    }
}
