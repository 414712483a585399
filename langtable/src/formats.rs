//! All supported translation file formats for langtable.
//!
//! Each format module exposes a `decode` function turning raw file bytes into a
//! [`Value`] tree. [`Format::decoder`] is the dispatch table from format to decoder.

pub mod json;
pub mod toml;
pub mod yaml;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::Deserialize;

use crate::{
    error::{DecodeError, Error},
    value::Value,
};

/// Signature shared by every format decoder.
pub type Decoder = fn(&[u8]) -> Result<Value, DecodeError>;

/// Represents all supported translation file formats.
///
/// A loader is configured with exactly one format, which selects both the file
/// extension filter and the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `.json` documents.
    Json,
    /// `.yaml` documents. `.yml` files are not loaded.
    Yaml,
    /// `.toml` documents.
    Toml,
}

/// Implements [`std::fmt::Display`] for [`Format`].
///
/// # Example
/// ```rust
/// use langtable::Format;
/// assert_eq!(Format::Json.to_string(), "json");
/// assert_eq!(Format::Yaml.to_string(), "yaml");
/// assert_eq!(Format::Toml.to_string(), "toml");
/// ```
impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Implements [`std::str::FromStr`] for [`Format`].
///
/// Case-insensitive. Only the names that match a loaded extension are
/// accepted, so `yml` is rejected. Returns
/// [`crate::error::Error::UnknownFormat`] for anything else.
///
/// # Example
/// ```rust
/// use langtable::Format;
/// use std::str::FromStr;
/// assert_eq!(Format::from_str("JSON").unwrap(), Format::Json);
/// assert!(Format::from_str("yml").is_err());
/// assert!(Format::from_str("ini").is_err());
/// ```
impl FromStr for Format {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "json" => Ok(Format::Json),
            "yaml" => Ok(Format::Yaml),
            "toml" => Ok(Format::Toml),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

impl Format {
    /// Every supported format.
    pub const ALL: [Format; 3] = [Format::Json, Format::Yaml, Format::Toml];

    /// Lowercase name of the format.
    pub fn name(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Toml => "toml",
        }
    }

    /// The file extension, without the dot, that this format loads.
    pub fn extension(self) -> &'static str {
        self.name()
    }

    /// Returns the decoder for this format.
    pub fn decoder(self) -> Decoder {
        match self {
            Format::Json => self::json::decode,
            Format::Yaml => self::yaml::decode,
            Format::Toml => self::toml::decode,
        }
    }

    /// Decodes `bytes` into a document tree rooted at a map.
    pub fn decode(self, bytes: &[u8]) -> Result<Value, DecodeError> {
        (self.decoder())(bytes)
    }

    /// Strips `.<extension>` from a file name, returning the language code.
    ///
    /// Matching is case-sensitive. Returns `None` when the name does not carry
    /// this format's extension or nothing is left once it is removed.
    ///
    /// # Example
    /// ```rust
    /// use langtable::Format;
    /// assert_eq!(Format::Json.language_of("en.json"), Some("en"));
    /// assert_eq!(Format::Json.language_of("en.JSON"), None);
    /// assert_eq!(Format::Json.language_of(".json"), None);
    /// ```
    pub fn language_of(self, file_name: &str) -> Option<&str> {
        file_name
            .strip_suffix(self.extension())
            .and_then(|stem| stem.strip_suffix('.'))
            .filter(|lang| !lang.is_empty())
    }
}

/// Error for a document whose root is not a mapping.
pub(crate) fn root_not_a_map(found: &str) -> DecodeError {
    format!("expected a mapping at the document root, found {found}").into()
}
