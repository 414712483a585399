#![forbid(unsafe_code)]
//! Flat, dotted-key translation tables loaded from JSON, YAML or TOML files.
//!
//! A translations directory holds one file per language and namespace:
//!
//! ```text
//! i18n/
//! ├── en.json                 { "title": "Home" }
//! ├── fr.json                 { "title": "Accueil" }
//! └── messages/
//!     └── en.json             { "errors": { "not_found": "Not found: {path}" } }
//! ```
//!
//! Loading it yields `title` for `en` and `fr`, and `messages.errors.not_found`
//! for `en` only. Lookups never fail: a missing language or key resolves to
//! the key itself.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langtable::{Args, Format, Resolver};
//!
//! let resolver = Resolver::load("i18n", Format::Json)?;
//! assert_eq!(resolver.resolve("fr", "title"), "Accueil");
//! assert_eq!(
//!     resolver.resolve_with("en", "messages.errors.not_found", &[Args::from([("path", "/x")])]),
//!     "Not found: /x"
//! );
//! assert_eq!(resolver.resolve("de", "title"), "title");
//! # Ok::<(), langtable::Error>(())
//! ```

pub mod error;
pub mod formats;
pub mod loader;
pub mod options;
pub mod placeholder;
pub mod resolver;
pub mod types;
pub mod value;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    formats::Format,
    loader::{load, load_dir},
    options::{DuplicateKeys, LoadOptions},
    placeholder::Args,
    resolver::Resolver,
    types::TranslationTable,
    value::Value,
};
