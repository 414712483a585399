//! Read path over a loaded [`TranslationTable`].

use std::path::Path;

use crate::{
    error::Error,
    formats::Format,
    loader,
    options::LoadOptions,
    placeholder::{Args, substitute},
    types::TranslationTable,
};

/// Resolves `(language, key)` pairs to display text.
///
/// The table is loaded once by the constructor and never changes afterwards, so
/// a `Resolver` can be shared between threads (for example behind an `Arc`)
/// without locking.
///
/// # Example
///
/// ```rust,no_run
/// use langtable::{Args, Format, Resolver};
///
/// let resolver = Resolver::load("i18n", Format::Json)?;
/// let greeting = resolver.resolve_with("en", "home.greeting", &[Args::from([("name", "Ann")])]);
/// println!("{greeting}");
/// # Ok::<(), langtable::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    table: TranslationTable,
}

impl Resolver {
    /// Loads the table described by `options`.
    ///
    /// Fails without producing a resolver if any file cannot be read or decoded.
    pub fn new(options: &LoadOptions) -> Result<Self, Error> {
        loader::load(options).map(Self::from_table)
    }

    /// Loads every `<language>.<format>` file under `root`.
    pub fn load<P: AsRef<Path>>(root: P, format: Format) -> Result<Self, Error> {
        Self::new(&LoadOptions::new(root.as_ref(), format))
    }

    /// A resolver with no translations; every lookup echoes the key.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps an already built table.
    pub fn from_table(table: TranslationTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Resolves `key` for `language` without arguments.
    ///
    /// Unknown languages and unknown keys resolve to `key` itself. Placeholders
    /// in the stored text are kept as-is.
    pub fn resolve(&self, language: &str, key: &str) -> String {
        self.resolve_with(language, key, &[])
    }

    /// Resolves `key` for `language`, substituting `{name}` placeholders from
    /// `args`. Later argument maps take precedence over earlier ones.
    pub fn resolve_with(&self, language: &str, key: &str, args: &[Args]) -> String {
        match self.table.get(language, key) {
            Some(text) => substitute(text, args),
            None => key.to_string(),
        }
    }

    /// Whether `key` has a translation for `language`.
    pub fn has(&self, language: &str, key: &str) -> bool {
        self.table.contains_key(language, key)
    }
}
