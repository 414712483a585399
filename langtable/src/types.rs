//! The flattened translation table shared by the loader and the resolver.

use std::collections::HashMap;

/// Flat entries of one language: dotted key to translated text.
pub type Entries = HashMap<String, String>;

/// Mapping from language code to that language's flat entries.
///
/// Built once by the loader and read-only afterwards; nothing on the public
/// surface mutates a table once it has been handed out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    languages: HashMap<String, Entries>,
}

impl TranslationTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, returning the text it replaced, if any.
    pub(crate) fn insert(
        &mut self,
        language: &str,
        key: String,
        text: String,
    ) -> Option<String> {
        self.languages
            .entry(language.to_string())
            .or_default()
            .insert(key, text)
    }

    /// Ensures `language` is present even if it has no entries yet.
    pub(crate) fn add_language(&mut self, language: &str) {
        self.languages.entry(language.to_string()).or_default();
    }

    /// Looks up the text stored for `key` in `language`.
    pub fn get(&self, language: &str, key: &str) -> Option<&str> {
        self.languages
            .get(language)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// Whether any file for `language` was loaded.
    pub fn has_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// Whether `key` exists for `language`.
    pub fn contains_key(&self, language: &str, key: &str) -> bool {
        self.get(language, key).is_some()
    }

    /// All language codes, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    /// The raw entries of one language.
    pub fn entries(&self, language: &str) -> Option<&Entries> {
        self.languages.get(language)
    }

    /// Entries of one language sorted by key. Empty for an unknown language.
    pub fn sorted_entries(&self, language: &str) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .languages
            .get(language)
            .map(|entries| {
                entries
                    .iter()
                    .map(|(key, text)| (key.as_str(), text.as_str()))
                    .collect()
            })
            .unwrap_or_default();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Number of languages.
    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    /// Number of entries across all languages.
    pub fn entry_count(&self) -> usize {
        self.languages.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl<L, K, V> FromIterator<(L, K, V)> for TranslationTable
where
    L: AsRef<str>,
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, K, V)>>(iter: I) -> Self {
        let mut table = TranslationTable::new();
        for (language, key, text) in iter {
            table.insert(language.as_ref(), key.into(), text.into());
        }
        table
    }
}
