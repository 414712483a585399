//! Walks a translations directory and flattens every matching file into a
//! [`TranslationTable`].
//!
//! A file `<root>/messages/errors/en.json` contributes to language `en`, and
//! each of its leaves is stored under `messages.errors.<nested.key>`.
//!
//! Files are visited in path order (component-wise, siblings sorted), so when
//! two files produce the same dotted key the outcome does not depend on the
//! platform's directory listing order.

use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

use ignore::WalkBuilder;
use tracing::{debug, info, warn};

use crate::{
    error::Error,
    formats::Format,
    options::{DuplicateKeys, LoadOptions},
    types::TranslationTable,
};

/// A translation file selected for loading.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SourceFile {
    path: PathBuf,
    language: String,
    prefix: String,
}

/// Loads `root` with default options.
pub fn load_dir<P: AsRef<Path>>(root: P, format: Format) -> Result<TranslationTable, Error> {
    load(&LoadOptions::new(root.as_ref(), format))
}

/// Builds a translation table from `options`.
///
/// An empty root yields an empty table. The table is only returned once every
/// file has been read and decoded; any failure discards it.
pub fn load(options: &LoadOptions) -> Result<TranslationTable, Error> {
    if !options.is_enabled() {
        debug!("no translations directory configured");
        return Ok(TranslationTable::new());
    }

    let root = options.root_dir();
    check_root(root)?;

    let files = collect_files(root, options.format)?;
    let mut table = TranslationTable::new();
    for file in &files {
        load_file(&mut table, file, options)?;
    }

    info!(
        root = %root.display(),
        format = %options.format,
        files = files.len(),
        languages = table.language_count(),
        entries = table.entry_count(),
        "loaded translations"
    );
    Ok(table)
}

fn check_root(root: &Path) -> Result<(), Error> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(Error::Configuration {
            path: root.to_path_buf(),
            reason: "not a directory",
        }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(Error::Configuration {
            path: root.to_path_buf(),
            reason: "directory does not exist",
        }),
        Err(err) => Err(Error::filesystem(root, err)),
    }
}

/// Lists the files under `root` named `<language>.<extension>`, in path order.
fn collect_files(root: &Path, format: Format) -> Result<Vec<SourceFile>, Error> {
    let mut files = Vec::new();

    for result in WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build()
    {
        let entry = result.map_err(|err| walk_error(root, err))?;

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Some(language) = entry
            .file_name()
            .to_str()
            .and_then(|name| format.language_of(name))
        else {
            debug!(path = %path.display(), "skipping file");
            continue;
        };

        files.push(SourceFile {
            path: path.to_path_buf(),
            language: language.to_string(),
            prefix: key_prefix(root, path),
        });
    }

    Ok(files)
}

fn walk_error(root: &Path, err: ignore::Error) -> Error {
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other(message));
    Error::filesystem(root, source)
}

/// Dotted prefix for `file`: its directory relative to `root`, joined with `.`.
fn key_prefix(root: &Path, file: &Path) -> String {
    file.parent()
        .and_then(|dir| dir.strip_prefix(root).ok())
        .map(|relative| {
            relative
                .components()
                .filter_map(|component| match component {
                    Component::Normal(segment) => Some(segment.to_string_lossy()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join(".")
        })
        .unwrap_or_default()
}

fn load_file(
    table: &mut TranslationTable,
    file: &SourceFile,
    options: &LoadOptions,
) -> Result<(), Error> {
    let bytes = fs::read(&file.path).map_err(|err| Error::filesystem(&file.path, err))?;
    let document = options
        .format
        .decode(&bytes)
        .map_err(|source| Error::Parse {
            path: file.path.clone(),
            format: options.format,
            source,
        })?;

    let entries = document.flatten(&file.prefix);
    debug!(
        path = %file.path.display(),
        language = %file.language,
        prefix = %file.prefix,
        entries = entries.len(),
        "loaded translation file"
    );

    table.add_language(&file.language);
    for (key, text) in entries {
        if options.duplicate_keys == DuplicateKeys::Reject
            && table.contains_key(&file.language, &key)
        {
            return Err(Error::DuplicateKey {
                language: file.language.clone(),
                key,
                path: file.path.clone(),
            });
        }
        if table.insert(&file.language, key.clone(), text).is_some() {
            warn!(
                language = %file.language,
                key = %key,
                path = %file.path.display(),
                "duplicate translation key overwritten"
            );
        }
    }

    Ok(())
}
