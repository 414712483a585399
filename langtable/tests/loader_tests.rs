use indoc::indoc;
use langtable::{DuplicateKeys, Error, Format, LoadOptions, Resolver, load, load_dir};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[derive(Clone)]
struct ExpectedValue {
    language: &'static str,
    key: &'static str,
    value: &'static str,
}

struct LoadCase {
    name: &'static str,
    format: Format,
    files: Vec<(&'static str, &'static str)>,
    expected_values: Vec<ExpectedValue>,
    expected_entries: usize,
}

fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (relative, contents) in files {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }
}

fn expected(language: &'static str, key: &'static str, value: &'static str) -> ExpectedValue {
    ExpectedValue {
        language,
        key,
        value,
    }
}

fn load_cases() -> Vec<LoadCase> {
    vec![
        LoadCase {
            name: "json tree",
            format: Format::Json,
            files: vec![
                ("en.json", r#"{"title": "Home", "menu": {"open": "Open", "close": "Close"}}"#),
                ("fr.json", r#"{"title": "Accueil"}"#),
                ("messages/en.json", r#"{"errors": {"not_found": "Not found"}}"#),
                ("messages/errors/en.json", r#"{"not_found": {"title": "Missing"}}"#),
            ],
            expected_values: vec![
                expected("en", "title", "Home"),
                expected("en", "menu.open", "Open"),
                expected("en", "menu.close", "Close"),
                expected("fr", "title", "Accueil"),
                expected("en", "messages.errors.not_found", "Not found"),
                expected("en", "messages.errors.not_found.title", "Missing"),
            ],
            expected_entries: 6,
        },
        LoadCase {
            name: "yaml tree",
            format: Format::Yaml,
            files: vec![
                (
                    "en.yaml",
                    indoc! {"
                        title: Home
                        menu:
                          open: Open
                          close: Close
                    "},
                ),
                (
                    "settings/de.yaml",
                    indoc! {"
                        audio:
                          volume: Lautstärke
                          muted: false
                    "},
                ),
            ],
            expected_values: vec![
                expected("en", "title", "Home"),
                expected("en", "menu.open", "Open"),
                expected("en", "menu.close", "Close"),
                expected("de", "settings.audio.volume", "Lautstärke"),
                expected("de", "settings.audio.muted", "false"),
            ],
            expected_entries: 5,
        },
        LoadCase {
            name: "toml tree",
            format: Format::Toml,
            files: vec![
                (
                    "en.toml",
                    indoc! {r#"
                        title = "Home"

                        [menu]
                        open = "Open"
                    "#},
                ),
                (
                    "shop/cart/en.toml",
                    indoc! {r#"
                        [summary]
                        items = "You have {count} items"
                        limit = 10
                    "#},
                ),
            ],
            expected_values: vec![
                expected("en", "title", "Home"),
                expected("en", "menu.open", "Open"),
                expected("en", "shop.cart.summary.items", "You have {count} items"),
                expected("en", "shop.cart.summary.limit", "10"),
            ],
            expected_entries: 4,
        },
    ]
}

#[test]
fn load_translation_trees_table_driven() {
    for case in load_cases() {
        let temp_dir = TempDir::new().unwrap();
        write_files(temp_dir.path(), &case.files);

        let table = load_dir(temp_dir.path(), case.format)
            .unwrap_or_else(|e| panic!("{}: load failed: {}", case.name, e));

        for expected in &case.expected_values {
            assert_eq!(
                table.get(expected.language, expected.key),
                Some(expected.value),
                "{}: value mismatch for {}:{}",
                case.name,
                expected.language,
                expected.key
            );
        }
        assert_eq!(
            table.entry_count(),
            case.expected_entries,
            "{}: unexpected entry count",
            case.name
        );
    }
}

#[test]
fn test_nested_key_resolvable_only_for_its_language() {
    let temp_dir = TempDir::new().unwrap();
    write_files(
        temp_dir.path(),
        &[
            ("messages/en.json", r#"{"errors":{"not_found":"Not found"}}"#),
            ("fr.json", r#"{"title":"Accueil"}"#),
        ],
    );

    let resolver = Resolver::load(temp_dir.path(), Format::Json).unwrap();
    assert_eq!(
        resolver.resolve("en", "messages.errors.not_found"),
        "Not found"
    );
    assert_eq!(
        resolver.resolve("fr", "messages.errors.not_found"),
        "messages.errors.not_found"
    );
}

#[test]
fn test_all_sibling_maps_are_flattened() {
    let temp_dir = TempDir::new().unwrap();
    write_files(
        temp_dir.path(),
        &[(
            "en.json",
            r#"{"a": {"x": "1"}, "b": {"y": "2"}, "c": {"z": {"w": "3"}}}"#,
        )],
    );

    let table = load_dir(temp_dir.path(), Format::Json).unwrap();
    assert_eq!(table.get("en", "a.x"), Some("1"));
    assert_eq!(table.get("en", "b.y"), Some("2"));
    assert_eq!(table.get("en", "c.z.w"), Some("3"));
    assert_eq!(table.entry_count(), 3);
}

#[test]
fn test_other_extensions_are_ignored() {
    let temp_dir = TempDir::new().unwrap();
    write_files(
        temp_dir.path(),
        &[
            ("en.json", r#"{"title": "Home"}"#),
            ("en.yaml", "title: [broken"),
            ("fr.JSON", "not json at all"),
            ("README.md", "# translations"),
        ],
    );

    let table = load_dir(temp_dir.path(), Format::Json).unwrap();
    assert_eq!(table.languages(), vec!["en"]);
    assert_eq!(table.get("en", "title"), Some("Home"));
}

#[test]
fn test_empty_root_disables_loading() {
    let table = load(&LoadOptions::disabled(Format::Json)).unwrap();
    assert!(table.is_empty());

    let resolver = Resolver::new(&LoadOptions::new("", Format::Yaml)).unwrap();
    assert_eq!(resolver.resolve("en", "any.key"), "any.key");
    assert_eq!(resolver.resolve("fr", "other"), "other");
}

#[test]
fn test_empty_directory_loads_empty_table() {
    let temp_dir = TempDir::new().unwrap();
    let table = load_dir(temp_dir.path(), Format::Toml).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_nonexistent_root_is_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");

    let err = Resolver::load(&missing, Format::Json).unwrap_err();
    assert!(err.is_configuration(), "unexpected error: {err:?}");
    assert!(err.to_string().contains("does-not-exist"));
}

#[test]
fn test_malformed_file_is_parse_error_naming_file() {
    let cases: [(Format, &str, &str); 3] = [
        (Format::Json, "broken/en.json", "{ \"title\": "),
        (Format::Yaml, "broken/en.yaml", "title: [unclosed"),
        (Format::Toml, "broken/en.toml", "title = "),
    ];

    for (format, relative, contents) in cases {
        let temp_dir = TempDir::new().unwrap();
        write_files(
            temp_dir.path(),
            &[(relative, contents), ("good/en.json", r#"{"ok": "yes"}"#)],
        );

        let err = Resolver::load(temp_dir.path(), format).unwrap_err();
        match &err {
            Error::Parse {
                path,
                format: failed_format,
                ..
            } => {
                assert!(path.ends_with(relative), "{format}: wrong path {path:?}");
                assert_eq!(*failed_format, format);
            }
            other => panic!("{format}: unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains(&format!("as {format}")));
    }
}

#[test]
fn test_non_map_root_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    write_files(temp_dir.path(), &[("en.json", r#"["not", "a", "map"]"#)]);

    let err = load_dir(temp_dir.path(), Format::Json).unwrap_err();
    assert!(err.is_parse());
    assert!(err.to_string().contains("expected a mapping"));
}

#[test]
fn test_duplicate_keys_later_path_wins() {
    let temp_dir = TempDir::new().unwrap();
    write_files(
        temp_dir.path(),
        &[
            ("en.json", r#"{"menu": {"open": "from root"}}"#),
            ("menu/en.json", r#"{"open": "from menu dir"}"#),
        ],
    );

    // Repeat to make sure the outcome does not vary between walks.
    for _ in 0..3 {
        let table = load_dir(temp_dir.path(), Format::Json).unwrap();
        assert_eq!(table.get("en", "menu.open"), Some("from menu dir"));
    }
}

#[test]
fn test_duplicate_keys_rejected_when_configured() {
    let temp_dir = TempDir::new().unwrap();
    write_files(
        temp_dir.path(),
        &[
            ("en.json", r#"{"menu": {"open": "from root"}}"#),
            ("menu/en.json", r#"{"open": "from menu dir"}"#),
            ("menu/fr.json", r#"{"open": "Ouvrir"}"#),
        ],
    );

    let options =
        LoadOptions::new(temp_dir.path(), Format::Json).with_duplicate_keys(DuplicateKeys::Reject);
    let err = Resolver::new(&options).unwrap_err();
    assert!(matches!(
        err,
        Error::DuplicateKey { ref language, ref key, .. } if language == "en" && key == "menu.open"
    ));
}

#[test]
fn test_same_key_in_different_languages_is_not_a_duplicate() {
    let temp_dir = TempDir::new().unwrap();
    write_files(
        temp_dir.path(),
        &[
            ("en.json", r#"{"title": "Home"}"#),
            ("fr.json", r#"{"title": "Accueil"}"#),
        ],
    );

    let options = LoadOptions::new(temp_dir.path(), Format::Json).with_strict(true);
    let table = load(&options).unwrap();
    assert_eq!(table.language_count(), 2);
}

#[test]
fn test_file_with_empty_document_registers_language() {
    let temp_dir = TempDir::new().unwrap();
    write_files(temp_dir.path(), &[("ja.yaml", "")]);

    let table = load_dir(temp_dir.path(), Format::Yaml).unwrap();
    assert!(table.has_language("ja"));
    assert_eq!(table.entry_count(), 0);
}
