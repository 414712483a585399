use langtable::TranslationTable;
use serde_json::{Map, Value};

/// Print every entry as `lang<TAB>key<TAB>value`, or as `{lang: {key: value}}` JSON.
///
/// Languages and keys are sorted.
pub fn print_keys(
    table: &TranslationTable,
    lang_filter: &Option<String>,
    json_output: bool,
) -> Result<(), String> {
    let languages = match lang_filter {
        Some(lang) if !table.has_language(lang) => {
            return Err(format!("No translations found for language: {}", lang));
        }
        Some(lang) => vec![lang.as_str()],
        None => table.languages(),
    };

    if json_output {
        let mut body = Map::new();
        for lang in languages {
            let entries: Map<String, Value> = table
                .sorted_entries(lang)
                .into_iter()
                .map(|(key, text)| (key.to_string(), Value::String(text.to_string())))
                .collect();
            body.insert(lang.to_string(), Value::Object(entries));
        }
        let json = serde_json::to_string_pretty(&Value::Object(body))
            .map_err(|e| format!("Error serializing to JSON: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    for lang in languages {
        for (key, text) in table.sorted_entries(lang) {
            println!("{}", format_line(lang, key, text));
        }
    }
    Ok(())
}

/// One `lang<TAB>key<TAB>value` row, with the key and value escaped.
fn format_line(lang: &str, key: &str, text: &str) -> String {
    format!("{}\t{}\t{}", lang, escape_line(key), escape_line(text))
}

/// Keeps one entry per line by escaping line breaks and tabs.
fn escape_line(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
