use langtable::{TranslationTable, placeholder::placeholder_names};
use serde_json::json;

#[derive(Default)]
struct LangStats {
    entries: usize,
    with_placeholders: usize,
}

fn collect(table: &TranslationTable, lang: &str) -> LangStats {
    let mut stats = LangStats::default();
    for (_, text) in table.sorted_entries(lang) {
        stats.entries += 1;
        if !placeholder_names(text).is_empty() {
            stats.with_placeholders += 1;
        }
    }
    stats
}

pub fn print_stats(table: &TranslationTable, json_output: bool) -> Result<(), String> {
    let languages = table.languages();

    if json_output {
        let per_lang: Vec<_> = languages
            .iter()
            .map(|lang| {
                let stats = collect(table, lang);
                json!({
                    "language": lang,
                    "entries": stats.entries,
                    "with_placeholders": stats.with_placeholders,
                })
            })
            .collect();
        let body = json!({
            "summary": {
                "languages": table.language_count(),
                "entries": table.entry_count(),
            },
            "languages": per_lang,
        });
        let json = serde_json::to_string_pretty(&body)
            .map_err(|e| format!("Error serializing to JSON: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    println!("=== Stats ===");
    println!("Languages: {}", table.language_count());
    println!("Entries: {}", table.entry_count());

    for lang in languages {
        let stats = collect(table, lang);
        println!("\nLanguage: {}", lang);
        println!("  Entries: {}", stats.entries);
        println!("  With placeholders: {}", stats.with_placeholders);
    }
    Ok(())
}
