use langtable::{Args, Resolver};

/// Parses a `name=value` placeholder argument.
///
/// Only the first `=` separates name from value, so values may contain `=`.
pub fn parse_arg(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("Invalid argument '{}'. Expected name=value", s)),
    }
}

/// Resolve `key` and print it. Repeated names keep the last value.
pub fn print_resolved(resolver: &Resolver, lang: &str, key: &str, args: Vec<(String, String)>) {
    let args: Args = args.into_iter().collect();
    println!("{}", resolver.resolve_with(lang, key, &[args]));
}
