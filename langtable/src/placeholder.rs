//! Named placeholder substitution.
//!
//! A placeholder is `{name}`, where `name` is one or more characters other than
//! braces. Placeholders without a matching argument are left in the output
//! verbatim, so a missing argument is visible rather than silently dropped.

use std::{collections::HashMap, fmt::Display};

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref PLACEHOLDER_REGEX: Regex = Regex::new(r"\{([^{}]+)\}").unwrap();
}

/// Named arguments for one resolve call.
///
/// Values are stringified through [`Display`] when they are added.
///
/// ```rust
/// use langtable::Args;
///
/// let args = Args::new().with("name", "Ann").with("count", 3);
/// assert_eq!(args.get("count"), Some("3"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    values: HashMap<String, String>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name`, replacing any earlier value, and returns `self` for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds `name`, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) -> Option<String> {
        self.values.insert(name.into(), value.to_string())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Args {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Args::new();
        for (name, value) in iter {
            args.insert(name, value);
        }
        args
    }
}

impl<K: Into<String>, V: Display, const N: usize> From<[(K, V); N]> for Args {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Finds the value for `name`; later maps take precedence over earlier ones.
fn lookup<'a>(args: &'a [Args], name: &str) -> Option<&'a str> {
    args.iter().rev().find_map(|map| map.get(name))
}

/// Replaces every `{name}` in `text` with its value from `args`.
///
/// Substituted values are not scanned again, so a value that itself looks like
/// a placeholder is inserted literally.
///
/// ```rust
/// use langtable::{Args, placeholder::substitute};
///
/// let text = substitute("Hi {name}, {missing}", &[Args::from([("name", "Ann")])]);
/// assert_eq!(text, "Hi Ann, {missing}");
/// ```
pub fn substitute(text: &str, args: &[Args]) -> String {
    if args.iter().all(Args::is_empty) || !text.contains('{') {
        return text.to_string();
    }
    PLACEHOLDER_REGEX
        .replace_all(text, |caps: &Captures<'_>| match lookup(args, &caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Names of the placeholders in `text`, in order of occurrence.
pub fn placeholder_names(text: &str) -> Vec<&str> {
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}
