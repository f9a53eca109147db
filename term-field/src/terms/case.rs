//! Letter case applied to terms derived from identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How words of an identifier are cased and joined when rendered as a term.
///
/// # Examples
///
/// ```rust
/// use term_field::terms::TermCase;
///
/// assert_eq!(TermCase::Title.apply("InProgress"), "In Progress");
/// assert_eq!(TermCase::Kebab.apply("InProgress"), "in-progress");
/// assert_eq!(TermCase::Sentence.apply("in_progress"), "In progress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermCase {
    /// Keep the identifier unchanged
    None,
    /// "In Progress"
    #[default]
    Title,
    /// "In progress"
    Sentence,
    /// "in progress"
    Lower,
    /// "IN PROGRESS"
    Upper,
    /// "inProgress"
    Camel,
    /// "InProgress"
    Pascal,
    /// "in-progress"
    Kebab,
    /// "in_progress"
    Snake,
}

impl TermCase {
    /// Renders `identifier` in this case.
    pub fn apply(&self, identifier: &str) -> String {
        if *self == TermCase::None {
            return identifier.to_string();
        }

        let words = split_words(identifier);
        match self {
            TermCase::None => identifier.to_string(),
            TermCase::Title => words
                .iter()
                .map(|w| capitalize(w))
                .collect::<Vec<_>>()
                .join(" "),
            TermCase::Sentence => {
                let lower = words
                    .iter()
                    .map(|w| w.to_lowercase())
                    .collect::<Vec<_>>()
                    .join(" ");
                capitalize(&lower)
            }
            TermCase::Lower => words
                .iter()
                .map(|w| w.to_lowercase())
                .collect::<Vec<_>>()
                .join(" "),
            TermCase::Upper => words
                .iter()
                .map(|w| w.to_uppercase())
                .collect::<Vec<_>>()
                .join(" "),
            TermCase::Camel => words
                .iter()
                .enumerate()
                .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
                .collect(),
            TermCase::Pascal => words.iter().map(|w| capitalize(w)).collect(),
            TermCase::Kebab => words
                .iter()
                .map(|w| w.to_lowercase())
                .collect::<Vec<_>>()
                .join("-"),
            TermCase::Snake => words
                .iter()
                .map(|w| w.to_lowercase())
                .collect::<Vec<_>>()
                .join("_"),
        }
    }
}

impl fmt::Display for TermCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TermCase::None => "none",
            TermCase::Title => "title",
            TermCase::Sentence => "sentence",
            TermCase::Lower => "lower",
            TermCase::Upper => "upper",
            TermCase::Camel => "camel",
            TermCase::Pascal => "pascal",
            TermCase::Kebab => "kebab",
            TermCase::Snake => "snake",
        };
        write!(f, "{name}")
    }
}

/// Splits an identifier into words on separators and lower-to-upper
/// transitions. An uppercase run followed by lowercase keeps its last letter
/// with the next word ("HTTPServer" -> "HTTP", "Server").
fn split_words(identifier: &str) -> Vec<String> {
    let chars: Vec<char> = identifier.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if ch.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(ch);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
