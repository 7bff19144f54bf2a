//! Translation lookup table
//!
//! Maps English source strings to their translations. Lookups first try the
//! text as-is (trimmed); failing that, they retry with markup stripped and
//! whitespace collapsed, and carry the markup over onto the translation.

use crate::transplant::{strip_tags, transplant_tags};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    /// Any run of whitespace, collapsed to a single space in lookup keys
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// How a piece of text was resolved against the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The trimmed text was a key in the table
    Exact { translation: String },
    /// The text matched only after stripping tags; `translation` carries
    /// the source's tags
    Restored { translation: String },
    /// No entry matched
    NotFound,
}

/// Normalize text into the form used for the fallback lookup
///
/// Removes all tags, trims, and collapses every whitespace run to one space.
///
/// # Example
/// ```ignore
/// assert_eq!(normalize_key("<b>Save</b>   <i>all</i> "), "Save all");
/// ```
pub fn normalize_key(text: &str) -> String {
    let stripped = strip_tags(text);
    WHITESPACE_RUN.replace_all(stripped.trim(), " ").into_owned()
}

/// English → translation table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable(HashMap<String, String>);

impl TranslationTable {
    pub fn new() -> Self {
        TranslationTable(HashMap::new())
    }

    /// Build a table from `(english, translation)` pairs; later pairs win
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut table = TranslationTable::new();
        for (english, translation) in pairs {
            table.with_entry(english.as_ref(), translation.as_ref());
        }
        table
    }

    /// Add an entry, trimming both sides. Replaces any existing entry.
    pub fn with_entry(&mut self, english: &str, translation: &str) -> &mut Self {
        self.0
            .insert(english.trim().to_owned(), translation.trim().to_owned());
        self
    }

    pub fn get_exact(&self, english: &str) -> Option<&String> {
        self.0.get(english)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve `text` to a translation
    ///
    /// # Returns
    /// * `LookupOutcome::Exact` - the trimmed text is a key
    /// * `LookupOutcome::Restored` - the normalized text is a key; the
    ///   translation has the source's tags transplanted into it
    /// * `LookupOutcome::NotFound` - neither form is a key
    ///
    /// # Example
    /// ```ignore
    /// let table = TranslationTable::from_pairs([("Go Now", "Go Immediately")]);
    /// assert_eq!(
    ///     table.resolve("Go <b>Now</b>"),
    ///     LookupOutcome::Restored { translation: "Go <b>Immediately</b>".into() }
    /// );
    /// ```
    pub fn resolve(&self, text: &str) -> LookupOutcome {
        let english = text.trim();

        if let Some(translation) = self.get_exact(english) {
            return LookupOutcome::Exact {
                translation: translation.clone(),
            };
        }

        match self.get_exact(&normalize_key(english)) {
            Some(translation) => LookupOutcome::Restored {
                translation: transplant_tags(english, translation),
            },
            None => LookupOutcome::NotFound,
        }
    }
}
