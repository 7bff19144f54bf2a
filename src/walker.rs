//! Document walker
//!
//! Rebuilds a JSON document with every string leaf run through the
//! translation table. Objects keep their keys (and key order), arrays keep
//! their length, and non-string scalars pass through untouched.

use crate::lookup::{LookupOutcome, TranslationTable};
use crate::report::{Report, ReportEntry};
use serde_json::{Map, Value};
use tracing::debug;

/// Translate every string leaf of `value`, logging each outcome to `report`
///
/// Strings with no translation keep their original (untrimmed) text.
///
/// # Example
/// ```ignore
/// let table = TranslationTable::from_pairs([("Save", "Speichern")]);
/// let mut report = Report::new();
/// let doc = json!({ "button": { "label": " Save " }, "count": 3 });
/// let out = translate_document(&doc, &table, &mut report);
/// assert_eq!(out, json!({ "button": { "label": "Speichern" }, "count": 3 }));
/// ```
pub fn translate_document(value: &Value, table: &TranslationTable, report: &mut Report) -> Value {
    match value {
        Value::Object(map) => {
            let translated: Map<String, Value> = map
                .iter()
                .map(|(key, child)| (key.clone(), translate_document(child, table, report)))
                .collect();
            Value::Object(translated)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| translate_document(item, table, report))
                .collect(),
        ),
        Value::String(text) => Value::String(translate_leaf(text, table, report)),
        other => other.clone(),
    }
}

fn translate_leaf(text: &str, table: &TranslationTable, report: &mut Report) -> String {
    let source = text.trim().to_string();

    match table.resolve(text) {
        LookupOutcome::Exact { translation } => {
            debug!(source = %source, "exact match");
            report.push(ReportEntry::Exact { source });
            translation
        }
        LookupOutcome::Restored { translation } => {
            debug!(source = %source, result = %translation, "matched without tags, tags restored");
            report.push(ReportEntry::Restored {
                source,
                result: translation.clone(),
            });
            translation
        }
        LookupOutcome::NotFound => {
            debug!(source = %source, "no translation found");
            report.push(ReportEntry::NotFound { source });
            text.to_string()
        }
    }
}
