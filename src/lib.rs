//! Carry inline markup tags from English source strings over to their
//! plain-text translations.
//!
//! A translation table usually stores text without markup, while the
//! documents being translated contain strings such as `Go <b>Now</b>`. When a
//! string only matches the table after its tags are stripped, the tags are
//! transplanted onto the translation at the proportionally matching position,
//! snapped so that no word is split.
//!
//! # Example
//!
//! ```ignore
//! use tag_transplant::{TranslationTable, Report, translate_document};
//! use serde_json::json;
//!
//! let table = TranslationTable::from_pairs([("Go Now", "Go Immediately")]);
//! let mut report = Report::new();
//! let doc = translate_document(&json!({ "cta": "Go <b>Now</b>" }), &table, &mut report);
//! assert_eq!(doc, json!({ "cta": "Go <b>Immediately</b>" }));
//! ```
use std::path::Path;
use tracing::info;

pub mod error;
pub mod loader;
pub mod lookup;
pub mod report;
pub mod transplant;
pub mod walker;


pub use error::{TransplantError, TransplantResult};
pub use loader::{load_document, load_table, save_document};
pub use lookup::{LookupOutcome, TranslationTable, normalize_key};
pub use report::{Report, ReportEntry};
pub use transplant::transplant_tags;
pub use walker::translate_document;

/// Translate a JSON document file using a translation table file
///
/// Reads `table_path` and `document_path`, translates every string in the
/// document, writes the result to `output_path`, and returns the report.
///
/// # Errors
/// Any error loading the table or document, or writing the output. Strings
/// without a translation are reported, not treated as errors.
pub fn translate_file(
    document_path: &Path,
    table_path: &Path,
    output_path: &Path,
) -> TransplantResult<Report> {
    let table = load_table(table_path)?;
    let document = load_document(document_path)?;

    let mut report = Report::new();
    let translated = translate_document(&document, &table, &mut report);
    save_document(output_path, &translated)?;

    info!(
        output = %output_path.display(),
        replaced = report.replaced_count(),
        not_found = report.not_found_count(),
        "wrote translated document"
    );
    Ok(report)
}
