//! Loading translation tables and JSON documents
//!
//! Translation tables come from a spreadsheet (every sheet, first two
//! columns, first row is a header) or from a flat JSON object mapping English
//! text to its translation. Documents are arbitrary JSON.

use crate::error::{TransplantError, TransplantResult};
use crate::lookup::TranslationTable;
use calamine::{Data, Reader, open_workbook_auto};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Load a translation table, choosing the reader from the file extension
///
/// # Errors
/// - `UnsupportedTable` for extensions other than spreadsheets and `json`
/// - Any error from the spreadsheet or JSON reader
pub fn load_table(path: &Path) -> TransplantResult<TranslationTable> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    let table = if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
        load_table_from_spreadsheet(path)?
    } else if extension == "json" {
        load_table_from_json(path)?
    } else {
        return Err(TransplantError::UnsupportedTable(format!(
            "'{}' (expected one of {}, json)",
            path.display(),
            SPREADSHEET_EXTENSIONS.join(", ")
        )));
    };

    info!(path = %path.display(), entries = table.len(), "loaded translation table");
    Ok(table)
}

/// Load a translation table from every sheet of a spreadsheet
///
/// For each sheet, the first row is treated as a header and skipped, and only
/// the first two columns are read. Rows with an empty cell in either column
/// are dropped. Sheets narrower than two columns are skipped. Entries from
/// later sheets replace earlier ones with the same English text.
pub fn load_table_from_spreadsheet(path: &Path) -> TransplantResult<TranslationTable> {
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        TransplantError::Spreadsheet(format!("Failed to open '{}': {}", path.display(), e))
    })?;
    let sheet_names = workbook.sheet_names().to_owned();
    let mut table = TranslationTable::new();

    for sheet_name in sheet_names {
        let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
            TransplantError::Spreadsheet(format!(
                "Failed to read sheet '{}' in '{}': {}",
                sheet_name,
                path.display(),
                e
            ))
        })?;

        if range.height() == 0 || range.width() < 2 {
            debug!(sheet = %sheet_name, "skipping sheet without two columns");
            continue;
        }

        let pairs = rows_to_pairs(range.rows());
        debug!(sheet = %sheet_name, entries = pairs.len(), "read sheet");
        for (english, translation) in pairs {
            table.with_entry(&english, &translation);
        }
    }

    Ok(table)
}

/// Turn sheet rows into `(english, translation)` pairs
///
/// Skips the header row and any row whose first two cells are not both
/// non-empty.
fn rows_to_pairs<'a>(rows: impl Iterator<Item = &'a [Data]>) -> Vec<(String, String)> {
    rows.skip(1)
        .filter_map(|row| {
            let english = cell_to_string(row.first()?);
            let translation = cell_to_string(row.get(1)?);
            if english.trim().is_empty() || translation.trim().is_empty() {
                return None;
            }
            Some((english, translation))
        })
        .collect()
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        // `Display` already drops the `.0` of integral floats
        Data::Float(value) => value.to_string(),
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        // Spreadsheet errors (#N/A, #REF!) carry no translatable text
        Data::Error(_) => String::new(),
        Data::DateTime(value) => value.to_string(),
        Data::DateTimeIso(value) => value.clone(),
        Data::DurationIso(value) => value.clone(),
    }
}

/// Load a translation table from a JSON object
///
/// The JSON file should have the following structure:
/// ```json
/// {
///     "@metadata": { ... },  // Ignored
///     "Save": "Speichern",
///     "Go Now": "Go Immediately"
/// }
/// ```
///
/// # Errors
/// - File not found or unreadable
/// - Invalid JSON, or a root that is not an object
pub fn load_table_from_json(path: &Path) -> TransplantResult<TranslationTable> {
    let json = load_document(path)?;

    let obj = json.as_object().ok_or_else(|| {
        TransplantError::InvalidDocument(format!(
            "'{}': translation table root must be an object",
            path.display()
        ))
    })?;

    let mut table = TranslationTable::new();
    for (english, value) in obj {
        if english.starts_with('@') {
            continue;
        }

        match value.as_str() {
            Some(translation) => {
                table.with_entry(english, translation);
            }
            None => warn!(key = %english, "translation is not a string, skipping"),
        }
    }

    Ok(table)
}

/// Read and parse a JSON document
pub fn load_document(path: &Path) -> TransplantResult<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        TransplantError::Io(format!("Failed to read file '{}': {}", path.display(), e))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        TransplantError::Json(format!(
            "Failed to parse JSON from '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Serialize a document as JSON with 4-space indentation
///
/// Non-ASCII text is written as-is rather than escaped.
pub fn document_to_string(value: &Value) -> TransplantResult<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| TransplantError::Json(format!("Failed to serialize document: {}", e)))?;

    String::from_utf8(buf)
        .map_err(|e| TransplantError::Json(format!("Serialized document is not UTF-8: {}", e)))
}

/// Write a document to `path`, replacing any existing file
pub fn save_document(path: &Path, value: &Value) -> TransplantResult<()> {
    let content = document_to_string(value)?;
    fs::write(path, content).map_err(|e| {
        TransplantError::Io(format!("Failed to write file '{}': {}", path.display(), e))
    })
}
