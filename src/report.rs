//! Translation audit report
//!
//! Every string visited while translating a document leaves one entry here,
//! saying whether it was replaced exactly, replaced with its tags restored,
//! or left alone because no translation was found.

use std::fmt;

/// Number of chars of source/result text shown per report line
const PREVIEW_CHARS: usize = 50;

const BANNER: &str = "============================";

/// Outcome for a single string in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEntry {
    Exact { source: String },
    Restored { source: String, result: String },
    NotFound { source: String },
}

impl ReportEntry {
    pub fn is_replaced(&self) -> bool {
        !matches!(self, ReportEntry::NotFound { .. })
    }
}

fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportEntry::Exact { source } => {
                write!(f, "✔ Replaced (Exact): '{}...'", preview(source))
            }
            ReportEntry::Restored { source, result } => write!(
                f,
                "✔ Replaced (Stripped HTML & Tags Restored): '{}...' -> '{}...'",
                preview(source),
                preview(result)
            ),
            ReportEntry::NotFound { source } => {
                write!(f, "✖ Not found in Excel: '{}...'", preview(source))
            }
        }
    }
}

/// Ordered log of per-string outcomes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new() -> Self {
        Report {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn replaced(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| e.is_replaced())
    }

    pub fn not_found(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| !e.is_replaced())
    }

    pub fn replaced_count(&self) -> usize {
        self.replaced().count()
    }

    pub fn not_found_count(&self) -> usize {
        self.not_found().count()
    }

    /// Render the verification summary printed after a run
    ///
    /// Replaced strings are listed first, then the ones with no translation,
    /// followed by totals for both.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("\n{}\n", BANNER));
        out.push_str(" TRANSLATION VERIFICATION \n");
        out.push_str(&format!("{}\n\n", BANNER));

        out.push_str("Found & Replaced:\n");
        push_section(&mut out, self.replaced());

        out.push_str("\nNot Found in Excel:\n");
        push_section(&mut out, self.not_found());

        out.push_str(&format!("\n{}\n", BANNER));
        out.push_str(&format!("✔ Total Replaced: {}\n", self.replaced_count()));
        out.push_str(&format!("✖ Not Found in Excel: {}\n", self.not_found_count()));
        out.push_str(BANNER);
        out
    }
}

fn push_section<'a>(out: &mut String, entries: impl Iterator<Item = &'a ReportEntry>) {
    let mut any = false;
    for entry in entries {
        out.push_str(&entry.to_string());
        out.push('\n');
        any = true;
    }
    if !any {
        out.push_str("  (none)\n");
    }
}
