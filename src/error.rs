/// Error types for loading tables and translating documents
///
/// Tag transplantation itself never fails; these cover the file handling
/// around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransplantError {
    /// Reading or writing a file failed
    Io(String),
    /// A spreadsheet could not be opened or a sheet could not be read
    Spreadsheet(String),
    /// JSON could not be parsed or serialized
    Json(String),
    /// The table file has an extension we do not know how to read
    UnsupportedTable(String),
    /// The JSON document does not have the expected shape
    InvalidDocument(String),
}

impl std::fmt::Display for TransplantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransplantError::Io(msg) => write!(f, "I/O error: {}", msg),
            TransplantError::Spreadsheet(msg) => write!(f, "Spreadsheet error: {}", msg),
            TransplantError::Json(msg) => write!(f, "JSON error: {}", msg),
            TransplantError::UnsupportedTable(msg) => {
                write!(f, "Unsupported translation table: {}", msg)
            }
            TransplantError::InvalidDocument(msg) => write!(f, "Invalid document: {}", msg),
        }
    }
}

impl std::error::Error for TransplantError {}

/// Result type for table and document operations
pub type TransplantResult<T> = Result<T, TransplantError>;
