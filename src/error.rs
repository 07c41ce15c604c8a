use thiserror::Error;

/// Everything that can go wrong while loading timesheets or building a report.
///
/// None of these abort a run: the loader logs per-line and per-source
/// problems and carries on, and [`Error::NoData`] is reported as a notice.
#[derive(Debug, Error)]
pub enum Error {
    /// A source file could not be opened.
    #[error("cannot open {path}: {source}")]
    SourceUnavailable {
        path: String,
        source: std::io::Error,
    },

    /// A source stopped being readable part way through.
    #[error("error reading {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// A line is not valid UTF-8.
    #[error("line {line} in {path} skipped: {source}")]
    InvalidEncoding {
        path: String,
        line: u64,
        source: std::string::FromUtf8Error,
    },

    /// A line's field count does not match the header's.
    #[error("line {line} in {path} skipped: expected {expected} fields, found {found}")]
    MalformedLine {
        path: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// `hours_worked` or the rate field is not a non-negative number.
    #[error("line {line} in {path} skipped: invalid {field} value {value:?}")]
    InvalidFieldValue {
        path: String,
        line: u64,
        field: &'static str,
        value: String,
    },

    /// No source produced a single valid record.
    #[error("no data to report")]
    NoData,
}

pub type Result<T> = std::result::Result<T, Error>;
