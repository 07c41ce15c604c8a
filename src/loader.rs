use csv::StringRecord;
use tracing::{debug, error, warn};

use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use crate::{
    error::{Error, Result},
    usd::Usd,
};

/// Field names tried, in priority order, when looking for an hourly rate.
pub const RATE_KEYS: [&str; 3] = ["hourly_rate", "rate", "salary"];

/// One data line, keyed by header field name.
pub type Row<'a> = HashMap<&'a str, &'a str>;

/// A single validated timesheet entry.
#[derive(Clone, Debug, PartialEq)]
pub struct EmployeeRecord {
    pub name: String,
    pub department: String,
    pub hours_worked: f64,
    pub hourly_rate: f64,
}

impl EmployeeRecord {
    /// Returns what this employee is owed: hours worked times hourly rate.
    #[must_use]
    pub fn payout(&self) -> Usd {
        Usd::new(self.hours_worked * self.hourly_rate)
    }
}

/// A numeric field whose value could not be used.
#[derive(Debug, PartialEq)]
pub struct BadField {
    pub field: &'static str,
    pub value: String,
}

fn amount(field: &'static str, value: &str) -> std::result::Result<f64, BadField> {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(n),
        _ => Err(BadField {
            field,
            value: value.to_string(),
        }),
    }
}

/// Returns the hourly rate from `row`.
///
/// The first of [`RATE_KEYS`] present in the row wins, even if its value is
/// unusable and a later key's isn't. A row with none of them has a rate of 0.
///
/// # Examples
///
/// ```
/// # use payroll::loader::{hourly_rate, Row};
/// let row = Row::from([("rate", "40"), ("salary", "30")]);
/// assert_eq!(hourly_rate(&row), Ok(40.0));
/// assert_eq!(hourly_rate(&Row::new()), Ok(0.0));
/// ```
///
/// # Errors
///
/// Returns [`BadField`] if the chosen value is not a non-negative number.
pub fn hourly_rate(row: &Row) -> std::result::Result<f64, BadField> {
    RATE_KEYS
        .iter()
        .find_map(|&key| row.get(key).map(|value| amount(key, value)))
        .unwrap_or(Ok(0.0))
}

/// Returns the hours worked from `row`, or 0 if the field is absent.
///
/// # Errors
///
/// Returns [`BadField`] if the value is not a non-negative number.
pub fn hours_worked(row: &Row) -> std::result::Result<f64, BadField> {
    row.get("hours_worked")
        .map_or(Ok(0.0), |value| amount("hours_worked", value))
}

/// Builds a record from one data line.
///
/// `line` is the 1-based line number in `path`, counting the header as line 1;
/// it is only used in errors.
///
/// # Errors
///
/// * [`Error::MalformedLine`] if `record` has a different number of fields
///   from `headers`
/// * [`Error::InvalidFieldValue`] if the hours or rate are not non-negative
///   numbers
pub fn parse_line(
    headers: &StringRecord,
    record: &StringRecord,
    path: &str,
    line: u64,
) -> Result<EmployeeRecord> {
    if record.len() != headers.len() {
        return Err(Error::MalformedLine {
            path: path.to_string(),
            line,
            expected: headers.len(),
            found: record.len(),
        });
    }
    let row: Row = headers.iter().zip(record.iter()).collect();
    let invalid = |BadField { field, value }| Error::InvalidFieldValue {
        path: path.to_string(),
        line,
        field,
        value,
    };
    Ok(EmployeeRecord {
        name: row.get("name").unwrap_or(&"N/A").to_string(),
        department: row.get("department").unwrap_or(&"Unknown").to_string(),
        hours_worked: hours_worked(&row).map_err(invalid)?,
        hourly_rate: hourly_rate(&row).map_err(invalid)?,
    })
}

/// The outcome of reading one source: the records that passed validation,
/// and why every other line was skipped.
#[derive(Debug, Default)]
pub struct Loaded {
    pub employees: Vec<EmployeeRecord>,
    pub skipped: Vec<Error>,
}

fn split_line(bytes: io::Result<Vec<u8>>, path: &str, line: u64) -> Result<StringRecord> {
    let bytes = bytes.map_err(|source| Error::Read {
        path: path.to_string(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| Error::InvalidEncoding {
        path: path.to_string(),
        line,
        source,
    })?;
    Ok(text.trim().split(',').collect())
}

/// Reads `rdr` line by line, whose first line is the header.
///
/// Lines are numbered as they appear in the input, header included, so blank
/// lines count too. A line that can't be decoded or validated is recorded in
/// [`Loaded::skipped`] and reading carries on with the next one. An I/O error
/// ends the source, keeping the records read so far.
pub fn load(rdr: impl BufRead, path: &str) -> Loaded {
    let mut loaded = Loaded::default();
    let mut lines = rdr.split(b'\n').zip(1u64..);
    let headers = match lines.next() {
        None => return loaded,
        Some((bytes, line)) => match split_line(bytes, path, line) {
            Ok(headers) => headers,
            Err(e) => {
                loaded.skipped.push(e);
                return loaded;
            }
        },
    };
    for (bytes, line) in lines {
        let record = match split_line(bytes, path, line) {
            Ok(record) => record,
            Err(e @ Error::Read { .. }) => {
                loaded.skipped.push(e);
                break;
            }
            Err(e) => {
                loaded.skipped.push(e);
                continue;
            }
        };
        match parse_line(&headers, &record, path, line) {
            Ok(employee) => loaded.employees.push(employee),
            Err(e) => loaded.skipped.push(e),
        }
    }
    loaded
}

/// Reads every valid record from `rdr`, logging each line that is skipped.
///
/// `path` names the source in log messages.
pub fn parse_employees(rdr: impl BufRead, path: &str) -> Vec<EmployeeRecord> {
    let Loaded { employees, skipped } = load(rdr, path);
    for e in &skipped {
        match e {
            Error::MalformedLine { .. } => warn!("{e}"),
            _ => error!("{e}"),
        }
    }
    debug!("read {} records from {path}", employees.len());
    employees
}

/// Reads every valid record from the file at `path`.
///
/// A file that can't be opened is logged and treated as empty.
pub fn read_employees(path: impl AsRef<Path>) -> Vec<EmployeeRecord> {
    let path = path.as_ref();
    let name = path.display().to_string();
    match File::open(path) {
        Ok(file) => parse_employees(BufReader::new(file), &name),
        Err(source) => {
            let e = Error::SourceUnavailable { path: name, source };
            error!("{e}");
            Vec::new()
        }
    }
}

/// Reads the files at `paths` in turn, concatenating their records in order.
pub fn read_all<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Vec<EmployeeRecord> {
    paths.into_iter().flat_map(read_employees).collect()
}
