use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use super::model::{Book, BookDataset};

/// Columns every source must provide (after header trimming).
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "title",
    "authors",
    "average_rating",
    "num_pages",
    "publication_date",
];

/// Accepted `publication_date` layouts, tried in order.
const DATE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures that prevent the dashboard from starting.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {location}: {err}")]
    Unreachable {
        location: String,
        #[source]
        err: std::io::Error,
    },
    #[error("request to {location} failed: {err}")]
    Request {
        location: String,
        #[source]
        err: reqwest::Error,
    },
    #[error("{location} answered with HTTP {status}")]
    Http {
        location: String,
        status: reqwest::StatusCode,
    },
    #[error("unreadable CSV header: {0}")]
    Csv(#[from] csv::Error),
    #[error("required column '{0}' is missing")]
    MissingColumn(String),
    #[error("{0} contains no usable rows")]
    Empty(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the book dataset from `location`. Dispatch by scheme.
///
/// * `http://` / `https://` – fetched with a single blocking GET
/// * anything else          – read as a local file path
pub fn load_source(location: &str) -> Result<BookDataset, LoadError> {
    log::info!("Loading books from {location}");
    // Raw bytes: invalid UTF-8 is a per-row error for the CSV reader.
    let bytes = if is_remote(location) {
        fetch_remote(location)?
    } else {
        std::fs::read(Path::new(location)).map_err(|err| LoadError::Unreachable {
            location: location.to_string(),
            err,
        })?
    };

    let dataset = parse_csv(&bytes[..])?;
    if dataset.is_empty() {
        return Err(LoadError::Empty(location.to_string()));
    }
    log::info!(
        "Loaded {} books by {} distinct authors",
        dataset.len(),
        dataset.authors.len()
    );
    Ok(dataset)
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

fn fetch_remote(location: &str) -> Result<Vec<u8>, LoadError> {
    let request_err = |err: reqwest::Error| LoadError::Request {
        location: location.to_string(),
        err,
    };
    let response = reqwest::blocking::get(location).map_err(request_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Http {
            location: location.to_string(),
            status,
        });
    }
    response
        .bytes()
        .map(|body| body.to_vec())
        .map_err(request_err)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// One CSV record as it appears on disk. Unknown columns are ignored.
#[derive(Debug, Deserialize)]
struct RawBook {
    title: String,
    authors: String,
    average_rating: f64,
    num_pages: i64,
    publication_date: String,
}

/// Parse CSV text into a dataset, skipping malformed records.
///
/// A record is dropped when its field count differs from the header, it is
/// not valid UTF-8, a numeric column fails to parse, or the rating is not
/// finite (`NaN`, `inf`). An unparseable `publication_date` keeps
/// the record with a missing date.
pub fn parse_csv<R: Read>(reader: R) -> Result<BookDataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column.to_string()));
        }
    }

    let mut books = Vec::new();
    let mut skipped = 0usize;
    let mut undated = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        let raw: RawBook = match result.and_then(|rec| rec.deserialize(Some(&headers))) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Skipping CSV row {row_no}: {e}");
                skipped += 1;
                continue;
            }
        };
        if !raw.average_rating.is_finite() {
            log::warn!("Skipping CSV row {row_no}: average_rating is {}", raw.average_rating);
            skipped += 1;
            continue;
        }

        let publication_date = parse_date(&raw.publication_date);
        if publication_date.is_none() {
            undated += 1;
        }

        books.push(Book {
            title: raw.title,
            authors: raw.authors,
            average_rating: raw.average_rating,
            num_pages: raw.num_pages,
            publication_date,
        });
    }

    if skipped > 0 {
        log::warn!("Skipped {skipped} malformed rows");
    }
    if undated > 0 {
        log::warn!("{undated} rows have an unparseable publication_date");
    }

    Ok(BookDataset::from_books(books))
}

/// Parse a publication date, `None` when no accepted layout matches.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}
