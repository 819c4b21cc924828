/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///   books.csv  (http(s) URL or local path)
///       |
///       v
///   loader ---- skips bad rows, missing dates -> None
///       |
///       v
///   BookDataset ---- books, authors (first seen), date bounds
///       |
///       v
///   filter ---- author + inclusive date range -> row indices
/// ```

pub mod loader;
pub mod model;
pub mod filter;
