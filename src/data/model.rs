use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Book – one row of the source table
// ---------------------------------------------------------------------------

/// A single book record. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub title: String,
    pub authors: String,
    pub average_rating: f64,
    pub num_pages: i64,
    /// `None` when the source value could not be parsed as a date.
    pub publication_date: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// DateBounds – observed publication date range
// ---------------------------------------------------------------------------

/// Earliest and latest publication dates present in a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateBounds {
    /// Pull `date` back inside the observed range.
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// BookDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed author list and date bounds.
#[derive(Debug, Clone)]
pub struct BookDataset {
    /// All books, in source order.
    pub books: Vec<Book>,
    /// Distinct `authors` values in first-seen order.
    pub authors: Vec<String>,
    /// `None` when no book carries a parseable date.
    pub date_bounds: Option<DateBounds>,
}

impl BookDataset {
    /// Build the author index and date bounds from the loaded books.
    pub fn from_books(books: Vec<Book>) -> Self {
        let mut authors: Vec<String> = Vec::new();
        let mut seen = std::collections::HashSet::new();
        let mut date_bounds: Option<DateBounds> = None;

        for book in &books {
            if seen.insert(book.authors.as_str()) {
                authors.push(book.authors.clone());
            }
            if let Some(date) = book.publication_date {
                date_bounds = Some(match date_bounds {
                    Some(b) => DateBounds {
                        min: b.min.min(date),
                        max: b.max.max(date),
                    },
                    None => DateBounds {
                        min: date,
                        max: date,
                    },
                });
            }
        }

        BookDataset {
            books,
            authors,
            date_bounds,
        }
    }

    /// Number of books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The author pre-selected in the UI.
    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }
}
