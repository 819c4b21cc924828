use chrono::NaiveDate;

use super::model::{Book, BookDataset};

// ---------------------------------------------------------------------------
// Filter criteria: author + inclusive publication date range
// ---------------------------------------------------------------------------

/// The user's current selection. Rebuilt on every interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub author: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl FilterCriteria {
    /// Whether a single book passes the criteria.
    ///
    /// Books without a publication date never match a bounded range.
    pub fn matches(&self, book: &Book) -> bool {
        book.authors == self.author
            && book
                .publication_date
                .is_some_and(|d| self.start_date <= d && d <= self.end_date)
    }
}

/// Return indices of books passing `criteria`, in dataset order.
///
/// An unknown author or an inverted range (`start_date > end_date`) simply
/// yields an empty result.
pub fn filtered_indices(dataset: &BookDataset, criteria: &FilterCriteria) -> Vec<usize> {
    dataset
        .books
        .iter()
        .enumerate()
        .filter(|(_, book)| criteria.matches(book))
        .map(|(i, _)| i)
        .collect()
}

/// Resolve filtered indices into book references.
pub fn filtered_books<'a>(dataset: &'a BookDataset, indices: &[usize]) -> Vec<&'a Book> {
    indices.iter().filter_map(|&i| dataset.books.get(i)).collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::data::model::tests::{book, date};

    fn sample() -> BookDataset {
        BookDataset::from_books(vec![
            book("First", "A", 4.0, 100, Some(date(2001, 3, 1))),
            book("Elsewhere", "B", 3.0, 200, Some(date(2005, 1, 1))),
            book("Too Late", "A", 3.5, 150, Some(date(2019, 6, 30))),
            book("Second", "A", 4.5, 300, Some(date(2010, 7, 4))),
            book("Undated", "A", 4.9, 120, None),
        ])
    }

    fn criteria(author: &str, start: NaiveDate, end: NaiveDate) -> FilterCriteria {
        FilterCriteria {
            author: author.to_string(),
            start_date: start,
            end_date: end,
        }
    }

    #[test]
    fn keeps_matching_rows_in_order() {
        let ds = sample();
        let c = criteria("A", date(2000, 1, 1), date(2015, 12, 31));
        let books = filtered_books(&ds, &filtered_indices(&ds, &c));
        let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn every_result_satisfies_the_criteria() {
        let ds = sample();
        let c = criteria("A", date(2001, 3, 1), date(2019, 6, 30));
        let indices = filtered_indices(&ds, &c);
        assert_eq!(indices, vec![0, 2, 3]);
        for book in filtered_books(&ds, &indices) {
            assert_eq!(book.authors, "A");
            let d = book.publication_date.unwrap();
            assert!(c.start_date <= d && d <= c.end_date);
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let ds = sample();
        let c = criteria("A", date(2010, 7, 4), date(2010, 7, 4));
        assert_eq!(filtered_indices(&ds, &c), vec![3]);
    }

    #[test]
    fn filtering_is_deterministic() {
        let ds = sample();
        let c = criteria("A", date(2000, 1, 1), date(2020, 12, 31));
        assert_eq!(filtered_indices(&ds, &c), filtered_indices(&ds, &c));
    }

    #[test]
    fn inverted_range_is_empty() {
        let ds = sample();
        let c = criteria("A", date(2020, 12, 31), date(2000, 1, 1));
        assert!(filtered_indices(&ds, &c).is_empty());
    }

    #[test]
    fn unknown_author_is_empty() {
        let ds = sample();
        let c = criteria("Nobody", date(1900, 1, 1), date(2100, 1, 1));
        assert!(filtered_indices(&ds, &c).is_empty());
    }

    #[test]
    fn undated_books_never_match() {
        let ds = sample();
        let c = criteria("A", NaiveDate::MIN, NaiveDate::MAX);
        let indices = filtered_indices(&ds, &c);
        assert!(!indices.contains(&4));
    }

    fn day(offset: i64) -> NaiveDate {
        date(1990, 1, 1) + chrono::Duration::days(offset)
    }

    fn arb_book() -> impl Strategy<Value = Book> {
        (
            prop::sample::select(vec!["A", "B", "C"]),
            prop::option::of(0i64..12_000),
            0.0f64..5.0,
            1i64..1_500,
        )
            .prop_map(|(author, published, rating, pages)| {
                book("Generated", author, rating, pages, published.map(day))
            })
    }

    proptest! {
        #[test]
        fn prop_result_is_exactly_the_matching_books(
            books in prop::collection::vec(arb_book(), 0..40),
            author in prop::sample::select(vec!["A", "B", "C", "Z"]),
            start in 0i64..12_000,
            end in 0i64..12_000,
        ) {
            let ds = BookDataset::from_books(books);
            let c = criteria(author, day(start), day(end));
            let indices = filtered_indices(&ds, &c);

            for book in filtered_books(&ds, &indices) {
                prop_assert_eq!(book.authors.as_str(), author);
                let d = book.publication_date.unwrap();
                prop_assert!(c.start_date <= d && d <= c.end_date);
            }

            let expected: Vec<usize> = ds
                .books
                .iter()
                .enumerate()
                .filter(|(_, b)| {
                    b.authors == author
                        && matches!(b.publication_date, Some(d) if day(start) <= d && d <= day(end))
                })
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(&indices, &expected);

            if start > end {
                prop_assert!(indices.is_empty());
            }
        }

        #[test]
        fn prop_filtering_is_idempotent(
            books in prop::collection::vec(arb_book(), 0..40),
            author in prop::sample::select(vec!["A", "B", "Z"]),
            start in 0i64..12_000,
            end in 0i64..12_000,
        ) {
            let ds = BookDataset::from_books(books);
            let c = criteria(author, day(start), day(end));
            let first = filtered_indices(&ds, &c);
            prop_assert_eq!(filtered_indices(&ds, &c), first.clone());

            // Filtering the already-filtered books changes nothing.
            let narrowed = BookDataset::from_books(
                filtered_books(&ds, &first).into_iter().cloned().collect(),
            );
            let again = filtered_indices(&narrowed, &c);
            prop_assert_eq!(again, (0..first.len()).collect::<Vec<_>>());
        }
    }
}
