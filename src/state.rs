use std::sync::Arc;

use chrono::NaiveDate;

use crate::chart::{ChartSpec, render_content};
use crate::data::filter::FilterCriteria;
use crate::data::model::BookDataset;

/// Initial date range offered by the date pickers.
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

pub fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 12, 31).unwrap_or(NaiveDate::MAX)
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The four inputs are `active_tab` and the three fields of `criteria`.
/// Every setter re-runs [`AppState::refresh`], so `chart` always reflects
/// the current inputs.
pub struct AppState {
    /// Loaded dataset, shared read-only.
    pub dataset: Arc<BookDataset>,

    /// Current author + date range selection.
    pub criteria: FilterCriteria,

    /// Identifier of the selected tab.
    pub active_tab: String,

    /// Text typed into the author search box.
    pub author_query: String,

    /// Chart for the current inputs.
    pub chart: ChartSpec,
}

impl AppState {
    /// Initialise inputs with their defaults and render the first chart.
    pub fn new(dataset: Arc<BookDataset>, active_tab: impl Into<String>) -> Self {
        let criteria = FilterCriteria {
            author: dataset.first_author().unwrap_or_default().to_string(),
            start_date: default_start_date(),
            end_date: default_end_date(),
        };
        let active_tab = active_tab.into();
        let chart = render_content(&dataset, &active_tab, &criteria);
        Self {
            dataset,
            criteria,
            active_tab,
            author_query: String::new(),
            chart,
        }
    }

    /// Recompute the chart from the current inputs.
    pub fn refresh(&mut self) {
        self.chart = render_content(&self.dataset, &self.active_tab, &self.criteria);
        log::debug!(
            "Rendered {} for '{}' {}..={} ({} books)",
            self.active_tab,
            self.criteria.author,
            self.criteria.start_date,
            self.criteria.end_date,
            self.chart.book_count()
        );
    }

    pub fn set_tab(&mut self, tab: impl Into<String>) {
        self.active_tab = tab.into();
        self.refresh();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.criteria.author = author.into();
        self.refresh();
    }

    /// Set the range start, clamped to the dataset's observed dates.
    pub fn set_start_date(&mut self, date: NaiveDate) {
        self.criteria.start_date = self.clamp_date(date);
        self.refresh();
    }

    /// Set the range end, clamped to the dataset's observed dates.
    pub fn set_end_date(&mut self, date: NaiveDate) {
        self.criteria.end_date = self.clamp_date(date);
        self.refresh();
    }

    fn clamp_date(&self, date: NaiveDate) -> NaiveDate {
        match self.dataset.date_bounds {
            Some(bounds) => bounds.clamp(date),
            None => date,
        }
    }

    /// Authors whose name contains the search text (case-insensitive).
    pub fn matching_authors(&self) -> impl Iterator<Item = &str> {
        let query = self.author_query.trim().to_lowercase();
        self.dataset
            .authors
            .iter()
            .map(String::as_str)
            .filter(move |a| query.is_empty() || a.to_lowercase().contains(&query))
    }
}
