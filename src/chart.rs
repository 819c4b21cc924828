use eframe::egui::Color32;

use crate::color::RatingScale;
use crate::data::filter::{FilterCriteria, filtered_books, filtered_indices};
use crate::data::model::{Book, BookDataset};

/// Histogram bin count, independent of the number of books shown.
pub const HISTOGRAM_BINS: usize = 20;

/// Shown when the active tab is not one of [`Tab::ALL`].
pub const PLACEHOLDER_TEXT: &str = "Select a tab to display the charts.";

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

/// The three chart tabs of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Bar,
    Histogram,
    Scatter,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Bar, Tab::Histogram, Tab::Scatter];

    /// Stable identifier, used for the active-tab input.
    pub fn id(self) -> &'static str {
        match self {
            Tab::Bar => "tab-bar-chart",
            Tab::Histogram => "tab-histogram",
            Tab::Scatter => "tab-scatter-plot",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Bar => "Bar Chart",
            Tab::Histogram => "Histogram",
            Tab::Scatter => "Scatter Plot",
        }
    }

    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.id() == id)
    }
}

// ---------------------------------------------------------------------------
// Chart specifications
// ---------------------------------------------------------------------------

/// Axis labels and title shared by every chart kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLabels {
    pub title: Option<&'static str>,
    pub x: &'static str,
    pub y: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub color: Color32,
}

/// Everything the plot widget needs to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Bar {
        labels: ChartLabels,
        bars: Vec<BarDatum>,
        scale: Option<RatingScale>,
    },
    Histogram {
        labels: ChartLabels,
        /// Requested bin count; always [`HISTOGRAM_BINS`].
        nbins: usize,
        bins: Vec<HistogramBin>,
    },
    Scatter {
        labels: ChartLabels,
        points: Vec<ScatterPoint>,
        scale: Option<RatingScale>,
    },
    Placeholder(&'static str),
}

impl ChartSpec {
    /// Number of books encoded in the chart.
    pub fn book_count(&self) -> usize {
        match self {
            ChartSpec::Bar { bars, .. } => bars.len(),
            ChartSpec::Histogram { bins, .. } => bins.iter().map(|b| b.count).sum(),
            ChartSpec::Scatter { points, .. } => points.len(),
            ChartSpec::Placeholder(_) => 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// The single reactive handler: filter the dataset, then build the chart for
/// the active tab. Recomputed from scratch on every call.
pub fn render_content(dataset: &BookDataset, active_tab: &str, criteria: &FilterCriteria) -> ChartSpec {
    let indices = filtered_indices(dataset, criteria);
    let view = filtered_books(dataset, &indices);
    render_view(active_tab, &view)
}

/// Build the chart for `active_tab` from an already filtered view.
pub fn render_view(active_tab: &str, view: &[&Book]) -> ChartSpec {
    match Tab::from_id(active_tab) {
        Some(Tab::Bar) => bar_chart(view),
        Some(Tab::Histogram) => histogram(view),
        Some(Tab::Scatter) => scatter_plot(view),
        None => ChartSpec::Placeholder(PLACEHOLDER_TEXT),
    }
}

fn rating_scale(view: &[&Book]) -> Option<RatingScale> {
    RatingScale::from_values(view.iter().map(|b| b.average_rating))
}

fn bar_chart(view: &[&Book]) -> ChartSpec {
    let scale = rating_scale(view);
    let bars = view
        .iter()
        .map(|b| BarDatum {
            label: b.title.clone(),
            value: b.average_rating,
            color: scale.map_or(Color32::LIGHT_BLUE, |s| s.color_for(b.average_rating)),
        })
        .collect();

    ChartSpec::Bar {
        labels: ChartLabels {
            title: None,
            x: "Title",
            y: "Average rating",
        },
        bars,
        scale,
    }
}

fn histogram(view: &[&Book]) -> ChartSpec {
    let ratings: Vec<f64> = view.iter().map(|b| b.average_rating).collect();
    ChartSpec::Histogram {
        labels: ChartLabels {
            title: Some("Rating distribution"),
            x: "Average rating",
            y: "Count",
        },
        nbins: HISTOGRAM_BINS,
        bins: bin_values(&ratings, HISTOGRAM_BINS),
    }
}

/// Split `values` into `nbins` equal-width bins over their observed range.
///
/// A single repeated value is widened by 0.5 on each side; an empty input
/// spans the 0–5 rating scale. The last bin is closed on the right.
pub fn bin_values(values: &[f64], nbins: usize) -> Vec<HistogramBin> {
    if nbins == 0 {
        return Vec::new();
    }
    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if values.is_empty() {
        (lo, hi) = (0.0, 5.0);
    } else if hi - lo < f64::EPSILON {
        (lo, hi) = (lo - 0.5, hi + 0.5);
    }

    let width = (hi - lo) / nbins as f64;
    let mut bins: Vec<HistogramBin> = (0..nbins)
        .map(|i| HistogramBin {
            start: lo + width * i as f64,
            end: if i + 1 == nbins { hi } else { lo + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();

    for &v in values {
        let idx = (((v - lo) / width).floor() as usize).min(nbins - 1);
        bins[idx].count += 1;
    }
    bins
}

fn scatter_plot(view: &[&Book]) -> ChartSpec {
    let scale = rating_scale(view);
    let points = view
        .iter()
        .map(|b| ScatterPoint {
            x: b.num_pages as f64,
            y: b.average_rating,
            label: b.title.clone(),
            color: scale.map_or(Color32::LIGHT_BLUE, |s| s.color_for(b.average_rating)),
        })
        .collect();

    ChartSpec::Scatter {
        labels: ChartLabels {
            title: Some("Page count vs average rating"),
            x: "Pages",
            y: "Average rating",
        },
        points,
        scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::{book, date};

    fn dataset() -> BookDataset {
        BookDataset::from_books(vec![
            book("Early", "A", 3.5, 120, Some(date(1995, 1, 1))),
            book("Middle", "A", 4.2, 310, Some(date(2004, 6, 1))),
            book("Other", "B", 3.9, 200, Some(date(2004, 6, 1))),
            book("Late", "A", 4.6, 540, Some(date(2012, 2, 29))),
        ])
    }

    fn criteria(author: &str) -> FilterCriteria {
        FilterCriteria {
            author: author.to_string(),
            start_date: date(2000, 1, 1),
            end_date: date(2020, 12, 31),
        }
    }

    #[test]
    fn tab_ids_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(Tab::from_id("tab-pie"), None);
    }

    #[test]
    fn bar_has_one_bar_per_book() {
        let spec = render_content(&dataset(), "tab-bar-chart", &criteria("A"));
        let ChartSpec::Bar { bars, labels, scale } = spec else {
            panic!("expected a bar chart");
        };
        let titles: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(titles, vec!["Middle", "Late"]);
        assert_eq!(bars[0].value, 4.2);
        assert_eq!(labels.x, "Title");
        assert_eq!(labels.y, "Average rating");
        let scale = scale.unwrap();
        assert_eq!(bars[1].color, scale.color_for(4.6));
        assert_ne!(bars[0].color, bars[1].color);
    }

    #[test]
    fn scatter_maps_pages_to_rating() {
        let spec = render_content(&dataset(), "tab-scatter-plot", &criteria("A"));
        let ChartSpec::Scatter { points, .. } = spec else {
            panic!("expected a scatter plot");
        };
        let coords: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(coords, vec![(310.0, 4.2), (540.0, 4.6)]);
    }

    #[test]
    fn histogram_always_has_twenty_bins() {
        for author in ["A", "B", "Nobody"] {
            let spec = render_content(&dataset(), "tab-histogram", &criteria(author));
            let ChartSpec::Histogram { nbins, bins, .. } = &spec else {
                panic!("expected a histogram");
            };
            assert_eq!(*nbins, HISTOGRAM_BINS);
            assert_eq!(bins.len(), HISTOGRAM_BINS);
            let expected = if author == "A" { 2 } else if author == "B" { 1 } else { 0 };
            assert_eq!(spec.book_count(), expected);
        }
    }

    #[test]
    fn bins_cover_extremes() {
        let bins = bin_values(&[1.0, 2.0, 3.0, 5.0], 20);
        assert_eq!(bins.first().unwrap().start, 1.0);
        assert_eq!(bins.last().unwrap().end, 5.0);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[19].count, 1);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 4);
    }

    #[test]
    fn empty_histogram_spans_rating_scale() {
        let bins = bin_values(&[], 20);
        assert_eq!(bins.len(), 20);
        assert_eq!(bins[0].start, 0.0);
        assert_eq!(bins[19].end, 5.0);
        assert!(bins.iter().all(|b| b.count == 0));
        assert!((bins[0].width() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn empty_view_renders_empty_charts() {
        let ds = dataset();
        for tab in Tab::ALL {
            let spec = render_content(&ds, tab.id(), &criteria("Nobody"));
            assert_eq!(spec.book_count(), 0);
            assert_ne!(spec, ChartSpec::Placeholder(PLACEHOLDER_TEXT));
        }
    }

    #[test]
    fn unknown_tab_falls_back_to_placeholder() {
        let spec = render_content(&dataset(), "tab-unknown", &criteria("A"));
        assert_eq!(spec, ChartSpec::Placeholder(PLACEHOLDER_TEXT));
        assert_eq!(render_view("", &[]), ChartSpec::Placeholder(PLACEHOLDER_TEXT));
    }
}
