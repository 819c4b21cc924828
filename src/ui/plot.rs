use eframe::egui::{self, Color32, RichText, Sense, Ui};
use egui_plot::{Bar, BarChart, Plot, Points};

use crate::chart::{BarDatum, ChartLabels, ChartSpec, HistogramBin, ScatterPoint};
use crate::color::{RatingScale, gradient};

/// Fill for histogram bars, which carry no colour encoding.
const HISTOGRAM_FILL: Color32 = Color32::from_rgb(99, 110, 250);

// ---------------------------------------------------------------------------
// Chart area (central panel)
// ---------------------------------------------------------------------------

/// Draw the chart spec produced for the current inputs.
pub fn chart(ui: &mut Ui, spec: &ChartSpec) {
    match spec {
        ChartSpec::Placeholder(text) => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading(*text);
            });
        }
        ChartSpec::Bar { labels, bars, scale } => {
            header(ui, labels, scale.as_ref());
            bar_chart(ui, labels, bars);
        }
        ChartSpec::Histogram { labels, nbins, bins } => {
            header(ui, labels, None);
            ui.label(RichText::new(format!("{nbins} bins")).small().weak());
            histogram(ui, labels, bins);
        }
        ChartSpec::Scatter { labels, points, scale } => {
            header(ui, labels, scale.as_ref());
            scatter_plot(ui, labels, points);
        }
    }
}

fn header(ui: &mut Ui, labels: &ChartLabels, scale: Option<&RatingScale>) {
    ui.horizontal(|ui: &mut Ui| {
        if let Some(title) = labels.title {
            ui.strong(title);
        }
        if let Some(scale) = scale {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
                color_scale_legend(ui, labels.y, scale);
            });
        }
    });
}

/// Horizontal colour bar: `min ▮▮▮▮ max` (laid out right to left).
fn color_scale_legend(ui: &mut Ui, name: &str, scale: &RatingScale) {
    const STEPS: usize = 32;
    ui.label(format!("{:.2}", scale.max));
    let (rect, _) = ui.allocate_exact_size(egui::vec2(160.0, 12.0), Sense::hover());
    let step = rect.width() / STEPS as f32;
    for i in 0..STEPS {
        let segment = egui::Rect::from_min_size(
            egui::pos2(rect.left() + step * i as f32, rect.top()),
            egui::vec2(step + 0.5, rect.height()),
        );
        ui.painter()
            .rect_filled(segment, 0.0, gradient(i as f64 / (STEPS - 1) as f64));
    }
    ui.label(format!("{:.2}", scale.min));
    ui.label(RichText::new(name).small());
}

fn bar_chart(ui: &mut Ui, labels: &ChartLabels, bars: &[BarDatum]) {
    let titles: Vec<String> = bars.iter().map(|b| b.label.clone()).collect();
    let chart = BarChart::new(
        bars.iter()
            .enumerate()
            .map(|(i, b)| {
                Bar::new(i as f64, b.value)
                    .name(&b.label)
                    .fill(b.color)
                    .width(0.7)
            })
            .collect(),
    );

    Plot::new("bar_chart")
        .x_axis_label(labels.x)
        .y_axis_label(labels.y)
        .x_axis_formatter(move |mark, _range| {
            let slot = mark.value;
            if slot >= 0.0 && slot.fract() == 0.0 {
                titles.get(slot as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

fn histogram(ui: &mut Ui, labels: &ChartLabels, bins: &[HistogramBin]) {
    let chart = BarChart::new(
        bins.iter()
            .map(|bin| {
                Bar::new(bin.center(), bin.count as f64)
                    .width(bin.width())
                    .name(format!("{:.2} – {:.2}", bin.start, bin.end))
                    .fill(HISTOGRAM_FILL)
            })
            .collect(),
    );

    Plot::new("histogram")
        .x_axis_label(labels.x)
        .y_axis_label(labels.y)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

fn scatter_plot(ui: &mut Ui, labels: &ChartLabels, points: &[ScatterPoint]) {
    Plot::new("scatter_plot")
        .x_axis_label(labels.x)
        .y_axis_label(labels.y)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // One series per book so each point keeps its own colour.
            for p in points {
                plot_ui.points(
                    Points::new(vec![[p.x, p.y]])
                        .name(&p.label)
                        .color(p.color)
                        .radius(4.0)
                        .filled(true),
                );
            }
        });
}
