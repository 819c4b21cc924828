use eframe::egui::{self, RichText, Ui};
use egui_extras::DatePickerButton;

use crate::chart::Tab;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top panel – the four dashboard inputs
// ---------------------------------------------------------------------------

/// Render the heading, author + date selectors and the tab bar.
pub fn controls(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("Book Data Visualization");
    });
    ui.add_space(4.0);

    ui.horizontal(|ui: &mut Ui| {
        author_selector(ui, state);
        ui.separator();
        date_range(ui, state);
    });
    ui.separator();

    tab_bar(ui, state);
    ui.add_space(2.0);
}

fn author_selector(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Author");
    ui.add(
        egui::TextEdit::singleline(&mut state.author_query)
            .hint_text("Search…")
            .desired_width(140.0),
    );

    // Apply the pick after the combo box releases its borrow of `state`.
    let mut picked: Option<String> = None;
    egui::ComboBox::from_id_salt("author")
        .selected_text(state.criteria.author.as_str())
        .width(280.0)
        .height(360.0)
        .show_ui(ui, |ui: &mut Ui| {
            for author in state.matching_authors() {
                if ui
                    .selectable_label(author == state.criteria.author, author)
                    .clicked()
                {
                    picked = Some(author.to_string());
                }
            }
        });

    if let Some(author) = picked {
        state.set_author(author);
    }
}

fn date_range(ui: &mut Ui, state: &mut AppState) {
    let mut start = state.criteria.start_date;
    let mut end = state.criteria.end_date;

    ui.strong("Published");
    ui.add(DatePickerButton::new(&mut start).id_salt("start_date"));
    ui.label("to");
    ui.add(DatePickerButton::new(&mut end).id_salt("end_date"));

    if start != state.criteria.start_date {
        state.set_start_date(start);
    }
    if end != state.criteria.end_date {
        state.set_end_date(end);
    }

    if let Some(bounds) = state.dataset.date_bounds {
        ui.label(
            RichText::new(format!("({} – {})", bounds.min, bounds.max))
                .small()
                .weak(),
        );
    }
}

fn tab_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        for tab in Tab::ALL {
            if ui
                .selectable_label(state.active_tab == tab.id(), tab.label())
                .clicked()
                && state.active_tab != tab.id()
            {
                state.set_tab(tab.id());
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Bottom bar
// ---------------------------------------------------------------------------

/// Render the dataset / selection summary.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} books by {} authors loaded, {} matching",
            state.dataset.len(),
            state.dataset.authors.len(),
            state.chart.book_count()
        ));
    });
}
