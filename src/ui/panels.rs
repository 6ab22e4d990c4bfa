use std::sync::Arc;

use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::model::FilterColumn;
use crate::state::AppState;
use crate::ui::{charts, format, metrics, table};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel. Every change re-runs the pipeline through
/// the [`AppState`] mutators.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // Hold the table separately so `state` can be mutated inside the loop.
    let table = Arc::clone(&state.table);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for col in FilterColumn::ALL {
                let Some(all_values) = table.unique_values.get(&col) else {
                    continue;
                };

                let n_total = all_values.len();
                let n_selected = state.filters.get(&col).map_or(n_total, |s| s.len());
                let header_text = format!("{}  ({n_selected}/{n_total})", col.label());

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(col.csv_name())
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        ui.horizontal(|ui: &mut Ui| {
                            if ui.small_button("All").clicked() {
                                state.select_all(col);
                            }
                            if ui.small_button("None").clicked() {
                                state.select_none(col);
                            }
                        });

                        for val in all_values {
                            let mut checked = state.is_selected(col, val);
                            if ui.checkbox(&mut checked, val.to_string()).changed() {
                                state.toggle_filter_value(col, val);
                            }
                        }
                    });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.add_space(4.0);
    ui.heading("Data Salary Dashboard");
    ui.label(
        "Explore salaries across the data field over recent years. \
         Use the filters on the left to refine the analysis.",
    );
    ui.label(
        RichText::new(format!(
            "{} records loaded, {} visible",
            format::thousands(state.table.len() as u64),
            format::thousands(state.visible_indices.len() as u64)
        ))
        .weak(),
    );
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Metrics, the 2×2 chart grid and the detail table, top to bottom.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let config = &state.config;
    let warn = ui.visuals().warn_fg_color;

    match &state.dashboard {
        Some(dashboard) => {
            metrics::metric_cards(ui, &dashboard.summary);
            ui.separator();

            ui.columns(2, |cols| {
                charts::top_jobs_chart(&mut cols[0], &dashboard.top_jobs, config);
                charts::histogram_chart(&mut cols[1], &dashboard.histogram, config);
            });
            ui.add_space(8.0);
            ui.columns(2, |cols| {
                charts::remote_share_chart(&mut cols[0], &dashboard.remote_share, config);
                charts::country_chart(&mut cols[1], &dashboard.country, config);
            });
        }
        None => {
            ui.colored_label(warn, "⚠ No records match the selected filters.");
            ui.separator();
            ui.colored_label(warn, "Adjust the filters to see the charts.");
        }
    }

    ui.add_space(12.0);
    ui.heading("Detailed data");
    table::detail_table(ui, state.subset(), config.table_height);
}
