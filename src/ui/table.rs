use eframe::egui::{ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::filter::Subset;
use crate::data::model::SalaryRecord;

const ROW_HEIGHT: f32 = 18.0;

/// Every column of the visible rows, in file order. An empty subset shows
/// just the header.
pub fn detail_table(ui: &mut Ui, subset: Subset<'_>, max_height: f32) {
    let table = subset.table();
    let headers: Vec<&str> = table.headers().collect();
    let rows: Vec<&SalaryRecord> = subset.records().collect();

    ScrollArea::horizontal()
        .id_salt("detail_table_scroll")
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .vscroll(true)
                .max_scroll_height(max_height)
                .columns(Column::auto().at_least(60.0), headers.len())
                .header(20.0, |mut header| {
                    for h in &headers {
                        header.col(|ui: &mut Ui| {
                            ui.strong(*h);
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                        for cell in table.row_cells(rows[row.index()]) {
                            row.col(|ui: &mut Ui| {
                                ui.label(cell);
                            });
                        }
                    });
                });
        });
}
