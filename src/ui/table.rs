use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

// ---------------------------------------------------------------------------
// Flattened stat table (one header row, one value row)
// ---------------------------------------------------------------------------

/// Render the full stat line as a single-row table, statistics in declared
/// order left to right.
pub fn stat_table(ui: &mut Ui, row: &[(&'static str, String)]) {
    if row.is_empty() {
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().at_least(56.0), row.len())
        .header(22.0, |mut header| {
            for (label, _) in row {
                header.col(|ui: &mut Ui| {
                    ui.strong(*label);
                });
            }
        })
        .body(|mut body| {
            body.row(20.0, |mut table_row| {
                for (_, value) in row {
                    table_row.col(|ui: &mut Ui| {
                        ui.label(value);
                    });
                }
            });
        });
}
