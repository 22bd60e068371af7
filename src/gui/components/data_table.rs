// src/gui/components/data_table.rs
//
// Generic striped table over a row count. The caller supplies headers and a
// cell painter; this module only owns layout. Meant to sit inside the page
// scroll area, so the table itself does not scroll vertically.

use std::hash::Hash;

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

pub struct TableColumns<'a> {
    pub headers: &'a [String],
    /// Initial width per column; missing entries fall back to 120 px.
    pub widths: &'a [f32],
    /// Right-aligned columns.
    pub numeric: &'a [bool],
    pub row_height: f32,
}

impl<'a> TableColumns<'a> {
    pub fn new(headers: &'a [String]) -> Self {
        Self { headers, widths: &[], numeric: &[], row_height: 22.0 }
    }

    pub fn widths(mut self, widths: &'a [f32]) -> Self {
        self.widths = widths;
        self
    }

    pub fn numeric(mut self, numeric: &'a [bool]) -> Self {
        self.numeric = numeric;
        self
    }

    pub fn row_height(mut self, h: f32) -> Self {
        self.row_height = h;
        self
    }

    fn is_numeric(&self, col: usize) -> bool {
        self.numeric.get(col).copied().unwrap_or(false)
    }
}

/// Draw `rows` rows. `cell(ui, row, col)` paints one cell.
pub fn draw(
    ui: &mut egui::Ui,
    id_salt: impl Hash,
    columns: &TableColumns<'_>,
    rows: usize,
    mut cell: impl FnMut(&mut egui::Ui, usize, usize),
) {
    let cols = columns.headers.len();
    if cols == 0 {
        return;
    }

    let mut table = TableBuilder::new(ui)
        .id_salt(id_salt)
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for ci in 0..cols {
        let w = columns.widths.get(ci).copied().unwrap_or(120.0);
        let col = if ci + 1 == cols {
            Column::remainder().at_least(w.min(80.0)).clip(true)
        } else {
            Column::initial(w).resizable(true).clip(true).at_least(20.0)
        };
        table = table.column(col);
    }

    table
        .header(24.0, |mut header| {
            for (ci, h) in columns.headers.iter().enumerate() {
                header.col(|ui| {
                    let label = egui::Label::new(RichText::new(h).strong()).selectable(false);
                    if columns.is_numeric(ci) {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| ui.add(label));
                    } else {
                        ui.add(label);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(columns.row_height, rows, |mut row| {
                let r = row.index();
                for ci in 0..cols {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        if columns.is_numeric(ci) {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| cell(ui, r, ci));
                        } else {
                            cell(ui, r, ci);
                        }
                    });
                }
            });
        });
}
