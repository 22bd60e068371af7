// src/gui/pages/data.rs
use eframe::egui;

use crate::{
    config::options::PageKind,
    data::FilteredView,
    format::format_euros,
    gui::{app::App, components::data_table},
    store::Dataset,
};

use super::Page;

pub struct DataPage;
pub static PAGE: DataPage = DataPage;

/// Display header for a source column. Value columns get short names.
fn display_header(ds: &Dataset, ci: usize) -> String {
    let cols = &ds.columns;
    if ci == cols.value_start {
        s!("Initial value")
    } else if ci == cols.value_current {
        s!("Current value")
    } else {
        ds.headers.get(ci).cloned().unwrap_or_else(|| format!("Col {}", ci + 1))
    }
}

/// Display text for one cell. Value cells hold canonical euros or "N/A".
fn display_cell(ds: &Dataset, ci: usize, raw: &str) -> String {
    let cols = &ds.columns;
    if ci == cols.value_start || ci == cols.value_current {
        match raw.parse::<i64>() {
            Ok(n) => format_euros(n as f64),
            Err(_) => s!(raw),
        }
    } else {
        s!(raw)
    }
}

/// Every source column for the rows in `view`.
pub(crate) fn full_table(ui: &mut egui::Ui, id_salt: &str, view: &FilteredView<'_>) {
    let ds = view.dataset();
    let headers: Vec<String> = (0..ds.headers.len()).map(|ci| display_header(ds, ci)).collect();
    let numeric: Vec<bool> = (0..ds.headers.len())
        .map(|ci| ci == ds.columns.value_start || ci == ds.columns.value_current)
        .collect();
    let widths: Vec<f32> = (0..ds.headers.len())
        .map(|ci| if ci == ds.columns.name { 220.0 } else if numeric[ci] { 140.0 } else { 160.0 })
        .collect();
    let columns = data_table::TableColumns::new(&headers).widths(&widths).numeric(&numeric);

    data_table::draw(ui, id_salt, &columns, view.len(), |ui, r, c| {
        if let Some(cell) = view.row(r).and_then(|row| row.get(c)) {
            ui.label(display_cell(ds, c, cell));
        }
    });
}

impl Page for DataPage {
    fn kind(&self) -> PageKind { PageKind::Data }
    fn title(&self) -> &'static str { "Data" }
    fn heading(&self) -> &'static str { "Full Data" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App, ds: &Dataset) {
        let ceiling = app.state.gui.filter_ceiling;
        let filter = &mut app.state.gui.filter;
        let mut max = filter.max.unwrap_or(ceiling);

        let mut changed = false;
        ui.columns(2, |cols| {
            cols[0].horizontal(|ui| {
                ui.label("Minimum value (€)");
                changed |= ui
                    .add(egui::DragValue::new(&mut filter.min).range(0..=ceiling).speed(10_000.0))
                    .changed();
            });
            cols[1].horizontal(|ui| {
                ui.label("Maximum value (€)");
                changed |= ui
                    .add(egui::DragValue::new(&mut max).range(0..=ceiling).speed(10_000.0))
                    .changed();
            });
        });
        filter.max = Some(max);

        ui.horizontal(|ui| {
            ui.label("Search by name:");
            changed |= ui
                .add(egui::TextEdit::singleline(&mut filter.search).desired_width(260.0))
                .changed();
        });

        let view = FilteredView::new(ds, filter);
        if changed {
            logd!("UI: filter {:?} → {} rows", filter, view.len());
        }
        ui.small(format!("{} of {} players", view.len(), ds.len()));
        ui.add_space(6.0);
        full_table(ui, "data_table", &view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::ColumnMap;
    use crate::store::parse_dataset;

    #[test]
    fn value_columns_are_renamed_and_formatted() {
        let text = "\
Nombre,Valor de Mercado en 01/01/2024,Valor de Mercado Actual,Jugador
Ana,\"1,5 mill. €\",N/A,https://img.example/ana.png
";
        let ds = parse_dataset(text, &ColumnMap::default()).unwrap();
        assert_eq!(display_header(&ds, 0), "Nombre");
        assert_eq!(display_header(&ds, 1), "Initial value");
        assert_eq!(display_header(&ds, 2), "Current value");

        let row = &ds.rows[0];
        assert_eq!(display_cell(&ds, 1, &row[1]), "€1,500,000");
        assert_eq!(display_cell(&ds, 2, &row[2]), "N/A");
        assert_eq!(display_cell(&ds, 3, &row[3]), "https://img.example/ana.png");
    }
}
