// src/gui/components/menu.rs
//
// Left-hand page menu. Switching pages only changes the index; pages read
// the dataset and their own selections on the next frame.

use eframe::egui::{self, RichText};

use crate::gui::{app::App, router};

const FOOTER: &str = "Analysis of the statistics most correlated with the market value \
                      of football players in Spain";

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.set_min_width(190.0);
    ui.add_space(8.0);
    ui.label(RichText::new("Football Analysis").size(20.0).strong());
    ui.separator();

    let cur = app.current_index();
    for (idx, page) in router::all_pages().iter().enumerate() {
        let selected = idx == cur;
        let label = RichText::new(page.title()).size(16.0);
        if ui.selectable_label(selected, label).clicked() && !selected {
            logf!("UI: page switch {:?} → {:?}", app.current_page_kind(), page.kind());
            app.set_current_index(idx);
        }
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
        ui.add_space(6.0);
        if let Some(ds) = app.dataset() {
            ui.small(format!("{} players loaded", ds.len()));
        }
        ui.small(app.state.options.source.describe());
        ui.separator();
        ui.add(egui::Label::new(RichText::new(FOOTER).small().weak()).wrap());
    });
}
