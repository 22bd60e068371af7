// src/gui/pages/individual.rs
use eframe::egui;

use crate::{
    config::options::PageKind,
    data::{self, PlayerMetrics},
    format::{format_large_number, format_percent},
    gui::{
        app::App,
        components::{chart, metric},
        portraits,
    },
    store::Dataset,
};

use super::{Page, subheading};

pub struct IndividualPage;
pub static PAGE: IndividualPage = IndividualPage;

/// Player picker over unique names; keeps `selected` valid for this dataset.
pub(crate) fn player_combo(
    ui: &mut egui::Ui,
    id_salt: &str,
    label: &str,
    names: &[&str],
    selected: &mut Option<String>,
) -> bool {
    if !selected.as_deref().is_some_and(|s| names.contains(&s)) {
        *selected = names.first().map(|n| s!(*n));
    }
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(id_salt)
            .width(260.0)
            .selected_text(selected.as_deref().unwrap_or("-"))
            .show_ui(ui, |ui| {
                for name in names {
                    let is_sel = selected.as_deref() == Some(*name);
                    if ui.selectable_label(is_sel, *name).clicked() && !is_sel {
                        *selected = Some(s!(*name));
                        changed = true;
                    }
                }
            });
    });
    changed
}

impl Page for IndividualPage {
    fn kind(&self) -> PageKind { PageKind::Individual }
    fn title(&self) -> &'static str { "Individual" }
    fn heading(&self) -> &'static str { "Individual Player Analysis" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App, ds: &Dataset) {
        let names = ds.unique_names();
        if names.is_empty() {
            ui.label("The dataset has no players.");
            return;
        }
        if player_combo(ui, "individual_player", "Select a player:", &names, &mut app.state.gui.selected_player) {
            logd!("UI: selected {:?}", app.state.gui.selected_player);
        }
        let Some(name) = app.state.gui.selected_player.clone() else { return };
        let Some(player) = ds.player(&name) else { return };

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            portraits::show(ui, &mut app.portraits, &player.image_url, 110.0);
            ui.add_space(12.0);
            ui.vertical(|ui| {
                let m = PlayerMetrics::for_player(player);
                let big = |v: Option<i64>| v.map_or(s!("N/A"), |n| format_large_number(n as f64));
                ui.columns(3, |cols| {
                    metric::card(&mut cols[0], "Initial value", &big(m.initial.known()), None);
                    metric::card(
                        &mut cols[1],
                        "Current value",
                        &big(m.current.known()),
                        m.change.map(|c| metric::Delta::new(format_large_number(c as f64), c)),
                    );
                    metric::card(&mut cols[2], "Change", &m.change_pct.map_or(s!("N/A"), format_percent), None);
                });
            });
        });

        subheading(ui, &format!("Market value evolution: {}", name));
        match data::evolution(ds, &name, app.today()) {
            Ok(series) => {
                let lines = [chart::Line { name: &name, color: chart::ORANGE, series: &series }];
                chart::line_chart(ui, &lines, 340.0);
            }
            Err(e) => {
                ui.colored_label(metric::DOWN, format!("No evolution chart for {}: {}", name, e));
            }
        }
    }
}
