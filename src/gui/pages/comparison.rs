// src/gui/pages/comparison.rs
use eframe::egui;

use crate::{
    config::options::PageKind,
    data::{self, FilteredView},
    gui::{
        app::App,
        components::{chart, metric},
    },
    store::Dataset,
};

use super::{Page, individual::player_combo, subheading};

pub struct ComparisonPage;
pub static PAGE: ComparisonPage = ComparisonPage;

impl Page for ComparisonPage {
    fn kind(&self) -> PageKind { PageKind::Comparison }
    fn title(&self) -> &'static str { "Comparison" }
    fn heading(&self) -> &'static str { "Player Comparison" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App, ds: &Dataset) {
        let names = ds.unique_names();
        if names.len() < 2 {
            ui.label("At least two players are needed for a comparison.");
            return;
        }

        let gui = &mut app.state.gui;
        ui.columns(2, |cols| {
            player_combo(&mut cols[0], "compare_a", "First player:", &names, &mut gui.compare_a);
            let first = gui.compare_a.clone().unwrap_or_default();
            // second slot never offers the first player
            let others = data::comparison_candidates(ds, &first);
            player_combo(&mut cols[1], "compare_b", "Second player:", &others, &mut gui.compare_b);
        });

        let (Some(a), Some(b)) = (gui.compare_a.clone(), gui.compare_b.clone()) else { return };

        ui.add_space(8.0);
        match data::comparison(ds, &a, &b, app.today()) {
            Ok([(na, sa), (nb, sb)]) => {
                let lines = [
                    chart::Line { name: &na, color: chart::ORANGE, series: &sa },
                    chart::Line { name: &nb, color: chart::BLUE, series: &sb },
                ];
                chart::line_chart(ui, &lines, 340.0);
            }
            Err(e) => {
                ui.colored_label(metric::DOWN, format!("Cannot compare {} and {}: {}", a, b, e));
            }
        }

        subheading(ui, "Detailed comparison");
        let view = FilteredView::for_names(ds, &[a.as_str(), b.as_str()]);
        super::data::full_table(ui, "compare_table", &view);
    }
}
