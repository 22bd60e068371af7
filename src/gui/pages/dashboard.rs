// src/gui/pages/dashboard.rs
use eframe::egui;

use crate::{
    config::{consts::TOP_N, options::PageKind},
    data::{Totals, top_by_current},
    format::{format_euros, format_percent, format_value},
    gui::{
        app::App,
        components::{chart, data_table, metric},
        portraits,
    },
    store::Dataset,
};

use super::{Page, subheading};

const PORTRAIT_H: f32 = 50.0;

pub struct DashboardPage;
pub static PAGE: DashboardPage = DashboardPage;

impl Page for DashboardPage {
    fn kind(&self) -> PageKind { PageKind::Dashboard }
    fn title(&self) -> &'static str { "Dashboard" }
    fn heading(&self) -> &'static str { "Interactive Football Dashboard" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App, ds: &Dataset) {
        subheading(ui, "General statistics");
        let t = Totals::of(ds);
        ui.columns(3, |cols| {
            metric::card(&mut cols[0], "Total initial value", &format_euros(t.initial as f64), None);
            metric::card(
                &mut cols[1],
                "Total current value",
                &format_euros(t.current as f64),
                Some(metric::Delta::new(format_euros(t.change as f64), t.change)),
            );
            metric::card(
                &mut cols[2],
                "Change",
                &t.change_pct.map_or(s!("N/A"), format_percent),
                None,
            );
        });

        subheading(ui, &format!("Top {} players by current value", TOP_N));
        let top = top_by_current(ds, TOP_N);
        let bars: Vec<chart::Bar> = top
            .iter()
            .map(|p| chart::Bar {
                label: &p.name,
                value: p.value_current.known().unwrap_or(0) as f64,
            })
            .collect();
        chart::bar_chart(ui, &bars, chart::ORANGE, 300.0);

        subheading(ui, "Players");
        let headers = strings!["Portrait", "Name", "Current value"];
        let columns = data_table::TableColumns::new(&headers)
            .widths(&[70.0, 260.0, 160.0])
            .numeric(&[false, false, true])
            .row_height(PORTRAIT_H + 6.0);

        let cache = &mut app.portraits;
        data_table::draw(ui, "dashboard_players", &columns, ds.players.len(), |ui, r, c| {
            let Some(p) = ds.players.get(r) else { return };
            match c {
                0 => portraits::show(ui, cache, &p.image_url, PORTRAIT_H),
                1 => { ui.label(&p.name); }
                _ => { ui.label(format_value(p.value_current)); }
            }
        });
    }
}
