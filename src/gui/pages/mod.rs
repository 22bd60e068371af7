// src/gui/pages/mod.rs
use eframe::egui;

use crate::{config::options::PageKind, store::Dataset};

use super::app::App;

pub mod comparison;
pub mod dashboard;
pub mod data;
pub mod individual;

/// One menu entry. Pages are stateless statics; anything they remember
/// between frames lives in `App::state.gui`.
pub trait Page: Send + Sync + 'static {
    fn kind(&self) -> PageKind;

    /// Menu label.
    fn title(&self) -> &'static str;

    /// Heading above the page body. Defaults to the menu label.
    fn heading(&self) -> &'static str {
        self.title()
    }

    /// Draw the page body. Only called once the dataset is loaded.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App, ds: &Dataset);
}

/// Section title inside a page.
pub(crate) fn subheading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(10.0);
    ui.label(egui::RichText::new(text).size(17.0).strong());
    ui.add_space(4.0);
}
