// src/gui/components/metric.rs
use eframe::egui::{self, Color32, RichText};

pub const UP: Color32 = Color32::from_rgb(0x3C, 0xB3, 0x71);
pub const DOWN: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

/// Text under a metric value, coloured by the sign of the change.
pub struct Delta {
    pub text: String,
    pub negative: bool,
}

impl Delta {
    pub fn new(text: String, change: impl Into<i128>) -> Self {
        Self { text, negative: change.into() < 0 }
    }
}

/// Label, big value, optional delta. Meant for `ui.columns`.
pub fn card(ui: &mut egui::Ui, label: &str, value: &str, delta: Option<Delta>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical(|ui| {
            ui.label(RichText::new(label).weak());
            ui.label(RichText::new(value).size(24.0).strong());
            match delta {
                Some(d) => {
                    let (arrow, color) = if d.negative { ("↓", DOWN) } else { ("↑", UP) };
                    ui.colored_label(color, format!("{arrow} {}", d.text));
                }
                // keep cards in a row the same height
                None => {
                    ui.label(" ");
                }
            }
        });
    });
}
