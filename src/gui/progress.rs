// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::progress::Progress;

/// Writes load status into the shared status line and wakes the UI.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, source: &str) {
        self.set_status(format!("Loading data from {}", source));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn finish(&mut self, players: Option<usize>) {
        match players {
            Some(n) => self.set_status(format!("Loaded {} players", n)),
            None => self.set_status("Data unavailable"),
        }
    }
}
