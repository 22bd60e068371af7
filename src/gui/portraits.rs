// src/gui/portraits.rs
//
// Player portraits: fetched on a worker thread, decoded with `image`,
// uploaded as egui textures on the UI thread. One attempt per URL.

use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

use crate::config::consts::DEFAULT_TIMEOUT_SECS;
use crate::core::net;

enum Slot {
    Loading,
    Ready(TextureHandle),
    Failed,
}

type Decoded = (String, Result<ColorImage, String>);

pub struct Portraits {
    slots: HashMap<String, Slot>,
    tx: mpsc::Sender<Decoded>,
    rx: mpsc::Receiver<Decoded>,
}

impl Default for Portraits {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { slots: HashMap::new(), tx, rx }
    }
}

impl Portraits {
    /// Texture for `url`, starting a fetch the first time it is asked for.
    pub fn get(&mut self, ctx: &egui::Context, url: &str) -> Option<&TextureHandle> {
        if url.is_empty() || !url.starts_with("http") {
            return None;
        }
        if !self.slots.contains_key(url) {
            self.slots.insert(s!(url), Slot::Loading);
            self.spawn_fetch(ctx, url);
        }
        match self.slots.get(url) {
            Some(Slot::Ready(tex)) => Some(tex),
            _ => None,
        }
    }

    fn spawn_fetch(&self, ctx: &egui::Context, url: &str) {
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        let url = s!(url);
        thread::spawn(move || {
            let res = fetch_and_decode(&url);
            let _ = tx.send((url, res));
            ctx.request_repaint();
        });
    }

    /// Upload finished decodes. Call once per frame.
    pub fn poll(&mut self, ctx: &egui::Context) {
        while let Ok((url, res)) = self.rx.try_recv() {
            let slot = match res {
                Ok(img) => Slot::Ready(ctx.load_texture(url.clone(), img, TextureOptions::LINEAR)),
                Err(e) => {
                    logd!("UI: portrait {} failed: {}", url, e);
                    Slot::Failed
                }
            };
            self.slots.insert(url, slot);
        }
    }

    pub fn failed(&self, url: &str) -> bool {
        matches!(self.slots.get(url), Some(Slot::Failed))
    }
}

fn fetch_and_decode(url: &str) -> Result<ColorImage, String> {
    let bytes = net::http_get_bytes(url, DEFAULT_TIMEOUT_SECS).map_err(|e| e.to_string())?;
    let rgba = image::load_from_memory(&bytes).map_err(|e| e.to_string())?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Draw a portrait at `height` px, or a grey placeholder box.
pub fn show(ui: &mut egui::Ui, portraits: &mut Portraits, url: &str, height: f32) {
    let ctx = ui.ctx().clone();
    let failed = portraits.failed(url);
    match portraits.get(&ctx, url) {
        Some(tex) => {
            let [w, h] = tex.size();
            let width = if h == 0 { height } else { height * w as f32 / h as f32 };
            ui.add(egui::Image::new((tex.id(), egui::vec2(width, height))));
        }
        None => {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(height * 0.8, height), egui::Sense::hover());
            ui.painter().rect_filled(rect, 4.0, ui.visuals().faint_bg_color);
            if failed {
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "?",
                    egui::FontId::proportional(height * 0.4),
                    ui.visuals().weak_text_color(),
                );
            }
        }
    }
}
