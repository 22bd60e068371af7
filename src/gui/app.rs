// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, mpsc},
    thread,
};

use chrono::{Local, NaiveDate};
use eframe::egui;

use crate::{
    config::{options::{AppOptions, PageKind}, state::AppState},
    data::Filter,
    store::{DataStore, Dataset},
};

use super::{pages::Page, portraits::Portraits, progress::GuiProgress, router};

pub fn run(options: eframe::NativeOptions, app_options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Football Market Values",
        options,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx, AppState::new(app_options))))),
    )?;
    Ok(())
}

type LoadResult = Result<Arc<Dataset>, String>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // load-once dataset; shared with the loader thread
    pub store: Arc<DataStore>,
    load_rx: Option<mpsc::Receiver<LoadResult>>,
    pub load_error: Option<String>,

    // status line (loader writes here)
    pub status: Arc<Mutex<String>>,

    pub portraits: Portraits,
}

impl App {
    pub fn new(ctx: &egui::Context, state: AppState) -> Self {
        let mut app = Self {
            state,
            store: Arc::new(DataStore::new()),
            load_rx: None,
            load_error: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            portraits: Portraits::default(),
        };
        logf!("Init: source={}", app.state.options.source.describe());
        app.start_load(ctx);
        app
    }

    /// Kick off the dataset load on a worker thread.
    pub fn start_load(&mut self, ctx: &egui::Context) {
        if self.load_rx.is_some() || self.store.is_loaded() {
            return;
        }
        self.load_error = None;

        let (tx, rx) = mpsc::channel();
        let store = Arc::clone(&self.store);
        let opts = self.state.options.clone();
        let mut progress = GuiProgress::new(Arc::clone(&self.status), ctx.clone());
        let ctx = ctx.clone();

        thread::spawn(move || {
            let res = store.get_or_load(&opts, &mut progress).map_err(|e| e.to_string());
            let _ = tx.send(res);
            ctx.request_repaint();
        });
        self.load_rx = Some(rx);
    }

    /// Pick up a finished load, if any.
    fn poll_load(&mut self) {
        let Some(rx) = &self.load_rx else { return };
        match rx.try_recv() {
            Ok(Ok(ds)) => {
                self.load_rx = None;
                self.on_loaded(&ds);
            }
            Ok(Err(e)) => {
                self.load_rx = None;
                loge!("UI: load failed: {}", e);
                self.load_error = Some(e);
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.load_rx = None;
                self.load_error = Some(s!("Loader stopped unexpectedly"));
            }
        }
    }

    /// Seed selections and filter bounds from a fresh dataset.
    fn on_loaded(&mut self, ds: &Dataset) {
        let names = ds.unique_names();
        let gui = &mut self.state.gui;

        gui.selected_player = names.first().map(|n| s!(*n));
        gui.compare_a = names.first().map(|n| s!(*n));
        gui.compare_b = names.get(1).map(|n| s!(*n));
        gui.filter = Filter::for_dataset(ds);
        gui.filter_ceiling = ds.max_current().unwrap_or(0).max(0);

        logf!("UI: dataset ready ({} players, {} unique names)", ds.len(), names.len());
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn dataset(&self) -> Option<Arc<Dataset>> { self.store.get() }

    #[inline]
    pub fn is_loading(&self) -> bool { self.load_rx.is_some() }

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Series evaluation date. Read once per frame by callers and passed down.
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();
        self.portraits.poll(ctx);

        egui::SidePanel::left("menu")
            .resizable(false)
            .show(ctx, |ui| {
                super::components::menu::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.is_loading() {
                    ui.spinner();
                }
                ui.label(self.status_text());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.current_page();
            ui.heading(page.heading());
            ui.separator();

            match self.dataset() {
                Some(ds) => {
                    egui::ScrollArea::vertical()
                        .id_salt(("page_scroll", page.kind()))
                        .show(ui, |ui| page.draw(ui, self, &ds));
                }
                None => self.draw_not_ready(ui),
            }
        });
    }
}

impl App {
    fn draw_not_ready(&mut self, ui: &mut egui::Ui) {
        if let Some(err) = self.load_error.clone() {
            ui.colored_label(egui::Color32::from_rgb(0xDC, 0x61, 0x49), "Data unavailable");
            ui.label(err);
            if ui.button("Retry").clicked() {
                logf!("UI: retry load");
                let ctx = ui.ctx().clone();
                self.start_load(&ctx);
            }
        } else {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading data…");
            });
        }
    }
}
