// src/config/state.rs
use super::options::AppOptions;
use crate::data::Filter;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active menu entry index into router::PAGES
    pub current_page_index: usize,

    /// Individual page -> picked player
    pub selected_player: Option<String>,

    /// Comparison page -> (first, second); second never equals first
    pub compare_a: Option<String>,
    pub compare_b: Option<String>,

    /// Data page -> filter inputs
    pub filter: Filter,
    /// Upper bound for the min/max inputs, set once the dataset is in
    pub filter_ceiling: i64,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            selected_player: None,
            compare_a: None,
            compare_b: None,
            filter: Filter::default(),
            filter_ceiling: 0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}
