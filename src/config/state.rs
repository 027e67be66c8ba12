// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Week chosen in the top bar; None until the user picks one.
    pub selected_week: Option<String>,

    pub window_w: f32,
    pub window_h: f32,

    /// Left panel listing the week's drives
    pub show_drive_list: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_week: None,
            window_w: 1100.0,
            window_h: 700.0,
            show_drive_list: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
