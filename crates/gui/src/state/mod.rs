pub mod settings;

use shared::{Editor, InputEvent};

pub use settings::{AppSettings, UiSettings};

/// Combined application state
pub struct AppState {
    pub editor: Editor,
    pub settings: AppSettings,
    /// Show settings window
    pub show_settings_window: bool,
    /// Set when the settings window changed something that should be saved.
    /// Written once the pointer is released, not on every drag frame.
    pub settings_dirty: bool,
}

impl AppState {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            editor: Editor::new(),
            settings,
            show_settings_window: false,
            settings_dirty: false,
        }
    }

    /// Forward an event to the editor
    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        self.editor.handle(event)
    }

    /// Whether pending settings changes should be written now.
    /// Clears the pending flag when it returns true.
    pub fn take_settings_save(&mut self, pointer_down: bool) -> bool {
        if !self.settings_dirty || pointer_down {
            return false;
        }
        self.settings_dirty = false;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.editor.history().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.editor.history().can_redo()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppSettings::load())
    }
}
