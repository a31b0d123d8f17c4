//! Style constants for UI layout.

/// Fixed dimensions for the editor chrome.
pub struct ChromeStyle {
    pub toolbar_padding: [u16; 2],
    pub output_panel_height: f32,
    pub status_bar_height: f32,
    pub editor_font_size: f32,
}

impl Default for ChromeStyle {
    fn default() -> Self {
        Self {
            toolbar_padding: [8, 16],
            output_panel_height: 150.0,
            status_bar_height: 28.0,
            editor_font_size: 14.0,
        }
    }
}
