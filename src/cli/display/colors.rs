//! Color theme for CLI output

use crate::infrastructure::manifest::FileAction;
use comfy_table::Color as TableColor;

/// Color theme for terminal output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub success: TableColor,
    pub warning: TableColor,
    pub info: TableColor,
    pub muted: TableColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            success: TableColor::Green,
            warning: TableColor::Yellow,
            info: TableColor::Cyan,
            muted: TableColor::DarkGrey,
        }
    }
}

impl ColorTheme {
    /// Get color for what happened to a manifest file
    pub fn get_action_color(&self, action: FileAction) -> TableColor {
        match action {
            FileAction::Written => self.success,
            FileAction::Deleted => self.warning,
            FileAction::Absent => self.muted,
        }
    }

    /// Get color for a yes/no flag
    pub fn get_flag_color(&self, enabled: bool) -> TableColor {
        if enabled {
            self.success
        } else {
            self.muted
        }
    }
}
