//! Status icons for CLI output

use crate::infrastructure::manifest::FileAction;

/// Status icons for different states
pub struct StatusIcon;

impl StatusIcon {
    /// File written
    pub const WRITTEN: &'static str = "✓";

    /// File removed
    pub const DELETED: &'static str = "✗";

    /// Nothing to do
    pub const SKIPPED: &'static str = "·";

    /// Marks the selected environment
    pub const CURRENT: &'static str = "▶";

    pub fn get_action_icon(action: FileAction) -> &'static str {
        match action {
            FileAction::Written => Self::WRITTEN,
            FileAction::Deleted => Self::DELETED,
            FileAction::Absent => Self::SKIPPED,
        }
    }

    pub fn get_flag_text(enabled: bool) -> &'static str {
        if enabled {
            "yes"
        } else {
            "no"
        }
    }
}
