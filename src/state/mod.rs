//! View state owned by the display controller.

/// Which date rule picks flashback videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Same month and day in an earlier year.
    #[default]
    Day,
    /// Same ISO week number in an earlier year.
    Week,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Day => ViewMode::Week,
            ViewMode::Week => ViewMode::Day,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewMode::Day => "This Day in History",
            ViewMode::Week => "This Week in History",
        }
    }

    /// Label for the button that switches away from this mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ViewMode::Day => "Switch to This Week",
            ViewMode::Week => "Switch to Today",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            ViewMode::Day => "No videos found from this day in previous years.",
            ViewMode::Week => "No videos found from this week in previous years.",
        }
    }
}

/// Mode flag plus folder panel visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayState {
    mode: ViewMode,
    folder_panel_visible: bool,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn folder_panel_visible(&self) -> bool {
        self.folder_panel_visible
    }

    /// Flips between day and week mode and returns the new mode.
    pub fn toggle_mode(&mut self) -> ViewMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Shows or hides the folder panel and returns the new visibility.
    pub fn toggle_folder_panel(&mut self) -> bool {
        self.folder_panel_visible = !self.folder_panel_visible;
        self.folder_panel_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_day_mode_with_panel_hidden() {
        let state = DisplayState::new();
        assert_eq!(state.mode(), ViewMode::Day);
        assert!(!state.folder_panel_visible());
    }

    #[test]
    fn toggles_are_independent() {
        let mut state = DisplayState::new();
        assert_eq!(state.toggle_mode(), ViewMode::Week);
        assert!(state.toggle_folder_panel());
        assert_eq!(state.mode(), ViewMode::Week);

        assert_eq!(state.toggle_mode(), ViewMode::Day);
        assert!(state.folder_panel_visible());
        assert!(!state.toggle_folder_panel());
    }

    #[test]
    fn labels_follow_mode() {
        assert_eq!(ViewMode::Day.title(), "This Day in History");
        assert_eq!(ViewMode::Week.toggle_label(), "Switch to Today");
        assert!(ViewMode::Week.empty_message().contains("this week"));
    }
}
