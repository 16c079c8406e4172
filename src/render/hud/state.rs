//! Overlay panel visibility state.

/// Panel visibility toggles
#[derive(Debug, Clone)]
pub struct HudState {
    /// Show the main card panel (center)
    pub show_card: bool,
    /// Show the contacts panel (right)
    pub show_contacts: bool,
    /// Show the status panel (top-left)
    pub show_status: bool,
    /// Show help overlay (toggle with H)
    pub show_help: bool,
    /// Show export menu (toggle with E)
    pub show_export_menu: bool,
    /// Overlay enabled at all
    pub hud_enabled: bool,
}

impl Default for HudState {
    fn default() -> Self {
        Self {
            show_card: true,
            show_contacts: true,
            show_status: false,
            show_help: false,
            show_export_menu: false,
            hud_enabled: true,
        }
    }
}

impl HudState {
    /// Toggle the whole overlay; with it off only the backdrop remains
    pub fn toggle_hud(&mut self) {
        self.hud_enabled = !self.hud_enabled;
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            self.show_export_menu = false;
        }
    }

    /// Toggle export menu
    pub fn toggle_export_menu(&mut self) {
        self.show_export_menu = !self.show_export_menu;
        if self.show_export_menu {
            self.show_help = false;
        }
    }

    /// Toggle the status panel
    pub fn toggle_status(&mut self) {
        self.show_status = !self.show_status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_and_export_are_exclusive() {
        let mut state = HudState::default();
        state.toggle_help();
        assert!(state.show_help);
        state.toggle_export_menu();
        assert!(state.show_export_menu && !state.show_help);
        state.toggle_help();
        assert!(state.show_help && !state.show_export_menu);
    }
}
