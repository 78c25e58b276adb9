//! HUD visibility state.

/// Overlay toggles that live outside the simulation
#[derive(Debug, Clone)]
pub struct HudState {
    /// Show help overlay (center, toggle with H key)
    pub show_help: bool,
    /// Draw the chart legend
    pub show_legend: bool,
}

impl Default for HudState {
    fn default() -> Self {
        Self {
            show_help: false,
            show_legend: true,
        }
    }
}

impl HudState {
    pub fn new(show_legend: bool) -> Self {
        Self {
            show_legend,
            ..Self::default()
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_legend(&mut self) {
        self.show_legend = !self.show_legend;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles() {
        let mut state = HudState::new(false);
        assert!(!state.show_help);
        assert!(!state.show_legend);

        state.toggle_help();
        state.toggle_legend();
        assert!(state.show_help);
        assert!(state.show_legend);

        state.toggle_help();
        assert!(!state.show_help);
    }
}
