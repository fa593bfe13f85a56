// ABOUTME: Main layout component - kiosk screen with the help overlay on top

use ratatui::prelude::*;

use super::{HelpComponent, KioskComponent};
use crate::app::AppState;

pub struct LayoutComponent {
    kiosk: KioskComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub const fn new() -> Self {
        Self {
            kiosk: KioskComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.size();
        self.kiosk.render(frame, area, state);

        if state.help_visible {
            self.help.render(frame, area);
        }
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
