// ABOUTME: UI testing framework for the kiosk screen using a headless ratatui backend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use vms_kiosk::app::{App, EventHandler};
use vms_kiosk::components::LayoutComponent;
use vms_kiosk::config::{Density, KioskConfig};
use vms_kiosk::directory::InMemoryDirectory;
use vms_kiosk::wizard::WizardStep;

pub struct UITestFramework {
    app: App,
    terminal: Terminal<TestBackend>,
    layout: LayoutComponent,
}

impl UITestFramework {
    pub fn new() -> Self {
        Self::with_density(Density::Standard)
    }

    pub fn with_density(density: Density) -> Self {
        let backend = TestBackend::new(120, 40); // Standard terminal size
        let terminal = Terminal::new(backend).unwrap();

        let mut config = KioskConfig::default();
        config.kiosk.simulated_latency_ms = 0;
        config.kiosk.density = density;
        let app = App::new(config, Arc::new(InMemoryDirectory::mock()));

        Self {
            app,
            terminal,
            layout: LayoutComponent::new(),
        }
    }

    /// Simulate a key press and process the resulting event
    pub fn press_key(&mut self, key_code: KeyCode) {
        let key_event = KeyEvent::new(key_code, KeyModifiers::NONE);

        if let Some(event) = EventHandler::handle_key_event(key_event, &mut self.app.state) {
            EventHandler::process_event(event, &mut self.app.state);
        }
    }

    /// Simulate typing a string of characters
    pub fn type_string(&mut self, text: &str) {
        for ch in text.chars() {
            self.press_key(KeyCode::Char(ch));
        }
    }

    /// Wait for the in-flight wizard request and apply it
    pub async fn process_async(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        match timeout(Duration::from_secs(5), self.app.state.wizard.settle()).await {
            Ok(Some(result)) => {
                self.app.state.on_wizard_result(result);
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(_) => Err("Timeout waiting for async operation".into()),
        }
    }

    /// Render the current state and return the buffer for inspection
    pub fn render(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        self.terminal.draw(|frame| {
            self.layout.render(frame, &self.app.state);
        })?;

        let buffer = self.terminal.backend().buffer().clone();
        Ok(buffer.content().iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
    }

    pub fn step(&self) -> WizardStep {
        self.app.state.wizard.step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_screen_renders() {
        let mut ui = UITestFramework::new();
        let screen = ui.render().unwrap();

        assert!(screen.contains("Visitor Check-in"));
        assert!(screen.contains("Main Lobby"));
        assert!(screen.contains("Scan your invitation or search for your visit"));
        assert!(screen.contains("Checked in this session: 0"));
    }

    #[test]
    fn test_typed_query_is_shown() {
        let mut ui = UITestFramework::new();
        ui.type_string("Acme");

        let screen = ui.render().unwrap();
        assert!(screen.contains("Acme"));
        assert!(!screen.contains("Type your name, company, email or phone"));
    }

    #[tokio::test]
    async fn test_search_results_render() {
        let mut ui = UITestFramework::new();
        ui.type_string("john");
        ui.press_key(KeyCode::Enter);
        ui.process_async().await.unwrap();

        assert_eq!(ui.step(), WizardStep::Search);
        let screen = ui.render().unwrap();
        assert!(screen.contains("Find Visit"));
        assert!(screen.contains("John Smith"));
        assert!(screen.contains("Lisa Johnston"));
        assert!(!screen.contains("Jane Doe"));
    }

    #[tokio::test]
    async fn test_empty_search_renders_hint() {
        let mut ui = UITestFramework::new();
        ui.type_string("zzz");
        ui.press_key(KeyCode::Enter);
        ui.process_async().await.unwrap();

        let screen = ui.render().unwrap();
        assert!(screen.contains("No visits found for \"zzz\""));
    }

    #[tokio::test]
    async fn test_confirm_details_follow_density() {
        let mut ui = UITestFramework::new();
        ui.type_string("jane");
        ui.press_key(KeyCode::Enter);
        ui.process_async().await.unwrap();
        ui.press_key(KeyCode::Enter);
        assert_eq!(ui.step(), WizardStep::Confirm);

        let screen = ui.render().unwrap();
        assert!(screen.contains("Jane Doe"));
        assert!(screen.contains("jane.doe@acme.io"));

        let mut compact = UITestFramework::with_density(Density::Compact);
        compact.type_string("jane");
        compact.press_key(KeyCode::Enter);
        compact.process_async().await.unwrap();
        compact.press_key(KeyCode::Enter);

        let screen = compact.render().unwrap();
        assert!(screen.contains("Jane Doe"));
        assert!(!screen.contains("jane.doe@acme.io"));
    }

    #[tokio::test]
    async fn test_complete_screen_shows_badge() {
        let mut ui = UITestFramework::new();
        ui.press_key(KeyCode::F(2));
        ui.process_async().await.unwrap();
        assert_eq!(ui.step(), WizardStep::Confirm);

        ui.press_key(KeyCode::Enter);
        ui.process_async().await.unwrap();
        assert_eq!(ui.step(), WizardStep::Complete);

        let screen = ui.render().unwrap();
        assert!(screen.contains("Welcome, John!"));
        assert!(screen.contains("Badge"));
    }

    #[test]
    fn test_help_overlay_renders() {
        let mut ui = UITestFramework::new();
        ui.press_key(KeyCode::F(1));

        let screen = ui.render().unwrap();
        assert!(screen.contains("Scan your invitation"));
        assert!(screen.contains("Start a new check-in"));

        ui.press_key(KeyCode::Esc);
        let screen = ui.render().unwrap();
        assert!(!screen.contains("Start a new check-in"));
    }
}
