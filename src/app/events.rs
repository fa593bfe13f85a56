// ABOUTME: Event handling system mapping kiosk key presses to wizard actions

use crate::app::AppState;
use crate::wizard::WizardStep;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    // Welcome step
    Scan,
    InputChar(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    SubmitSearch,
    // Search step
    HighlightNext,
    HighlightPrevious,
    SelectResult,
    // Confirm step
    CheckIn,
    // Any step with a previous step
    Back,
    // Complete step
    NewCheckIn,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        // Global keys work from any step
        match key_event.code {
            KeyCode::Char('c' | 'q') if ctrl => return Some(AppEvent::Quit),
            KeyCode::F(1) => return Some(AppEvent::ToggleHelp),
            _ => {}
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::Esc | KeyCode::Enter => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        match state.wizard.step() {
            WizardStep::Welcome => Self::handle_welcome_keys(key_event, state, ctrl),
            WizardStep::Search => Self::handle_search_keys(key_event, state),
            WizardStep::Confirm => Self::handle_confirm_keys(key_event, state),
            WizardStep::Complete => Self::handle_complete_keys(key_event),
        }
    }

    fn handle_welcome_keys(key_event: KeyEvent, state: &AppState, ctrl: bool) -> Option<AppEvent> {
        let busy = state.wizard.is_busy();
        match key_event.code {
            KeyCode::Char('s') if ctrl => (!busy).then_some(AppEvent::Scan),
            KeyCode::F(2) => (!busy).then_some(AppEvent::Scan),
            KeyCode::Enter => (!busy).then_some(AppEvent::SubmitSearch),
            KeyCode::Esc => Some(AppEvent::Back),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(c) => (!busy).then_some(AppEvent::InputChar(c)),
            KeyCode::Backspace => (!busy).then_some(AppEvent::Backspace),
            KeyCode::Delete => (!busy).then_some(AppEvent::Delete),
            KeyCode::Left => Some(AppEvent::CursorLeft),
            KeyCode::Right => Some(AppEvent::CursorRight),
            KeyCode::Home => Some(AppEvent::CursorHome),
            KeyCode::End => Some(AppEvent::CursorEnd),
            _ => None,
        }
    }

    fn handle_search_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::HighlightNext),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::HighlightPrevious),
            KeyCode::Enter if !state.wizard.state().results.is_empty() => {
                Some(AppEvent::SelectResult)
            }
            KeyCode::Esc | KeyCode::Backspace => Some(AppEvent::Back),
            _ => None,
        }
    }

    fn handle_confirm_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                (!state.wizard.is_busy()).then_some(AppEvent::CheckIn)
            }
            KeyCode::Esc | KeyCode::Char('n') => Some(AppEvent::Back),
            _ => None,
        }
    }

    fn handle_complete_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('r') => Some(AppEvent::NewCheckIn),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!("Processing event {:?} on {:?}", event, state.wizard.step());

        let result = match event {
            AppEvent::Quit => {
                state.should_quit = true;
                Ok(())
            }
            AppEvent::ToggleHelp => {
                state.help_visible = !state.help_visible;
                Ok(())
            }
            AppEvent::Scan => state.wizard.scan().map(|_| ()),
            AppEvent::SubmitSearch => state.wizard.submit_search().map(|_| ()),
            AppEvent::InputChar(c) => {
                state.wizard.input_char(c);
                Ok(())
            }
            AppEvent::Backspace => {
                state.wizard.backspace();
                Ok(())
            }
            AppEvent::Delete => {
                state.wizard.delete();
                Ok(())
            }
            AppEvent::CursorLeft => {
                state.wizard.cursor_left();
                Ok(())
            }
            AppEvent::CursorRight => {
                state.wizard.cursor_right();
                Ok(())
            }
            AppEvent::CursorHome => {
                state.wizard.cursor_home();
                Ok(())
            }
            AppEvent::CursorEnd => {
                state.wizard.cursor_end();
                Ok(())
            }
            AppEvent::HighlightNext => {
                state.wizard.highlight_next();
                Ok(())
            }
            AppEvent::HighlightPrevious => {
                state.wizard.highlight_previous();
                Ok(())
            }
            AppEvent::SelectResult => state.wizard.select_highlighted(),
            AppEvent::CheckIn => state.wizard.check_in().map(|_| ()),
            AppEvent::Back => {
                state.wizard.go_back();
                Ok(())
            }
            AppEvent::NewCheckIn => {
                state.start_new_check_in();
                Ok(())
            }
        };

        if let Err(e) = result {
            state.report_rejection(&e);
        }
    }
}
