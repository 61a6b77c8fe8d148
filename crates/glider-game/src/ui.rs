//! Console presentation: UI requests become log lines.

use glider_session::SessionUi;
use tracing::info;

/// Screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    None,
    MainMenu,
    Hud,
    GameOver,
}

/// [`SessionUi`] that logs each request and remembers the resulting state.
#[derive(Debug, Default)]
pub struct ConsoleUi {
    screen: Screen,
    cursor_visible: bool,
    game_over_shown: u32,
}

impl ConsoleUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// How many times the game-over screen was requested.
    pub fn game_over_shown(&self) -> u32 {
        self.game_over_shown
    }
}

impl SessionUi for ConsoleUi {
    fn show_main_menu(&mut self) {
        info!("[ui] main menu");
        self.screen = Screen::MainMenu;
    }

    fn show_hud(&mut self) {
        info!("[ui] hud");
        self.screen = Screen::Hud;
    }

    fn show_game_over(&mut self) {
        info!("[ui] game over");
        self.screen = Screen::GameOver;
        self.game_over_shown += 1;
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        info!(visible, "[ui] cursor");
        self.cursor_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_screen_and_cursor() {
        let mut ui = ConsoleUi::new();
        assert_eq!(ui.screen(), Screen::None);
        ui.show_hud();
        ui.set_cursor_visible(false);
        assert_eq!(ui.screen(), Screen::Hud);
        assert!(!ui.cursor_visible());
        ui.show_game_over();
        ui.set_cursor_visible(true);
        assert_eq!(ui.screen(), Screen::GameOver);
        assert!(ui.cursor_visible());
        assert_eq!(ui.game_over_shown(), 1);
    }
}
