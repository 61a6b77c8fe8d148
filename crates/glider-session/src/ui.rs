//! Presentation collaborator driven by the session.

/// Screens and cursor state the session asks the host to show.
pub trait SessionUi {
    /// Show the main menu.
    fn show_main_menu(&mut self);

    /// Show the in-flight HUD.
    fn show_hud(&mut self);

    /// Show the game-over screen.
    fn show_game_over(&mut self);

    /// Show or hide the pointer cursor.
    fn set_cursor_visible(&mut self, visible: bool);
}
