//! Coin tally and game-over scheduling for one play session.

use glider_config::SessionConfig;
use glider_flight::FlightIntegrator;
use tracing::{debug, info, warn};

use crate::timer::OneShotTimer;
use crate::ui::SessionUi;

/// How the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The glider crashed.
    Crashed,
    /// Every coin was collected.
    AllCoinsCollected,
    /// The host ended the run directly.
    Requested,
}

/// Where the session is in its end-of-game sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No end condition seen yet.
    Playing,
    /// End condition seen; the game-over screen is on a timer.
    GameOverPending(GameOutcome),
    /// Game-over screen shown.
    GameOver(GameOutcome),
}

/// Session state owned by the game mode.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    level_name: String,
    coins_collected: u32,
    phase: SessionPhase,
    game_over_timer: OneShotTimer,
}

impl GameSession {
    /// Create a session; the level is unknown until [`on_session_start`](Self::on_session_start).
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            level_name: String::new(),
            coins_collected: 0,
            phase: SessionPhase::Playing,
            game_over_timer: OneShotTimer::new(),
        }
    }

    /// Record the current level and bring up its UI.
    pub fn on_session_start<U: SessionUi>(&mut self, level_name: &str, ui: &mut U) {
        self.level_name = level_name.to_string();

        if self.level_name == self.config.main_menu_level {
            info!("Session started in main menu");
            ui.show_main_menu();
        } else if self.is_gameplay_level() {
            info!(
                total_coins = self.config.total_coins,
                "Session started in gameplay level"
            );
            ui.show_hud();
            ui.set_cursor_visible(false);
        } else {
            warn!("Session started in unknown level {:?}", self.level_name);
        }
    }

    /// Per-frame check for the end of the run.
    ///
    /// The first time the glider has crashed or every coin is collected in
    /// the gameplay level, the game-over screen is scheduled after the
    /// configured delay. Later frames only advance that countdown.
    pub fn poll<U: SessionUi>(&mut self, flight: &FlightIntegrator, ui: &mut U, dt: f32) {
        if self.game_over_timer.tick(dt) {
            self.on_game_over(ui);
        }

        if self.phase != SessionPhase::Playing || !self.is_gameplay_level() {
            return;
        }

        let outcome = if flight.is_crashed() {
            GameOutcome::Crashed
        } else if self.coins_collected == self.config.total_coins {
            GameOutcome::AllCoinsCollected
        } else {
            return;
        };

        self.game_over_timer
            .schedule(self.config.game_over_delay_secs);
        self.phase = SessionPhase::GameOverPending(outcome);
        info!(
            ?outcome,
            delay_secs = self.config.game_over_delay_secs,
            "Game over scheduled"
        );
    }

    /// Show the game-over screen and give the cursor back.
    pub fn on_game_over<U: SessionUi>(&mut self, ui: &mut U) {
        self.game_over_timer.cancel();
        let outcome = match self.phase {
            SessionPhase::GameOverPending(outcome) | SessionPhase::GameOver(outcome) => outcome,
            SessionPhase::Playing => GameOutcome::Requested,
        };
        self.phase = SessionPhase::GameOver(outcome);
        info!(
            ?outcome,
            coins = self.coins_collected,
            total = self.config.total_coins,
            "Game over"
        );
        ui.show_game_over();
        ui.set_cursor_visible(true);
    }

    /// Drop a pending game-over screen and return to playing.
    ///
    /// If the end condition still holds, the next [`poll`](Self::poll)
    /// schedules it again.
    pub fn cancel_game_over(&mut self) -> bool {
        if let SessionPhase::GameOverPending(_) = self.phase {
            self.game_over_timer.cancel();
            self.phase = SessionPhase::Playing;
            debug!("Pending game over cancelled");
            true
        } else {
            false
        }
    }

    /// Count a collected coin. Not clamped to the total.
    pub fn on_coin_collected(&mut self) {
        self.coins_collected += 1;
        debug!(
            coins = self.coins_collected,
            total = self.config.total_coins,
            "Coin collected"
        );
    }

    /// Alias of [`on_coin_collected`](Self::on_coin_collected) for UI bindings.
    pub fn increment_coins_collected(&mut self) {
        self.on_coin_collected();
    }

    /// Coins collected so far.
    pub fn coins_collected(&self) -> u32 {
        self.coins_collected
    }

    /// Coins placed in the level.
    pub fn total_coins(&self) -> u32 {
        self.config.total_coins
    }

    /// Level recorded at session start.
    pub fn level_name(&self) -> &str {
        &self.level_name
    }

    /// True when the current level is the gameplay level.
    pub fn is_gameplay_level(&self) -> bool {
        self.level_name == self.config.gameplay_level
    }

    /// Current end-of-game phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// True while the game-over screen is on its timer.
    pub fn is_game_over_pending(&self) -> bool {
        matches!(self.phase, SessionPhase::GameOverPending(_))
    }

    /// True once the game-over screen is up.
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, SessionPhase::GameOver(_))
    }

    /// Seconds until the game-over screen, if pending.
    pub fn game_over_in(&self) -> Option<f32> {
        self.game_over_timer.remaining()
    }
}
