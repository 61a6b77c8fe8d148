//! Game session rules: coin tally, level start UI, and the delayed game-over screen.

pub mod session;
pub mod timer;
pub mod ui;

pub use session::{GameOutcome, GameSession, SessionPhase};
pub use timer::OneShotTimer;
pub use ui::SessionUi;
