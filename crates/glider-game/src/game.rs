//! Headless game: one glider, one scripted pilot, one session.

use glam::Vec3;
use glider_config::{Config, SimConfig};
use glider_flight::{FlightIntegrator, KinematicActor};
use glider_session::GameSession;
use tracing::info;

use crate::game_loop::GameLoop;
use crate::hud::{HudState, format_hud};
use crate::pilot::Pilot;
use crate::ui::ConsoleUi;
use crate::world::World;

/// Everything the headless host simulates.
pub struct Game {
    actor: KinematicActor,
    flight: FlightIntegrator,
    session: GameSession,
    world: World,
    pilot: Pilot,
    ui: ConsoleUi,
}

impl Game {
    pub fn new(config: &Config) -> Self {
        Self {
            actor: KinematicActor::at(Vec3::new(0.0, 0.0, config.world.start_altitude)),
            flight: FlightIntegrator::new(config.flight.clone()),
            session: GameSession::new(config.session.clone()),
            world: World::new(&config.world),
            pilot: Pilot::new(config.pilot.clone()),
            ui: ConsoleUi::new(),
        }
    }

    /// Enter `level` and bring up its UI.
    pub fn start(&mut self, level: &str) {
        self.session.on_session_start(level, &mut self.ui);
    }

    /// One simulation tick: input, flight, world contacts, then session rules.
    pub fn update(&mut self, dt: f32) {
        self.pilot.drive(&mut self.flight, &self.actor, dt);
        self.flight.advance(&mut self.actor, dt);

        if !self.flight.is_crashed()
            && let Some(contact) = self.world.ground_contact(self.actor.location)
        {
            self.flight
                .on_hit(&mut self.actor, contact.location, contact.normal);
        }
        if !self.flight.is_crashed() {
            for _ in 0..self.world.collect_coins(self.actor.location) {
                self.session.on_coin_collected();
            }
        }

        self.session.poll(&self.flight, &mut self.ui, dt);
    }

    /// Run fixed-size frames until the game-over screen shows or
    /// `duration_secs` of simulated time pass. Returns the simulated time.
    pub fn run(&mut self, sim: &SimConfig) -> f64 {
        let mut game_loop = GameLoop::from_config(sim);
        let mut next_hud = 0.0;

        while game_loop.total_sim_time() < sim.duration_secs && !self.is_over() {
            game_loop.step_frame(sim.fixed_dt, |dt, sim_time| {
                if self.is_over() {
                    return;
                }
                self.update(dt as f32);
                if sim.hud_interval_secs > 0.0 && sim_time >= next_hud {
                    next_hud += sim.hud_interval_secs;
                    info!("{}", format_hud(&self.hud()));
                }
            });
        }

        info!(
            sim_secs = game_loop.total_sim_time(),
            frames = game_loop.frame_count(),
            steps = game_loop.update_count(),
            phase = ?self.session.phase(),
            "Run finished"
        );
        game_loop.total_sim_time()
    }

    /// Current telemetry.
    pub fn hud(&self) -> HudState {
        HudState::sample(
            &self.flight,
            &self.session,
            &self.actor,
            self.world.ground_height(),
        )
    }

    /// True once the game-over screen has been shown.
    pub fn is_over(&self) -> bool {
        self.session.is_game_over()
    }

    pub fn actor(&self) -> &KinematicActor {
        &self.actor
    }

    pub fn flight(&self) -> &FlightIntegrator {
        &self.flight
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn pilot(&self) -> &Pilot {
        &self.pilot
    }

    pub fn ui(&self) -> &ConsoleUi {
        &self.ui
    }
}
