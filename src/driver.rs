//! Tick driver
//!
//! Owns one round and serializes its three clocks: the fixed-rate frame
//! tick and the two one-second timers (countdown and round clock). Nothing
//! else mutates the round, so no locking is needed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::maps::MapCatalog;
use crate::settings::RoundSettings;
use crate::sim::{Frame, GameEvent, Key, RoundPhase, RoundState, tick};

pub struct RoundDriver<R: Rng = Pcg32> {
    state: RoundState,
    catalog: MapCatalog,
    rng: R,
    /// Unsimulated wall time (seconds)
    accumulator: f32,
    /// Fixed steps since the current one-second interval began
    steps_this_second: u32,
}

impl RoundDriver<Pcg32> {
    /// Start a round seeded from the settings (or a random seed)
    pub fn new(settings: RoundSettings, catalog: MapCatalog) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Round seed: {}", seed);
        Self::with_rng(settings, catalog, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> RoundDriver<R> {
    pub fn with_rng(settings: RoundSettings, catalog: MapCatalog, mut rng: R) -> Self {
        let state = RoundState::new(&settings, catalog.get(&settings.map_id), &mut rng);
        Self {
            state,
            catalog,
            rng,
            accumulator: 0.0,
            steps_this_second: 0,
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.phase()
    }

    /// Snapshot for the presentation layer
    pub fn frame(&self) -> Frame {
        self.state.snapshot()
    }

    pub fn key_down(&mut self, agent: u32, key: Key) {
        self.state.key_down(agent, key);
    }

    pub fn key_up(&mut self, agent: u32, key: Key) {
        self.state.key_up(agent, key);
    }

    /// Start over with the same settings
    pub fn restart(&mut self) {
        let map = self.catalog.get(&self.state.settings.map_id);
        self.state.restart(map, &mut self.rng);
        self.accumulator = 0.0;
        self.steps_this_second = 0;
    }

    /// Feed wall-clock time; runs as many fixed steps as are due
    pub fn advance(&mut self, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state.phase() == RoundPhase::GameOver {
            self.accumulator = 0.0;
            return events;
        }

        // NaN or infinite frame times count as no time at all
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(self.step());
            self.accumulator -= SIM_DT;
            substeps += 1;

            if self.state.phase() == RoundPhase::GameOver {
                self.accumulator = 0.0;
                break;
            }
        }
        events
    }

    /// One fixed step: the frame tick, then the one-second timer
    pub fn step(&mut self) -> Vec<GameEvent> {
        let phase_before = self.state.phase();
        let mut events = tick(&mut self.state, &mut self.rng);

        self.steps_this_second += 1;
        if self.steps_this_second >= TICK_RATE_HZ {
            self.steps_this_second = 0;
            events.extend(self.state.second_elapsed());
        }

        if self.state.phase() != phase_before {
            // The next phase's timer starts its own interval
            self.steps_this_second = 0;
            self.state.update_viewport();
        }
        events
    }

    /// Step until the round ends or `max_steps` run out
    pub fn run_to_end(&mut self, max_steps: u64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for _ in 0..max_steps {
            if self.state.phase() == RoundPhase::GameOver {
                break;
            }
            events.extend(self.step());
        }
        events
    }
}
