use std::collections::VecDeque;
use std::time::Duration;

use common::games::SessionRng;
use common::games::snake::{Direction, SnakeGameState, SnakeSettings};
use common::{debug_log, log};

pub const MAX_QUEUED_TURNS: usize = 3;
pub const MAX_TICKS_PER_ADVANCE: u32 = 5;

/// Owns the game and drives it from wall-clock time and queued key presses.
///
/// Turns are buffered and handed to the game one per tick, so two quick presses
/// between moves turn the snake twice instead of the second overwriting the first.
pub struct GameLoop {
    state: SnakeGameState,
    tick_interval: Duration,
    accumulator: Duration,
    input_queue: VecDeque<Direction>,
    paused: bool,
}

impl GameLoop {
    pub fn new(settings: &SnakeSettings, rng: SessionRng) -> Self {
        Self {
            state: SnakeGameState::new(settings.grid_size, rng),
            tick_interval: settings.tick_interval,
            accumulator: Duration::ZERO,
            input_queue: VecDeque::with_capacity(MAX_QUEUED_TURNS),
            paused: false,
        }
    }

    pub fn state(&self) -> &SnakeGameState {
        &self.state
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[cfg(test)]
    fn queued_inputs(&self) -> usize {
        self.input_queue.len()
    }

    pub fn push_input(&mut self, direction: Direction) {
        if self.state.is_game_over() || self.input_queue.len() >= MAX_QUEUED_TURNS {
            return;
        }
        self.input_queue.push_back(direction);
    }

    /// Runs every tick that became due during `elapsed` and returns how many ran.
    /// A backlog longer than `MAX_TICKS_PER_ADVANCE` ticks is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.paused || self.state.is_game_over() {
            self.accumulator = Duration::ZERO;
            return 0;
        }

        self.accumulator += elapsed;
        let mut ticks = 0;

        while self.accumulator >= self.tick_interval {
            if ticks == MAX_TICKS_PER_ADVANCE {
                debug_log!("dropping {:?} of tick backlog", self.accumulator);
                self.accumulator = Duration::ZERO;
                break;
            }
            self.accumulator -= self.tick_interval;

            self.apply_next_input();
            self.state.tick();
            ticks += 1;

            if self.state.is_game_over() {
                self.accumulator = Duration::ZERO;
                self.input_queue.clear();
                break;
            }
        }

        ticks
    }

    /// How long the host may sleep before the next tick is due.
    pub fn time_until_next_tick(&self) -> Duration {
        self.tick_interval.saturating_sub(self.accumulator)
    }

    pub fn toggle_pause(&mut self) {
        if self.state.is_game_over() {
            return;
        }
        self.paused = !self.paused;
        debug_log!("paused: {}", self.paused);
    }

    pub fn restart(&mut self) {
        self.state.reset();
        self.input_queue.clear();
        self.accumulator = Duration::ZERO;
        self.paused = false;
        log!("new game started (seed {})", self.state.seed());
    }

    fn apply_next_input(&mut self) {
        while let Some(direction) = self.input_queue.pop_front() {
            if self.state.set_direction(direction) {
                return;
            }
        }
    }
}
