//! The automaton engine: grid, rule, run state and tick gate in one owner.
//!
//! Callers drive it from a frame loop: mutations and queries at any time,
//! `advance(now)` once per frame. A generation is only computed when the
//! engine is Running and the tick gate says one is due.

use tracing::{debug, info, instrument, warn};

use super::grid;
use super::pacing::TickGate;
use super::region;
use super::stepping::{step_automaton, step_automaton_parallel};
use crate::config::{EngineConfig, Preset};
use crate::error::EngineError;
use crate::state::{CellState, Grid};

/// Whether `advance` computes generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Accepting edits, not advancing.
    Idle,
    /// Advancing once per elapsed interval, still accepting edits.
    Running,
}

/// Owns the grid and everything needed to advance it.
pub struct Engine {
    grid: Grid,
    gate: TickGate,
    generation: u64,
    run_state: RunState,
    /// Present only when more than one thread was requested.
    thread_pool: Option<rayon::ThreadPool>,
}

fn build_thread_pool(num_threads: u8) -> Option<rayon::ThreadPool> {
    if num_threads <= 1 {
        return None;
    }

    match rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads as usize)
        .build()
    {
        Ok(pool) => Some(pool),
        Err(e) => {
            warn!(error = %e, num_threads, "Thread pool unavailable, stepping serially");
            None
        }
    }
}

impl Engine {
    /// Create a Running engine with an empty `size` x `size` grid, stepping serially.
    ///
    /// Parameters are not validated: `size` is clamped to `0..=MAX_GRID_SIZE`
    /// and an interval that is NaN never lets `advance` fire. Use
    /// [`Engine::from_config`] to reject such values instead.
    pub fn new(size: i32, interval_secs: f64) -> Self {
        Engine {
            grid: grid::create_grid(size),
            gate: TickGate::new(interval_secs),
            generation: 0,
            run_state: RunState::Running,
            thread_pool: None,
        }
    }

    /// Create an engine from a validated configuration.
    #[instrument]
    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Create an engine from one of the stock presets.
    #[instrument]
    pub fn with_preset(preset: Preset) -> Self {
        Self::build(&preset.config())
    }

    fn build(config: &EngineConfig) -> Self {
        let run_state = if config.start_running {
            RunState::Running
        } else {
            RunState::Idle
        };

        info!(
            size = config.size,
            interval_secs = config.interval_secs,
            num_threads = config.num_threads,
            ?run_state,
            "Creating engine"
        );

        Engine {
            grid: grid::create_grid(config.size),
            gate: TickGate::new(config.interval_secs),
            generation: 0,
            run_state,
            thread_pool: build_thread_pool(config.num_threads),
        }
    }

    /// Side length N of the grid.
    pub fn dimensions(&self) -> i32 {
        self.grid.size
    }

    /// Number of generations applied since creation or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Seconds between generations.
    pub fn interval(&self) -> f64 {
        self.gate.interval
    }

    /// Read-only view of the current generation.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn population(&self) -> usize {
        grid::population(&self.grid)
    }

    pub fn cell_at(&self, x: i32, y: i32) -> CellState {
        grid::cell_at(&self.grid, x, y)
    }

    pub fn neighbor_count(&self, x: i32, y: i32) -> u8 {
        grid::count_neighbors(&self.grid, x, y)
    }

    pub fn set_alive_at(&mut self, x: i32, y: i32) {
        grid::set_alive_at(&mut self.grid, x, y);
    }

    pub fn set_cell_at(&mut self, x: i32, y: i32, state: CellState) {
        grid::set_cell_at(&mut self.grid, x, y, state);
    }

    pub fn clear_cell_at(&mut self, x: i32, y: i32) {
        grid::clear_cell_at(&mut self.grid, x, y);
    }

    /// Empty every cell and restart the generation count.
    #[instrument(skip(self))]
    pub fn clear_all(&mut self) {
        grid::clear_all(&mut self.grid);
        self.generation = 0;
        info!(size = self.grid.size, "Grid cleared");
    }

    /// Replace the grid with an empty `size` x `size` one. `size` is clamped
    /// like in [`Engine::new`].
    #[instrument(skip(self))]
    pub fn resize(&mut self, size: i32) {
        self.grid = grid::create_grid(size);
        self.generation = 0;
        info!(size = self.grid.size, "Grid recreated");
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn pause(&mut self) {
        self.set_run_state(RunState::Idle);
    }

    /// Start advancing again. The next `advance` only records a new baseline,
    /// so time spent paused never counts toward the interval.
    pub fn resume(&mut self) {
        self.set_run_state(RunState::Running);
    }

    /// Flip between Idle and Running. Returns the new state.
    pub fn toggle_running(&mut self) -> RunState {
        let next = match self.run_state {
            RunState::Idle => RunState::Running,
            RunState::Running => RunState::Idle,
        };
        self.set_run_state(next);
        next
    }

    fn set_run_state(&mut self, state: RunState) {
        if self.run_state != state {
            info!(from = ?self.run_state, to = ?state, "Run state changed");
            if state == RunState::Running {
                self.gate.reset();
            }
            self.run_state = state;
        }
    }

    /// Advance one generation if Running and at least one interval has passed
    /// since the last generation. Returns whether a generation was applied.
    ///
    /// The first call while Running only records `current_time` as the baseline.
    pub fn advance(&mut self, current_time: f64) -> bool {
        if self.run_state == RunState::Idle {
            return false;
        }

        if !self.gate.poll(current_time) {
            return false;
        }

        self.step();
        true
    }

    /// Apply exactly one generation now, ignoring run state and tick gate.
    pub fn step(&mut self) {
        match &self.thread_pool {
            Some(pool) => step_automaton_parallel(&mut self.grid, pool),
            None => step_automaton(&mut self.grid),
        }
        self.generation += 1;

        debug!(
            generation = self.generation,
            population = grid::population(&self.grid),
            "Advanced generation"
        );
    }

    /// See [`region::extract_region`].
    pub fn extract_region(
        &self,
        out_buf: &mut [u8],
        min_x: i32,
        min_y: i32,
        max_x: i32,
        max_y: i32,
    ) -> u64 {
        region::extract_region(&self.grid, out_buf, min_x, min_y, max_x, max_y)
    }

    /// See [`region::import_region`].
    pub fn import_region(
        &mut self,
        in_buf: &[u8],
        min_x: i32,
        min_y: i32,
        max_x: i32,
        max_y: i32,
    ) -> u64 {
        region::import_region(&mut self.grid, in_buf, min_x, min_y, max_x, max_y)
    }
}
