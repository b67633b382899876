//! Life Automata - 2D Game of Life engine
//!
//! A fixed-size, non-wrapping N x N grid advanced under Conway's B3/S23 rule,
//! with a tick gate that decouples the simulation rate from the caller's
//! frame rate. Rendering and input live outside this crate: a shell sends
//! edits and `advance(now)` ticks and reads cells back to draw them, either
//! through [`Engine`] directly or through the C ABI in [`ffi`].
//!
//! ```
//! use life_automata::{CellState, Engine};
//!
//! let mut engine = Engine::new(5, 0.1);
//! engine.set_alive_at(1, 2);
//! engine.set_alive_at(2, 2);
//! engine.set_alive_at(3, 2);
//!
//! engine.advance(0.0); // records the baseline
//! assert!(engine.advance(0.1));
//! assert_eq!(engine.cell_at(2, 1), CellState::Alive);
//! assert_eq!(engine.cell_at(1, 2), CellState::Empty);
//! ```

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod state;

pub use automaton::{Engine, RunState, TickGate};
pub use config::{EngineConfig, Preset};
pub use error::{EngineError, EngineErrorKind};
pub use state::{CellState, Grid};
