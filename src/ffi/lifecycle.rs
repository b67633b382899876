//! Engine creation, destruction, and whole-engine queries.

use tracing::warn;

use crate::config::{EngineConfig, Preset};
use crate::Engine;

/// Creates a Running engine with an empty `size` x `size` grid.
///
/// # Returns
/// A pointer to a new Engine, or null if `size` is outside
/// `1..=MAX_GRID_SIZE` or `interval_secs` is negative or not finite.
///
/// # Safety
/// The returned pointer must eventually be freed with `gol_destroy()`.
#[no_mangle]
pub extern "C" fn gol_create(size: i32, interval_secs: f64) -> *mut Engine {
    let config = EngineConfig {
        size,
        interval_secs,
        ..EngineConfig::default()
    };

    match Engine::from_config(&config) {
        Ok(engine) => Box::into_raw(Box::new(engine)),
        Err(e) => {
            warn!(error = %e, "gol_create rejected config");
            std::ptr::null_mut()
        }
    }
}

/// Creates an engine from a stock preset (0 = classic 42x42 @ 0.1s paused,
/// 1 = atom 80x80 @ 0.05s running).
///
/// # Returns
/// A pointer to a new Engine, or null for an unknown preset.
#[no_mangle]
pub extern "C" fn gol_create_with_preset(preset: u8) -> *mut Engine {
    match Preset::from_id(preset) {
        Ok(preset) => Box::into_raw(Box::new(Engine::with_preset(preset))),
        Err(e) => {
            warn!(error = %e, "gol_create_with_preset rejected preset");
            std::ptr::null_mut()
        }
    }
}

/// Destroys an engine and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `gol_create*()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn gol_destroy(ptr: *mut Engine) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the number of generations applied since creation or last reset.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_get_generation(ptr: *const Engine) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// Gets the grid side length N.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// N, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_dimensions(ptr: *const Engine) -> i32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).dimensions()
}
