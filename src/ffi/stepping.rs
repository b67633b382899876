//! Generation advancement and run-state control.

use crate::Engine;

/// Advances one generation if the engine is running and a tick interval has
/// elapsed since the last generation. `current_time` is in seconds, e.g.
/// raylib's `GetTime()`.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 1 if a generation was applied, 0 if not, -1 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_advance(ptr: *mut Engine, current_time: f64) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    if (*ptr).advance(current_time) {
        1
    } else {
        0
    }
}

/// Applies exactly one generation, ignoring run state and tick interval.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn gol_step(ptr: *mut Engine) {
    if ptr.is_null() {
        return;
    }
    (*ptr).step();
}

/// Stops `gol_advance` from applying generations.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn gol_pause(ptr: *mut Engine) {
    if ptr.is_null() {
        return;
    }
    (*ptr).pause();
}

/// Lets `gol_advance` apply generations again.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn gol_resume(ptr: *mut Engine) {
    if ptr.is_null() {
        return;
    }
    (*ptr).resume();
}

/// Flips between paused and running.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 1 if now running, 0 if now paused, -1 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_toggle_running(ptr: *mut Engine) -> i32 {
    if ptr.is_null() {
        return -1;
    }
    (*ptr).toggle_running();
    gol_is_running(ptr)
}

/// Query whether the engine is running.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 1 if running, 0 if paused, -1 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_is_running(ptr: *const Engine) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    if (*ptr).is_running() {
        1
    } else {
        0
    }
}
