//! FFI layer for non-Rust hosts.
//!
//! This module provides C-compatible functions so a browser shell, mobile app,
//! or desktop toolkit can own a carousel controller. All structured data
//! crosses the boundary as JSON strings.
//!
//! # Memory Management
//!
//! - Strings returned by `folio_*` functions are allocated by Rust
//! - Caller must free them with `folio_string_free`
//! - Controller pointers must be freed with `folio_carousel_free`
//!
//! # Error Handling
//!
//! Functions return JSON with either:
//! - `{"ok": <result>}` on success
//! - `{"error": "<message>"}` on failure

use crate::{position, CarouselConfig, Command, InputController, InputEvent};
use std::ffi::{c_char, CStr, CString};
use std::ptr;

/// Result wrapper for FFI responses.
#[derive(serde::Serialize)]
#[serde(untagged)]
enum FfiResult<T: serde::Serialize> {
    Ok { ok: T },
    Err { error: String },
}

impl<T: serde::Serialize> FfiResult<T> {
    fn ok(value: T) -> Self {
        FfiResult::Ok { ok: value }
    }

    fn err(message: impl Into<String>) -> Self {
        FfiResult::Err {
            error: message.into(),
        }
    }

    fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|e| format!(r#"{{"error":"serialization failed: {}"}}"#, e))
    }
}

fn error_json(message: impl Into<String>) -> *mut c_char {
    to_c_string(FfiResult::<()>::err(message).to_json())
}

/// Convert a Rust string to a C string pointer.
/// Caller must free with `folio_string_free`.
fn to_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(cs) => cs.into_raw(),
        Err(_) => {
            static FALLBACK: &[u8] = b"{\"error\":\"string contained null bytes\"}";
            // FALLBACK has no interior nul
            CString::new(FALLBACK)
                .map(CString::into_raw)
                .unwrap_or(ptr::null_mut())
        }
    }
}

/// Convert a C string pointer to a Rust string.
/// Returns None if pointer is null or invalid UTF-8.
unsafe fn from_c_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

// ============================================================================
// Controller Lifecycle
// ============================================================================

/// Create a carousel controller.
///
/// # Arguments
/// - `total_items`: Number of items in the carousel (at least 1)
/// - `config_json`: JSON string of CarouselConfig, or null for defaults
///
/// # Returns
/// Pointer to InputController, or null on failure.
///
/// # Safety
/// - `config_json` must be a valid null-terminated C string or null
/// - Caller must free the returned pointer with `folio_carousel_free`
#[no_mangle]
pub unsafe extern "C" fn folio_carousel_new(
    total_items: usize,
    config_json: *const c_char,
) -> *mut InputController {
    let config = match from_c_string(config_json) {
        Some(s) => match serde_json::from_str::<CarouselConfig>(&s) {
            Ok(c) => c,
            Err(_) => return ptr::null_mut(),
        },
        None => CarouselConfig::default(),
    };

    match InputController::new(total_items, config) {
        Ok(controller) => Box::into_raw(Box::new(controller)),
        Err(_) => ptr::null_mut(),
    }
}

/// Free a controller.
///
/// # Safety
/// - `controller` must be a valid pointer from `folio_carousel_new`
/// - Must not be called twice on the same pointer
#[no_mangle]
pub unsafe extern "C" fn folio_carousel_free(controller: *mut InputController) {
    if !controller.is_null() {
        drop(Box::from_raw(controller));
    }
}

/// Free a string allocated by the engine.
///
/// # Safety
/// - `s` must be a valid pointer from a `folio_*` function
/// - Must not be called twice on the same pointer
#[no_mangle]
pub unsafe extern "C" fn folio_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

// ============================================================================
// Input
// ============================================================================

/// Dispatch a host input event.
///
/// # Arguments
/// - `event_json`: JSON string of InputEvent, e.g. `{"type":"touchStart","x":120}`
///
/// # Returns
/// JSON string: `{"ok": Transition}` or `{"error": "message"}`
///
/// # Safety
/// - `controller` must be a valid pointer from `folio_carousel_new` or null
/// - `event_json` must be a valid null-terminated C string or null
/// - Caller must free the returned string with `folio_string_free`
#[no_mangle]
pub unsafe extern "C" fn folio_carousel_dispatch(
    controller: *mut InputController,
    event_json: *const c_char,
) -> *mut c_char {
    let controller = match controller.as_mut() {
        Some(c) => c,
        None => return error_json("null controller pointer"),
    };

    let event_str = match from_c_string(event_json) {
        Some(s) => s,
        None => return error_json("invalid event JSON"),
    };

    let event: InputEvent = match serde_json::from_str(&event_str) {
        Ok(e) => e,
        Err(e) => return error_json(format!("parse error: {}", e)),
    };

    match controller.dispatch(event) {
        Ok(transition) => to_c_string(FfiResult::ok(transition).to_json()),
        Err(e) => error_json(e.to_string()),
    }
}

/// Apply a reducer command directly.
///
/// # Arguments
/// - `command_json`: JSON string of Command, e.g. `{"type":"jumpTo","index":2}`
///
/// # Returns
/// JSON string: `{"ok": Transition}` or `{"error": "message"}`
///
/// # Safety
/// - `controller` must be a valid pointer from `folio_carousel_new` or null
/// - `command_json` must be a valid null-terminated C string or null
/// - Caller must free the returned string with `folio_string_free`
#[no_mangle]
pub unsafe extern "C" fn folio_carousel_apply(
    controller: *mut InputController,
    command_json: *const c_char,
) -> *mut c_char {
    let controller = match controller.as_mut() {
        Some(c) => c,
        None => return error_json("null controller pointer"),
    };

    let command_str = match from_c_string(command_json) {
        Some(s) => s,
        None => return error_json("invalid command JSON"),
    };

    let command: Command = match serde_json::from_str(&command_str) {
        Ok(c) => c,
        Err(e) => return error_json(format!("parse error: {}", e)),
    };

    match controller.apply(command) {
        Ok(transition) => to_c_string(FfiResult::ok(transition).to_json()),
        Err(e) => error_json(e.to_string()),
    }
}

// ============================================================================
// Queries
// ============================================================================

/// Get the controller state.
///
/// # Returns
/// JSON string: `{"ok": {"currentIndex", "totalItems", "gesture"}}` or `{"error": "message"}`
///
/// # Safety
/// - `controller` must be a valid pointer from `folio_carousel_new` or null
/// - Caller must free the returned string with `folio_string_free`
#[no_mangle]
pub unsafe extern "C" fn folio_carousel_state(controller: *const InputController) -> *mut c_char {
    match controller.as_ref() {
        Some(c) => to_c_string(FfiResult::ok(c.state()).to_json()),
        None => error_json("null controller pointer"),
    }
}

/// Get the current index, or -1 for a null pointer.
///
/// # Safety
/// - `controller` must be a valid pointer from `folio_carousel_new` or null
#[no_mangle]
pub unsafe extern "C" fn folio_carousel_current_index(controller: *const InputController) -> i64 {
    match controller.as_ref() {
        Some(c) => c.current_index() as i64,
        None => -1,
    }
}

/// Get descriptors for every item.
///
/// # Returns
/// JSON string: `{"ok": [PositionDescriptor, ...]}` or `{"error": "message"}`
///
/// # Safety
/// - `controller` must be a valid pointer from `folio_carousel_new` or null
/// - Caller must free the returned string with `folio_string_free`
#[no_mangle]
pub unsafe extern "C" fn folio_carousel_frame(controller: *const InputController) -> *mut c_char {
    match controller.as_ref() {
        Some(c) => to_c_string(FfiResult::ok(c.carousel().frame()).to_json()),
        None => error_json("null controller pointer"),
    }
}

/// Compute a single descriptor without a controller.
///
/// # Returns
/// JSON string: `{"ok": PositionDescriptor}` or `{"error": "message"}`
/// Caller must free the returned string with `folio_string_free`.
#[no_mangle]
pub extern "C" fn folio_compute_position(
    item_index: usize,
    current_index: usize,
    total_items: usize,
) -> *mut c_char {
    match position::compute_position(item_index, current_index, total_items) {
        Ok(descriptor) => to_c_string(FfiResult::ok(descriptor).to_json()),
        Err(e) => error_json(e.to_string()),
    }
}

/// Get the engine version.
///
/// # Returns
/// Static string pointer (do not free)
#[no_mangle]
pub extern "C" fn folio_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
