//! pianokeys: piano keyboard rendered as SVG.
//!
//! Parses note names (`"A0"`, `"C#4"`, `"Bb3"`), lays out the white and
//! black keys of a note range, and keeps per-key fill colors so hosts can
//! highlight and clear keys and resolve clicks back to notes.
//!
//! # Example
//! ```
//! use pianokeys::{Keyboard, KeyboardOptions};
//!
//! let mut keyboard = Keyboard::new(&KeyboardOptions::default())?;
//! keyboard.fill_key("C4", None)?;
//! keyboard.fill_key("F#4", Some("orange"))?;
//! let svg = keyboard.to_svg();
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), pianokeys::Error>(())
//! ```

pub mod error;
pub mod keyboard;
pub mod model;
pub mod note;
pub mod options;
pub mod renderer;

#[cfg(target_os = "android")]
pub mod android;

pub use error::{Error, Result};
pub use keyboard::{KeyClickCallback, Keyboard};
pub use model::*;
pub use note::{is_black_key, is_white_key, midi_note_to_name, octave, parse_note_name, pitch_class};
pub use options::KeyboardOptions;
pub use renderer::{
    compute_key_positions, compute_range, layout_keys, render_keyboard_to_svg, KeyboardLayout,
};

/// Build a keyboard from options and render it with base colors.
pub fn render_keyboard(options: &KeyboardOptions) -> Result<String> {
    Ok(Keyboard::new(options)?.to_svg())
}

/// Same as [`render_keyboard`], with options given as a JSON object.
pub fn render_keyboard_from_json(options_json: &str) -> Result<String> {
    Ok(Keyboard::from_json(options_json)?.to_svg())
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI for iOS (static library) and other native hosts
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{c_void, CStr, CString};
use std::os::raw::c_char;

/// Click callback for native hosts: `(user_data, note, name)`.
/// `name` is only valid for the duration of the call.
pub type KeyClickFn = extern "C" fn(user_data: *mut c_void, note: i32, name: *const c_char);

const STATUS_OK: i32 = 0;

/// Borrow a C string as UTF-8. Null or invalid UTF-8 yields `None`.
///
/// # Safety
/// `ptr` must be null or a valid null-terminated C string.
unsafe fn c_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

/// Like [`c_str`], but a non-null pointer that is not UTF-8 is an error
/// rather than "absent".
///
/// # Safety
/// `ptr` must be null or a valid null-terminated C string.
unsafe fn optional_c_str<'a>(ptr: *const c_char, what: &str) -> Result<Option<&'a str>> {
    if ptr.is_null() {
        return Ok(None);
    }
    match unsafe { c_str(ptr) } {
        Some(s) => Ok(Some(s)),
        None => Err(Error::InvalidArgument(format!("{what} is not UTF-8"))),
    }
}

fn status(result: Result<()>) -> i32 {
    match result {
        Ok(()) => STATUS_OK,
        Err(e) => {
            log::debug!("pianokeys call failed: {e}");
            e.code()
        }
    }
}

fn null_argument(what: &str) -> i32 {
    Error::InvalidArgument(format!("{what} is null or not UTF-8")).code()
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

/// Render a keyboard described by an options JSON object (null for
/// defaults) and return SVG. Returns null on error.
/// The caller must free the returned string with `pianokeys_free_string`.
///
/// # Safety
/// `options_json` must be null or a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn pianokeys_render(options_json: *const c_char) -> *mut c_char {
    let json = unsafe { optional_c_str(options_json, "options") };
    match json.and_then(|json| render_keyboard_from_json(json.unwrap_or("{}"))) {
        Ok(svg) => into_c_string(svg),
        Err(e) => {
            log::debug!("pianokeys_render failed: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Create a keyboard from an options JSON object (null for defaults).
/// Returns null on error. Free with `pianokeys_keyboard_free`.
///
/// # Safety
/// `options_json` must be null or a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn pianokeys_keyboard_new(options_json: *const c_char) -> *mut Keyboard {
    let json = unsafe { optional_c_str(options_json, "options") };
    match json.and_then(|json| Keyboard::from_json(json.unwrap_or("{}"))) {
        Ok(keyboard) => Box::into_raw(Box::new(keyboard)),
        Err(e) => {
            log::debug!("pianokeys_keyboard_new failed: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Destroy a keyboard created by `pianokeys_keyboard_new`.
///
/// # Safety
/// `keyboard` must be null or a pointer returned by `pianokeys_keyboard_new`
/// that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn pianokeys_keyboard_free(keyboard: *mut Keyboard) {
    if !keyboard.is_null() {
        unsafe {
            drop(Box::from_raw(keyboard));
        }
    }
}

/// Highlight a key. `fill` may be null to use the highlight color; a
/// non-null `fill` that is not UTF-8 is rejected.
/// Returns 0 on success or an error code (1 parse, 3 invalid argument).
///
/// # Safety
/// `keyboard` must be a live keyboard pointer; `name` and `fill` must be
/// null or valid null-terminated C strings.
#[no_mangle]
pub unsafe extern "C" fn pianokeys_keyboard_fill_key(
    keyboard: *mut Keyboard,
    name: *const c_char,
    fill: *const c_char,
) -> i32 {
    let Some(keyboard) = (unsafe { keyboard.as_mut() }) else {
        return null_argument("keyboard");
    };
    let Some(name) = (unsafe { c_str(name) }) else {
        return null_argument("note name");
    };
    let fill = match unsafe { optional_c_str(fill, "fill") } {
        Ok(fill) => fill,
        Err(e) => return status(Err(e)),
    };
    status(keyboard.fill_key(name, fill))
}

/// Reset a key to its base color. Returns 0 or an error code.
///
/// # Safety
/// `keyboard` must be a live keyboard pointer; `name` must be null or a
/// valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn pianokeys_keyboard_clear_key(
    keyboard: *mut Keyboard,
    name: *const c_char,
) -> i32 {
    let Some(keyboard) = (unsafe { keyboard.as_mut() }) else {
        return null_argument("keyboard");
    };
    let Some(name) = (unsafe { c_str(name) }) else {
        return null_argument("note name");
    };
    status(keyboard.clear_key(name))
}

/// Reset every key to its base color.
///
/// # Safety
/// `keyboard` must be null or a live keyboard pointer.
#[no_mangle]
pub unsafe extern "C" fn pianokeys_keyboard_clear_all_keys(keyboard: *mut Keyboard) {
    if let Some(keyboard) = unsafe { keyboard.as_mut() } {
        keyboard.clear_all_keys();
    }
}

/// Register the click callback, replacing the previous one. A null
/// callback is rejected with the invalid-argument code (3).
///
/// # Safety
/// `keyboard` must be a live keyboard pointer. `user_data` is passed back
/// untouched and must stay valid while the callback is registered.
#[no_mangle]
pub unsafe extern "C" fn pianokeys_keyboard_set_on_key_click(
    keyboard: *mut Keyboard,
    callback: Option<KeyClickFn>,
    user_data: *mut c_void,
) -> i32 {
    let Some(keyboard) = (unsafe { keyboard.as_mut() }) else {
        return null_argument("keyboard");
    };
    let Some(callback) = callback else {
        return Error::InvalidArgument("callback is not a function".into()).code();
    };
    keyboard.set_on_key_click(move |_event, key| {
        if let Ok(name) = CString::new(key.name.as_str()) {
            callback(user_data, key.note, name.as_ptr());
        }
    });
    STATUS_OK
}

/// Deliver a click. `target` is the clicked element's id, or null to hit
/// test at `(x, y)` in viewBox units. Returns the clicked note, -1 when
/// no key was hit, or -3 (negated invalid-argument code) when `target` is
/// not UTF-8.
///
/// # Safety
/// `keyboard` must be a live keyboard pointer; `target` must be null or a
/// valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn pianokeys_keyboard_click(
    keyboard: *mut Keyboard,
    target: *const c_char,
    x: f64,
    y: f64,
) -> i32 {
    let Some(keyboard) = (unsafe { keyboard.as_mut() }) else {
        return -1;
    };
    let target = match unsafe { optional_c_str(target, "click target") } {
        Ok(target) => target.map(str::to_string),
        Err(e) => {
            log::debug!("pianokeys_keyboard_click rejected: {e}");
            return -e.code();
        }
    };
    let event = ClickEvent { target, x, y };
    keyboard.dispatch_click(&event).map_or(-1, |key| key.note)
}

/// Render the keyboard with its current fills.
/// The caller must free the returned string with `pianokeys_free_string`.
///
/// # Safety
/// `keyboard` must be null or a live keyboard pointer.
#[no_mangle]
pub unsafe extern "C" fn pianokeys_keyboard_to_svg(keyboard: *const Keyboard) -> *mut c_char {
    match unsafe { keyboard.as_ref() } {
        Some(keyboard) => into_c_string(keyboard.to_svg()),
        None => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by pianokeys functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a pianokeys function, or null.
#[no_mangle]
pub unsafe extern "C" fn pianokeys_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
