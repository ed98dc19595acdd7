//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;

use crate::render_keyboard_from_json;

/// Render a keyboard described by an options JSON object to SVG.
///
/// Called from Kotlin as:
///   external fun renderKeyboard(optionsJson: String?): String?
#[no_mangle]
pub extern "system" fn Java_com_pianokeys_PianoKeys_renderKeyboard(
    mut env: JNIEnv,
    _class: JClass,
    options_json: JString,
) -> jstring {
    let json: String = if options_json.is_null() {
        "{}".to_string()
    } else {
        match env.get_string(&options_json) {
            Ok(s) => s.into(),
            Err(_) => return std::ptr::null_mut(),
        }
    };

    match render_keyboard_from_json(&json) {
        Ok(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            log::debug!("renderKeyboard failed: {e}");
            std::ptr::null_mut()
        }
    }
}
