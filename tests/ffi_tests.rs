//! C FFI tests: the handle-based keyboard API used by native hosts.

use std::ffi::{c_void, CStr, CString};
use std::os::raw::c_char;

use pianokeys::*;

extern "C" fn record_click(user_data: *mut c_void, note: i32, name: *const c_char) {
    let clicks = unsafe { &mut *(user_data as *mut Vec<(i32, String)>) };
    let name = unsafe { CStr::from_ptr(name) }.to_str().unwrap().to_string();
    clicks.push((note, name));
}

#[test]
fn keyboard_handle_round_trip() {
    let options = CString::new(r#"{"lowest":"C4","highest":"B4"}"#).unwrap();
    let mut clicks: Vec<(i32, String)> = Vec::new();

    unsafe {
        let kb = pianokeys_keyboard_new(options.as_ptr());
        assert!(!kb.is_null());

        let e4 = CString::new("E4").unwrap();
        let red = CString::new("red").unwrap();
        let bad = CString::new("E").unwrap();
        let far = CString::new("C9").unwrap();
        assert_eq!(pianokeys_keyboard_fill_key(kb, e4.as_ptr(), red.as_ptr()), 0);
        assert_eq!(pianokeys_keyboard_fill_key(kb, bad.as_ptr(), std::ptr::null()), 1);
        assert_eq!(pianokeys_keyboard_fill_key(kb, far.as_ptr(), std::ptr::null()), 0);
        assert_eq!((*kb).key(52).unwrap().fill, "red");

        assert_eq!(pianokeys_keyboard_clear_key(kb, e4.as_ptr()), 0);
        assert_eq!((*kb).key(52).unwrap().fill, "white");

        assert_eq!(pianokeys_keyboard_set_on_key_click(kb, None, std::ptr::null_mut()), 3);
        let user_data = &mut clicks as *mut Vec<(i32, String)> as *mut c_void;
        assert_eq!(pianokeys_keyboard_set_on_key_click(kb, Some(record_click), user_data), 0);

        let target = CString::new("54").unwrap();
        assert_eq!(pianokeys_keyboard_click(kb, target.as_ptr(), 0.0, 0.0), 54);
        assert_eq!(pianokeys_keyboard_click(kb, std::ptr::null(), 5.0, 130.0), 48);
        assert_eq!(pianokeys_keyboard_click(kb, std::ptr::null(), 500.0, 10.0), -1);

        pianokeys_keyboard_fill_key(kb, e4.as_ptr(), std::ptr::null());
        pianokeys_keyboard_clear_all_keys(kb);
        let svg = pianokeys_keyboard_to_svg(kb);
        let text = CStr::from_ptr(svg).to_str().unwrap().to_string();
        assert!(text.contains(r#"id="52" class="white-key""#));
        assert!(!text.contains("#00EA9C"));
        pianokeys_free_string(svg);

        pianokeys_keyboard_free(kb);
    }

    assert_eq!(clicks, vec![(54, "Gb4".to_string()), (48, "C4".to_string())]);
}

#[test]
fn non_utf8_strings_are_invalid_arguments() {
    let options = CString::new(r#"{"lowest":"C4","highest":"B4"}"#).unwrap();
    let not_utf8 = CString::new(vec![0xffu8, 0xfe]).unwrap();
    let mut clicks: Vec<(i32, String)> = Vec::new();

    unsafe {
        assert!(pianokeys_render(not_utf8.as_ptr()).is_null());
        assert!(pianokeys_keyboard_new(not_utf8.as_ptr()).is_null());

        let kb = pianokeys_keyboard_new(options.as_ptr());
        let c4 = CString::new("C4").unwrap();
        assert_eq!(pianokeys_keyboard_fill_key(kb, c4.as_ptr(), not_utf8.as_ptr()), 3);
        assert_eq!((*kb).key(48).unwrap().fill, "white");

        let user_data = &mut clicks as *mut Vec<(i32, String)> as *mut c_void;
        pianokeys_keyboard_set_on_key_click(kb, Some(record_click), user_data);
        // the point is on C4, but a bad target must not fall back to hit testing
        assert_eq!(pianokeys_keyboard_click(kb, not_utf8.as_ptr(), 5.0, 130.0), -3);

        pianokeys_keyboard_free(kb);
    }

    assert!(clicks.is_empty());
}

#[test]
fn render_returns_null_on_error() {
    let bad = CString::new(r#"{"lowest":"C4","highest":"B3"}"#).unwrap();
    unsafe {
        assert!(pianokeys_render(bad.as_ptr()).is_null());
        assert!(pianokeys_keyboard_new(bad.as_ptr()).is_null());

        let svg = pianokeys_render(std::ptr::null());
        assert!(!svg.is_null());
        assert!(CStr::from_ptr(svg).to_str().unwrap().contains("viewBox=\"0 0 1250 142\""));
        pianokeys_free_string(svg);
    }
}
