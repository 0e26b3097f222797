// C ABI for grammar-rule hosts written in other languages.
// Every entry point is panic-safe; strings returned must go back through
// `pratyahara_free_string`.
use crate::core::constructor::construct;
use crate::core::lookup::{find_groups_containing, get_named_group, is_member};
use crate::core::types::Construction;
use libc::c_char;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

/// Borrows a C string, treating null and invalid UTF-8 as "".
unsafe fn borrow_str<'a>(s: *const c_char) -> &'a str {
    if s.is_null() {
        return "";
    }
    CStr::from_ptr(s).to_str().unwrap_or_else(|_| {
        tracing::warn!("[pratyahara] non-UTF-8 argument treated as empty");
        ""
    })
}

fn into_c_string(json: String) -> *mut c_char {
    match CString::new(json) {
        Ok(c) => c.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

fn json_or(fallback: &str, produce: impl FnOnce() -> serde_json::Result<String>) -> *mut c_char {
    let json = catch_unwind(AssertUnwindSafe(produce))
        .unwrap_or_else(|_| {
            tracing::warn!("[pratyahara] panic caught at the C boundary");
            Ok(fallback.to_string())
        })
        .unwrap_or_else(|_| fallback.to_string());
    into_c_string(json)
}

#[no_mangle]
pub extern "C" fn pratyahara_is_member(phoneme: *const c_char, group: *const c_char) -> bool {
    let phoneme = unsafe { borrow_str(phoneme) };
    let group = unsafe { borrow_str(group) };
    catch_unwind(|| is_member(phoneme, group)).unwrap_or(false)
}

/// JSON array of group names.
#[no_mangle]
pub extern "C" fn pratyahara_groups_containing(phoneme: *const c_char) -> *mut c_char {
    let phoneme = unsafe { borrow_str(phoneme) };
    json_or("[]", || serde_json::to_string(&find_groups_containing(phoneme)))
}

/// JSON `{phonemes, valid, error?, traditional}`.
#[no_mangle]
pub extern "C" fn pratyahara_construct(start: *const c_char, marker: *const c_char) -> *mut c_char {
    let start = unsafe { borrow_str(start) };
    let marker = unsafe { borrow_str(marker) };
    json_or(r#"{"phonemes":[],"valid":false,"traditional":false}"#, || {
        serde_json::to_string(&Construction::from(construct(start, marker)))
    })
}

/// JSON `{phonemes, valid, error?}`.
#[no_mangle]
pub extern "C" fn pratyahara_named_group(name: *const c_char) -> *mut c_char {
    let name = unsafe { borrow_str(name) };
    json_or(r#"{"phonemes":[],"valid":false,"error":"unknown-group"}"#, || {
        serde_json::to_string(&get_named_group(name))
    })
}

#[no_mangle]
pub extern "C" fn pratyahara_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null());
        let s = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
        pratyahara_free_string(ptr);
        s
    }

    #[test]
    fn membership_over_c_strings() {
        let a = CString::new("a").unwrap();
        let ac = CString::new("ac").unwrap();
        let hal = CString::new("hal").unwrap();
        assert!(pratyahara_is_member(a.as_ptr(), ac.as_ptr()));
        assert!(!pratyahara_is_member(a.as_ptr(), hal.as_ptr()));
        assert!(!pratyahara_is_member(ptr::null(), ac.as_ptr()));
    }

    #[test]
    fn json_answers() {
        let k = CString::new("k").unwrap();
        assert_eq!(take(pratyahara_groups_containing(k.as_ptr())), r#"["hal","jhal"]"#);

        let u = CString::new("u").unwrap();
        let a = CString::new("a").unwrap();
        let report: Construction =
            serde_json::from_str(&take(pratyahara_construct(u.as_ptr(), a.as_ptr()))).unwrap();
        assert!(!report.valid);
        assert_eq!(report.error.as_deref(), Some("order-violation"));

        let name = CString::new("ik").unwrap();
        assert_eq!(
            take(pratyahara_named_group(name.as_ptr())),
            r#"{"phonemes":["i","u","ṛ","ḷ"],"valid":true}"#
        );
    }

    #[test]
    fn unknown_group_is_tagged() {
        let name = CString::new("nope").unwrap();
        assert_eq!(
            take(pratyahara_named_group(name.as_ptr())),
            r#"{"phonemes":[],"valid":false,"error":"unknown-group"}"#
        );
    }

    #[test]
    fn null_arguments_are_invalid_input() {
        let report: Construction =
            serde_json::from_str(&take(pratyahara_construct(ptr::null(), ptr::null()))).unwrap();
        assert_eq!(report.error.as_deref(), Some("invalid-input"));
    }
}
