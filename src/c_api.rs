// C entry points. Results cross the boundary as JSON strings that the
// caller releases with `jpname_free_string`.
use crate::config::Config;
use crate::core::types::{DatasetVariant, Gender, MatchMode, SearchBy};
use crate::query::limit_from;
use crate::NameEngine;
use serde::Serialize;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use std::ptr;
use std::sync::{Mutex, PoisonError};

static NAME_ENGINE: Mutex<Option<NameEngine>> = Mutex::new(None);

fn with_engine<T>(f: impl FnOnce(&NameEngine) -> T) -> Option<T> {
    let guard = NAME_ENGINE.lock().unwrap_or_else(PoisonError::into_inner);
    guard.as_ref().map(f)
}

unsafe fn read_str<'a>(s: *const c_char) -> &'a str {
    if s.is_null() {
        return "";
    }
    CStr::from_ptr(s).to_str().unwrap_or("")
}

fn gender_from(code: i32) -> Gender {
    if code == 1 {
        Gender::Female
    } else {
        Gender::Male
    }
}

fn to_c_json<T: Serialize>(value: Option<T>, fallback: &str) -> *mut c_char {
    let json = value
        .and_then(|v| serde_json::to_string(&v).ok())
        .unwrap_or_else(|| fallback.to_string());
    CString::new(json).map_or(ptr::null_mut(), CString::into_raw)
}

/// `dataset_dir` may be null to use the configured default.
#[no_mangle]
pub extern "C" fn jpname_engine_init(dataset_dir: *const c_char) {
    let result = catch_unwind(AssertUnwindSafe(|| {
        let dir = unsafe { read_str(dataset_dir) };
        let explicit = (!dir.is_empty()).then(|| Path::new(dir));
        let config = Config::resolve(explicit);
        log::info!("name engine initialized with {:?}", config.dataset_dir);
        let mut guard = NAME_ENGINE.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(NameEngine::from_config(&config));
    }));
    if result.is_err() {
        log::error!("panic during name engine initialization");
    }
}

#[no_mangle]
pub extern "C" fn jpname_engine_destroy() {
    let mut guard = NAME_ENGINE.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

/// JSON array of reading matches, `[]` on failure.
#[no_mangle]
pub extern "C" fn jpname_search_by_reading(reading: *const c_char, partial: bool) -> *mut c_char {
    let reading = unsafe { read_str(reading) };
    let result = catch_unwind(AssertUnwindSafe(|| {
        with_engine(|engine| {
            engine
                .search_by_reading(
                    reading,
                    None,
                    DatasetVariant::Full,
                    MatchMode::from_partial(partial),
                )
                .ok()
        })
        .flatten()
    }));
    to_c_json(result.ok().flatten(), "[]")
}

/// JSON array of surnames ranked by population; `limit == 0` means unlimited.
#[no_mangle]
pub extern "C" fn jpname_search_last_name(
    query: *const c_char,
    partial: bool,
    limit: usize,
) -> *mut c_char {
    let query = unsafe { read_str(query) };
    let result = catch_unwind(AssertUnwindSafe(|| {
        with_engine(|engine| {
            engine
                .search_last_name(
                    query,
                    SearchBy::Kanji,
                    MatchMode::from_partial(partial),
                    limit_from(limit),
                )
                .ok()
        })
        .flatten()
    }));
    to_c_json(result.ok().flatten(), "[]")
}

/// `{"kanji": "...", "reading": "..."}`, or `null`. Gender 0 = male, 1 = female.
#[no_mangle]
pub extern "C" fn jpname_random_full_name(gender: i32) -> *mut c_char {
    let result = catch_unwind(AssertUnwindSafe(|| {
        with_engine(|engine| {
            engine
                .random_full_name(
                    gender_from(gender),
                    DatasetVariant::Full,
                    &mut rand::thread_rng(),
                )
                .ok()
        })
        .flatten()
    }));
    to_c_json(result.ok().flatten(), "null")
}

/// 1 if the pair exists in either gender, 0 otherwise.
#[no_mangle]
pub extern "C" fn jpname_is_valid_name(kanji: *const c_char, reading: *const c_char) -> i32 {
    let kanji = unsafe { read_str(kanji) };
    let reading = unsafe { read_str(reading) };
    let result = catch_unwind(AssertUnwindSafe(|| {
        with_engine(|engine| {
            engine
                .is_valid_name(kanji, reading, None, DatasetVariant::Full)
                .unwrap_or(false)
        })
        .unwrap_or(false)
    }));
    i32::from(result.unwrap_or(false))
}

#[no_mangle]
pub extern "C" fn jpname_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}
