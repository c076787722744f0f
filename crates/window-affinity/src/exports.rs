//! Functions exported from the DLL.
//!
//! `SetWindowAffinity` and `QueryWindowAffinity` have the `LPTHREAD_START_ROUTINE` shape so a
//! host may run them directly or as the body of a thread it creates.
//!

use core::ffi::c_void;

use windows::Win32::Foundation::{HINSTANCE, HMODULE};
use windows_core::BOOL;

use crate::{
    AffinityQuery, AffinityRequest, LoadHook,
    platform::{DisplayAffinityApi, ThreadNotifications, WindowsApi},
    setter::{apply_query, apply_request},
};

static LOAD_HOOK: LoadHook = LoadHook::new();

/// Set the display affinity of a window from an [AffinityRequest].
///
/// Returns `1` if Windows applied the affinity, `0` if the parameter is null or Windows
/// rejected the call.
///
/// # Safety
/// `parameter` must be null or point to an [AffinityRequest] that stays valid for the call.
#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub unsafe extern "system" fn SetWindowAffinity(parameter: *mut c_void) -> u32 {
    unsafe { set_window_affinity(&WindowsApi, parameter) }
}

/// Read the display affinity of a window into an [AffinityQuery].
///
/// Returns `1` and writes the raw affinity if Windows reported it, `0` if the parameter is
/// null or Windows rejected the call.
///
/// # Safety
/// `parameter` must be null or point to a writable [AffinityQuery] that stays valid for the
/// call.
#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub unsafe extern "system" fn QueryWindowAffinity(parameter: *mut c_void) -> u32 {
    unsafe { query_window_affinity(&WindowsApi, parameter) }
}

/// Loader entry point.
#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub extern "system" fn DllMain(module: HINSTANCE, reason: u32, _reserved: *mut c_void) -> BOOL {
    loader_event(&LOAD_HOOK, &WindowsApi, module, reason)
}

pub(crate) fn loader_event<T: ThreadNotifications>(
    hook: &LoadHook,
    api: &T,
    module: HINSTANCE,
    reason: u32,
) -> BOOL {
    hook.on_module_event(api, HMODULE(module.0), reason).into()
}

pub(crate) unsafe fn set_window_affinity<A: DisplayAffinityApi>(
    api: &A,
    parameter: *mut c_void,
) -> u32 {
    let request = unsafe { parameter.cast::<AffinityRequest>().as_ref() };

    apply_request(api, request).is_ok().into()
}

pub(crate) unsafe fn query_window_affinity<A: DisplayAffinityApi>(
    api: &A,
    parameter: *mut c_void,
) -> u32 {
    let query = unsafe { parameter.cast::<AffinityQuery>().as_mut() };

    apply_query(api, query).is_ok().into()
}
