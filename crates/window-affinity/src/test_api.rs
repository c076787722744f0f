//! In-memory stand-in for the Windows calls.

use core::ffi::c_void;
use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use windows::Win32::Foundation::{ERROR_INVALID_HANDLE, ERROR_INVALID_WINDOW_HANDLE, HMODULE, HWND};

use crate::{
    DisplayAffinity, LabelledWinResult, WinError,
    platform::{DisplayAffinityApi, ThreadNotifications},
};

/// Windows that exist hold their raw affinity, any other handle is rejected.
#[derive(Debug, Default)]
pub struct FakeWindows {
    windows: Mutex<HashMap<isize, u32>>,
    calls: Mutex<Vec<(isize, DisplayAffinity)>>,
    disabled_modules: Mutex<Vec<isize>>,
    query_calls: AtomicUsize,
    fail_notifications: bool,
}

impl FakeWindows {
    pub fn with_windows(handles: &[isize]) -> Self {
        let windows = handles.iter().map(|&handle| (handle, 0)).collect();

        Self {
            windows: Mutex::new(windows),
            ..Self::default()
        }
    }

    /// Disabling thread notifications is attempted but always rejected.
    pub fn failing_notifications() -> Self {
        Self {
            fail_notifications: true,
            ..Self::default()
        }
    }

    pub fn handle(value: isize) -> HWND {
        HWND(value as *mut c_void)
    }

    pub fn set_raw(&self, handle: isize, affinity: u32) {
        self.windows.lock().unwrap().insert(handle, affinity);
    }

    pub fn affinity_of(&self, handle: isize) -> Option<DisplayAffinity> {
        let raw = *self.windows.lock().unwrap().get(&handle)?;
        DisplayAffinity::from_raw(raw)
    }

    pub fn calls(&self) -> Vec<(isize, DisplayAffinity)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn query_calls(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }

    pub fn disabled_modules(&self) -> Vec<isize> {
        self.disabled_modules.lock().unwrap().clone()
    }
}

impl DisplayAffinityApi for FakeWindows {
    fn set_display_affinity(
        &self,
        handle: HWND,
        affinity: DisplayAffinity,
    ) -> LabelledWinResult<()> {
        let key = handle.0 as isize;
        self.calls.lock().unwrap().push((key, affinity));

        match self.windows.lock().unwrap().get_mut(&key) {
            Some(current) => {
                *current = affinity.as_windows().0;
                Ok(())
            }
            None => Err(WinError::from_win32(
                ERROR_INVALID_WINDOW_HANDLE,
                "SetWindowDisplayAffinity",
            )),
        }
    }

    fn display_affinity(&self, handle: HWND) -> LabelledWinResult<u32> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);

        self.windows
            .lock()
            .unwrap()
            .get(&(handle.0 as isize))
            .copied()
            .ok_or_else(|| {
                WinError::from_win32(ERROR_INVALID_WINDOW_HANDLE, "GetWindowDisplayAffinity")
            })
    }
}

impl ThreadNotifications for FakeWindows {
    fn disable_thread_notifications(&self, module: HMODULE) -> LabelledWinResult<()> {
        self.disabled_modules
            .lock()
            .unwrap()
            .push(module.0 as isize);

        if self.fail_notifications {
            return Err(WinError::from_win32(
                ERROR_INVALID_HANDLE,
                "DisableThreadLibraryCalls",
            ));
        }

        Ok(())
    }
}
