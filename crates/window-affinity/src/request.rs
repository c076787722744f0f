use windows::Win32::Foundation::HWND;
use windows_core::BOOL;

use crate::DisplayAffinity;

/// Parameter block read by `SetWindowAffinity`.
///
/// Owned by the caller for the duration of the call. The handle is passed to Windows as is.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct AffinityRequest {
    /// The window to change.
    pub window_handle: HWND,

    /// Non-zero to exclude the window from capture, zero to clear any restriction.
    pub exclude_from_capture: BOOL,
}

impl AffinityRequest {
    /// Create a new request.
    pub fn new(window_handle: HWND, exclude_from_capture: bool) -> Self {
        Self {
            window_handle,
            exclude_from_capture: exclude_from_capture.into(),
        }
    }

    /// The affinity this request asks for.
    pub fn affinity(&self) -> DisplayAffinity {
        DisplayAffinity::from_exclude(self.exclude_from_capture.as_bool())
    }
}

/// Parameter block for `QueryWindowAffinity`.
///
/// On success `affinity` holds the raw `WDA_*` value of the window.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct AffinityQuery {
    /// The window to read.
    pub window_handle: HWND,

    /// Written by the query.
    pub affinity: u32,
}

impl AffinityQuery {
    /// Create a new query for a window.
    pub fn new(window_handle: HWND) -> Self {
        Self {
            window_handle,
            affinity: 0,
        }
    }
}
