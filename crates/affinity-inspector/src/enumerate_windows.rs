use core::ptr::from_mut;

use window_affinity::{LabelledWinResult, WinError};
use windows::Win32::{
    Foundation::{HWND, LPARAM},
    UI::WindowsAndMessaging::EnumWindows,
};
use windows_core::BOOL;

use crate::window_info::WindowInfo;

/// Returns every top-level window on the desktop.
pub fn enumerate_windows() -> LabelledWinResult<Vec<WindowInfo>> {
    let mut handles: Vec<HWND> = Vec::new();

    unsafe {
        EnumWindows(
            Some(enum_window),
            LPARAM(from_mut(&mut handles) as isize),
        )
    }
    .map_err(|e| WinError::new(e, "EnumWindows"))?;

    let windows = handles
        .into_iter()
        .map(WindowInfo::new)
        .collect();

    Ok(windows)
}

// The LPARAM is a pointer to the list of handles being collected.
unsafe extern "system" fn enum_window(handle: HWND, state: LPARAM) -> BOOL {
    let handles = unsafe { &mut *(state.0 as *mut Vec<HWND>) };
    handles.push(handle);

    true.into()
}
