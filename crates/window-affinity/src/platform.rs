//! The Windows calls the library makes, behind traits so the request handling can be driven
//! without a desktop.
//!

use windows::Win32::{
    Foundation::{HMODULE, HWND},
    System::LibraryLoader::DisableThreadLibraryCalls,
    UI::WindowsAndMessaging::{GetWindowDisplayAffinity, SetWindowDisplayAffinity},
};

use crate::{DisplayAffinity, LabelledWinResult, WinError};

/// Reads and writes the display affinity of windows.
pub trait DisplayAffinityApi {
    /// Set the display affinity of a window.
    fn set_display_affinity(&self, handle: HWND, affinity: DisplayAffinity)
    -> LabelledWinResult<()>;

    /// Get the raw `WDA_*` display affinity of a window.
    fn display_affinity(&self, handle: HWND) -> LabelledWinResult<u32>;
}

/// Suppresses thread attach and detach notifications for a module.
pub trait ThreadNotifications {
    /// Stop the loader sending `DLL_THREAD_ATTACH` and `DLL_THREAD_DETACH` to the module.
    fn disable_thread_notifications(&self, module: HMODULE) -> LabelledWinResult<()>;
}

/// The real Windows implementation, calls into user32 and kernel32.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsApi;

impl DisplayAffinityApi for WindowsApi {
    fn set_display_affinity(
        &self,
        handle: HWND,
        affinity: DisplayAffinity,
    ) -> LabelledWinResult<()> {
        unsafe { SetWindowDisplayAffinity(handle, affinity.as_windows()) }
            .map_err(|e| WinError::new(e, "SetWindowDisplayAffinity"))
    }

    fn display_affinity(&self, handle: HWND) -> LabelledWinResult<u32> {
        let mut affinity = 0;

        unsafe { GetWindowDisplayAffinity(handle, &mut affinity) }
            .map_err(|e| WinError::new(e, "GetWindowDisplayAffinity"))?;

        Ok(affinity)
    }
}

impl ThreadNotifications for WindowsApi {
    fn disable_thread_notifications(&self, module: HMODULE) -> LabelledWinResult<()> {
        unsafe { DisableThreadLibraryCalls(module) }
            .map_err(|e| WinError::new(e, "DisableThreadLibraryCalls"))
    }
}
