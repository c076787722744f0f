use core::{fmt::Display, ptr::from_mut};
use std::path::Path;

use tracing::debug;
use window_affinity::{
    DisplayAffinity, LabelledWinResult, SendHWND, WinError, platform::WindowsApi, query_affinity,
};
use windows::Win32::{
    Foundation::{CloseHandle, HWND},
    System::Threading::{
        OpenProcess, PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION,
        QueryFullProcessImageNameW,
    },
    UI::WindowsAndMessaging::{
        GetClassNameW, GetWindowTextLengthW, GetWindowTextW, GetWindowThreadProcessId,
        IsWindowVisible,
    },
};
use windows_core::PWSTR;

use crate::failure::Ignore;

/// A top-level window and what the inspector reports about it.
#[derive(Debug, Clone)]
pub struct WindowInfo {
    pub handle: SendHWND,
    pub visible: bool,
    pub title: String,
    pub class_name: String,
    pub process_id: u32,

    /// Image file name of the owning process, `None` if the process could not be opened.
    pub process_name: Option<String>,

    /// `None` if Windows would not report the affinity.
    pub affinity: Option<DisplayAffinity>,
}

impl WindowInfo {
    /// Read the information for a window.
    pub fn new(handle: HWND) -> Self {
        let visible = unsafe { IsWindowVisible(handle) }.as_bool();
        let title = window_title(handle);
        let class_name = class_name(handle);

        let mut process_id = 0;
        unsafe { GetWindowThreadProcessId(handle, Some(from_mut(&mut process_id))) };

        let process_name = match process_image_name(process_id) {
            Ok(name) => Some(name),
            Err(error) => {
                debug!("No process name for {process_id}: {error}");
                None
            }
        };

        let affinity = match query_affinity(&WindowsApi, handle) {
            Ok(affinity) => Some(affinity),
            Err(error) => {
                debug!("No display affinity for {handle:?}: {error}");
                None
            }
        };

        Self {
            handle: SendHWND(handle),
            visible,
            title,
            class_name,
            process_id,
            process_name,
            affinity,
        }
    }
}

impl Display for WindowInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let affinity = match self.affinity {
            Some(affinity) => affinity.to_string(),
            None => "Unknown".to_string(),
        };

        write!(
            f,
            "0x{:x}  {:<20}  {} ({})  {}",
            self.handle.0.0 as usize,
            affinity,
            self.process_name.as_deref().unwrap_or("Unknown"),
            self.process_id,
            self.title
        )
    }
}

fn window_title(handle: HWND) -> String {
    let length = unsafe { GetWindowTextLengthW(handle) };
    if length <= 0 {
        return String::new();
    }

    let mut buffer = vec![0u16; length as usize + 1];
    let copied = unsafe { GetWindowTextW(handle, &mut buffer) };

    String::from_utf16_lossy(&buffer[..copied.max(0) as usize])
}

fn class_name(handle: HWND) -> String {
    // Class names are limited to 256 characters.
    let mut buffer = [0u16; 257];
    let copied = unsafe { GetClassNameW(handle, &mut buffer) };

    String::from_utf16_lossy(&buffer[..copied.max(0) as usize])
}

fn process_image_name(process_id: u32) -> LabelledWinResult<String> {
    let process = unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, process_id) }
        .map_err(|e| WinError::new(e, "OpenProcess"))?;

    let mut buffer = [0u16; 1024];
    let mut size = buffer.len() as u32;
    let result = unsafe {
        QueryFullProcessImageNameW(
            process,
            PROCESS_NAME_WIN32,
            PWSTR(buffer.as_mut_ptr()),
            &mut size,
        )
    }
    .map_err(|e| WinError::new(e, "QueryFullProcessImageNameW"));

    unsafe { CloseHandle(process) }.ignore();
    result?;

    let path = String::from_utf16_lossy(&buffer[..size as usize]);
    let name = Path::new(&path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or(path);

    Ok(name)
}

#[cfg(test)]
mod test {
    use core::{ffi::c_void, ptr::null_mut};

    use window_affinity::{DisplayAffinity, SendHWND};
    use windows::Win32::Foundation::HWND;

    use super::WindowInfo;

    #[test]
    fn report_line() {
        let mut window = WindowInfo {
            handle: SendHWND(HWND(0x1a2b as *mut c_void)),
            visible: true,
            title: String::from("Notes"),
            class_name: String::from("Notepad"),
            process_id: 42,
            process_name: Some(String::from("notepad.exe")),
            affinity: Some(DisplayAffinity::ExcludeFromCapture),
        };

        assert_eq!(
            window.to_string(),
            "0x1a2b  ExcludeFromCapture    notepad.exe (42)  Notes"
        );

        window.handle = SendHWND(HWND(null_mut()));
        window.process_name = None;
        window.affinity = None;
        assert_eq!(window.to_string(), "0x0  Unknown               Unknown (42)  Notes");
    }
}
