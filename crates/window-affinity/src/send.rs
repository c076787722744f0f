use windows::Win32::Foundation::HWND;

/// A wrapper to make [HWND] [Send].
///
/// Window handles are plain identifiers, the library never dereferences them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendHWND(pub HWND);
unsafe impl Send for SendHWND {}
