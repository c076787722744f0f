use core::fmt::Display;

use windows::Win32::UI::WindowsAndMessaging::{
    WDA_EXCLUDEFROMCAPTURE, WDA_MONITOR, WDA_NONE, WINDOW_DISPLAY_AFFINITY,
};

/// Where a window's contents may be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayAffinity {
    /// No restriction, the window is visible to capture.
    None,

    /// The window only shows on a monitor, capture sees a black rect.
    Monitor,

    /// The window is removed from capture entirely.
    ExcludeFromCapture,
}

impl DisplayAffinity {
    /// The affinity requested by the exclude flag of an affinity request.
    pub fn from_exclude(exclude: bool) -> Self {
        if exclude {
            Self::ExcludeFromCapture
        } else {
            Self::None
        }
    }

    /// Map a raw `WDA_*` value, returns `None` for values Windows does not define.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match WINDOW_DISPLAY_AFFINITY(raw) {
            WDA_NONE => Some(Self::None),
            WDA_MONITOR => Some(Self::Monitor),
            WDA_EXCLUDEFROMCAPTURE => Some(Self::ExcludeFromCapture),
            _ => None,
        }
    }

    /// The `WDA_*` value for this affinity.
    pub fn as_windows(self) -> WINDOW_DISPLAY_AFFINITY {
        match self {
            Self::None => WDA_NONE,
            Self::Monitor => WDA_MONITOR,
            Self::ExcludeFromCapture => WDA_EXCLUDEFROMCAPTURE,
        }
    }

    /// If capture of the window is restricted in any way.
    pub fn is_restricted(self) -> bool {
        self != Self::None
    }
}

impl Display for DisplayAffinity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::None => "None",
            Self::Monitor => "Monitor",
            Self::ExcludeFromCapture => "ExcludeFromCapture",
        };

        f.pad(name)
    }
}
