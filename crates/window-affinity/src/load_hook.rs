use core::sync::atomic::{AtomicBool, Ordering};

use tracing::warn;
use windows::Win32::{Foundation::HMODULE, System::SystemServices::DLL_PROCESS_ATTACH};

use crate::platform::ThreadNotifications;

/// Handles the module lifecycle events the loader sends to the library.
///
/// The first `DLL_PROCESS_ATTACH` disables thread notifications for the module, every other
/// event is ignored.
#[derive(Debug, Default)]
pub struct LoadHook {
    attached: AtomicBool,
}

impl LoadHook {
    /// A hook that has not seen an attach event.
    pub const fn new() -> Self {
        Self {
            attached: AtomicBool::new(false),
        }
    }

    /// Handle a lifecycle event, the result is what the loader should be told.
    ///
    /// Always succeeds, failing to disable thread notifications does not stop the library
    /// from working.
    pub fn on_module_event<T: ThreadNotifications>(
        &self,
        api: &T,
        module: HMODULE,
        reason: u32,
    ) -> bool {
        if reason != DLL_PROCESS_ATTACH {
            return true;
        }

        if self.attached.swap(true, Ordering::AcqRel) {
            return true;
        }

        if let Err(error) = api.disable_thread_notifications(module) {
            warn!("{error}");
        }

        true
    }

    /// If the hook has handled an attach event.
    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::Acquire)
    }
}
