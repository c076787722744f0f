use crate::{config::Config, window_info::WindowInfo};

/// If a window belongs in the report.
///
/// Hidden windows are never reported. With `only_restricted` set, windows whose affinity is
/// `None` or unknown are left out too.
pub fn should_report(window: &WindowInfo, config: &Config, only_restricted: bool) -> bool {
    if !window.visible {
        return false;
    }

    if !config.include_untitled && window.title.trim().is_empty() {
        return false;
    }

    if config
        .ignored_classes
        .iter()
        .any(|class| *class == window.class_name)
    {
        return false;
    }

    if let Some(process_name) = &window.process_name {
        if config
            .ignored_processes
            .iter()
            .any(|process| process.eq_ignore_ascii_case(process_name))
        {
            return false;
        }
    }

    if only_restricted {
        return window
            .affinity
            .is_some_and(|affinity| affinity.is_restricted());
    }

    true
}
