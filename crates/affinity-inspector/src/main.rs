//! # Affinity Inspector
//! Lists the top-level windows on the desktop and their display affinity.
//!

#![allow(clippy::std_instead_of_alloc)]

use arguments::{Arguments, USAGE};
use config::Config;
use enumerate_windows::enumerate_windows;
use failure::{Failure, Ignore};
use filter::should_report;
use logger::setup_logger;
use mimalloc::MiMalloc;
use tracing::{info, info_span, warn};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod arguments;
mod config;
mod directories;
mod enumerate_windows;
mod failure;
mod filter;
mod logger;
mod window_info;

/// The Cargo package version.
#[cfg(not(debug_assertions))]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The Cargo package version or '0.0.0' if a non-release build.
#[cfg(debug_assertions)]
pub const VERSION: &str = "0.0.0";

fn main() {
    let arguments = Arguments::from_env();

    if arguments.help {
        if let Some(unknown) = &arguments.unknown {
            eprintln!("Unknown argument: {unknown}\n");
        }
        println!("{USAGE}");
        return;
    }

    // Set up logger
    let _logger_guards =
        setup_logger(arguments.debug).log_and_exit("The logger could not be set up");

    let _span = info_span!("[Main Thread]").entered();
    info!("Affinity Inspector v{}", VERSION);

    let config = load_config(arguments.reset_config);

    let windows = enumerate_windows().log_and_exit("The windows could not be enumerated");
    info!("Found {} windows", windows.len());

    let reported: Vec<_> = windows
        .iter()
        .filter(|window| should_report(window, &config, arguments.excluded))
        .collect();

    for window in &reported {
        println!("{window}");
    }
    println!("{} windows", reported.len());
}

fn load_config(reset: bool) -> Config {
    if reset {
        info!("Resetting config file.");
        let config = Config::default();
        config.save().log("Could not save the config file").ignore();
        return config;
    }

    match Config::try_load_config() {
        Ok(Some(config)) => config,

        Ok(None) => {
            info!("Creating config file.");
            let config = Config::default();
            config.save().log("Could not save the config file").ignore();
            config
        }

        // An invalid config is left for the user to fix.
        Err(error) => {
            warn!("Using the default config: {error}");
            eprintln!(
                "The config file is invalid, using the default config.\nRun with --reset-config to replace it.\n{}",
                Config::file_path().display()
            );
            Config::default()
        }
    }
}
