use std::{fs::create_dir_all, path::PathBuf};

use crate::failure::{Failure, Ignore};

/// Path to the config directory, also holds the log file.
pub fn config_dir() -> PathBuf {
    let dir = dirs::config_dir()
        .log_and_exit("The config directory could not be retrieved")
        .join("Window Affinity");

    create_dir_all(&dir)
        .log("Could not create the config directory")
        .ignore();

    dir
}
