//! Where snag keeps its files.
//!
//! Everything lives under one directory:
//! - Unix/macOS: `$XDG_CONFIG_HOME/snag` or `~/.config/snag`
//! - Windows: `%APPDATA%\snag`

use std::{env, fs, io, path::PathBuf};

const APP_DIR: &str = "snag";

pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/snag/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/snag/notes.json`
pub fn notes_store() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("notes.json"))
}

/// `~/.config/snag/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

pub fn ensure_logs_dir() -> io::Result<PathBuf> {
    let dir = logs_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no config directory"))?;
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
