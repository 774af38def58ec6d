use std::{fs, path::Path, path::PathBuf};

use kolour_engine::{command_size::SizeType, EngineError, Result};
use serde::{Deserialize, Serialize};

/// Retention limits of the command history.
///
/// Persisted values are stored in `history.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryLimits {
    /// The history never trims below this many commands.
    pub min_limit: i32,
    pub max_limit: i32,
    /// Byte budget of both lists together.
    pub max_size_limit: SizeType,
}

impl Default for HistoryLimits {
    fn default() -> Self {
        Self {
            min_limit: Self::DEFAULT_MIN_LIMIT,
            max_limit: Self::DEFAULT_MAX_LIMIT,
            max_size_limit: Self::DEFAULT_MAX_SIZE_LIMIT,
        }
    }
}

impl HistoryLimits {
    pub const DEFAULT_MIN_LIMIT: i32 = 10;
    pub const DEFAULT_MAX_LIMIT: i32 = 500;
    pub const DEFAULT_MAX_SIZE_LIMIT: SizeType = 16 * 1024 * 1024;

    /// Upper bound of both count limits.
    pub const LIMIT_CEILING: i32 = 5000;

    pub const FILE_NAME: &'static str = "history.toml";

    pub fn new(min_limit: i32, max_limit: i32, max_size_limit: SizeType) -> Self {
        Self {
            min_limit,
            max_limit,
            max_size_limit,
        }
        .normalized()
    }

    pub fn normalized(self) -> Self {
        let min_limit = self.min_limit.clamp(1, Self::LIMIT_CEILING);
        Self {
            min_limit,
            max_limit: self.max_limit.clamp(min_limit, Self::LIMIT_CEILING),
            max_size_limit: self.max_size_limit.max(1),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)?;
        let limits = toml::from_str::<HistoryLimits>(&txt).map_err(EngineError::config)?;
        Ok(limits.normalized())
    }

    /// Falls back to the defaults when the file is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(limits) => limits,
            Err(err) => {
                log::error!("Error reading history limits {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Atomically write the limits (write to temp, then rename).
    pub fn store(&self, path: &Path) -> Result<()> {
        let txt = toml::to_string_pretty(self).map_err(EngineError::config)?;
        let file_name = path.file_name().and_then(|name| name.to_str()).unwrap_or(Self::FILE_NAME);
        let temp_path = path.with_file_name(format!(".{file_name}.tmp"));
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&temp_path, txt)?;
        if let Err(err) = fs::rename(&temp_path, path) {
            log::error!("Error renaming history limits file: {err}");
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }
        Ok(())
    }

    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "GitHub", "kolourpaint").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(Self::FILE_NAME))
    }

    /// Loads from the platform config directory.
    pub fn load_persistent() -> Self {
        match Self::config_file() {
            Some(path) => Self::load_or_default(&path),
            None => {
                log::error!("Cannot determine config directory for history limits");
                Self::default()
            }
        }
    }

    pub fn store_persistent(&self) -> Result<()> {
        let path = Self::config_file().ok_or_else(|| EngineError::config("cannot determine config directory"))?;
        self.store(&path)
    }
}
