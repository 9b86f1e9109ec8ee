use std::env::consts::OS;
use std::env::var;
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = ".todo";
pub const DB_FILE_NAME: &str = "todo.json";

/// Per-user directory holding the database and the config file.
///
/// Resolves to `<home>/.todo`, where `<home>` is `USERPROFILE` (or
/// `LOCALAPPDATA`) on Windows and `HOME` elsewhere.
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStorage {
    pub fn new() -> Self {
        let home = match OS {
            "windows" => var("USERPROFILE").or_else(|_| var("LOCALAPPDATA")).unwrap_or_else(|_| ".".into()),
            _ => var("HOME").unwrap_or_else(|_| ".".into()),
        };
        let base_path = Path::new(&home).join(APP_DIR);

        Self { base_path }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn get_path(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }

    /// Default location of the task database.
    pub fn default_db_path(&self) -> PathBuf {
        self.get_path(DB_FILE_NAME)
    }
}
