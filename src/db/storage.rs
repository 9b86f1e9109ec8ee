//! JSON file persistence for the task collection.
//!
//! The database is a single UTF-8 file holding a JSON array of portable task
//! records, pretty-printed with two-space indentation and a trailing newline.
//! The whole collection is read at startup and rewritten in full on every
//! mutation; there is no incremental persistence.
//!
//! ## Loading Rules
//!
//! - **Missing file**: empty collection, not an error
//! - **`null` or `[]`**: empty collection
//! - **Anything else that is not an array**: [`DbError::InvalidDatabaseFile`]
//! - **A bad record or a repeated id**: [`DbError::InvalidDatabaseFile`]
//!
//! The file is never reset or truncated on a load failure.

use super::error::{DbError, DbResult};
use crate::libs::task::{PortableTask, Task};
use serde_json::Value;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the collection stored at `path`.
pub fn load(path: &Path) -> DbResult<Vec<Task>> {
    if !path.exists() {
        debug!(path = %path.display(), "database file missing, starting empty");
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(path).map_err(|e| DbError::invalid_file(path, e))?;
    let raw: Value = serde_json::from_str(&contents).map_err(|e| DbError::invalid_file(path, e))?;

    let items = match raw {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        other => {
            return Err(DbError::invalid_file(
                path,
                format!("expected a JSON array of tasks, found {}", json_kind(&other)),
            ))
        }
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut tasks = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let task = Task::from_portable(item).map_err(|e| DbError::invalid_file(path, format!("record #{}: {}", index, e)))?;
        if !seen.insert(task.id) {
            return Err(DbError::invalid_file(path, format!("duplicate task id {}", task.id)));
        }
        tasks.push(task);
    }

    debug!(path = %path.display(), count = tasks.len(), "database loaded");
    Ok(tasks)
}

/// Overwrites the file at `path` with `tasks`, in their current order.
///
/// Parent directories are created when missing. The data is written to a
/// sibling temporary file first and then renamed over the target.
pub fn save(path: &Path, tasks: &[Task]) -> DbResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| DbError::persistence(path, e))?;
    }

    let portable: Vec<PortableTask> = tasks.iter().map(Task::to_portable).collect();
    let tmp_path = temp_path(path);

    if let Err(e) = write_json(&tmp_path, &portable) {
        let _ = fs::remove_file(&tmp_path);
        return Err(DbError::persistence(path, e));
    }

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(DbError::persistence(path, e));
    }

    debug!(path = %path.display(), count = tasks.len(), "database saved");
    Ok(())
}

fn write_json(path: &Path, portable: &[PortableTask]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, portable)?;
    writer.write_all(b"\n")?;

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "tasked".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
