use super::error::{DbError, DbResult};
use super::storage;
use crate::libs::task::{Task, TaskStatus, TaskTarget};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of [`Tasks::delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deleted {
    All { count: usize },
    One(Task),
}

/// Outcome of [`Tasks::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Updated {
    Changed(Task),
    NoChanges,
}

/// Outcome of [`Tasks::set_status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marked {
    All { count: usize, status: TaskStatus },
    One(Task),
}

/// Returns 1 for an empty collection, otherwise one more than the highest id.
///
/// Ids of deleted tasks are never handed out again while a higher id exists.
pub fn next_id(tasks: &[Task]) -> u32 {
    tasks.iter().map(|task| task.id).max().map_or(1, |max| max.saturating_add(1))
}

/// The loaded task collection together with the file it belongs to.
///
/// Created once per invocation by the CLI shell and passed into each
/// operation. Every mutation builds the next collection, writes it to disk
/// and only then replaces the in-memory state, so a failed write leaves the
/// value exactly as it was.
#[derive(Debug, Clone)]
pub struct Tasks {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl Tasks {
    /// Loads the collection stored at `path`; a missing file yields an empty one.
    pub fn open(path: impl Into<PathBuf>) -> DbResult<Tasks> {
        let path = path.into();
        let tasks = storage::load(&path)?;
        Ok(Tasks { path, tasks })
    }

    /// Creates the database file, replacing any existing content with an empty collection.
    pub fn init(path: impl Into<PathBuf>) -> DbResult<Tasks> {
        let path = path.into();
        storage::save(&path, &[])?;
        debug!(path = %path.display(), "database initialized");
        Ok(Tasks { path, tasks: Vec::new() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn next_id(&self) -> u32 {
        next_id(&self.tasks)
    }

    pub fn get_by_id(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Appends a new `Todo` task and persists the collection.
    pub fn add(&mut self, desc: &str) -> DbResult<Task> {
        validate_desc(desc)?;

        let id = self.next_id();
        if self.get_by_id(id).is_some() {
            return Err(DbError::InvalidInput("no task ids left".to_string()));
        }

        let task = Task::new(id, desc);
        let mut next = self.tasks.clone();
        next.push(task.clone());
        self.commit(next)?;

        debug!(id = task.id, "task added");
        Ok(task)
    }

    /// Removes one task, or every task for [`TaskTarget::All`].
    ///
    /// An unknown id fails with [`DbError::NotFound`] and nothing is written.
    pub fn delete(&mut self, target: TaskTarget) -> DbResult<Deleted> {
        match target {
            TaskTarget::All => {
                let count = self.tasks.len();
                self.commit(Vec::new())?;
                debug!(count, "all tasks deleted");
                Ok(Deleted::All { count })
            }
            TaskTarget::Id(id) => {
                let index = self.position(id)?;
                let mut next = self.tasks.clone();
                let removed = next.remove(index);
                self.commit(next)?;
                debug!(id, "task deleted");
                Ok(Deleted::One(removed))
            }
        }
    }

    /// Changes the description and/or status of one task.
    ///
    /// When no argument differs from the stored values nothing is written and
    /// [`Updated::NoChanges`] is returned.
    pub fn update(&mut self, id: u32, desc: Option<&str>, status: Option<TaskStatus>) -> DbResult<Updated> {
        let index = self.position(id)?;
        if let Some(desc) = desc {
            validate_desc(desc)?;
        }

        let Some(revised) = self.tasks[index].revised(desc, status) else {
            debug!(id, "update without changes");
            return Ok(Updated::NoChanges);
        };

        let mut next = self.tasks.clone();
        next[index] = revised.clone();
        self.commit(next)?;

        debug!(id, "task updated");
        Ok(Updated::Changed(revised))
    }

    /// Sets `status` on one task, or on every task for [`TaskTarget::All`].
    ///
    /// The collection is written once, even for bulk changes.
    pub fn set_status(&mut self, target: TaskTarget, status: TaskStatus) -> DbResult<Marked> {
        match target {
            TaskTarget::All => {
                let next: Vec<Task> = self.tasks.iter().cloned().map(|task| task.with_status(status)).collect();
                let count = next.len();
                self.commit(next)?;
                debug!(count, %status, "status set on all tasks");
                Ok(Marked::All { count, status })
            }
            TaskTarget::Id(id) => {
                let index = self.position(id)?;
                let marked = self.tasks[index].clone().with_status(status);
                let mut next = self.tasks.clone();
                next[index] = marked.clone();
                self.commit(next)?;
                debug!(id, %status, "status set");
                Ok(Marked::One(marked))
            }
        }
    }

    /// Returns the tasks, optionally only those with `status`, in stored order.
    pub fn list(&self, status: Option<TaskStatus>) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| status.map_or(true, |status| task.status == status))
            .collect()
    }

    fn position(&self, id: u32) -> DbResult<usize> {
        self.tasks.iter().position(|task| task.id == id).ok_or(DbError::NotFound(id))
    }

    fn commit(&mut self, next: Vec<Task>) -> DbResult<()> {
        storage::save(&self.path, &next)?;
        self.tasks = next;
        Ok(())
    }
}

fn validate_desc(desc: &str) -> DbResult<()> {
    if desc.trim().is_empty() {
        return Err(DbError::InvalidInput("task description must not be empty".to_string()));
    }
    Ok(())
}
