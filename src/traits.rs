//! Traits used by multiple structs in this crate

use std::path::Path;

use crate::error::Result;
use crate::task::Task;

/// A place tasks are persisted to, and loaded from
pub trait TaskStore {
    /// The file backing this store
    fn path(&self) -> &Path;

    /// Returns the stored tasks, in their stored order.
    /// A store that does not exist yet contains no task, this is not an error
    fn load(&self) -> Result<Vec<Task>>;

    /// Replace the stored tasks with the given ones
    fn save(&self, tasks: &[Task]) -> Result<()>;
}
