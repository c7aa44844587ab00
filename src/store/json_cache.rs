//! A JSON task store, that keeps task IDs across runs

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::task::Task;
use crate::traits::TaskStore;

/// A task store that stores its tasks in a local JSON file
#[derive(Clone, Debug, PartialEq)]
pub struct JsonCache {
    backing_file: PathBuf,
}

#[derive(Default, Debug, PartialEq, Serialize, Deserialize)]
struct CachedData {
    tasks: Vec<Task>,
    saved_at: Option<DateTime<Utc>>,
}

impl JsonCache {
    pub fn new(path: &Path) -> Self {
        Self { backing_file: PathBuf::from(path) }
    }
}

impl TaskStore for JsonCache {
    fn path(&self) -> &Path {
        &self.backing_file
    }

    fn load(&self) -> Result<Vec<Task>> {
        let data: CachedData = match super::open_existing(&self.backing_file)? {
            None => return Ok(Vec::new()),
            Some(file) => serde_json::from_reader(file)?,
        };

        log::debug!("{} task(s) read from {:?} (saved at {:?})", data.tasks.len(), self.backing_file, data.saved_at);
        Ok(data.tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let data = CachedData {
            tasks: tasks.to_vec(),
            saved_at: Some(Utc::now()),
        };
        super::write_atomically(&self.backing_file, |file| {
            serde_json::to_writer_pretty(file, &data)?;
            Ok(())
        })?;

        log::debug!("{} task(s) written to {:?}", tasks.len(), self.backing_file);
        Ok(())
    }
}
