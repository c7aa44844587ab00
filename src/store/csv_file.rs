//! The flat CSV table tasks are stored in
//!
//! Columns are `description,due_date,completed,due_status`.
//! `due_status` is only written for the convenience of whoever reads the file: it is ignored when loading.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskError};
use crate::task::{Task, TaskId, DATE_FORMAT};
use crate::traits::TaskStore;

const HEADERS: [&str; 4] = ["description", "due_date", "completed", "due_status"];

/// Turn the text of a `completed` cell into a boolean.
///
/// Only a fixed set of literals is accepted, anything else returns `None`
pub fn parse_completed(text: &str) -> Option<bool> {
    match text.trim() {
        "True" | "true" | "TRUE" | "1" => Some(true),
        "False" | "false" | "FALSE" | "0" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CsvRecord {
    description: String,
    due_date: String,
    completed: String,
    /// Older files do not have this column
    #[serde(default)]
    due_status: Option<String>,
}

impl CsvRecord {
    fn from_task(task: &Task) -> Self {
        Self {
            description: task.description().to_string(),
            due_date: task.due_date()
                .map(|date| date.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            completed: if task.completed() { "True" } else { "False" }.to_string(),
            due_status: Some(task.due_status_now().to_string()),
        }
    }

    fn into_task(self, line: u64) -> Result<Task> {
        let due_date = match self.due_date.trim() {
            // "None" is what some older versions used to write for missing dates
            "" | "None" => None,
            text => match NaiveDate::parse_from_str(text, DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(err) => return Err(TaskError::MalformedRecord{
                    line,
                    reason: format!("invalid due date {:?}: {}", text, err),
                }),
            },
        };

        let completed = match parse_completed(&self.completed) {
            Some(completed) => completed,
            None => return Err(TaskError::MalformedRecord{
                line,
                reason: format!("invalid completion status {:?}", self.completed),
            }),
        };

        // IDs are not stored in this format
        Ok(Task::new_with_parameters(TaskId::random(), self.description, due_date, completed))
    }
}


/// A task store backed by a CSV file
#[derive(Clone, Debug, PartialEq)]
pub struct CsvFile {
    backing_file: PathBuf,
}

impl CsvFile {
    pub fn new(path: &Path) -> Self {
        Self { backing_file: PathBuf::from(path) }
    }
}

impl TaskStore for CsvFile {
    fn path(&self) -> &Path {
        &self.backing_file
    }

    fn load(&self) -> Result<Vec<Task>> {
        let file = match super::open_existing(&self.backing_file)? {
            None => return Ok(Vec::new()),
            Some(file) => file,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);
        let headers = reader.headers()?.clone();

        let mut tasks = Vec::new();
        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(err) => {
                    let line = err.position().map(|pos| pos.line()).unwrap_or_default();
                    return Err(TaskError::MalformedRecord{ line, reason: err.to_string() });
                },
            };
            let line = record.position().map(|pos| pos.line()).unwrap_or_default();

            let row: CsvRecord = match record.deserialize(Some(&headers)) {
                Ok(row) => row,
                Err(err) => return Err(TaskError::MalformedRecord{ line, reason: err.to_string() }),
            };
            tasks.push(row.into_task(line)?);
        }

        log::debug!("{} task(s) read from {:?}", tasks.len(), self.backing_file);
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        super::write_atomically(&self.backing_file, |file| {
            let mut writer = csv::WriterBuilder::new()
                // The header is written by hand, so that it is there even for an empty list
                .has_headers(false)
                .from_writer(file);

            writer.write_record(&HEADERS)?;
            for task in tasks {
                writer.serialize(CsvRecord::from_task(task))?;
            }
            writer.flush()?;
            Ok(())
        })?;

        log::debug!("{} task(s) written to {:?}", tasks.len(), self.backing_file);
        Ok(())
    }
}
