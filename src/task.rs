//! To-do tasks

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{Local, NaiveDate};

use crate::error::TaskError;
use crate::history::TaskMemento;

/// The format of due dates, both in user input and in stored files
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A persistent, unique identifier for a task.
///
/// It is picked when the task is created and never changes, even when the description does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId {
    content: Uuid,
}

impl TaskId {
    /// Generate a random TaskId.
    pub fn random() -> Self {
        Self { content: Uuid::new_v4() }
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.content
    }
}

impl From<Uuid> for TaskId {
    fn from(uuid: Uuid) -> Self {
        Self { content: uuid }
    }
}

impl FromStr for TaskId {
    type Err = uuid::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let u = Uuid::parse_str(s)?;
        Ok(Self::from(u))
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content.to_hyphenated())
    }
}



/// Where a task stands relative to its due date.
///
/// Every task has one, including tasks that have no due date at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DueStatus {
    /// The due date is today
    DueToday,
    /// The due date is in the future
    OnTime,
    /// The due date has passed
    PastDue,
    /// The task has no due date
    NoDueDate,
}

impl DueStatus {
    /// Classify a (possibly absent) due date against a reference day
    pub fn classify(due_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        match due_date {
            None => DueStatus::NoDueDate,
            Some(date) if date == today => DueStatus::DueToday,
            Some(date) if date > today => DueStatus::OnTime,
            Some(_) => DueStatus::PastDue,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DueStatus::DueToday => "Due today",
            DueStatus::OnTime => "On time",
            DueStatus::PastDue => "Past due",
            DueStatus::NoDueDate => "No due date",
        }
    }
}

impl Display for DueStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}



/// A to-do task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// The task ID
    id: TaskId,

    /// The display name of the task.
    /// Description-based lookups use it, even though nothing prevents two tasks from sharing one
    description: String,

    due_date: Option<NaiveDate>,

    /// The completion status of this task
    completed: bool,
}

impl Task {
    /// Create a brand new, pending Task.
    /// This will pick a new (random) task ID.
    pub fn new(description: String, due_date: Option<NaiveDate>) -> Self {
        Self::new_with_parameters(TaskId::random(), description, due_date, false)
    }

    /// Create a new Task instance, that may have been loaded from a file already
    pub fn new_with_parameters(id: TaskId, description: String, due_date: Option<NaiveDate>, completed: bool) -> Self {
        Self {
            id,
            description,
            due_date,
            completed,
        }
    }

    /// Rebuild a task from a snapshot of its fields
    pub fn from_memento(memento: &TaskMemento) -> Self {
        Self::new_with_parameters(*memento.id(), memento.description().to_string(), memento.due_date(), memento.completed())
    }

    pub fn id(&self) -> &TaskId                 { &self.id          }
    pub fn description(&self) -> &str           { &self.description }
    pub fn due_date(&self) -> Option<NaiveDate> { self.due_date     }
    pub fn completed(&self) -> bool             { self.completed    }

    /// Whether both tasks have the same description, due date and completion status.
    ///
    /// IDs are ignored, since some file formats do not store them
    pub fn has_same_content_as(&self, other: &Task) -> bool {
           self.description == other.description
        && self.due_date == other.due_date
        && self.completed == other.completed
    }

    /// Pick a new random ID, for a copy that must not be confused with its original
    pub(crate) fn reassign_id(&mut self) {
        let new_id = TaskId::random();
        log::debug!("Task '{}' gets the new ID {} (was {})", self.description, new_id, self.id);
        self.id = new_id;
    }

    pub fn mark_completed(&mut self) {
        log::debug!("Task '{}' marked as completed", self.description);
        self.completed = true;
    }

    pub fn mark_pending(&mut self) {
        log::debug!("Task '{}' marked as pending", self.description);
        self.completed = false;
    }

    /// Replace (or remove) the due date
    pub fn set_due_date(&mut self, due_date: Option<NaiveDate>) {
        log::debug!("Due date of task '{}' set to {:?}", self.description, due_date);
        self.due_date = due_date;
    }

    /// Rename a task.
    /// Its ID does not change
    pub fn set_description(&mut self, new_description: String) {
        log::debug!("Task '{}' renamed to '{}'", self.description, new_description);
        self.description = new_description;
    }

    /// Classify this task against a given day
    pub fn due_status(&self, today: NaiveDate) -> DueStatus {
        DueStatus::classify(self.due_date, today)
    }

    /// Classify this task against the current local date
    pub fn due_status_now(&self) -> DueStatus {
        self.due_status(today())
    }

    /// Take an immutable snapshot of the current fields
    pub fn create_memento(&self) -> TaskMemento {
        TaskMemento::new(self.id, self.description.clone(), self.due_date, self.completed)
    }

    /// Put back every field from a snapshot, including the ID
    pub fn restore_from_memento(&mut self, memento: &TaskMemento) {
        self.id = *memento.id();
        self.description = memento.description().to_string();
        self.due_date = memento.due_date();
        self.completed = memento.completed();
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        let completion = if self.completed { "Completed" } else { "Pending" };
        write!(f, "{} - {}, {}", self.description, completion, self.due_status_now())
    }
}


/// The current local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a due date typed by a user.
///
/// Blank text means "no due date"
pub fn parse_due_date(text: &str) -> Result<Option<NaiveDate>, TaskError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    match NaiveDate::parse_from_str(text, DATE_FORMAT) {
        Ok(date) => Ok(Some(date)),
        Err(err) => Err(TaskError::InvalidDate { input: text.to_string(), source: err }),
    }
}
