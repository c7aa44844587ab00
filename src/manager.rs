//! This module holds the task list, and everything that can be done to it

use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{Result, TaskError};
use crate::history::{History, Snapshot};
use crate::journal::{Journal, TaskEvent};
use crate::task::{Task, TaskId};

/// Flags to tell which tasks should be retrieved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    /// Return all tasks
    All,
    /// Return only completed tasks
    Completed,
    /// Return only pending tasks
    Pending,
}

impl Filter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => task.completed(),
            Filter::Pending => task.completed() == false,
        }
    }
}

impl Default for Filter {
    fn default() -> Self {
        Filter::All
    }
}

impl FromStr for Filter {
    type Err = TaskError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "completed" => Ok(Filter::Completed),
            "pending" => Ok(Filter::Pending),
            _ => Err(TaskError::InvalidFilter(s.to_string())),
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Filter::All => write!(f, "all"),
            Filter::Completed => write!(f, "completed"),
            Filter::Pending => write!(f, "pending"),
        }
    }
}



/// An ordered list of tasks, with undo/redo support.
///
/// Tasks can be looked up either by their [`TaskId`], or by their description.
/// Since descriptions are not unique, description-based operations follow these rules:
/// * marking as completed/pending, changing a due date or renaming only affects the *first* matching task
/// * deleting removes *every* matching task
///
/// Every change is recorded in a [`History`], and reported to the [`Journal`] this manager has been given.
#[derive(Debug)]
pub struct TaskManager {
    tasks: Vec<Task>,
    history: History<Snapshot>,
    journal: Journal,
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new(Journal::new())
    }
}

impl TaskManager {
    /// Create an empty task list
    pub fn new(journal: Journal) -> Self {
        Self {
            tasks: Vec::new(),
            history: History::new(Snapshot::default()),
            journal,
        }
    }

    /// Create a task list from existing tasks (e.g. loaded from a file).
    ///
    /// These tasks are the oldest state undo can go back to.
    pub fn from_tasks(mut tasks: Vec<Task>, mut journal: Journal) -> Self {
        let mut seen = HashSet::new();
        for task in tasks.iter_mut() {
            if seen.insert(*task.id()) == false {
                journal.warn(&format!("Task '{}' shares its ID with a previous task, giving it a new one", task.description()));
                task.reassign_id();
                seen.insert(*task.id());
            }
        }

        journal.record(TaskEvent::Loaded{ count: tasks.len() });
        Self {
            history: History::new(Snapshot::of(&tasks)),
            tasks,
            journal,
        }
    }

    pub fn tasks(&self) -> &[Task]                  { &self.tasks   }
    pub fn len(&self) -> usize                      { self.tasks.len() }
    pub fn is_empty(&self) -> bool                  { self.tasks.is_empty() }
    pub fn history(&self) -> &History<Snapshot>     { &self.history }
    pub fn journal_mut(&mut self) -> &mut Journal   { &mut self.journal }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// The first task with this description
    pub fn find(&self, description: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.description() == description)
    }

    /// Append a task at the end of the list, and return its ID.
    ///
    /// A task whose ID is already in the list (e.g. a clone returned by [`Self::filter`]) is given a new one
    pub fn add(&mut self, mut task: Task) -> TaskId {
        if self.get(task.id()).is_some() {
            task.reassign_id();
        }
        let id = *task.id();
        let description = task.description().to_string();
        self.tasks.push(task);
        self.commit(TaskEvent::Added{ description });
        id
    }

    /// Mark the first task with this description as completed
    pub fn mark_completed(&mut self, description: &str) -> Result<TaskId> {
        let task = self.first_match_mut(description)?;
        task.mark_completed();
        let id = *task.id();
        self.commit(TaskEvent::Completed{ description: description.to_string() });
        Ok(id)
    }

    /// Mark the first task with this description as pending
    pub fn mark_pending(&mut self, description: &str) -> Result<TaskId> {
        let task = self.first_match_mut(description)?;
        task.mark_pending();
        let id = *task.id();
        self.commit(TaskEvent::MarkedPending{ description: description.to_string() });
        Ok(id)
    }

    /// Change (or remove) the due date of the first task with this description
    pub fn set_due_date(&mut self, description: &str, due_date: Option<NaiveDate>) -> Result<TaskId> {
        let task = self.first_match_mut(description)?;
        task.set_due_date(due_date);
        let id = *task.id();
        self.commit(TaskEvent::DueDateChanged{ description: description.to_string(), due_date });
        Ok(id)
    }

    /// Rename the first task with this description
    pub fn set_description(&mut self, description: &str, new_description: String) -> Result<TaskId> {
        let task = self.first_match_mut(description)?;
        task.set_description(new_description.clone());
        let id = *task.id();
        self.commit(TaskEvent::Renamed{ from: description.to_string(), to: new_description });
        Ok(id)
    }

    /// Remove every task with this description, and return how many were removed.
    ///
    /// Removing nothing is not an error
    pub fn delete(&mut self, description: &str) -> usize {
        let n_before = self.tasks.len();
        self.tasks.retain(|task| task.description() != description);
        let count = n_before - self.tasks.len();

        if count == 0 {
            self.journal.info(&format!("No task '{}' to delete", description));
        } else {
            self.commit(TaskEvent::Deleted{ description: description.to_string(), count });
        }
        count
    }

    pub fn mark_completed_by_id(&mut self, id: &TaskId) -> Result<()> {
        let task = self.find_by_id_mut(id)?;
        task.mark_completed();
        let description = task.description().to_string();
        self.commit(TaskEvent::Completed{ description });
        Ok(())
    }

    pub fn mark_pending_by_id(&mut self, id: &TaskId) -> Result<()> {
        let task = self.find_by_id_mut(id)?;
        task.mark_pending();
        let description = task.description().to_string();
        self.commit(TaskEvent::MarkedPending{ description });
        Ok(())
    }

    pub fn set_due_date_by_id(&mut self, id: &TaskId, due_date: Option<NaiveDate>) -> Result<()> {
        let task = self.find_by_id_mut(id)?;
        task.set_due_date(due_date);
        let description = task.description().to_string();
        self.commit(TaskEvent::DueDateChanged{ description, due_date });
        Ok(())
    }

    pub fn set_description_by_id(&mut self, id: &TaskId, new_description: String) -> Result<()> {
        let task = self.find_by_id_mut(id)?;
        let from = task.description().to_string();
        task.set_description(new_description.clone());
        self.commit(TaskEvent::Renamed{ from, to: new_description });
        Ok(())
    }

    /// Remove a single task, and return it
    pub fn delete_by_id(&mut self, id: &TaskId) -> Result<Task> {
        let index = match self.tasks.iter().position(|task| task.id() == id) {
            None => return Err(TaskError::UnknownId(*id)),
            Some(index) => index,
        };
        let removed = self.tasks.remove(index);
        self.commit(TaskEvent::Deleted{ description: removed.description().to_string(), count: 1 });
        Ok(removed)
    }

    /// Return a copy of the matching tasks, in insertion order
    pub fn filter(&self, filter: Filter) -> Vec<Task> {
        self.tasks.iter()
            .filter(|task| filter.matches(task))
            .cloned()
            .collect()
    }

    /// Go back to the state before the last change.
    ///
    /// Returns whether there was something to undo
    pub fn undo(&mut self) -> bool {
        let restored = match self.history.undo() {
            None => {
                self.journal.info("Nothing to undo");
                return false;
            },
            Some(snapshot) => snapshot.restore(),
        };
        self.tasks = restored;
        self.journal.record(TaskEvent::Undone);
        true
    }

    /// Re-apply the last undone change.
    ///
    /// Returns whether there was something to redo
    pub fn redo(&mut self) -> bool {
        let restored = match self.history.redo() {
            None => {
                self.journal.info("Nothing to redo");
                return false;
            },
            Some(snapshot) => snapshot.restore(),
        };
        self.tasks = restored;
        self.journal.record(TaskEvent::Redone);
        true
    }

    fn first_match_mut(&mut self, description: &str) -> Result<&mut Task> {
        match self.tasks.iter_mut().find(|task| task.description() == description) {
            Some(task) => Ok(task),
            None => Err(TaskError::NotFound{ description: description.to_string() }),
        }
    }

    fn find_by_id_mut(&mut self, id: &TaskId) -> Result<&mut Task> {
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => Ok(task),
            None => Err(TaskError::UnknownId(*id)),
        }
    }

    /// Record the current state in the history, and report the change
    fn commit(&mut self, event: TaskEvent) {
        let snapshot = Snapshot::of(&self.tasks);
        if &snapshot == self.history.current() {
            self.journal.debug(&format!("{} (nothing actually changed)", event));
            return;
        }
        self.history.record(snapshot);
        self.journal.record(event);
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_parsing() {
        assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!(" Completed ".parse::<Filter>().unwrap(), Filter::Completed);
        assert_eq!("PENDING".parse::<Filter>().unwrap(), Filter::Pending);
        assert!(matches!("done".parse::<Filter>(), Err(TaskError::InvalidFilter(_))));
        assert_eq!(Filter::default(), Filter::All);
    }

    #[test]
    fn no_op_changes_are_not_recorded() {
        let mut manager = TaskManager::default();
        manager.add(Task::new("buy milk".to_string(), None));
        assert_eq!(manager.history().len(), 2);

        manager.mark_pending("buy milk").unwrap();
        assert_eq!(manager.history().len(), 2);

        manager.mark_completed("buy milk").unwrap();
        assert_eq!(manager.history().len(), 3);
    }

    #[test]
    fn unknown_description_is_reported() {
        let mut manager = TaskManager::default();
        manager.add(Task::new("buy milk".to_string(), None));

        match manager.mark_completed("buy bread") {
            Err(TaskError::NotFound{ description }) => assert_eq!(description, "buy bread"),
            other => panic!("Unexpected result {:?}", other),
        }
        assert!(manager.set_due_date("buy bread", None).is_err());
        assert!(manager.set_description("buy bread", "x".to_string()).is_err());
        assert_eq!(manager.delete("buy bread"), 0);
        assert_eq!(manager.history().len(), 2);
    }

    #[test]
    fn unknown_id_is_reported() {
        let mut manager = TaskManager::default();
        let id = TaskId::random();
        assert!(matches!(manager.mark_completed_by_id(&id), Err(TaskError::UnknownId(_))));
        assert!(matches!(manager.delete_by_id(&id), Err(TaskError::UnknownId(_))));
    }

    #[test]
    fn loaded_tasks_are_the_oldest_state() {
        let tasks = vec![Task::new("a".to_string(), None), Task::new("b".to_string(), None)];
        let mut manager = TaskManager::from_tasks(tasks.clone(), Journal::new());
        assert_eq!(manager.undo(), false);

        manager.delete("a");
        assert!(manager.undo());
        assert_eq!(manager.tasks(), &tasks[..]);
    }
}
