//! Undo/redo support
//!
//! A [`History`] is a linear list of states with a cursor pointing at the active one.
//! The [`TaskManager`](crate::TaskManager) records a [`Snapshot`] of all its tasks after every change,
//! and moves the cursor back and forth to undo or redo them.

use chrono::NaiveDate;

use crate::task::{Task, TaskId};

/// An immutable copy of the fields of a [`Task`] at a point in time
#[derive(Clone, Debug, PartialEq)]
pub struct TaskMemento {
    id: TaskId,
    description: String,
    due_date: Option<NaiveDate>,
    completed: bool,
}

impl TaskMemento {
    pub fn new(id: TaskId, description: String, due_date: Option<NaiveDate>, completed: bool) -> Self {
        Self { id, description, due_date, completed }
    }

    pub fn id(&self) -> &TaskId                 { &self.id          }
    pub fn description(&self) -> &str           { &self.description }
    pub fn due_date(&self) -> Option<NaiveDate> { self.due_date     }
    pub fn completed(&self) -> bool             { self.completed    }
}


/// The whole content of a task list at a point in time
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    mementos: Vec<TaskMemento>,
}

impl Snapshot {
    /// Take a snapshot of a list of tasks, keeping their order
    pub fn of(tasks: &[Task]) -> Self {
        Self {
            mementos: tasks.iter().map(|task| task.create_memento()).collect(),
        }
    }

    pub fn mementos(&self) -> &[TaskMemento] {
        &self.mementos
    }

    /// Rebuild the tasks this snapshot was taken from
    pub fn restore(&self) -> Vec<Task> {
        self.mementos.iter().map(Task::from_memento).collect()
    }
}


/// A linear undo/redo history.
///
/// There is always at least one entry (the initial state), and the cursor always points to an existing entry.
/// Recording a new state discards every entry that has been undone.
#[derive(Clone, Debug)]
pub struct History<T> {
    entries: Vec<T>,
    cursor: usize,
}

impl<T> History<T> {
    /// Create a history whose only entry is `initial`
    pub fn new(initial: T) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Append a new state after the cursor, and move the cursor to it.
    ///
    /// Entries that were beyond the cursor (i.e. that were undone) can no longer be redone
    pub fn record(&mut self, state: T) {
        let discarded = self.entries.len() - self.cursor - 1;
        if discarded > 0 {
            log::debug!("Discarding {} redoable state(s)", discarded);
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(state);
        self.cursor = self.entries.len() - 1;
    }

    /// Step back to the previous state, and return it.
    /// Returns `None` (and leaves the cursor untouched) if the cursor already is on the oldest state
    pub fn undo(&mut self) -> Option<&T> {
        if self.can_undo() == false {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward to the next state, and return it.
    /// Returns `None` (and leaves the cursor untouched) if the cursor already is on the newest state
    pub fn redo(&mut self) -> Option<&T> {
        if self.can_redo() == false {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// The state under the cursor
    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history at least contains its initial state
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
