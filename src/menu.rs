//! The numbered menu of the `my-tasks` binary
//!
//! [`run`] works on any input and output, so that a whole session can be scripted.

use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, ErrorKind, Write};
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::TaskError;
use crate::journal::TaskEvent;
use crate::manager::{Filter, TaskManager};
use crate::task::{parse_due_date, Task};
use crate::traits::TaskStore;
use crate::utils::{print_task_list, prompt};

/// An entry of the menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Complete,
    Pending,
    Delete,
    View,
    Undo,
    Redo,
    Modify,
    Exit,
}

impl MenuChoice {
    /// Every entry, in display order
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::Add,
        MenuChoice::Complete,
        MenuChoice::Pending,
        MenuChoice::Delete,
        MenuChoice::View,
        MenuChoice::Undo,
        MenuChoice::Redo,
        MenuChoice::Modify,
        MenuChoice::Exit,
    ];

    /// The number the user types to pick this entry
    pub fn number(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or_default() + 1
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Task",
            MenuChoice::Complete => "Mark Task as Completed",
            MenuChoice::Pending => "Mark Task as Pending",
            MenuChoice::Delete => "Delete Task",
            MenuChoice::View => "View Tasks",
            MenuChoice::Undo => "Undo",
            MenuChoice::Redo => "Redo",
            MenuChoice::Modify => "Modify Task",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl Display for MenuChoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = TaskError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TaskError::InvalidChoice(s.to_string());
        let number: usize = s.trim().parse().map_err(|_| invalid())?;
        match number {
            0 => Err(invalid()),
            n => Self::ALL.get(n - 1).copied().ok_or_else(invalid),
        }
    }
}



/// Run the menu until the user exits or the input is exhausted.
///
/// Tasks are saved to `store` after every change, and once more before returning.
/// Failing to save is reported to the user but does not stop the menu.
pub fn run<R, W>(manager: &mut TaskManager, store: &dyn TaskStore, input: &mut R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    match run_loop(manager, store, input, output) {
        Ok(()) => (),
        // Running out of input is the same as choosing "Exit"
        Err(err) if err.kind() == ErrorKind::UnexpectedEof => (),
        Err(err) => return Err(err),
    }

    save(manager, store, output)?;
    writeln!(output, "Exiting...")
}

fn run_loop<R, W>(manager: &mut TaskManager, store: &dyn TaskStore, input: &mut R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "\nMenu:")?;
        for choice in MenuChoice::ALL.iter() {
            writeln!(output, "{}", choice)?;
        }

        let choice = match prompt(input, output, "Enter your choice: ")?.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(_) => {
                writeln!(output, "Invalid choice. Please enter a number between 1 and {}.", MenuChoice::ALL.len())?;
                continue;
            },
        };

        let changed = match choice {
            MenuChoice::Exit => return Ok(()),
            MenuChoice::Add => add(manager, input, output)?,
            MenuChoice::Complete => {
                let description = prompt(input, output, "Enter task description to mark as completed: ")?;
                report(output, manager.mark_completed(&description).map(|_| "Task marked as completed!"))?
            },
            MenuChoice::Pending => {
                let description = prompt(input, output, "Enter task description to mark as pending: ")?;
                report(output, manager.mark_pending(&description).map(|_| "Task marked as pending!"))?
            },
            MenuChoice::Delete => {
                let description = prompt(input, output, "Enter task description to delete: ")?;
                match manager.delete(&description) {
                    0 => {
                        writeln!(output, "No task matches {:?}.", description)?;
                        false
                    },
                    count => {
                        writeln!(output, "{} task(s) deleted successfully!", count)?;
                        true
                    },
                }
            },
            MenuChoice::View => {
                let text = prompt(input, output, "Enter filter type (all/completed/pending): ")?;
                let filter = match text.parse::<Filter>() {
                    Ok(filter) => filter,
                    Err(_) => {
                        writeln!(output, "Invalid filter type. Showing all tasks.")?;
                        Filter::All
                    },
                };
                print_task_list(output, &manager.filter(filter))?;
                false
            },
            MenuChoice::Undo => {
                let done = manager.undo();
                writeln!(output, "{}", if done { "Last change undone." } else { "Nothing to undo." })?;
                done
            },
            MenuChoice::Redo => {
                let done = manager.redo();
                writeln!(output, "{}", if done { "Last undone change redone." } else { "Nothing to redo." })?;
                done
            },
            MenuChoice::Modify => modify(manager, input, output)?,
        };

        if changed {
            save(manager, store, output)?;
        }
    }
}

fn add<R: BufRead, W: Write>(manager: &mut TaskManager, input: &mut R, output: &mut W) -> io::Result<bool> {
    let description = prompt(input, output, "Enter task description: ")?;
    if description.trim().is_empty() {
        writeln!(output, "A task needs a description.")?;
        return Ok(false);
    }
    let due_date = ask_due_date(input, output, "Enter due date (YYYY-MM-DD, optional) or press Enter: ")?;

    manager.add(Task::new(description, due_date));
    writeln!(output, "Task added successfully!")?;
    Ok(true)
}

fn modify<R: BufRead, W: Write>(manager: &mut TaskManager, input: &mut R, output: &mut W) -> io::Result<bool> {
    let description = prompt(input, output, "Enter task description to modify: ")?;
    let id = match manager.find(&description) {
        None => {
            writeln!(output, "{}", TaskError::NotFound{ description })?;
            return Ok(false);
        },
        Some(task) => *task.id(),
    };

    let mut changed = false;
    let new_description = prompt(input, output, "Enter new description (press Enter to keep it): ")?;
    if new_description.trim().is_empty() == false {
        changed |= report(output, manager.set_description_by_id(&id, new_description).map(|_| "Task renamed."))?;
    }

    loop {
        let text = prompt(input, output, "Enter new due date (YYYY-MM-DD), '-' to remove it, or press Enter to keep it: ")?;
        let due_date = match text.trim() {
            "" => break,
            "-" => None,
            text => match parse_due_date(text) {
                Ok(date) => date,
                Err(err) => {
                    log::warn!("{}", err);
                    writeln!(output, "{}", err)?;
                    continue;
                },
            },
        };
        changed |= report(output, manager.set_due_date_by_id(&id, due_date).map(|_| "Due date updated."))?;
        break;
    }

    Ok(changed)
}

/// Ask for a date until a valid one (or nothing) is typed
fn ask_due_date<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<Option<NaiveDate>> {
    loop {
        let text = prompt(input, output, question)?;
        match parse_due_date(&text) {
            Ok(date) => return Ok(date),
            Err(err) => {
                log::warn!("{}", err);
                writeln!(output, "Invalid date format. Please enter the date in YYYY-MM-DD format.")?;
            },
        }
    }
}

/// Tell the user how an operation went, and return whether it succeeded
fn report<W: Write>(output: &mut W, result: Result<&str, TaskError>) -> io::Result<bool> {
    match result {
        Ok(message) => {
            writeln!(output, "{}", message)?;
            Ok(true)
        },
        Err(err) => {
            writeln!(output, "{}", err)?;
            Ok(false)
        },
    }
}

fn save<W: Write>(manager: &mut TaskManager, store: &dyn TaskStore, output: &mut W) -> io::Result<()> {
    match store.save(manager.tasks()) {
        Ok(()) => {
            let count = manager.len();
            manager.journal_mut().record(TaskEvent::Saved{ count });
        },
        Err(err) => {
            manager.journal_mut().warn(&format!("Unable to save tasks to {:?}: {}", store.path(), err));
            writeln!(output, "Unable to save tasks: {}", err)?;
        },
    }
    Ok(())
}
