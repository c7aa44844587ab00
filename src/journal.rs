//! Utilities to report what happens to a task list

use std::fmt::{Display, Error, Formatter};
use std::sync::mpsc::{channel, Receiver, Sender};

/// A change that happened to a task list
#[derive(Clone, Debug, PartialEq)]
pub enum TaskEvent {
    Added { description: String },
    Completed { description: String },
    MarkedPending { description: String },
    DueDateChanged { description: String, due_date: Option<chrono::NaiveDate> },
    Renamed { from: String, to: String },
    /// Every task sharing a description is deleted at once
    Deleted { description: String, count: usize },
    Undone,
    Redone,
    Loaded { count: usize },
    Saved { count: usize },
}

impl Display for TaskEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            TaskEvent::Added{description} => write!(f, "Task '{}' added", description),
            TaskEvent::Completed{description} => write!(f, "Task '{}' marked as completed", description),
            TaskEvent::MarkedPending{description} => write!(f, "Task '{}' marked as pending", description),
            TaskEvent::DueDateChanged{description, due_date} => match due_date {
                Some(date) => write!(f, "Due date of task '{}' set to {}", description, date),
                None => write!(f, "Due date of task '{}' removed", description),
            },
            TaskEvent::Renamed{from, to} => write!(f, "Task '{}' renamed to '{}'", from, to),
            TaskEvent::Deleted{description, count} => write!(f, "{} task(s) '{}' deleted", count, description),
            TaskEvent::Undone => write!(f, "Last change undone"),
            TaskEvent::Redone => write!(f, "Last undone change redone"),
            TaskEvent::Loaded{count} => write!(f, "{} task(s) loaded", count),
            TaskEvent::Saved{count} => write!(f, "{} task(s) saved", count),
        }
    }
}



/// See [`feedback_channel`]
pub type FeedbackSender = Sender<TaskEvent>;
/// See [`feedback_channel`]
pub type FeedbackReceiver = Receiver<TaskEvent>;

/// Create a feedback channel, that can be used to follow every change made to a task list
pub fn feedback_channel() -> (FeedbackSender, FeedbackReceiver) {
    channel()
}



/// The sink a [`TaskManager`](crate::TaskManager) reports its changes to.
///
/// Every event is logged using the `log::*` macros, and forwarded to the feedback channel (if any).
#[derive(Debug, Default)]
pub struct Journal {
    n_warnings: u32,
    feedback_channel: Option<FeedbackSender>,
}

impl Journal {
    pub fn new() -> Self {
        Self { n_warnings: 0, feedback_channel: None }
    }
    pub fn new_with_feedback_channel(channel: FeedbackSender) -> Self {
        Self { n_warnings: 0, feedback_channel: Some(channel) }
    }

    /// How many warnings have been reported so far
    pub fn n_warnings(&self) -> u32 {
        self.n_warnings
    }

    /// Log an event, and send it to the listener (if any).
    pub fn record(&mut self, event: TaskEvent) {
        log::info!("{}", event);
        self.feedback(event);
    }

    /// Log a warning
    pub fn warn(&mut self, text: &str) {
        log::warn!("{}", text);
        self.n_warnings += 1;
    }
    /// Log an info
    pub fn info(&mut self, text: &str) {
        log::info!("{}", text);
    }
    /// Log a debug message
    pub fn debug(&mut self, text: &str) {
        log::debug!("{}", text);
    }

    fn feedback(&mut self, event: TaskEvent) {
        if let Some(sender) = &self.feedback_channel {
            // Nobody listening anymore is fine
            if sender.send(event).is_err() {
                log::debug!("Feedback channel closed, events are only logged from now on");
                self.feedback_channel = None;
            }
        }
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_forwarded() {
        let (sender, receiver) = feedback_channel();
        let mut journal = Journal::new_with_feedback_channel(sender);

        journal.record(TaskEvent::Added{ description: "buy milk".to_string() });
        journal.record(TaskEvent::Undone);

        let received: Vec<TaskEvent> = receiver.try_iter().collect();
        assert_eq!(received, vec![
            TaskEvent::Added{ description: "buy milk".to_string() },
            TaskEvent::Undone,
        ]);
    }

    #[test]
    fn closed_channel_is_not_an_error() {
        let (sender, receiver) = feedback_channel();
        drop(receiver);
        let mut journal = Journal::new_with_feedback_channel(sender);
        journal.record(TaskEvent::Redone);
        journal.record(TaskEvent::Redone);
        assert_eq!(journal.n_warnings(), 0);
    }

    #[test]
    fn warnings_are_counted() {
        let mut journal = Journal::new();
        journal.warn("something odd");
        assert_eq!(journal.n_warnings(), 1);
    }

    #[test]
    fn event_display() {
        let event = TaskEvent::Deleted{ description: "buy milk".to_string(), count: 2 };
        assert_eq!(event.to_string(), "2 task(s) 'buy milk' deleted");
    }
}
