//! This crate manages a single-user to-do list.
//!
//! Tasks live in a [`TaskManager`], that can add, complete, rename or delete them, and filter them by completion status. \
//! Every change is recorded in a [`History`](history::History), so that it can be undone and redone. \
//! Changes are reported to a [`Journal`](journal::Journal), that logs them and optionally forwards them to a listener.
//!
//! Task lists are persisted by a [`TaskStore`](traits::TaskStore), either as a flat CSV table ([`store::CsvFile`]) or as a JSON document ([`store::JsonCache`]).
//!
//! The `my-tasks` binary wraps all of this into an interactive numbered menu (see the [`menu`] module).

pub mod traits;

pub mod task;
pub use task::Task;
pub use task::TaskId;
pub use task::DueStatus;
pub mod history;
pub mod manager;
pub use manager::TaskManager;
pub use manager::Filter;
pub mod journal;
pub mod error;
pub use error::TaskError;

pub mod store;
pub mod menu;

pub mod config;
pub mod utils;
