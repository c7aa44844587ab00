//! Scripted sessions of the interactive menu

use std::io::Cursor;

use my_tasks::journal::Journal;
use my_tasks::store::CsvFile;
use my_tasks::traits::TaskStore;
use my_tasks::TaskManager;

/// Run the menu with the given lines as user input, and return what it printed
fn run_session(manager: &mut TaskManager, store: &dyn TaskStore, lines: &[&str]) -> String {
    let mut input = Cursor::new(lines.join("\n") + "\n");
    let mut output = Vec::new();
    my_tasks::menu::run(manager, store, &mut input, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn add_complete_and_view() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvFile::new(&dir.path().join("tasks.csv"));
    let mut manager = TaskManager::default();

    let printed = run_session(&mut manager, &store, &[
        "1", "buy milk", "not a date", "2099-12-31",
        "1", "call mum", "",
        "2", "buy milk",
        "5", "completed",
        "9",
    ]);

    assert!(printed.contains("Invalid date format."));
    assert!(printed.contains("Task marked as completed!"));
    assert!(printed.contains("✓ buy milk\t2099-12-31\tOn time"));
    assert!(printed.contains("Exiting..."));

    let saved = store.load().unwrap();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].completed(), true);
    assert_eq!(saved[1].due_date(), None);
}

#[test]
fn undo_redo_and_errors() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvFile::new(&dir.path().join("tasks.csv"));
    let mut manager = TaskManager::default();

    let printed = run_session(&mut manager, &store, &[
        "42",
        "3", "nothing like this",
        "1", "a", "",
        "4", "a",
        "6",
        "7",
        "7",
        "5", "whatever",
    ]);

    assert!(printed.contains("Invalid choice. Please enter a number between 1 and 9."));
    assert!(printed.contains("No task matches the description \"nothing like this\""));
    assert!(printed.contains("1 task(s) deleted successfully!"));
    assert!(printed.contains("Last change undone."));
    assert!(printed.contains("Last undone change redone."));
    assert!(printed.contains("Nothing to redo."));
    assert!(printed.contains("Invalid filter type. Showing all tasks."));
    assert!(printed.contains("(no task)"));

    // The input ran out without choosing "Exit": tasks are saved anyway
    assert!(manager.is_empty());
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn modify_renames_and_changes_due_date() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvFile::new(&dir.path().join("tasks.csv"));
    let mut manager = TaskManager::from_tasks(Vec::new(), Journal::new());

    run_session(&mut manager, &store, &[
        "1", "dentist", "2030-01-01",
        "8", "dentist", "dentist appointment", "31/01/2030", "2030-01-31",
        "9",
    ]);

    let saved = store.load().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].description(), "dentist appointment");
    assert_eq!(saved[0].due_date(), chrono::NaiveDate::from_ymd_opt(2030, 1, 31));

    run_session(&mut manager, &store, &["8", "dentist appointment", "", "-", "9"]);
    assert_eq!(store.load().unwrap()[0].due_date(), None);
}

#[test]
fn failed_saves_are_reported_and_the_menu_goes_on() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvFile::new(&dir.path().join("missing-dir").join("tasks.csv"));
    let mut manager = TaskManager::new(Journal::new());

    let printed = run_session(&mut manager, &store, &[
        "1", "a", "",
        "5", "all",
        "9",
    ]);

    assert!(printed.contains("Unable to save tasks"));
    assert!(printed.contains("Task added successfully!"));
    assert!(printed.contains("Exiting..."));
    assert_eq!(manager.len(), 1);
    assert!(manager.journal_mut().n_warnings() >= 1);
}
