//! An interactive to-do list.
//!
//! Tasks are stored in `tasks.csv` in the current folder, unless the `MY_TASKS_FILE` environment variable says otherwise.
//! Set `MY_TASKS_LOG` to write log lines to a file, and `RUST_LOG` to change their verbosity.

use std::error::Error;
use std::fs::OpenOptions;
use std::io;

use my_tasks::config::Settings;
use my_tasks::journal::Journal;
use my_tasks::TaskManager;

fn main() {
    let settings = Settings::from_env();
    if let Err(err) = init_logger(&settings) {
        eprintln!("Unable to set up logging: {}", err);
    }

    if let Err(err) = run(&settings) {
        log::error!("{}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logger(settings: &Settings) -> Result<(), Box<dyn Error>> {
    let env = env_logger::Env::default().default_filter_or(settings.default_log_level());
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(path) = &settings.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init()?;
    Ok(())
}

fn run(settings: &Settings) -> Result<(), Box<dyn Error>> {
    let store = settings.store();
    // A file we cannot make sense of is never overwritten
    let tasks = store.load()?;
    println!("{} task(s) loaded from {}", tasks.len(), store.path().display());

    let mut manager = TaskManager::from_tasks(tasks, Journal::new());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    my_tasks::menu::run(&mut manager, &*store, &mut input, &mut output)?;
    Ok(())
}
