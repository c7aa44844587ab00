//! Some utility functions

use std::io::{BufRead, Error, ErrorKind, Write};

use crate::task::{Task, DATE_FORMAT};

/// Print a question, and read the answer (without its trailing newline).
///
/// Returns an `UnexpectedEof` error when there is nothing left to read
pub fn prompt<R, W>(input: &mut R, output: &mut W, question: &str) -> Result<String, Error>
where
    R: BufRead,
    W: Write,
{
    output.write_all(question.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::new(ErrorKind::UnexpectedEof, "no more input"));
    }
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

/// Pretty-print a single task
pub fn print_task<W: Write>(output: &mut W, task: &Task) -> Result<(), Error> {
    let completion = if task.completed() { "✓" } else { " " };
    let due_date = match task.due_date() {
        Some(date) => date.format(DATE_FORMAT).to_string(),
        None => "-".to_string(),
    };
    writeln!(output, "    {} {}\t{}\t{}", completion, task.description(), due_date, task.due_status_now())
}

/// Print a list of tasks, one per line, as the menu's View entry shows them
pub fn print_task_list<W: Write>(output: &mut W, tasks: &[Task]) -> Result<(), Error> {
    if tasks.is_empty() {
        return writeln!(output, "    (no task)");
    }
    for task in tasks {
        print_task(output, task)?;
    }
    Ok(())
}



#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    #[test]
    fn prompt_reads_one_line() {
        let mut input = Cursor::new("first answer\r\nsecond\n");
        let mut output = Vec::new();

        assert_eq!(prompt(&mut input, &mut output, "? ").unwrap(), "first answer");
        assert_eq!(prompt(&mut input, &mut output, "? ").unwrap(), "second");
        let err = prompt(&mut input, &mut output, "? ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
        assert_eq!(String::from_utf8(output).unwrap(), "? ? ? ");
    }

    #[test]
    fn task_list_printing() {
        let mut done = Task::new("buy milk".to_string(), chrono::NaiveDate::from_ymd_opt(2000, 1, 1));
        done.mark_completed();
        let tasks = vec![done, Task::new("call mum".to_string(), None)];

        let mut output = Vec::new();
        print_task_list(&mut output, &tasks).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "    ✓ buy milk\t2000-01-01\tPast due\n      call mum\t-\tNo due date\n");

        let mut output = Vec::new();
        print_task_list(&mut output, &[]).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "    (no task)\n");
    }
}
