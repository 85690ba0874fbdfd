//! Turns a raw line of user text into a [`Command`].
//!
//! Dispatch is by literal prefix, checked in a fixed order; the first match wins.

use crate::command::Command;
use crate::error::{DukeError, Result};
use crate::models::store::TaskList;
use crate::models::task::{parse_date_time, Task};
use log::debug;

pub const EXIT_PREFIX: &str = "bye";
pub const LIST_PREFIX: &str = "list";
pub const TODO_PREFIX: &str = "todo";
pub const DEADLINE_PREFIX: &str = "deadline";
pub const EVENT_PREFIX: &str = "event";
pub const DONE_PREFIX: &str = "done";
pub const DELETE_PREFIX: &str = "delete";
pub const FIND_PREFIX: &str = "find";
pub const HELP_PREFIX: &str = "help";

const DATE_TIME_HINT: &str = "Please provide date time in the format yyyy-MM-dd HHmm, e.g. 2021-08-04 2359";

pub fn is_exit(input: &str) -> bool {
    input.starts_with(EXIT_PREFIX)
}

/// Parse `input` into a command.
///
/// `tasks` is consulted only by `delete`, which rejects out-of-range numbers
/// here; `done` leaves its bounds check to execution.
pub fn parse(input: &str, tasks: &TaskList) -> Result<Command> {
    let command = if input.starts_with(LIST_PREFIX) {
        Command::List
    } else if let Some(rest) = input.strip_prefix(DONE_PREFIX) {
        parse_done(rest)?
    } else if let Some(rest) = input.strip_prefix(TODO_PREFIX) {
        parse_todo(rest)?
    } else if let Some(rest) = input.strip_prefix(DEADLINE_PREFIX) {
        parse_deadline(rest)?
    } else if let Some(rest) = input.strip_prefix(EVENT_PREFIX) {
        parse_event(rest)?
    } else if let Some(rest) = input.strip_prefix(DELETE_PREFIX) {
        parse_delete(rest, tasks)?
    } else if let Some(rest) = input.strip_prefix(FIND_PREFIX) {
        parse_find(rest)?
    } else if input.starts_with(EXIT_PREFIX) {
        Command::Exit
    } else if let Some(rest) = input.strip_prefix(HELP_PREFIX) {
        Command::Help(trim(rest).to_string())
    } else {
        return Err(DukeError::parse("Sorry, I don't understand that command..."));
    };

    debug!("Parsed {:?} from {:?}", command, input);
    Ok(command)
}

/// Strip ASCII control characters and spaces from both ends. Other Unicode
/// whitespace such as U+00A0 is kept as payload.
fn trim(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

/// User-facing task number (1-based) to a zero-based index. Accepts the same
/// range as a 32-bit signed integer, so `done 0` or `done -3` still parse.
fn parse_task_number(payload: &str) -> Option<i64> {
    payload.parse::<i32>().ok().map(|n| i64::from(n) - 1)
}

fn parse_done(rest: &str) -> Result<Command> {
    let payload = trim(rest);
    if payload.is_empty() {
        return Err(DukeError::parse("Please indicate a task number to mark as done!"));
    }
    match parse_task_number(payload) {
        Some(index) => Ok(Command::MarkDone(index)),
        None => Err(DukeError::parse("Please indicate a valid task number to mark as done!")),
    }
}

fn parse_todo(rest: &str) -> Result<Command> {
    let payload = trim(rest);
    if payload.is_empty() {
        return Err(DukeError::parse("Todo description cannot be empty!"));
    }
    Ok(Command::Add(Task::todo(payload)))
}

fn parse_deadline(rest: &str) -> Result<Command> {
    let (content, due) = split_on_separator(
        rest,
        DEADLINE_PREFIX,
        "/by",
        "Please indicate the deadline description!",
        "Please indicate the due date!",
    )?;
    let by = parse_date_time(due).ok_or_else(|| DukeError::parse(DATE_TIME_HINT))?;
    Ok(Command::Add(Task::deadline(content, by)))
}

fn parse_event(rest: &str) -> Result<Command> {
    let (content, date) = split_on_separator(
        rest,
        EVENT_PREFIX,
        "/at",
        "Please indicate the event description!",
        "Please indicate the event date!",
    )?;
    let at = parse_date_time(date).ok_or_else(|| DukeError::parse(DATE_TIME_HINT))?;
    Ok(Command::Add(Task::event(content, at)))
}

/// Split a payload at the last occurrence of `separator` into trimmed
/// description and date parts, both required to be non-empty.
fn split_on_separator<'a>(
    rest: &'a str,
    prefix: &str,
    separator: &str,
    missing_description: &str,
    missing_date: &str,
) -> Result<(&'a str, &'a str)> {
    let payload = trim(rest);
    let Some(split_at) = payload.rfind(separator) else {
        return Err(DukeError::parse(format!(
            "Please indicate in this format: {} [description] {} [due date].",
            prefix, separator
        )));
    };

    let content = trim(&payload[..split_at]);
    let date = trim(&payload[split_at + separator.len()..]);
    if content.is_empty() {
        return Err(DukeError::parse(missing_description));
    }
    if date.is_empty() {
        return Err(DukeError::parse(missing_date));
    }
    Ok((content, date))
}

fn parse_delete(rest: &str, tasks: &TaskList) -> Result<Command> {
    let payload = trim(rest);
    if payload.is_empty() {
        return Err(DukeError::parse("Please indicate a task number to delete!"));
    }
    let index = parse_task_number(payload)
        .ok_or_else(|| DukeError::parse("Please indicate a valid task number to delete!"))?;
    match usize::try_from(index) {
        Ok(index) if index < tasks.size() => Ok(Command::Delete(index)),
        _ => Err(DukeError::parse("404 Task not found")),
    }
}

fn parse_find(rest: &str) -> Result<Command> {
    let payload = trim(rest);
    if payload.is_empty() {
        return Err(DukeError::parse("Please indicate a keyword to find tasks!"));
    }
    Ok(Command::Find(payload.to_string()))
}
