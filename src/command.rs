use crate::error::{DukeError, Result};
use crate::models::log::{EventAction, LogEvent};
use crate::models::store::TaskList;
use crate::models::task::Task;

/// A parsed user intent. Indices are zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Task),
    Delete(usize),
    /// May be out of range; checked on execution.
    MarkDone(i64),
    List,
    Find(String),
    Help(String),
    Exit,
}

/// Result of running a command: the reply text, plus a history event when
/// the task list was changed and needs saving.
#[derive(Debug)]
pub struct Outcome {
    pub message: String,
    pub event: Option<LogEvent>,
}

impl Outcome {
    fn reply(message: String) -> Self {
        Self { message, event: None }
    }

    fn mutation(message: String, action: EventAction, details: String) -> Self {
        Self {
            message,
            event: Some(LogEvent::new(action, details)),
        }
    }

    pub fn is_mutation(&self) -> bool {
        self.event.is_some()
    }
}

impl Command {
    pub fn execute(self, tasks: &mut TaskList) -> Result<Outcome> {
        match self {
            Command::Add(task) => {
                let details = format!("Added: {}", task);
                let message = format!(
                    "Got it. I've added this task:\n  {}\n{}",
                    task,
                    count_line(tasks.size() + 1)
                );
                tasks.add(task);
                Ok(Outcome::mutation(message, EventAction::Added, details))
            }
            Command::Delete(index) => {
                let removed = tasks.delete(index)?;
                let message = format!(
                    "Noted. I've removed this task:\n  {}\n{}",
                    removed,
                    count_line(tasks.size())
                );
                Ok(Outcome::mutation(message, EventAction::Deleted, format!("Deleted: {}", removed)))
            }
            Command::MarkDone(index) => {
                let slot = usize::try_from(index).map_err(|_| DukeError::OutOfRange {
                    index,
                    size: tasks.size(),
                })?;
                let task = tasks.mark_done(slot)?;
                Ok(Outcome::mutation(
                    format!("Nice! I've marked this task as done:\n  {}", task),
                    EventAction::Completed,
                    format!("Completed: {}", task),
                ))
            }
            Command::List => {
                if tasks.is_empty() {
                    return Ok(Outcome::reply("You have no tasks in your list!".to_string()));
                }
                let mut message = String::from("Here are the tasks in your list:");
                for (i, task) in tasks.iter().enumerate() {
                    message.push_str(&format!("\n{}.{}", i + 1, task));
                }
                Ok(Outcome::reply(message))
            }
            Command::Find(keyword) => {
                let mut matches = tasks.find(&keyword).peekable();
                if matches.peek().is_none() {
                    return Ok(Outcome::reply(format!("No matching tasks found for \"{}\"!", keyword)));
                }
                let mut message = String::from("Here are the matching tasks in your list:");
                for (i, task) in matches {
                    message.push_str(&format!("\n{}.{}", i + 1, task));
                }
                Ok(Outcome::reply(message))
            }
            Command::Help(topic) => Ok(Outcome::reply(help_text(&topic))),
            Command::Exit => Ok(Outcome::reply("Bye. Hope to see you again soon!".to_string())),
        }
    }
}

fn count_line(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("Now you have {} {} in the list.", count, noun)
}

const HELP_ENTRIES: &[(&str, &str, &str)] = &[
    ("list", "list", "list"),
    ("todo", "todo [description]", "todo read book"),
    ("deadline", "deadline [description] /by [yyyy-MM-dd HHmm]", "deadline return book /by 2021-08-04 2359"),
    ("event", "event [description] /at [yyyy-MM-dd HHmm]", "event project meeting /at 2021-08-06 1400"),
    ("done", "done [task number]", "done 2"),
    ("delete", "delete [task number]", "delete 3"),
    ("find", "find [keyword]", "find book"),
    ("help", "help [command]", "help deadline"),
    ("bye", "bye", "bye"),
];

fn help_text(topic: &str) -> String {
    if topic.is_empty() {
        let mut text = String::from("Here are the commands I understand:");
        for (_, usage, _) in HELP_ENTRIES {
            text.push_str(&format!("\n  {}", usage));
        }
        text.push_str("\nType \"help [command]\" for an example.");
        return text;
    }

    match HELP_ENTRIES.iter().find(|(name, _, _)| *name == topic) {
        Some((_, usage, example)) => format!("Usage: {}\nExample: {}", usage, example),
        None => format!(
            "Sorry, I have no help on \"{}\". Type \"help\" to see all commands.",
            topic
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tasks() -> TaskList {
        let mut list = TaskList::new();
        list.add(Task::todo("read book"));
        list.add(Task::todo("buy milk"));
        list
    }

    #[test]
    fn test_add() {
        let mut tasks = TaskList::new();
        let outcome = Command::Add(Task::todo("read book")).execute(&mut tasks).unwrap();
        assert_eq!(
            outcome.message,
            "Got it. I've added this task:\n  [T][ ] read book\nNow you have 1 task in the list."
        );
        assert!(outcome.is_mutation());
        assert_eq!(outcome.event.unwrap().action, EventAction::Added);
        assert_eq!(tasks.size(), 1);
    }

    #[test]
    fn test_delete() {
        let mut tasks = two_tasks();
        let outcome = Command::Delete(0).execute(&mut tasks).unwrap();
        assert_eq!(
            outcome.message,
            "Noted. I've removed this task:\n  [T][ ] read book\nNow you have 1 task in the list."
        );
        assert_eq!(tasks.get(0).unwrap().description, "buy milk");
    }

    #[test]
    fn test_mark_done() {
        let mut tasks = two_tasks();
        let outcome = Command::MarkDone(1).execute(&mut tasks).unwrap();
        assert_eq!(outcome.message, "Nice! I've marked this task as done:\n  [T][X] buy milk");
        assert!(tasks.get(1).unwrap().is_done);
    }

    #[test]
    fn test_mark_done_out_of_range() {
        let mut tasks = two_tasks();
        let err = Command::MarkDone(4).execute(&mut tasks).unwrap_err();
        assert_eq!(err.to_string(), "404 Task not found!");
        let err = Command::MarkDone(-1).execute(&mut tasks).unwrap_err();
        assert_eq!(err.to_string(), "404 Task not found!");
        assert!(tasks.iter().all(|t| !t.is_done));
    }

    #[test]
    fn test_list() {
        let mut tasks = TaskList::new();
        let outcome = Command::List.execute(&mut tasks).unwrap();
        assert_eq!(outcome.message, "You have no tasks in your list!");

        let mut tasks = two_tasks();
        let outcome = Command::List.execute(&mut tasks).unwrap();
        assert_eq!(
            outcome.message,
            "Here are the tasks in your list:\n1.[T][ ] read book\n2.[T][ ] buy milk"
        );
        assert!(!outcome.is_mutation());
    }

    #[test]
    fn test_find_numbers_by_list_position() {
        let mut tasks = two_tasks();
        let outcome = Command::Find("milk".into()).execute(&mut tasks).unwrap();
        assert_eq!(outcome.message, "Here are the matching tasks in your list:\n2.[T][ ] buy milk");

        let again = Command::Find("milk".into()).execute(&mut tasks).unwrap();
        assert_eq!(outcome.message, again.message);

        let none = Command::Find("Milk".into()).execute(&mut tasks).unwrap();
        assert_eq!(none.message, "No matching tasks found for \"Milk\"!");
    }

    #[test]
    fn test_help() {
        let mut tasks = TaskList::new();
        let overview = Command::Help(String::new()).execute(&mut tasks).unwrap();
        assert!(overview.message.starts_with("Here are the commands I understand:"));
        assert!(overview.message.contains("deadline [description] /by [yyyy-MM-dd HHmm]"));

        let topic = Command::Help("find".into()).execute(&mut tasks).unwrap();
        assert_eq!(topic.message, "Usage: find [keyword]\nExample: find book");

        let unknown = Command::Help("dance".into()).execute(&mut tasks).unwrap();
        assert!(unknown.message.starts_with("Sorry, I have no help on \"dance\"."));
    }

    #[test]
    fn test_exit() {
        let mut tasks = TaskList::new();
        let outcome = Command::Exit.execute(&mut tasks).unwrap();
        assert_eq!(outcome.message, "Bye. Hope to see you again soon!");
        assert!(!outcome.is_mutation());
    }
}
