use crate::command::Outcome;
use crate::error::Result;
use crate::models::log::append_log;
use crate::models::store::TaskList;
use crate::parser::input::{is_exit, parse};
use crate::storage::paths::{history_log_path, tasks_file_path};

use log::{debug, warn};
use std::path::{Path, PathBuf};

pub const GREETING: &str = "Hello! I'm Duke\nWhat can I do for you?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub message: String,
    pub is_exit: bool,
    pub is_error: bool,
}

/// One interpreter session: the task list plus where it is persisted.
pub struct Duke {
    tasks: TaskList,
    data_dir: PathBuf,
}

impl Duke {
    /// Load the task list from `data_dir`, starting empty if nothing is saved yet.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let tasks = TaskList::load(&tasks_file_path(data_dir))?;
        Ok(Self {
            tasks,
            data_dir: data_dir.to_path_buf(),
        })
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Parse and run one line of input. Errors never escape; they become the reply.
    pub fn respond(&mut self, input: &str) -> Reply {
        let is_exit = is_exit(input);
        match self.run(input) {
            Ok(message) => Reply {
                message,
                is_exit,
                is_error: false,
            },
            Err(err) => {
                debug!("Command {:?} failed: {}", input, err);
                Reply {
                    message: err.to_string(),
                    is_exit,
                    is_error: true,
                }
            }
        }
    }

    fn run(&mut self, input: &str) -> Result<String> {
        let command = parse(input, &self.tasks)?;
        let outcome = command.execute(&mut self.tasks)?;
        if outcome.is_mutation() {
            self.persist(&outcome)?;
        }
        Ok(outcome.message)
    }

    fn persist(&self, outcome: &Outcome) -> Result<()> {
        self.tasks.save(&tasks_file_path(&self.data_dir))?;
        if let Some(event) = &outcome.event {
            if let Err(err) = append_log(&history_log_path(&self.data_dir), event) {
                warn!("Failed to append history log: {}", err);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_become_replies() {
        let dir = tempfile::tempdir().unwrap();
        let mut duke = Duke::open(dir.path()).unwrap();

        let reply = duke.respond("dance");
        assert!(reply.is_error);
        assert!(!reply.is_exit);
        assert_eq!(reply.message, "Sorry, I don't understand that command...");
    }

    #[test]
    fn test_done_out_of_range_at_execution() {
        let dir = tempfile::tempdir().unwrap();
        let mut duke = Duke::open(dir.path()).unwrap();
        duke.respond("todo a");
        duke.respond("todo b");

        let reply = duke.respond("done 5");
        assert!(reply.is_error);
        assert_eq!(reply.message, "404 Task not found!");

        let reply = duke.respond("delete 5");
        assert_eq!(reply.message, "404 Task not found");
    }

    #[test]
    fn test_exit_reply() {
        let dir = tempfile::tempdir().unwrap();
        let mut duke = Duke::open(dir.path()).unwrap();
        let reply = duke.respond("bye");
        assert!(reply.is_exit);
        assert!(!reply.is_error);
        assert_eq!(reply.message, "Bye. Hope to see you again soon!");
    }

    #[test]
    fn test_mutations_are_saved() {
        let dir = tempfile::tempdir().unwrap();
        let mut duke = Duke::open(dir.path()).unwrap();
        duke.respond("todo read book");
        duke.respond("deadline return book /by 2021-08-04 2359");
        duke.respond("done 1");

        let reloaded = Duke::open(dir.path()).unwrap();
        assert_eq!(reloaded.tasks(), duke.tasks());
        assert!(reloaded.tasks().get(0).unwrap().is_done);

        let history = std::fs::read_to_string(history_log_path(dir.path())).unwrap();
        assert_eq!(history.lines().count(), 3);
    }

    #[test]
    fn test_queries_do_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let mut duke = Duke::open(dir.path()).unwrap();
        duke.respond("list");
        duke.respond("find x");
        duke.respond("help");
        assert!(!tasks_file_path(dir.path()).exists());
    }
}
