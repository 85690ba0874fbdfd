use crate::error::{DukeError, Result};
use crate::models::task::Task;

use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Ordered task collection. Indices here are zero-based; users see them 1-based.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No task file at {}, starting empty", path.display());
            return Ok(TaskList::default());
        }

        let content = fs::read_to_string(path)?;
        let list: TaskList = serde_json::from_str(&content)?;
        info!("Loaded {} tasks from {}", list.size(), path.display());
        Ok(list)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;

        // Atomic write: write to .tmp then rename
        let tmp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;

        fs::rename(tmp_path, path)?;
        info!("Saved {} tasks to {}", self.size(), path.display());
        Ok(())
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn delete(&mut self, index: usize) -> Result<Task> {
        self.check_index(index)?;
        Ok(self.tasks.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn size(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn mark_done(&mut self, index: usize) -> Result<&Task> {
        self.check_index(index)?;
        let task = &mut self.tasks[index];
        task.mark_done();
        Ok(task)
    }

    /// Tasks whose description contains `keyword` (case-sensitive), paired
    /// with their zero-based position in the list.
    pub fn find<'a>(&'a self, keyword: &'a str) -> impl Iterator<Item = (usize, &'a Task)> + 'a {
        self.tasks
            .iter()
            .enumerate()
            .filter(move |(_, task)| task.description.contains(keyword))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            Err(DukeError::OutOfRange {
                index: index as i64,
                size: self.tasks.len(),
            })
        }
    }
}
