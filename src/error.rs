use thiserror::Error;

pub type Result<T> = std::result::Result<T, DukeError>;

#[derive(Debug, Error)]
pub enum DukeError {
    /// Malformed or unrecognised command text. The message is shown to the user as-is.
    #[error("{0}")]
    Parse(String),

    #[error("404 Task not found!")]
    OutOfRange { index: i64, size: usize },

    #[error("Failed to access task data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Task data is corrupted: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not determine data directory. Please set DUKE_DATA_DIR environment variable.")]
    DataDir,
}

impl DukeError {
    pub fn parse(message: impl Into<String>) -> Self {
        DukeError::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(DukeError::parse("Todo description cannot be empty!").to_string(), "Todo description cannot be empty!");
        assert_eq!(DukeError::OutOfRange { index: 4, size: 2 }.to_string(), "404 Task not found!");
    }
}
