pub mod cli;
pub mod command;
pub mod console;
pub mod duke;
pub mod error;
pub mod models;
pub mod parser;
pub mod storage;
pub mod tui;
