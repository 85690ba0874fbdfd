pub mod app;
pub mod handlers;
pub mod ui;
pub mod widgets;
