pub mod log;
pub mod store;
pub mod task;
