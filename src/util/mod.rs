pub mod colors;
pub mod format;
pub mod hook;
pub mod log;
pub mod task;
