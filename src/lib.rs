pub mod config;
pub mod controller;
pub mod event;
pub mod remote;
pub mod state;
pub mod ui;
pub mod util;
