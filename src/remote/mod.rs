pub mod error;
#[cfg(test)]
pub mod fake;
pub mod model;
pub mod service;
