pub mod devices;
pub mod header;
pub mod player;
pub mod results;
pub mod search;
pub mod status;
