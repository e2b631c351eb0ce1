pub mod auth;
pub mod devices;
pub mod playback;
pub mod search;

pub use auth::AuthController;
pub use devices::DeviceController;
pub use playback::{PlaybackController, ToggleOutcome};
pub use search::SearchController;
