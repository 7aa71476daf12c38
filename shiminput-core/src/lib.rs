pub mod button_map;
pub mod config;
pub mod frame;
pub mod tracker;

mod internal;

pub use button_map::ActiveButtonMap;
pub use config::{ConfigError, TrackerConfig};
pub use frame::{FrameResult, ScreenPoint};
pub use tracker::InputStateTracker;

pub use shiminput_types as types;
