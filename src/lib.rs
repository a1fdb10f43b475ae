// Mini Tab Bar Library
// A selectable tab bar widget for ratatui terminal user interfaces

// Core infrastructure - handles, shared appearance, events
pub mod core;
// GUI elements (the bar and its item views)
pub mod elements;
// YAML configuration helpers
pub mod managers;
// Utilities and helpers
pub mod utilities;

// Configuration file loading
pub mod config;

// Re-export commonly used items
// Note: tab_bar exists in both elements and managers but refers to different
// things (the widget vs its YAML configuration), so disambiguation is expected
pub use self::core::*;
#[allow(ambiguous_glob_reexports)]
pub use elements::*;
#[allow(ambiguous_glob_reexports)]
pub use managers::*;
pub use utilities::*;
pub use config::{load_config, ConfigError, DemoConfig};
