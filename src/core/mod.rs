// Core infrastructure module
// Provides foundational types the tab bar elements depend on

pub mod appearance;
pub mod events;
pub mod item_handle;

pub use appearance::{TabBarAppearance, TabFont, DEFAULT_INACTIVE_COLOR, DEFAULT_TINT_COLOR};
pub use events::{AppEvent, EventHandler, MiniTabBarDelegate};
pub use item_handle::{HandleAllocator, ItemHandle};
