// GUI Elements module
// Visual components that render the tab bar

pub mod tab_bar;
pub mod tab_item;
pub mod tab_item_view;

pub use tab_bar::*;
pub use tab_item::*;
pub use tab_item_view::*;
