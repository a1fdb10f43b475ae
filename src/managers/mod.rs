// Managers module
// Builds configured tab bars from YAML descriptions

pub mod tab_bar;

// Re-export YAML configuration types from tab_bar module
pub use tab_bar::{
    TabBarConfigYaml,
    TabConfigYaml,
    FontConfigYaml,
    convert_appearance,
    create_tab_item,
    create_tab_items,
    create_tab_bar_from_config,
};
