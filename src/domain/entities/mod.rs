//! Domain Entities

mod config_item;

pub use config_item::ConfigItem;
