//! Command implementations

mod config;
mod replay;

pub use config::{config_init, config_show};
pub use replay::replay;
