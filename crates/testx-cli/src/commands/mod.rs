//! Interactive menu commands.

pub mod menu;
pub mod quiz;
pub mod settings;
