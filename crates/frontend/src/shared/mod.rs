pub mod api_utils;
pub mod components;
pub mod config;
pub mod confirm;
pub mod icons;
pub mod notifications;
pub mod state;

#[cfg(test)]
pub mod testing;
