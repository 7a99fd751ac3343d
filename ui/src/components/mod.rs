//! Shared building blocks for the dashboard screens.
pub mod empty_state;
pub mod gas_bar;
pub mod hash_display;
pub mod pico;
