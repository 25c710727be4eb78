pub mod config;
pub mod delta;
pub mod display;
pub mod logging;
pub mod monitor;
pub mod system;
