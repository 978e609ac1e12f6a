//! Keypad calculator: an input state machine for single binary operations,
//! plus the configuration and terminal shell that drive it.

pub mod calculator;
pub mod config;
pub mod input;
pub mod logging;
pub mod shell;

pub use calculator::{CalculatorEngine, EngineSnapshot, Event, KeyBindings, Operator};
pub use config::{Config, ConfigError};
pub use shell::Shell;
