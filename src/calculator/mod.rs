//! Keypad calculator core.
//!
//! This module provides:
//! - The input state machine driven by keypad events
//! - Operand evaluation and result formatting
//! - Key-to-event mapping for shells
//! - Copying the display to the clipboard

mod clipboard;
mod engine;
mod error;
mod evaluation;
mod event;
mod operator;
mod snapshot;

pub use clipboard::copy_to_clipboard;
pub use engine::CalculatorEngine;
pub use error::KeyError;
pub use evaluation::{ERROR_DISPLAY, Evaluation, evaluate, format_result, parse_operand};
pub use event::{Digit, Event, KeyBindings};
pub use operator::Operator;
pub use snapshot::EngineSnapshot;
