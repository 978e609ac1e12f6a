//! Point-in-time view of the engine, for printing and serialization.

use serde::Serialize;

use super::engine::CalculatorEngine;
use super::evaluation::ERROR_DISPLAY;
use super::operator::Operator;

/// Copy of the engine state at one moment.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EngineSnapshot {
    /// What the display shows.
    pub display: String,
    /// Operand being typed.
    pub current_input: String,
    /// Operand committed by the last operator press.
    pub last_operand: String,
    /// Operator waiting for its second operand.
    pub pending_operator: Option<Operator>,
    /// Whether the display holds an evaluated result.
    pub result_shown: bool,
    /// Whether the shown result is the error text.
    pub is_error: bool,
}

impl EngineSnapshot {
    pub fn from_engine(engine: &CalculatorEngine) -> Self {
        Self {
            display: engine.display().to_string(),
            current_input: engine.current_input().to_string(),
            last_operand: engine.last_operand().to_string(),
            pending_operator: engine.pending_operator(),
            result_shown: engine.is_result_shown(),
            is_error: engine.is_result_shown() && engine.display() == ERROR_DISPLAY,
        }
    }

    /// Get the text to copy to clipboard.
    /// Returns `None` when the display is empty.
    pub fn text_for_clipboard(&self) -> Option<&str> {
        if self.display.is_empty() {
            None
        } else {
            Some(&self.display)
        }
    }

    /// One-line human readable summary, e.g. `5 + [3]`.
    pub fn summary(&self) -> String {
        let mut line = String::new();
        if let Some(op) = self.pending_operator {
            line.push_str(&format!("{} {} ", self.last_operand, op));
        }
        line.push_str(&format!("[{}]", self.current_input));
        if self.result_shown {
            line.push_str(" (result)");
        }
        line
    }
}
