//! The keypad state machine.
//!
//! Every operation mutates the engine and returns the string the display
//! should show afterwards. Nothing here fails: invalid input either leaves the
//! display unchanged or renders as `Error`.

use tracing::debug;

use super::evaluation::evaluate;
use super::event::{Digit, Event};
use super::operator::Operator;
use super::snapshot::EngineSnapshot;

/// Input state for a single-operation calculator.
#[derive(Clone, Debug, Default)]
pub struct CalculatorEngine {
    /// Operand being typed.
    current_input: String,
    /// Operand committed when an operator was chosen.
    last_operand: String,
    pending_operator: Option<Operator>,
    /// Set right after `equals`, until the next digit.
    result_shown: bool,
    /// What the display currently shows.
    display: String,
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch a keypad event to the matching operation.
    pub fn handle(&mut self, event: Event) -> &str {
        debug!(%event, "handling keypad event");
        match event {
            Event::Digit(d) => self.digit(d),
            Event::Operator(op) => self.choose_operator(op),
            Event::Equals => self.equals(),
            Event::Decimal => self.decimal_point(),
            Event::Clear => self.clear(),
            Event::Backspace => self.backspace(),
            Event::ToggleSign => self.toggle_sign(),
        }
    }

    /// Append a digit, starting a fresh operand if a result is showing.
    pub fn digit(&mut self, d: Digit) -> &str {
        if self.result_shown {
            self.current_input.clear();
            self.result_shown = false;
        }
        self.current_input.push(d.as_char());
        self.show_input()
    }

    /// Append a decimal point unless the operand already has one.
    pub fn decimal_point(&mut self) -> &str {
        if !self.current_input.contains('.') {
            self.current_input.push('.');
        }
        self.show_input()
    }

    pub fn backspace(&mut self) -> &str {
        self.current_input.pop();
        self.show_input()
    }

    /// Flip the sign of a non-empty operand.
    pub fn toggle_sign(&mut self) -> &str {
        if !self.current_input.is_empty() {
            match self.current_input.strip_prefix('-') {
                Some(rest) => self.current_input = rest.to_string(),
                None => self.current_input.insert(0, '-'),
            }
        }
        self.show_input()
    }

    /// Reset to the initial state.
    pub fn clear(&mut self) -> &str {
        *self = Self::default();
        &self.display
    }

    /// Commit the current operand and remember `op`.
    ///
    /// Without a current operand this is a no-op, so a second operator tap
    /// keeps the first operator. The display is not changed.
    pub fn choose_operator(&mut self, op: Operator) -> &str {
        if !self.current_input.is_empty() {
            self.last_operand = std::mem::take(&mut self.current_input);
            self.pending_operator = Some(op);
        }
        &self.display
    }

    /// Apply the pending operator to the two operands.
    ///
    /// Leaves everything untouched when either operand is missing or does not
    /// parse. The formatted result becomes the new current operand; the
    /// committed operand and operator are kept.
    pub fn equals(&mut self) -> &str {
        let Some(evaluation) = evaluate(
            &self.last_operand,
            self.pending_operator,
            &self.current_input,
        ) else {
            return &self.display;
        };

        if evaluation.is_undefined() {
            debug!(expression = %evaluation.expression, "undefined result");
        } else {
            debug!(
                expression = %evaluation.expression,
                value = evaluation.value,
                "evaluated"
            );
        }
        self.current_input = evaluation.display;
        self.result_shown = true;
        self.show_input()
    }

    /// The string the display currently shows.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn last_operand(&self) -> &str {
        &self.last_operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn is_result_shown(&self) -> bool {
        self.result_shown
    }

    /// Capture the current state.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot::from_engine(self)
    }

    fn show_input(&mut self) -> &str {
        self.display.clone_from(&self.current_input);
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(c: char) -> Digit {
        Digit::try_from(c).unwrap()
    }

    fn type_digits(engine: &mut CalculatorEngine, digits: &str) {
        for c in digits.chars() {
            engine.digit(d(c));
        }
    }

    #[test]
    fn test_digits_concatenate() {
        let mut engine = CalculatorEngine::new();
        let mut typed = String::new();
        for c in "9081726354".chars() {
            typed.push(c);
            assert_eq!(engine.digit(d(c)), typed);
        }
    }

    #[test]
    fn test_single_decimal_point() {
        let mut engine = CalculatorEngine::new();
        engine.digit(d('1'));
        assert_eq!(engine.decimal_point(), "1.");
        assert_eq!(engine.decimal_point(), "1.");
        engine.digit(d('5'));
        assert_eq!(engine.decimal_point(), "1.5");
        assert_eq!(engine.current_input().matches('.').count(), 1);
    }

    #[test]
    fn test_decimal_point_on_empty_input() {
        let mut engine = CalculatorEngine::new();
        assert_eq!(engine.decimal_point(), ".");
        assert_eq!(engine.digit(d('5')), ".5");
    }

    #[test]
    fn test_toggle_sign_is_involution() {
        let mut engine = CalculatorEngine::new();
        type_digits(&mut engine, "42");
        assert_eq!(engine.toggle_sign(), "-42");
        assert_eq!(engine.toggle_sign(), "42");
    }

    #[test]
    fn test_toggle_sign_on_empty_is_noop() {
        let mut engine = CalculatorEngine::new();
        assert_eq!(engine.toggle_sign(), "");
        assert_eq!(engine.current_input(), "");
    }

    #[test]
    fn test_backspace_until_empty() {
        let mut engine = CalculatorEngine::new();
        type_digits(&mut engine, "123");
        engine.decimal_point();
        engine.toggle_sign();
        for _ in 0..10 {
            engine.backspace();
        }
        assert_eq!(engine.backspace(), "");
        assert_eq!(engine.current_input(), "");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut engine = CalculatorEngine::new();
        type_digits(&mut engine, "5");
        engine.choose_operator(Operator::Add);
        type_digits(&mut engine, "3");
        engine.equals();
        assert_eq!(engine.clear(), "");
        assert_eq!(engine.pending_operator(), None);
        assert_eq!(engine.last_operand(), "");
        assert!(!engine.is_result_shown());
    }

    #[test]
    fn test_addition() {
        let mut engine = CalculatorEngine::new();
        engine.digit(d('5'));
        engine.choose_operator(Operator::Add);
        engine.digit(d('3'));
        assert_eq!(engine.equals(), "8.00");
        assert!(engine.is_result_shown());
    }

    #[test]
    fn test_division_by_zero_shows_error() {
        let mut engine = CalculatorEngine::new();
        engine.digit(d('1'));
        engine.choose_operator(Operator::Divide);
        engine.digit(d('0'));
        assert_eq!(engine.equals(), "Error");
    }

    #[test]
    fn test_large_result_is_scientific() {
        let mut engine = CalculatorEngine::new();
        engine.digit(d('2'));
        engine.choose_operator(Operator::Multiply);
        type_digits(&mut engine, "2000000");
        assert_eq!(engine.equals(), "4.00e+06");
    }

    #[test]
    fn test_equals_without_operands_is_noop() {
        let mut engine = CalculatorEngine::new();
        assert_eq!(engine.equals(), "");

        type_digits(&mut engine, "7");
        assert_eq!(engine.equals(), "7");
        assert!(!engine.is_result_shown());
    }

    #[test]
    fn test_equals_with_unparseable_operand_is_noop() {
        let mut engine = CalculatorEngine::new();
        engine.digit(d('5'));
        engine.choose_operator(Operator::Add);
        engine.toggle_sign();
        engine.decimal_point();
        assert_eq!(engine.equals(), ".");
        assert!(!engine.is_result_shown());
    }

    #[test]
    fn test_choose_operator_keeps_display() {
        let mut engine = CalculatorEngine::new();
        type_digits(&mut engine, "12");
        assert_eq!(engine.choose_operator(Operator::Subtract), "12");
        assert_eq!(engine.current_input(), "");
        assert_eq!(engine.last_operand(), "12");
    }

    #[test]
    fn test_second_operator_tap_keeps_first() {
        let mut engine = CalculatorEngine::new();
        engine.digit(d('6'));
        engine.choose_operator(Operator::Add);
        engine.choose_operator(Operator::Multiply);
        assert_eq!(engine.pending_operator(), Some(Operator::Add));
        engine.digit(d('2'));
        assert_eq!(engine.equals(), "8.00");
    }

    #[test]
    fn test_choose_operator_on_empty_input_is_noop() {
        let mut engine = CalculatorEngine::new();
        engine.choose_operator(Operator::Divide);
        assert_eq!(engine.pending_operator(), None);
        assert_eq!(engine.last_operand(), "");
    }

    #[test]
    fn test_digit_after_result_starts_new_operand() {
        let mut engine = CalculatorEngine::new();
        engine.digit(d('5'));
        engine.choose_operator(Operator::Add);
        engine.digit(d('3'));
        engine.equals();
        assert_eq!(engine.digit(d('9')), "9");
        assert!(!engine.is_result_shown());
        assert_eq!(engine.last_operand(), "5");
        assert_eq!(engine.pending_operator(), Some(Operator::Add));
        assert_eq!(engine.equals(), "14.00");
    }

    #[test]
    fn test_repeated_equals_reuses_result_as_operand() {
        let mut engine = CalculatorEngine::new();
        engine.digit(d('5'));
        engine.choose_operator(Operator::Add);
        engine.digit(d('3'));
        assert_eq!(engine.equals(), "8.00");
        assert_eq!(engine.equals(), "13.00");
    }

    #[test]
    fn test_repeated_equals_after_error_is_noop() {
        let mut engine = CalculatorEngine::new();
        engine.digit(d('1'));
        engine.choose_operator(Operator::Divide);
        engine.digit(d('0'));
        assert_eq!(engine.equals(), "Error");
        assert_eq!(engine.equals(), "Error");
        assert_eq!(engine.current_input(), "Error");
    }

    #[test]
    fn test_operator_after_result_chains() {
        let mut engine = CalculatorEngine::new();
        engine.digit(d('4'));
        engine.choose_operator(Operator::Multiply);
        engine.digit(d('2'));
        engine.equals();
        engine.choose_operator(Operator::Subtract);
        assert_eq!(engine.last_operand(), "8.00");
        engine.digit(d('1'));
        assert_eq!(engine.equals(), "7.00");
    }

    #[test]
    fn test_result_ties_round_up() {
        let mut engine = CalculatorEngine::new();
        engine.digit(d('1'));
        engine.choose_operator(Operator::Divide);
        engine.digit(d('8'));
        assert_eq!(engine.equals(), "0.13");

        engine.clear();
        engine.digit(d('1'));
        engine.decimal_point();
        type_digits(&mut engine, "005");
        engine.choose_operator(Operator::Multiply);
        engine.digit(d('1'));
        assert_eq!(engine.equals(), "1.01");
    }

    #[test]
    fn test_handle_dispatches_events() {
        let mut engine = CalculatorEngine::new();
        engine.handle(Event::Digit(d('9')));
        engine.handle(Event::ToggleSign);
        engine.handle(Event::Operator(Operator::Subtract));
        engine.handle(Event::Digit(d('1')));
        assert_eq!(engine.handle(Event::Equals), "-10.00");
        assert_eq!(engine.handle(Event::Clear), "");
    }
}
