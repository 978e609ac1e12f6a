//! Terminal front end for the calculator.
//!
//! Maps typed characters to keypad events through the configured key
//! bindings and prints whatever the engine returns for the display.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::calculator::{
    CalculatorEngine, Event, KeyBindings, KeyError, Operator, copy_to_clipboard,
};
use crate::input::{Command, Line, classify_line};

/// Whether the read loop should keep going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A calculator session bound to one set of key bindings.
pub struct Shell {
    engine: CalculatorEngine,
    bindings: KeyBindings,
    trace: bool,
}

impl Shell {
    pub fn new(bindings: KeyBindings, trace: bool) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            bindings,
            trace,
        }
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Press a single key.
    pub fn press(&mut self, key: char) -> Result<&str, KeyError> {
        let event = self.bindings.event_for(key)?;
        Ok(self.engine.handle(event))
    }

    /// Press a run of keys in order. Unbound keys are logged and skipped.
    ///
    /// With tracing enabled every accepted key prints the display.
    pub fn feed<W: Write>(&mut self, keys: &[char], out: &mut W) -> io::Result<()> {
        let trace = self.trace;
        for &key in keys {
            match self.press(key) {
                Ok(display) => {
                    if trace {
                        writeln!(out, "{key} -> {display}")?;
                    }
                }
                Err(e) => warn!("skipping key: {e}"),
            }
        }
        Ok(())
    }

    /// Read lines until end of input or a quit command.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
        prompt: &str,
    ) -> io::Result<()> {
        info!("calculator session started");
        write!(out, "{prompt}")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            let flow = match classify_line(&line) {
                Line::Empty => Flow::Continue,
                Line::Command(command) => self.run_command(command, out)?,
                Line::Keys(keys) => {
                    self.feed(&keys, out)?;
                    if !self.trace {
                        writeln!(out, "{}", self.engine.display())?;
                    }
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
            write!(out, "{prompt}")?;
            out.flush()?;
        }

        info!("calculator session ended");
        Ok(())
    }

    fn run_command<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => write!(out, "{}", self.help())?,
            Command::State => writeln!(out, "{}", self.engine.snapshot().summary())?,
            Command::Copy => match copy_to_clipboard(&self.engine.snapshot()) {
                Ok(text) => writeln!(out, "copied {text}")?,
                Err(message) => {
                    warn!("{message}");
                    writeln!(out, "{message}")?;
                }
            },
        }
        Ok(Flow::Continue)
    }

    /// Key reference built from the active bindings.
    pub fn help(&self) -> String {
        let mut rows = vec![("digits", "0-9".to_string())];
        for op in Operator::ALL {
            let name = match op {
                Operator::Add => "add",
                Operator::Subtract => "subtract",
                Operator::Multiply => "multiply",
                Operator::Divide => "divide",
            };
            rows.push((name, self.key_list(Event::Operator(op))));
        }
        rows.push(("equals", self.key_list(Event::Equals)));
        rows.push(("decimal", self.key_list(Event::Decimal)));
        rows.push(("backspace", self.key_list(Event::Backspace)));
        rows.push(("toggle sign", self.key_list(Event::ToggleSign)));
        rows.push(("clear", self.key_list(Event::Clear)));

        let mut help = String::from("Keys:\n");
        for (name, keys) in rows {
            help.push_str(&format!("  {name:<12}{keys}\n"));
        }
        help.push_str("Commands: state, copy, help, quit\n");
        help
    }

    fn key_list(&self, event: Event) -> String {
        self.bindings
            .keys_for(event)
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
