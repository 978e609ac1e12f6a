//! Configuration loaded from `config.toml`.
//!
//! ```toml
//! [logging]
//! level = "warn"
//!
//! [shell]
//! prompt = "> "
//! trace = false
//!
//! [keys]
//! multiply = ["X"]
//! toggle_sign = ["n"]
//! backspace = ["b"]
//! ```
//!
//! Key aliases are added on top of the default bindings. Digits and
//! whitespace cannot be bound.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::calculator::{Event, KeyBindings, Operator};

const APP_DIR: &str = "calcpad";
const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid key alias {0:?}: digits and whitespace cannot be bound")]
    InvalidAlias(String),

    #[error("key '{key}' is bound to both {first} and {second}")]
    ConflictingBinding {
        key: char,
        first: Event,
        second: Event,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub shell: ShellConfig,
    pub keys: KeyAliases,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub prompt: String,
    /// Print the display after every key press instead of once per line.
    pub trace: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            trace: false,
        }
    }
}

/// Extra keys per event, on top of the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KeyAliases {
    pub add: Vec<char>,
    pub subtract: Vec<char>,
    pub multiply: Vec<char>,
    pub divide: Vec<char>,
    pub equals: Vec<char>,
    pub decimal: Vec<char>,
    pub clear: Vec<char>,
    pub backspace: Vec<char>,
    pub toggle_sign: Vec<char>,
}

impl KeyAliases {
    fn entries(&self) -> [(&[char], Event); 9] {
        [
            (self.add.as_slice(), Event::Operator(Operator::Add)),
            (self.subtract.as_slice(), Event::Operator(Operator::Subtract)),
            (self.multiply.as_slice(), Event::Operator(Operator::Multiply)),
            (self.divide.as_slice(), Event::Operator(Operator::Divide)),
            (self.equals.as_slice(), Event::Equals),
            (self.decimal.as_slice(), Event::Decimal),
            (self.clear.as_slice(), Event::Clear),
            (self.backspace.as_slice(), Event::Backspace),
            (self.toggle_sign.as_slice(), Event::ToggleSign),
        ]
    }
}

impl Config {
    /// Default location: `<config dir>/calcpad/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::read(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Build the key map: defaults plus configured aliases.
    pub fn key_bindings(&self) -> Result<KeyBindings, ConfigError> {
        let mut bindings = KeyBindings::default();
        for (keys, event) in self.keys.entries() {
            for &key in keys {
                if key.is_ascii_digit() || key.is_whitespace() {
                    return Err(ConfigError::InvalidAlias(key.to_string()));
                }
                if let Some(existing) = bindings.bind(key, event) {
                    return Err(ConfigError::ConflictingBinding {
                        key,
                        first: existing,
                        second: event,
                    });
                }
            }
        }
        Ok(bindings)
    }
}
