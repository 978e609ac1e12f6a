use thiserror::Error;

/// Errors raised while turning raw key input into calculator events.
///
/// The engine itself never fails; these only surface at the input boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("'{0}' is not a digit")]
    InvalidDigit(char),

    #[error("no event bound to key '{0}'")]
    UnboundKey(char),
}
