use colored::Colorize;
use rustyline::error::ReadlineError;
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::io;

/// A currency code typed by the user that does not match any known currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyError {
    UnknownCode(i64),
}
impl Error for CurrencyError {}
impl Display for CurrencyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::UnknownCode(code) => write!(f, "Unknown currency code {}", code),
        }
    }
}

/// Input that can't be understood. The menu does not recover from these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    NotAnOption(String),
    NotAnAmount(String),
    EndOfInput,
}
impl Error for InputError {}
impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotAnOption(x) => write!(
                f,
                "Expected a whole number, got {}",
                format!("{:?}", x).red().bold()
            ),
            InputError::NotAnAmount(x) => write!(
                f,
                "Expected an amount, got {}",
                format!("{:?}", x).red().bold()
            ),
            InputError::EndOfInput => write!(f, "Unexpected end of input"),
        }
    }
}

/// Anything that ends a session abnormally
#[derive(Debug)]
pub enum BankError {
    Input(InputError),
    Io(io::Error),
    Readline(ReadlineError),
}
impl Error for BankError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BankError::Input(e) => Some(e),
            BankError::Io(e) => Some(e),
            BankError::Readline(e) => Some(e),
        }
    }
}
impl Display for BankError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BankError::Input(e) => write!(f, "{}", e),
            BankError::Io(e) => write!(f, "{} {}", "I/O error:".bold(), e),
            BankError::Readline(e) => write!(f, "{} {}", "Terminal error:".bold(), e),
        }
    }
}

impl From<InputError> for BankError {
    fn from(error: InputError) -> Self {
        BankError::Input(error)
    }
}
impl From<io::Error> for BankError {
    fn from(error: io::Error) -> Self {
        BankError::Io(error)
    }
}
impl From<ReadlineError> for BankError {
    fn from(error: ReadlineError) -> Self {
        match error {
            ReadlineError::Eof | ReadlineError::Interrupted => {
                BankError::Input(InputError::EndOfInput)
            }
            other => BankError::Readline(other),
        }
    }
}
