mod app;
pub mod console;
mod error;
pub mod menu;
pub mod models;
pub mod parser;

pub use app::{run_app, CommonOpts};
pub use error::{BankError, CurrencyError, InputError};
