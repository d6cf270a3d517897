pub use currency::Currency;
pub use holdings::Holdings;
pub use money::{two_decimals, Money};

mod currency;
mod holdings;
mod money;
