use std::convert::TryFrom;
use std::fmt;
use std::fmt::{Display, Formatter};

use num::rational::BigRational;
use num::BigInt;

use crate::error::CurrencyError;

/// Exchange rates to the local currency, in hundredths
const USD_RATE_HUNDREDTHS: i64 = 609;
const EUR_RATE_HUNDREDTHS: i64 = 644;

/// The currencies a coin can be in
///
/// The local currency (Brazilian real) is the reference currency: every total is expressed in it.
/// Users pick a currency by its numeric code.
///
/// # Examples
/// ```rust
/// use coinbank::models::Currency;
///
/// assert_eq!(Currency::from_code(2).unwrap(), Currency::Usd);
/// assert!(Currency::from_code(4).is_err());
/// assert_eq!(Currency::Eur.symbol(), "€");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Local,
    Usd,
    Eur,
}

impl Currency {
    pub fn from_code(code: i64) -> Result<Currency, CurrencyError> {
        match code {
            1 => Ok(Currency::Local),
            2 => Ok(Currency::Usd),
            3 => Ok(Currency::Eur),
            x => Err(CurrencyError::UnknownCode(x)),
        }
    }
    pub fn code(&self) -> i64 {
        match self {
            Currency::Local => 1,
            Currency::Usd => 2,
            Currency::Eur => 3,
        }
    }
    /// How many units of the local currency one unit of this currency is worth
    pub fn rate(&self) -> BigRational {
        let hundredths = match self {
            Currency::Local => 100,
            Currency::Usd => USD_RATE_HUNDREDTHS,
            Currency::Eur => EUR_RATE_HUNDREDTHS,
        };
        BigRational::new(BigInt::from(hundredths), BigInt::from(100))
    }
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Local => "R$",
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Currency::Local => "Real",
            Currency::Usd => "Dollar",
            Currency::Eur => "Euro",
        }
    }
}

impl TryFrom<i64> for Currency {
    type Error = CurrencyError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Currency::from_code(code)
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
