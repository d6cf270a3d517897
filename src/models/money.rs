use std::fmt;
use std::fmt::{Display, Formatter};

use num::rational::BigRational;
use num::{BigInt, Signed, ToPrimitive};

use crate::models::Currency;

/// A coin: an amount in one of the known currencies
///
/// Amounts are rational numbers rather than floats, so two coins are equal exactly when they have
/// the same currency and the same amount, and conversions add up to the cent.
///
/// # Examples
/// ```rust
/// # use coinbank::models::{Currency, Money};
/// # use num::rational::BigRational;
/// use num::BigInt;
///
/// let dollars = Money::new(Currency::Usd, BigRational::from(BigInt::from(10)));
/// assert_eq!(format!("{}", dollars), "Dollar: $ 10.00");
/// // 10 dollars at 6.09
/// assert_eq!(dollars.to_reference(), BigRational::new(BigInt::from(609), BigInt::from(10)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Money {
    currency: Currency,
    amount: BigRational,
}

impl Money {
    pub fn new(currency: Currency, amount: BigRational) -> Self {
        Money { currency, amount }
    }
    pub fn get_currency(&self) -> Currency {
        self.currency
    }
    pub fn get_amount(&self) -> &BigRational {
        &self.amount
    }
    /// The value of the coin in the reference currency
    pub fn to_reference(&self) -> BigRational {
        match self.currency {
            Currency::Local => self.amount.clone(),
            other => self.amount.clone() * other.rate(),
        }
    }
}

impl From<(Currency, BigRational)> for Money {
    fn from(cur_amount: (Currency, BigRational)) -> Self {
        let (currency, amount) = cur_amount;
        Money::new(currency, amount)
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}",
            self.currency.label(),
            self.currency.symbol(),
            two_decimals(&self.amount)
        )
    }
}

/// Formats a number with exactly two decimals, rounding half away from zero
pub fn two_decimals(amount: &BigRational) -> String {
    let cents = (amount * BigRational::from_integer(BigInt::from(100)))
        .round()
        .to_integer();
    let sign = if cents.is_negative() { "-" } else { "" };
    let cents = cents.abs();
    let hundred = BigInt::from(100);
    let fraction = (&cents % &hundred).to_u32().unwrap_or_default();
    format!("{}{}.{:02}", sign, &cents / &hundred, fraction)
}
