use num::rational::BigRational;
use num::Zero;
use std::slice::Iter;

use crate::models::Money;

/// The coins kept in the bank, in the order they were added
///
/// The same coin can be kept more than once. The total is always computed from the coins, it is
/// never stored.
///
/// # Examples
/// ```rust
/// # use coinbank::models::{Currency, Holdings, Money};
/// # use num::rational::BigRational;
/// use num::BigInt;
///
/// let mut holdings = Holdings::new();
/// let ten_dollars = Money::new(Currency::Usd, BigRational::from(BigInt::from(10)));
/// holdings.add(ten_dollars.clone());
/// holdings.add(ten_dollars.clone());
/// assert!(holdings.remove(&ten_dollars));
/// assert_eq!(holdings.len(), 1);
/// assert_eq!(holdings.total(), BigRational::new(BigInt::from(609), BigInt::from(10)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Holdings {
    coins: Vec<Money>,
}

impl Holdings {
    pub fn new() -> Self {
        Holdings { coins: Vec::new() }
    }

    /// Adds a coin at the end
    pub fn add(&mut self, coin: Money) {
        self.coins.push(coin);
    }

    /// Removes the first coin equal to ```coin```, returns whether there was one
    pub fn remove(&mut self, coin: &Money) -> bool {
        match self.coins.iter().position(|x| x == coin) {
            Some(index) => {
                self.coins.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> Iter<'_, Money> {
        self.coins.iter()
    }
    pub fn len(&self) -> usize {
        self.coins.len()
    }
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Sum of every coin converted to the reference currency
    pub fn total(&self) -> BigRational {
        self.coins
            .iter()
            .fold(BigRational::zero(), |acc, coin| acc + coin.to_reference())
    }
}

impl<'a> IntoIterator for &'a Holdings {
    type Item = &'a Money;
    type IntoIter = Iter<'a, Money>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
