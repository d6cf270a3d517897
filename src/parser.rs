//! Parsers for what the user types at the prompts
use lazy_static::lazy_static;
use num::rational::BigRational;
use num::{BigInt, Num};
use regex::Regex;

use crate::error::InputError;

/// A parser for menu options and currency codes
pub fn parse_code(input: &str) -> Result<i64, InputError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| InputError::NotAnOption(input.trim().to_string()))
}

/// A parser for amounts like `12`, `-3.5` or `0,25`
///
/// The result is exact: `0.1` is one tenth.
pub fn parse_amount(input: &str) -> Result<BigRational, InputError> {
    lazy_static! {
        static ref RE_AMOUNT: Regex = Regex::new(r"^([+-])?(\d*)(?:[.,](\d+))?$").unwrap();
    }
    let trimmed = input.trim();
    let error = || InputError::NotAnAmount(trimmed.to_string());
    let captures = RE_AMOUNT.captures(trimmed).ok_or_else(error)?;
    let integer = captures.get(2).map_or("", |x| x.as_str());
    let decimals = captures.get(3).map_or("", |x| x.as_str());
    if integer.is_empty() && decimals.is_empty() {
        return Err(error());
    }
    let digits = format!("{}{}", integer, decimals);
    let mut numer = BigInt::from_str_radix(&digits, 10).map_err(|_| error())?;
    if let Some(sign) = captures.get(1) {
        if sign.as_str() == "-" {
            numer = -numer;
        }
    }
    let denom = num::pow(BigInt::from(10), decimals.len());
    Ok(BigRational::new(numer, denom))
}
