use std::str::FromStr;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::InvalidValue;

/// A currency code, always upper-case.
///
/// Whether the code is one the exchange supports is a property of the dialogue, not of the value.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct Currency(String);

impl Currency {
  pub fn try_new<STR>(code: STR) -> Result<Self, InvalidValue>
      where STR: AsRef<str>
  {
    let code = code.as_ref().trim();
    Self::validate(code)?;
    Ok(Currency(code.to_uppercase()))
  }

  pub fn validate(code: &str) -> Result<(), InvalidValue> {
    static REGEX_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[[:alnum:]]{2,10}$").unwrap());
    if code.is_empty() {
      return Err(InvalidValue::Empty);
    }
    if !REGEX_CODE.is_match(code) {
      return Err(InvalidValue::BadFormat);
    }
    Ok(())
  }

  pub fn code(&self) -> &str {
    &self.0
  }

  /// Scheme used in payment URIs for this currency, if known
  pub fn uri_scheme(&self) -> Option<&'static str> {
    match self.code() {
      "BTC" => Some("bitcoin"),
      "LTC" => Some("litecoin"),
      "XMR" => Some("monero"),
      _ => None,
    }
  }
}

impl FromStr for Currency {
  type Err = InvalidValue;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Currency::try_new(s)
  }
}

impl std::fmt::Display for Currency {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::{Currency, InvalidValue};

  #[test]
  fn upper_cases() {
    assert_eq!(Currency::try_new("xMr").unwrap().code(), "XMR");
    assert_eq!(" btc ".parse::<Currency>().unwrap().code(), "BTC");
  }

  #[test]
  fn bad_codes() {
    assert_eq!(Currency::try_new(""), Err(InvalidValue::Empty));
    assert_eq!(Currency::try_new("X"), Err(InvalidValue::BadFormat));
    assert_eq!(Currency::try_new("B T C"), Err(InvalidValue::BadFormat));
  }

  #[test]
  fn uri_scheme() {
    assert_eq!(Currency::try_new("ltc").unwrap().uri_scheme(), Some("litecoin"));
    assert_eq!(Currency::try_new("doge").unwrap().uri_scheme(), None);
  }
}
