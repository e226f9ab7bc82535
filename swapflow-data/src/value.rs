//! [`Value`]s hold the data a dialogue collects. The typed values validate on creation,
//! typically through their [`FromStr`](std::str::FromStr) implementation.
//!
//! # Examples
//! ```
//! # use swapflow_data::{Amount, Currency};
//! assert!("1.2.3".parse::<Amount>().is_err());
//! assert_eq!("0.1".parse::<Amount>().unwrap().to_string(), "0.10000000");
//! assert_eq!("btc".parse::<Currency>().unwrap().code(), "BTC");
//! ```

mod currency_value;
pub use currency_value::Currency;

mod amount_value;
pub use amount_value::Amount;

mod mode_value;
pub use mode_value::ExchangeMode;

mod photo_value;
pub use photo_value::Photo;

#[derive(Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-support", serde(untagged))]
pub enum Value {
  Currency(Currency),
  Amount(Amount),
  Mode(ExchangeMode),
  Text(String),
}

impl Value {
  pub fn as_currency(&self) -> Option<&Currency> {
    match self {
      Value::Currency(c) => Some(c),
      _ => None,
    }
  }

  pub fn as_amount(&self) -> Option<&Amount> {
    match self {
      Value::Amount(a) => Some(a),
      _ => None,
    }
  }

  pub fn as_mode(&self) -> Option<ExchangeMode> {
    match self {
      Value::Mode(m) => Some(*m),
      _ => None,
    }
  }

  pub fn as_text(&self) -> Option<&str> {
    match self {
      Value::Text(s) => Some(s),
      _ => None,
    }
  }
}

impl std::fmt::Display for Value {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Value::Currency(c) => c.fmt(f),
      Value::Amount(a) => a.fmt(f),
      Value::Mode(m) => m.fmt(f),
      Value::Text(s) => f.write_str(s),
    }
  }
}

impl From<Currency> for Value {
  fn from(c: Currency) -> Self {
    Value::Currency(c)
  }
}

impl From<Amount> for Value {
  fn from(a: Amount) -> Self {
    Value::Amount(a)
  }
}

impl From<ExchangeMode> for Value {
  fn from(m: ExchangeMode) -> Self {
    Value::Mode(m)
  }
}


#[cfg(test)]
mod tests {
  use super::{Value, Currency, Amount, ExchangeMode};

  #[test]
  fn accessors() {
    let currency: Value = "ltc".parse::<Currency>().unwrap().into();
    assert_eq!(currency.as_currency().map(|c| c.code()), Some("LTC"));
    assert_eq!(currency.as_amount(), None);

    let mode: Value = ExchangeMode::Fixed.into();
    assert_eq!(mode.as_mode(), Some(ExchangeMode::Fixed));
    assert_eq!(mode.as_text(), None);

    let amount: Value = "3".parse::<Amount>().unwrap().into();
    assert_eq!(amount.to_string(), "3.00000000");
  }
}
