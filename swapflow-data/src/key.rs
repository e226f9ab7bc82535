use super::{Value, InvalidValue, Currency, Amount, ExchangeMode};

/// Fields a dialogue collects into the [`Context`](crate::Context).
///
/// Each key knows the type of [`Value`] stored under it and how to parse a user's reply into that value.
#[derive(Hash, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-support", serde(rename_all = "snake_case"))]
pub enum Key {
  FromCurrency,
  ReceiveCurrency,
  Fixed,
  Amount,
  ReceiveAddress,
  Estimate,
}

impl Key {
  pub fn as_str(&self) -> &'static str {
    match self {
      Key::FromCurrency => "from_currency",
      Key::ReceiveCurrency => "receive_currency",
      Key::Fixed => "fixed",
      Key::Amount => "amount",
      Key::ReceiveAddress => "receive_address",
      Key::Estimate => "estimate",
    }
  }

  /// Parse a reply into the value type stored under this key
  pub fn value_from_str(&self, s: &str) -> Result<Value, InvalidValue> {
    match self {
      Key::FromCurrency |
      Key::ReceiveCurrency => Ok(Value::Currency(s.parse::<Currency>()?)),
      Key::Fixed => Ok(Value::Mode(s.parse::<ExchangeMode>()?)),
      Key::Amount |
      Key::Estimate => Ok(Value::Amount(s.parse::<Amount>()?)),
      Key::ReceiveAddress => {
        let address = s.trim();
        if address.is_empty() {
          return Err(InvalidValue::Empty);
        }
        Ok(Value::Text(address.to_owned()))
      }
    }
  }

  /// Check `val` is the type stored under this key
  pub fn validate_val_type(&self, val: &Value) -> Result<(), InvalidValue> {
    let matches = match (self, val) {
      (Key::FromCurrency, Value::Currency(_)) |
      (Key::ReceiveCurrency, Value::Currency(_)) |
      (Key::Fixed, Value::Mode(_)) |
      (Key::Amount, Value::Amount(_)) |
      (Key::Estimate, Value::Amount(_)) |
      (Key::ReceiveAddress, Value::Text(_)) => true,
      _ => false,
    };
    if matches { Ok(()) } else { Err(InvalidValue::WrongType) }
  }
}

impl std::fmt::Display for Key {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}


#[cfg(test)]
mod tests {
  use super::{Key, Value, InvalidValue, ExchangeMode};

  #[test]
  fn value_from_str() {
    let currency = Key::FromCurrency.value_from_str("xmr").unwrap();
    assert_eq!(currency.to_string(), "XMR");

    assert_eq!(Key::Fixed.value_from_str("Yes"), Ok(Value::Mode(ExchangeMode::Fixed)));
    assert_eq!(Key::Amount.value_from_str("1.5").unwrap().to_string(), "1.50000000");
    assert_eq!(Key::Amount.value_from_str("one"), Err(InvalidValue::BadFormat));
    assert_eq!(Key::ReceiveAddress.value_from_str("  "), Err(InvalidValue::Empty));
  }

  #[test]
  fn validate_val_type() {
    let amount = Key::Amount.value_from_str("2").unwrap();
    assert_eq!(Key::Amount.validate_val_type(&amount), Ok(()));
    assert_eq!(Key::Estimate.validate_val_type(&amount), Ok(()));
    assert_eq!(Key::FromCurrency.validate_val_type(&amount), Err(InvalidValue::WrongType));
  }
}
