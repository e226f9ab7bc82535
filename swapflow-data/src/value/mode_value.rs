use crate::InvalidValue;

/// Whether the user fixes the amount they receive or the amount they send
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub enum ExchangeMode {
  /// Fixed rate: the user picks how much to receive
  Fixed,
  /// Floating rate: the user picks how much to sell
  Floating,
}

impl ExchangeMode {
  pub fn is_fixed(&self) -> bool {
    *self == ExchangeMode::Fixed
  }
}

impl Default for ExchangeMode {
  fn default() -> Self {
    ExchangeMode::Floating
  }
}

impl std::str::FromStr for ExchangeMode {
  type Err = InvalidValue;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match &s.trim().to_lowercase()[..] {
      "yes" => Ok(ExchangeMode::Fixed),
      "no" => Ok(ExchangeMode::Floating),
      "" => Err(InvalidValue::Empty),
      _ => Err(InvalidValue::WrongValue),
    }
  }
}

impl std::fmt::Display for ExchangeMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ExchangeMode::Fixed => f.write_str("fixed"),
      ExchangeMode::Floating => f.write_str("floating"),
    }
  }
}
