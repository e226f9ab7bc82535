use std::str::FromStr;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::InvalidValue;

const SCALE: u32 = 8;
const UNITS_PER_COIN: u128 = 100_000_000;

/// A non-negative decimal amount with a fixed precision of 8 decimal places.
///
/// Parsing rounds extra decimal places half-to-even, so `"0.123456785"` becomes `0.12345678`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Amount {
  units: u128,
}

impl Amount {
  pub fn from_units(units: u128) -> Self {
    Amount { units }
  }

  /// Amount in 1e-8 units
  pub fn units(&self) -> u128 {
    self.units
  }

  pub fn is_zero(&self) -> bool {
    self.units == 0
  }

  pub fn validate(val: &str) -> Result<(), InvalidValue> {
    static REGEX_DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]*\.?[0-9]+$").unwrap());
    if val.is_empty() {
      return Err(InvalidValue::Empty);
    }
    // slicing below assumes one byte per char
    if !val.is_ascii() || !REGEX_DECIMAL.is_match(val) {
      return Err(InvalidValue::BadFormat);
    }
    Ok(())
  }
}

fn round_half_even(kept: u128, dropped: &str) -> u128 {
  let mut digits = dropped.bytes();
  let first = match digits.next() {
    Some(d) => d - b'0',
    None => return kept,
  };
  let rest_nonzero = digits.any(|d| d != b'0');
  let round_up = first > 5 || (first == 5 && (rest_nonzero || kept % 2 == 1));
  if round_up { kept + 1 } else { kept }
}

impl FromStr for Amount {
  type Err = InvalidValue;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    Amount::validate(s)?;

    let (whole, frac) = match s.find('.') {
      Some(idx) => (&s[..idx], &s[idx + 1..]),
      None => (s, ""),
    };

    let whole: u128 = if whole.is_empty() {
      0
    } else {
      whole.parse().map_err(|_e| InvalidValue::WrongValue)?
    };

    let split = std::cmp::min(frac.len(), SCALE as usize);
    let (kept, dropped) = frac.split_at(split);
    let kept_units: u128 = if kept.is_empty() {
      0
    } else {
      kept.parse::<u128>().map_err(|_e| InvalidValue::WrongValue)? * 10u128.pow(SCALE - kept.len() as u32)
    };

    let units = whole
      .checked_mul(UNITS_PER_COIN)
      .and_then(|w| w.checked_add(round_half_even(kept_units, dropped)))
      .ok_or(InvalidValue::WrongValue)?;
    Ok(Amount { units })
  }
}

impl std::fmt::Display for Amount {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}.{:08}", self.units / UNITS_PER_COIN, self.units % UNITS_PER_COIN)
  }
}

#[cfg(feature = "serde-support")]
impl serde::Serialize for Amount {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
      where S: serde::Serializer
  {
    serializer.collect_str(self)
  }
}
