use std::sync::Arc;
use swapflow_base::ChatId;
use swapflow_data::{Amount, Currency};
use crate::{Reply, ServiceError, DecodeError, EscapedString, UriEscapedString};

/// Delivers replies to a chat. Fire-and-forget.
pub trait Transport {
  fn send(&self, chat_id: ChatId, reply: Reply);
}

/// Which side of an exchange an amount is given for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmountSide {
  /// The amount the user sells
  Send(Amount),
  /// The amount the user buys
  Receive(Amount),
}

/// The counter amount for an [`AmountSide`]
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
  pub amount: Amount,
  pub currency: Currency,
}

pub trait Pricing {
  fn estimate(&self, from: &Currency, receive: &Currency, amount: AmountSide) -> Result<Quote, ServiceError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
  pub from_currency: Currency,
  pub receive_currency: Currency,
  pub amount: AmountSide,
  pub receive_address: String,
  pub referral_code: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
  pub trx: String,
  pub deposit_address: String,
  pub expiration_minutes: u32,
  pub send_amount: Amount,
  pub receive_amount: Amount,
}

pub trait OrderDesk {
  fn create_floating(&self, request: &OrderRequest) -> Result<Order, ServiceError>;
  fn create_fixed(&self, request: &OrderRequest) -> Result<Order, ServiceError>;
}

pub trait QrDecoder {
  /// Text payload of the first QR code found in an image
  fn decode(&self, image: &[u8]) -> Result<String, DecodeError>;
}

/// The exchange-side collaborators actions call out to
#[derive(Clone)]
pub struct Services {
  pub pricing: Arc<dyn Pricing + Send + Sync>,
  pub orders: Arc<dyn OrderDesk + Send + Sync>,
  pub decoder: Arc<dyn QrDecoder + Send + Sync>,
}

impl std::fmt::Debug for Services {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("Services")
  }
}

/// The address in a decoded QR payload: either a bare address or the path of a payment URI
///
/// ```
/// # use swapflow_action::address_from_payload;
/// assert_eq!(address_from_payload("monero:44Affq5k?tx_amount=1").unwrap(), "44Affq5k");
/// assert_eq!(address_from_payload("ltc1qabc").unwrap(), "ltc1qabc");
/// ```
pub fn address_from_payload(payload: &str) -> Result<String, DecodeError> {
  let payload = payload.trim();
  let without_scheme = match payload.find(':') {
    Some(idx) if is_scheme(&payload[..idx]) => &payload[idx + 1..],
    _ => payload,
  };
  let path = without_scheme
    .split(|c| c == '?' || c == '#')
    .next()
    .unwrap_or("");
  let address = urlencoding::decode(path).map_err(|_e| DecodeError::NotText)?;
  let address = address.trim();
  if address.is_empty() {
    return Err(DecodeError::NoAddress);
  }
  Ok(address.to_owned())
}

fn is_scheme(s: &str) -> bool {
  let mut chars = s.chars();
  match chars.next() {
    Some(c) if c.is_ascii_alphabetic() => (),
    _ => return false,
  }
  chars.all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
}

/// BIP21-style URI to pay `amount` of `currency` to `address`, if the currency has a known scheme
pub fn payment_uri(currency: &Currency, address: &str, amount: &Amount) -> Option<String> {
  let scheme = currency.uri_scheme()?;
  let address = UriEscapedString::from_unescaped(address);
  Some(format!("{}:{}?amount={}", scheme, address.as_ref(), amount))
}

#[cfg(test)]
mod tests {
  use swapflow_data::{Amount, Currency};
  use super::{address_from_payload, payment_uri};
  use crate::DecodeError;

  #[test]
  fn payload_address() {
    assert_eq!(address_from_payload("bitcoin:bc1qxyz?amount=0.1&label=x").unwrap(), "bc1qxyz");
    assert_eq!(address_from_payload(" litecoin:ltc1q%61bc ").unwrap(), "ltc1qabc");
    assert_eq!(address_from_payload("monero:?amount=1"), Err(DecodeError::NoAddress));
    assert_eq!(address_from_payload(""), Err(DecodeError::NoAddress));
  }

  #[test]
  fn uri() {
    let xmr: Currency = "XMR".parse().unwrap();
    let amount: Amount = "1.5".parse().unwrap();
    assert_eq!(payment_uri(&xmr, "44abc", &amount).unwrap(), "monero:44abc?amount=1.50000000");

    let doge: Currency = "DOGE".parse().unwrap();
    assert_eq!(payment_uri(&doge, "D123", &amount), None);
  }
}
