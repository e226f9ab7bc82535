use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use swapflow::ChatId;
use swapflow::data::{Amount, Currency};
use swapflow::action::{Reply, Transport, Pricing, OrderDesk, QrDecoder};
use swapflow::action::{AmountSide, Quote, OrderRequest, Order, ServiceError, DecodeError};

// rough USD prices so quotes look plausible
fn usd_price(currency: &Currency) -> Result<u128, ServiceError> {
  match currency.code() {
    "BTC" => Ok(60_000),
    "LTC" => Ok(80),
    "XMR" => Ok(160),
    "ETH" => Ok(3_000),
    other => Err(ServiceError::Rejected(format!("{} is not traded", other))),
  }
}

#[derive(Debug, Default)]
pub struct StubPricing;

impl Pricing for StubPricing {
  fn estimate(&self, from: &Currency, receive: &Currency, amount: AmountSide) -> Result<Quote, ServiceError> {
    let from_price = usd_price(from)?;
    let receive_price = usd_price(receive)?;
    Ok(match amount {
      AmountSide::Send(a) => Quote {
        amount: Amount::from_units(a.units() * from_price / receive_price),
        currency: receive.clone(),
      },
      AmountSide::Receive(a) => Quote {
        amount: Amount::from_units(a.units() * receive_price / from_price),
        currency: from.clone(),
      },
    })
  }
}

/// Hands out sequential order numbers and made-up deposit addresses
#[derive(Debug, Default)]
pub struct StubOrders {
  next: AtomicU64,
}

impl StubOrders {
  fn create(&self, request: &OrderRequest) -> Result<Order, ServiceError> {
    let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
    let quote = StubPricing.estimate(&request.from_currency, &request.receive_currency, request.amount)?;
    let (send_amount, receive_amount) = match request.amount {
      AmountSide::Send(a) => (a, quote.amount),
      AmountSide::Receive(a) => (quote.amount, a),
    };
    Ok(Order {
      trx: format!("demo{:04}", n),
      deposit_address: format!("{}-deposit-{:04}", request.from_currency.code().to_lowercase(), n),
      expiration_minutes: 30,
      send_amount,
      receive_amount,
    })
  }
}

impl OrderDesk for StubOrders {
  fn create_floating(&self, request: &OrderRequest) -> Result<Order, ServiceError> {
    self.create(request)
  }

  fn create_fixed(&self, request: &OrderRequest) -> Result<Order, ServiceError> {
    self.create(request)
  }
}

/// Reads the "image" as the QR payload itself, so a demo client can send text instead of a picture
#[derive(Debug)]
pub struct TextDecoder;

impl QrDecoder for TextDecoder {
  fn decode(&self, image: &[u8]) -> Result<String, DecodeError> {
    let payload = std::str::from_utf8(image).map_err(|_e| DecodeError::NotText)?;
    if payload.trim().is_empty() {
      return Err(DecodeError::NoCode);
    }
    Ok(payload.to_owned())
  }
}

/// Collects the replies to one request
#[derive(Debug, Default)]
pub struct Outbox {
  replies: Mutex<Vec<Reply>>,
}

impl Outbox {
  pub fn into_replies(self) -> Vec<Reply> {
    self.replies.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
  }
}

impl Transport for Outbox {
  fn send(&self, _chat_id: ChatId, reply: Reply) {
    match self.replies.lock() {
      Ok(mut replies) => replies.push(reply),
      Err(poisoned) => poisoned.into_inner().push(reply),
    }
  }
}
