use std::sync::{Arc, Mutex};
use swapflow_data::{Amount, Currency};
use swapflow_step::{catalog, Step, StepId};
use crate::{Services, Pricing, OrderDesk, QrDecoder, AmountSide, Quote, OrderRequest, Order, ServiceError, DecodeError};

/// Prices everything at a fixed rate of 1 sent : `rate` received
#[derive(Debug)]
pub struct RatePricing {
  pub rate: u128,
}

impl Pricing for RatePricing {
  fn estimate(&self, from: &Currency, receive: &Currency, amount: AmountSide) -> Result<Quote, ServiceError> {
    Ok(match amount {
      AmountSide::Send(a) => Quote { amount: Amount::from_units(a.units() * self.rate), currency: receive.clone() },
      AmountSide::Receive(a) => Quote { amount: Amount::from_units(a.units() / self.rate), currency: from.clone() },
    })
  }
}

#[derive(Debug)]
pub struct DownPricing;

impl Pricing for DownPricing {
  fn estimate(&self, _from: &Currency, _receive: &Currency, _amount: AmountSide) -> Result<Quote, ServiceError> {
    Err(ServiceError::Unavailable("down".to_owned()))
  }
}

/// Records requests and answers with order `trx` at rate 1:2
#[derive(Debug, Default)]
pub struct RecordingOrders {
  pub fixed: Mutex<Vec<OrderRequest>>,
  pub floating: Mutex<Vec<OrderRequest>>,
}

fn order_for(request: &OrderRequest) -> Order {
  let (send, receive) = match request.amount {
    AmountSide::Send(a) => (a, Amount::from_units(a.units() * 2)),
    AmountSide::Receive(a) => (Amount::from_units(a.units() / 2), a),
  };
  Order {
    trx: "trx1".to_owned(),
    deposit_address: "deposit<1>".to_owned(),
    expiration_minutes: 30,
    send_amount: send,
    receive_amount: receive,
  }
}

impl OrderDesk for RecordingOrders {
  fn create_floating(&self, request: &OrderRequest) -> Result<Order, ServiceError> {
    self.floating.lock().unwrap().push(request.clone());
    Ok(order_for(request))
  }

  fn create_fixed(&self, request: &OrderRequest) -> Result<Order, ServiceError> {
    self.fixed.lock().unwrap().push(request.clone());
    Ok(order_for(request))
  }
}

#[derive(Debug)]
pub struct NoDecoder;

impl QrDecoder for NoDecoder {
  fn decode(&self, _image: &[u8]) -> Result<String, DecodeError> {
    Err(DecodeError::NoCode)
  }
}

pub fn services(pricing: Arc<dyn Pricing + Send + Sync>, orders: Arc<RecordingOrders>) -> Services {
  Services {
    pricing,
    orders,
    decoder: Arc::new(NoDecoder),
  }
}

pub fn currencies() -> Vec<Currency> {
  catalog::DEFAULT_CURRENCIES.iter().map(|c| c.parse().unwrap()).collect()
}

pub fn standard_step(id: StepId) -> Step {
  catalog::standard_steps(&currencies())
    .into_iter()
    .find(|s| s.id == id)
    .unwrap()
}
