use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};
use swapflow_base::ChatId;
use swapflow_data::{Amount, Currency};
use swapflow_action::{
  Reply, Transport, Services, Pricing, OrderDesk, QrDecoder,
  AmountSide, Quote, OrderRequest, Order, ServiceError, DecodeError,
};
use crate::{FlowConfig, FlowEngine};


/// Keeps every reply sent, in order
#[derive(Debug, Default)]
pub struct RecordingTransport {
  sent: Mutex<Vec<(ChatId, Reply)>>,
}

impl RecordingTransport {
  pub fn replies(&self) -> Vec<Reply> {
    self.sent.lock().unwrap().iter().map(|(_, reply)| reply.clone()).collect()
  }

  pub fn texts(&self) -> Vec<String> {
    self.replies().into_iter().map(|reply| reply.text).collect()
  }

  pub fn clear(&self) {
    self.sent.lock().unwrap().clear();
  }
}

impl Transport for RecordingTransport {
  fn send(&self, chat_id: ChatId, reply: Reply) {
    self.sent.lock().unwrap().push((chat_id, reply));
  }
}

/// 1 sent : `rate` received, unless switched off
#[derive(Debug)]
pub struct RatePricing {
  rate: u128,
  down: AtomicBool,
}

impl RatePricing {
  pub fn new(rate: u128) -> Self {
    RatePricing { rate, down: AtomicBool::new(false) }
  }

  pub fn set_down(&self, down: bool) {
    self.down.store(down, Ordering::SeqCst);
  }
}

impl Pricing for RatePricing {
  fn estimate(&self, from: &Currency, receive: &Currency, amount: AmountSide) -> Result<Quote, ServiceError> {
    if self.down.load(Ordering::SeqCst) {
      return Err(ServiceError::Unavailable("pricing is down".to_owned()));
    }
    Ok(match amount {
      AmountSide::Send(a) => Quote { amount: Amount::from_units(a.units() * self.rate), currency: receive.clone() },
      AmountSide::Receive(a) => Quote { amount: Amount::from_units(a.units() / self.rate), currency: from.clone() },
    })
  }
}

#[derive(Debug, Default)]
pub struct RecordingOrders {
  pub fixed: Mutex<Vec<OrderRequest>>,
  pub floating: Mutex<Vec<OrderRequest>>,
}

impl RecordingOrders {
  fn order_for(request: &OrderRequest) -> Order {
    let (send, receive) = match request.amount {
      AmountSide::Send(a) => (a, Amount::from_units(a.units() * 2)),
      AmountSide::Receive(a) => (Amount::from_units(a.units() / 2), a),
    };
    Order {
      trx: "trx1".to_owned(),
      deposit_address: "deposit1".to_owned(),
      expiration_minutes: 30,
      send_amount: send,
      receive_amount: receive,
    }
  }
}

impl OrderDesk for RecordingOrders {
  fn create_floating(&self, request: &OrderRequest) -> Result<Order, ServiceError> {
    self.floating.lock().unwrap().push(request.clone());
    Ok(Self::order_for(request))
  }

  fn create_fixed(&self, request: &OrderRequest) -> Result<Order, ServiceError> {
    self.fixed.lock().unwrap().push(request.clone());
    Ok(Self::order_for(request))
  }
}

/// Answers with queued results, then with `NoCode`
#[derive(Debug, Default)]
pub struct ScriptedDecoder {
  results: Mutex<VecDeque<Result<String, DecodeError>>>,
}

impl ScriptedDecoder {
  pub fn push(&self, result: Result<String, DecodeError>) {
    self.results.lock().unwrap().push_back(result);
  }
}

impl QrDecoder for ScriptedDecoder {
  fn decode(&self, _image: &[u8]) -> Result<String, DecodeError> {
    self.results.lock().unwrap().pop_front().unwrap_or(Err(DecodeError::NoCode))
  }
}

pub struct TestHarness {
  pub config: FlowConfig,
  pub pricing: Arc<RatePricing>,
  pub orders: Arc<RecordingOrders>,
  pub decoder: Arc<ScriptedDecoder>,
}

impl TestHarness {
  pub fn new() -> Self {
    TestHarness {
      config: FlowConfig::default(),
      pricing: Arc::new(RatePricing::new(150)),
      orders: Arc::new(RecordingOrders::default()),
      decoder: Arc::new(ScriptedDecoder::default()),
    }
  }

  pub fn services(&self) -> Services {
    Services {
      pricing: self.pricing.clone(),
      orders: self.orders.clone(),
      decoder: self.decoder.clone(),
    }
  }

  pub fn engine(&self) -> Arc<FlowEngine> {
    Arc::new(FlowEngine::new(self.config.clone(), self.services()).unwrap())
  }
}
