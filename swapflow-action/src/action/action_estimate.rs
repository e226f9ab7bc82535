use tracing::{event, Level};
use swapflow_data::{Context, Currency, Key, Value, ExchangeMode};
use swapflow_step::Step;
use super::{ActionResult, Action, require_currency, require_amount, estimate_text};
use crate::{ActionError, Keyboard, Reply, Services, AmountSide};

/// Quotes the exchange for the collected currencies and amount.
///
/// The quote is stored under [`Key::Estimate`] so later steps know one was shown.
#[derive(Debug, Clone)]
pub struct EstimateAction {
  currencies: Vec<Currency>,
}

impl EstimateAction {
  pub fn new(currencies: Vec<Currency>) -> Self {
    EstimateAction { currencies }
  }

  /// Ask pricing for a quote. Returns the estimate text and the quoted amount.
  pub(crate) fn quote(context: &Context, services: &Services) -> Result<(String, Value), ActionError> {
    let from = require_currency(context, Key::FromCurrency)?;
    let receive = require_currency(context, Key::ReceiveCurrency)?;
    let amount = *require_amount(context, Key::Amount)?;

    let side = match context.mode() {
      ExchangeMode::Fixed => AmountSide::Receive(amount),
      ExchangeMode::Floating => AmountSide::Send(amount),
    };
    event!(Level::DEBUG, from = %from, receive = %receive, side = ?side, "requesting estimate");
    let quote = services.pricing.estimate(from, receive, side)?;

    let text = match side {
      AmountSide::Send(send) => estimate_text(&send, from, &quote.amount, receive),
      AmountSide::Receive(recv) => estimate_text(&quote.amount, from, &recv, receive),
    };
    Ok((text, Value::Amount(quote.amount)))
  }
}

impl Action for EstimateAction {
  fn start(&self, step: &Step, context: &Context, services: &Services) -> Result<ActionResult, ActionError> {
    let (text, estimate) = EstimateAction::quote(context, services)?;

    let mut data = Context::new();
    data.insert(Key::Estimate, estimate)?;

    let keyboard = Keyboard::for_step(step, context, &self.currencies);
    Ok(ActionResult::StartWith { reply: Reply::new(text).with_keyboard(keyboard), data })
  }
}
