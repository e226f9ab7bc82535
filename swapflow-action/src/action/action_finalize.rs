use tracing::{event, Level};
use swapflow_data::{Context, Key, ExchangeMode};
use swapflow_step::Step;
use super::{ActionResult, Action, require_currency, require_amount};
use crate::{ActionError, Button, Keyboard, Reply, Services, AmountSide, OrderRequest, payment_uri, style};

/// Places the order with the order desk and replies with its summary.
///
/// Fixed orders are placed for the amount to receive, floating orders for the amount to send.
#[derive(Debug, Clone)]
pub struct FinalizeOrderAction {
  referral_code: String,
}

impl FinalizeOrderAction {
  pub fn new<STR>(referral_code: STR) -> Self
      where STR: Into<String>
  {
    FinalizeOrderAction { referral_code: referral_code.into() }
  }
}

impl Action for FinalizeOrderAction {
  fn start(&self, _step: &Step, context: &Context, services: &Services) -> Result<ActionResult, ActionError> {
    let from = require_currency(context, Key::FromCurrency)?;
    let receive = require_currency(context, Key::ReceiveCurrency)?;
    let amount = *require_amount(context, Key::Amount)?;
    let address = context.text(Key::ReceiveAddress).ok_or(ActionError::MissingData(Key::ReceiveAddress))?;
    let mode = context.mode();

    let request = OrderRequest {
      from_currency: from.clone(),
      receive_currency: receive.clone(),
      amount: match mode {
        ExchangeMode::Fixed => AmountSide::Receive(amount),
        ExchangeMode::Floating => AmountSide::Send(amount),
      },
      receive_address: address.to_owned(),
      referral_code: self.referral_code.clone(),
    };
    let order = match mode {
      ExchangeMode::Fixed => services.orders.create_fixed(&request)?,
      ExchangeMode::Floating => services.orders.create_floating(&request)?,
    };
    event!(Level::INFO, trx = %order.trx, mode = %mode, "order created");

    let title = match mode {
      ExchangeMode::Fixed => "🔒 FIXED ORDER #",
      ExchangeMode::Floating => "⚖ ORDER #",
    };
    let lhs = format!("{} {}", style::code(&order.send_amount.to_string()), style::code(from.code()));
    let rhs = style::code_escaped(&format!("{} {}", order.receive_amount, receive));

    let mut text = style::b(title);
    text.push_str(&style::code_escaped(&order.trx));
    text.push_str(&format!("\n\n{} ➡ {}", lhs, rhs));
    text.push_str(&format!("\n\nSend {} to {}", lhs, style::code_escaped(&order.deposit_address)));
    text.push_str(&format!("\n\nExpires in {} minutes", order.expiration_minutes));
    text.push_str(&format!("\n\nYou'll receive {} at {}", rhs, style::code_escaped(address)));

    let check = Button::new("👀 Check status", format!("/track {}", order.trx));
    let mut reply = Reply::new(text).with_keyboard(Keyboard::Inline(vec![vec![check]]));
    if let Some(uri) = payment_uri(from, &order.deposit_address, &order.send_amount) {
      reply = reply.with_payment_uri(uri);
    }
    Ok(ActionResult::reply(reply))
  }
}
