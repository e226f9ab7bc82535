use swapflow_data::{Context, Key, ExchangeMode};
use swapflow_step::Step;
use super::{ActionResult, Action, PromptAction, EstimateAction};
use crate::{ActionError, Services};

/// Asks for the receive address.
///
/// When the user picked the amount to sell and has not seen an estimate yet,
/// the estimate is appended to the question.
#[derive(Debug, Clone)]
pub struct AddressAction {
  prompt: PromptAction,
}

impl AddressAction {
  pub fn new(prompt: PromptAction) -> Self {
    AddressAction { prompt }
  }
}

impl Action for AddressAction {
  fn start(&self, step: &Step, context: &Context, services: &Services) -> Result<ActionResult, ActionError> {
    let mut reply = match self.prompt.render(step, context)? {
      Some(reply) => reply,
      None => return Ok(ActionResult::CannotFulfill),
    };

    let mut data = Context::new();
    if context.mode() == ExchangeMode::Floating && !context.contains(&Key::Estimate) {
      let (text, estimate) = EstimateAction::quote(context, services)?;
      reply.append(&text);
      data.insert(Key::Estimate, estimate)?;
    }
    Ok(ActionResult::StartWith { reply, data })
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;
  use swapflow_data::{Context, Key, Value, ExchangeMode};
  use swapflow_step::StepId;
  use super::AddressAction;
  use crate::{Action, ActionResult, PromptAction, Keyboard};
  use crate::test::{services, currencies, standard_step, RatePricing, DownPricing, RecordingOrders};

  fn collected() -> Context {
    let mut ctx = Context::new();
    ctx.insert(Key::FromCurrency, Value::Currency("LTC".parse().unwrap())).unwrap();
    ctx.insert(Key::ReceiveCurrency, Value::Currency("XMR".parse().unwrap())).unwrap();
    ctx.insert(Key::Amount, Value::Amount("2".parse().unwrap())).unwrap();
    ctx
  }

  fn action() -> AddressAction {
    AddressAction::new(PromptAction::new(currencies()))
  }

  const PROMPT: &str = "What XMR address do you want to receive XMR to?\n\nPaste the address or send a photo of the QR code 📸.";

  #[test]
  fn floating_appends_estimate() {
    let services = services(Arc::new(RatePricing { rate: 3 }), Arc::new(RecordingOrders::default()));
    let result = action().start(&standard_step(StepId::EnterDestinationAddress), &collected(), &services).unwrap();
    match result {
      ActionResult::StartWith { reply, data } => {
        assert_eq!(reply.text, format!("{}\n\n<b>🧮 ESTIMATE 🧮</b>\n\n<code>2.00000000 LTC</code> ➡ <code>6.00000000 XMR</code>", PROMPT));
        assert_eq!(reply.keyboard, Keyboard::Remove);
        assert!(data.contains(&Key::Estimate));
      },
      ActionResult::CannotFulfill => panic!("expected a prompt"),
    }
  }

  #[test]
  fn fixed_or_already_estimated() {
    // pricing is down, so any attempt to estimate would fail
    let services = services(Arc::new(DownPricing), Arc::new(RecordingOrders::default()));

    let mut fixed = collected();
    fixed.insert(Key::Fixed, Value::Mode(ExchangeMode::Fixed)).unwrap();
    let result = action().start(&standard_step(StepId::EnterDestinationAddress), &fixed, &services).unwrap();
    assert!(matches!(result, ActionResult::StartWith { ref reply, ref data } if reply.text == PROMPT && data.is_empty()));

    let mut estimated = collected();
    estimated.insert(Key::Estimate, Value::Amount("6".parse().unwrap())).unwrap();
    let result = action().start(&standard_step(StepId::EnterDestinationAddress), &estimated, &services).unwrap();
    assert!(matches!(result, ActionResult::StartWith { ref reply, .. } if reply.text == PROMPT));
  }
}
