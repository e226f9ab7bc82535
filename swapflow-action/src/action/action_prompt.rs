use swapflow_data::{Context, Currency};
use swapflow_step::Step;
use super::{ActionResult, Action};
use crate::{render_template, ActionError, EscapedString, HtmlEscapedString, Keyboard, Reply, Services};

/// Renders a step's prompt template with values from the context, plus the step's keyboard.
///
/// This is the general action: it runs for every step without a specific action,
/// and for steps whose specific action could not fulfill them.
#[derive(Debug, Clone)]
pub struct PromptAction {
  currencies: Vec<Currency>,
}

impl PromptAction {
  /// `currencies` are offered on currency keyboards
  pub fn new(currencies: Vec<Currency>) -> Self {
    PromptAction { currencies }
  }

  /// The step's prompt as a reply, `None` if the step has no prompt
  pub fn render(&self, step: &Step, context: &Context) -> Result<Option<Reply>, ActionError> {
    let template = match step.prompt(context.mode()) {
      Some(template) => template,
      None => return Ok(None),
    };

    let params = template.params
      .iter()
      .map(|key| {
        context.get(key)
          .map(|val| HtmlEscapedString::from_unescaped(&val.to_string()))
          .ok_or(ActionError::MissingData(*key))
      })
      .collect::<Result<Vec<_>, _>>()?;

    let text = render_template(&template.text, &params)?;
    let keyboard = Keyboard::for_step(step, context, &self.currencies);
    Ok(Some(Reply::new(text).with_keyboard(keyboard)))
  }
}

impl Action for PromptAction {
  fn start(&self, step: &Step, context: &Context, _services: &Services) -> Result<ActionResult, ActionError> {
    match self.render(step, context)? {
      Some(reply) => Ok(ActionResult::reply(reply)),
      None => Ok(ActionResult::CannotFulfill),
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;
  use swapflow_data::{Context, Key, Value, ExchangeMode};
  use swapflow_step::StepId;
  use super::PromptAction;
  use crate::{Action, ActionResult, ActionError, Keyboard};
  use crate::test::{services, currencies, standard_step, RatePricing, RecordingOrders};

  fn start(step_id: StepId, context: &Context) -> Result<ActionResult, ActionError> {
    let services = services(Arc::new(RatePricing { rate: 2 }), Arc::new(RecordingOrders::default()));
    PromptAction::new(currencies()).start(&standard_step(step_id), context, &services)
  }

  fn text(result: ActionResult) -> String {
    match result {
      ActionResult::StartWith { reply, .. } => reply.text,
      ActionResult::CannotFulfill => panic!("cannot fulfill"),
    }
  }

  #[test]
  fn plain_prompt() {
    let result = start(StepId::SelectSourceCurrency, &Context::new()).unwrap();
    assert_eq!(text(result), "What currency do you want to sell?");
  }

  #[test]
  fn fills_params() {
    let mut ctx = Context::new();
    ctx.insert(Key::FromCurrency, Value::Currency("BTC".parse().unwrap())).unwrap();
    ctx.insert(Key::ReceiveCurrency, Value::Currency("XMR".parse().unwrap())).unwrap();

    let result = start(StepId::SelectExchangeMode, &ctx).unwrap();
    assert_eq!(text(result),
      "Do you want to receive a specific amount of XMR?\n\n\
      Pick <i>Yes</i> to select how much XMR you want to get.\n\n\
      Pick <i>No</i> to select how much BTC you want to sell.");
  }

  #[test]
  fn amount_wording_follows_mode() {
    let mut ctx = Context::new();
    ctx.insert(Key::FromCurrency, Value::Currency("BTC".parse().unwrap())).unwrap();
    ctx.insert(Key::ReceiveCurrency, Value::Currency("LTC".parse().unwrap())).unwrap();
    assert_eq!(text(start(StepId::EnterAmount, &ctx).unwrap()), "How much BTC do you want to sell?");

    ctx.insert(Key::Fixed, Value::Mode(ExchangeMode::Fixed)).unwrap();
    let result = start(StepId::EnterAmount, &ctx).unwrap();
    if let ActionResult::StartWith { reply, .. } = result {
      assert_eq!(reply.text, "How much LTC do you want to buy?");
      assert_eq!(reply.keyboard, Keyboard::Remove);
    } else {
      panic!("expected a reply");
    }
  }

  #[test]
  fn missing_param() {
    assert_eq!(start(StepId::SelectTargetCurrency, &Context::new()), Err(ActionError::MissingData(Key::FromCurrency)));
  }

  #[test]
  fn no_prompt() {
    assert_eq!(start(StepId::FinalizeOrder, &Context::new()), Ok(ActionResult::CannotFulfill));
  }
}
