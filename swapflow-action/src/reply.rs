use swapflow_data::{Context, Currency};
use swapflow_step::{Layout, Step};

/// Reply-keyboard rows shown whenever no dialogue is running
pub const NAVIGATION_ROWS: &[&[&str]] = &[
  &["🧮 Estimate", "⚖ Trade"],
  &["⛑ Help", "🧾 Orders", "📈 Rates"],
];

pub const BACK_BUTTON: &str = "↩ Back";
pub const CANCEL_BUTTON: &str = "❌ Cancel";

/// An inline button that sends `command` when pressed
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct Button {
  pub text: String,
  pub command: String,
}

impl Button {
  pub fn new<T, C>(text: T, command: C) -> Self
      where T: Into<String>, C: Into<String>
  {
    Button { text: text.into(), command: command.into() }
  }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-support", serde(rename_all = "snake_case"))]
pub enum Keyboard {
  /// Leave whatever keyboard the user has
  Keep,
  Remove,
  Reply(Vec<Vec<String>>),
  Inline(Vec<Vec<Button>>),
}

impl Keyboard {
  pub fn navigation() -> Self {
    Keyboard::Reply(rows(NAVIGATION_ROWS.iter().map(|row| row.iter().copied())))
  }

  /// The keyboard under `step`'s prompt: its layout followed by a control row
  pub fn for_step(step: &Step, context: &Context, currencies: &[Currency]) -> Self {
    let mut keyboard = match step.layout() {
      Layout::Remove => return Keyboard::Remove,
      Layout::Currencies { exclude } => {
        let excluded = exclude.and_then(|key| context.currency(key));
        let row = currencies
          .iter()
          .filter(|currency| Some(*currency) != excluded)
          .map(|currency| currency.code().to_owned())
          .collect::<Vec<_>>();
        vec![row]
      },
      Layout::YesNo => vec![vec!["Yes".to_owned(), "No".to_owned()]],
      Layout::Continue => vec![vec!["Continue".to_owned()]],
    };

    let mut control = Vec::with_capacity(2);
    if step.has_back_button() {
      control.push(BACK_BUTTON.to_owned());
    }
    control.push(CANCEL_BUTTON.to_owned());
    keyboard.push(control);
    Keyboard::Reply(keyboard)
  }
}

fn rows<'a, R, I>(src: R) -> Vec<Vec<String>>
    where R: Iterator<Item = I>, I: Iterator<Item = &'a str>
{
  src.map(|row| row.map(str::to_owned).collect()).collect()
}

/// A message for the user. `text` is HTML.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct Reply {
  pub text: String,
  pub keyboard: Keyboard,
  /// Payment URI to show as a QR code along with the text
  pub payment_uri: Option<String>,
}

impl Reply {
  pub fn new<STR>(text: STR) -> Self
      where STR: Into<String>
  {
    Reply {
      text: text.into(),
      keyboard: Keyboard::Keep,
      payment_uri: None,
    }
  }

  pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
    self.keyboard = keyboard;
    self
  }

  pub fn with_payment_uri(mut self, uri: String) -> Self {
    self.payment_uri = Some(uri);
    self
  }

  /// Add a paragraph to the text
  pub fn append(&mut self, addition: &str) {
    self.text.push_str("\n\n");
    self.text.push_str(addition);
  }

  /// Sent when a dialogue finishes
  pub fn navigation() -> Self {
    Reply::new("Navigate with buttons ↘️").with_keyboard(Keyboard::navigation())
  }

  /// Sent when a dialogue is cancelled or aborted
  pub fn cancelled() -> Self {
    Reply::new("Cancelled").with_keyboard(Keyboard::navigation())
  }

  pub fn decode_failed() -> Self {
    Reply::new("Failed to decode photo!")
  }

  pub fn went_wrong() -> Self {
    Reply::new("<b>Something went wrong!</b>\n\nPlease try again later.")
  }
}

#[cfg(test)]
mod tests {
  use swapflow_data::{Context, Currency, Key, Value};
  use swapflow_step::{catalog, StepId};
  use super::{Keyboard, Reply, CANCEL_BUTTON, BACK_BUTTON};

  fn currencies() -> Vec<Currency> {
    catalog::DEFAULT_CURRENCIES.iter().map(|c| c.parse().unwrap()).collect()
  }

  fn keyboard(step_id: StepId, context: &Context) -> Keyboard {
    let steps = catalog::standard_steps(&currencies());
    let step = steps.iter().find(|s| s.id == step_id).unwrap();
    Keyboard::for_step(step, context, &currencies())
  }

  fn reply_rows(keyboard: Keyboard) -> Vec<Vec<String>> {
    match keyboard {
      Keyboard::Reply(rows) => rows,
      other => panic!("expected reply keyboard, got {:?}", other),
    }
  }

  #[test]
  fn first_step_has_no_back() {
    let rows = reply_rows(keyboard(StepId::SelectSourceCurrency, &Context::new()));
    assert_eq!(rows, vec![vec!["BTC", "LTC", "XMR"], vec![CANCEL_BUTTON]]);
  }

  #[test]
  fn excludes_chosen_currency() {
    let mut ctx = Context::new();
    ctx.insert(Key::FromCurrency, Value::Currency("LTC".parse().unwrap())).unwrap();
    let rows = reply_rows(keyboard(StepId::SelectTargetCurrency, &ctx));
    assert_eq!(rows, vec![vec!["BTC", "XMR"], vec![BACK_BUTTON, CANCEL_BUTTON]]);
  }

  #[test]
  fn yes_no_and_remove() {
    let rows = reply_rows(keyboard(StepId::SelectExchangeMode, &Context::new()));
    assert_eq!(rows[0], vec!["Yes", "No"]);
    assert_eq!(keyboard(StepId::EnterAmount, &Context::new()), Keyboard::Remove);
  }

  #[test]
  fn canned_replies() {
    assert_eq!(Reply::cancelled().keyboard, Keyboard::navigation());
    let mut reply = Reply::new("a");
    reply.append("b");
    assert_eq!(reply.text, "a\n\nb");
    assert_eq!(Reply::decode_failed().keyboard, Keyboard::Keep);
  }
}
