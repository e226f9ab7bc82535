//! The standard exchange dialogue: its steps, and the Estimate and Trade paths through them.

use once_cell::sync::Lazy;
use regex::Regex;
use swapflow_data::{Currency, Key};
use super::{Step, StepId, Answer, Rule, Prompt, Template, Layout, Path, PathId};

pub const DEFAULT_CURRENCIES: &[&str] = &["BTC", "LTC", "XMR"];
pub const ESTIMATE_COMMANDS: &[&str] = &["estimate", "calculate"];
pub const TRADE_COMMANDS: &[&str] = &["trade", "order", "swap", "fixed", "pay"];

pub static REGEX_DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]*\.?[0-9]+$").unwrap());

pub const ESTIMATE_STEPS: &[StepId] = &[
  StepId::SelectSourceCurrency,
  StepId::SelectTargetCurrency,
  StepId::EnterAmount,
  StepId::PreviewEstimate,
  StepId::EnterDestinationAddress,
  StepId::FinalizeOrder,
];

pub const TRADE_STEPS: &[StepId] = &[
  StepId::SelectSourceCurrency,
  StepId::SelectTargetCurrency,
  StepId::SelectExchangeMode,
  StepId::EnterAmount,
  StepId::EnterDestinationAddress,
  StepId::FinalizeOrder,
];

/// Case-insensitive match of a whole token against `commands`, allowing leading spaces and a `/`
pub fn entry_regex<STR>(commands: &[STR]) -> Result<Regex, regex::Error>
    where STR: AsRef<str>
{
  let alternatives = commands
    .iter()
    .map(|command| regex::escape(command.as_ref()))
    .collect::<Vec<_>>()
    .join("|");
  Regex::new(&format!(r"(?i)^ */?(?:{})$", alternatives))
}

/// Every step of the exchange dialogue, offering `currencies` as the supported set
pub fn standard_steps(currencies: &[Currency]) -> Vec<Step> {
  let supported = Rule::OneOf(currencies.iter().map(|c| c.code().to_owned()).collect());

  vec![
    Step::new(
      StepId::SelectSourceCurrency,
      Prompt::Plain(Template::new("What currency do you want to sell?", vec![])))
      .with_answer(Answer::new(Key::FromCurrency, Some(supported.clone())))
      .with_layout(Layout::Currencies { exclude: None })
      .without_back_button(),

    Step::new(
      StepId::SelectTargetCurrency,
      Prompt::Plain(Template::new("What currency do you want to buy with {}?", vec![Key::FromCurrency])))
      .with_answer(Answer::new(Key::ReceiveCurrency, Some(supported)))
      .with_layout(Layout::Currencies { exclude: Some(Key::FromCurrency) }),

    Step::new(
      StepId::SelectExchangeMode,
      Prompt::Plain(Template::new(
        "Do you want to receive a specific amount of {}?\n\n\
        Pick <i>Yes</i> to select how much {} you want to get.\n\n\
        Pick <i>No</i> to select how much {} you want to sell.",
        vec![Key::ReceiveCurrency, Key::ReceiveCurrency, Key::FromCurrency])))
      .with_answer(Answer::new(Key::Fixed, Some(Rule::OneOf(vec!["Yes".to_owned(), "No".to_owned()]))))
      .with_layout(Layout::YesNo),

    Step::new(
      StepId::EnterAmount,
      Prompt::ByMode {
        fixed: Template::new("How much {} do you want to buy?", vec![Key::ReceiveCurrency]),
        floating: Template::new("How much {} do you want to sell?", vec![Key::FromCurrency]),
      })
      .with_answer(Answer::new(Key::Amount, Some(Rule::Pattern(REGEX_DECIMAL.clone()))))
      .with_layout(Layout::Remove),

    // the "Continue" reply carries nothing worth storing
    Step::new(StepId::PreviewEstimate, Prompt::None)
      .with_layout(Layout::Continue),

    Step::new(
      StepId::EnterDestinationAddress,
      Prompt::Plain(Template::new(
        "What {} address do you want to receive {} to?\n\n\
        Paste the address or send a photo of the QR code 📸.",
        vec![Key::ReceiveCurrency, Key::ReceiveCurrency])))
      .with_answer(Answer::new(Key::ReceiveAddress, None))
      .with_layout(Layout::Remove)
      .accepting_photo(),

    Step::new(StepId::FinalizeOrder, Prompt::None)
      .with_layout(Layout::Remove),
  ]
}

/// The Estimate and Trade paths, in the order entry tokens are matched against them
pub fn standard_paths<STR>(estimate_commands: &[STR], trade_commands: &[STR]) -> Result<Vec<Path>, regex::Error>
    where STR: AsRef<str>
{
  Ok(vec![
    Path::new(PathId::Estimate, entry_regex(estimate_commands)?, ESTIMATE_STEPS.to_vec()),
    Path::new(PathId::Trade, entry_regex(trade_commands)?, TRADE_STEPS.to_vec()),
  ])
}
