use swapflow_data::{Context, Key, Amount, Currency};
use swapflow_step::Step;
use crate::{ActionError, Reply, Services, style};

mod action_prompt;
pub use action_prompt::PromptAction;

mod action_estimate;
pub use action_estimate::EstimateAction;

mod action_address;
pub use action_address::AddressAction;

mod action_finalize;
pub use action_finalize::FinalizeOrderAction;

/// The result of [`Action::start()`]
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
  /// Show `reply` to the user. Values in `data` are merged into the session's context.
  StartWith { reply: Reply, data: Context },

  /// The action does not handle the step as a result of a normal condition,
  /// such as a step without a prompt. This should not be used for error situations.
  CannotFulfill,
}

impl ActionResult {
  pub fn reply(reply: Reply) -> Self {
    ActionResult::StartWith { reply, data: Context::new() }
  }
}

/// `Action`s produce the reply shown when a dialogue reaches a [`Step`]
pub trait Action: std::fmt::Debug {
  /// Start the action for a [`Step`]
  ///
  /// `context` holds everything collected so far, including the answer to the previous step.
  fn start(&self, step: &Step, context: &Context, services: &Services) -> Result<ActionResult, ActionError>;

  fn boxed(self) -> Box<dyn Action + Sync + Send>
      where Self: Sized + Sync + Send + 'static
  {
    Box::new(self)
  }
}

pub(crate) fn require_currency(context: &Context, key: Key) -> Result<&Currency, ActionError> {
  context.currency(key).ok_or(ActionError::MissingData(key))
}

pub(crate) fn require_amount(context: &Context, key: Key) -> Result<&Amount, ActionError> {
  context.amount(key).ok_or(ActionError::MissingData(key))
}

/// `<b>🧮 ESTIMATE 🧮</b>` followed by the two sides of the exchange
pub(crate) fn estimate_text(send: &Amount, from: &Currency, receive: &Amount, to: &Currency) -> String {
  let lhs = style::code_escaped(&format!("{} {}", send, from));
  let rhs = style::code_escaped(&format!("{} {}", receive, to));
  format!("{}\n\n{} ➡ {}", style::b("🧮 ESTIMATE 🧮"), lhs, rhs)
}
