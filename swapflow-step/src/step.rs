use regex::Regex;
use swapflow_base::ObjectStoreContent;
use swapflow_data::{Context, ExchangeMode, InvalidValue, Key};
use super::Path;

#[derive(Hash, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub enum StepId {
  SelectSourceCurrency,
  SelectTargetCurrency,
  SelectExchangeMode,
  EnterAmount,
  PreviewEstimate,
  EnterDestinationAddress,
  FinalizeOrder,
}

impl std::fmt::Display for StepId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    std::fmt::Debug::fmt(self, f)
  }
}

/// Text with positional `{}` placeholders, filled from the values stored under `params` in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
  pub text: String,
  pub params: Vec<Key>,
}

impl Template {
  pub fn new<STR>(text: STR, params: Vec<Key>) -> Self
      where STR: Into<String>
  {
    Template { text: text.into(), params }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
  /// The step's action composes the whole reply
  None,
  Plain(Template),
  /// Wording depends on the exchange mode collected so far
  ByMode { fixed: Template, floating: Template },
}

/// How the reply keyboard under a step's prompt is laid out
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layout {
  /// One row of the supported currencies, optionally leaving out the currency stored under a key
  Currencies { exclude: Option<Key> },
  YesNo,
  Continue,
  /// Free-text answer, the keyboard is removed
  Remove,
}

/// Checks a reply before it gets stored
#[derive(Debug, Clone)]
pub enum Rule {
  /// Case-insensitive membership
  OneOf(Vec<String>),
  Pattern(Regex),
}

impl Rule {
  pub fn matches(&self, reply: &str) -> bool {
    match self {
      Rule::OneOf(options) => options.iter().any(|option| option.eq_ignore_ascii_case(reply)),
      Rule::Pattern(regex) => regex.is_match(reply),
    }
  }
}

/// Where a reply to the step's prompt is stored, and the rule it must pass first
#[derive(Debug, Clone)]
pub struct Answer {
  pub key: Key,
  pub rule: Option<Rule>,
}

impl Answer {
  pub fn new(key: Key, rule: Option<Rule>) -> Self {
    Answer { key, rule }
  }
}

/// A single question in a dialogue
///
/// A step shows a prompt and, when the user replies, validates the reply and stores it in the [`Context`].
/// Which step follows is decided by the [`Path`] the dialogue is on.
#[derive(Debug)]
pub struct Step {
  pub id: StepId,
  prompt: Prompt,
  answer: Option<Answer>,
  layout: Layout,
  back_button: bool,
  accepts_photo: bool,
}

impl ObjectStoreContent for Step {
  type IdType = StepId;

  fn id(&self) -> &Self::IdType {
    &self.id
  }
}

impl Step {
  /// Create a new step. By default it stores nothing, removes the keyboard and offers a back button.
  pub fn new(id: StepId, prompt: Prompt) -> Self {
    Step {
      id,
      prompt,
      answer: None,
      layout: Layout::Remove,
      back_button: true,
      accepts_photo: false,
    }
  }

  pub fn with_answer(mut self, answer: Answer) -> Self {
    self.answer = Some(answer);
    self
  }

  pub fn with_layout(mut self, layout: Layout) -> Self {
    self.layout = layout;
    self
  }

  pub fn without_back_button(mut self) -> Self {
    self.back_button = false;
    self
  }

  pub fn accepting_photo(mut self) -> Self {
    self.accepts_photo = true;
    self
  }

  pub fn answer(&self) -> Option<&Answer> {
    self.answer.as_ref()
  }

  pub fn layout(&self) -> Layout {
    self.layout
  }

  pub fn has_back_button(&self) -> bool {
    self.back_button
  }

  pub fn accepts_photo(&self) -> bool {
    self.accepts_photo
  }

  /// Template to show for the given mode, `None` if the step's action composes the reply itself
  pub fn prompt(&self, mode: ExchangeMode) -> Option<&Template> {
    match &self.prompt {
      Prompt::None => None,
      Prompt::Plain(template) => Some(template),
      Prompt::ByMode { fixed, floating } => {
        if mode.is_fixed() { Some(fixed) } else { Some(floating) }
      }
    }
  }

  /// Whether `reply` passes this step's rule. Always true when there is no rule.
  pub fn validate(&self, reply: &str) -> bool {
    match self.answer.as_ref().and_then(|answer| answer.rule.as_ref()) {
      None => true,
      Some(rule) => rule.matches(reply),
    }
  }

  /// Store `reply` under the step's key. Does nothing if the step stores nothing or the reply is invalid.
  pub fn apply(&self, reply: &str, context: &mut Context) -> Result<(), InvalidValue> {
    let answer = match &self.answer {
      Some(answer) => answer,
      None => return Ok(()),
    };
    if !self.validate(reply) {
      return Ok(());
    }
    let val = answer.key.value_from_str(reply)?;
    context.insert(answer.key, val)
  }

  /// The step following this one on `path`, `None` if this is the last one
  pub fn next(&self, path: &Path) -> Option<StepId> {
    path.next_after(&self.id).copied()
  }
}
