use swapflow_base::ChatId;
use swapflow_data::{Context, Input};
use swapflow_step::{PathId, StepId};
use super::{History, Snapshot};

mod session_store;
pub use session_store::SessionStore;

/// Where a dialogue stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct Position {
  pub path: PathId,
  /// The step presented by the next attempt
  pub step: StepId,
  /// The step whose prompt the user is answering, `None` before the first prompt
  pub awaiting: Option<StepId>,
}

/// The dialogue state of one chat: collected values, position and history.
///
/// A session with no position has no dialogue running. Clearing resets everything but the chat id.
#[derive(Debug, Clone)]
pub struct Session {
  chat_id: ChatId,
  pub(crate) context: Context,
  pub(crate) position: Option<Position>,
  pub(crate) history: History,
  /// Unreadable photos received in a row
  pub(crate) decode_failures: usize,
}

impl Session {
  pub fn new(chat_id: ChatId) -> Self {
    Session {
      chat_id,
      context: Context::new(),
      position: None,
      history: History::new(),
      decode_failures: 0,
    }
  }

  pub fn chat_id(&self) -> ChatId {
    self.chat_id
  }

  pub fn context(&self) -> &Context {
    &self.context
  }

  pub fn position(&self) -> Option<&Position> {
    self.position.as_ref()
  }

  pub fn history(&self) -> &History {
    &self.history
  }

  pub fn is_active(&self) -> bool {
    self.position.is_some()
  }

  pub fn clear(&mut self) {
    self.context.clear();
    self.position = None;
    self.history.clear();
    self.decode_failures = 0;
  }

  pub(crate) fn snapshot(&self, input: &Input) -> Snapshot {
    Snapshot {
      position: self.position,
      context: self.context.clone(),
      input: input.clone(),
    }
  }

  /// Set the position and context back to a snapshot's. History is left alone.
  pub(crate) fn restore(&mut self, snapshot: &Snapshot) {
    self.position = snapshot.position;
    self.context = snapshot.context.clone();
  }
}
