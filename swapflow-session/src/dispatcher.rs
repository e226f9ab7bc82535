use std::sync::Arc;
use tracing::{event, Level};
use swapflow_base::ChatId;
use swapflow_data::Input;
use swapflow_step::StepId;
use swapflow_action::{Keyboard, Reply, Transport};
use crate::{Error, FlowEngine, SessionStore};

/// What the [`Dispatcher`] did with a message
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dispatch {
  /// The message went to a dialogue; holds the step the next message goes to, if any
  Routed(Option<StepId>),
  /// Not part of a dialogue, the caller should handle it (a command, free text)
  Passthrough,
}

/// Routes inbound messages to the dialogue of their chat.
#[derive(Debug)]
pub struct Dispatcher {
  engine: Arc<FlowEngine>,
  sessions: SessionStore,
}

impl Dispatcher {
  pub fn new(engine: Arc<FlowEngine>) -> Self {
    Dispatcher {
      engine,
      sessions: SessionStore::new(),
    }
  }

  pub fn engine(&self) -> &FlowEngine {
    &self.engine
  }

  pub fn sessions(&self) -> &SessionStore {
    &self.sessions
  }

  /// Handle one message for `chat_id`.
  ///
  /// - An entry command starts a new dialogue, replacing any in progress when given as a `/command`
  /// - Any other `/command` cancels the dialogue in progress and passes through
  /// - Everything else goes to the dialogue in progress, or passes through when there is none
  pub fn handle(&self, chat_id: ChatId, input: Input, transport: &dyn Transport) -> Result<Dispatch, Error> {
    let mut session = self.sessions.get_or_create(chat_id)?;
    if session.is_poisoned() {
      // a panic mid-message left the dialogue in an unknown state, start over
      event!(Level::WARN, chat = %chat_id, "session lock poisoned, dialogue reset");
      self.sessions.remove(&chat_id)?;
      session = self.sessions.get_or_create(chat_id)?;
    }
    let mut session = session.lock().map_err(|_e| Error::Poisoned)?;

    let is_command = input.raw().trim_start().starts_with('/');
    let is_entry = self.engine.check_entry_token(&input);

    if is_entry && (is_command || !session.is_active()) {
      return Ok(Dispatch::Routed(self.engine.enter(&mut session, input, transport)));
    }

    if !session.is_active() {
      return Ok(Dispatch::Passthrough);
    }

    if is_command && !self.engine.is_control(&input) {
      event!(Level::INFO, chat = %chat_id, command = %input.raw(), "dialogue interrupted by command");
      session.clear();
      transport.send(chat_id, Reply::new("Cancelled").with_keyboard(Keyboard::Remove));
      return Ok(Dispatch::Passthrough);
    }

    Ok(Dispatch::Routed(self.engine.route(&mut session, input, transport)))
  }
}
