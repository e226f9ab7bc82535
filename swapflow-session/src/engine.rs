use std::borrow::Cow;
use std::collections::HashMap;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{event, Level};
use swapflow_base::{ObjectStore, IdError};
use swapflow_data::{Context, Input};
use swapflow_step::{catalog, Step, StepId, Path, PathId};
use swapflow_action::{
  Action, ActionResult, Reply, Services, Transport,
  PromptAction, EstimateAction, AddressAction, FinalizeOrderAction,
  address_from_payload,
};
use crate::{Error, FlowConfig, Session, Position};

static REGEX_CANCEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*[^\w\s]*\s*/?cancel\b").unwrap());
static REGEX_BACK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*[^\w\s]*\s*/?back\b").unwrap());

pub(crate) fn is_cancel(input: &Input) -> bool {
  REGEX_CANCEL.is_match(input.raw())
}

pub(crate) fn is_back(input: &Input) -> bool {
  REGEX_BACK.is_match(input.raw())
}

/// How a single call to [`FlowEngine::route`] ended
#[derive(Debug)]
enum Outcome {
  Next(StepId),
  Finished,
  Cancelled,
}

/// Moves [`Session`]s through the registered steps and paths.
///
/// The engine is immutable once built and can be shared between threads.
///
/// # Examples
/// ```
/// # use std::sync::{Arc, Mutex};
/// # use swapflow_base::ChatId;
/// # use swapflow_data::{Amount, Currency, Input};
/// # use swapflow_step::StepId;
/// # use swapflow_action::*;
/// # use swapflow_session::{FlowConfig, FlowEngine, Session};
/// # struct Stub;
/// # impl Pricing for Stub {
/// #   fn estimate(&self, _f: &Currency, r: &Currency, _a: AmountSide) -> Result<Quote, ServiceError> {
/// #     Ok(Quote { amount: Amount::from_units(1), currency: r.clone() })
/// #   }
/// # }
/// # impl OrderDesk for Stub {
/// #   fn create_floating(&self, _r: &OrderRequest) -> Result<Order, ServiceError> { Err(ServiceError::Unavailable("stub".into())) }
/// #   fn create_fixed(&self, _r: &OrderRequest) -> Result<Order, ServiceError> { Err(ServiceError::Unavailable("stub".into())) }
/// # }
/// # impl QrDecoder for Stub {
/// #   fn decode(&self, _i: &[u8]) -> Result<String, DecodeError> { Err(DecodeError::NoCode) }
/// # }
/// # #[derive(Default)]
/// # struct Outbox(Mutex<Vec<Reply>>);
/// # impl Transport for Outbox {
/// #   fn send(&self, _chat_id: ChatId, reply: Reply) { self.0.lock().unwrap().push(reply) }
/// # }
/// let services = Services { pricing: Arc::new(Stub), orders: Arc::new(Stub), decoder: Arc::new(Stub) };
/// let engine = FlowEngine::new(FlowConfig::default(), services).unwrap();
/// let outbox = Outbox::default();
///
/// let mut session = Session::new(ChatId::new(1));
/// assert_eq!(engine.enter(&mut session, Input::text("/trade"), &outbox), Some(StepId::SelectTargetCurrency));
/// assert_eq!(engine.route(&mut session, Input::text("BTC"), &outbox), Some(StepId::SelectExchangeMode));
///
/// let sent = outbox.0.lock().unwrap();
/// assert_eq!(sent[0].text, "What currency do you want to sell?");
/// assert_eq!(sent[1].text, "What currency do you want to buy with BTC?");
/// ```
#[derive(Debug)]
pub struct FlowEngine {
  config: FlowConfig,
  services: Services,
  step_store: ObjectStore<Step, StepId>,
  path_store: ObjectStore<Path, PathId>,
  actions: HashMap<StepId, Box<dyn Action + Sync + Send>>,
  general_action: Box<dyn Action + Sync + Send>,
}

impl FlowEngine {
  /// Create an engine for the standard exchange dialogue
  pub fn new(config: FlowConfig, services: Services) -> Result<Self, Error> {
    config.validate()?;
    let currencies = config.parsed_currencies()?;
    let paths = catalog::standard_paths(&config.estimate_commands[..], &config.trade_commands[..])
      .map_err(|e| Error::Config(e.to_string()))?;
    let steps = catalog::standard_steps(&currencies);

    let prompt = PromptAction::new(currencies.clone());
    let mut actions: HashMap<StepId, Box<dyn Action + Sync + Send>> = HashMap::new();
    actions.insert(StepId::PreviewEstimate, EstimateAction::new(currencies).boxed());
    actions.insert(StepId::EnterDestinationAddress, AddressAction::new(prompt.clone()).boxed());
    actions.insert(StepId::FinalizeOrder, FinalizeOrderAction::new(config.referral_code.clone()).boxed());

    Self::with_definitions(config, services, steps, paths, actions, prompt.boxed())
  }

  /// Create an engine from custom definitions.
  ///
  /// Fails if a step or path is defined twice, or a path uses a step that is not defined.
  pub fn with_definitions(
    config: FlowConfig,
    services: Services,
    steps: Vec<Step>,
    paths: Vec<Path>,
    actions: HashMap<StepId, Box<dyn Action + Sync + Send>>,
    general_action: Box<dyn Action + Sync + Send>)
    -> Result<Self, Error>
  {
    let mut step_store = ObjectStore::with_capacity(steps.len());
    for step in steps {
      step_store.register(step)?;
    }

    let mut path_store = ObjectStore::with_capacity(paths.len());
    for path in paths {
      if let Some(missing) = path.steps().iter().find(|step_id| !step_store.contains(step_id)) {
        return Err(Error::StepId(IdError::IdMissing(*missing)));
      }
      if path.first().is_none() {
        return Err(Error::Config(format!("path {} has no steps", path.id)));
      }
      path_store.register(path)?;
    }

    Ok(FlowEngine {
      config,
      services,
      step_store,
      path_store,
      actions,
      general_action,
    })
  }

  pub fn config(&self) -> &FlowConfig {
    &self.config
  }

  pub fn step_store(&self) -> &ObjectStore<Step, StepId> {
    &self.step_store
  }

  pub fn path_store(&self) -> &ObjectStore<Path, PathId> {
    &self.path_store
  }

  /// Whether `input` starts a dialogue: a single word matching one of the paths' entry commands
  pub fn check_entry_token(&self, input: &Input) -> bool {
    input.is_single_word() && self.entry_path(input).is_some()
  }

  /// Whether `input` is a back or cancel request
  pub fn is_control(&self, input: &Input) -> bool {
    is_back(input) || is_cancel(input)
  }

  fn entry_path(&self, input: &Input) -> Option<&Path> {
    let token = input.first_word();
    self.path_store.iter().find(|path| path.matches_entry(token))
  }

  /// Start a new dialogue on the path whose entry command matches `input`.
  ///
  /// Whatever the session held before is dropped.
  pub fn enter(&self, session: &mut Session, input: Input, transport: &dyn Transport) -> Option<StepId> {
    session.clear();

    let path = match self.entry_path(&input) {
      Some(path) => path,
      None => {
        let err = Error::NotAnEntryToken(input.raw().to_owned());
        self.abort(session, err, transport);
        return None;
      }
    };
    // paths are checked for steps when registered
    let first = match path.first() {
      Some(first) => *first,
      None => {
        self.abort(session, Error::Config(format!("path {} has no steps", path.id)), transport);
        return None;
      }
    };

    event!(Level::INFO, chat = %session.chat_id(), path = %path.id, "dialogue entered");
    session.position = Some(Position { path: path.id, step: first, awaiting: None });
    self.route(session, input, transport)
  }

  /// Handle one inbound message for a session with a dialogue in progress.
  ///
  /// Returns the step the next message will be routed to, or `None` when the dialogue ended,
  /// whether it finished, was cancelled or was aborted.
  pub fn route(&self, session: &mut Session, input: Input, transport: &dyn Transport) -> Option<StepId> {
    match self.try_route(session, input, transport) {
      Ok(Outcome::Next(step_id)) => Some(step_id),
      Ok(Outcome::Finished) => {
        event!(Level::INFO, chat = %session.chat_id(), "dialogue finished");
        session.clear();
        transport.send(session.chat_id(), Reply::navigation());
        None
      },
      Ok(Outcome::Cancelled) => {
        event!(Level::INFO, chat = %session.chat_id(), "dialogue cancelled");
        session.clear();
        transport.send(session.chat_id(), Reply::cancelled());
        None
      },
      Err(err) => {
        self.abort(session, err, transport);
        None
      },
    }
  }

  fn abort(&self, session: &mut Session, err: Error, transport: &dyn Transport) {
    event!(Level::ERROR, chat = %session.chat_id(), error = %err, "dialogue aborted");
    if err.is_service_failure() {
      transport.send(session.chat_id(), Reply::went_wrong());
    }
    session.clear();
    transport.send(session.chat_id(), Reply::cancelled());
  }

  /// Each pass of the loop is one attempt:
  /// - Record a snapshot of the session
  /// - Cancel, or rewind history when going back or retrying
  /// - Capture the answer to the awaited step on a working copy of the context
  /// - Run the current step's action, commit the working copy and send the reply
  /// - Move to the next step, or finish after the path's last step
  ///
  /// An unreadable photo sends a notice and runs one more attempt that asks for it again,
  /// until `attempt_limit` photos in a row could not be read.
  fn try_route(&self, session: &mut Session, input: Input, transport: &dyn Transport)
      -> Result<Outcome, Error>
  {
    let mut input = input;
    let mut retry = false;
    let mut replaying = false;
    loop {
      session.history.push(session.snapshot(&input));

      if retry || is_back(&input) {
        replaying = retry;
        retry = false;
        let snapshot = session.history.rewind()?.clone();
        session.restore(&snapshot);
        input = snapshot.input;
      } else if is_cancel(&input) {
        return Ok(Outcome::Cancelled);
      }

      let position = session.position.ok_or(Error::NoActiveDialogue)?;
      let path = self.path_store.try_get(&position.path)?;
      let step = self.step_store.try_get(&position.step)?;
      event!(Level::DEBUG, chat = %session.chat_id(), step = %step.id, awaiting = ?position.awaiting, replaying, "attempt");

      let mut working = session.context.clone();
      if let Some(awaiting) = &position.awaiting {
        let awaiting = self.step_store.try_get(awaiting)?;
        match self.capture(awaiting, &input, &mut working) {
          Ok(()) => {
            if !replaying {
              session.decode_failures = 0;
            }
          },
          Err(Error::Decode(err)) if session.decode_failures + 1 < self.config.attempt_limit => {
            session.decode_failures += 1;
            event!(Level::WARN, chat = %session.chat_id(), error = %err, failures = session.decode_failures, "photo not readable, asking again");
            transport.send(session.chat_id(), Reply::decode_failed());
            retry = true;
            continue;
          },
          Err(err) => return Err(err),
        }
      }

      let (reply, data) = self.start_action(step, &working)?;
      working.merge_from(data);
      session.context = working;
      transport.send(session.chat_id(), reply);

      if path.is_last(&step.id) {
        return Ok(Outcome::Finished);
      }
      let next = step.next(path).ok_or(Error::StepId(IdError::IdUnexpected(step.id)))?;
      session.position = Some(Position { path: path.id, step: next, awaiting: Some(step.id) });
      return Ok(Outcome::Next(next));
    }
  }

  /// Validate the answer to `step` and store it in `context`
  fn capture(&self, step: &Step, input: &Input, context: &mut Context) -> Result<(), Error> {
    let answer: Cow<str> = match input.photo() {
      Some(photo) if step.accepts_photo() => {
        let payload = self.services.decoder.decode(photo.bytes())?;
        Cow::Owned(address_from_payload(&payload)?)
      },
      _ => Cow::Borrowed(input.first_word()),
    };

    if !step.validate(&answer) {
      return Err(Error::Rejected(step.id));
    }
    step.apply(&answer, context)?;
    Ok(())
  }

  /// Run the step's own action, falling back to the general action when there is none or it cannot fulfill
  fn start_action(&self, step: &Step, context: &Context) -> Result<(Reply, Context), Error> {
    let specific = match self.actions.get(&step.id) {
      Some(action) => action.start(step, context, &self.services)?,
      None => ActionResult::CannotFulfill,
    };
    let result = match specific {
      ActionResult::CannotFulfill => self.general_action.start(step, context, &self.services)?,
      result => result,
    };
    match result {
      ActionResult::StartWith { reply, data } => Ok((reply, data)),
      ActionResult::CannotFulfill => Err(Error::CannotFulfill(step.id)),
    }
  }
}
