use thiserror::Error;
use swapflow_base::IdError;
use swapflow_data::InvalidValue;
use swapflow_step::{StepId, PathId};
use swapflow_action::{ActionError, DecodeError, ServiceError};

#[derive(Debug, Error, PartialEq, Clone)]
pub enum Error {
  // ID errors
  #[error("step: {0}")]
  StepId(IdError<StepId>),
  #[error("path: {0}")]
  PathId(IdError<PathId>),

  // reply errors
  #[error("reply rejected by {0}")]
  Rejected(StepId),
  #[error("invalid value: {0}")]
  InvalidValue(#[from] InvalidValue),
  #[error("photo: {0}")]
  Decode(#[from] DecodeError),

  // navigation errors
  #[error("no dialogue in progress")]
  NoActiveDialogue,
  #[error("nothing to go back to")]
  NothingToRewind,
  #[error("{0:?} does not start a dialogue")]
  NotAnEntryToken(String),

  // action errors
  #[error("no action could fulfill {0}")]
  CannotFulfill(StepId),
  #[error(transparent)]
  Action(#[from] ActionError),

  #[error("invalid configuration: {0}")]
  Config(String),
  #[error("session lock poisoned")]
  Poisoned,
}

impl Error {
  /// Whether an exchange-side collaborator failed, as opposed to the user or the dialogue
  pub fn is_service_failure(&self) -> bool {
    matches!(self, Error::Action(ActionError::Service(_)))
  }
}

impl From<ServiceError> for Error {
  fn from(err: ServiceError) -> Self {
    Error::Action(ActionError::Service(err))
  }
}

macro_rules! from_id_error {
  ($id_type:ident) => {
    impl From<IdError<$id_type>> for Error {
      fn from(err: IdError<$id_type>) -> Self {
        Error::$id_type(err)
      }
    }
  };
}

from_id_error!(StepId);
from_id_error!(PathId);
