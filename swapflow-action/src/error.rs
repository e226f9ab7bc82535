use thiserror::Error;
use swapflow_data::{InvalidValue, Key};

/// A collaborator (pricing, order desk) could not serve a request
#[derive(Debug, Error, PartialEq, Clone)]
pub enum ServiceError {
  #[error("service unavailable: {0}")]
  Unavailable(String),
  #[error("request rejected: {0}")]
  Rejected(String),
}

/// An uploaded photo could not be turned into an address. Recoverable by asking again.
#[derive(Debug, Error, PartialEq, Clone, Copy)]
pub enum DecodeError {
  #[error("no QR code found in image")]
  NoCode,
  #[error("QR payload is not text")]
  NotText,
  #[error("QR payload holds no address")]
  NoAddress,
}

#[derive(Debug, Error, PartialEq, Clone, Copy)]
pub enum TemplateError {
  #[error("placeholder {0} has no parameter")]
  MissingParam(usize),
  #[error("parameter {0} has no placeholder")]
  UnusedParam(usize),
}

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ActionError {
  #[error("no value collected for {0}")]
  MissingData(Key),
  #[error(transparent)]
  Service(#[from] ServiceError),
  #[error(transparent)]
  Template(#[from] TemplateError),
  #[error("invalid value: {0}")]
  InvalidValue(#[from] InvalidValue),
}
