#[derive(Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub enum IdError<TID> {
  CannotParse(String),
  IdAlreadyExists(TID),
  IdMissing(TID),
  IdUnexpected(TID),
}

impl<TID: std::fmt::Debug> std::fmt::Display for IdError<TID> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      IdError::CannotParse(s) => write!(f, "cannot parse id from {:?}", s),
      IdError::IdAlreadyExists(id) => write!(f, "id already exists: {:?}", id),
      IdError::IdMissing(id) => write!(f, "id missing: {:?}", id),
      IdError::IdUnexpected(id) => write!(f, "unexpected id: {:?}", id),
    }
  }
}

impl<TID: std::fmt::Debug> std::error::Error for IdError<TID> {}
