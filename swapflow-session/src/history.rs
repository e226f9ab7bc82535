use swapflow_data::{Context, Input};
use crate::{Error, Position};

/// What a session looked like right before an attempt, and the input that attempt was for
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
  pub position: Option<Position>,
  pub context: Context,
  pub input: Input,
}

/// Snapshots of a session, oldest first. One is recorded before every attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
  entries: Vec<Snapshot>,
}

impl History {
  pub fn new() -> Self {
    History { entries: Vec::new() }
  }

  pub fn push(&mut self, snapshot: Snapshot) {
    self.entries.push(snapshot);
  }

  pub fn top(&self) -> Option<&Snapshot> {
    self.entries.last()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn clear(&mut self) {
    self.entries.clear();
  }

  pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
    self.entries.iter()
  }

  /// Discard the two most recent snapshots and return the one now on top.
  ///
  /// The most recent snapshot is the attempt in progress, the one below it the attempt being undone.
  /// Fails without discarding anything when no snapshot would remain.
  pub fn rewind(&mut self) -> Result<&Snapshot, Error> {
    if self.entries.len() < 3 {
      return Err(Error::NothingToRewind);
    }
    let keep = self.entries.len() - 2;
    self.entries.truncate(keep);
    self.top().ok_or(Error::NothingToRewind)
  }
}

#[cfg(test)]
mod tests {
  use swapflow_data::{Context, Input};
  use super::{History, Snapshot};
  use crate::Error;

  fn snapshot(text: &str) -> Snapshot {
    Snapshot { position: None, context: Context::new(), input: Input::text(text) }
  }

  #[test]
  fn rewind_pops_two() {
    let mut history = History::new();
    history.push(snapshot("trade"));
    history.push(snapshot("BTC"));
    history.push(snapshot("back"));

    assert_eq!(history.rewind().map(|s| s.input.raw().to_owned()), Ok("trade".to_owned()));
    assert_eq!(history.len(), 1);
  }

  #[test]
  fn nothing_to_rewind() {
    let mut history = History::new();
    history.push(snapshot("trade"));
    history.push(snapshot("back"));
    assert_eq!(history.rewind().map(|s| s.clone()), Err(Error::NothingToRewind));
    assert_eq!(history.len(), 2);
  }
}
