use regex::Regex;
use swapflow_base::ObjectStoreContent;
use super::StepId;

#[derive(Hash, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub enum PathId {
  Estimate,
  Trade,
}

impl std::fmt::Display for PathId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    std::fmt::Debug::fmt(self, f)
  }
}

/// An ordered sequence of [`Step`](crate::Step)s, entered with a matching command.
#[derive(Debug)]
pub struct Path {
  pub id: PathId,
  entry: Regex,
  steps: Vec<StepId>,
}

impl ObjectStoreContent for Path {
  type IdType = PathId;

  fn id(&self) -> &Self::IdType {
    &self.id
  }
}

impl Path {
  pub fn new(id: PathId, entry: Regex, steps: Vec<StepId>) -> Self {
    Path { id, entry, steps }
  }

  pub fn steps(&self) -> &[StepId] {
    &self.steps
  }

  pub fn first(&self) -> Option<&StepId> {
    self.steps.first()
  }

  /// Get the step that directly follows `prev_step_id`
  pub fn next_after(&self, prev_step_id: &StepId) -> Option<&StepId> {
    let mut skipped = false;
    let mut iter = self.steps
      .iter()
      .skip_while(|step_id| {
        // find the prev, let it skip once, then stop
        if skipped {
          return false;
        }
        if *step_id == prev_step_id {
          skipped = true;
        }
        true
      });
    iter.next()
  }

  pub fn position(&self, step_id: &StepId) -> Option<usize> {
    self.steps.iter().position(|id| id == step_id)
  }

  pub fn contains(&self, step_id: &StepId) -> bool {
    self.position(step_id).is_some()
  }

  pub fn is_last(&self, step_id: &StepId) -> bool {
    self.steps.last() == Some(step_id)
  }

  /// Whether `token` is one of the commands that start this path
  pub fn matches_entry(&self, token: &str) -> bool {
    self.entry.is_match(token)
  }
}
