use crate::{generate_id_type, ObjectStoreContent};

generate_id_type!(TestEntryId);

/// A registry entry with a label, standing in for steps and paths
#[derive(Debug, PartialEq)]
pub struct TestEntry {
  id: TestEntryId,
  label: &'static str,
}

impl TestEntry {
  pub fn new(id: i64, label: &'static str) -> Self {
    TestEntry { id: TestEntryId::new(id), label }
  }

  pub fn label(&self) -> &'static str {
    self.label
  }
}

impl ObjectStoreContent for TestEntry {
  type IdType = TestEntryId;

  fn id(&self) -> &Self::IdType {
    &self.id
  }
}
