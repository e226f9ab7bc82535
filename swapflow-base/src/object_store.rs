use std::hash::Hash;
use std::collections::HashMap;
use super::IdError;

pub trait ObjectStoreContent {
  type IdType;
  fn id(&self) -> &Self::IdType;
}

/// A store of objects keyed by their ID that remembers registration order.
///
/// Registries built at startup (steps, paths) use this so that lookups are by id
/// while iteration (e.g. matching entry tokens against paths) follows the order objects were registered in.
///
/// # Examples
/// ```
/// # use swapflow_base::{ObjectStore, ObjectStoreContent, IdError};
/// # struct Object { id: u8 }
/// # impl ObjectStoreContent for Object {
/// #   type IdType = u8;
/// #   fn id(&self) -> &Self::IdType { &self.id }
/// # }
/// let mut store = ObjectStore::new();
/// store.register(Object { id: 4 }).unwrap();
/// assert!(store.get(&4).is_some());
/// assert_eq!(store.register(Object { id: 4 }), Err(IdError::IdAlreadyExists(4)));
/// ```
#[derive(Debug)]
pub struct ObjectStore<T, TID>
    where TID: Eq + Hash
{
  id_to_object: HashMap<TID, T>,
  order: Vec<TID>,
}

impl<T, TID> ObjectStore<T, TID>
    where T: ObjectStoreContent<IdType = TID>,
          TID: Eq + Hash + Clone,
{
  /// Create a new ObjectStore
  pub fn new() -> Self {
    Self::with_capacity(0)
  }

  /// Create a new ObjectStore with initial capacity
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      id_to_object: HashMap::with_capacity(capacity),
      order: Vec::with_capacity(capacity),
    }
  }

  /// Registers an object. Each ID can only be registered once.
  pub fn register(&mut self, object: T) -> Result<TID, IdError<TID>> {
    if self.id_to_object.contains_key(object.id()) {
      return Err(IdError::IdAlreadyExists(object.id().clone()))
    }

    let object_id = object.id().clone();
    self.order.push(object_id.clone());
    self.id_to_object.insert(object_id.clone(), object);
    Ok(object_id)
  }

  /// Get an object by its ID
  pub fn get(&self, id: &TID) -> Option<&T> {
    self.id_to_object.get(id)
  }

  /// Get an object by its ID or fail with [`IdError::IdMissing`]
  pub fn try_get(&self, id: &TID) -> Result<&T, IdError<TID>> {
    self.get(id).ok_or_else(|| IdError::IdMissing(id.clone()))
  }

  pub fn contains(&self, id: &TID) -> bool {
    self.id_to_object.contains_key(id)
  }

  pub fn len(&self) -> usize {
    self.order.len()
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }

  /// Iterate objects in registration order
  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.order.iter().filter_map(move |id| self.id_to_object.get(id))
  }
}

impl<T, TID> Default for ObjectStore<T, TID>
    where T: ObjectStoreContent<IdType = TID>,
          TID: Eq + Hash + Clone,
{
  fn default() -> Self {
    Self::new()
  }
}


#[cfg(test)]
mod tests {
  use super::ObjectStore;
  use crate::{test::TestEntry, test::TestEntryId, IdError};

  #[test]
  fn basic() {
    let mut store: ObjectStore<TestEntry, TestEntryId> = ObjectStore::new();
    let sell = store.register(TestEntry::new(1, "sell")).unwrap();
    let buy = store.register(TestEntry::new(2, "buy")).unwrap();
    assert_ne!(sell, buy);

    assert_eq!(store.register(TestEntry::new(1, "again")), Err(IdError::IdAlreadyExists(sell)));
    assert_eq!(store.get(&sell).map(TestEntry::label), Some("sell"));

    let missing = TestEntryId::new(999);
    assert_eq!(store.get(&missing), None);
    assert_eq!(store.try_get(&missing), Err(IdError::IdMissing(missing)));
    assert!(store.contains(&buy));
    assert_eq!(store.len(), 2);
  }

  #[test]
  fn registration_order() {
    let mut store = ObjectStore::with_capacity(4);
    for (id, label) in &[(7, "estimate"), (3, "trade"), (9, "swap")] {
      store.register(TestEntry::new(*id, *label)).unwrap();
    }
    let labels = store.iter().map(TestEntry::label).collect::<Vec<_>>();
    assert_eq!(labels, vec!["estimate", "trade", "swap"]);
  }
}
