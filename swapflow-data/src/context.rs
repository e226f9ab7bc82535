use std::collections::BTreeMap;
use std::sync::Arc;
use super::{InvalidValue, Key, Value, Amount, Currency, ExchangeMode};

/// Store the [`Value`]s collected by a dialogue, keyed by [`Key`].
///
/// Cloning a `Context` is cheap: the map is shared until one of the clones is written to,
/// at which point that clone gets its own copy. A clone taken as a snapshot therefore never
/// observes later writes to the context it was taken from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Context {
  data: Arc<BTreeMap<Key, Value>>,
}

impl Context {
  /// Create a new, empty Context
  pub fn new() -> Self {
    Self {
      data: Arc::new(BTreeMap::new())
    }
  }

  /// Add a new value. Fails if the value is not the type stored under `key`.
  pub fn insert(&mut self, key: Key, val: Value) -> Result<(), InvalidValue> {
    key.validate_val_type(&val)?;
    Arc::make_mut(&mut self.data).insert(key, val);
    Ok(())
  }

  pub fn get(&self, key: &Key) -> Option<&Value> {
    self.data.get(key)
  }

  pub fn contains(&self, key: &Key) -> bool {
    self.data.contains_key(key)
  }

  pub fn remove(&mut self, key: &Key) -> Option<Value> {
    if !self.data.contains_key(key) {
      return None;
    }
    Arc::make_mut(&mut self.data).remove(key)
  }

  /// Drop every value. Other clones keep theirs.
  pub fn clear(&mut self) {
    self.data = Arc::new(BTreeMap::new());
  }

  pub fn len(&self) -> usize {
    self.data.len()
  }

  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
    self.data.iter()
  }

  /// Merge the data from another `Context` into this one.
  pub fn merge_from(&mut self, src: Context) {
    if src.is_empty() {
      return;
    }
    let dst = Arc::make_mut(&mut self.data);
    for (k, v) in src.data.iter() {
      dst.insert(*k, v.clone());
    }
  }

  pub fn currency(&self, key: Key) -> Option<&Currency> {
    self.get(&key).and_then(Value::as_currency)
  }

  pub fn amount(&self, key: Key) -> Option<&Amount> {
    self.get(&key).and_then(Value::as_amount)
  }

  pub fn text(&self, key: Key) -> Option<&str> {
    self.get(&key).and_then(Value::as_text)
  }

  /// The exchange mode, [`Floating`](ExchangeMode::Floating) when it was never asked
  pub fn mode(&self) -> ExchangeMode {
    self.get(&Key::Fixed)
      .and_then(Value::as_mode)
      .unwrap_or_default()
  }

  /// Whether both contexts currently share the same underlying map
  pub fn shares_storage_with(&self, other: &Context) -> bool {
    Arc::ptr_eq(&self.data, &other.data)
  }
}

#[cfg(feature = "serde-support")]
impl serde::Serialize for Context {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
      where S: serde::Serializer
  {
    serializer.collect_map(self.data.iter())
  }
}
