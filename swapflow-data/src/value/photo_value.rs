use std::sync::Arc;

/// An uploaded image. Bytes are shared so snapshots holding the same photo don't copy it.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
  bytes: Arc<[u8]>,
  caption: Option<String>,
}

impl Photo {
  pub fn new<B>(bytes: B, caption: Option<String>) -> Self
      where B: Into<Arc<[u8]>>
  {
    Photo { bytes: bytes.into(), caption }
  }

  pub fn bytes(&self) -> &[u8] {
    &self.bytes
  }

  pub fn caption(&self) -> Option<&str> {
    self.caption.as_deref()
  }
}
