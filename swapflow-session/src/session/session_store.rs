use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use swapflow_base::ChatId;
use super::Session;
use crate::Error;

/// Sessions keyed by chat id.
///
/// Each session sits behind its own mutex so one chat's messages are handled one at a time
/// while other chats carry on.
#[derive(Debug, Default)]
pub struct SessionStore {
  sessions: RwLock<HashMap<ChatId, Arc<Mutex<Session>>>>,
}

impl SessionStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, chat_id: &ChatId) -> Result<Option<Arc<Mutex<Session>>>, Error> {
    let sessions = self.sessions.read().map_err(|_e| Error::Poisoned)?;
    Ok(sessions.get(chat_id).cloned())
  }

  pub fn get_or_create(&self, chat_id: ChatId) -> Result<Arc<Mutex<Session>>, Error> {
    if let Some(session) = self.get(&chat_id)? {
      return Ok(session);
    }
    let mut sessions = self.sessions.write().map_err(|_e| Error::Poisoned)?;
    let session = sessions
      .entry(chat_id)
      .or_insert_with(|| Arc::new(Mutex::new(Session::new(chat_id))));
    Ok(session.clone())
  }

  pub fn remove(&self, chat_id: &ChatId) -> Result<Option<Arc<Mutex<Session>>>, Error> {
    let mut sessions = self.sessions.write().map_err(|_e| Error::Poisoned)?;
    Ok(sessions.remove(chat_id))
  }

  pub fn len(&self) -> Result<usize, Error> {
    let sessions = self.sessions.read().map_err(|_e| Error::Poisoned)?;
    Ok(sessions.len())
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;
  use swapflow_base::ChatId;
  use swapflow_test_util::test_id;
  use super::SessionStore;

  #[test]
  fn one_session_per_chat() {
    let store = SessionStore::new();
    let chat1 = test_id!(ChatId);
    let chat2 = test_id!(ChatId);

    let s1 = store.get_or_create(chat1).unwrap();
    let s1_again = store.get_or_create(chat1).unwrap();
    assert!(Arc::ptr_eq(&s1, &s1_again));

    let s2 = store.get_or_create(chat2).unwrap();
    assert!(!Arc::ptr_eq(&s1, &s2));
    assert_eq!(s2.lock().unwrap().chat_id(), chat2);
    assert_eq!(store.len().unwrap(), 2);

    assert!(store.remove(&chat1).unwrap().is_some());
    assert!(store.get(&chat1).unwrap().is_none());
  }
}
