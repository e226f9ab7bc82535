//! Primary layer for running SwapFlow dialogues
//!
//! A [`FlowEngine`] holds the step and path registries and moves a [`Session`] through them,
//! one inbound message at a time. The [`Dispatcher`] decides which messages belong to a dialogue
//! and keeps one session per chat in a [`SessionStore`].

mod errors;
pub use errors::Error;

mod config;
pub use config::FlowConfig;

mod history;
pub use history::{ History, Snapshot };

mod session;
pub use session::{ Session, Position, SessionStore };

mod engine;
pub use engine::FlowEngine;

mod dispatcher;
pub use dispatcher::{ Dispatcher, Dispatch };

#[cfg(test)]
mod test;
