//! SwapFlow walks a chat user through placing an exchange order, one question at a time.
//!
//! Build a [`FlowEngine`] from a [`FlowConfig`] and the exchange-side [`Services`](action::Services),
//! then feed every inbound message to a [`Dispatcher`]. Replies go out through your [`Transport`](action::Transport).

// include commonly used traits
pub mod prelude {
  pub use swapflow_base::ObjectStoreContent;
  pub use swapflow_action::{Action, EscapedString, Transport, Pricing, OrderDesk, QrDecoder};
}

pub mod object {
  pub use swapflow_base::{ObjectStore, IdError};
}

pub mod data {
  pub use swapflow_data::{Context, Input, Key, Value};
  pub use swapflow_data::{Amount, Currency, ExchangeMode, Photo};
  pub use swapflow_data::InvalidValue;
}

pub mod step {
  pub use swapflow_step::{Step, StepId, Path, PathId};
  pub use swapflow_step::{Answer, Rule, Prompt, Template, Layout};
  pub use swapflow_step::catalog;
}

pub mod action {
  pub use swapflow_action::{ActionResult, ActionError};
  pub use swapflow_action::{PromptAction, EstimateAction, AddressAction, FinalizeOrderAction};
  pub use swapflow_action::{Reply, Keyboard, Button};
  pub use swapflow_action::{Services, Transport, Pricing, OrderDesk, QrDecoder};
  pub use swapflow_action::{AmountSide, Quote, OrderRequest, Order, ServiceError, DecodeError};
  pub use swapflow_action::{HtmlEscapedString, UriEscapedString};
}

pub use swapflow_base::ChatId;
pub use swapflow_session::{FlowConfig, FlowEngine, Dispatcher, Dispatch};
pub use swapflow_session::{Session, SessionStore, Position, History, Snapshot};
pub use swapflow_session::Error;
