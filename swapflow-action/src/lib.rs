//! Actions for SwapFlow
//!
//! An [`Action`] produces the [`Reply`] shown when a dialogue reaches a [`Step`](swapflow_step::Step).
//! The [`PromptAction`] renders any step with a prompt; the others call out to the exchange through the
//! collaborator traits in [`Services`].
//!
//! Pre-built Actions include
//! - [`PromptAction`]
//! - [`EstimateAction`]
//! - [`AddressAction`]
//! - [`FinalizeOrderAction`]

mod error;
pub use error::{ActionError, ServiceError, DecodeError, TemplateError};

mod string_template;
pub use string_template::{render_template, EscapedString, HtmlEscapedString, UriEscapedString};

pub mod style;

mod reply;
pub use reply::{Reply, Keyboard, Button};

mod service;
pub use service::{Services, Transport, Pricing, OrderDesk, QrDecoder, AmountSide, Quote, OrderRequest, Order, address_from_payload, payment_uri};

mod action;
pub use action::{Action, ActionResult, PromptAction, EstimateAction, AddressAction, FinalizeOrderAction};

#[cfg(test)]
pub(crate) mod test;
