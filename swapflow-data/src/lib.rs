//! Data-related components for SwapFlow
//!
//! A dialogue collects typed [`Value`]s under fixed [`Key`]s into a [`Context`].
//! Values validate themselves on creation, typically via [`std::str::FromStr`].

mod error;
pub use error::InvalidValue;

mod key;
pub use key::Key;

mod value;
pub use value::{ Value, Amount, Currency, ExchangeMode, Photo };

mod context;
pub use context::Context;

mod input;
pub use input::Input;
