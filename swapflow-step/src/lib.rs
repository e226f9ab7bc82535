//! Steps for SwapFlow
//!
//! A dialogue is broken down into [`Step`]s, each asking the user one question.
//! A [`Path`] lists the order steps are visited in; the [`catalog`] holds the standard exchange dialogue.

mod step;
pub use step::{ Step, StepId, Answer, Rule, Prompt, Template, Layout };

mod path;
pub use path::{ Path, PathId };

pub mod catalog;
