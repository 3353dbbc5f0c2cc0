//! Shop state, the mutator and the runtime that owns them.

pub mod action;
pub mod catalog;
pub mod runtime;
pub mod state;
pub mod update;

#[cfg(test)]
pub(crate) mod testing;

pub use action::{Action, ActionParseError};
pub use runtime::{Shop, ShopError};
pub use state::{ShopState, StatePatch};
pub use update::{Effect, Message, Transition, update};
