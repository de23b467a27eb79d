//! Journal data model.
//!
//! Trades plus the strategy/account reference data they point at. The
//! engine only reads these; creating and mutating them belongs to the
//! persistence layer.

mod labels;
mod reference;
mod trade;

pub use labels::{CONFIRMATION_OPTIONS, ConfirmationSet, TagSet, is_known_confirmation, tag_key};
pub use reference::{Account, AccountType, PreferredDirection, Strategy};
pub use trade::{Direction, Session, Trade};

#[cfg(test)]
pub(crate) use trade::fixtures;
