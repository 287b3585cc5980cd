//! Client application state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (persisted counters, chat widget) so each
//! context can be provided and updated independently.

pub mod chat;
pub mod counters;
