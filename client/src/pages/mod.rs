//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (which slots exist, when they
//! refresh) and delegates rendering details to `components`.

pub mod copilot;
pub mod dashboard;
pub mod deal_tools;
pub mod generators;
pub mod market;
pub mod prediction;
