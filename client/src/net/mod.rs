//! Networking modules for the SalesSpark backend API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues typed REST calls, `sync` sequences refreshes into view slots,
//! `error` classifies failures, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod sync;
pub mod types;
