//! Inbound events from the Polka payment provider.

pub mod controller;
pub mod router;
