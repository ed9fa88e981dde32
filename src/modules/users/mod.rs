//! Account creation and self-service profile updates.

pub mod controller;
pub mod router;
pub mod service;
