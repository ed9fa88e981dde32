//! Operational endpoints: readiness, file server hit count and dev-only reset.

pub mod controller;
pub mod router;
