//! Short posts: create, list, fetch and author-only delete.

pub mod controller;
pub mod router;
pub mod service;
