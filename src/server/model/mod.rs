//! Server application models and type definitions.
//!
//! Application state, database model type aliases, session data wrappers and the
//! per-request context handed to RPC handlers.

pub mod app;
pub mod context;
pub mod db;
pub mod session;
