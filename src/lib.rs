//! Homepage backend.
//!
//! Session authentication with email and password credentials, and a small RPC API whose
//! handlers receive a per-request context built from the shared database handle, the injected
//! services and the caller's session.

pub mod model;
pub mod server;
