//! Server application core modules.
//!
//! HTTP routing, request contexts, credential authentication, the database session store
//! and the RPC procedures.

pub mod api;
pub mod config;
pub mod context;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod rpc;
pub mod service;
pub mod startup;
pub mod util;
