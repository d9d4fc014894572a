//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire schema, and
//! `error` is the failure taxonomy both flows resolve into.

pub mod api;
pub mod error;
pub mod types;
