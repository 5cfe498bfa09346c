//! AI weather gateway: library crate for the request gateway.
//!
//! Exposes the router, state, and provider clients so the binary
//! (`main.rs`) and the end-to-end tests can wire them together.

pub mod city;
pub mod config;
pub mod error;
pub mod nlp;
pub mod routes;
pub mod state;
pub mod weather;
