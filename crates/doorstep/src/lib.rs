//! Core library for the Doorstep home services marketplace.
//!
//! The crate owns the ordering domain (cart, checkout, request wizard, order
//! tracking) and the service catalog backing it. HTTP routing for the ordering
//! endpoints lives here too so the API binary stays a thin shell.

pub mod catalog;
pub mod config;
pub mod error;
pub mod ordering;
pub mod telemetry;
