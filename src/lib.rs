//! Sick-Leave Absence Cost Engine
//!
//! This crate estimates what employee sick-leave absence costs an organization
//! during the employer-financed period, and what lowering the absence rate
//! would save. The calculation is a pure mapping from one scenario struct to
//! one cost breakdown; the HTTP API is a thin stateless wrapper around it.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
