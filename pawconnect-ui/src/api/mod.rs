//! API Module
//!
//! HTTP client for the optional PawConnect server.

mod client;

pub use client::*;
