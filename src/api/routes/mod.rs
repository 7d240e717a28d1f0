//! API Routes
//!
//! Route handlers organized by functionality.

pub mod articles;
pub mod dataset;
pub mod directory;
pub mod health;
