//! State Management
//!
//! Global reactive state shared through Leptos context.

pub mod global;
