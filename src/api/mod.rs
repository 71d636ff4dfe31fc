//! API Layer
//!
//! Thin HTTP passthroughs to the inventory backend.

pub mod client;

pub use client::*;
