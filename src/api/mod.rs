//! HTTP API Client
//!
//! Typed async functions over the EMS REST API.

pub mod client;

pub use client::*;
