//! EMS Portal
//!
//! Employee management front end built with Leptos (WASM).
//!
//! # Features
//!
//! - Token-based sign in with persistent sessions
//! - Work-log entry and approval workflow
//! - Dashboard statistics
//! - Monthly payroll reporting for administrators
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data lives on the EMS REST API; the client keeps a thin
//! reactive cache and re-fetches after every mutation.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
