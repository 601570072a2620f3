//! Shared model and client-side logic for the admin dashboard.
//!
//! Everything here is free of browser APIs so it can be exercised natively
//! with `cargo test -p common`; the `frontend` crate wires it into Yew.

pub mod cache;
pub mod editor;
pub mod error;
pub mod grid;
pub mod model;
pub mod requests;
