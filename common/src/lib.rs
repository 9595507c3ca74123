//! Shared business-card domain for the SPA and its host.
//!
//! Everything in this crate is target independent: the frontend compiles it to
//! wasm32, the server and the test suite compile it natively. Browser concerns
//! (file pickers, fetch, downloads) stay in `frontend`; this crate only sees
//! strings and bytes.

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod import;
pub mod listing;
pub mod model;
pub mod photo;
pub mod session;
pub mod submit;

pub use error::{CardError, Result};
