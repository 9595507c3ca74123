//! # Host services
//!
//! The host has no business logic of its own: card storage lives behind the
//! remote API. It publishes the runtime configuration the SPA reads at boot
//! and serves the embedded frontend bundle for every other path.
//!
//! ## Sub-modules:
//! - `app_config`: `GET /app-config.json`.
//! - `assets`: embedded `static/dist` files with an `index.html` fallback for
//!   client-side routes.

pub mod app_config;
pub mod assets;
