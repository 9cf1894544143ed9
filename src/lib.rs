//! Swatchmatch - nearest spot colors for any hex/RGB color
//!
//! HTTP service and CLI around the `swatch-color` matching library.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
