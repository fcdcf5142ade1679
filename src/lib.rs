//! Harsnip library crate.
//!
//! The stable, supported API surface is exposed via [`crate::api`] and
//! [`crate::prelude`]. These modules are intended for embedding harsnip in
//! Rust applications and follow SemVer.
//!
//! Other modules are used by the CLI implementation and may change more
//! frequently.

pub mod api;
pub mod prelude;

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod har;
pub mod logging;
pub mod router;
